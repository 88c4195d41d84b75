//! Stop and stop index types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a stop within an ordered stop sequence.
///
/// Index 0 is the depot; waypoints follow in input order. Distance
/// lookups are keyed by this index rather than by [`Stop::identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(usize);

impl StopId {
    /// The depot's index.
    pub const DEPOT: StopId = StopId(0);

    /// Wraps a raw index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index into the stop sequence.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns `true` for the depot.
    pub fn is_depot(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point on the integer plane with a caller-supplied identity
/// (typically a street address).
///
/// # Examples
///
/// ```
/// use u_tour::models::Stop;
///
/// let post_office = Stop::new(0, 2, "Post office");
/// let bakery = Stop::new(3, 6, "Bakery");
/// assert_eq!(post_office.identity(), "Post office");
/// assert!((post_office.distance_to(&bakery) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stop {
    x: i64,
    y: i64,
    identity: String,
}

impl Stop {
    /// Creates a stop.
    pub fn new(x: i64, y: i64, identity: impl Into<String>) -> Self {
        Self {
            x,
            y,
            identity: identity.into(),
        }
    }

    /// X-coordinate.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Caller-supplied identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Euclidean distance to another stop.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i64, i64, String)> for Stop {
    fn from((x, y, identity): (i64, i64, String)) -> Self {
        Self { x, y, identity }
    }
}

impl From<(i64, i64, &str)> for Stop {
    fn from((x, y, identity): (i64, i64, &str)) -> Self {
        Self::new(x, y, identity)
    }
}
