//! Validated stop sequence.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Stop;
use crate::error::{Result, RoutingError};

/// An ordered, validated stop sequence whose first element is the depot.
///
/// Construction checks every element: the sequence must be non-empty and
/// all identities must be unique.
///
/// Deserializes from a JSON array of `[x, y, "identity"]` triples.
///
/// # Examples
///
/// ```
/// use u_tour::models::StopSet;
///
/// let set = StopSet::from_tuples([
///     (0, 2, "Post office"),
///     (8, 3, "742 Evergreen Terrace"),
///     (5, 2, "221B Baker Street"),
/// ])
/// .unwrap();
/// assert_eq!(set.depot().identity(), "Post office");
/// assert_eq!(set.waypoints().len(), 2);
///
/// assert!(StopSet::from_tuples([(0, 0, "A"), (1, 1, "A")]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<(i64, i64, String)>",
    into = "Vec<(i64, i64, String)>"
)]
pub struct StopSet {
    stops: Vec<Stop>,
}

impl StopSet {
    /// Validates a stop sequence. The first stop is the depot.
    pub fn new(stops: Vec<Stop>) -> Result<Self> {
        if stops.is_empty() {
            return Err(RoutingError::EmptyInput);
        }
        check_unique(&stops)?;
        Ok(Self { stops })
    }

    /// Validates a sequence of `(x, y, identity)` triples.
    pub fn from_tuples<I, S>(tuples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64, S)>,
        S: Into<String>,
    {
        Self::new(
            tuples
                .into_iter()
                .map(|(x, y, identity)| Stop::new(x, y, identity))
                .collect(),
        )
    }

    /// The depot (first stop).
    pub fn depot(&self) -> &Stop {
        &self.stops[0]
    }

    /// Stops after the depot, in input order.
    pub fn waypoints(&self) -> &[Stop] {
        &self.stops[1..]
    }

    /// All stops, depot first.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops including the depot.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; a validated set holds at least the depot.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

fn check_unique(stops: &[Stop]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(stops.len());
    for (pos, stop) in stops.iter().enumerate() {
        if let Some(&first) = seen.get(stop.identity()) {
            return Err(RoutingError::DuplicateIdentity {
                identity: stop.identity().to_owned(),
                first,
                second: pos,
            });
        }
        seen.insert(stop.identity(), pos);
    }
    Ok(())
}

impl TryFrom<Vec<(i64, i64, String)>> for StopSet {
    type Error = RoutingError;

    fn try_from(tuples: Vec<(i64, i64, String)>) -> Result<Self> {
        Self::new(tuples.into_iter().map(Stop::from).collect())
    }
}

impl From<StopSet> for Vec<(i64, i64, String)> {
    fn from(set: StopSet) -> Self {
        set.stops
            .into_iter()
            .map(|stop| (stop.x(), stop.y(), stop.identity().to_owned()))
            .collect()
    }
}

impl TryFrom<Vec<Stop>> for StopSet {
    type Error = RoutingError;

    fn try_from(stops: Vec<Stop>) -> Result<Self> {
        Self::new(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_is_first() {
        let set = StopSet::from_tuples([(2, 5, "B"), (0, 2, "A")]).expect("valid");
        assert_eq!(set.depot().identity(), "B");
        assert_eq!(set.waypoints(), &[Stop::new(0, 2, "A")]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_depot_only() {
        let set = StopSet::from_tuples([(1, 1, "depot")]).expect("valid");
        assert!(set.waypoints().is_empty());
        assert_eq!(set.stops(), &[Stop::new(1, 1, "depot")]);
    }

    #[test]
    fn test_empty_rejected() {
        let empty: Vec<(i64, i64, &str)> = Vec::new();
        assert_eq!(StopSet::from_tuples(empty), Err(RoutingError::EmptyInput));
    }

    #[test]
    fn test_duplicate_after_first_rejected() {
        // every element is checked, not just the depot
        let err = StopSet::from_tuples([(0, 0, "D"), (1, 0, "X"), (2, 0, "Y"), (3, 0, "X")])
            .expect_err("duplicate");
        assert_eq!(
            err,
            RoutingError::DuplicateIdentity {
                identity: "X".into(),
                first: 1,
                second: 3,
            }
        );
    }

    #[test]
    fn test_duplicate_coordinates_allowed() {
        let set = StopSet::from_tuples([(0, 0, "D"), (0, 0, "same spot")]).expect("valid");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_deserialize_triples() {
        let set: StopSet =
            serde_json::from_str(r#"[[0, 2, "Post office"], [5, 2, "221B"]]"#).expect("valid");
        assert_eq!(set.depot(), &Stop::new(0, 2, "Post office"));
        assert_eq!(set.waypoints()[0], Stop::new(5, 2, "221B"));
    }

    #[test]
    fn test_serialize_as_triples() {
        let set = StopSet::from_tuples([(0, 2, "A"), (5, 2, "B")]).expect("valid");
        let json = serde_json::to_string(&set).expect("serializes");
        assert_eq!(json, r#"[[0,2,"A"],[5,2,"B"]]"#);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let res: std::result::Result<StopSet, _> =
            serde_json::from_str(r#"[[0, 2, "A"], [5, 2, "A"]]"#);
        assert!(res.is_err());
    }
}
