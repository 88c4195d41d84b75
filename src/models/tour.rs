//! Closed tour type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::StopId;
use crate::distance::DistanceMatrix;
use crate::error::{LookupError, RoutingError};

/// A closed tour: depot, each waypoint once, depot again.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Stop, StopId, Tour};
/// use u_tour::distance::DistanceMatrix;
///
/// let stops = vec![Stop::new(0, 0, "depot"), Stop::new(3, 4, "a")];
/// let dm = DistanceMatrix::from_stops(&stops);
///
/// let tour = Tour::closed(&[StopId::new(1)]);
/// assert_eq!(tour.num_legs(), 2);
/// assert_eq!(tour.cost(&dm).unwrap(), 10.0);
/// ```
///
/// Serializes as the id sequence; deserializing goes through
/// [`Tour::from_stop_ids`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<StopId>", into = "Vec<StopId>")]
pub struct Tour {
    stops: Vec<StopId>,
}

impl Tour {
    /// Builds `[depot] + waypoints + [depot]`.
    pub fn closed(waypoints: &[StopId]) -> Self {
        let mut stops = Vec::with_capacity(waypoints.len() + 2);
        stops.push(StopId::DEPOT);
        stops.extend_from_slice(waypoints);
        stops.push(StopId::DEPOT);
        Self { stops }
    }

    /// Checks a full id sequence: depot at both ends, no depot or repeated
    /// waypoint in between.
    pub fn from_stop_ids(stops: Vec<StopId>) -> Result<Self, RoutingError> {
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return Err(RoutingError::MalformedTour("no stops"));
        };
        if stops.len() < 2 || !first.is_depot() || !last.is_depot() {
            return Err(RoutingError::MalformedTour("must start and end at the depot"));
        }
        let interior = &stops[1..stops.len() - 1];
        let mut seen = HashSet::with_capacity(interior.len());
        for id in interior {
            if id.is_depot() || !seen.insert(*id) {
                return Err(RoutingError::MalformedTour("waypoints must be visited once"));
            }
        }
        Ok(Self { stops })
    }

    /// All stop ids in visit order, depot at both ends.
    pub fn stop_ids(&self) -> &[StopId] {
        &self.stops
    }

    /// Waypoint ids in visit order (depot excluded).
    pub fn waypoints(&self) -> &[StopId] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of legs (`waypoints + 1`).
    pub fn num_legs(&self) -> usize {
        self.stops.len() - 1
    }

    /// Directed legs in visit order.
    pub fn legs(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total tour length.
    pub fn cost(&self, distances: &DistanceMatrix) -> Result<f64, LookupError> {
        let mut total = 0.0;
        for (from, to) in self.legs() {
            total += distances.distance(from, to)?;
        }
        Ok(total)
    }

    /// Running total after each leg. The last entry equals [`Tour::cost`].
    pub fn cumulative_distances(&self, distances: &DistanceMatrix) -> Result<Vec<f64>, LookupError> {
        let mut running = 0.0;
        self.legs()
            .map(|(from, to)| -> Result<f64, LookupError> {
                running += distances.distance(from, to)?;
                Ok(running)
            })
            .collect()
    }
}

impl TryFrom<Vec<StopId>> for Tour {
    type Error = RoutingError;

    fn try_from(stops: Vec<StopId>) -> Result<Self, RoutingError> {
        Self::from_stop_ids(stops)
    }
}

impl From<Tour> for Vec<StopId> {
    fn from(tour: Tour) -> Self {
        tour.stops
    }
}
