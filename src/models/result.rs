//! Optimization result type.

use std::fmt;

use serde::Serialize;

use super::{Stop, Tour};

/// The minimal tour found by a search, materialized into stops.
///
/// `stops` begins and ends with the depot. `leg_distances[i]` is the
/// running total after travelling from `stops[i]` to `stops[i + 1]`.
///
/// The [`Display`](fmt::Display) form renders the classic one-line summary:
///
/// ```text
/// (0, 2) -> (5, 2)[5.0] -> (8, 3)[8.16227766016838] -> ... -> (0, 2)[19.49648583671402] = 19.49648583671402
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    tour: Tour,
    stops: Vec<Stop>,
    leg_distances: Vec<f64>,
    total_distance: f64,
    permutations_evaluated: u64,
}

impl OptimizationResult {
    pub(crate) fn new(
        tour: Tour,
        stops: Vec<Stop>,
        leg_distances: Vec<f64>,
        permutations_evaluated: u64,
    ) -> Self {
        let total_distance = leg_distances.last().copied().unwrap_or(0.0);
        Self {
            tour,
            stops,
            leg_distances,
            total_distance,
            permutations_evaluated,
        }
    }

    /// The winning tour as stop ids.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Stops in visit order, depot at both ends.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Cumulative distance after each leg.
    pub fn leg_distances(&self) -> &[f64] {
        &self.leg_distances
    }

    /// Total tour length.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of candidate tours scored (`n!` for `n` waypoints).
    pub fn permutations_evaluated(&self) -> u64 {
        self.permutations_evaluated
    }
}

impl fmt::Display for OptimizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(start) = self.stops.first() else {
            return Ok(());
        };
        write!(f, "({}, {})", start.x(), start.y())?;
        for (stop, distance) in self.stops[1..].iter().zip(&self.leg_distances) {
            write!(f, " -> ({}, {})[{}]", stop.x(), stop.y(), Distance(*distance))?;
        }
        write!(f, " = {}", Distance(self.total_distance))
    }
}

/// Shortest round-trip rendering of a distance: `5.0`, `8.16227766016838`,
/// and `1e+16` / `2.5e-07` outside `[1e-4, 1e16)`.
struct Distance(f64);

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing ".0" and switches to exponent form at the
        // same thresholds; only the exponent needs a sign and two digits
        let text = format!("{:?}", self.0);
        match text.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StopId;

    fn sample() -> OptimizationResult {
        let depot = Stop::new(0, 0, "d");
        let a = Stop::new(3, 4, "a");
        OptimizationResult::new(
            Tour::closed(&[StopId::new(1)]),
            vec![depot.clone(), a, depot],
            vec![5.0, 10.0],
            1,
        )
    }

    #[test]
    fn test_total_is_last_cumulative() {
        let r = sample();
        assert_eq!(r.total_distance(), 10.0);
        assert_eq!(r.leg_distances(), &[5.0, 10.0]);
        assert_eq!(r.stops().len(), 3);
        assert_eq!(r.permutations_evaluated(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "(0, 0) -> (3, 4)[5.0] -> (0, 0)[10.0] = 10.0");
    }

    #[test]
    fn test_display_depot_only() {
        let depot = Stop::new(-1, 7, "d");
        let r = OptimizationResult::new(Tour::closed(&[]), vec![depot.clone(), depot], vec![0.0], 1);
        assert_eq!(r.to_string(), "(-1, 7) -> (-1, 7)[0.0] = 0.0");
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).expect("serializes");
        assert_eq!(value["tour"], serde_json::json!([0, 1, 0]));
        assert_eq!(value["total_distance"], 10.0);
        assert_eq!(value["stops"][1]["identity"], "a");
    }

    #[test]
    fn test_distance_rendering() {
        let cases = [
            (0.0, "0.0"),
            (5.0, "5.0"),
            (19.49648583671402, "19.49648583671402"),
            (1e15, "1000000000000000.0"),
            (1e16, "1e+16"),
            (1.5e16, "1.5e+16"),
            (2.5e18, "2.5e+18"),
            (1e100, "1e+100"),
            (0.0001, "0.0001"),
            (2.5e-7, "2.5e-07"),
        ];
        for (value, expected) in cases {
            assert_eq!(Distance(value).to_string(), expected);
        }
    }

    #[test]
    fn test_display_large_coordinates() {
        let depot = Stop::new(0, 0, "d");
        let far = Stop::new(10_000_000_000_000_000, 0, "far");
        let r = OptimizationResult::new(
            Tour::closed(&[StopId::new(1)]),
            vec![depot.clone(), far, depot],
            vec![1e16, 2e16],
            1,
        );
        assert_eq!(
            r.to_string(),
            "(0, 0) -> (10000000000000000, 0)[1e+16] -> (0, 0)[2e+16] = 2e+16"
        );
    }
}
