//! Exhaustive closed-tour search.
//!
//! # Algorithm
//!
//! Every permutation `p` of the waypoints (Heap's order) is scored as the
//! closed tour `depot → p → depot`, summing matrix distances leg by leg.
//! The running best starts at `(+∞, empty)` and is replaced only on a
//! strict improvement, so among equal-cost tours the earliest-generated
//! permutation wins. The result is reproducible bit for bit.
//!
//! # Complexity
//!
//! O(n! · n) time, O(n) working memory beyond the O(n²) matrix.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use super::OptimizerConfig;
use crate::distance::DistanceMatrix;
use crate::error::{LookupError, Result, RoutingError};
use crate::models::{OptimizationResult, Stop, StopId, StopSet, Tour};
use crate::permutation::{for_each_permutation, permutation_count};

/// Finds the shortest closed tour from a depot through every waypoint.
///
/// # Examples
///
/// ```
/// use u_tour::models::StopSet;
/// use u_tour::optimizer::RouteOptimizer;
///
/// let stops = StopSet::from_tuples([
///     (0, 2, "Post office"),
///     (2, 5, "104/25 Griboyedov Canal"),
///     (5, 2, "221B Baker Street"),
///     (6, 6, "302-bis Bolshaya Sadovaya"),
///     (8, 3, "742 Evergreen Terrace"),
/// ])
/// .unwrap();
///
/// let result = RouteOptimizer::default().solve(&stops).unwrap();
/// assert_eq!(result.stops()[1].identity(), "221B Baker Street");
/// assert_eq!(result.total_distance(), 19.49648583671402);
/// assert_eq!(result.permutations_evaluated(), 24);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

/// Running best during a search.
struct BestTour {
    cost: f64,
    waypoints: Vec<StopId>,
    cumulative: Vec<f64>,
}

impl RouteOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Builds the distance matrix for a validated stop set and searches it.
    pub fn solve(&self, stops: &StopSet) -> Result<OptimizationResult> {
        let distances = DistanceMatrix::from_stops(stops.stops());
        self.optimize(stops.depot(), stops.waypoints(), &distances)
    }

    /// Searches every waypoint ordering for the minimal closed tour.
    ///
    /// `distances` must have been built over `[depot] ++ waypoints`, in that
    /// order: stop `i` of `waypoints` is [`StopId`] `i + 1`.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::TooManyWaypoints`] above the configured limit
    /// - [`RoutingError::MatrixSizeMismatch`] if `distances` covers a
    ///   different number of stops
    /// - [`RoutingError::StopMismatch`] if `depot` or a waypoint is not the
    ///   stop `distances` holds at that index
    /// - [`RoutingError::Lookup`] if a leg falls outside `distances`
    pub fn optimize(
        &self,
        depot: &Stop,
        waypoints: &[Stop],
        distances: &DistanceMatrix,
    ) -> Result<OptimizationResult> {
        let n = waypoints.len();
        if n > self.config.max_waypoints() {
            return Err(RoutingError::TooManyWaypoints {
                count: n,
                limit: self.config.max_waypoints(),
            });
        }
        if distances.size() != n + 1 {
            return Err(RoutingError::MatrixSizeMismatch {
                expected: n + 1,
                actual: distances.size(),
            });
        }
        for (i, stop) in std::iter::once(depot).chain(waypoints).enumerate() {
            let id = StopId::new(i);
            if !distances.covers(id, stop) {
                return Err(RoutingError::StopMismatch {
                    id,
                    identity: stop.identity().to_owned(),
                });
            }
        }

        debug!(
            depot = depot.identity(),
            waypoints = n,
            candidates = ?permutation_count(n),
            "starting exhaustive tour search"
        );

        let mut order: Vec<StopId> = (1..=n).map(StopId::new).collect();
        let mut best = BestTour {
            cost: f64::INFINITY,
            waypoints: Vec::new(),
            cumulative: Vec::new(),
        };
        let mut scratch = Vec::with_capacity(n + 1);
        let mut evaluated: u64 = 0;

        let flow = for_each_permutation(&mut order, |perm| {
            evaluated += 1;
            let cost = match score(perm, distances, &mut scratch) {
                Ok(cost) => cost,
                Err(err) => return ControlFlow::Break(err),
            };
            if cost < best.cost {
                trace!(cost, candidate = evaluated, "improved tour");
                best.cost = cost;
                best.waypoints.clear();
                best.waypoints.extend_from_slice(perm);
                best.cumulative.clone_from(&scratch);
            }
            ControlFlow::Continue(())
        });
        if let ControlFlow::Break(err) = flow {
            return Err(err.into());
        }

        let tour = Tour::closed(&best.waypoints);
        let stops = tour
            .stop_ids()
            .iter()
            .map(|id| match id.index() {
                0 => depot.clone(),
                i => waypoints[i - 1].clone(),
            })
            .collect();

        debug!(total = best.cost, evaluated, "tour search finished");
        Ok(OptimizationResult::new(tour, stops, best.cumulative, evaluated))
    }
}

/// Scores `depot → waypoints → depot`, writing the running total after each
/// leg into `cumulative`.
fn score(
    waypoints: &[StopId],
    distances: &DistanceMatrix,
    cumulative: &mut Vec<f64>,
) -> std::result::Result<f64, LookupError> {
    cumulative.clear();
    let mut prev = StopId::DEPOT;
    let mut total = 0.0;
    for &next in waypoints.iter().chain(std::iter::once(&StopId::DEPOT)) {
        total += distances.distance(prev, next)?;
        cumulative.push(total);
        prev = next;
    }
    Ok(total)
}
