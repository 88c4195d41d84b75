//! Optimizer configuration.

use serde::{Deserialize, Serialize};

/// Default waypoint limit: 12! ≈ 4.8 × 10⁸ candidate tours.
pub const DEFAULT_MAX_WAYPOINTS: usize = 12;

/// Settings for [`RouteOptimizer`](super::RouteOptimizer).
///
/// Missing fields take their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use u_tour::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default().with_max_waypoints(8);
/// assert_eq!(config.max_waypoints(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    max_waypoints: usize,
}

impl OptimizerConfig {
    /// Sets the largest waypoint count the optimizer will search.
    pub fn with_max_waypoints(mut self, max: usize) -> Self {
        self.max_waypoints = max;
        self
    }

    /// Largest waypoint count (depot excluded) accepted by a search.
    pub fn max_waypoints(&self) -> usize {
        self.max_waypoints
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
        }
    }
}
