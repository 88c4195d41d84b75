//! Exact tour optimization.
//!
//! - [`RouteOptimizer`] — exhaustive search over all waypoint orderings, O(n!·n)
//! - [`OptimizerConfig`] — search limits

mod brute_force;
mod config;

pub use brute_force::RouteOptimizer;
pub use config::{OptimizerConfig, DEFAULT_MAX_WAYPOINTS};
