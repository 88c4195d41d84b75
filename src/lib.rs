//! # u-tour
//!
//! Exact closed-tour optimization for small waypoint sets: starting from a
//! depot, visit every waypoint once and return, minimizing total Euclidean
//! distance by exhaustive search.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Stop, StopSet, Tour, OptimizationResult)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`permutation`] — Heap's permutation enumeration
//! - [`optimizer`] — Exhaustive tour search with deterministic tie-breaking
//! - [`error`] — Error types

pub mod distance;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod permutation;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{LookupError, Result, RoutingError};
