//! Domain model types for closed-tour search.
//!
//! Stops on the integer plane, the validated stop sequence (depot first),
//! tours as sequences of stop indices, and the materialized search result.

mod result;
mod stop;
mod stop_set;
mod tour;

pub use result::OptimizationResult;
pub use stop::{Stop, StopId};
pub use stop_set::StopSet;
pub use tour::Tour;
