//! Error types.

use thiserror::Error;

use crate::models::StopId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// A distance was requested for a stop pair outside the matrix's
/// construction set.
///
/// This is an integration error on the caller's side (e.g. a matrix built
/// over a different stop set) and is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no distance for stop pair ({from}, {to}): matrix covers {size} stops")]
pub struct LookupError {
    /// Origin of the requested leg.
    pub from: StopId,
    /// Destination of the requested leg.
    pub to: StopId,
    /// Number of stops the matrix was built over.
    pub size: usize,
}

/// Errors raised while validating input or searching for a tour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Distance lookup outside the matrix.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The stop sequence had no depot.
    #[error("stop sequence is empty: the first stop is the depot")]
    EmptyInput,

    /// Two stops share an identity.
    #[error("identity {identity:?} appears at positions {first} and {second}")]
    DuplicateIdentity {
        /// The repeated identity.
        identity: String,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        second: usize,
    },

    /// Exhaustive search was refused for an oversized waypoint set.
    #[error("{count} waypoints exceeds the configured limit of {limit}")]
    TooManyWaypoints {
        /// Waypoints supplied (depot excluded).
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// A stop differs from the one the matrix holds at its index.
    #[error("stop {identity:?} at {id} is not the stop the distance matrix was built over")]
    StopMismatch {
        /// Index of the mismatching stop.
        id: StopId,
        /// Identity of the supplied stop.
        identity: String,
    },

    /// A tour that is not closed at the depot or repeats a waypoint.
    #[error("malformed tour: {0}")]
    MalformedTour(&'static str),

    /// The matrix was not built over `[depot] ++ waypoints`.
    #[error("distance matrix covers {actual} stops, expected {expected}")]
    MatrixSizeMismatch {
        /// `1 + waypoints.len()`.
        expected: usize,
        /// `matrix.size()`.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_message() {
        let err = LookupError {
            from: StopId::new(0),
            to: StopId::new(7),
            size: 3,
        };
        assert_eq!(
            err.to_string(),
            "no distance for stop pair (#0, #7): matrix covers 3 stops"
        );
    }

    #[test]
    fn test_lookup_converts_transparently() {
        let err = LookupError {
            from: StopId::new(1),
            to: StopId::new(2),
            size: 1,
        };
        let routing: RoutingError = err.into();
        assert_eq!(routing.to_string(), err.to_string());
        assert_eq!(routing, RoutingError::Lookup(err));
    }

    #[test]
    fn test_stop_mismatch_message() {
        let err = RoutingError::StopMismatch {
            id: StopId::new(2),
            identity: "B".into(),
        };
        assert_eq!(
            err.to_string(),
            "stop \"B\" at #2 is not the stop the distance matrix was built over"
        );
    }

    #[test]
    fn test_duplicate_identity_message() {
        let err = RoutingError::DuplicateIdentity {
            identity: "A".into(),
            first: 1,
            second: 3,
        };
        assert_eq!(err.to_string(), "identity \"A\" appears at positions 1 and 3");
    }
}
