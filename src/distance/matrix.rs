//! Dense Euclidean distance matrix.

use crate::error::LookupError;
use crate::models::{Stop, StopId};

/// A dense n×n distance matrix stored in row-major order, keyed by
/// [`StopId`].
///
/// Built once over the full stop sequence (depot first). Entries are
/// Euclidean distances, so the matrix is symmetric with a zero diagonal.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Stop, StopId};
/// use u_tour::distance::DistanceMatrix;
///
/// let stops = vec![
///     Stop::new(0, 0, "depot"),
///     Stop::new(3, 4, "a"),
///     Stop::new(6, 8, "b"),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.distance(StopId::new(0), StopId::new(1)).unwrap() - 5.0).abs() < 1e-10);
/// assert!(dm.distance(StopId::new(0), StopId::new(3)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
    points: Vec<(i64, i64)>,
}

impl DistanceMatrix {
    /// Computes the matrix over every ordered pair of `stops`, including
    /// each stop with itself.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let n = stops.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = stops[i].distance_to(&stops[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        let dm = Self {
            data,
            size: n,
            points: stops.iter().map(|s| (s.x(), s.y())).collect(),
        };
        debug_assert!(dm.is_symmetric(0.0));
        dm
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// Fails with [`LookupError`] when either id lies outside the stop
    /// sequence this matrix was built over.
    pub fn distance(&self, from: StopId, to: StopId) -> Result<f64, LookupError> {
        let (i, j) = (from.index(), to.index());
        if i >= self.size || j >= self.size {
            return Err(LookupError {
                from,
                to,
                size: self.size,
            });
        }
        Ok(self.data[i * self.size + j])
    }

    /// Returns `true` if `stop` sits where the stop at `id` sat when this
    /// matrix was built. Identities are not compared; only coordinates
    /// determine distances.
    pub fn covers(&self, id: StopId, stop: &Stop) -> bool {
        self.points.get(id.index()) == Some(&(stop.x(), stop.y()))
    }

    /// Number of stops in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.size;
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.data[i * n + j] - self.data[j * n + i]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
