//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix over an ordered stop sequence.

mod matrix;

pub use matrix::DistanceMatrix;
