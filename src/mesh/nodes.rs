//! Node storage

use crate::error::{ConnectivityError, Result};
use crate::types::RealScalar;

/// Shared storage for the nodes of a mesh
///
/// Coordinates are stored flat, one point after another. Element sets that
/// describe the same mesh hold this storage behind a shared `Arc`, and that
/// pointer identity is what decides whether two sets use one node dictionary.
#[derive(Debug)]
pub struct Nodes<T: RealScalar> {
    dim: usize,
    coordinates: Vec<T>,
}

impl<T: RealScalar> Nodes<T> {
    /// Create node storage from a flat coordinate array
    pub fn new(dim: usize, coordinates: Vec<T>) -> Result<Self> {
        if dim == 0 || coordinates.len() % dim != 0 {
            return Err(ConnectivityError::InvalidCoordinateLength {
                len: coordinates.len(),
                dim,
            });
        }
        Ok(Self { dim, coordinates })
    }
    /// Number of nodes
    pub fn size(&self) -> usize {
        self.coordinates.len() / self.dim
    }
    /// Geometric dimension
    pub fn dim(&self) -> usize {
        self.dim
    }
    /// Coordinates of one node
    pub fn point(&self, node: usize) -> &[T] {
        &self.coordinates[node * self.dim..(node + 1) * self.dim]
    }
}
