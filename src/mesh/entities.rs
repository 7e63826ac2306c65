//! Element sets

use crate::error::{ConnectivityError, Result};
use crate::mesh::Nodes;
use crate::reference_cell;
use crate::types::{CellType, RealScalar};
use std::sync::Arc;

/// A homogeneous set of mesh elements
///
/// All elements share one cell type, so the element-to-node table is stored
/// flat with a fixed row width. The node storage is shared with the other
/// element sets describing the same mesh.
#[derive(Debug)]
pub struct Entities<T: RealScalar> {
    nodes: Arc<Nodes<T>>,
    cell_type: CellType,
    connectivity: Vec<usize>,
}

impl<T: RealScalar> Entities<T> {
    /// Create an element set from a flat element-to-node table
    pub fn new(nodes: Arc<Nodes<T>>, cell_type: CellType, connectivity: Vec<usize>) -> Result<Self> {
        let row_size = reference_cell::node_count(cell_type);
        if connectivity.len() % row_size != 0 {
            return Err(ConnectivityError::InvalidConnectivityLength {
                len: connectivity.len(),
                row_size,
            });
        }
        if let Some(&node) = connectivity.iter().max() {
            if node >= nodes.size() {
                return Err(ConnectivityError::NodeIndexOutOfRange {
                    node,
                    nb_nodes: nodes.size(),
                });
            }
        }
        Ok(Self {
            nodes,
            cell_type,
            connectivity,
        })
    }
    /// Number of elements
    pub fn size(&self) -> usize {
        self.connectivity.len() / reference_cell::node_count(self.cell_type)
    }
    /// Global node indices of one element, in canonical local order
    pub fn connectivity_row(&self, element: usize) -> &[usize] {
        let row_size = reference_cell::node_count(self.cell_type);
        &self.connectivity[element * row_size..(element + 1) * row_size]
    }
    /// The cell type of every element in this set
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }
    /// The node storage this set refers into
    pub fn nodes(&self) -> &Arc<Nodes<T>> {
        &self.nodes
    }
    /// Whether two element sets refer into the same node storage
    pub fn shares_nodes_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }
}
