//! Node-to-element connectivity

use crate::error::{ConnectivityError, Result};
use crate::mesh::Entities;
use crate::types::{ElementRef, RealScalar};
use itertools::izip;
use log::debug;

/// Build the node-to-element inverted index for an ordered universe of
/// element sets
///
/// Returns `(node_first_element, node_element_count, node_elements)`: for
/// each global node index, the elements referencing it occupy the contiguous
/// slice `node_elements[node_first_element[n]..][..node_element_count[n]]`,
/// in scan order (element sets in order, then local elements in order). A
/// node listed more than once in one element's row is counted once per
/// occurrence.
///
/// The construction is two linear passes plus one fill pass: count every
/// occurrence, lay the partitions out by prefix sum, then write each
/// reference at its node's cursor. Nothing grows during the fill, so the
/// routine allocates exactly once per output array regardless of mesh size.
pub fn build_node_element_index<T: RealScalar>(
    nb_nodes: usize,
    entities: &[&Entities<T>],
) -> Result<(Vec<usize>, Vec<usize>, Vec<ElementRef>)> {
    // Count pass
    let mut node_element_count = vec![0; nb_nodes];
    for set in entities {
        for element in 0..set.size() {
            for &node in set.connectivity_row(element) {
                if node >= nb_nodes {
                    return Err(ConnectivityError::NodeIndexOutOfRange { node, nb_nodes });
                }
                node_element_count[node] += 1;
            }
        }
    }

    // Offset pass
    let mut node_first_element = vec![0; nb_nodes];
    let mut running_sum = 0;
    for (first, count) in izip!(node_first_element.iter_mut(), &node_element_count) {
        *first = running_sum;
        running_sum += count;
    }

    // Fill pass, same scan order as the count pass
    let mut node_elements = vec![ElementRef::default(); running_sum];
    let mut filled_so_far = vec![0; nb_nodes];
    for (entities_index, set) in entities.iter().enumerate() {
        for element in 0..set.size() {
            for &node in set.connectivity_row(element) {
                node_elements[node_first_element[node] + filled_so_far[node]] =
                    ElementRef::new(entities_index, element);
                filled_so_far[node] += 1;
            }
        }
    }

    debug!(
        "built node-element index: {} element sets, {} nodes, {} entries",
        entities.len(),
        nb_nodes,
        node_elements.len()
    );
    Ok((node_first_element, node_element_count, node_elements))
}

/// Node-to-element connectivity of a set of element sets
///
/// Borrows the element sets it was built over; read-only once constructed.
#[derive(Debug)]
pub struct NodeConnectivity<'a, T: RealScalar> {
    entities: Vec<&'a Entities<T>>,
    nb_nodes: usize,
    node_first_element: Vec<usize>,
    node_element_count: Vec<usize>,
    node_elements: Vec<ElementRef>,
}

impl<'a, T: RealScalar> NodeConnectivity<'a, T> {
    /// Create node connectivity for a known node count
    pub fn new(nb_nodes: usize, entities: Vec<&'a Entities<T>>) -> Result<Self> {
        let (node_first_element, node_element_count, node_elements) =
            build_node_element_index(nb_nodes, &entities)?;
        Ok(Self {
            entities,
            nb_nodes,
            node_first_element,
            node_element_count,
            node_elements,
        })
    }
    /// Create node connectivity, inferring the node count from a node
    /// storage shared by every element set
    ///
    /// Fails if the list is empty or the sets do not all share one storage.
    pub fn from_shared_nodes(entities: Vec<&'a Entities<T>>) -> Result<Self> {
        let first = *entities.first().ok_or(ConnectivityError::EmptyEntityList)?;
        if !entities.iter().all(|set| set.shares_nodes_with(first)) {
            return Err(ConnectivityError::AmbiguousNodeStorage);
        }
        Self::new(first.nodes().size(), entities)
    }
    /// The universe of element sets this connectivity was built over
    pub fn entities(&self) -> &[&'a Entities<T>] {
        &self.entities
    }
    /// Number of nodes
    pub fn nb_nodes(&self) -> usize {
        self.nb_nodes
    }
    /// The elements referencing a node, in scan order
    pub fn node_element_range(&self, node: usize) -> &[ElementRef] {
        let first = self.node_first_element[node];
        &self.node_elements[first..first + self.node_element_count[node]]
    }
    /// Number of elements referencing a node
    pub fn node_element_count(&self, node: usize) -> usize {
        self.node_element_count[node]
    }
    /// Start of each node's partition of [`Self::node_elements`]
    pub fn node_first_elements(&self) -> &[usize] {
        &self.node_first_element
    }
    /// Size of each node's partition of [`Self::node_elements`]
    pub fn node_element_counts(&self) -> &[usize] {
        &self.node_element_count
    }
    /// The flat element-reference array, partitioned per node
    pub fn node_elements(&self) -> &[ElementRef] {
        &self.node_elements
    }
    /// Snapshot of the connectivity arrays, detached from the element sets
    #[cfg(feature = "serde")]
    pub fn to_data(&self) -> NodeConnectivityData {
        NodeConnectivityData {
            nb_nodes: self.nb_nodes,
            node_first_element: self.node_first_element.clone(),
            node_element_count: self.node_element_count.clone(),
            node_elements: self.node_elements.clone(),
        }
    }
}

/// Owned node connectivity tables, as serialized to disk
#[cfg(feature = "serde")]
#[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeConnectivityData {
    /// Number of nodes.
    pub nb_nodes: usize,
    /// Start of each node's partition of `node_elements`.
    pub node_first_element: Vec<usize>,
    /// Size of each node's partition of `node_elements`.
    pub node_element_count: Vec<usize>,
    /// The flat element-reference array, partitioned per node.
    pub node_elements: Vec<ElementRef>,
}
