//! Error types

use thiserror::Error;

/// Result type alias using [`ConnectivityError`].
pub type Result<T> = std::result::Result<T, ConnectivityError>;

/// Errors raised by mesh and connectivity construction and queries.
#[derive(Error, Debug)]
pub enum ConnectivityError {
    /// The node count was to be inferred but the element sets do not all
    /// share one node storage.
    #[error("element sets do not share a single node storage")]
    AmbiguousNodeStorage,

    /// The node count was to be inferred from an empty list of element sets.
    #[error("cannot infer node count from an empty list of element sets")]
    EmptyEntityList,

    /// A connectivity table references a node outside the node storage.
    #[error("node index {node} is out of range for {nb_nodes} nodes")]
    NodeIndexOutOfRange {
        /// The offending node index.
        node: usize,
        /// The number of nodes in the storage.
        nb_nodes: usize,
    },

    /// A flat connectivity table does not divide into whole rows.
    #[error("connectivity of length {len} does not divide into rows of {row_size} nodes")]
    InvalidConnectivityLength {
        /// Length of the flat table.
        len: usize,
        /// Nodes per element for the cell type.
        row_size: usize,
    },

    /// A flat coordinate array does not divide into whole points.
    #[error("coordinate array of length {len} does not divide into points of dimension {dim}")]
    InvalidCoordinateLength {
        /// Length of the flat array.
        len: usize,
        /// Geometric dimension.
        dim: usize,
    },

    /// A neighbour was queried for a face that has none.
    #[error("element {element}, face {face} has no adjacent element")]
    NoAdjacentElement {
        /// Local element index in the own element set.
        element: usize,
        /// Local face index.
        face: usize,
    },

    /// File I/O failure while reading or writing connectivity data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure to serialize or deserialize connectivity data.
    #[error("serialization error: {0}")]
    Serialization(String),
}
