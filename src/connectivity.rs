//! Mesh connectivity construction
//!
//! [`NodeConnectivity`] inverts the element-to-node tables of a universe of
//! element sets into a node-to-element index; [`FaceConnectivity`] uses that
//! index to resolve, per local face of one element set, the neighbouring
//! element and its matching local face.

mod face;
mod node;

pub use face::{build_face_element_adjacency, build_face_face_adjacency, FaceConnectivity};
#[cfg(feature = "serde")]
pub use face::FaceConnectivityData;
pub use node::{build_node_element_index, NodeConnectivity};
#[cfg(feature = "serde")]
pub use node::NodeConnectivityData;
