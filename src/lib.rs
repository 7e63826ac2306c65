//! Unstructured mesh connectivity
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod connectivity;
pub mod error;
#[cfg(feature = "serde")]
pub mod io;
pub mod mesh;
pub mod reference_cell;
pub mod shapes;
pub mod types;

pub use connectivity::{FaceConnectivity, NodeConnectivity};
pub use mesh::{Entities, Nodes};
