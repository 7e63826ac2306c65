//! Functions to create simple example meshes

mod cube;

pub use cube::{unit_cube, unit_interval, unit_square};
