//! Connectivity table I/O

mod ron;

pub use ron::RonExport;
