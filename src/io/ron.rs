//! RON I/O

use crate::connectivity::{
    FaceConnectivity, FaceConnectivityData, NodeConnectivity, NodeConnectivityData,
};
use crate::error::{ConnectivityError, Result};
use crate::types::RealScalar;
use std::fs;
use std::path::Path;

/// Export of connectivity tables as RON
///
/// The exported form is the owned snapshot of the tables, detached from the
/// element sets they were built over; it can be read back as
/// [`NodeConnectivityData`] or [`FaceConnectivityData`].
pub trait RonExport {
    /// Generate the RON string for the tables
    fn to_ron_string(&self) -> Result<String>;

    /// Export as RON
    fn export_as_ron(&self, filename: impl AsRef<Path>) -> Result<()> {
        fs::write(filename, self.to_ron_string()?)?;
        Ok(())
    }
}

impl<T: RealScalar> RonExport for NodeConnectivity<'_, T> {
    fn to_ron_string(&self) -> Result<String> {
        ron::to_string(&self.to_data())
            .map_err(|e| ConnectivityError::Serialization(e.to_string()))
    }
}

impl<T: RealScalar> RonExport for FaceConnectivity<'_, T> {
    fn to_ron_string(&self) -> Result<String> {
        ron::to_string(&self.to_data())
            .map_err(|e| ConnectivityError::Serialization(e.to_string()))
    }
}

impl NodeConnectivityData {
    /// Parse node connectivity tables from a RON string
    pub fn from_ron_string(s: &str) -> Result<Self> {
        ron::from_str(s).map_err(|e| ConnectivityError::Serialization(e.to_string()))
    }
    /// Import node connectivity tables from a RON file
    pub fn import_from_ron(filename: impl AsRef<Path>) -> Result<Self> {
        Self::from_ron_string(&fs::read_to_string(filename)?)
    }
}

impl FaceConnectivityData {
    /// Parse face adjacency tables from a RON string
    pub fn from_ron_string(s: &str) -> Result<Self> {
        ron::from_str(s).map_err(|e| ConnectivityError::Serialization(e.to_string()))
    }
    /// Import face adjacency tables from a RON file
    pub fn import_from_ron(filename: impl AsRef<Path>) -> Result<Self> {
        Self::from_ron_string(&fs::read_to_string(filename)?)
    }
}
