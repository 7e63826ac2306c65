//! Element references

/// Reference to one element within an ordered list of element sets
///
/// The derived ordering is lexicographic on (entities index, element index),
/// which is what the adjacency search relies on to group candidates.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRef {
    entities_index: usize,
    element_index: usize,
}

impl ElementRef {
    /// Create a new element reference
    pub fn new(entities_index: usize, element_index: usize) -> Self {
        Self {
            entities_index,
            element_index,
        }
    }
    /// Index of the element set within the universe the reference was built for
    pub fn entities_index(&self) -> usize {
        self.entities_index
    }
    /// Local index of the element within its element set
    pub fn element_index(&self) -> usize {
        self.element_index
    }
}
