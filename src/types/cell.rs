//! Cell types

/// The supported cell types
///
/// Volume cells carry no suffix; lower-dimensional cells are tagged with the
/// space dimension they live in, since a triangle used as a 2D cell and a
/// triangle used as the boundary patch of a 3D mesh expose different faces.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    /// Line segment cell of a 1D mesh
    Line1D,
    /// Line segment on the boundary of a 2D mesh
    Line2D,
    /// Line segment edge element in a 3D mesh
    Line3D,
    /// Triangle cell of a 2D mesh
    Triangle2D,
    /// Triangle on the boundary of a 3D mesh
    Triangle3D,
    /// Quadrilateral cell of a 2D mesh
    Quadrilateral2D,
    /// Quadrilateral on the boundary of a 3D mesh
    Quadrilateral3D,
    /// Tetrahedron
    Tetrahedron,
    /// Pyramid with a quadrilateral base
    Pyramid,
    /// Triangular prism
    Prism,
    /// Hexahedron
    Hexahedron,
}
