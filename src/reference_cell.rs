//! Reference cell definitions
//!
//! Face node lists of same-dimensionality cells are oriented outward, so two
//! cells sharing an internal face traverse it in opposite cyclic order. A
//! cell whose topological dimensionality is below its space dimension (a
//! boundary patch element) has exactly one face: the element itself.

use crate::types::CellType;

/// The space dimension of a cell
pub fn dimension(cell: CellType) -> usize {
    match cell {
        CellType::Line1D => 1,
        CellType::Line2D | CellType::Triangle2D | CellType::Quadrilateral2D => 2,
        CellType::Line3D
        | CellType::Triangle3D
        | CellType::Quadrilateral3D
        | CellType::Tetrahedron
        | CellType::Pyramid
        | CellType::Prism
        | CellType::Hexahedron => 3,
    }
}

/// The topological dimensionality of a cell
pub fn dimensionality(cell: CellType) -> usize {
    match cell {
        CellType::Line1D | CellType::Line2D | CellType::Line3D => 1,
        CellType::Triangle2D
        | CellType::Triangle3D
        | CellType::Quadrilateral2D
        | CellType::Quadrilateral3D => 2,
        CellType::Tetrahedron | CellType::Pyramid | CellType::Prism | CellType::Hexahedron => 3,
    }
}

/// The number of nodes of a cell
pub fn node_count(cell: CellType) -> usize {
    match cell {
        CellType::Line1D | CellType::Line2D | CellType::Line3D => 2,
        CellType::Triangle2D | CellType::Triangle3D => 3,
        CellType::Quadrilateral2D | CellType::Quadrilateral3D | CellType::Tetrahedron => 4,
        CellType::Pyramid => 5,
        CellType::Prism => 6,
        CellType::Hexahedron => 8,
    }
}

const LINE1D_FACES: [&[usize]; 2] = [&[0], &[1]];
const LINE_PATCH_FACES: [&[usize]; 1] = [&[0, 1]];
const TRIANGLE2D_FACES: [&[usize]; 3] = [&[0, 1], &[1, 2], &[2, 0]];
const TRIANGLE3D_FACES: [&[usize]; 1] = [&[0, 1, 2]];
const QUADRILATERAL2D_FACES: [&[usize]; 4] = [&[0, 1], &[1, 2], &[2, 3], &[3, 0]];
const QUADRILATERAL3D_FACES: [&[usize]; 1] = [&[0, 1, 2, 3]];
const TETRAHEDRON_FACES: [&[usize]; 4] = [&[0, 2, 1], &[0, 1, 3], &[0, 3, 2], &[1, 2, 3]];
const PYRAMID_FACES: [&[usize]; 5] = [
    &[0, 3, 2, 1],
    &[0, 1, 4],
    &[1, 2, 4],
    &[2, 3, 4],
    &[0, 4, 3],
];
const PRISM_FACES: [&[usize]; 5] = [
    &[0, 2, 1],
    &[3, 4, 5],
    &[0, 1, 4, 3],
    &[1, 2, 5, 4],
    &[0, 3, 5, 2],
];
const HEXAHEDRON_FACES: [&[usize]; 6] = [
    &[0, 3, 2, 1],
    &[4, 5, 6, 7],
    &[0, 1, 5, 4],
    &[1, 2, 6, 5],
    &[2, 3, 7, 6],
    &[0, 4, 7, 3],
];

fn faces(cell: CellType) -> &'static [&'static [usize]] {
    match cell {
        CellType::Line1D => &LINE1D_FACES,
        CellType::Line2D | CellType::Line3D => &LINE_PATCH_FACES,
        CellType::Triangle2D => &TRIANGLE2D_FACES,
        CellType::Triangle3D => &TRIANGLE3D_FACES,
        CellType::Quadrilateral2D => &QUADRILATERAL2D_FACES,
        CellType::Quadrilateral3D => &QUADRILATERAL3D_FACES,
        CellType::Tetrahedron => &TETRAHEDRON_FACES,
        CellType::Pyramid => &PYRAMID_FACES,
        CellType::Prism => &PRISM_FACES,
        CellType::Hexahedron => &HEXAHEDRON_FACES,
    }
}

/// The number of local faces of a cell
pub fn face_count(cell: CellType) -> usize {
    faces(cell).len()
}

/// The local node indices of one face of a cell
pub fn face_nodes(cell: CellType, face: usize) -> &'static [usize] {
    faces(cell)[face]
}
