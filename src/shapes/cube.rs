//! Cube grids

use crate::mesh::{Entities, Nodes};
use crate::types::{CellType, RealScalar};
use std::sync::Arc;

/// Create a unit interval mesh
///
/// The unit interval is the interval between (0,) and (1,)
pub fn unit_interval<T: RealScalar>(nx: usize) -> Entities<T> {
    let mut coordinates = Vec::with_capacity(nx + 1);
    for i in 0..nx + 1 {
        coordinates.push(T::from(i).unwrap() / T::from(nx).unwrap());
    }
    let nodes = Arc::new(Nodes::new(1, coordinates).unwrap());

    let mut cells = Vec::with_capacity(2 * nx);
    for i in 0..nx {
        cells.extend_from_slice(&[i, i + 1]);
    }
    Entities::new(nodes, CellType::Line1D, cells).unwrap()
}

/// Create a unit square mesh
///
/// The unit square is the square with corners at (0,0), (1,0), (1,1) and
/// (0,1). Cells are numbered counterclockwise, so shared edges are traversed
/// in opposite directions by their two cells.
pub fn unit_square<T: RealScalar>(nx: usize, ny: usize, cell_type: CellType) -> Entities<T> {
    let mut coordinates = Vec::with_capacity(2 * (nx + 1) * (ny + 1));
    for i in 0..nx + 1 {
        for j in 0..ny + 1 {
            coordinates.push(T::from(i).unwrap() / T::from(nx).unwrap());
            coordinates.push(T::from(j).unwrap() / T::from(ny).unwrap());
        }
    }
    let nodes = Arc::new(Nodes::new(2, coordinates).unwrap());

    let dx = ny + 1;
    let dy = 1;
    let mut cells = Vec::new();
    match cell_type {
        CellType::Triangle2D => {
            for i in 0..nx {
                for j in 0..ny {
                    let origin = i * dx + j * dy;
                    cells.extend_from_slice(&[origin, origin + dx, origin + dx + dy]);
                    cells.extend_from_slice(&[origin, origin + dx + dy, origin + dy]);
                }
            }
        }
        CellType::Quadrilateral2D => {
            for i in 0..nx {
                for j in 0..ny {
                    let origin = i * dx + j * dy;
                    cells.extend_from_slice(&[
                        origin,
                        origin + dx,
                        origin + dx + dy,
                        origin + dy,
                    ]);
                }
            }
        }
        _ => {
            panic!("Unsupported cell type: {cell_type:?}");
        }
    }
    Entities::new(nodes, cell_type, cells).unwrap()
}

/// Create a unit cube mesh
///
/// The unit cube is the cube with corners at (0,0,0), (1,0,0), (0,1,0),
/// (1,1,0), (0,0,1), (1,0,1), (0,1,1) and (1,1,1). Every cell is positively
/// oriented; the tetrahedral variant uses the six-tetrahedra decomposition
/// around the main diagonal, with vertex order swapped on odd permutations
/// to keep the orientation positive.
pub fn unit_cube<T: RealScalar>(
    nx: usize,
    ny: usize,
    nz: usize,
    cell_type: CellType,
) -> Entities<T> {
    let mut coordinates = Vec::with_capacity(3 * (nx + 1) * (ny + 1) * (nz + 1));
    for i in 0..nx + 1 {
        for j in 0..ny + 1 {
            for k in 0..nz + 1 {
                coordinates.push(T::from(i).unwrap() / T::from(nx).unwrap());
                coordinates.push(T::from(j).unwrap() / T::from(ny).unwrap());
                coordinates.push(T::from(k).unwrap() / T::from(nz).unwrap());
            }
        }
    }
    let nodes = Arc::new(Nodes::new(3, coordinates).unwrap());

    let dx = (ny + 1) * (nz + 1);
    let dy = nz + 1;
    let dz = 1;
    let mut cells = Vec::new();
    match cell_type {
        CellType::Tetrahedron => {
            for i in 0..nx {
                for j in 0..ny {
                    for k in 0..nz {
                        let origin = i * dx + j * dy + k * dz;
                        let far = origin + dx + dy + dz;
                        cells.extend_from_slice(&[origin, origin + dx, origin + dx + dy, far]);
                        cells.extend_from_slice(&[origin, origin + dx + dz, origin + dx, far]);
                        cells.extend_from_slice(&[origin, origin + dx + dy, origin + dy, far]);
                        cells.extend_from_slice(&[origin, origin + dy, origin + dy + dz, far]);
                        cells.extend_from_slice(&[origin, origin + dz, origin + dx + dz, far]);
                        cells.extend_from_slice(&[origin, origin + dy + dz, origin + dz, far]);
                    }
                }
            }
        }
        CellType::Hexahedron => {
            for i in 0..nx {
                for j in 0..ny {
                    for k in 0..nz {
                        let origin = i * dx + j * dy + k * dz;
                        cells.extend_from_slice(&[
                            origin,
                            origin + dx,
                            origin + dx + dy,
                            origin + dy,
                            origin + dz,
                            origin + dx + dz,
                            origin + dx + dy + dz,
                            origin + dy + dz,
                        ]);
                    }
                }
            }
        }
        _ => {
            panic!("Unsupported cell type: {cell_type:?}");
        }
    }
    Entities::new(nodes, cell_type, cells).unwrap()
}
