use super::{NDIM, N_NODE_HEX};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Aliases usize as the index of a point (node)
pub type PointId = usize;

/// Aliases usize as the index of a cell (element)
pub type CellId = usize;

/// Aliases usize as the attribute of a cell, used to select material parameters
pub type CellAttribute = usize;

/// Holds a point (node) of the mesh
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Point {
    /// Identification number (must match the position in the array of points)
    pub id: PointId,

    /// Coordinates (3 components)
    pub coords: Vec<f64>,
}

/// Holds a hexahedral cell (element) of the mesh
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    /// Identification number (must match the position in the array of cells)
    pub id: CellId,

    /// Attribute used to select the material parameters
    pub attribute: CellAttribute,

    /// Connectivity: the ids of the 8 corner points
    ///
    /// The ordering is counter-clockwise on the bottom face followed by
    /// counter-clockwise on the top face, as seen from above.
    pub points: Vec<PointId>,
}

/// Holds the mesh data handed in by the caller
///
/// No mesh generation is performed here; the caller (e.g. a parser
/// collaborator) provides the arrays of points and hex8 cells.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mesh {
    /// Space dimension (must be 3)
    pub ndim: usize,

    /// All points (the array index must equal the point id)
    pub points: Vec<Point>,

    /// All cells (the array index must equal the cell id)
    pub cells: Vec<Cell>,
}

impl Mesh {
    /// Checks the consistency of ids, coordinates, and connectivity
    pub fn check(&self) -> Result<(), StrError> {
        if self.ndim != NDIM {
            return Err("mesh must be three-dimensional");
        }
        if self.points.is_empty() {
            return Err("mesh must contain at least one point");
        }
        if self.cells.is_empty() {
            return Err("mesh must contain at least one cell");
        }
        for (i, point) in self.points.iter().enumerate() {
            if point.id != i {
                return Err("point ids must match their positions in the array of points");
            }
            if point.coords.len() != NDIM {
                return Err("point coordinates must have 3 components");
            }
        }
        let npoint = self.points.len();
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.id != i {
                return Err("cell ids must match their positions in the array of cells");
            }
            if cell.points.len() != N_NODE_HEX {
                return Err("hexahedral cells must have 8 points");
            }
            if cell.points.iter().any(|p| *p >= npoint) {
                return Err("cell connectivity references an out-of-bounds point");
            }
        }
        Ok(())
    }

    /// Returns a sample mesh with a single hex8 cell (unit cube)
    ///
    /// ```text
    ///           4--------------7
    ///          /.             /|
    ///         / .            / |
    ///        /  .           /  |
    ///       5--------------6   |
    ///       |   .          |   |
    ///       |   0..........|...3
    ///       |  /           |  /
    ///       | /            | /
    ///       |/             |/
    ///       1--------------2
    /// ```
    pub fn one_hex8() -> Self {
        Mesh {
            ndim: 3,
            points: vec![
                Point { id: 0, coords: vec![0.0, 0.0, 0.0] },
                Point { id: 1, coords: vec![1.0, 0.0, 0.0] },
                Point { id: 2, coords: vec![1.0, 1.0, 0.0] },
                Point { id: 3, coords: vec![0.0, 1.0, 0.0] },
                Point { id: 4, coords: vec![0.0, 0.0, 1.0] },
                Point { id: 5, coords: vec![1.0, 0.0, 1.0] },
                Point { id: 6, coords: vec![1.0, 1.0, 1.0] },
                Point { id: 7, coords: vec![0.0, 1.0, 1.0] },
            ],
            cells: vec![Cell {
                id: 0,
                attribute: 1,
                points: vec![0, 1, 2, 3, 4, 5, 6, 7],
            }],
        }
    }

    /// Returns a sample mesh with two stacked hex8 cells (1 x 1 x 2 column)
    pub fn two_hex8() -> Self {
        Mesh {
            ndim: 3,
            points: vec![
                Point { id: 0, coords: vec![0.0, 0.0, 0.0] },
                Point { id: 1, coords: vec![1.0, 0.0, 0.0] },
                Point { id: 2, coords: vec![1.0, 1.0, 0.0] },
                Point { id: 3, coords: vec![0.0, 1.0, 0.0] },
                Point { id: 4, coords: vec![0.0, 0.0, 1.0] },
                Point { id: 5, coords: vec![1.0, 0.0, 1.0] },
                Point { id: 6, coords: vec![1.0, 1.0, 1.0] },
                Point { id: 7, coords: vec![0.0, 1.0, 1.0] },
                Point { id: 8, coords: vec![0.0, 0.0, 2.0] },
                Point { id: 9, coords: vec![1.0, 0.0, 2.0] },
                Point { id: 10, coords: vec![1.0, 1.0, 2.0] },
                Point { id: 11, coords: vec![0.0, 1.0, 2.0] },
            ],
            cells: vec![
                Cell {
                    id: 0,
                    attribute: 1,
                    points: vec![0, 1, 2, 3, 4, 5, 6, 7],
                },
                Cell {
                    id: 1,
                    attribute: 1,
                    points: vec![4, 5, 6, 7, 8, 9, 10, 11],
                },
            ],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
