use crate::base::{CellAttribute, Mesh, PointId, NDOF_PER_NODE};
use crate::material::ParamSolid;
use crate::StrError;
use std::collections::HashMap;

/// Holds basic data for FEM simulations: the material parameters associated
/// with each cell attribute and the global DOF numbering
///
/// Every point carries exactly three displacement DOFs, so the equation
/// number of (point, dof) is simply `3 * point + dof`.
pub struct FemBase {
    /// Maps a cell attribute to the corresponding solid parameters
    pub attributes: HashMap<CellAttribute, ParamSolid>,

    /// Total number of points
    pub n_point: usize,

    /// Total number of equations (global DOFs)
    pub n_equation: usize,
}

impl FemBase {
    /// Allocates a new instance; validates the mesh and all material parameters
    pub fn new<const N: usize>(mesh: &Mesh, arr: [(CellAttribute, ParamSolid); N]) -> Result<Self, StrError> {
        mesh.check()?;
        let attributes = HashMap::from(arr);
        for param in attributes.values() {
            param.validate()?;
        }
        for cell in &mesh.cells {
            if !attributes.contains_key(&cell.attribute) {
                return Err("cannot find parameters for a cell attribute");
            }
        }
        let n_point = mesh.points.len();
        Ok(FemBase {
            attributes,
            n_point,
            n_equation: n_point * NDOF_PER_NODE,
        })
    }

    /// Returns the global equation number of (point, dof)
    pub fn eq(&self, point: PointId, dof: usize) -> Result<usize, StrError> {
        if point >= self.n_point {
            return Err("cannot find equation number because the point id is out-of-bounds");
        }
        if dof >= NDOF_PER_NODE {
            return Err("cannot find equation number because the DOF index is out-of-bounds");
        }
        Ok(point * NDOF_PER_NODE + dof)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
