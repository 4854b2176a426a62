use serde::{Deserialize, Serialize};

/// Defines the element formulation used by the analysis
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Formulation {
    /// Small-deformation linear analysis (handled by the linear driver, not here)
    Linear,

    /// Large-deformation analysis anchored to the reference configuration
    TotalLagrangian,

    /// Large-deformation analysis anchored to the current configuration
    UpdatedLagrangian,
}

/// Defines degrees of freedom (displacement components)
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Dof {
    /// Displacement along the first dimension
    Ux,

    /// Displacement along the second dimension
    Uy,

    /// Displacement along the third dimension
    Uz,
}

impl Dof {
    /// Returns the local index of the DOF within a node (0, 1, or 2)
    pub fn index(&self) -> usize {
        match self {
            Dof::Ux => 0,
            Dof::Uy => 1,
            Dof::Uz => 2,
        }
    }
}

/// Defines natural boundary conditions at points (concentrated loads)
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Pbc {
    /// Concentrated load along the first dimension
    Fx,

    /// Concentrated load along the second dimension
    Fy,

    /// Concentrated load along the third dimension
    Fz,
}

impl Pbc {
    /// Returns the local index of the matching displacement DOF
    pub fn dof(&self) -> usize {
        match self {
            Pbc::Fx => 0,
            Pbc::Fy => 1,
            Pbc::Fz => 2,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
