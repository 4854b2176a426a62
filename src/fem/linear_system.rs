use super::{BcPrescribedArray, Elements, FemBase};
use crate::base::Config;
use crate::StrError;
use russell_lab::Vector;
use russell_sparse::{LinSolver, SparseMatrix, Sym};

/// Holds the variables of the global linear system
pub struct LinearSystem<'a> {
    /// Total number of equations
    pub n_equation: usize,

    /// Supremum of the number of nonzero values in the global matrix
    ///
    /// `nnz <= n_prescribed + sum of (ndof_local * ndof_local)`; the first
    /// term accounts for the penalty entries added on the diagonal.
    pub nnz_sup: usize,

    /// Global internal force vector
    pub ff_int: Vector,

    /// Global external force vector
    pub ff_ext: Vector,

    /// Global residual vector R = F_ext - F_int
    pub rr: Vector,

    /// Global tangent matrix (triplet storage)
    pub kk: SparseMatrix,

    /// Dense accumulator of the diagonal of the global matrix
    pub diag: Vector,

    /// Linear (sparse) solver
    pub solver: LinSolver<'a>,

    /// Displacement increment, the solution of K du = R
    pub du: Vector,
}

impl<'a> LinearSystem<'a> {
    /// Allocates a new instance
    pub fn new(
        base: &FemBase,
        config: &Config,
        prescribed: &BcPrescribedArray,
        elements: &Elements,
    ) -> Result<Self, StrError> {
        let n_equation = base.n_equation;
        let mut nnz_sup = prescribed.equations.len();
        nnz_sup += elements.all.iter().fold(0, |acc, element| {
            let ndof_local = element.actual.local_to_global().len();
            acc + ndof_local * ndof_local
        });
        Ok(LinearSystem {
            n_equation,
            nnz_sup,
            ff_int: Vector::new(n_equation),
            ff_ext: Vector::new(n_equation),
            rr: Vector::new(n_equation),
            kk: SparseMatrix::new_coo(n_equation, n_equation, nnz_sup, Sym::No)?,
            diag: Vector::new(n_equation),
            solver: LinSolver::new(config.lin_sol_genie)?,
            du: Vector::new(n_equation),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
