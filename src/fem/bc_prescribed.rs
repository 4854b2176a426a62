use super::FemBase;
use crate::base::Essential;
use crate::StrError;
use russell_lab::{vec_norm, Norm, Vector};
use russell_sparse::SparseMatrix;

/// Holds the collection of prescribed (Dirichlet) displacements with the
/// penalty-method application routines
///
/// The penalty coefficient is adaptive: `alpha = max|diag(K)| * multiplier`,
/// recomputed from the freshly assembled matrix so that the conditioning
/// tracks the actual stiffness scale. Two application modes exist:
///
/// * prescribed-value mode (linear solves): `K[i][i] += alpha` and
///   `F[i] += alpha * value`, driving the solution toward the value;
/// * zero-residual mode (Newton iterations): the unknown is a displacement
///   increment which must vanish at a fixed DOF, so `R[i] = 0` and
///   `K[i][i] += alpha`.
pub struct BcPrescribedArray {
    /// Distinct (equation, value) pairs (one entry per prescribed DOF)
    pub all: Vec<(usize, f64)>,

    /// Flags the prescribed equations (length = n_equation)
    pub flags: Vec<bool>,

    /// The distinct equation numbers of the prescribed DOFs
    pub equations: Vec<usize>,
}

impl BcPrescribedArray {
    /// Allocates a new instance with eager bounds checking
    ///
    /// Repeated (point, dof) specifications collapse into a single entry,
    /// with the last value winning; hence the matrix receives exactly one
    /// penalty put per prescribed DOF.
    pub fn new(base: &FemBase, essential: &Essential) -> Result<Self, StrError> {
        let mut all: Vec<(usize, f64)> = Vec::with_capacity(essential.all.len());
        let mut flags = vec![false; base.n_equation];
        let mut equations = Vec::new();
        for (point, dof, value) in &essential.all {
            let eq = base.eq(*point, dof.index())?;
            if flags[eq] {
                for pair in all.iter_mut() {
                    if pair.0 == eq {
                        pair.1 = *value;
                    }
                }
            } else {
                flags[eq] = true;
                equations.push(eq);
                all.push((eq, *value));
            }
        }
        Ok(BcPrescribedArray { all, flags, equations })
    }

    /// Computes the adaptive penalty coefficient
    fn penalty(diag: &Vector, multiplier: f64) -> f64 {
        vec_norm(diag, Norm::Max) * multiplier
    }

    /// Applies the penalty in prescribed-value mode
    pub fn apply_prescribed(
        &self,
        kk: &mut SparseMatrix,
        ff: &mut Vector,
        diag: &Vector,
        multiplier: f64,
    ) -> Result<(), StrError> {
        let alpha = Self::penalty(diag, multiplier);
        for (eq, value) in &self.all {
            kk.put(*eq, *eq, alpha)?;
            ff[*eq] += alpha * value;
        }
        Ok(())
    }

    /// Applies the penalty in zero-residual mode
    pub fn apply_residual(
        &self,
        kk: &mut SparseMatrix,
        rr: &mut Vector,
        diag: &Vector,
        multiplier: f64,
    ) -> Result<(), StrError> {
        let alpha = Self::penalty(diag, multiplier);
        for (eq, _) in &self.all {
            kk.put(*eq, *eq, alpha)?;
            rr[*eq] = 0.0;
        }
        Ok(())
    }

    /// Zeroes the residual entries at prescribed DOFs
    ///
    /// The line search needs the constrained residual norm without touching
    /// the matrix.
    pub fn zero_residual(&self, rr: &mut Vector) {
        for (eq, _) in &self.all {
            rr[*eq] = 0.0;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
