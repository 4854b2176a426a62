use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Defines the common trait for local (element) computations
pub trait ElementTrait: Send + Sync {
    /// Returns the local-to-global DOF mapping (24 entries for hex8)
    fn local_to_global(&self) -> &Vec<usize>;

    /// Computes the local tangent matrix and internal force vector at the
    /// given global displacement, rewriting the trial states of the
    /// integration points from the committed generation
    ///
    /// Geometric failures (degenerate or inverted Jacobians, excessive
    /// compression) come back as errors; the assembler turns them into a
    /// failed-assembly flag so the solver can cut back the step.
    fn calc_ke_fe(&mut self, ke: &mut Matrix, fe: &mut Vector, uu: &Vector) -> Result<(), StrError>;

    /// Promotes the trial integration-point states to committed
    fn commit_state(&mut self);

    /// Computes the element-average Cauchy stress (Voigt) from the committed
    /// states at the given global displacement
    fn cauchy_stress(&self, sigma: &mut Vector, uu: &Vector) -> Result<(), StrError>;
}
