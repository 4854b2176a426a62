//! Solsim implements a nonlinear (large-deformation, elastoplastic) solid
//! mechanics solution engine based on the finite element method.
//!
//! The crate advances a 3D hexahedral solid through prescribed pseudo-time
//! (load) increments, computing equilibrium displacements via Newton-Raphson
//! iterations with line search and adaptive sub-stepping. The main parts are:
//!
//! * [`material`] -- a composable J2 elastoplastic constitutive model with an
//!   exact radial-return integrator and algorithmically consistent tangent
//! * [`fem`] -- Total- and Updated-Lagrangian hexahedral elements, the global
//!   assembler, penalty-method Dirichlet enforcement, the incremental
//!   nonlinear solver, and nodal stress recovery
//! * [`base`] -- mesh containers, configuration, and boundary condition data
//!
//! Mesh generation, input-file parsing, visualization, and the purely linear
//! small-deformation driver are external collaborators and not part of this
//! crate.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod fem;
pub mod material;
