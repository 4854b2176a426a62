//! Implements the finite element solution engine: hexahedral elements for
//! large-deformation analysis, global assembly, penalty-method Dirichlet
//! enforcement, the incremental-iterative nonlinear solver, nodal stress
//! recovery, and a background worker wrapper

mod assembly;
mod bc_prescribed;
mod element_solid_tl;
mod element_solid_ul;
mod element_trait;
mod elements;
mod fem_base;
mod fem_state;
mod hex;
mod linear_system;
mod monitor;
mod post_processing;
mod solver_nonlinear;
mod worker;
pub use assembly::*;
pub use bc_prescribed::*;
pub use element_solid_tl::*;
pub use element_solid_ul::*;
pub use element_trait::*;
pub use elements::*;
pub use fem_base::*;
pub use fem_state::*;
pub use linear_system::*;
pub use monitor::*;
pub use post_processing::*;
pub use solver_nonlinear::*;
pub use worker::*;
