//! Implements the J2 (von Mises) elastoplastic constitutive model with an
//! exact radial-return stress integrator and consistent tangent operator
//!
//! All stress and strain quantities use the Voigt convention with component
//! order (xx, yy, zz, yz, xz, xy); strain vectors carry engineering (doubled)
//! shear components.

mod elastic;
mod elastoplastic;
mod hardening;
mod parameters;
mod plastic_state;
mod radial_return;
mod voigt;
mod yield_criterion;
pub use elastic::*;
pub use elastoplastic::*;
pub use hardening::*;
pub use parameters::*;
pub use plastic_state::*;
pub use radial_return::*;
pub use voigt::*;
pub use yield_criterion::*;
