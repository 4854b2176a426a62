//! Implements the base structures: constants, configuration, mesh containers,
//! and boundary condition data

mod auxiliary;
mod config;
mod constants;
mod enums;
mod essential;
mod mesh;
mod natural;
pub use auxiliary::*;
pub use config::*;
pub use constants::*;
pub use enums::*;
pub use essential::*;
pub use mesh::*;
pub use natural::*;
