use super::FemBase;
use crate::base::Config;
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds the state of the nonlinear analysis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FemState {
    /// Pseudo-time (proportional load factor)
    pub t: f64,

    /// Current pseudo-time step
    pub dt: f64,

    /// Primary unknowns: converged (committed) displacements
    pub uu: Vector,

    /// Cumulated displacement increment of the step in progress
    pub duu: Vector,
}

impl FemState {
    /// Allocates a new instance with zero-valued displacements
    pub fn new(base: &FemBase, config: &Config) -> Result<Self, StrError> {
        if let Some(message) = config.validate() {
            println!("ERROR: {}", message);
            return Err("cannot allocate state because config.validate() failed");
        }
        Ok(FemState {
            t: 0.0,
            dt: config.dt_init,
            uu: Vector::new(base.n_equation),
            duu: Vector::new(base.n_equation),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
