use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for the plastic part of the solid model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamPlasticity {
    /// Initial yield stress
    pub yield_stress: f64,

    /// Linear isotropic hardening modulus (zero means perfect plasticity)
    pub hardening: f64,
}

/// Holds parameters for solid elements
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamSolid {
    /// Intrinsic (real) density
    pub density: f64,

    /// Young's modulus
    pub young: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    /// Optional plasticity parameters (the material is purely elastic if None)
    pub plasticity: Option<ParamPlasticity>,
}

impl ParamSolid {
    /// Validates all parameters
    pub fn validate(&self) -> Result<(), StrError> {
        if self.density < 0.0 {
            return Err("density must be ≥ 0.0");
        }
        if self.young <= 0.0 {
            return Err("Young's modulus must be positive");
        }
        if self.poisson <= -1.0 || self.poisson >= 0.5 {
            return Err("Poisson's coefficient must be in (-1.0, 0.5)");
        }
        if let Some(p) = self.plasticity {
            if p.yield_stress <= 0.0 {
                return Err("yield stress must be positive");
            }
            if p.hardening < 0.0 {
                return Err("hardening modulus must be ≥ 0.0");
            }
        }
        Ok(())
    }

    /// Returns sample parameters for a linear elastic material
    pub fn sample_linear_elastic() -> Self {
        ParamSolid {
            density: 1.0,
            young: 1500.0,
            poisson: 0.25,
            plasticity: None,
        }
    }

    /// Returns sample parameters for a von Mises material with linear hardening
    pub fn sample_von_mises() -> Self {
        ParamSolid {
            density: 1.0,
            young: 70_000.0,
            poisson: 0.3,
            plasticity: Some(ParamPlasticity {
                yield_stress: 6.0,
                hardening: 800.0,
            }),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ParamPlasticity, ParamSolid};
    use crate::StrError;

    #[test]
    fn samples_are_valid() -> Result<(), StrError> {
        ParamSolid::sample_linear_elastic().validate()?;
        ParamSolid::sample_von_mises().validate()?;
        Ok(())
    }

    #[test]
    fn validate_captures_errors() {
        let mut param = ParamSolid::sample_linear_elastic();
        param.density = -1.0;
        assert_eq!(param.validate().err(), Some("density must be ≥ 0.0"));

        let mut param = ParamSolid::sample_linear_elastic();
        param.young = 0.0;
        assert_eq!(param.validate().err(), Some("Young's modulus must be positive"));

        let mut param = ParamSolid::sample_linear_elastic();
        param.poisson = 0.5;
        assert_eq!(
            param.validate().err(),
            Some("Poisson's coefficient must be in (-1.0, 0.5)")
        );

        let mut param = ParamSolid::sample_von_mises();
        param.plasticity = Some(ParamPlasticity {
            yield_stress: 0.0,
            hardening: 800.0,
        });
        assert_eq!(param.validate().err(), Some("yield stress must be positive"));

        let mut param = ParamSolid::sample_von_mises();
        param.plasticity = Some(ParamPlasticity {
            yield_stress: 6.0,
            hardening: -1.0,
        });
        assert_eq!(param.validate().err(), Some("hardening modulus must be ≥ 0.0"));
    }
}
