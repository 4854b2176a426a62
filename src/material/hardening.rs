/// Factor defining the floor of the hardening modulus: H_min = E times this
pub(crate) const H_MIN_FACTOR: f64 = 1e-4;

/// Implements hardening laws relating the yield stress to the accumulated
/// equivalent plastic strain
///
/// The modulus handed to the return mapping is floored at `H_min = E * 1e-4`
/// so that the plastic-multiplier denominator stays well-posed even for
/// perfect plasticity.
#[derive(Clone, Copy, Debug)]
pub enum Hardening {
    /// Perfect plasticity: the yield stress is constant
    Perfect {
        /// Initial yield stress
        yield_stress: f64,

        /// Floor of the hardening modulus
        h_min: f64,
    },

    /// Linear isotropic hardening: sigma_y = sigma_y0 + H eps_p
    LinearIsotropic {
        /// Initial yield stress
        yield_stress: f64,

        /// Hardening modulus
        hh: f64,

        /// Floor of the hardening modulus
        h_min: f64,
    },
}

impl Hardening {
    /// Allocates a new instance from the material parameters
    ///
    /// A zero hardening modulus selects perfect plasticity.
    pub fn new(young: f64, yield_stress: f64, hh: f64) -> Self {
        let h_min = young * H_MIN_FACTOR;
        if hh == 0.0 {
            Hardening::Perfect { yield_stress, h_min }
        } else {
            Hardening::LinearIsotropic { yield_stress, hh, h_min }
        }
    }

    /// Returns the current yield stress
    pub fn yield_stress(&self, eps_p: f64) -> f64 {
        match self {
            Hardening::Perfect { yield_stress, .. } => *yield_stress,
            Hardening::LinearIsotropic { yield_stress, hh, .. } => yield_stress + hh * eps_p,
        }
    }

    /// Returns the (floored) hardening modulus used by the return mapping
    pub fn modulus(&self) -> f64 {
        match self {
            Hardening::Perfect { h_min, .. } => *h_min,
            Hardening::LinearIsotropic { hh, h_min, .. } => f64::max(*hh, *h_min),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Hardening;
    use russell_lab::approx_eq;

    #[test]
    fn perfect_plasticity_works() {
        let hardening = Hardening::new(70_000.0, 6.0, 0.0);
        approx_eq(hardening.yield_stress(0.0), 6.0, 1e-15);
        approx_eq(hardening.yield_stress(0.1), 6.0, 1e-15);
        // the modulus never vanishes
        approx_eq(hardening.modulus(), 7.0, 1e-12);
    }

    #[test]
    fn linear_isotropic_works() {
        let hardening = Hardening::new(70_000.0, 6.0, 800.0);
        approx_eq(hardening.yield_stress(0.0), 6.0, 1e-15);
        approx_eq(hardening.yield_stress(2.5e-3), 8.0, 1e-12);
        approx_eq(hardening.modulus(), 800.0, 1e-15);
    }

    #[test]
    fn tiny_modulus_is_floored() {
        let hardening = Hardening::new(70_000.0, 6.0, 1e-8);
        approx_eq(hardening.modulus(), 7.0, 1e-12);
        // the yield stress still uses the true (tiny) modulus
        approx_eq(hardening.yield_stress(1.0), 6.0 + 1e-8, 1e-15);
    }
}
