use russell_lab::Vector;

/// Tolerance below which an equivalent stress is treated as zero
pub(crate) const TOL_SIGMA_EQ: f64 = 1e-10;

/// Implements the von Mises (J2) yield criterion
///
/// The yield function is `f = sigma_eq - sigma_y` with
/// `sigma_eq = sqrt(1.5 s:s)` where s is the deviatoric stress.
pub struct VonMises {}

impl VonMises {
    /// Allocates a new instance
    pub fn new() -> Self {
        VonMises {}
    }

    /// Computes the deviatoric part of a Voigt stress vector
    pub fn deviator(&self, ss: &mut Vector, stress: &Vector) {
        let mean = (stress[0] + stress[1] + stress[2]) / 3.0;
        ss[0] = stress[0] - mean;
        ss[1] = stress[1] - mean;
        ss[2] = stress[2] - mean;
        ss[3] = stress[3];
        ss[4] = stress[4];
        ss[5] = stress[5];
    }

    /// Computes the von Mises equivalent stress
    ///
    /// The shear entries of a Voigt stress vector hold the tensor components
    /// once; their squares appear twice in s:s, hence the factor of two.
    pub fn equivalent_stress(&self, stress: &Vector) -> f64 {
        let mean = (stress[0] + stress[1] + stress[2]) / 3.0;
        let (s0, s1, s2) = (stress[0] - mean, stress[1] - mean, stress[2] - mean);
        let (s3, s4, s5) = (stress[3], stress[4], stress[5]);
        f64::sqrt(1.5 * (s0 * s0 + s1 * s1 + s2 * s2 + 2.0 * (s3 * s3 + s4 * s4 + s5 * s5)))
    }

    /// Evaluates the yield function
    pub fn evaluate(&self, stress: &Vector, yield_stress: f64) -> f64 {
        self.equivalent_stress(stress) - yield_stress
    }

    /// Computes the flow direction n = df/dsigma = 1.5 s / sigma_eq
    ///
    /// The shear entries carry an extra factor of two, consistent with the
    /// Voigt-form derivative of sigma_eq. Returns the zero vector when the
    /// equivalent stress vanishes (the gradient is undefined there).
    pub fn gradient(&self, nn: &mut Vector, stress: &Vector) {
        let sigma_eq = self.equivalent_stress(stress);
        if sigma_eq < TOL_SIGMA_EQ {
            nn.fill(0.0);
            return;
        }
        let mean = (stress[0] + stress[1] + stress[2]) / 3.0;
        nn[0] = 1.5 * (stress[0] - mean) / sigma_eq;
        nn[1] = 1.5 * (stress[1] - mean) / sigma_eq;
        nn[2] = 1.5 * (stress[2] - mean) / sigma_eq;
        nn[3] = 3.0 * stress[3] / sigma_eq;
        nn[4] = 3.0 * stress[4] / sigma_eq;
        nn[5] = 3.0 * stress[5] / sigma_eq;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
