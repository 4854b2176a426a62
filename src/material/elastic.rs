use crate::StrError;
use russell_lab::{mat_vec_mul, Matrix, Vector};

/// Implements the isotropic linear elastic law (Hooke)
///
/// The elastic operator is a 6x6 matrix in Voigt form relating engineering
/// strains to stresses; its shear diagonal holds the shear modulus (not twice
/// it) because the strain vector carries doubled shear components.
pub struct IsotropicElastic {
    /// Young's modulus
    pub young: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    /// Shear modulus
    pub mu: f64,

    /// Lamé parameter
    pub lam: f64,

    /// Elastic operator (6x6, built once)
    dd: Matrix,
}

impl IsotropicElastic {
    /// Allocates a new instance
    pub fn new(young: f64, poisson: f64) -> Result<Self, StrError> {
        if young <= 0.0 {
            return Err("Young's modulus must be positive");
        }
        if poisson <= -1.0 || poisson >= 0.5 {
            return Err("Poisson's coefficient must be in (-1.0, 0.5)");
        }
        let mu = young / (2.0 * (1.0 + poisson));
        let lam = young * poisson / ((1.0 + poisson) * (1.0 - 2.0 * poisson));
        let mut dd = Matrix::new(6, 6);
        for i in 0..3 {
            for j in 0..3 {
                dd.set(i, j, lam);
            }
            dd.set(i, i, lam + 2.0 * mu);
            dd.set(3 + i, 3 + i, mu);
        }
        Ok(IsotropicElastic {
            young,
            poisson,
            mu,
            lam,
            dd,
        })
    }

    /// Returns read-only access to the elastic operator
    pub fn modulus(&self) -> &Matrix {
        &self.dd
    }

    /// Computes stress = D times strain (engineering Voigt strain)
    pub fn calc_stress(&self, stress: &mut Vector, strain: &Vector) {
        mat_vec_mul(stress, 1.0, &self.dd, strain).unwrap();
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
