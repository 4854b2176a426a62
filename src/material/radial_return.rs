use super::{Hardening, IsotropicElastic, PlasticState, VonMises, TOL_SIGMA_EQ};
use russell_lab::{mat_copy, Matrix, Vector};

/// Deviatoric projector in Voigt form
///
/// The shear-diagonal entries are 1/2 (not 1) because the elastic shear
/// stiffness in Voigt form is mu, not 2 mu; the radial shrink of the
/// deviatoric stiffness must scale accordingly.
const I_DEV: [[f64; 6]; 6] = [
    [2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0, 0.0, 0.0, 0.0],
    [-1.0 / 3.0, 2.0 / 3.0, -1.0 / 3.0, 0.0, 0.0, 0.0],
    [-1.0 / 3.0, -1.0 / 3.0, 2.0 / 3.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.5, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.5, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.5],
];

/// Implements the exact radial return algorithm for J2 plasticity
///
/// The J2 yield surface is spherical in deviatoric stress space; hence the
/// return path is radial and the plastic corrector has a closed form:
///
/// ```text
/// dgamma = f_trial / (3 mu + H)
/// sigma  = sigma_trial - 2 mu dgamma n
/// ```
///
/// with the flow direction `n = 1.5 s / sigma_eq` evaluated at the trial
/// stress. The algorithmically consistent tangent (exact derivative of the
/// discrete update) is
///
/// ```text
/// D_alg = D - c1 I_dev - (c2 - 2/3 c1) (n x n)
/// c1 = 6 mu^2 dgamma / sigma_eq_trial
/// c2 = 4 mu^2 / (3 mu + H)
/// ```
pub struct RadialReturn {
    /// Shear modulus
    mu: f64,

    /// Copy of the elastic operator
    dd: Matrix,

    /// Yield criterion
    criterion: VonMises,

    /// Auxiliary: flow direction at the trial stress
    nn: Vector,
}

impl RadialReturn {
    /// Allocates a new instance
    pub fn new(elastic: &IsotropicElastic) -> Self {
        RadialReturn {
            mu: elastic.mu,
            dd: elastic.modulus().clone(),
            criterion: VonMises::new(),
            nn: Vector::new(6),
        }
    }

    /// Applies the return mapping to a trial stress
    ///
    /// Writes the corrected stress and the consistent tangent, updates the
    /// plastic internal variables of `state`, and returns whether plastic
    /// flow occurred. On an elastic step the trial stress passes through
    /// unchanged (bitwise) and the tangent is the elastic operator.
    pub fn apply(
        &mut self,
        stress: &mut Vector,
        tangent: &mut Matrix,
        hardening: &Hardening,
        stress_trial: &Vector,
        state: &mut PlasticState,
    ) -> bool {
        let sigma_y = hardening.yield_stress(state.eps_p);
        let f_trial = self.criterion.evaluate(stress_trial, sigma_y);
        if f_trial <= 0.0 {
            for i in 0..6 {
                stress[i] = stress_trial[i];
            }
            mat_copy(tangent, &self.dd).unwrap();
            return false;
        }

        // plastic corrector
        let mu = self.mu;
        let hh = hardening.modulus();
        let dgamma = f_trial / (3.0 * mu + hh);
        self.criterion.gradient(&mut self.nn, stress_trial);
        for i in 0..6 {
            stress[i] = stress_trial[i] - 2.0 * mu * dgamma * self.nn[i];
        }
        state.eps_p += dgamma;
        for i in 0..6 {
            state.plastic_strain[i] += dgamma * self.nn[i];
        }

        // consistent tangent
        let sigma_eq_trial = self.criterion.equivalent_stress(stress_trial);
        if sigma_eq_trial < TOL_SIGMA_EQ {
            mat_copy(tangent, &self.dd).unwrap();
            return true;
        }
        let c1 = 6.0 * mu * mu * dgamma / sigma_eq_trial;
        let c2 = 4.0 * mu * mu / (3.0 * mu + hh);
        let cn = c2 - c1 * 2.0 / 3.0;
        for i in 0..6 {
            for j in 0..6 {
                tangent.set(i, j, self.dd.get(i, j) - c1 * I_DEV[i][j] - cn * self.nn[i] * self.nn[j]);
            }
        }
        true
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::RadialReturn;
    use crate::material::{Hardening, IsotropicElastic, PlasticState, VonMises};
    use crate::StrError;
    use russell_lab::{approx_eq, mat_vec_mul, vec_approx_eq, Matrix, Vector};

    fn new_fixture(hardening_modulus: f64) -> Result<(IsotropicElastic, Hardening, RadialReturn), StrError> {
        let elastic = IsotropicElastic::new(70_000.0, 0.3)?;
        let hardening = Hardening::new(70_000.0, 6.0, hardening_modulus);
        let return_mapping = RadialReturn::new(&elastic);
        Ok((elastic, hardening, return_mapping))
    }

    #[test]
    fn elastic_trial_passes_through_unchanged() -> Result<(), StrError> {
        // uniaxial trial below a high yield stress
        let elastic = IsotropicElastic::new(70_000.0, 0.3)?;
        let hardening = Hardening::new(70_000.0, 250.0, 0.0);
        let mut return_mapping = RadialReturn::new(&elastic);
        let trial = Vector::from(&[200.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let mut state = PlasticState::new();
        let mut stress = Vector::new(6);
        let mut tangent = Matrix::new(6, 6);
        let is_plastic = return_mapping.apply(&mut stress, &mut tangent, &hardening, &trial, &mut state);
        assert!(!is_plastic);
        assert_eq!(stress.as_data(), trial.as_data());
        assert_eq!(state.eps_p, 0.0);
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(tangent.get(i, j), elastic.modulus().get(i, j));
            }
        }
        Ok(())
    }

    #[test]
    fn uniaxial_overstress_returns_to_surface() -> Result<(), StrError> {
        // perfect plasticity: the floored modulus keeps the corrected stress
        // within solver tolerance of the yield surface
        let (_, hardening, mut return_mapping) = new_fixture(0.0)?;
        let trial = Vector::from(&[8.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let mut state = PlasticState::new();
        let mut stress = Vector::new(6);
        let mut tangent = Matrix::new(6, 6);
        let is_plastic = return_mapping.apply(&mut stress, &mut tangent, &hardening, &trial, &mut state);
        assert!(is_plastic);
        assert!(state.eps_p > 0.0);
        let criterion = VonMises::new();
        approx_eq(criterion.equivalent_stress(&stress), 6.0, 1e-3);
        // the return is radial: the mean stress is untouched
        approx_eq(stress[0] + stress[1] + stress[2], 8.0, 1e-12);
        Ok(())
    }

    #[test]
    fn linear_hardening_lands_on_updated_surface() -> Result<(), StrError> {
        let (_, hardening, mut return_mapping) = new_fixture(800.0)?;
        let trial = Vector::from(&[8.0, 0.0, 0.0, 1.0, -0.5, 0.25]);
        let mut state = PlasticState::new();
        let mut stress = Vector::new(6);
        let mut tangent = Matrix::new(6, 6);
        let is_plastic = return_mapping.apply(&mut stress, &mut tangent, &hardening, &trial, &mut state);
        assert!(is_plastic);
        // sigma_eq(returned) = sigma_y0 + H eps_p_new, exactly for linear hardening
        let criterion = VonMises::new();
        approx_eq(
            criterion.equivalent_stress(&stress),
            hardening.yield_stress(state.eps_p),
            1e-10,
        );
        Ok(())
    }

    #[test]
    fn eps_p_is_monotone_under_repeated_loading() -> Result<(), StrError> {
        let (_, hardening, mut return_mapping) = new_fixture(800.0)?;
        let mut state = PlasticState::new();
        let mut stress = Vector::new(6);
        let mut tangent = Matrix::new(6, 6);
        let mut eps_p_prev = 0.0;
        for k in 1..5 {
            let trial = Vector::from(&[8.0 + (k as f64), 0.0, 0.0, 0.0, 0.0, 0.0]);
            return_mapping.apply(&mut stress, &mut tangent, &hardening, &trial, &mut state);
            assert!(state.eps_p >= eps_p_prev);
            eps_p_prev = state.eps_p;
        }
        Ok(())
    }

    #[test]
    fn consistent_tangent_is_symmetric() -> Result<(), StrError> {
        let (_, hardening, mut return_mapping) = new_fixture(800.0)?;
        let trial = Vector::from(&[9.0, -2.0, 1.0, 0.7, -0.3, 0.4]);
        let mut state = PlasticState::new();
        let mut stress = Vector::new(6);
        let mut tangent = Matrix::new(6, 6);
        let is_plastic = return_mapping.apply(&mut stress, &mut tangent, &hardening, &trial, &mut state);
        assert!(is_plastic);
        for i in 0..6 {
            for j in 0..6 {
                approx_eq(tangent.get(i, j), tangent.get(j, i), 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn apply_is_idempotent_for_equal_inputs() -> Result<(), StrError> {
        let (_, hardening, mut return_mapping) = new_fixture(800.0)?;
        let trial = Vector::from(&[8.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        let mut state_a = PlasticState::new();
        let mut state_b = PlasticState::new();
        let mut stress_a = Vector::new(6);
        let mut stress_b = Vector::new(6);
        let mut tangent = Matrix::new(6, 6);
        return_mapping.apply(&mut stress_a, &mut tangent, &hardening, &trial, &mut state_a);
        return_mapping.apply(&mut stress_b, &mut tangent, &hardening, &trial, &mut state_b);
        assert_eq!(stress_a.as_data(), stress_b.as_data());
        assert_eq!(state_a.eps_p, state_b.eps_p);
        Ok(())
    }

    #[test]
    fn consistent_tangent_matches_finite_differences() -> Result<(), StrError> {
        // the tangent must be the exact derivative of the discrete update
        // (stress as a function of engineering strain via the elastic trial)
        let (elastic, hardening, mut return_mapping) = new_fixture(800.0)?;
        let strain = Vector::from(&[4e-4, -1e-4, 0.5e-4, 2e-4, -1.5e-4, 1e-4]);
        let mut update = |eps: &Vector, stress: &mut Vector, tangent: &mut Matrix| {
            let mut trial = Vector::new(6);
            mat_vec_mul(&mut trial, 1.0, elastic.modulus(), eps).unwrap();
            let mut state = PlasticState::new();
            return_mapping.apply(stress, tangent, &hardening, &trial, &mut state)
        };
        let mut stress = Vector::new(6);
        let mut tangent = Matrix::new(6, 6);
        let is_plastic = update(&strain, &mut stress, &mut tangent);
        assert!(is_plastic); // well beyond the elastic domain
        let h = 1e-7;
        let mut scratch_tangent = Matrix::new(6, 6);
        let mut stress_plus = Vector::new(6);
        let mut stress_minus = Vector::new(6);
        for j in 0..6 {
            let mut plus = strain.clone();
            let mut minus = strain.clone();
            plus[j] += h;
            minus[j] -= h;
            update(&plus, &mut stress_plus, &mut scratch_tangent);
            update(&minus, &mut stress_minus, &mut scratch_tangent);
            for i in 0..6 {
                let fd = (stress_plus[i] - stress_minus[i]) / (2.0 * h);
                approx_eq(tangent.get(i, j), fd, 1e-1);
            }
        }
        Ok(())
    }

    #[test]
    fn plastic_strain_follows_the_flow_direction() -> Result<(), StrError> {
        let (_, hardening, mut return_mapping) = new_fixture(800.0)?;
        let trial = Vector::from(&[8.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let mut state = PlasticState::new();
        let mut stress = Vector::new(6);
        let mut tangent = Matrix::new(6, 6);
        return_mapping.apply(&mut stress, &mut tangent, &hardening, &trial, &mut state);
        // uniaxial flow direction is (1, -1/2, -1/2, 0, 0, 0)
        let dgamma = state.eps_p;
        vec_approx_eq(
            &state.plastic_strain,
            &[dgamma, -0.5 * dgamma, -0.5 * dgamma, 0.0, 0.0, 0.0],
            1e-12,
        );
        Ok(())
    }
}
