use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds the history (internal) variables of one integration point
///
/// The stress lives in the work-conjugate measure of the element formulation:
/// second Piola-Kirchhoff for Total-Lagrangian elements and Cauchy for
/// Updated-Lagrangian elements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlasticState {
    /// Stress in Voigt form
    pub stress: Vector,

    /// Accumulated equivalent plastic strain (never decreases across committed states)
    pub eps_p: f64,

    /// Plastic strain in Voigt form
    pub plastic_strain: Vector,

    /// Back stress in Voigt form (reserved for kinematic hardening)
    pub back_stress: Vector,
}

impl PlasticState {
    /// Allocates a new zero-valued (virgin) state
    pub fn new() -> Self {
        PlasticState {
            stress: Vector::new(6),
            eps_p: 0.0,
            plastic_strain: Vector::new(6),
            back_stress: Vector::new(6),
        }
    }
}

/// Holds the committed and trial state generations of an element's integration points
///
/// During Newton iterations only the trial generation is mutated; when the
/// global step converges, [`ArrPlasticState::commit`] promotes the trial
/// states. A failed step simply leaves the committed generation untouched.
pub struct ArrPlasticState {
    /// States locked in at the last converged step
    pub committed: Vec<PlasticState>,

    /// States being rewritten by the current iteration
    pub trial: Vec<PlasticState>,
}

impl ArrPlasticState {
    /// Allocates both generations with zero-valued states
    pub fn new(n_integ_point: usize) -> Self {
        ArrPlasticState {
            committed: (0..n_integ_point).map(|_| PlasticState::new()).collect(),
            trial: (0..n_integ_point).map(|_| PlasticState::new()).collect(),
        }
    }

    /// Promotes the trial states to committed (call only after global convergence)
    pub fn commit(&mut self) {
        for i in 0..self.committed.len() {
            self.committed[i] = self.trial[i].clone();
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ArrPlasticState, PlasticState};
    use russell_lab::vec_approx_eq;

    #[test]
    fn new_state_is_zeroed() {
        let state = PlasticState::new();
        assert_eq!(state.eps_p, 0.0);
        vec_approx_eq(&state.stress, &[0.0; 6], 1e-15);
        vec_approx_eq(&state.plastic_strain, &[0.0; 6], 1e-15);
        vec_approx_eq(&state.back_stress, &[0.0; 6], 1e-15);
    }

    #[test]
    fn clone_is_independent() {
        let mut state = PlasticState::new();
        let copy = state.clone();
        state.stress[0] = 123.0;
        state.eps_p = 0.5;
        assert_eq!(copy.stress[0], 0.0);
        assert_eq!(copy.eps_p, 0.0);
    }

    #[test]
    fn commit_promotes_trial_states() {
        let mut arr = ArrPlasticState::new(2);
        arr.trial[0].eps_p = 0.1;
        arr.trial[1].stress[2] = -4.0;
        assert_eq!(arr.committed[0].eps_p, 0.0);
        arr.commit();
        assert_eq!(arr.committed[0].eps_p, 0.1);
        assert_eq!(arr.committed[1].stress[2], -4.0);
        // committing again is harmless
        arr.commit();
        assert_eq!(arr.committed[0].eps_p, 0.1);
    }

    #[test]
    fn serde_round_trip_works() {
        let mut state = PlasticState::new();
        state.stress[0] = 1.0;
        state.eps_p = 2e-3;
        let json = serde_json::to_string(&state).unwrap();
        let back: PlasticState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stress[0], 1.0);
        assert_eq!(back.eps_p, 2e-3);
    }
}
