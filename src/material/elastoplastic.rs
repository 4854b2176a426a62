use super::{Hardening, IsotropicElastic, ParamSolid, PlasticState, RadialReturn};
use crate::StrError;
use russell_lab::{mat_copy, mat_t_mat_mul, Matrix, Vector};

/// Holds the results of a constitutive evaluation
pub struct StressResult {
    /// Stress in Voigt form (work-conjugate to the element formulation)
    pub stress: Vector,

    /// Consistent tangent operator (6x6, symmetric)
    pub tangent: Matrix,

    /// Updated internal state (the input state is never modified)
    pub state: PlasticState,

    /// Whether plastic flow occurred
    pub is_plastic: bool,
}

/// Implements the composable J2 elastoplastic model
///
/// Composition: isotropic elastic law + von Mises criterion + hardening law +
/// radial-return integrator. The strain measure is derived internally from
/// the deformation gradient (Green-Lagrange, engineering Voigt form); hence
/// the same model serves both the reference- and current-configuration
/// elements.
///
/// [`Elastoplastic::calc_stress`] is a pure function of (F, prior state):
/// calling it twice with the same inputs yields identical results, which is
/// what allows the solver to re-evaluate trial states freely during line
/// search and cutback.
pub struct Elastoplastic {
    /// Elastic law (owns the 6x6 operator)
    pub elastic: IsotropicElastic,

    /// Hardening law and return-mapping integrator (None for a purely elastic material)
    plastic: Option<(Hardening, RadialReturn)>,

    /// Auxiliary: right Cauchy-Green tensor
    aux_cc: Matrix,

    /// Auxiliary: Green-Lagrange strain in engineering Voigt form
    aux_strain: Vector,

    /// Auxiliary: elastic trial stress
    aux_trial: Vector,
}

impl Elastoplastic {
    /// Allocates a new instance from the solid parameters
    pub fn new(param: &ParamSolid) -> Result<Self, StrError> {
        param.validate()?;
        let elastic = IsotropicElastic::new(param.young, param.poisson)?;
        let plastic = match param.plasticity {
            Some(p) => {
                let hardening = Hardening::new(param.young, p.yield_stress, p.hardening);
                let return_mapping = RadialReturn::new(&elastic);
                Some((hardening, return_mapping))
            }
            None => None,
        };
        Ok(Elastoplastic {
            elastic,
            plastic,
            aux_cc: Matrix::new(3, 3),
            aux_strain: Vector::new(6),
            aux_trial: Vector::new(6),
        })
    }

    /// Creates a zero-valued initial state for one integration point
    pub fn initial_state(&self) -> PlasticState {
        PlasticState::new()
    }

    /// Evaluates stress, consistent tangent, and updated state for a deformation gradient
    pub fn calc_stress(&mut self, ff: &Matrix, prior: &PlasticState) -> Result<StressResult, StrError> {
        // Green-Lagrange strain E = (F'F - I)/2 in engineering Voigt form
        mat_t_mat_mul(&mut self.aux_cc, 1.0, ff, ff, 0.0).unwrap();
        self.aux_strain[0] = 0.5 * (self.aux_cc.get(0, 0) - 1.0);
        self.aux_strain[1] = 0.5 * (self.aux_cc.get(1, 1) - 1.0);
        self.aux_strain[2] = 0.5 * (self.aux_cc.get(2, 2) - 1.0);
        self.aux_strain[3] = self.aux_cc.get(1, 2);
        self.aux_strain[4] = self.aux_cc.get(0, 2);
        self.aux_strain[5] = self.aux_cc.get(0, 1);

        // elastic trial stress
        self.elastic.calc_stress(&mut self.aux_trial, &self.aux_strain);

        // plastic corrector
        let mut result = StressResult {
            stress: Vector::new(6),
            tangent: Matrix::new(6, 6),
            state: prior.clone(),
            is_plastic: false,
        };
        match &mut self.plastic {
            Some((hardening, return_mapping)) => {
                result.is_plastic = return_mapping.apply(
                    &mut result.stress,
                    &mut result.tangent,
                    hardening,
                    &self.aux_trial,
                    &mut result.state,
                );
            }
            None => {
                for i in 0..6 {
                    result.stress[i] = self.aux_trial[i];
                }
                mat_copy(&mut result.tangent, self.elastic.modulus()).unwrap();
            }
        }
        for i in 0..6 {
            result.state.stress[i] = result.stress[i];
        }
        Ok(result)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
