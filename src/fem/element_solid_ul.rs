use super::element_solid_tl::{MIN_DET_FF, MIN_DET_JAC};
use super::hex;
use super::ElementTrait;
use crate::base::{mat_det_3x3, mat_inv_3x3, Cell, Mesh, NDOF_HEX, N_GAUSS_HEX, N_NODE_HEX};
use crate::material::{voigt_to_tensor, ArrPlasticState, Elastoplastic, ParamSolid};
use crate::StrError;
use russell_lab::{mat_mat_mul, mat_t_mat_mul, Matrix, Vector};

/// Implements the Updated-Lagrangian hex8 solid element
///
/// All integrals are taken over the current (deformed) configuration. The
/// stress returned by the material model is interpreted as Cauchy stress,
/// paired with the linear strain-displacement matrix built from derivatives
/// w.r.t. the current coordinates.
pub struct ElementSolidUl {
    /// Material model
    model: Elastoplastic,

    /// Local-to-global DOF mapping (24 entries)
    local_to_global: Vec<usize>,

    /// Reference coordinates of the 8 nodes (8x3)
    xx_ref: Matrix,

    /// Local shape-derivative matrices at the Gauss points (each 3x8)
    gradients: Vec<Matrix>,

    /// Committed and trial integration-point states
    states: ArrPlasticState,

    /// Auxiliary: nodal displacements (8x3)
    u_ele: Matrix,

    /// Auxiliary: current coordinates (8x3)
    xx_cur: Matrix,

    /// Auxiliary: Jacobian and its inverse (3x3)
    jac: Matrix,
    jac_inv: Matrix,

    /// Auxiliary: shape derivatives w.r.t. reference coordinates (3x8)
    dn_dx0: Matrix,

    /// Auxiliary: shape derivatives w.r.t. current coordinates (3x8)
    dn_dx: Matrix,

    /// Auxiliary: deformation gradient (3x3)
    ff: Matrix,

    /// Auxiliary: linear strain-displacement matrix (6x24)
    bb: Matrix,

    /// Auxiliary: tangent times bb (6x24)
    db: Matrix,

    /// Auxiliary: stress tensor form (3x3)
    sig: Matrix,
}

impl ElementSolidUl {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, cell: &Cell, param: &ParamSolid) -> Result<Self, StrError> {
        let model = Elastoplastic::new(param)?;
        let local_to_global = hex::calc_dof_indices(cell);
        let mut xx_ref = Matrix::new(N_NODE_HEX, 3);
        for (m, point) in cell.points.iter().enumerate() {
            for j in 0..3 {
                xx_ref.set(m, j, mesh.points[*point].coords[j]);
            }
        }
        Ok(ElementSolidUl {
            model,
            local_to_global,
            xx_ref,
            gradients: hex::calc_local_gradients(),
            states: ArrPlasticState::new(N_GAUSS_HEX),
            u_ele: Matrix::new(N_NODE_HEX, 3),
            xx_cur: Matrix::new(N_NODE_HEX, 3),
            jac: Matrix::new(3, 3),
            jac_inv: Matrix::new(3, 3),
            dn_dx0: Matrix::new(3, N_NODE_HEX),
            dn_dx: Matrix::new(3, N_NODE_HEX),
            ff: Matrix::new(3, 3),
            bb: Matrix::new(6, NDOF_HEX),
            db: Matrix::new(6, NDOF_HEX),
            sig: Matrix::new(3, 3),
        })
    }

    /// Builds the linear strain-displacement matrix from current-configuration derivatives
    fn calc_bb_matrix(&mut self) {
        self.bb.fill(0.0);
        for m in 0..N_NODE_HEX {
            let c = 3 * m;
            let (d0, d1, d2) = (self.dn_dx.get(0, m), self.dn_dx.get(1, m), self.dn_dx.get(2, m));
            self.bb.set(0, c, d0);
            self.bb.set(1, c + 1, d1);
            self.bb.set(2, c + 2, d2);
            self.bb.set(3, c + 1, d2);
            self.bb.set(3, c + 2, d1);
            self.bb.set(4, c, d2);
            self.bb.set(4, c + 2, d0);
            self.bb.set(5, c, d1);
            self.bb.set(5, c + 1, d0);
        }
    }
}

impl ElementTrait for ElementSolidUl {
    fn local_to_global(&self) -> &Vec<usize> {
        &self.local_to_global
    }

    fn calc_ke_fe(&mut self, ke: &mut Matrix, fe: &mut Vector, uu: &Vector) -> Result<(), StrError> {
        ke.fill(0.0);
        fe.fill(0.0);
        hex::extract_displacement(&mut self.u_ele, &self.local_to_global, uu);
        for m in 0..N_NODE_HEX {
            for j in 0..3 {
                self.xx_cur.set(m, j, self.xx_ref.get(m, j) + self.u_ele.get(m, j));
            }
        }
        for index in 0..N_GAUSS_HEX {
            let dn_dxi = &self.gradients[index];

            // reference Jacobian (needed for the deformation gradient)
            mat_mat_mul(&mut self.jac, 1.0, dn_dxi, &self.xx_ref, 0.0).unwrap();
            if mat_det_3x3(&self.jac) <= MIN_DET_JAC {
                return Err("degenerate or inverted element detected in the reference configuration");
            }
            mat_inv_3x3(&mut self.jac_inv, &self.jac)?;
            mat_mat_mul(&mut self.dn_dx0, 1.0, &self.jac_inv, dn_dxi, 0.0).unwrap();
            hex::calc_deformation_gradient(&mut self.ff, &self.u_ele, &self.dn_dx0);
            if mat_det_3x3(&self.ff) <= MIN_DET_FF {
                return Err("excessive compression detected in the current configuration");
            }

            // current-configuration Jacobian and Cartesian shape derivatives
            mat_mat_mul(&mut self.jac, 1.0, dn_dxi, &self.xx_cur, 0.0).unwrap();
            let det_jac = mat_det_3x3(&self.jac);
            if det_jac <= MIN_DET_JAC {
                return Err("degenerate element detected in the current configuration");
            }
            mat_inv_3x3(&mut self.jac_inv, &self.jac)?;
            mat_mat_mul(&mut self.dn_dx, 1.0, &self.jac_inv, dn_dxi, 0.0).unwrap();

            // constitutive update (stress interpreted as Cauchy)
            let result = self.model.calc_stress(&self.ff, &self.states.committed[index])?;

            // internal force: B' sigma dv over the current volume
            self.calc_bb_matrix();
            let dv = det_jac;
            for i in 0..NDOF_HEX {
                let mut sum = 0.0;
                for k in 0..6 {
                    sum += self.bb.get(k, i) * result.stress[k];
                }
                fe[i] += sum * dv;
            }

            // material stiffness: B' D_alg B dv
            mat_mat_mul(&mut self.db, 1.0, &result.tangent, &self.bb, 0.0).unwrap();
            mat_t_mat_mul(ke, dv, &self.bb, &self.db, 1.0).unwrap();

            // geometric stiffness from the Cauchy stress
            voigt_to_tensor(&mut self.sig, &result.stress);
            hex::add_geometric_stiffness(ke, &self.dn_dx, &self.sig, dv);

            self.states.trial[index] = result.state;
        }
        Ok(())
    }

    fn commit_state(&mut self) {
        self.states.commit();
    }

    fn cauchy_stress(&self, sigma: &mut Vector, _uu: &Vector) -> Result<(), StrError> {
        // the committed stress is already Cauchy; average over the Gauss points
        sigma.fill(0.0);
        for state in &self.states.committed {
            for k in 0..6 {
                sigma[k] += state.stress[k];
            }
        }
        for k in 0..6 {
            sigma[k] /= N_GAUSS_HEX as f64;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
