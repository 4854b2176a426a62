use super::hex;
use super::ElementTrait;
use crate::base::{mat_det_3x3, mat_inv_3x3, Cell, Mesh, NDOF_HEX, N_GAUSS_HEX, N_NODE_HEX};
use crate::material::{voigt_to_tensor, ArrPlasticState, Elastoplastic, ParamSolid};
use crate::StrError;
use russell_lab::{mat_mat_mul, mat_t_mat_mul, Matrix, Vector};

/// Threshold below which the reference Jacobian determinant flags a
/// degenerate or inverted element
pub(crate) const MIN_DET_JAC: f64 = 1e-12;

/// Threshold below which det(F) flags excessive compression
pub(crate) const MIN_DET_FF: f64 = 1e-6;

/// Implements the Total-Lagrangian hex8 solid element
///
/// All integrals are taken over the reference configuration. The stress
/// measure is the second Piola-Kirchhoff tensor, work-conjugate to the
/// Green-Lagrange strain; the nonlinear strain-displacement matrix couples
/// the deformation gradient with the reference shape-function derivatives.
pub struct ElementSolidTl {
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

    /// Auxiliary: reference Jacobian and its inverse (3x3)
    jac: Matrix,
    jac_inv: Matrix,

    /// Auxiliary: shape-function derivatives w.r.t. reference coordinates (3x8)
    dn_dx: Matrix,

    /// Auxiliary: deformation gradient (3x3)
    ff: Matrix,

    /// Auxiliary: nonlinear strain-displacement matrix (6x24)
    bb: Matrix,

    /// Auxiliary: tangent times bb (6x24)
    db: Matrix,

    /// Auxiliary: stress tensor form (3x3)
    sig: Matrix,
}

impl ElementSolidTl {
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
        Ok(ElementSolidTl {
            model,
            local_to_global,
            xx_ref,
            gradients: hex::calc_local_gradients(),
            states: ArrPlasticState::new(N_GAUSS_HEX),
            u_ele: Matrix::new(N_NODE_HEX, 3),
            jac: Matrix::new(3, 3),
            jac_inv: Matrix::new(3, 3),
            dn_dx: Matrix::new(3, N_NODE_HEX),
            ff: Matrix::new(3, 3),
            bb: Matrix::new(6, NDOF_HEX),
            db: Matrix::new(6, NDOF_HEX),
            sig: Matrix::new(3, 3),
        })
    }

    /// Builds the nonlinear strain-displacement matrix B(F, dN/dX)
    ///
    /// Row layout follows the Voigt order (xx, yy, zz, yz, xz, xy) of the
    /// Green-Lagrange strain variation.
    fn calc_bb_matrix(&mut self) {
        for m in 0..N_NODE_HEX {
            let c = 3 * m;
            let (d0, d1, d2) = (self.dn_dx.get(0, m), self.dn_dx.get(1, m), self.dn_dx.get(2, m));
            for k in 0..3 {
                let (f0, f1, f2) = (self.ff.get(k, 0), self.ff.get(k, 1), self.ff.get(k, 2));
                self.bb.set(0, c + k, f0 * d0);
                self.bb.set(1, c + k, f1 * d1);
                self.bb.set(2, c + k, f2 * d2);
                self.bb.set(3, c + k, f1 * d2 + f2 * d1);
                self.bb.set(4, c + k, f0 * d2 + f2 * d0);
                self.bb.set(5, c + k, f0 * d1 + f1 * d0);
            }
        }
    }
}

impl ElementTrait for ElementSolidTl {
    fn local_to_global(&self) -> &Vec<usize> {
        &self.local_to_global
    }

    fn calc_ke_fe(&mut self, ke: &mut Matrix, fe: &mut Vector, uu: &Vector) -> Result<(), StrError> {
        ke.fill(0.0);
        fe.fill(0.0);
        hex::extract_displacement(&mut self.u_ele, &self.local_to_global, uu);
        for index in 0..N_GAUSS_HEX {
            // reference Jacobian and Cartesian shape derivatives
            let dn_dxi = &self.gradients[index];
            mat_mat_mul(&mut self.jac, 1.0, dn_dxi, &self.xx_ref, 0.0).unwrap();
            let det_jac = mat_det_3x3(&self.jac);
            if det_jac <= MIN_DET_JAC {
                return Err("degenerate or inverted element detected in the reference configuration");
            }
            mat_inv_3x3(&mut self.jac_inv, &self.jac)?;
            mat_mat_mul(&mut self.dn_dx, 1.0, &self.jac_inv, dn_dxi, 0.0).unwrap();

            // deformation gradient and constitutive update
            hex::calc_deformation_gradient(&mut self.ff, &self.u_ele, &self.dn_dx);
            let result = self.model.calc_stress(&self.ff, &self.states.committed[index])?;

            // internal force: B' S dv (integration weight is 1)
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

            // geometric stiffness from the second Piola-Kirchhoff stress
            voigt_to_tensor(&mut self.sig, &result.stress);
            hex::add_geometric_stiffness(ke, &self.dn_dx, &self.sig, dv);

            self.states.trial[index] = result.state;
        }
        Ok(())
    }

    fn commit_state(&mut self) {
        self.states.commit();
    }

    fn cauchy_stress(&self, sigma: &mut Vector, uu: &Vector) -> Result<(), StrError> {
        sigma.fill(0.0);
        let mut u_ele = Matrix::new(N_NODE_HEX, 3);
        hex::extract_displacement(&mut u_ele, &self.local_to_global, uu);
        let mut jac = Matrix::new(3, 3);
        let mut jac_inv = Matrix::new(3, 3);
        let mut dn_dx = Matrix::new(3, N_NODE_HEX);
        let mut ff = Matrix::new(3, 3);
        let mut ss = Matrix::new(3, 3);
        let mut fs = Matrix::new(3, 3);
        let mut sig = Matrix::new(3, 3);
        let mut count = 0.0;
        for index in 0..N_GAUSS_HEX {
            let dn_dxi = &self.gradients[index];
            mat_mat_mul(&mut jac, 1.0, dn_dxi, &self.xx_ref, 0.0).unwrap();
            if mat_det_3x3(&jac) <= MIN_DET_JAC {
                continue;
            }
            mat_inv_3x3(&mut jac_inv, &jac)?;
            mat_mat_mul(&mut dn_dx, 1.0, &jac_inv, dn_dxi, 0.0).unwrap();
            hex::calc_deformation_gradient(&mut ff, &u_ele, &dn_dx);
            let det_ff = mat_det_3x3(&ff);
            if det_ff <= MIN_DET_FF {
                continue;
            }
            // push-forward: sigma = F S F' / det(F)
            voigt_to_tensor(&mut ss, &self.states.committed[index].stress);
            mat_mat_mul(&mut fs, 1.0, &ff, &ss, 0.0).unwrap();
            for i in 0..3 {
                for j in 0..3 {
                    let mut sum = 0.0;
                    for k in 0..3 {
                        sum += fs.get(i, k) * ff.get(j, k);
                    }
                    sig.set(i, j, sum / det_ff);
                }
            }
            sigma[0] += sig.get(0, 0);
            sigma[1] += sig.get(1, 1);
            sigma[2] += sig.get(2, 2);
            sigma[3] += sig.get(1, 2);
            sigma[4] += sig.get(0, 2);
            sigma[5] += sig.get(0, 1);
            count += 1.0;
        }
        if count > 0.0 {
            for k in 0..6 {
                sigma[k] /= count;
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
