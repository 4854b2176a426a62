//! Shared hex8 kinematics helpers used by both element formulations

use crate::base::{Cell, NDOF_PER_NODE, N_GAUSS_HEX, N_NODE_HEX};
use russell_lab::{Matrix, Vector};

/// Local (natural) coordinates of the hex8 nodes
pub(crate) const HEX_NODE_LOCAL: [[f64; 3]; N_NODE_HEX] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Computes the local shape-function derivative matrices (3x8) at the
/// 2x2x2 Gauss points (all integration weights equal 1)
pub(crate) fn calc_local_gradients() -> Vec<Matrix> {
    let p = 1.0 / f64::sqrt(3.0);
    let coords = [-p, p];
    let mut all = Vec::with_capacity(N_GAUSS_HEX);
    for xi in coords {
        for eta in coords {
            for zeta in coords {
                let mut dd = Matrix::new(3, N_NODE_HEX);
                for m in 0..N_NODE_HEX {
                    let (r, s, t) = (HEX_NODE_LOCAL[m][0], HEX_NODE_LOCAL[m][1], HEX_NODE_LOCAL[m][2]);
                    dd.set(0, m, 0.125 * r * (1.0 + s * eta) * (1.0 + t * zeta));
                    dd.set(1, m, 0.125 * (1.0 + r * xi) * s * (1.0 + t * zeta));
                    dd.set(2, m, 0.125 * (1.0 + r * xi) * (1.0 + s * eta) * t);
                }
                all.push(dd);
            }
        }
    }
    all
}

/// Computes the local-to-global DOF mapping of a cell (24 entries)
pub(crate) fn calc_dof_indices(cell: &Cell) -> Vec<usize> {
    let mut l2g = Vec::with_capacity(N_NODE_HEX * NDOF_PER_NODE);
    for point in &cell.points {
        for dof in 0..NDOF_PER_NODE {
            l2g.push(point * NDOF_PER_NODE + dof);
        }
    }
    l2g
}

/// Gathers the element nodal displacements (8x3) from the global vector
pub(crate) fn extract_displacement(u_ele: &mut Matrix, l2g: &[usize], uu: &Vector) {
    for m in 0..N_NODE_HEX {
        for dof in 0..NDOF_PER_NODE {
            u_ele.set(m, dof, uu[l2g[m * NDOF_PER_NODE + dof]]);
        }
    }
}

/// Computes the deformation gradient F = I + du/dX
///
/// `dn_dx` holds the shape-function derivatives w.r.t. the reference
/// coordinates (3x8); `u_ele` holds the nodal displacements (8x3).
pub(crate) fn calc_deformation_gradient(ff: &mut Matrix, u_ele: &Matrix, dn_dx: &Matrix) {
    for i in 0..3 {
        for j in 0..3 {
            let mut sum = if i == j { 1.0 } else { 0.0 };
            for m in 0..N_NODE_HEX {
                sum += u_ele.get(m, i) * dn_dx.get(j, m);
            }
            ff.set(i, j, sum);
        }
    }
}

/// Adds the geometric (initial stress) stiffness contribution
///
/// The contribution has Kronecker structure: the scalar
/// `g = dN_m' sigma dN_n dv` lands on the three displacement components of
/// the (m, n) node pair.
pub(crate) fn add_geometric_stiffness(ke: &mut Matrix, dn: &Matrix, sigma: &Matrix, dv: f64) {
    for m in 0..N_NODE_HEX {
        for n in 0..N_NODE_HEX {
            let mut g = 0.0;
            for i in 0..3 {
                for j in 0..3 {
                    g += dn.get(i, m) * sigma.get(i, j) * dn.get(j, n);
                }
            }
            g *= dv;
            for dof in 0..NDOF_PER_NODE {
                let (r, c) = (m * NDOF_PER_NODE + dof, n * NDOF_PER_NODE + dof);
                ke.set(r, c, ke.get(r, c) + g);
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
