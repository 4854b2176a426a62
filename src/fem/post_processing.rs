use super::Elements;
use crate::base::Mesh;
use crate::material::von_mises_stress;
use crate::StrError;
use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Holds recovered (nodal) stresses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodalStresses {
    /// Cauchy stress components at each point (n_point by 6, Voigt order)
    pub sigma: Matrix,

    /// Von Mises equivalent stress at each point
    pub mises: Vector,
}

/// Recovers nodal stresses by averaging the element stresses at shared points
///
/// Each element contributes its average Cauchy stress to all of its points;
/// points shared by several elements receive the mean of the contributions.
pub fn recover_nodal_stresses(mesh: &Mesh, elements: &Elements, uu: &Vector) -> Result<NodalStresses, StrError> {
    let n_point = mesh.points.len();
    let mut sigma = Matrix::new(n_point, 6);
    let mut count = vec![0.0_f64; n_point];
    let mut sig_e = Vector::new(6);
    for (cell, element) in mesh.cells.iter().zip(elements.all.iter()) {
        element.actual.cauchy_stress(&mut sig_e, uu)?;
        for point in &cell.points {
            for k in 0..6 {
                sigma.set(*point, k, sigma.get(*point, k) + sig_e[k]);
            }
            count[*point] += 1.0;
        }
    }
    let mut mises = Vector::new(n_point);
    let mut aux = Vector::new(6);
    for point in 0..n_point {
        let c = if count[point] > 0.0 { count[point] } else { 1.0 };
        for k in 0..6 {
            sigma.set(point, k, sigma.get(point, k) / c);
            aux[k] = sigma.get(point, k);
        }
        mises[point] = von_mises_stress(&aux);
    }
    Ok(NodalStresses { sigma, mises })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
