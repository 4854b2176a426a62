use crate::StrError;
use russell_lab::Matrix;

/// Computes the determinant of a 3x3 matrix
pub fn mat_det_3x3(a: &Matrix) -> f64 {
    a.get(0, 0) * (a.get(1, 1) * a.get(2, 2) - a.get(1, 2) * a.get(2, 1))
        - a.get(0, 1) * (a.get(1, 0) * a.get(2, 2) - a.get(1, 2) * a.get(2, 0))
        + a.get(0, 2) * (a.get(1, 0) * a.get(2, 1) - a.get(1, 1) * a.get(2, 0))
}

/// Computes the inverse of a 3x3 matrix and returns its determinant
pub fn mat_inv_3x3(ai: &mut Matrix, a: &Matrix) -> Result<f64, StrError> {
    let det = mat_det_3x3(a);
    if f64::abs(det) < 1e-13 {
        return Err("cannot invert near-singular 3x3 matrix");
    }
    ai.set(0, 0, (a.get(1, 1) * a.get(2, 2) - a.get(1, 2) * a.get(2, 1)) / det);
    ai.set(0, 1, (a.get(0, 2) * a.get(2, 1) - a.get(0, 1) * a.get(2, 2)) / det);
    ai.set(0, 2, (a.get(0, 1) * a.get(1, 2) - a.get(0, 2) * a.get(1, 1)) / det);
    ai.set(1, 0, (a.get(1, 2) * a.get(2, 0) - a.get(1, 0) * a.get(2, 2)) / det);
    ai.set(1, 1, (a.get(0, 0) * a.get(2, 2) - a.get(0, 2) * a.get(2, 0)) / det);
    ai.set(1, 2, (a.get(0, 2) * a.get(1, 0) - a.get(0, 0) * a.get(1, 2)) / det);
    ai.set(2, 0, (a.get(1, 0) * a.get(2, 1) - a.get(1, 1) * a.get(2, 0)) / det);
    ai.set(2, 1, (a.get(0, 1) * a.get(2, 0) - a.get(0, 0) * a.get(2, 1)) / det);
    ai.set(2, 2, (a.get(0, 0) * a.get(1, 1) - a.get(0, 1) * a.get(1, 0)) / det);
    Ok(det)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{mat_det_3x3, mat_inv_3x3};
    use crate::StrError;
    use russell_lab::{approx_eq, mat_approx_eq, mat_mat_mul, Matrix};

    #[test]
    fn mat_det_3x3_works() {
        let a = Matrix::from(&[[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [1.0, 0.0, 6.0]]);
        approx_eq(mat_det_3x3(&a), 22.0, 1e-14);
        let identity = Matrix::from(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        approx_eq(mat_det_3x3(&identity), 1.0, 1e-15);
    }

    #[test]
    fn mat_inv_3x3_works() -> Result<(), StrError> {
        let a = Matrix::from(&[[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [1.0, 0.0, 6.0]]);
        let mut ai = Matrix::new(3, 3);
        let det = mat_inv_3x3(&mut ai, &a)?;
        approx_eq(det, 22.0, 1e-14);
        let mut a_ai = Matrix::new(3, 3);
        mat_mat_mul(&mut a_ai, 1.0, &a, &ai, 0.0)?;
        let identity = Matrix::from(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        mat_approx_eq(&a_ai, &identity, 1e-14);
        Ok(())
    }

    #[test]
    fn mat_inv_3x3_captures_singular_matrix() {
        let a = Matrix::from(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        let mut ai = Matrix::new(3, 3);
        assert_eq!(
            mat_inv_3x3(&mut ai, &a).err(),
            Some("cannot invert near-singular 3x3 matrix")
        );
    }
}
