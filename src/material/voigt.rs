use russell_lab::{Matrix, Vector};

/// Maps a symmetric 3x3 tensor to its Voigt 6-vector
///
/// Component order: (xx, yy, zz, yz, xz, xy). With `engineering = true` the
/// shear entries are doubled (strain convention); otherwise they hold the
/// tensor components themselves (stress convention).
pub fn tensor_to_voigt(vv: &mut Vector, tt: &Matrix, engineering: bool) {
    let f = if engineering { 2.0 } else { 1.0 };
    vv[0] = tt.get(0, 0);
    vv[1] = tt.get(1, 1);
    vv[2] = tt.get(2, 2);
    vv[3] = f * tt.get(1, 2);
    vv[4] = f * tt.get(0, 2);
    vv[5] = f * tt.get(0, 1);
}

/// Maps a Voigt 6-vector in stress convention back to a symmetric 3x3 tensor
pub fn voigt_to_tensor(tt: &mut Matrix, vv: &Vector) {
    tt.set(0, 0, vv[0]);
    tt.set(1, 1, vv[1]);
    tt.set(2, 2, vv[2]);
    tt.set(1, 2, vv[3]);
    tt.set(2, 1, vv[3]);
    tt.set(0, 2, vv[4]);
    tt.set(2, 0, vv[4]);
    tt.set(0, 1, vv[5]);
    tt.set(1, 0, vv[5]);
}

/// Computes the von Mises equivalent stress of a Voigt vector (stress convention)
pub fn von_mises_stress(vv: &Vector) -> f64 {
    let (sx, sy, sz) = (vv[0], vv[1], vv[2]);
    let (tyz, txz, txy) = (vv[3], vv[4], vv[5]);
    f64::sqrt(
        sx * sx + sy * sy + sz * sz - sx * sy - sy * sz - sz * sx + 3.0 * (tyz * tyz + txz * txz + txy * txy),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
