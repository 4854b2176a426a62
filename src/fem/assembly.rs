use super::Elements;
use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_sparse::{CooMatrix, SparseMatrix};

/// Assembles a local matrix into the global sparse (triplet) matrix
///
/// Also accumulates the dense diagonal of the global matrix, which the
/// penalty enforcer later scans for its adaptive coefficient.
pub fn assemble_matrix(kk: &mut CooMatrix, diag: &mut Vector, ke: &Matrix, l2g: &[usize]) -> Result<(), StrError> {
    let (nrow, ncol) = ke.dims();
    for i in 0..nrow {
        for j in 0..ncol {
            kk.put(l2g[i], l2g[j], ke.get(i, j))?;
            if l2g[i] == l2g[j] {
                diag[l2g[i]] += ke.get(i, j);
            }
        }
    }
    Ok(())
}

/// Assembles a local vector into the global vector
pub fn assemble_vector(ff: &mut Vector, fe: &Vector, l2g: &[usize]) {
    for i in 0..fe.dim() {
        ff[l2g[i]] += fe[i];
    }
}

/// Performs the global assembly of the tangent matrix and internal forces
pub struct Assembler {
    /// Message of the last element failure, if any
    pub last_failure: Option<StrError>,
}

impl Assembler {
    /// Allocates a new instance
    pub fn new() -> Self {
        Assembler { last_failure: None }
    }

    /// Assembles the global tangent matrix and (optionally) the internal forces
    ///
    /// Returns `Ok(true)` when any element reports a geometric failure; the
    /// element loop aborts immediately and the partially filled matrix must
    /// be discarded (it is reset at the beginning of the next call). Only
    /// allocation/layout problems are returned as hard errors.
    pub fn assemble(
        &mut self,
        elements: &mut Elements,
        kk: &mut SparseMatrix,
        mut ff_int: Option<&mut Vector>,
        diag: &mut Vector,
        uu: &Vector,
    ) -> Result<bool, StrError> {
        kk.reset()?;
        diag.fill(0.0);
        if let Some(ff) = ff_int.as_deref_mut() {
            ff.fill(0.0);
        }
        self.last_failure = None;
        let coo = kk.get_coo_mut()?;
        for element in &mut elements.all {
            if let Err(message) = element.actual.calc_ke_fe(&mut element.ke, &mut element.fe, uu) {
                self.last_failure = Some(message);
                return Ok(true);
            }
            let l2g = element.actual.local_to_global();
            assemble_matrix(coo, diag, &element.ke, l2g)?;
            if let Some(ff) = ff_int.as_deref_mut() {
                assemble_vector(ff, &element.fe, l2g);
            }
        }
        Ok(false)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{assemble_vector, Assembler};
    use crate::base::{Config, Mesh, NDOF_HEX};
    use crate::fem::{Elements, FemBase};
    use crate::material::ParamSolid;
    use crate::StrError;
    use russell_lab::Vector;
    use russell_sparse::{SparseMatrix, Sym};

    #[test]
    fn assemble_vector_works() {
        let mut ff = Vector::new(6);
        let fe = Vector::from(&[1.0, 2.0, 3.0]);
        assemble_vector(&mut ff, &fe, &[4, 0, 2]);
        assemble_vector(&mut ff, &fe, &[4, 1, 2]);
        assert_eq!(ff.as_data(), &[2.0, 2.0, 6.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn assemble_fills_matrix_and_diag() -> Result<(), StrError> {
        let mesh = Mesh::one_hex8();
        let base = FemBase::new(&mesh, [(1, ParamSolid::sample_linear_elastic())])?;
        let config = Config::new();
        let mut elements = Elements::new(&mesh, &base, &config)?;
        let mut kk = SparseMatrix::new_coo(24, 24, NDOF_HEX * NDOF_HEX, Sym::No)?;
        let mut ff_int = Vector::new(24);
        let mut diag = Vector::new(24);
        let uu = Vector::new(24);
        let mut assembler = Assembler::new();
        let failed = assembler.assemble(&mut elements, &mut kk, Some(&mut ff_int), &mut diag, &uu)?;
        assert!(!failed);
        assert!(assembler.last_failure.is_none());
        // at rest the internal forces vanish but the stiffness diagonal is positive
        for i in 0..24 {
            assert!(f64::abs(ff_int[i]) < 1e-12);
            assert!(diag[i] > 0.0);
        }
        // assembling again resets everything (no double accumulation)
        let diag0 = diag[0];
        assembler.assemble(&mut elements, &mut kk, Some(&mut ff_int), &mut diag, &uu)?;
        assert_eq!(diag[0], diag0);
        Ok(())
    }

    #[test]
    fn element_failure_sets_the_flag() -> Result<(), StrError> {
        let mut mesh = Mesh::one_hex8();
        mesh.cells[0].points = vec![4, 5, 6, 7, 0, 1, 2, 3]; // inverted
        let base = FemBase::new(&mesh, [(1, ParamSolid::sample_linear_elastic())])?;
        let config = Config::new();
        let mut elements = Elements::new(&mesh, &base, &config)?;
        let mut kk = SparseMatrix::new_coo(24, 24, NDOF_HEX * NDOF_HEX, Sym::No)?;
        let mut diag = Vector::new(24);
        let uu = Vector::new(24);
        let mut assembler = Assembler::new();
        let failed = assembler.assemble(&mut elements, &mut kk, None, &mut diag, &uu)?;
        assert!(failed);
        assert_eq!(
            assembler.last_failure,
            Some("degenerate or inverted element detected in the reference configuration")
        );
        Ok(())
    }
}
