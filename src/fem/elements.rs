use super::{ElementSolidTl, ElementSolidUl, ElementTrait, FemBase};
use crate::base::{Cell, Config, Formulation, Mesh, NDOF_HEX};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Defines a generic finite element, wrapping an "actual" implementation
pub struct GenericElement {
    /// Connects to the actual element implementation
    pub actual: Box<dyn ElementTrait>,

    /// Local tangent matrix (24x24)
    pub ke: Matrix,

    /// Local internal force vector (24)
    pub fe: Vector,
}

/// Holds a collection of (generic) finite elements
pub struct Elements {
    /// All elements, in the order of the mesh cells
    pub all: Vec<GenericElement>,
}

impl GenericElement {
    /// Allocates a new instance according to the configured formulation
    pub fn new(mesh: &Mesh, base: &FemBase, config: &Config, cell: &Cell) -> Result<Self, StrError> {
        let param = base
            .attributes
            .get(&cell.attribute)
            .ok_or("cannot find parameters for a cell attribute")?;
        let actual: Box<dyn ElementTrait> = match config.formulation {
            Formulation::Linear => return Err("the linear formulation is handled by the linear driver"),
            Formulation::TotalLagrangian => Box::new(ElementSolidTl::new(mesh, cell, param)?),
            Formulation::UpdatedLagrangian => Box::new(ElementSolidUl::new(mesh, cell, param)?),
        };
        Ok(GenericElement {
            actual,
            ke: Matrix::new(NDOF_HEX, NDOF_HEX),
            fe: Vector::new(NDOF_HEX),
        })
    }
}

impl Elements {
    /// Allocates one element per mesh cell
    pub fn new(mesh: &Mesh, base: &FemBase, config: &Config) -> Result<Self, StrError> {
        let all = mesh
            .cells
            .iter()
            .map(|cell| GenericElement::new(mesh, base, config, cell))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Elements { all })
    }

    /// Promotes the trial integration-point states of all elements to committed
    pub fn commit_states(&mut self) {
        for element in &mut self.all {
            element.actual.commit_state();
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Elements;
    use crate::base::{Config, Formulation, Mesh};
    use crate::fem::FemBase;
    use crate::material::ParamSolid;
    use crate::StrError;

    #[test]
    fn new_works_for_both_formulations() -> Result<(), StrError> {
        let mesh = Mesh::two_hex8();
        let base = FemBase::new(&mesh, [(1, ParamSolid::sample_linear_elastic())])?;
        let mut config = Config::new();

        let elements = Elements::new(&mesh, &base, &config)?;
        assert_eq!(elements.all.len(), 2);
        assert_eq!(elements.all[0].actual.local_to_global().len(), 24);

        config.set_formulation(Formulation::UpdatedLagrangian);
        let elements = Elements::new(&mesh, &base, &config)?;
        assert_eq!(elements.all.len(), 2);
        Ok(())
    }

    #[test]
    fn linear_formulation_is_rejected() -> Result<(), StrError> {
        let mesh = Mesh::one_hex8();
        let base = FemBase::new(&mesh, [(1, ParamSolid::sample_linear_elastic())])?;
        let mut config = Config::new();
        config.set_formulation(Formulation::Linear);
        assert_eq!(
            Elements::new(&mesh, &base, &config).err(),
            Some("the linear formulation is handled by the linear driver")
        );
        Ok(())
    }
}
