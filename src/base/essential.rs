use super::{Dof, PointId};
use std::fmt;

/// Holds essential (Dirichlet) boundary conditions: prescribed displacement components
pub struct Essential {
    /// All (point, dof, value) triples
    pub all: Vec<(PointId, Dof, f64)>,
}

impl Essential {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        Essential { all: Vec::new() }
    }

    /// Sets a prescribed displacement component at a group of points
    pub fn points(&mut self, points: &[PointId], dof: Dof, value: f64) -> &mut Self {
        for point in points {
            self.all.push((*point, dof, value));
        }
        self
    }
}

impl fmt::Display for Essential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Essential boundary conditions\n").unwrap();
        write!(f, "=============================\n").unwrap();
        for (point, dof, value) in &self.all {
            write!(f, "{:?} {:?} {:?}\n", point, dof, value).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Essential;
    use crate::base::Dof;

    #[test]
    fn points_and_display_work() {
        let mut essential = Essential::new();
        essential
            .points(&[0, 1], Dof::Uz, 0.0)
            .points(&[0], Dof::Ux, -0.5);
        assert_eq!(essential.all.len(), 3);
        assert_eq!(essential.all[2], (0, Dof::Ux, -0.5));
        assert_eq!(
            format!("{}", essential),
            "Essential boundary conditions\n\
             =============================\n\
             0 Uz 0.0\n\
             1 Uz 0.0\n\
             0 Ux -0.5\n"
        );
    }
}
