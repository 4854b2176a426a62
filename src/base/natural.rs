use super::{Pbc, PointId};
use std::fmt;

/// Holds natural boundary conditions: concentrated loads at points
///
/// The values given here define the reference load pattern; during the
/// analysis they are scaled by the pseudo-time (proportional loading).
pub struct Natural {
    /// All (point, pbc, value) triples
    pub all: Vec<(PointId, Pbc, f64)>,
}

impl Natural {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        Natural { all: Vec::new() }
    }

    /// Sets a concentrated load component at a group of points
    pub fn points(&mut self, points: &[PointId], pbc: Pbc, value: f64) -> &mut Self {
        for point in points {
            self.all.push((*point, pbc, value));
        }
        self
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural boundary conditions\n").unwrap();
        write!(f, "===========================\n").unwrap();
        for (point, pbc, value) in &self.all {
            write!(f, "{:?} {:?} {:?}\n", point, pbc, value).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
