use crate::atom::AtomRecord;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Result of parsing an XYZ coordinate block.
///
/// The two cases are semantically different and deliberately kept apart:
/// `Parsed` always holds at least one atom, while `Unparsed` carries the
/// original input verbatim so that callers can still display text the
/// parser could not make sense of. A zero-atom `Parsed` geometry is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Parsed {
        atoms: Vec<AtomRecord>,
        had_header: bool,
    },
    Unparsed {
        raw: String,
    },
}

impl Geometry {
    /// Number of parsed atoms; 0 means "not usable as structured geometry".
    pub fn count(&self) -> usize {
        match self {
            Geometry::Parsed { atoms, .. } => atoms.len(),
            Geometry::Unparsed { .. } => 0,
        }
    }

    /// Whether the input carried a count/comment header.
    pub fn had_header(&self) -> bool {
        match self {
            Geometry::Parsed { had_header, .. } => *had_header,
            Geometry::Unparsed { .. } => false,
        }
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        match self {
            Geometry::Parsed { atoms, .. } => atoms,
            Geometry::Unparsed { .. } => &[],
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Geometry::Parsed { .. })
    }

    /// Atom positions for the rendering viewport.
    pub fn positions(&self) -> Vec<Vector3<f64>> {
        self.atoms()
            .iter()
            .map(|a| Vector3::new(a.x, a.y, a.z))
            .collect()
    }
}

impl Index<usize> for Geometry {
    type Output = AtomRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms()[index]
    }
}
