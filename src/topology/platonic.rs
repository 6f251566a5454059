use super::cycle_bonds;
use crate::error::HuckelError;
use crate::hamiltonian::CouplingMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatonicSolid {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl PlatonicSolid {
    pub const ALL: [PlatonicSolid; 5] = [
        PlatonicSolid::Tetrahedron,
        PlatonicSolid::Cube,
        PlatonicSolid::Octahedron,
        PlatonicSolid::Dodecahedron,
        PlatonicSolid::Icosahedron,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlatonicSolid::Tetrahedron => "tetrahedron",
            PlatonicSolid::Cube => "cube",
            PlatonicSolid::Octahedron => "octahedron",
            PlatonicSolid::Dodecahedron => "dodecahedron",
            PlatonicSolid::Icosahedron => "icosahedron",
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            PlatonicSolid::Tetrahedron => 4,
            PlatonicSolid::Cube => 8,
            PlatonicSolid::Octahedron => 6,
            PlatonicSolid::Dodecahedron => 20,
            PlatonicSolid::Icosahedron => 12,
        }
    }

    /// Edges meeting at each vertex.
    pub fn vertex_degree(&self) -> usize {
        match self {
            PlatonicSolid::Tetrahedron | PlatonicSolid::Cube | PlatonicSolid::Dodecahedron => 3,
            PlatonicSolid::Octahedron => 4,
            PlatonicSolid::Icosahedron => 5,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.vertex_count() * self.vertex_degree() / 2
    }

    pub fn bonds(&self) -> Vec<(usize, usize)> {
        match self {
            PlatonicSolid::Tetrahedron => tetrahedron_bonds(),
            PlatonicSolid::Cube => cube_bonds(),
            PlatonicSolid::Octahedron => octahedron_bonds(),
            PlatonicSolid::Dodecahedron => dodecahedron_bonds(),
            PlatonicSolid::Icosahedron => icosahedron_bonds(),
        }
    }
}

impl fmt::Display for PlatonicSolid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatonicSolid {
    type Err = HuckelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PlatonicSolid::ALL
            .into_iter()
            .find(|solid| solid.name() == wanted)
            .ok_or_else(|| {
                HuckelError::InvalidSelection(format!("'{}' is not a Platonic solid", s.trim()))
            })
    }
}

/// K4: every pair of the four vertices is bonded.
pub fn tetrahedron_bonds() -> Vec<(usize, usize)> {
    (0..4)
        .flat_map(|i| (i + 1..4).map(move |j| (i, j)))
        .collect()
}

/// Two squares, 0-3 and 4-7, joined by the rungs `(i, i + 4)`.
pub fn cube_bonds() -> Vec<(usize, usize)> {
    cycle_bonds(0, 4)
        .chain(cycle_bonds(4, 4))
        .chain((0..4).map(|i| (i, i + 4)))
        .collect()
}

const OCTAHEDRON_ANTIPODE: [usize; 6] = [4, 5, 3, 2, 0, 1];

/// Every vertex bonded to all others except its antipode.
pub fn octahedron_bonds() -> Vec<(usize, usize)> {
    (0..6)
        .flat_map(|i| (i + 1..6).map(move |j| (i, j)))
        .filter(|&(i, j)| OCTAHEDRON_ANTIPODE[i] != j)
        .collect()
}

/// Pentagon 0-4, decagon 5-14 and pentagon 15-19.
///
/// Inner vertex `i` reaches the even decagon site `5 + 2i`; the odd decagon
/// site `6 + 2i` reaches outer vertex `15 + i`.
pub fn dodecahedron_bonds() -> Vec<(usize, usize)> {
    cycle_bonds(0, 5)
        .chain(cycle_bonds(5, 10))
        .chain(cycle_bonds(15, 5))
        .chain((0..5).map(|i| (i, 5 + 2 * i)))
        .chain((0..5).map(|i| (6 + 2 * i, 15 + i)))
        .collect()
}

/// Triangle 0-2, hexagon 3-8 and triangle 9-11.
///
/// Each triangle vertex caps three consecutive hexagon sites; the two
/// triangles are staggered by one site so every hexagon site ends up with
/// two caps on one side and one on the other.
pub fn icosahedron_bonds() -> Vec<(usize, usize)> {
    let hexagon = |k: usize| 3 + k % 6;
    let inner = (0..3).flat_map(move |i| {
        [2 * i + 5, 2 * i, 2 * i + 1]
            .into_iter()
            .map(move |k| (i, hexagon(k)))
    });
    let outer = (0..3).flat_map(move |i| {
        [2 * i, 2 * i + 1, 2 * i + 2]
            .into_iter()
            .map(move |k| (9 + i, hexagon(k)))
    });
    cycle_bonds(0, 3)
        .chain(cycle_bonds(3, 6))
        .chain(cycle_bonds(9, 3))
        .chain(inner)
        .chain(outer)
        .collect()
}

pub fn build_platonic_solid(solid: PlatonicSolid) -> CouplingMatrix {
    debug!("Building {} skeleton", solid);
    CouplingMatrix::from_bonds(solid.vertex_count(), &solid.bonds())
}

/// Build a solid from its name, as typed by a user.
pub fn build_platonic(name: &str) -> Result<CouplingMatrix, HuckelError> {
    let solid = name.parse::<PlatonicSolid>()?;
    Ok(build_platonic_solid(solid))
}
