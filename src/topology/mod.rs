//! Topology builders
//!
//! Each supported conjugated framework is expressed as a bond list over
//! numbered sites and turned into a [`CouplingMatrix`]. The numbering inside
//! the polyhedra (concentric rings joined by bridging bonds) is only a way of
//! writing the skeleton down compactly; the adjacency is the contract.
//!
//! # Usage
//!
//! ```rust
//! use huckel::{PlatonicSolid, Topology};
//!
//! let benzene = Topology::Ring { atoms: 6 }.build().unwrap();
//! assert_eq!(benzene.dim(), 6);
//!
//! let cube = Topology::Platonic { solid: PlatonicSolid::Cube }.build().unwrap();
//! assert_eq!(cube.degrees(), vec![3; 8]);
//! ```

mod chain;
mod fullerene;
mod platonic;

pub use chain::{build_chain, build_ring, chain_bonds, ring_bonds};
pub use fullerene::{build_fullerene, fullerene_bonds, FULLERENE_SITES};
pub use platonic::{
    build_platonic, build_platonic_solid, cube_bonds, dodecahedron_bonds, icosahedron_bonds,
    octahedron_bonds, tetrahedron_bonds, PlatonicSolid,
};

use crate::error::HuckelError;
use crate::hamiltonian::CouplingMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fully parameterized topology, ready to be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Topology {
    /// Open polyene chain of `atoms` carbons.
    LinearChain { atoms: usize },
    /// Cyclic polyene (annulene) of `atoms` carbons.
    Ring { atoms: usize },
    /// Skeleton of one of the five Platonic solids.
    Platonic { solid: PlatonicSolid },
    /// C60 truncated icosahedron.
    Fullerene,
}

impl Topology {
    /// Assemble a topology from a menu category and the answers that go with it.
    pub fn from_category(
        category: Category,
        atoms: Option<i64>,
        solid: Option<&str>,
    ) -> Result<Self, HuckelError> {
        let atoms_for = |category: Category| {
            atoms
                .ok_or_else(|| {
                    HuckelError::InvalidParameter(format!(
                        "{} needs an atom count",
                        category.label()
                    ))
                })
                .and_then(require_positive)
        };
        match category {
            Category::LinearPolyene => Ok(Topology::LinearChain {
                atoms: atoms_for(category)?,
            }),
            Category::CyclicPolyene => Ok(Topology::Ring {
                atoms: atoms_for(category)?,
            }),
            Category::PlatonicSolid => {
                let name = solid.ok_or_else(|| {
                    HuckelError::InvalidSelection("no Platonic solid named".to_string())
                })?;
                Ok(Topology::Platonic {
                    solid: name.parse()?,
                })
            }
            Category::Fullerene => Ok(Topology::Fullerene),
        }
    }

    /// Dispatch to the matching builder.
    pub fn build(&self) -> Result<CouplingMatrix, HuckelError> {
        match *self {
            Topology::LinearChain { atoms } => build_chain(atoms),
            Topology::Ring { atoms } => build_ring(atoms),
            Topology::Platonic { solid } => Ok(build_platonic_solid(solid)),
            Topology::Fullerene => Ok(build_fullerene()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Topology::LinearChain { .. } => Category::LinearPolyene,
            Topology::Ring { .. } => Category::CyclicPolyene,
            Topology::Platonic { .. } => Category::PlatonicSolid,
            Topology::Fullerene => Category::Fullerene,
        }
    }

    /// Number of sites, i.e. the dimension of the built matrix.
    pub fn site_count(&self) -> usize {
        match *self {
            Topology::LinearChain { atoms } | Topology::Ring { atoms } => atoms,
            Topology::Platonic { solid } => solid.vertex_count(),
            Topology::Fullerene => FULLERENE_SITES,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::LinearChain { atoms } => write!(f, "linear polyene C{atoms}"),
            Topology::Ring { atoms } => write!(f, "cyclic polyene C{atoms}"),
            Topology::Platonic { solid } => write!(f, "{solid}"),
            Topology::Fullerene => write!(f, "buckminsterfullerene C60"),
        }
    }
}

/// Menu categories of the interactive front end, numbered 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    LinearPolyene,
    CyclicPolyene,
    PlatonicSolid,
    Fullerene,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::LinearPolyene,
        Category::CyclicPolyene,
        Category::PlatonicSolid,
        Category::Fullerene,
    ];

    pub fn from_index(index: i64) -> Result<Self, HuckelError> {
        match index {
            1 => Ok(Category::LinearPolyene),
            2 => Ok(Category::CyclicPolyene),
            3 => Ok(Category::PlatonicSolid),
            4 => Ok(Category::Fullerene),
            other => Err(HuckelError::InvalidSelection(format!(
                "category {other} is not one of 1-4"
            ))),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Category::LinearPolyene => 1,
            Category::CyclicPolyene => 2,
            Category::PlatonicSolid => 3,
            Category::Fullerene => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::LinearPolyene => "linear polyene",
            Category::CyclicPolyene => "cyclic polyene",
            Category::PlatonicSolid => "platonic solids",
            Category::Fullerene => "Buckminsterfullerene",
        }
    }

    /// Whether the category needs a carbon count.
    pub fn needs_atom_count(&self) -> bool {
        matches!(self, Category::LinearPolyene | Category::CyclicPolyene)
    }
}

impl FromStr for Category {
    type Err = HuckelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = s.trim().parse::<i64>().map_err(|_| {
            HuckelError::InvalidSelection(format!("'{}' is not a category number", s.trim()))
        })?;
        Category::from_index(index)
    }
}

/// Largest chain or ring accepted. The dense matrix alone takes
/// `8 * MAX_ATOMS²` bytes (128 MiB) and diagonalization is cubic in the size.
pub const MAX_ATOMS: usize = 4096;

/// Parse a carbon count typed by a user.
pub fn parse_atom_count(s: &str) -> Result<usize, HuckelError> {
    let s = s.trim();
    let value = s
        .parse::<i64>()
        .map_err(|_| HuckelError::InvalidParameter(format!("'{s}' is not an integer atom count")))?;
    require_positive(value)
}

pub fn require_positive(atoms: i64) -> Result<usize, HuckelError> {
    if atoms < 1 {
        return Err(HuckelError::InvalidParameter(format!(
            "atom count must be at least 1, got {atoms}"
        )));
    }
    let atoms = usize::try_from(atoms)
        .map_err(|_| HuckelError::InvalidParameter(format!("atom count {atoms} is too large")))?;
    check_atom_limit(atoms)?;
    Ok(atoms)
}

pub(crate) fn check_atom_limit(atoms: usize) -> Result<(), HuckelError> {
    if atoms > MAX_ATOMS {
        return Err(HuckelError::InvalidParameter(format!(
            "atom count {atoms} exceeds the limit of {MAX_ATOMS}"
        )));
    }
    Ok(())
}

/// Bonds closing `len` consecutive sites starting at `start` into a cycle.
pub(crate) fn cycle_bonds(start: usize, len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).map(move |i| (start + i, start + (i + 1) % len))
}
