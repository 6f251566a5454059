// Hückel molecular-orbital energy levels for conjugated topologies

pub mod error;
pub mod hamiltonian;
pub mod spectrum;
pub mod topology;

pub use error::HuckelError;
pub use hamiltonian::CouplingMatrix;
pub use spectrum::{solve, EnergyLevel, SpectralParams, Spectrum, DEGENERACY_TOLERANCE};
pub use topology::{Category, PlatonicSolid, Topology};
