//! Spectral analysis of a coupling matrix
//!
//! Diagonalizes the Hückel matrix and collapses numerically equal eigenvalues
//! into degenerate energy levels. Energies are in units of β relative to α,
//! listed in ascending numeric order.

use crate::error::HuckelError;
use crate::hamiltonian::CouplingMatrix;
use crate::topology::Topology;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Largest gap between neighbouring sorted eigenvalues that still counts as
/// the same level.
pub const DEGENERACY_TOLERANCE: f64 = 1e-5;

/// Iteration cap handed to the symmetric eigensolver. Zero means unbounded.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Numerical knobs of the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralParams {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl SpectralParams {
    /// Reject a tolerance that would make the grouping meaningless: NaN merges
    /// every eigenvalue into one level and a negative value splits exact
    /// degeneracies.
    pub fn validate(&self) -> Result<(), HuckelError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(HuckelError::InvalidParameter(format!(
                "degeneracy tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for SpectralParams {
    fn default() -> Self {
        SpectralParams {
            tolerance: DEGENERACY_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// One orbital energy and the number of orbitals sharing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyLevel {
    pub energy: f64,
    pub degeneracy: usize,
}

impl EnergyLevel {
    pub fn new(energy: f64, degeneracy: usize) -> Self {
        EnergyLevel { energy, degeneracy }
    }
}

/// Degeneracy-grouped spectrum of one coupling matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub dimension: usize,
    pub levels: Vec<EnergyLevel>,
}

impl Spectrum {
    pub fn analyze(matrix: &CouplingMatrix, params: &SpectralParams) -> Result<Self, HuckelError> {
        params.validate()?;
        let eigenvalues = sorted_eigenvalues(matrix, params.max_iterations)?;
        let levels = group_degeneracies(&eigenvalues, params.tolerance);
        Ok(Spectrum {
            dimension: matrix.dim(),
            levels,
        })
    }

    pub fn energies(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.energy).collect()
    }

    pub fn degeneracies(&self) -> Vec<usize> {
        self.levels.iter().map(|l| l.degeneracy).collect()
    }

    /// Sum of all degeneracies; equals `dimension` for a complete analysis.
    pub fn total_degeneracy(&self) -> usize {
        self.levels.iter().map(|l| l.degeneracy).sum()
    }
}

/// Build the topology and analyze its spectrum.
pub fn solve(topology: &Topology, params: &SpectralParams) -> Result<Spectrum, HuckelError> {
    params.validate()?;
    info!("Solving Hückel spectrum for {}", topology);
    let matrix = topology.build()?;
    let spectrum = Spectrum::analyze(&matrix, params)?;
    info!(
        "Found {} distinct levels over {} orbitals",
        spectrum.levels.len(),
        spectrum.dimension
    );
    Ok(spectrum)
}

/// All eigenvalues with multiplicity, in solver order.
pub fn diagonalize(matrix: &CouplingMatrix) -> Result<Vec<f64>, HuckelError> {
    diagonalize_with(matrix, DEFAULT_MAX_ITERATIONS)
}

pub fn diagonalize_with(
    matrix: &CouplingMatrix,
    max_iterations: usize,
) -> Result<Vec<f64>, HuckelError> {
    let dimension = matrix.dim();
    debug!("Diagonalizing {}x{} coupling matrix", dimension, dimension);
    let eig = matrix
        .as_matrix()
        .clone()
        .try_symmetric_eigen(f64::EPSILON, max_iterations)
        .ok_or(HuckelError::NumericFailure {
            dimension,
            max_iterations,
        })?;
    Ok(eig.eigenvalues.iter().copied().collect())
}

/// Eigenvalues sorted ascending.
pub fn sorted_eigenvalues(
    matrix: &CouplingMatrix,
    max_iterations: usize,
) -> Result<Vec<f64>, HuckelError> {
    let mut eigenvalues = diagonalize_with(matrix, max_iterations)?;
    eigenvalues.sort_by(f64::total_cmp);
    Ok(eigenvalues)
}

/// Group an ascending sequence into degenerate levels.
///
/// Each value is compared with its immediate predecessor, not with the first
/// value of the current run, so a slow drift of sub-tolerance steps stays in
/// a single level. A level is reported at the last (largest) value of its run.
pub fn group_degeneracies(sorted: &[f64], tolerance: f64) -> Vec<EnergyLevel> {
    let mut levels = Vec::new();
    let Some((&first, rest)) = sorted.split_first() else {
        return levels;
    };

    let (run, last) = rest.iter().fold((1usize, first), |(run, last), &value| {
        if (value - last).abs() > tolerance {
            levels.push(EnergyLevel::new(last, run));
            (1, value)
        } else {
            (run + 1, value)
        }
    });
    levels.push(EnergyLevel::new(last, run));

    debug!(
        "Grouped {} eigenvalues into {} levels",
        sorted.len(),
        levels.len()
    );
    levels
}

#[cfg(test)]
mod tests;
