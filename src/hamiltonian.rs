//! Hückel coupling matrix
//!
//! Nearest-neighbour coupling in units of β: −1 between bonded sites, 0 elsewhere,
//! Coulomb integral α shifted to zero on the diagonal.

extern crate nalgebra as na;

use na::DMatrix;
use tracing::debug;

/// Symmetric n×n adjacency-derived Hamiltonian.
///
/// Built once by a topology generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CouplingMatrix {
    matrix: DMatrix<f64>,
}

impl CouplingMatrix {
    /// Coupling strength assigned to every bond.
    pub const BOND: f64 = -1.0;

    /// Build H + Hᵀ where H holds `BOND` at every listed `(i, j)`.
    ///
    /// Listing the same bond twice is harmless, but a bond listed in both
    /// directions, or a self bond `(i, i)`, doubles to −2 after symmetrization.
    /// Only the degenerate rings (one or two atoms) produce such bonds.
    pub fn from_bonds(n: usize, bonds: &[(usize, usize)]) -> Self {
        let mut h = DMatrix::<f64>::zeros(n, n);
        for &(i, j) in bonds {
            h[(i, j)] = Self::BOND;
        }
        let matrix = &h + h.transpose();
        debug!("Built {}x{} coupling matrix from {} bonds", n, n, bonds.len());
        CouplingMatrix { matrix }
    }

    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn is_symmetric(&self) -> bool {
        self.matrix == self.matrix.transpose()
    }

    /// Number of nonzero couplings in each row (a self coupling counts once).
    pub fn degrees(&self) -> Vec<usize> {
        self.matrix
            .row_iter()
            .map(|row| row.iter().filter(|&&v| v != 0.0).count())
            .collect()
    }

    /// Nonzero entries strictly above the diagonal.
    pub fn bond_count(&self) -> usize {
        let n = self.dim();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.matrix[(i, j)] != 0.0)
            .count()
    }
}
