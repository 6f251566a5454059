use super::{check_atom_limit, cycle_bonds};
use crate::error::HuckelError;
use crate::hamiltonian::CouplingMatrix;
use tracing::debug;

/// Path graph bonds `(i, i + 1)`.
pub fn chain_bonds(atoms: usize) -> Vec<(usize, usize)> {
    (1..atoms).map(|i| (i - 1, i)).collect()
}

/// Cycle bonds `(i, (i + 1) mod n)` for every site, the last one closing the ring.
///
/// With one atom the only bond is a self bond; with two the pair is listed in
/// both directions. Neither case is rejected: the one-atom ring has a −2 on its
/// diagonal and the two-atom ring a −2 coupling.
pub fn ring_bonds(atoms: usize) -> Vec<(usize, usize)> {
    cycle_bonds(0, atoms).collect()
}

pub fn build_chain(atoms: usize) -> Result<CouplingMatrix, HuckelError> {
    check_atoms(atoms, "linear chain")?;
    debug!("Building linear chain with {} atoms", atoms);
    Ok(CouplingMatrix::from_bonds(atoms, &chain_bonds(atoms)))
}

pub fn build_ring(atoms: usize) -> Result<CouplingMatrix, HuckelError> {
    check_atoms(atoms, "ring")?;
    debug!("Building ring with {} atoms", atoms);
    Ok(CouplingMatrix::from_bonds(atoms, &ring_bonds(atoms)))
}

fn check_atoms(atoms: usize, kind: &str) -> Result<(), HuckelError> {
    if atoms == 0 {
        return Err(HuckelError::InvalidParameter(format!(
            "{kind} needs at least one atom"
        )));
    }
    check_atom_limit(atoms)
}
