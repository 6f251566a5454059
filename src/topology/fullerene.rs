use super::cycle_bonds;
use crate::hamiltonian::CouplingMatrix;
use tracing::debug;

pub const FULLERENE_SITES: usize = 60;

/// Truncated icosahedron as five concentric rings of 5, 15, 20, 15 and 5
/// sites (0-4, 5-19, 20-39, 40-54, 55-59), each closed on itself, plus the
/// bonds between neighbouring rings.
pub fn fullerene_bonds() -> Vec<(usize, usize)> {
    let rings = cycle_bonds(0, 5)
        .chain(cycle_bonds(5, 15))
        .chain(cycle_bonds(20, 20))
        .chain(cycle_bonds(40, 15))
        .chain(cycle_bonds(55, 5));

    let bridges = (0..5).flat_map(|i| {
        [
            (i, 5 + 3 * i),
            (6 + 3 * i, 20 + 4 * i),
            (7 + 3 * i, 23 + 4 * i),
            (21 + 4 * i, 40 + 3 * i),
            (22 + 4 * i, 42 + 3 * i),
            (41 + 3 * i, 55 + i),
        ]
    });

    rings.chain(bridges).collect()
}

pub fn build_fullerene() -> CouplingMatrix {
    debug!("Building C60 skeleton");
    CouplingMatrix::from_bonds(FULLERENE_SITES, &fullerene_bonds())
}
