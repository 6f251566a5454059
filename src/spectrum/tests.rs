//! Tests for diagonalization and degeneracy grouping

use super::*;
use crate::topology::{build_chain, build_fullerene, build_platonic, build_ring, PlatonicSolid};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

fn levels_of(matrix: &CouplingMatrix) -> Vec<EnergyLevel> {
    Spectrum::analyze(matrix, &SpectralParams::default())
        .unwrap()
        .levels
}

fn assert_levels(actual: &[EnergyLevel], expected: &[(f64, usize)]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "level count mismatch: {actual:?}"
    );
    for (level, &(energy, degeneracy)) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(level.energy, energy, epsilon = 1e-8);
        assert_eq!(level.degeneracy, degeneracy, "at energy {energy}");
    }
}

#[test]
fn test_group_empty() {
    assert!(group_degeneracies(&[], DEGENERACY_TOLERANCE).is_empty());
}

#[test]
fn test_group_single_value() {
    let levels = group_degeneracies(&[0.25], DEGENERACY_TOLERANCE);
    assert_eq!(levels, vec![EnergyLevel::new(0.25, 1)]);
}

#[test]
fn test_group_identical_values() {
    let levels = group_degeneracies(&[-1.0; 7], DEGENERACY_TOLERANCE);
    assert_eq!(levels, vec![EnergyLevel::new(-1.0, 7)]);
}

#[test]
fn test_group_separated_values() {
    let values = [-2.0, -1.0, 0.0, 1.5, 3.0];
    let levels = group_degeneracies(&values, DEGENERACY_TOLERANCE);
    assert_eq!(levels.len(), values.len());
    assert!(levels.iter().all(|l| l.degeneracy == 1));
}

#[test]
fn test_group_reports_last_value_of_run() {
    let values = [-1.0, 0.0, 4e-6, 8e-6, 2.0];
    let levels = group_degeneracies(&values, DEGENERACY_TOLERANCE);
    assert_eq!(
        levels,
        vec![
            EnergyLevel::new(-1.0, 1),
            EnergyLevel::new(8e-6, 3),
            EnergyLevel::new(2.0, 1),
        ]
    );
}

#[test]
fn test_group_chains_across_drift() {
    // neighbours are 6e-6 apart but the run spans 2.4e-5, more than the tolerance
    let values = [0.0, 6e-6, 1.2e-5, 1.8e-5, 2.4e-5];
    let levels = group_degeneracies(&values, DEGENERACY_TOLERANCE);
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].degeneracy, 5);
    assert_eq!(levels[0].energy, 2.4e-5);
}

#[test]
fn test_group_gap_equal_to_tolerance_merges() {
    let levels = group_degeneracies(&[0.0, 0.5], 0.5);
    assert_eq!(levels, vec![EnergyLevel::new(0.5, 2)]);
}

#[test]
fn test_diagonalize_single_site() {
    let eigenvalues = diagonalize(&build_chain(1).unwrap()).unwrap();
    assert_eq!(eigenvalues.len(), 1);
    assert_abs_diff_eq!(eigenvalues[0], 0.0, epsilon = 1e-12);
    assert_levels(&levels_of(&build_chain(1).unwrap()), &[(0.0, 1)]);
}

#[test]
fn test_diagonalize_returns_full_multiset() {
    let m = build_fullerene();
    let eigenvalues = diagonalize(&m).unwrap();
    assert_eq!(eigenvalues.len(), 60);
    // trace of the coupling matrix is zero
    assert_abs_diff_eq!(eigenvalues.iter().sum::<f64>(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_iteration_cap_reports_numeric_failure() {
    let result = diagonalize_with(&build_fullerene(), 1);
    assert_eq!(
        result,
        Err(HuckelError::NumericFailure {
            dimension: 60,
            max_iterations: 1,
        })
    );
}

#[test]
fn test_sorted_eigenvalues_ascending() {
    let values = sorted_eigenvalues(&build_ring(7).unwrap(), DEFAULT_MAX_ITERATIONS).unwrap();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_butadiene_levels() {
    let golden = (1.0 + 5f64.sqrt()) / 2.0;
    assert_levels(
        &levels_of(&build_chain(4).unwrap()),
        &[(-golden, 1), (1.0 - golden, 1), (golden - 1.0, 1), (golden, 1)],
    );
}

#[test]
fn test_cyclobutadiene_levels() {
    assert_levels(
        &levels_of(&build_ring(4).unwrap()),
        &[(-2.0, 1), (0.0, 2), (2.0, 1)],
    );
}

#[test]
fn test_benzene_levels() {
    assert_levels(
        &levels_of(&build_ring(6).unwrap()),
        &[(-2.0, 1), (-1.0, 2), (1.0, 2), (2.0, 1)],
    );
}

#[test]
fn test_degenerate_ring_levels() {
    assert_levels(&levels_of(&build_ring(1).unwrap()), &[(-2.0, 1)]);
    assert_levels(&levels_of(&build_ring(2).unwrap()), &[(-2.0, 1), (2.0, 1)]);
}

#[test]
fn test_tetrahedron_levels() {
    assert_levels(
        &levels_of(&build_platonic("tetrahedron").unwrap()),
        &[(-3.0, 1), (1.0, 3)],
    );
}

#[test]
fn test_cube_levels() {
    assert_levels(
        &levels_of(&build_platonic("cube").unwrap()),
        &[(-3.0, 1), (-1.0, 3), (1.0, 3), (3.0, 1)],
    );
}

#[test]
fn test_octahedron_levels() {
    assert_levels(
        &levels_of(&build_platonic("octahedron").unwrap()),
        &[(-4.0, 1), (0.0, 3), (2.0, 2)],
    );
}

#[test]
fn test_dodecahedron_levels() {
    let root5 = 5f64.sqrt();
    assert_levels(
        &levels_of(&build_platonic("dodecahedron").unwrap()),
        &[
            (-3.0, 1),
            (-root5, 3),
            (-1.0, 5),
            (0.0, 4),
            (2.0, 4),
            (root5, 3),
        ],
    );
}

#[test]
fn test_icosahedron_levels() {
    let root5 = 5f64.sqrt();
    assert_levels(
        &levels_of(&build_platonic("icosahedron").unwrap()),
        &[(-5.0, 1), (-root5, 3), (1.0, 5), (root5, 3)],
    );
}

#[test]
fn test_fullerene_levels() {
    let spectrum = Spectrum::analyze(&build_fullerene(), &SpectralParams::default()).unwrap();
    assert_eq!(spectrum.total_degeneracy(), 60);
    assert_eq!(
        spectrum.degeneracies(),
        vec![1, 3, 5, 3, 4, 9, 5, 3, 3, 5, 3, 5, 4, 4, 3]
    );
    let energies = spectrum.energies();
    assert_abs_diff_eq!(energies[0], -3.0, epsilon = 1e-8);
    assert_abs_diff_eq!(energies[5], -1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(energies[12], 2.0, epsilon = 1e-8);
    assert_abs_diff_eq!(energies[14], (3.0 + 5f64.sqrt()) / 2.0, epsilon = 1e-8);
}

#[test]
fn test_solve_pipeline() {
    let spectrum = solve(
        &Topology::Platonic {
            solid: PlatonicSolid::Tetrahedron,
        },
        &SpectralParams::default(),
    )
    .unwrap();
    assert_eq!(spectrum.dimension, 4);
    assert_eq!(spectrum.degeneracies(), vec![1, 3]);
}

#[test]
fn test_solve_rejects_empty_chain() {
    let result = solve(&Topology::LinearChain { atoms: 0 }, &SpectralParams::default());
    assert!(matches!(result, Err(HuckelError::InvalidParameter(_))));
}

#[test]
fn test_nan_tolerance_is_rejected() {
    let params = SpectralParams {
        tolerance: f64::NAN,
        ..SpectralParams::default()
    };
    assert!(matches!(
        solve(&Topology::Ring { atoms: 6 }, &params),
        Err(HuckelError::InvalidParameter(_))
    ));
    assert!(matches!(
        Spectrum::analyze(&build_ring(6).unwrap(), &params),
        Err(HuckelError::InvalidParameter(_))
    ));
}

#[test]
fn test_negative_tolerance_is_rejected() {
    let params = SpectralParams {
        tolerance: -1.0,
        ..SpectralParams::default()
    };
    assert!(matches!(
        solve(&Topology::Ring { atoms: 4 }, &params),
        Err(HuckelError::InvalidParameter(_))
    ));
}

#[test]
fn test_infinite_tolerance_is_rejected() {
    let params = SpectralParams {
        tolerance: f64::INFINITY,
        ..SpectralParams::default()
    };
    assert!(params.validate().is_err());
    assert!(SpectralParams::default().validate().is_ok());
}

#[test]
fn test_zero_tolerance_still_merges_exact_ties() {
    let params = SpectralParams {
        tolerance: 0.0,
        ..SpectralParams::default()
    };
    assert!(params.validate().is_ok());
    assert_eq!(
        group_degeneracies(&[1.0, 1.0, 2.0], params.tolerance),
        vec![EnergyLevel::new(1.0, 2), EnergyLevel::new(2.0, 1)]
    );
}

#[test]
fn test_coarse_tolerance_merges_levels() {
    let params = SpectralParams {
        tolerance: 1.5,
        ..SpectralParams::default()
    };
    let spectrum = Spectrum::analyze(&build_ring(6).unwrap(), &params).unwrap();
    // gaps of 1 between -2, -1, 1, 2 merge; the gap of 2 across zero does not
    assert_eq!(spectrum.degeneracies(), vec![3, 3]);
}

proptest! {
    #[test]
    fn prop_degeneracies_cover_every_orbital(n in 1usize..40, cyclic in any::<bool>()) {
        let m = if cyclic { build_ring(n).unwrap() } else { build_chain(n).unwrap() };
        let spectrum = Spectrum::analyze(&m, &SpectralParams::default()).unwrap();
        prop_assert_eq!(spectrum.total_degeneracy(), n);
        for pair in spectrum.levels.windows(2) {
            prop_assert!(pair[1].energy - pair[0].energy > DEGENERACY_TOLERANCE);
        }
    }

    #[test]
    fn prop_identical_values_form_one_level(value in -10.0f64..10.0, n in 1usize..50) {
        let levels = group_degeneracies(&vec![value; n], DEGENERACY_TOLERANCE);
        prop_assert_eq!(levels, vec![EnergyLevel::new(value, n)]);
    }

    #[test]
    fn prop_well_separated_values_are_singletons(start in -5.0f64..5.0, n in 1usize..50) {
        let values: Vec<f64> = (0..n).map(|i| start + 0.01 * i as f64).collect();
        let levels = group_degeneracies(&values, DEGENERACY_TOLERANCE);
        prop_assert_eq!(levels.len(), n);
        prop_assert!(levels.iter().all(|l| l.degeneracy == 1));
    }
}
