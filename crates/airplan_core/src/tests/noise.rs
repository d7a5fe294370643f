//! Tests for decibel combination and cost-efficiency arithmetic
//!
//! The combination rule is the one piece of non-obvious domain arithmetic:
//! identical sources sum in linear intensity, so the combined level grows by
//! `10 * log10(n)`, never by multiplication of the decibel figure.

use crate::evaluate::{combined_noise, cost_efficiency};

const TOLERANCE: f64 = 1e-9;

#[test]
fn single_source_is_unchanged() {
    for level in [20.0, 42.5, 55.0, 80.0] {
        assert!((combined_noise(level, 1) - level).abs() < TOLERANCE);
    }
}

#[test]
fn four_fifty_decibel_sources_reach_56_02() {
    // 10 * log10(4 * 10^5) = 56.02 to two decimals
    let combined = combined_noise(50.0, 4);
    assert!(
        (combined - 56.02).abs() < 0.005,
        "expected 56.02 dB, got {combined:.4}"
    );
}

#[test]
fn two_sixty_decibel_sources_reach_63_not_120() {
    let combined = combined_noise(60.0, 2);
    assert!(
        (combined - 63.0103).abs() < 0.001,
        "expected ~63.01 dB, got {combined:.4}"
    );
}

#[test]
fn combination_bounded_below_by_single_source_and_above_by_naive_multiply() {
    for level in [30.0, 50.0, 70.0] {
        for units in 2..=8u32 {
            let combined = combined_noise(level, units);
            assert!(combined >= level, "{units} x {level} dB fell below {level}");
            assert!(
                combined < f64::from(units) * level,
                "{units} x {level} dB reached the naive linear product"
            );
        }
    }
}

#[test]
fn combination_is_associative_over_grouping() {
    // Four sources at once equal two pairs combined pairwise: the rule is
    // order-independent because it sums linear intensities.
    let pair = combined_noise(55.0, 2);
    let all_four = combined_noise(55.0, 4);
    let pair_of_pairs = combined_noise(pair, 2);
    assert!((all_four - pair_of_pairs).abs() < TOLERANCE);
}

#[test]
fn doubling_sources_adds_three_decibels() {
    for level in [40.0, 55.0, 63.0] {
        let delta = combined_noise(level, 2) - level;
        assert!((delta - 10.0 * 2f64.log10()).abs() < TOLERANCE);
    }
}

#[test]
fn cost_efficiency_amortizes_upfront_cost() {
    // One 200 m3/h unit in a 60 m3 room: ACH = 10/3. Annualized cost over a
    // 5-year nominal period: 500 / 5 + 40 = 140 dollars.
    let achieved_ach = 200.0 / 60.0;
    let efficiency = cost_efficiency(achieved_ach, 500.0, 40.0, 5.0);
    assert!(
        (efficiency - achieved_ach / 140.0).abs() < TOLERANCE,
        "got {efficiency}"
    );
    assert!((efficiency - 0.023_809_52).abs() < 1e-6);
}

#[test]
fn cost_efficiency_scales_inversely_with_cost() {
    let cheap = cost_efficiency(4.0, 100.0, 20.0, 5.0);
    let pricey = cost_efficiency(4.0, 200.0, 40.0, 5.0);
    assert!((cheap - 2.0 * pricey).abs() < TOLERANCE);
}
