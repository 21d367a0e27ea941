//! Golden-value tests for the series sum and its analytical reference.

use seriecalc_core::{analytical, evaluate, series_term};

#[test]
fn analytical_x3_is_half_log_two() {
    let got = analytical(3.0).unwrap();
    assert!((got - 0.346_573_590_279_972_65).abs() < 1e-12);
}

#[test]
fn term_values_at_x3() {
    assert!((series_term(1, 3.0) - 1.0 / 3.0).abs() < 1e-15);
    assert!((series_term(2, 3.0) - 1.0 / 81.0).abs() < 1e-15);
    assert!((series_term(3, 3.0) - 1.0 / 1215.0).abs() < 1e-15);
}

#[test]
fn overflowing_term_is_exactly_zero() {
    assert_eq!(series_term(10_000, 3.0), 0.0);
}

#[test]
fn default_scenario_converges() {
    let eval = evaluate(3.0, 1e-7, 4).unwrap();
    let exact = analytical(3.0).unwrap();
    assert!((eval.total - exact).abs() < 1e-7);
    assert_eq!(eval.terms, 6);
}

#[test]
fn loose_epsilon_needs_two_terms() {
    let eval = evaluate(3.0, 1e-2, 4).unwrap();
    let exact = analytical(3.0).unwrap();
    assert_eq!(eval.terms, 2);
    assert!((eval.total - exact).abs() < 1e-2);
}

#[test]
fn larger_x_converges_with_fewer_terms() {
    let near = evaluate(2.0, 1e-7, 4).unwrap();
    let far = evaluate(10.0, 1e-7, 4).unwrap();
    assert!(far.terms < near.terms);
}
