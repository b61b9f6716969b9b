// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::{assert_abs_diff_eq, assert_relative_eq};
use complexity::estimators::approaches::{CountOccurrences, OrdinalPatterns};
use complexity::estimators::definitions::{Kaniadakis, Renyi, Shannon, Tsallis};
use complexity::estimators::traits::InformationMeasure;
use complexity::estimators::{
    Probabilities, information, information_from_probabilities, information_normalized,
};
use complexity::ComplexityError;
use ndarray::array;
use rstest::rstest;

use crate::test_helpers::{assert_information_close, generate_gaussian_series};

fn skewed() -> Probabilities {
    Probabilities::new(vec![0.5, 0.25, 0.125, 0.125, 0.0]).unwrap()
}

#[test]
fn shannon_ignores_zero_probabilities() {
    // 0.5·1 + 0.25·2 + 2·0.125·3 = 1.75 bits
    let h = Shannon::new(2.0).unwrap().information(&skewed()).unwrap();
    assert_abs_diff_eq!(h, 1.75, epsilon = 1e-12);
}

#[rstest]
#[case(2.0)]
#[case(std::f64::consts::E)]
#[case(10.0)]
fn renyi_of_order_one_is_shannon(#[case] base: f64) {
    let p = skewed();
    let shannon = Shannon::new(base).unwrap().information(&p).unwrap();
    let renyi = Renyi::new(1.0, base).unwrap().information(&p).unwrap();
    assert_eq!(renyi, shannon);
    // The generic formula converges to the same value.
    let near_one = Renyi::new(1.0 + 1e-6, base).unwrap().information(&p).unwrap();
    assert_abs_diff_eq!(near_one, shannon, epsilon = 1e-5);
}

#[rstest]
#[case(0.0)]
#[case(0.5)]
#[case(1.0)]
#[case(2.0)]
#[case(f64::INFINITY)]
fn renyi_of_certain_outcome_is_zero(#[case] q: f64) {
    let p = Probabilities::new(vec![1.0]).unwrap();
    let h = Renyi::new(q, 2.0).unwrap().information(&p).unwrap();
    assert_abs_diff_eq!(h, 0.0, epsilon = 1e-12);
}

#[test]
fn renyi_limits() {
    let p = Probabilities::new(vec![0.5, 0.25, 0.25]).unwrap();
    let hartley = Renyi::new(0.0, 2.0).unwrap().information(&p).unwrap();
    assert_abs_diff_eq!(hartley, 3.0_f64.log2(), epsilon = 1e-12);
    let min_entropy = Renyi::new(f64::INFINITY, 2.0).unwrap().information(&p).unwrap();
    assert_abs_diff_eq!(min_entropy, 1.0, epsilon = 1e-12);
    // Collision entropy: -log2(0.25 + 0.0625 + 0.0625)
    let collision = Renyi::new(2.0, 2.0).unwrap().information(&p).unwrap();
    assert_abs_diff_eq!(collision, -(0.375_f64).log2(), epsilon = 1e-12);
}

#[test]
fn renyi_is_non_increasing_in_order() {
    let x = generate_gaussian_series(500, 0.0, 1.0, 99);
    let scheme = OrdinalPatterns::new(4, 1).unwrap();
    let mut previous = f64::INFINITY;
    for q in [0.0, 0.5, 1.0, 2.0, 5.0, f64::INFINITY] {
        let h = information(&Renyi::new(q, 2.0).unwrap(), &scheme, &x).unwrap();
        assert!(h <= previous + 1e-12, "H_{q} = {h} exceeds {previous}");
        previous = h;
    }
}

#[test]
fn tsallis_values_and_maximum() {
    let uniform = Probabilities::new(vec![1.0, 1.0]).unwrap();
    let t = Tsallis::new(2.0, 1.0, std::f64::consts::E).unwrap();
    assert_abs_diff_eq!(t.information(&uniform).unwrap(), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(t.maximum(2).unwrap(), 0.5, epsilon = 1e-12);

    let scaled = Tsallis::new(3.0, 2.0, std::f64::consts::E).unwrap();
    // k/(q-1)·(1 - Σp^3) = 1·(1 - 0.25) for the uniform pair
    assert_abs_diff_eq!(scaled.information(&uniform).unwrap(), 0.75, epsilon = 1e-12);

    let shannon_limit = Tsallis::new(1.0, 5.0, 2.0).unwrap();
    assert_abs_diff_eq!(shannon_limit.information(&uniform).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(shannon_limit.maximum(8).unwrap(), 3.0, epsilon = 1e-12);
}

#[test]
fn tsallis_has_no_maximum_for_non_positive_order() {
    let t = Tsallis::new(-0.5, 1.0, 2.0).unwrap();
    assert!(matches!(
        t.maximum(4),
        Err(ComplexityError::InvalidParameter { name: "q", .. })
    ));
}

#[test]
fn kaniadakis_zero_is_exactly_shannon() {
    let x = generate_gaussian_series(200, 0.0, 1.0, 5);
    let p = complexity::estimators::probabilities(&OrdinalPatterns::default(), &x).unwrap();
    for base in [2.0, std::f64::consts::E, 10.0] {
        let k = Kaniadakis::new(0.0, base).unwrap();
        let s = Shannon::new(base).unwrap();
        assert_eq!(k.information(&p).unwrap(), s.information(&p).unwrap());
        assert_eq!(k.maximum(6).unwrap(), s.maximum(6).unwrap());
    }
}

#[test]
fn kaniadakis_uniform_reaches_maximum() {
    // ln_κ(1/2) = (2^-κ - 2^κ) / (2κ); κ = 0.5 gives -(√2 - 1/√2)
    let uniform = Probabilities::new(vec![1.0, 1.0]).unwrap();
    let k = Kaniadakis::default();
    let expected = 2.0_f64.sqrt() - 0.5_f64.sqrt();
    assert_abs_diff_eq!(k.information(&uniform).unwrap(), expected, epsilon = 1e-12);
    assert_abs_diff_eq!(k.maximum(2).unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn normalized_entropy_of_uniform_sample_is_one() {
    let x = array![1.0, 2.0, 3.0, 4.0];
    for h in [
        information_normalized(&Shannon::default(), &CountOccurrences, &x).unwrap(),
        information_normalized(&Renyi::new(2.0, 2.0).unwrap(), &CountOccurrences, &x).unwrap(),
        information_normalized(&Tsallis::new(2.0, 1.0, 2.0).unwrap(), &CountOccurrences, &x)
            .unwrap(),
        information_normalized(&Kaniadakis::default(), &CountOccurrences, &x).unwrap(),
    ] {
        assert_relative_eq!(h, 1.0, max_relative = 1e-12);
    }
}

#[test]
fn single_outcome_alphabet_normalizes_to_zero() {
    let x = array![0.3, 0.3, 0.3];
    let h = information_normalized(&Shannon::default(), &CountOccurrences, &x).unwrap();
    assert_eq!(h, 0.0);
}

#[test]
fn precomputed_probabilities_path() {
    let p = Probabilities::new(vec![0.2, 0.8]).unwrap();
    let h = information_from_probabilities(&Shannon::new(2.0).unwrap(), &p).unwrap();
    let expected = -(0.2 * 0.2_f64.log2() + 0.8 * 0.8_f64.log2());
    assert_information_close(h, expected, 1e-12, "precomputed_probabilities_path");
}

#[test]
fn invalid_parameters_fail_immediately() {
    assert!(matches!(
        Renyi::new(-1.0, 2.0),
        Err(ComplexityError::InvalidParameter { name: "q", .. })
    ));
    assert!(matches!(
        Shannon::new(1.0),
        Err(ComplexityError::InvalidParameter { name: "base", .. })
    ));
    assert!(Shannon::new(0.0).is_err());
    assert!(Shannon::new(f64::NAN).is_err());
    assert!(matches!(
        Kaniadakis::new(1.0, 2.0),
        Err(ComplexityError::InvalidParameter { name: "kappa", .. })
    ));
    assert!(Kaniadakis::new(-1.2, 2.0).is_err());
    assert!(matches!(
        Tsallis::new(2.0, 0.0, 2.0),
        Err(ComplexityError::InvalidParameter { name: "k", .. })
    ));
    assert!(Shannon::default().maximum(0).is_err());

    let err = Renyi::new(-1.0, 2.0).unwrap_err();
    assert!(err.to_string().starts_with("invalid parameter `q`"));
}

#[test]
fn misconfigured_public_fields_are_caught_at_use() {
    let p = Probabilities::new(vec![0.5, 0.5]).unwrap();
    let r = Renyi { q: -2.0, base: 2.0 };
    assert!(r.information(&p).is_err());
}
