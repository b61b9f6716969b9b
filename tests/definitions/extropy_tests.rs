// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::{assert_abs_diff_eq, assert_relative_eq};
use complexity::estimators::approaches::CountOccurrences;
use complexity::estimators::definitions::{
    Renyi, RenyiExtropy, Shannon, ShannonExtropy, Tsallis, TsallisExtropy,
};
use complexity::estimators::traits::InformationMeasure;
use complexity::estimators::{Probabilities, extropy, extropy_normalized, information};
use ndarray::array;
use rstest::rstest;

#[test]
fn degenerate_distribution_has_zero_extropy() {
    let x = array![0.1, 0.1, 0.1];
    let j = extropy(&ShannonExtropy::default(), &CountOccurrences, &x).unwrap();
    assert_eq!(j, 0.0);
    let jn = extropy_normalized(&ShannonExtropy::default(), &CountOccurrences, &x).unwrap();
    assert_eq!(jn, 0.0);
}

#[test]
fn renyi_entropy_equals_extropy_for_two_outcomes() {
    let x = array![0.2, 0.4, 0.4];
    let base = std::f64::consts::E;
    let h = information(&Renyi::new(2.0, base).unwrap(), &CountOccurrences, &x).unwrap();
    let j = extropy(&RenyiExtropy::new(2.0, base).unwrap(), &CountOccurrences, &x).unwrap();
    assert_abs_diff_eq!(h, 0.5878, epsilon = 1e-4);
    assert_abs_diff_eq!(j, 0.5878, epsilon = 1e-4);
    assert_abs_diff_eq!(h, j, epsilon = 1e-12);
}

#[rstest]
#[case(0.5)]
#[case(2.0)]
#[case(3.0)]
fn tsallis_entropy_equals_extropy_for_two_outcomes(#[case] q: f64) {
    let p = Probabilities::new(vec![0.3, 0.7]).unwrap();
    let h = Tsallis::new(q, 1.5, 2.0).unwrap().information(&p).unwrap();
    let j = TsallisExtropy::new(q, 1.5, 2.0).unwrap().information(&p).unwrap();
    assert_abs_diff_eq!(h, j, epsilon = 1e-12);
}

#[test]
fn shannon_extropy_equals_entropy_for_two_outcomes() {
    let p = Probabilities::new(vec![0.1, 0.9]).unwrap();
    let h = Shannon::new(2.0).unwrap().information(&p).unwrap();
    let j = ShannonExtropy::new(2.0).unwrap().information(&p).unwrap();
    assert_abs_diff_eq!(h, j, epsilon = 1e-12);
}

#[test]
fn uniform_extropy_reaches_maximum() {
    // J(uniform over 3) = -3·(2/3)·ln(2/3) = 2·ln(3/2)
    let x = array![1.0, 2.0, 3.0];
    let j = extropy(&ShannonExtropy::default(), &CountOccurrences, &x).unwrap();
    assert_abs_diff_eq!(j, 2.0 * 1.5_f64.ln(), epsilon = 1e-12);
    for jn in [
        extropy_normalized(&ShannonExtropy::default(), &CountOccurrences, &x).unwrap(),
        extropy_normalized(&RenyiExtropy::new(2.0, 2.0).unwrap(), &CountOccurrences, &x).unwrap(),
        extropy_normalized(&TsallisExtropy::new(2.0, 1.0, 2.0).unwrap(), &CountOccurrences, &x)
            .unwrap(),
    ] {
        assert_relative_eq!(jn, 1.0, max_relative = 1e-12);
    }
}

#[test]
fn renyi_extropy_of_order_one_is_shannon_extropy() {
    let p = Probabilities::new(vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    let s = ShannonExtropy::default().information(&p).unwrap();
    let r = RenyiExtropy::default().information(&p).unwrap();
    assert_eq!(r, s);
    let t = TsallisExtropy::default().information(&p).unwrap();
    assert_eq!(t, s);
}

#[test]
fn extropy_counts_zero_probabilities() {
    // Zero entries contribute (1-0)·log(1) = 0 to Shannon extropy but change N for Rényi.
    let sparse = Probabilities::new(vec![0.5, 0.5]).unwrap();
    let dense = Probabilities::new(vec![0.5, 0.5, 0.0]).unwrap();
    let s = ShannonExtropy::default();
    assert_abs_diff_eq!(
        s.information(&sparse).unwrap(),
        s.information(&dense).unwrap(),
        epsilon = 1e-15
    );
    // N = 3, Σ(1-p)^2 = 0.25 + 0.25 + 1 = 1.5 -> 2/(1-2)·(ln 1.5 - ln 2) = 2·ln(4/3)
    let r = RenyiExtropy::new(2.0, std::f64::consts::E).unwrap();
    assert_abs_diff_eq!(
        r.information(&dense).unwrap(),
        2.0 * (4.0_f64 / 3.0).ln(),
        epsilon = 1e-12
    );
}

#[test]
fn extropy_maxima() {
    let s = ShannonExtropy::new(2.0).unwrap();
    assert_eq!(s.maximum(1).unwrap(), 0.0);
    assert_abs_diff_eq!(s.maximum(2).unwrap(), 1.0, epsilon = 1e-12);
    assert_eq!(
        RenyiExtropy::new(3.0, 2.0).unwrap().maximum(5).unwrap(),
        s.maximum(5).unwrap()
    );
    // k/(q-1)·(L-1 - L((L-1)/L)^q) with L = 4, q = 2: 3 - 4·9/16 = 0.75
    let t = TsallisExtropy::new(2.0, 1.0, 2.0).unwrap();
    assert_abs_diff_eq!(t.maximum(4).unwrap(), 0.75, epsilon = 1e-12);
    assert!(TsallisExtropy::new(0.0, 1.0, 2.0).unwrap().maximum(4).is_err());
}
