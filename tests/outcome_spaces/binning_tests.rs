// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use complexity::estimators::approaches::{
    FixedRectangularBinning, RectangularBinning, ValueBinning,
};
use complexity::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};
use complexity::estimators::{allcounts, missing_outcomes};
use complexity::ComplexityError;
use ndarray::{Array1, array};
use rstest::rstest;

#[test]
fn data_range_bins_put_maximum_in_last_bin() {
    let x = array![0.0, 1.0, 2.0, 3.0, 4.0];
    let scheme = ValueBinning::new(RectangularBinning::Bins(4));
    assert_eq!(scheme.outcomes(&x).unwrap(), vec![0, 1, 2, 3, 3]);
    assert_eq!(allcounts(&scheme, &x).unwrap().to_vec(), vec![1, 1, 1, 2]);
}

#[test]
fn bin_width_determines_number_of_bins() {
    let x = array![0.0, 1.0, 2.0, 3.0, 4.0];
    let scheme = ValueBinning::new(RectangularBinning::Width(1.0));
    assert_eq!(scheme.total_outcomes(&x).unwrap(), 5);
    assert_eq!(allcounts(&scheme, &x).unwrap().to_vec(), vec![1; 5]);
}

#[rstest]
#[case(1e-300, array![0.0, 1.0])]
#[case(1.0, array![-1e308, 1e308])]
fn bin_width_too_small_for_the_data_span(#[case] width: f64, #[case] x: Array1<f64>) {
    let scheme = ValueBinning::new(RectangularBinning::Width(width));
    assert!(matches!(
        scheme.outcomes(&x),
        Err(ComplexityError::InvalidParameter { name: "width", .. })
    ));
    assert!(scheme.total_outcomes(&x).is_err());
}

#[rstest]
#[case(-0.1)]
#[case(1.0)]
#[case(f64::NAN)]
fn fixed_ranges_discard_points_outside(#[case] outside: f64) {
    let x = array![0.1, outside, 0.9];
    let scheme = ValueBinning::new(FixedRectangularBinning::univariate(0.0, 1.0, 2).unwrap());
    assert_eq!(scheme.outcomes(&x).unwrap(), vec![0, 1]);
}

#[test]
fn multivariate_binning_yields_index_tuples() {
    let points = array![[0.1, 0.1], [0.6, 0.1], [0.6, 0.7], [1.5, 0.2]];
    let scheme = ValueBinning::multivariate(
        FixedRectangularBinning::new(vec![(0.0, 1.0), (0.0, 1.0)], 2).unwrap(),
    );
    assert_eq!(
        scheme.outcomes(&points).unwrap(),
        vec![vec![0, 0], vec![1, 0], vec![1, 1]]
    );
    assert_eq!(
        scheme.outcome_space(&points).unwrap(),
        vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
    );
    assert_eq!(allcounts(&scheme, &points).unwrap().to_vec(), vec![1, 0, 1, 1]);
    assert_eq!(missing_outcomes(&scheme, &points).unwrap(), 1);
}

#[test]
fn data_range_binning_per_dimension() {
    let points = array![[0.0, 10.0], [1.0, 20.0], [2.0, 30.0]];
    let scheme = ValueBinning::multivariate(RectangularBinning::Bins(2));
    assert_eq!(scheme.total_outcomes(&points).unwrap(), 4);
    assert_eq!(
        scheme.outcomes(&points).unwrap(),
        vec![vec![0, 0], vec![1, 1], vec![1, 1]]
    );
}

#[test]
fn range_dimension_mismatch_is_reported() {
    let points = array![[0.1, 0.2, 0.3]];
    let scheme = ValueBinning::multivariate(
        FixedRectangularBinning::new(vec![(0.0, 1.0), (0.0, 1.0)], 2).unwrap(),
    );
    assert!(matches!(
        scheme.outcomes(&points),
        Err(ComplexityError::ShapeMismatch(_))
    ));
}

#[test]
fn invalid_binning_is_rejected() {
    assert!(FixedRectangularBinning::univariate(1.0, 0.0, 4).is_err());
    assert!(FixedRectangularBinning::univariate(0.0, 1.0, 0).is_err());
    let x = array![0.0, 1.0];
    assert!(ValueBinning::new(RectangularBinning::Width(-1.0)).outcomes(&x).is_err());
    assert!(ValueBinning::new(RectangularBinning::Bins(0)).outcomes(&x).is_err());
}
