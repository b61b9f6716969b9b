// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use complexity::estimators::approaches::{
    OrdinalPatterns, SpatialDispersion, SpatialOrdinalPatterns, Stencil,
};
use complexity::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};
use complexity::ComplexityError;
use ndarray::{ArrayD, IxDyn, array};
use rstest::rstest;

use crate::test_helpers::{generate_gaussian_field, generate_gaussian_series};

fn square_stencils() -> [Stencil; 3] {
    [
        Stencil::from_offsets(vec![vec![1, 1], vec![0, 0], vec![1, 0], vec![0, 1]]).unwrap(),
        Stencil::from_extent_lag(&[2, 2], &[1, 1]).unwrap(),
        Stencil::from_mask(&array![[true, true], [true, true]]).unwrap(),
    ]
}

#[test]
fn stencil_front_ends_normalize_to_same_offsets() {
    let [a, b, c] = square_stencils();
    assert_eq!(a, b);
    assert_eq!(b, c);
    let expected: Vec<Vec<isize>> = vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]];
    assert_eq!(a.offsets(), expected.as_slice());
    assert_eq!(a.len(), 4);
    assert_eq!(a.ndim(), 2);
}

#[rstest]
#[case(false)]
#[case(true)]
fn equivalent_stencils_produce_identical_outcomes(#[case] periodic: bool) {
    let field = generate_gaussian_field(&[6, 7], 11);
    let [a, b, c] = square_stencils();
    let ordinal = |s: &Stencil| {
        SpatialOrdinalPatterns::new(s.clone(), periodic)
            .unwrap()
            .outcomes(&field)
            .unwrap()
    };
    let (oa, ob, oc) = (ordinal(&a), ordinal(&b), ordinal(&c));
    assert_eq!(oa, ob);
    assert_eq!(ob, oc);

    let da = SpatialDispersion::new(a, 3, periodic).unwrap().outcomes(&field).unwrap();
    let dc = SpatialDispersion::new(c, 3, periodic).unwrap().outcomes(&field).unwrap();
    assert_eq!(da, dc);
}

#[test]
fn periodic_boundaries_keep_every_reference_cell() {
    let field = generate_gaussian_field(&[5, 4], 5);
    let stencil = Stencil::from_extent_lag(&[2, 2], &[1, 1]).unwrap();
    let open = SpatialOrdinalPatterns::new(stencil.clone(), false).unwrap();
    let wrapped = SpatialOrdinalPatterns::new(stencil, true).unwrap();
    assert_eq!(open.outcomes(&field).unwrap().len(), 4 * 3);
    assert_eq!(wrapped.outcomes(&field).unwrap().len(), 5 * 4);
    assert_eq!(open.total_outcomes(&field).unwrap(), 24);
}

#[test]
fn line_stencil_matches_temporal_ordinal_patterns() {
    let x = generate_gaussian_series(60, 0.0, 1.0, 9);
    let field = ArrayD::from_shape_vec(IxDyn(&[60]), x.to_vec()).unwrap();
    let stencil = Stencil::from_offsets(vec![vec![0], vec![2], vec![4]]).unwrap();
    let spatial = SpatialOrdinalPatterns::new(stencil, false).unwrap();
    let temporal = OrdinalPatterns::new(3, 2).unwrap();
    assert_eq!(spatial.outcomes(&field).unwrap(), temporal.outcomes(&x).unwrap());
}

#[test]
fn spatial_dispersion_alphabet() {
    let stencil = Stencil::from_extent_lag(&[1, 3], &[1, 1]).unwrap();
    let scheme = SpatialDispersion::new(stencil, 2, false).unwrap();
    let field = generate_gaussian_field(&[3, 3], 1);
    assert_eq!(scheme.total_outcomes(&field).unwrap(), 8);
    assert_eq!(scheme.outcome_space(&field).unwrap().len(), 8);
    assert_eq!(scheme.outcomes(&field).unwrap().len(), 3);
}

#[test]
fn dimension_mismatch_fails_before_output() {
    let field = generate_gaussian_field(&[3, 3, 3], 2);
    let stencil = Stencil::from_extent_lag(&[2, 2], &[1, 1]).unwrap();
    let scheme = SpatialOrdinalPatterns::new(stencil, false).unwrap();
    assert!(matches!(
        scheme.outcomes(&field),
        Err(ComplexityError::ShapeMismatch(_))
    ));
}

#[test]
fn stencil_larger_than_array_fails() {
    let field = generate_gaussian_field(&[2, 2], 3);
    let stencil = Stencil::from_extent_lag(&[3, 1], &[1, 1]).unwrap();
    let scheme = SpatialOrdinalPatterns::new(stencil, false).unwrap();
    assert!(matches!(
        scheme.outcomes(&field),
        Err(ComplexityError::ShapeMismatch(_))
    ));
}

#[test]
fn malformed_stencils_are_rejected() {
    assert!(Stencil::from_offsets(vec![]).is_err());
    assert!(Stencil::from_offsets(vec![vec![0, 0], vec![0, 0]]).is_err());
    assert!(matches!(
        Stencil::from_offsets(vec![vec![0, 0], vec![1]]),
        Err(ComplexityError::ShapeMismatch(_))
    ));
    assert!(Stencil::from_extent_lag(&[2, 0], &[1, 1]).is_err());
    assert!(Stencil::from_mask(&array![[false, false]]).is_err());
}
