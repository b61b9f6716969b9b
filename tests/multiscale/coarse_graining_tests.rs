// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use complexity::estimators::multiscale::coarse_grain;
use complexity::estimators::CoarseGraining;
use ndarray::array;

#[test]
fn regular_block_means() {
    let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    assert_eq!(coarse_grain(&x, 2, 0), array![1.5, 3.5, 5.5]);
    assert_eq!(coarse_grain(&x, 3, 0), array![2.0, 5.0]);
    assert_eq!(coarse_grain(&x, 1, 0), x);
}

#[test]
fn offset_shifts_block_start() {
    let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    assert_eq!(coarse_grain(&x, 2, 1), array![2.5, 4.5]);
    assert_eq!(coarse_grain(&x, 4, 10).len(), 0);
}

#[test]
fn composite_yields_one_sequence_per_offset() {
    let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let seqs = CoarseGraining::Composite.sequences(&x, 3);
    assert_eq!(seqs.len(), 3);
    assert_eq!(seqs[0], array![2.0, 5.0]);
    assert_eq!(seqs[1], array![3.0, 6.0]);
    assert_eq!(seqs[2], array![4.0, 7.0]);
    assert_eq!(CoarseGraining::Regular.sequences(&x, 3), vec![array![2.0, 5.0]]);
}
