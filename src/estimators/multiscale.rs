// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Multiscale Analysis
//!
//! Repeats a single-scale [`ComplexityEstimator`] on coarse-grained copies of a
//! sample for scales `1..=maxscale`. Coarse-graining replaces consecutive,
//! non-overlapping blocks of `s` values by their mean; scale 1 is the unmodified
//! sample.
//!
//! Scales are evaluated independently of each other.

use std::ops::Index;

use log::debug;
use ndarray::{Array1, s};

use crate::error::{ComplexityError, Result};
use crate::estimators::traits::ComplexityEstimator;

/// How a sample is coarse-grained at scale `s`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoarseGraining {
    /// One coarse-graining starting at the first sample, `⌊n/s⌋` values.
    #[default]
    Regular,
    /// `s` coarse-grainings, one per starting offset `0..s`; the estimates are averaged.
    Composite,
}

/// Block means of length `scale`, starting at `offset`.
pub fn coarse_grain(x: &Array1<f64>, scale: usize, offset: usize) -> Array1<f64> {
    let scale = scale.max(1);
    if scale == 1 && offset == 0 {
        return x.clone();
    }
    let tail = x.slice(s![offset.min(x.len())..]);
    let blocks = tail.len() / scale;
    Array1::from_iter((0..blocks).map(|b| {
        let block = tail.slice(s![b * scale..(b + 1) * scale]);
        block.sum() / scale as f64
    }))
}

impl CoarseGraining {
    /// Every coarse-grained sequence this policy evaluates at `scale`.
    pub fn sequences(&self, x: &Array1<f64>, scale: usize) -> Vec<Array1<f64>> {
        match self {
            CoarseGraining::Regular => vec![coarse_grain(x, scale, 0)],
            CoarseGraining::Composite => (0..scale.max(1))
                .map(|offset| coarse_grain(x, scale, offset))
                .collect(),
        }
    }
}

/// Complexity per scale, starting at scale 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityProfile {
    values: Array1<f64>,
}

impl ComplexityProfile {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at the one-based `scale`.
    pub fn at_scale(&self, scale: usize) -> Option<f64> {
        scale.checked_sub(1).and_then(|i| self.values.get(i).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn into_array(self) -> Array1<f64> {
        self.values
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

/// Zero-based, like the underlying array.
impl Index<usize> for ComplexityProfile {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

fn profile<F>(
    policy: CoarseGraining,
    x: &Array1<f64>,
    maxscale: usize,
    f: F,
) -> Result<ComplexityProfile>
where
    F: Fn(&Array1<f64>) -> Result<f64>,
{
    if maxscale == 0 {
        return Err(ComplexityError::invalid(
            "maxscale",
            "at least one scale is required",
        ));
    }
    let mut values = Array1::zeros(maxscale);
    for scale in 1..=maxscale {
        let sequences = policy.sequences(x, scale);
        debug!(
            "multiscale {:?}: scale {} with {} sequence(s) of length {}",
            policy,
            scale,
            sequences.len(),
            sequences.first().map_or(0, |c| c.len())
        );
        let mut sum = 0.0_f64;
        for coarse in &sequences {
            sum += f(coarse).map_err(|e| ComplexityError::AtScale {
                scale,
                source: Box::new(e),
            })?;
        }
        values[scale - 1] = if sequences.len() == 1 {
            sum
        } else {
            sum / sequences.len() as f64
        };
    }
    Ok(ComplexityProfile { values })
}

/// Evaluate `estimator` at scales `1..=maxscale`.
///
/// The first entry equals `estimator.estimate(x)` for both policies.
pub fn multiscale<E>(
    policy: CoarseGraining,
    estimator: &E,
    x: &Array1<f64>,
    maxscale: usize,
) -> Result<ComplexityProfile>
where
    E: ComplexityEstimator + ?Sized,
{
    profile(policy, x, maxscale, |c| estimator.estimate(c))
}

/// Like [`multiscale`], with each estimate normalized by the maximum for the alphabet
/// of its coarse-grained sequence.
pub fn multiscale_normalized<E>(
    policy: CoarseGraining,
    estimator: &E,
    x: &Array1<f64>,
    maxscale: usize,
) -> Result<ComplexityProfile>
where
    E: ComplexityEstimator + ?Sized,
{
    profile(policy, x, maxscale, |c| estimator.estimate_normalized(c))
}
