// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Rectangular Value Binning
//!
//! The value range of each dimension is partitioned into equal-width, half-open
//! bins `[lo + k·w, lo + (k+1)·w)`. An outcome is the bin index (univariate data) or
//! the tuple of per-dimension bin indices (multivariate data, rows = points).
//!
//! Two ways to lay out the grid:
//!
//! - [`FixedRectangularBinning`]: explicit ranges, independent of the data. Points
//!   outside the ranges are discarded and not counted, so probabilities are
//!   normalized over the points that fell inside.
//! - [`RectangularBinning`]: ranges taken from the data minimum and maximum at call
//!   time, either with a fixed number of bins or a fixed bin width. The maximum
//!   value is placed in the last bin.

use std::marker::PhantomData;

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, Ix1, Ix2};

use crate::error::{ComplexityError, Result};
use crate::estimators::probabilities::{Probabilities, probabilities_from_outcomes};
use crate::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};

/// Upper limit on the number of bins a width may produce along one dimension.
pub const MAX_BINS_PER_DIM: usize = u32::MAX as usize;

/// Grid derived from the data range at call time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RectangularBinning {
    /// This many bins along every dimension.
    Bins(usize),
    /// Bins of this width along every dimension.
    Width(f64),
}

/// Grid with explicit `[lo, hi)` ranges, one per dimension, each split into `bins` bins.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRectangularBinning {
    pub ranges: Vec<(f64, f64)>,
    pub bins: usize,
}

impl FixedRectangularBinning {
    pub fn new(ranges: Vec<(f64, f64)>, bins: usize) -> Result<Self> {
        let binning = Self { ranges, bins };
        binning.validate()?;
        Ok(binning)
    }

    /// Same range for a single dimension.
    pub fn univariate(lo: f64, hi: f64, bins: usize) -> Result<Self> {
        Self::new(vec![(lo, hi)], bins)
    }

    fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(ComplexityError::invalid("bins", "need at least one bin"));
        }
        if self.ranges.is_empty() {
            return Err(ComplexityError::invalid("ranges", "need at least one range"));
        }
        for &(lo, hi) in &self.ranges {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(ComplexityError::invalid(
                    "ranges",
                    format!("range [{lo}, {hi}) must be finite and non-empty"),
                ));
            }
        }
        Ok(())
    }
}

/// Concrete grid: per-dimension origin, bin width and number of bins.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEncoder {
    mins: Vec<f64>,
    widths: Vec<f64>,
    bins: Vec<usize>,
    /// Data-derived grids are built around the points they encode and include the
    /// upper edge in the last bin.
    closed: bool,
}

impl BinEncoder {
    pub fn bins(&self) -> &[usize] {
        &self.bins
    }

    pub fn total_bins(&self) -> Result<usize> {
        self.bins
            .iter()
            .try_fold(1usize, |acc, &b| acc.checked_mul(b))
            .ok_or_else(|| ComplexityError::invalid("bins", "number of bins overflows usize"))
    }

    /// Bin indices of one point, or `None` when it lies outside the grid.
    pub fn encode(&self, point: ArrayView1<'_, f64>) -> Option<Vec<usize>> {
        let mut idx = Vec::with_capacity(self.bins.len());
        for (d, &v) in point.iter().enumerate() {
            let rel = (v - self.mins[d]) / self.widths[d];
            if !(rel >= 0.0) {
                return None;
            }
            let k = rel.floor() as usize;
            let upper = self.mins[d] + self.widths[d] * self.bins[d] as f64;
            if k < self.bins[d] {
                idx.push(k);
            } else if self.closed || v < upper {
                // The data maximum, or a value rounded just past the upper edge.
                idx.push(self.bins[d] - 1);
            } else {
                return None;
            }
        }
        Some(idx)
    }
}

/// A binning strategy turns a point cloud into a concrete [`BinEncoder`].
pub trait BinningScheme {
    fn encoder(&self, points: ArrayView2<'_, f64>) -> Result<BinEncoder>;
}

impl BinningScheme for FixedRectangularBinning {
    fn encoder(&self, points: ArrayView2<'_, f64>) -> Result<BinEncoder> {
        self.validate()?;
        if points.ncols() != self.ranges.len() {
            return Err(ComplexityError::ShapeMismatch(format!(
                "binning has {} ranges but points have {} dimensions",
                self.ranges.len(),
                points.ncols()
            )));
        }
        Ok(BinEncoder {
            mins: self.ranges.iter().map(|r| r.0).collect(),
            widths: self
                .ranges
                .iter()
                .map(|&(lo, hi)| (hi - lo) / self.bins as f64)
                .collect(),
            bins: vec![self.bins; self.ranges.len()],
            closed: false,
        })
    }
}

impl BinningScheme for RectangularBinning {
    fn encoder(&self, points: ArrayView2<'_, f64>) -> Result<BinEncoder> {
        if points.nrows() == 0 {
            return Err(ComplexityError::InsufficientData { needed: 1, got: 0 });
        }
        let dims = points.ncols();
        let mut mins = Vec::with_capacity(dims);
        let mut widths = Vec::with_capacity(dims);
        let mut bins = Vec::with_capacity(dims);
        for column in points.axis_iter(Axis(1)) {
            let lo = column.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(ComplexityError::invalid(
                    "x",
                    "data range must be finite to derive bins",
                ));
            }
            let span = hi - lo;
            let (width, n_bins) = match *self {
                RectangularBinning::Bins(n) => {
                    if n == 0 {
                        return Err(ComplexityError::invalid("bins", "need at least one bin"));
                    }
                    let width = if span > 0.0 { span / n as f64 } else { 1.0 };
                    (width, n)
                }
                RectangularBinning::Width(w) => {
                    if !(w.is_finite() && w > 0.0) {
                        return Err(ComplexityError::invalid(
                            "width",
                            format!("bin width must be positive, got {w}"),
                        ));
                    }
                    let steps = (span / w).floor();
                    let n_bins = if steps.is_finite() && steps < MAX_BINS_PER_DIM as f64 {
                        (steps as usize).checked_add(1)
                    } else {
                        None
                    };
                    let Some(n_bins) = n_bins else {
                        return Err(ComplexityError::invalid(
                            "width",
                            format!("bin width {w} yields too many bins for a data span of {span}"),
                        ));
                    };
                    (w, n_bins)
                }
            };
            mins.push(lo);
            widths.push(width);
            bins.push(n_bins);
        }
        Ok(BinEncoder {
            mins,
            widths,
            bins,
            closed: true,
        })
    }
}

/// Mixed-radix enumeration of all index tuples, last dimension fastest.
fn index_tuples(bins: &[usize], total: usize) -> Vec<Vec<usize>> {
    let mut space = Vec::with_capacity(total);
    let mut current = vec![0usize; bins.len()];
    for _ in 0..total {
        space.push(current.clone());
        for (digit, &radix) in current.iter_mut().zip(bins).rev() {
            *digit += 1;
            if *digit < radix {
                break;
            }
            *digit = 0;
        }
    }
    space
}

fn encode_points(encoder: &BinEncoder, points: ArrayView2<'_, f64>) -> Vec<Vec<usize>> {
    let encoded: Vec<Vec<usize>> = points
        .axis_iter(Axis(0))
        .filter_map(|p| encoder.encode(p))
        .collect();
    let discarded = points.nrows() - encoded.len();
    if discarded > 0 {
        debug!("value binning discarded {discarded} points outside the grid");
    }
    encoded
}

/// Value binning outcome space. `D` is [`Ix1`] for scalar series and [`Ix2`] for
/// point clouds (rows = points).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBinning<B, D = Ix1> {
    pub binning: B,
    _dim: PhantomData<D>,
}

impl<B: BinningScheme> ValueBinning<B, Ix1> {
    pub fn new(binning: B) -> Self {
        Self {
            binning,
            _dim: PhantomData,
        }
    }
}

impl<B: BinningScheme> ValueBinning<B, Ix2> {
    pub fn multivariate(binning: B) -> Self {
        Self {
            binning,
            _dim: PhantomData,
        }
    }
}

impl<B: BinningScheme> OutcomeSpace for ValueBinning<B, Ix1> {
    type Input = Array1<f64>;

    fn name(&self) -> &'static str {
        "ValueBinning"
    }

    fn probabilities(&self, x: &Array1<f64>) -> Result<Probabilities> {
        probabilities_from_outcomes(&self.outcomes(x)?)
    }

    fn total_outcomes(&self, x: &Array1<f64>) -> Result<usize> {
        self.binning
            .encoder(x.view().insert_axis(Axis(1)))?
            .total_bins()
    }
}

impl<B: BinningScheme> CountingOutcomeSpace for ValueBinning<B, Ix1> {
    type Outcome = usize;

    fn outcomes(&self, x: &Array1<f64>) -> Result<Vec<usize>> {
        let points = x.view().insert_axis(Axis(1));
        let encoder = self.binning.encoder(points)?;
        Ok(encode_points(&encoder, points)
            .into_iter()
            .map(|idx| idx[0])
            .collect())
    }

    fn outcome_space(&self, x: &Array1<f64>) -> Result<Vec<usize>> {
        Ok((0..self.total_outcomes(x)?).collect())
    }
}

impl<B: BinningScheme> OutcomeSpace for ValueBinning<B, Ix2> {
    type Input = Array2<f64>;

    fn name(&self) -> &'static str {
        "ValueBinning"
    }

    fn probabilities(&self, x: &Array2<f64>) -> Result<Probabilities> {
        probabilities_from_outcomes(&self.outcomes(x)?)
    }

    fn total_outcomes(&self, x: &Array2<f64>) -> Result<usize> {
        self.binning.encoder(x.view())?.total_bins()
    }
}

impl<B: BinningScheme> CountingOutcomeSpace for ValueBinning<B, Ix2> {
    type Outcome = Vec<usize>;

    fn outcomes(&self, x: &Array2<f64>) -> Result<Vec<Vec<usize>>> {
        let encoder = self.binning.encoder(x.view())?;
        Ok(encode_points(&encoder, x.view()))
    }

    fn outcome_space(&self, x: &Array2<f64>) -> Result<Vec<Vec<usize>>> {
        let encoder = self.binning.encoder(x.view())?;
        let total = encoder.total_bins()?;
        Ok(index_tuples(encoder.bins(), total))
    }
}
