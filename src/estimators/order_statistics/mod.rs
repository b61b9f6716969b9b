// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Order-Statistic Differential Entropy Estimators
//!
//! These estimators work directly on the sorted sample `x(1) <= ... <= x(n)` and never
//! discretize it. Spacings use a window of half-width `m`; indices outside `[1, n]`
//! are clamped to the nearest boundary order statistic. The window must satisfy
//! `2m < n`.
//!
//! Every estimate is computed in nats and then converted to the requested base.
//!
//! Tied values give zero spacings. Vasicek, Ebrahimi and Alizadeh–Arghami take
//! `ln 0` and report `-inf`, the limit of their formula. Correa has no defined value
//! when a whole window is tied and returns an error.

pub mod alizadeh_arghami;
pub mod correa;
pub mod ebrahimi;
pub mod vasicek;

pub use alizadeh_arghami::AlizadehArghami;
pub use correa::Correa;
pub use ebrahimi::Ebrahimi;
pub use vasicek::Vasicek;

use ndarray::Array1;

use crate::error::{ComplexityError, Result, check_base};

/// Sorted copy of a sample. NaN sorts last.
#[derive(Debug, Clone)]
pub(crate) struct OrderStatistics {
    sorted: Vec<f64>,
}

impl OrderStatistics {
    /// Validate `m` against the sample length and sort.
    pub(crate) fn new(x: &Array1<f64>, m: usize, base: f64) -> Result<Self> {
        check_base(base)?;
        check_window(m)?;
        let n = x.len();
        if 2 * m >= n {
            return Err(ComplexityError::InsufficientData {
                needed: 2 * m + 1,
                got: n,
            });
        }
        let mut sorted = x.to_vec();
        sorted.sort_by(f64::total_cmp);
        Ok(Self { sorted })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.sorted.len()
    }

    /// One-based order statistic with boundary clamping.
    #[inline]
    pub(crate) fn at(&self, i: isize) -> f64 {
        let n = self.sorted.len() as isize;
        let idx = i.clamp(1, n) - 1;
        self.sorted[idx as usize]
    }

    /// `x(i+m) - x(i-m)` for one-based `i`.
    #[inline]
    pub(crate) fn spacing(&self, i: usize, m: usize) -> f64 {
        let (i, m) = (i as isize, m as isize);
        self.at(i + m) - self.at(i - m)
    }
}

pub(crate) fn check_window(m: usize) -> Result<()> {
    if m == 0 {
        return Err(ComplexityError::invalid("m", "window must be at least 1"));
    }
    Ok(())
}

/// Vasicek estimate in nats, shared with the bias-corrected variant.
pub(crate) fn vasicek_nats(os: &OrderStatistics, m: usize) -> f64 {
    let n = os.len();
    let scale = n as f64 / (2 * m) as f64;
    let sum: f64 = (1..=n).map(|i| (scale * os.spacing(i, m)).ln()).sum();
    sum / n as f64
}
