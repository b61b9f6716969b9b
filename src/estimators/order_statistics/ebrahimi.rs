// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use super::{OrderStatistics, check_window};
use crate::error::{Result, check_base};
use crate::estimators::traits::{ComplexityEstimator, DifferentialEntropyEstimator};

/// Ebrahimi, Pflughoeft & Soofi (1994) spacing estimator
///
/// H = (1/n) Σ ln( n/(c_i m) · (x(i+m) - x(i-m)) )
///
/// with `c_i = 1 + (i-1)/m` for `i <= m`, `c_i = 1 + (n-i)/m` for `i > n-m`, and
/// `c_i = 2` in the interior. The weights account for clamped boundary spacings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ebrahimi {
    pub m: usize,
    pub base: f64,
}

impl Ebrahimi {
    pub fn new(m: usize, base: f64) -> Result<Self> {
        check_window(m)?;
        check_base(base)?;
        Ok(Self { m, base })
    }
}

impl Default for Ebrahimi {
    fn default() -> Self {
        Self {
            m: 1,
            base: std::f64::consts::E,
        }
    }
}

/// Boundary weight for one-based position `i`.
#[inline]
pub(crate) fn ebrahimi_weight(i: usize, n: usize, m: usize) -> f64 {
    let mf = m as f64;
    if i <= m {
        1.0 + (i - 1) as f64 / mf
    } else if i > n - m {
        1.0 + (n - i) as f64 / mf
    } else {
        2.0
    }
}

impl DifferentialEntropyEstimator for Ebrahimi {
    fn entropy(&self, x: &Array1<f64>) -> Result<f64> {
        let os = OrderStatistics::new(x, self.m, self.base)?;
        let n = os.len();
        let (nf, mf) = (n as f64, self.m as f64);
        let sum: f64 = (1..=n)
            .map(|i| {
                let c = ebrahimi_weight(i, n, self.m);
                (nf / (c * mf) * os.spacing(i, self.m)).ln()
            })
            .sum();
        Ok(sum / nf / self.base.ln())
    }
}

impl ComplexityEstimator for Ebrahimi {
    fn estimate(&self, x: &Array1<f64>) -> Result<f64> {
        self.entropy(x)
    }
}
