// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use super::{OrderStatistics, check_window, vasicek_nats};
use crate::error::{Result, check_base};
use crate::estimators::traits::{ComplexityEstimator, DifferentialEntropyEstimator};

/// Vasicek (1976) spacing estimator
///
/// H = (1/n) Σ ln( n/(2m) · (x(i+m) - x(i-m)) )
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vasicek {
    pub m: usize,
    pub base: f64,
}

impl Vasicek {
    /// Window half-width `m >= 1`; the sample length is checked at estimation time.
    pub fn new(m: usize, base: f64) -> Result<Self> {
        check_window(m)?;
        check_base(base)?;
        Ok(Self { m, base })
    }
}

impl Default for Vasicek {
    fn default() -> Self {
        Self {
            m: 1,
            base: std::f64::consts::E,
        }
    }
}

impl DifferentialEntropyEstimator for Vasicek {
    fn entropy(&self, x: &Array1<f64>) -> Result<f64> {
        let os = OrderStatistics::new(x, self.m, self.base)?;
        Ok(vasicek_nats(&os, self.m) / self.base.ln())
    }
}

impl ComplexityEstimator for Vasicek {
    fn estimate(&self, x: &Array1<f64>) -> Result<f64> {
        self.entropy(x)
    }
}
