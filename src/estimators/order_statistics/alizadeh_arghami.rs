// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use super::{OrderStatistics, check_window, vasicek_nats};
use crate::error::{Result, check_base};
use crate::estimators::traits::{ComplexityEstimator, DifferentialEntropyEstimator};

/// Alizadeh Noughabi & Arghami (2010): the Vasicek estimate plus the bias
/// correction `(2m/n) · log_b 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlizadehArghami {
    pub m: usize,
    pub base: f64,
}

impl AlizadehArghami {
    pub fn new(m: usize, base: f64) -> Result<Self> {
        check_window(m)?;
        check_base(base)?;
        Ok(Self { m, base })
    }
}

impl Default for AlizadehArghami {
    fn default() -> Self {
        Self {
            m: 1,
            base: std::f64::consts::E,
        }
    }
}

impl DifferentialEntropyEstimator for AlizadehArghami {
    fn entropy(&self, x: &Array1<f64>) -> Result<f64> {
        let os = OrderStatistics::new(x, self.m, self.base)?;
        let n = os.len() as f64;
        let correction = 2.0 * self.m as f64 / n * std::f64::consts::LN_2;
        Ok((vasicek_nats(&os, self.m) + correction) / self.base.ln())
    }
}

impl ComplexityEstimator for AlizadehArghami {
    fn estimate(&self, x: &Array1<f64>) -> Result<f64> {
        self.entropy(x)
    }
}
