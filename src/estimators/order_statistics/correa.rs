// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use super::{OrderStatistics, check_window};
use crate::error::{ComplexityError, Result, check_base};
use crate::estimators::traits::{ComplexityEstimator, DifferentialEntropyEstimator};

/// Correa (1995) local linear regression estimator
///
/// For each position `i` the window `j = i-m..=i+m` of clamped order statistics has
/// local mean `x̄_i`, and
///
/// H = -(1/n) Σ ln( Σ_j (x(j) - x̄_i)(j - i) / (n Σ_j (x(j) - x̄_i)²) )
///
/// The sum is evaluated with natural logarithms and divided by `ln b` afterwards.
///
/// A window of tied order statistics has no regression slope, so unlike the spacing
/// estimators this one fails with [`ComplexityError::InvalidParameter`] instead of
/// returning `-inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correa {
    pub m: usize,
    pub base: f64,
}

impl Correa {
    pub fn new(m: usize, base: f64) -> Result<Self> {
        check_window(m)?;
        check_base(base)?;
        Ok(Self { m, base })
    }
}

impl Default for Correa {
    fn default() -> Self {
        Self {
            m: 1,
            base: std::f64::consts::E,
        }
    }
}

impl DifferentialEntropyEstimator for Correa {
    fn entropy(&self, x: &Array1<f64>) -> Result<f64> {
        let os = OrderStatistics::new(x, self.m, self.base)?;
        let n = os.len();
        let nf = n as f64;
        let m = self.m as isize;
        let width = (2 * self.m + 1) as f64;

        let mut sum_ln = 0.0_f64;
        for i in 1..=n as isize {
            let mean = (i - m..=i + m).map(|j| os.at(j)).sum::<f64>() / width;
            let mut num = 0.0_f64;
            let mut den = 0.0_f64;
            for j in i - m..=i + m {
                let d = os.at(j) - mean;
                num += d * (j - i) as f64;
                den += d * d;
            }
            if den == 0.0 {
                return Err(ComplexityError::invalid(
                    "x",
                    format!("degenerate spacings: order statistics around position {i} are constant"),
                ));
            }
            sum_ln += (num / (nf * den)).ln();
        }
        let nats = -sum_ln / nf;
        Ok(nats / self.base.ln())
    }
}

impl ComplexityEstimator for Correa {
    fn estimate(&self, x: &Array1<f64>) -> Result<f64> {
        self.entropy(x)
    }
}
