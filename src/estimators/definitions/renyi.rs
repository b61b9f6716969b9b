// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{check_alphabet, check_order, log_base, near, shannon_sum};
use crate::error::{Result, check_base};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::{EntropyDefinition, InformationMeasure};

/// Rényi entropy of order `q >= 0`.
///
/// H_q = 1/(1-q) · log_b Σ p^q, with the limits
/// - `q → 0`: log_b of the number of non-zero probabilities (Hartley entropy),
/// - `q → 1`: Shannon entropy,
/// - `q = ∞`: `-log_b max p` (min-entropy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renyi {
    pub q: f64,
    pub base: f64,
}

impl Renyi {
    pub fn new(q: f64, base: f64) -> Result<Self> {
        check_order("q", q)?;
        check_base(base)?;
        Ok(Self { q, base })
    }
}

impl Default for Renyi {
    fn default() -> Self {
        Self {
            q: 1.0,
            base: std::f64::consts::E,
        }
    }
}

impl InformationMeasure for Renyi {
    fn information(&self, probs: &Probabilities) -> Result<f64> {
        check_order("q", self.q)?;
        check_base(self.base)?;
        let (q, base) = (self.q, self.base);
        let h = if near(q, 0.0) {
            log_base(probs.nonzero().count() as f64, base)
        } else if near(q, 1.0) {
            shannon_sum(probs.iter().copied(), base)
        } else if q.is_infinite() {
            -log_base(probs.max(), base)
        } else {
            let s: f64 = probs.nonzero().map(|p| p.powf(q)).sum();
            log_base(s, base) / (1.0 - q)
        };
        Ok(h)
    }

    fn maximum(&self, total_outcomes: usize) -> Result<f64> {
        check_base(self.base)?;
        check_alphabet(total_outcomes)?;
        Ok(log_base(total_outcomes as f64, self.base))
    }
}

impl EntropyDefinition for Renyi {}
