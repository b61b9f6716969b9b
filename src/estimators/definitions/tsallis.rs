// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{check_alphabet, log_base, near, shannon_sum};
use crate::error::{ComplexityError, Result, check_base};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::{EntropyDefinition, InformationMeasure};

/// Tsallis entropy `S_q = k/(q-1) · (1 - Σ p^q)`.
///
/// At `q → 1` the Shannon form `-Σ p log_b p` is used and `k` plays no role;
/// `base` is only consulted there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tsallis {
    pub q: f64,
    pub k: f64,
    pub base: f64,
}

impl Tsallis {
    pub fn new(q: f64, k: f64, base: f64) -> Result<Self> {
        let t = Self { q, k, base };
        t.validate()?;
        Ok(t)
    }

    fn validate(&self) -> Result<()> {
        if !self.q.is_finite() {
            return Err(ComplexityError::invalid(
                "q",
                format!("order must be finite, got {}", self.q),
            ));
        }
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(ComplexityError::invalid(
                "k",
                format!("scaling constant must be positive, got {}", self.k),
            ));
        }
        check_base(self.base)
    }
}

impl Default for Tsallis {
    fn default() -> Self {
        Self {
            q: 1.0,
            k: 1.0,
            base: std::f64::consts::E,
        }
    }
}

impl InformationMeasure for Tsallis {
    fn information(&self, probs: &Probabilities) -> Result<f64> {
        self.validate()?;
        if near(self.q, 1.0) {
            return Ok(shannon_sum(probs.iter().copied(), self.base));
        }
        let s: f64 = probs.nonzero().map(|p| p.powf(self.q)).sum();
        Ok(self.k / (self.q - 1.0) * (1.0 - s))
    }

    /// Value at the uniform distribution. Only a maximum for `q > 0`.
    fn maximum(&self, total_outcomes: usize) -> Result<f64> {
        self.validate()?;
        check_alphabet(total_outcomes)?;
        let l = total_outcomes as f64;
        if near(self.q, 1.0) {
            return Ok(log_base(l, self.base));
        }
        if self.q <= 0.0 {
            return Err(ComplexityError::invalid(
                "q",
                format!("no maximum over the alphabet for q = {}", self.q),
            ));
        }
        Ok(self.k * (l.powf(1.0 - self.q) - 1.0) / (1.0 - self.q))
    }
}

impl EntropyDefinition for Tsallis {}
