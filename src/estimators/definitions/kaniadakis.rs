// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{check_alphabet, log_base, shannon_sum};
use crate::error::{ComplexityError, Result, check_base};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::{EntropyDefinition, InformationMeasure};

/// Kaniadakis entropy `S_κ = -Σ p ln_κ(p) / ln b` with the κ-logarithm
/// `ln_κ(p) = (p^κ - p^-κ) / (2κ)`, defined for `|κ| < 1`.
///
/// `κ = 0` is exactly Shannon entropy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kaniadakis {
    pub kappa: f64,
    pub base: f64,
}

impl Kaniadakis {
    pub fn new(kappa: f64, base: f64) -> Result<Self> {
        let k = Self { kappa, base };
        k.validate()?;
        Ok(k)
    }

    fn validate(&self) -> Result<()> {
        if !(self.kappa.abs() < 1.0) {
            return Err(ComplexityError::invalid(
                "kappa",
                format!("|kappa| must be below 1, got {}", self.kappa),
            ));
        }
        check_base(self.base)
    }
}

impl Default for Kaniadakis {
    fn default() -> Self {
        Self {
            kappa: 0.5,
            base: std::f64::consts::E,
        }
    }
}

#[inline]
fn kappa_log(p: f64, kappa: f64) -> f64 {
    (p.powf(kappa) - p.powf(-kappa)) / (2.0 * kappa)
}

impl InformationMeasure for Kaniadakis {
    fn information(&self, probs: &Probabilities) -> Result<f64> {
        self.validate()?;
        if self.kappa == 0.0 {
            return Ok(shannon_sum(probs.iter().copied(), self.base));
        }
        let s: f64 = probs
            .nonzero()
            .map(|p| p * kappa_log(p, self.kappa))
            .sum();
        Ok(-s / self.base.ln())
    }

    fn maximum(&self, total_outcomes: usize) -> Result<f64> {
        self.validate()?;
        check_alphabet(total_outcomes)?;
        let l = total_outcomes as f64;
        if self.kappa == 0.0 {
            return Ok(log_base(l, self.base));
        }
        Ok(-kappa_log(1.0 / l, self.kappa) / self.base.ln())
    }
}

impl EntropyDefinition for Kaniadakis {}
