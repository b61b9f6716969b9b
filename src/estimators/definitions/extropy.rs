// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Extropies
//!
//! Extropy is the complementary dual of entropy: it is built from `1 - p` instead of `p`.
//! For a two-outcome distribution every extropy equals its entropy counterpart.
//!
//! Extropies are evaluated over every entry of the probability vector, including zeros.
//! `N` below is the length of that vector. A single-entry vector has zero extropy.

use super::{check_alphabet, check_order, log_base, near};
use crate::error::{ComplexityError, Result, check_base};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::{ExtropyDefinition, InformationMeasure};

/// `-Σ (1-p) log_b (1-p)` over all entries with `p < 1`.
fn shannon_extropy_sum(probs: &Probabilities, base: f64) -> f64 {
    let mut j = 0.0_f64;
    for &p in probs.iter() {
        let c = 1.0 - p;
        if c > 0.0 {
            j -= c * log_base(c, base);
        }
    }
    j
}

/// `(L-1) log_b (L/(L-1))`, attained by the uniform distribution.
fn shannon_extropy_maximum(total_outcomes: usize, base: f64) -> f64 {
    if total_outcomes <= 1 {
        return 0.0;
    }
    let l = total_outcomes as f64;
    (l - 1.0) * log_base(l / (l - 1.0), base)
}

/// Shannon extropy `J = -Σ (1-p) log_b (1-p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShannonExtropy {
    pub base: f64,
}

impl ShannonExtropy {
    pub fn new(base: f64) -> Result<Self> {
        check_base(base)?;
        Ok(Self { base })
    }
}

impl Default for ShannonExtropy {
    fn default() -> Self {
        Self {
            base: std::f64::consts::E,
        }
    }
}

impl InformationMeasure for ShannonExtropy {
    fn information(&self, probs: &Probabilities) -> Result<f64> {
        check_base(self.base)?;
        if probs.len() <= 1 {
            return Ok(0.0);
        }
        Ok(shannon_extropy_sum(probs, self.base))
    }

    fn maximum(&self, total_outcomes: usize) -> Result<f64> {
        check_base(self.base)?;
        check_alphabet(total_outcomes)?;
        Ok(shannon_extropy_maximum(total_outcomes, self.base))
    }
}

impl ExtropyDefinition for ShannonExtropy {}

/// Rényi extropy of order `q >= 0`:
///
/// J_q = (N-1)/(1-q) · (log_b Σ (1-p)^q - log_b (N-1))
///
/// `q → 1` gives Shannon extropy and `q = ∞` gives `-(N-1) log_b (1 - min p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenyiExtropy {
    pub q: f64,
    pub base: f64,
}

impl RenyiExtropy {
    pub fn new(q: f64, base: f64) -> Result<Self> {
        check_order("q", q)?;
        check_base(base)?;
        Ok(Self { q, base })
    }
}

impl Default for RenyiExtropy {
    fn default() -> Self {
        Self {
            q: 1.0,
            base: std::f64::consts::E,
        }
    }
}

impl InformationMeasure for RenyiExtropy {
    fn information(&self, probs: &Probabilities) -> Result<f64> {
        check_order("q", self.q)?;
        check_base(self.base)?;
        let n = probs.len();
        if n <= 1 {
            return Ok(0.0);
        }
        let (q, base) = (self.q, self.base);
        let nm1 = (n - 1) as f64;
        if near(q, 1.0) {
            return Ok(shannon_extropy_sum(probs, base));
        }
        if q.is_infinite() {
            let pmin = probs.iter().copied().fold(f64::INFINITY, f64::min);
            return Ok(-nm1 * log_base(1.0 - pmin, base));
        }
        let s: f64 = probs.iter().map(|&p| (1.0 - p).powf(q)).sum();
        Ok(nm1 / (1.0 - q) * (log_base(s, base) - log_base(nm1, base)))
    }

    /// Every Rényi extropy peaks at the uniform distribution with the Shannon value.
    fn maximum(&self, total_outcomes: usize) -> Result<f64> {
        check_base(self.base)?;
        check_alphabet(total_outcomes)?;
        Ok(shannon_extropy_maximum(total_outcomes, self.base))
    }
}

impl ExtropyDefinition for RenyiExtropy {}

/// Tsallis extropy `J_q = k/(q-1) · (N - 1 - Σ (1-p)^q)`.
///
/// `q → 1` gives Shannon extropy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsallisExtropy {
    pub q: f64,
    pub k: f64,
    pub base: f64,
}

impl TsallisExtropy {
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

impl Default for TsallisExtropy {
    fn default() -> Self {
        Self {
            q: 1.0,
            k: 1.0,
            base: std::f64::consts::E,
        }
    }
}

impl InformationMeasure for TsallisExtropy {
    fn information(&self, probs: &Probabilities) -> Result<f64> {
        self.validate()?;
        let n = probs.len();
        if n <= 1 {
            return Ok(0.0);
        }
        if near(self.q, 1.0) {
            return Ok(shannon_extropy_sum(probs, self.base));
        }
        let s: f64 = probs.iter().map(|&p| (1.0 - p).powf(self.q)).sum();
        Ok(self.k / (self.q - 1.0) * ((n - 1) as f64 - s))
    }

    fn maximum(&self, total_outcomes: usize) -> Result<f64> {
        self.validate()?;
        check_alphabet(total_outcomes)?;
        if near(self.q, 1.0) {
            return Ok(shannon_extropy_maximum(total_outcomes, self.base));
        }
        if self.q <= 0.0 {
            return Err(ComplexityError::invalid(
                "q",
                format!("no maximum over the alphabet for q = {}", self.q),
            ));
        }
        if total_outcomes <= 1 {
            return Ok(0.0);
        }
        let l = total_outcomes as f64;
        let q = self.q;
        Ok(self.k / (q - 1.0) * (l - 1.0 - l * ((l - 1.0) / l).powf(q)))
    }
}

impl ExtropyDefinition for TsallisExtropy {}
