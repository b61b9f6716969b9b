// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{check_alphabet, log_base, shannon_sum};
use crate::error::{Result, check_base};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::{EntropyDefinition, InformationMeasure};

/// Shannon entropy `H = -Σ p log_b p`, with `0 log 0 = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shannon {
    pub base: f64,
}

impl Shannon {
    pub fn new(base: f64) -> Result<Self> {
        check_base(base)?;
        Ok(Self { base })
    }
}

impl Default for Shannon {
    fn default() -> Self {
        Self {
            base: std::f64::consts::E,
        }
    }
}

impl InformationMeasure for Shannon {
    fn information(&self, probs: &Probabilities) -> Result<f64> {
        check_base(self.base)?;
        Ok(shannon_sum(probs.iter().copied(), self.base))
    }

    fn maximum(&self, total_outcomes: usize) -> Result<f64> {
        check_base(self.base)?;
        check_alphabet(total_outcomes)?;
        Ok(log_base(total_outcomes as f64, self.base))
    }
}

impl EntropyDefinition for Shannon {}
