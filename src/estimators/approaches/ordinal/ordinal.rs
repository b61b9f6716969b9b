// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use super::ordinal_utils::{check_order, factorial, symbolize_series};
use crate::error::Result;
use crate::estimators::probabilities::{Probabilities, probabilities_from_outcomes};
use crate::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};

/// Ordinal (permutation) patterns.
///
/// Each delay vector `(x_t, x_{t+τ}, ..., x_{t+(m-1)τ})` is mapped to the permutation
/// that sorts it, encoded as its lexicographic rank in `0..m!`. Ties keep their
/// temporal order. A series of length `n` yields `n - (m-1)τ` outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalPatterns {
    pub m: usize,
    pub tau: usize,
}

impl OrdinalPatterns {
    pub fn new(m: usize, tau: usize) -> Result<Self> {
        check_order(m, tau)?;
        Ok(Self { m, tau })
    }
}

impl Default for OrdinalPatterns {
    fn default() -> Self {
        Self { m: 3, tau: 1 }
    }
}

impl OutcomeSpace for OrdinalPatterns {
    type Input = Array1<f64>;

    fn name(&self) -> &'static str {
        "OrdinalPatterns"
    }

    fn probabilities(&self, x: &Array1<f64>) -> Result<Probabilities> {
        probabilities_from_outcomes(&self.outcomes(x)?)
    }

    fn total_outcomes(&self, _x: &Array1<f64>) -> Result<usize> {
        check_order(self.m, self.tau)?;
        Ok(factorial(self.m))
    }
}

impl CountingOutcomeSpace for OrdinalPatterns {
    type Outcome = usize;

    fn outcomes(&self, x: &Array1<f64>) -> Result<Vec<usize>> {
        symbolize_series(x, self.m, self.tau)
    }

    fn outcome_space(&self, _x: &Array1<f64>) -> Result<Vec<usize>> {
        check_order(self.m, self.tau)?;
        Ok((0..factorial(self.m)).collect())
    }
}
