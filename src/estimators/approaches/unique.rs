// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use ndarray::Array1;

use crate::error::{ComplexityError, Result};
use crate::estimators::probabilities::{Probabilities, probabilities_from_outcomes};
use crate::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};

/// A float usable as a map key: equality, hashing and ordering follow `f64::total_cmp`,
/// with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Copy)]
pub struct FloatKey(f64);

impl FloatKey {
    pub fn new(v: f64) -> Self {
        if v == 0.0 { Self(0.0) } else { Self(v) }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for FloatKey {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Each distinct value is its own outcome.
///
/// The alphabet is the sorted set of observed values, so `total_outcomes` is only known
/// after scanning the sample and `missing_outcomes` is always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOccurrences;

impl CountOccurrences {
    pub fn new() -> Self {
        Self
    }
}

impl OutcomeSpace for CountOccurrences {
    type Input = Array1<f64>;

    fn name(&self) -> &'static str {
        "CountOccurrences"
    }

    fn probabilities(&self, x: &Array1<f64>) -> Result<Probabilities> {
        probabilities_from_outcomes(&self.outcomes(x)?)
    }

    fn total_outcomes(&self, x: &Array1<f64>) -> Result<usize> {
        self.outcome_space(x).map(|space| space.len())
    }
}

impl CountingOutcomeSpace for CountOccurrences {
    type Outcome = FloatKey;

    fn outcomes(&self, x: &Array1<f64>) -> Result<Vec<FloatKey>> {
        if x.is_empty() {
            return Err(ComplexityError::InsufficientData { needed: 1, got: 0 });
        }
        Ok(x.iter().map(|&v| FloatKey::new(v)).collect())
    }

    fn outcome_space(&self, x: &Array1<f64>) -> Result<Vec<FloatKey>> {
        let mut space = self.outcomes(x)?;
        space.sort_unstable();
        space.dedup();
        Ok(space)
    }
}
