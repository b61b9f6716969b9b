// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Counting and normalization of outcome sequences.
//!
//! Sparse counts and probabilities only hold observed outcomes and are reported in
//! ascending outcome order. The dense `all*` variants pad zero entries for every
//! element of the scheme's outcome space and therefore need a
//! [`CountingOutcomeSpace`].

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

use ndarray::Array1;

use crate::error::{ComplexityError, Result};
use crate::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};

/// Occurrence counts, parallel to an outcome vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counts {
    counts: Array1<usize>,
}

impl Counts {
    pub fn new(counts: impl Into<Array1<usize>>) -> Self {
        Self {
            counts: counts.into(),
        }
    }

    /// Number of counted positions.
    pub fn total(&self) -> usize {
        self.counts.sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.counts.iter()
    }

    pub fn as_array(&self) -> &Array1<usize> {
        &self.counts
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.counts.to_vec()
    }
}

impl Index<usize> for Counts {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.counts[i]
    }
}

/// A sum-normalized distribution. Entries are non-negative and sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Probabilities {
    p: Array1<f64>,
}

impl Probabilities {
    /// Normalize non-negative finite weights into a distribution.
    pub fn new(weights: impl Into<Array1<f64>>) -> Result<Self> {
        let weights = weights.into();
        if weights.is_empty() {
            return Err(ComplexityError::NoOutcomes);
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(ComplexityError::InvalidProbabilities(format!(
                "weights must be finite and non-negative, found {w}"
            )));
        }
        let total = weights.sum();
        if total <= 0.0 {
            return Err(ComplexityError::InvalidProbabilities(
                "weights sum to zero".to_string(),
            ));
        }
        Ok(Self { p: weights / total })
    }

    /// Divide counts by their exact integer total.
    pub fn from_counts(counts: &Counts) -> Result<Self> {
        let total = counts.total();
        if total == 0 {
            return Err(ComplexityError::NoOutcomes);
        }
        let n = total as f64;
        Ok(Self {
            p: counts.as_array().mapv(|c| c as f64 / n),
        })
    }

    pub fn len(&self) -> usize {
        self.p.len()
    }

    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.p.iter()
    }

    /// Iterate over the strictly positive entries.
    pub fn nonzero(&self) -> impl Iterator<Item = f64> + '_ {
        self.p.iter().copied().filter(|&p| p > 0.0)
    }

    pub fn max(&self) -> f64 {
        self.p.iter().copied().fold(0.0, f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.p.sum()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.p
    }

    pub fn into_array(self) -> Array1<f64> {
        self.p
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.p.to_vec()
    }
}

impl Index<usize> for Probabilities {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.p[i]
    }
}

/// Count occurrences of each outcome; outcomes are returned in ascending order.
pub fn tally<T: Clone + Eq + Hash + Ord>(outcomes: &[T]) -> (Counts, Vec<T>) {
    let mut frequency_map: HashMap<&T, usize> = HashMap::new();
    for o in outcomes {
        *frequency_map.entry(o).or_insert(0) += 1;
    }
    let mut pairs: Vec<(&T, usize)> = frequency_map.into_iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
    let counts = pairs.iter().map(|(_, c)| *c).collect::<Vec<_>>();
    let keys = pairs.into_iter().map(|(o, _)| o.clone()).collect();
    (Counts::new(counts), keys)
}

/// Sparse probabilities of an already symbolized sequence.
pub fn probabilities_from_outcomes<T: Clone + Eq + Hash + Ord>(
    outcomes: &[T],
) -> Result<Probabilities> {
    let (counts, _) = tally(outcomes);
    Probabilities::from_counts(&counts)
}

/// Symbolize the sample.
pub fn outcomes<O: CountingOutcomeSpace>(scheme: &O, x: &O::Input) -> Result<Vec<O::Outcome>> {
    scheme.outcomes(x)
}

/// Sparse counts and the parallel observed outcomes, in ascending outcome order.
pub fn counts_and_outcomes<O: CountingOutcomeSpace>(
    scheme: &O,
    x: &O::Input,
) -> Result<(Counts, Vec<O::Outcome>)> {
    let symbols = scheme.outcomes(x)?;
    Ok(tally(&symbols))
}

pub fn counts<O: CountingOutcomeSpace>(scheme: &O, x: &O::Input) -> Result<Counts> {
    counts_and_outcomes(scheme, x).map(|(c, _)| c)
}

/// Probabilities from any scheme, counting or not.
pub fn probabilities<O: OutcomeSpace>(scheme: &O, x: &O::Input) -> Result<Probabilities> {
    scheme.probabilities(x)
}

pub fn probabilities_and_outcomes<O: CountingOutcomeSpace>(
    scheme: &O,
    x: &O::Input,
) -> Result<(Probabilities, Vec<O::Outcome>)> {
    let (counts, observed) = counts_and_outcomes(scheme, x)?;
    Ok((Probabilities::from_counts(&counts)?, observed))
}

/// Dense counts over the complete outcome space, zero for unobserved outcomes.
pub fn allcounts<O: CountingOutcomeSpace>(scheme: &O, x: &O::Input) -> Result<Counts> {
    let (counts, observed) = counts_and_outcomes(scheme, x)?;
    let space = scheme.outcome_space(x)?;
    let position: HashMap<&O::Outcome, usize> =
        space.iter().enumerate().map(|(i, o)| (o, i)).collect();
    let mut dense = vec![0usize; space.len()];
    for (o, &c) in observed.iter().zip(counts.iter()) {
        let i = position.get(o).ok_or_else(|| {
            ComplexityError::ShapeMismatch(format!(
                "outcome {o:?} is not part of the outcome space of {}",
                scheme.name()
            ))
        })?;
        dense[*i] = c;
    }
    Ok(Counts::new(dense))
}

pub fn allprobabilities_and_outcomes<O: CountingOutcomeSpace>(
    scheme: &O,
    x: &O::Input,
) -> Result<(Probabilities, Vec<O::Outcome>)> {
    let dense = allcounts(scheme, x)?;
    let space = scheme.outcome_space(x)?;
    Ok((Probabilities::from_counts(&dense)?, space))
}

/// Dense probabilities over the complete outcome space.
pub fn allprobabilities<O: CountingOutcomeSpace>(
    scheme: &O,
    x: &O::Input,
) -> Result<Probabilities> {
    allprobabilities_and_outcomes(scheme, x).map(|(p, _)| p)
}

pub fn outcome_space<O: CountingOutcomeSpace>(scheme: &O, x: &O::Input) -> Result<Vec<O::Outcome>> {
    scheme.outcome_space(x)
}

/// Alphabet size; fails for schemes without a known alphabet.
pub fn total_outcomes<O: OutcomeSpace>(scheme: &O, x: &O::Input) -> Result<usize> {
    scheme.total_outcomes(x)
}

/// Number of outcomes of the alphabet never observed in the sample.
pub fn missing_outcomes<O: CountingOutcomeSpace>(scheme: &O, x: &O::Input) -> Result<usize> {
    let (counts, _) = counts_and_outcomes(scheme, x)?;
    let total = scheme.total_outcomes(x)?;
    Ok(total.saturating_sub(counts.len()))
}
