// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Debug;
use std::hash::Hash;

use ndarray::Array1;

use crate::error::{ComplexityError, Result};
use crate::estimators::probabilities::Probabilities;

/// A discretization scheme that turns a sample into a probability distribution.
///
/// Every scheme can produce probabilities. Only schemes whose alphabet is known
/// (from configuration, or after scanning the sample) report `total_outcomes`;
/// the default implementation fails with [`ComplexityError::Unsupported`].
pub trait OutcomeSpace {
    /// Sample type consumed by the scheme.
    type Input: ?Sized;

    /// Short human-readable name used in error messages.
    fn name(&self) -> &'static str;

    /// Estimate a sum-normalized distribution from the sample.
    fn probabilities(&self, x: &Self::Input) -> Result<Probabilities>;

    /// Size `L` of the alphabet. Data-independent schemes ignore `x`.
    fn total_outcomes(&self, _x: &Self::Input) -> Result<usize> {
        Err(ComplexityError::unsupported("total_outcomes", self.name()))
    }
}

/// Interface for schemes that map each valid position of a sample to a discrete outcome.
///
/// Counting schemes have an enumerable alphabet, so they also support dense
/// (zero-padded) counts and probabilities.
pub trait CountingOutcomeSpace: OutcomeSpace {
    /// Outcome identifier. Ordering is used only for deterministic reporting.
    type Outcome: Clone + Eq + Hash + Ord + Debug;

    /// Symbolize the sample. May be shorter than the sample when boundary
    /// positions are truncated.
    fn outcomes(&self, x: &Self::Input) -> Result<Vec<Self::Outcome>>;

    /// The full alphabet, sorted in ascending order.
    fn outcome_space(&self, x: &Self::Input) -> Result<Vec<Self::Outcome>>;
}

/// Interface for information measure definitions (entropies and extropies).
pub trait InformationMeasure {
    /// Evaluate the measure on a distribution. Zero probabilities contribute nothing.
    fn information(&self, probs: &Probabilities) -> Result<f64>;

    /// Largest value the measure attains over an alphabet of `total_outcomes` elements.
    fn maximum(&self, total_outcomes: usize) -> Result<f64>;
}

/// Marker trait for entropy definitions.
pub trait EntropyDefinition: InformationMeasure {}

/// Marker trait for extropy definitions, built from complementary probabilities.
pub trait ExtropyDefinition: InformationMeasure {}

/// Interface for estimators of differential entropy that work on raw samples.
pub trait DifferentialEntropyEstimator {
    /// Estimate the Shannon differential entropy of the sample.
    fn entropy(&self, x: &Array1<f64>) -> Result<f64>;
}

/// A single-scale complexity estimator, the unit that multiscale analysis repeats.
pub trait ComplexityEstimator {
    /// Compute the complexity of a 1D sample.
    fn estimate(&self, x: &Array1<f64>) -> Result<f64>;

    /// Compute the complexity divided by its maximum for the sample's alphabet.
    /// Estimators without a maximum fail.
    fn estimate_normalized(&self, _x: &Array1<f64>) -> Result<f64> {
        Err(ComplexityError::unsupported(
            "estimate_normalized",
            "this estimator",
        ))
    }
}

impl<F> ComplexityEstimator for F
where
    F: Fn(&Array1<f64>) -> Result<f64>,
{
    fn estimate(&self, x: &Array1<f64>) -> Result<f64> {
        self(x)
    }
}
