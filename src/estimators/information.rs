// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Information Estimation
//!
//! Entry points that combine a measure definition with an outcome space, and the
//! direct path for order-statistic differential entropy.
//!
//! ```rust
//! use complexity::estimators::approaches::OrdinalPatterns;
//! use complexity::estimators::definitions::Shannon;
//! use complexity::estimators::information::{information, information_normalized};
//! use ndarray::array;
//!
//! let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 1.0];
//! let scheme = OrdinalPatterns::new(3, 1).unwrap();
//! let h = information(&Shannon::default(), &scheme, &x).unwrap();
//! let hn = information_normalized(&Shannon::default(), &scheme, &x).unwrap();
//! assert!(h > 0.0 && hn < 1.0);
//! ```

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::{
    ComplexityEstimator, DifferentialEntropyEstimator, ExtropyDefinition, InformationMeasure,
    OutcomeSpace,
};

/// Evaluate `def` on the probabilities `scheme` estimates from `x`.
pub fn information<M, O>(def: &M, scheme: &O, x: &O::Input) -> Result<f64>
where
    M: InformationMeasure + ?Sized,
    O: OutcomeSpace + ?Sized,
{
    let probs = scheme.probabilities(x)?;
    def.information(&probs)
}

/// Evaluate `def` on a precomputed distribution.
pub fn information_from_probabilities<M>(def: &M, probs: &Probabilities) -> Result<f64>
where
    M: InformationMeasure + ?Sized,
{
    def.information(probs)
}

/// Maximum of `def` over the alphabet of `scheme` for the sample `x`.
pub fn information_maximum<M, O>(def: &M, scheme: &O, x: &O::Input) -> Result<f64>
where
    M: InformationMeasure + ?Sized,
    O: OutcomeSpace + ?Sized,
{
    def.maximum(scheme.total_outcomes(x)?)
}

/// Information divided by its maximum over the alphabet of `scheme`.
///
/// Defined as 0 when the alphabet has at most one element. Fails with
/// `Unsupported` for schemes that cannot report an alphabet size.
pub fn information_normalized<M, O>(def: &M, scheme: &O, x: &O::Input) -> Result<f64>
where
    M: InformationMeasure + ?Sized,
    O: OutcomeSpace + ?Sized,
{
    let total = scheme.total_outcomes(x)?;
    let value = information(def, scheme, x)?;
    normalize(def, value, total)
}

pub(crate) fn normalize<M>(def: &M, value: f64, total_outcomes: usize) -> Result<f64>
where
    M: InformationMeasure + ?Sized,
{
    if total_outcomes <= 1 {
        return Ok(0.0);
    }
    let max = def.maximum(total_outcomes)?;
    Ok(value / max)
}

/// Extropy of the probabilities `scheme` estimates from `x`.
pub fn extropy<M, O>(def: &M, scheme: &O, x: &O::Input) -> Result<f64>
where
    M: ExtropyDefinition + ?Sized,
    O: OutcomeSpace + ?Sized,
{
    information(def, scheme, x)
}

pub fn extropy_normalized<M, O>(def: &M, scheme: &O, x: &O::Input) -> Result<f64>
where
    M: ExtropyDefinition + ?Sized,
    O: OutcomeSpace + ?Sized,
{
    information_normalized(def, scheme, x)
}

/// Differential entropy straight from the raw sample.
pub fn entropy<E>(estimator: &E, x: &Array1<f64>) -> Result<f64>
where
    E: DifferentialEntropyEstimator + ?Sized,
{
    estimator.entropy(x)
}

/// A measure definition bound to an outcome space, usable as a single-scale
/// [`ComplexityEstimator`].
#[derive(Debug, Clone, PartialEq)]
pub struct Information<M, O> {
    pub measure: M,
    pub outcome_space: O,
}

impl<M, O> Information<M, O>
where
    M: InformationMeasure,
    O: OutcomeSpace,
{
    pub fn new(measure: M, outcome_space: O) -> Self {
        Self {
            measure,
            outcome_space,
        }
    }
}

impl<M, O> ComplexityEstimator for Information<M, O>
where
    M: InformationMeasure,
    O: OutcomeSpace<Input = Array1<f64>>,
{
    fn estimate(&self, x: &Array1<f64>) -> Result<f64> {
        information(&self.measure, &self.outcome_space, x)
    }

    fn estimate_normalized(&self, x: &Array1<f64>) -> Result<f64> {
        information_normalized(&self.measure, &self.outcome_space, x)
    }
}
