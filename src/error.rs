// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by every estimator in the crate.

use thiserror::Error;

/// Main error type for discretization, probability and measure operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplexityError {
    /// A configuration value lies outside the domain of the estimator.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The outcome space or estimator lacks the capability an operation needs.
    #[error("`{operation}` is not supported by {scheme}")]
    Unsupported {
        operation: &'static str,
        scheme: &'static str,
    },

    /// Stencil, array or point dimensions do not agree.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The sample is too short for the requested embedding, stencil or window.
    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Every position of the sample was discarded, so no distribution exists.
    #[error("no outcomes were produced from the sample")]
    NoOutcomes,

    /// Weights cannot be turned into a probability distribution.
    #[error("invalid probabilities: {0}")]
    InvalidProbabilities(String),

    /// A single scale of a multiscale profile failed.
    #[error("at scale {scale}: {source}")]
    AtScale {
        scale: usize,
        #[source]
        source: Box<ComplexityError>,
    },
}

/// Result type alias for complexity operations.
pub type Result<T> = std::result::Result<T, ComplexityError>;

impl ComplexityError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ComplexityError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(operation: &'static str, scheme: &'static str) -> Self {
        ComplexityError::Unsupported { operation, scheme }
    }
}

/// Validate a logarithm base: positive, finite and different from one.
pub(crate) fn check_base(base: f64) -> Result<()> {
    if !(base.is_finite() && base > 0.0) || base == 1.0 {
        return Err(ComplexityError::invalid(
            "base",
            format!("logarithm base must be positive and != 1, got {base}"),
        ));
    }
    Ok(())
}
