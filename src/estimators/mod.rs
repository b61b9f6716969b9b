// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod approaches;
pub mod definitions;
pub mod information;
pub mod multiscale;
pub mod order_statistics;
pub mod probabilities;
pub mod traits;

pub use information::{
    Information, entropy, extropy, extropy_normalized, information,
    information_from_probabilities, information_maximum, information_normalized,
};
pub use multiscale::{CoarseGraining, ComplexityProfile, multiscale, multiscale_normalized};
pub use probabilities::{
    Counts, Probabilities, allcounts, allprobabilities, allprobabilities_and_outcomes, counts,
    counts_and_outcomes, missing_outcomes, outcome_space, outcomes, probabilities,
    probabilities_and_outcomes, total_outcomes,
};
pub use traits::{
    ComplexityEstimator, CountingOutcomeSpace, DifferentialEntropyEstimator, EntropyDefinition,
    ExtropyDefinition, InformationMeasure, OutcomeSpace,
};
