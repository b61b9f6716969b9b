// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # complexity
//!
//! Model-free estimation of probabilities and information-theoretic complexity
//! measures from time series and spatial data.
//!
//! ## Quick Start
//!
//! ```rust
//! use complexity::estimators::approaches::OrdinalPatterns;
//! use complexity::estimators::definitions::{Renyi, Shannon};
//! use complexity::estimators::order_statistics::Vasicek;
//! use complexity::estimators::{CoarseGraining, Information, entropy, information, multiscale};
//! use ndarray::array;
//!
//! let x = array![0.3, 1.2, 0.7, 2.5, 1.9, 0.1, 0.8, 1.4, 2.2, 0.6];
//!
//! // Permutation entropy
//! let scheme = OrdinalPatterns::new(3, 1).unwrap();
//! let h = information(&Shannon::new(2.0).unwrap(), &scheme, &x).unwrap();
//!
//! // Differential entropy from order statistics
//! let hv = entropy(&Vasicek::new(2, std::f64::consts::E).unwrap(), &x).unwrap();
//!
//! // Multiscale profile of a generalized entropy
//! let est = Information::new(Renyi::new(2.0, 2.0).unwrap(), scheme);
//! let profile = multiscale(CoarseGraining::Regular, &est, &x, 2).unwrap();
//! assert_eq!(profile.len(), 2);
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Types |
//! |-------|-------|
//! | Discretization | [`OutcomeSpace`](estimators::OutcomeSpace), [`CountingOutcomeSpace`](estimators::CountingOutcomeSpace) |
//! | Counting | [`Counts`](estimators::Counts), [`Probabilities`](estimators::Probabilities) |
//! | Measures | Shannon, Rényi, Tsallis, Kaniadakis and their extropies |
//! | Direct estimation | Vasicek, Ebrahimi, Alizadeh–Arghami, Correa |
//! | Multiscale | [`multiscale`](estimators::multiscale()), [`CoarseGraining`](estimators::CoarseGraining) |
//!
//! ## Outcome Spaces
//!
//! ### Counting
//! Every position of the sample maps to one outcome: ordinal patterns, dispersion
//! patterns, value binning, occurrence counting and their spatial (stencil) variants.
//! These support dense counts over the full alphabet and `missing_outcomes`.
//!
//! ### Weight-based
//! Weighted and amplitude-aware ordinal patterns, naive kernel neighbour counts,
//! power spectrum and wavelet energy shares produce probabilities directly.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade at `debug`/`trace` level. Install any
//! logger in the application to see them.

pub mod error;
pub mod estimators;

pub use error::{ComplexityError, Result};
