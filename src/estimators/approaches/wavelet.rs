// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Wavelet Energy Shares
//!
//! The maximal-overlap discrete wavelet transform (MODWT) with the Haar filter splits
//! a series into detail coefficients `W_1..W_J` and a final smooth `V_J`, with
//! `J = ⌊log2 n⌋` and circular boundaries:
//!
//! W_j,t = (V_{j-1,t} - V_{j-1,t-2^{j-1}}) / 2
//! V_j,t = (V_{j-1,t} + V_{j-1,t-2^{j-1}}) / 2,   V_0 = x
//!
//! The transform preserves energy, `Σ_j ‖W_j‖² + ‖V_J‖² = ‖x‖²`, so the relative
//! energy of each level is a probability distribution over time scales.

use ndarray::Array1;

use crate::error::{ComplexityError, Result};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::OutcomeSpace;

/// Haar MODWT coefficients: `J` detail levels followed by the final smooth.
pub fn haar_modwt(x: &Array1<f64>) -> Vec<Array1<f64>> {
    let n = x.len();
    let levels = n.max(1).ilog2() as usize;
    let mut smooth = x.clone();
    let mut out = Vec::with_capacity(levels + 1);
    for j in 1..=levels {
        let shift = 1usize << (j - 1);
        let mut detail = Array1::zeros(n);
        let mut next = Array1::zeros(n);
        for t in 0..n {
            let prev = smooth[(t + n - shift % n) % n];
            detail[t] = (smooth[t] - prev) / 2.0;
            next[t] = (smooth[t] + prev) / 2.0;
        }
        out.push(detail);
        smooth = next;
    }
    out.push(smooth);
    out
}

/// Relative energies of the Haar MODWT levels (details first, then the smooth).
///
/// Levels without energy are dropped. The number of levels grows with the sample
/// length, so there is no data-independent alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveletOverlap;

impl WaveletOverlap {
    pub fn new() -> Self {
        Self
    }

    pub fn energies(&self, x: &Array1<f64>) -> Vec<f64> {
        haar_modwt(x)
            .iter()
            .map(|level| level.iter().map(|c| c * c).sum())
            .collect()
    }
}

impl OutcomeSpace for WaveletOverlap {
    type Input = Array1<f64>;

    fn name(&self) -> &'static str {
        "WaveletOverlap"
    }

    fn probabilities(&self, x: &Array1<f64>) -> Result<Probabilities> {
        if x.len() < 2 {
            return Err(ComplexityError::InsufficientData {
                needed: 2,
                got: x.len(),
            });
        }
        let energies: Vec<f64> = self
            .energies(x)
            .into_iter()
            .filter(|&e| e > 0.0)
            .collect();
        if energies.is_empty() {
            return Err(ComplexityError::InvalidProbabilities(
                "the signal carries no energy".to_string(),
            ));
        }
        Probabilities::new(energies)
    }
}
