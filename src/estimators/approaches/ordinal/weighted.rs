// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordinal patterns weighted by the amplitude content of each window.
//!
//! Both schemes share the `m!` alphabet of [`OrdinalPatterns`](super::ordinal::OrdinalPatterns)
//! but accumulate real-valued weights instead of counts, so they expose
//! probabilities and the alphabet size only.

use std::collections::HashMap;

use ndarray::Array1;

use super::ordinal_utils::{PatternEncoder, check_order, embedding_windows, factorial};
use crate::error::{ComplexityError, Result};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::OutcomeSpace;

/// Accumulate one weight per delay vector onto its pattern and normalize.
fn weighted_pattern_probabilities<W>(
    x: &Array1<f64>,
    m: usize,
    tau: usize,
    weight: W,
) -> Result<Probabilities>
where
    W: Fn(&[f64]) -> f64,
{
    check_order(m, tau)?;
    let n_windows = embedding_windows(x.len(), m, tau)?;
    let mut encoder = PatternEncoder::new(m);
    let mut w = vec![0.0; m];
    let mut acc: HashMap<usize, f64> = HashMap::new();
    for t in 0..n_windows {
        for j in 0..m {
            w[j] = x[t + j * tau];
        }
        *acc.entry(encoder.encode(&w)).or_insert(0.0) += weight(&w);
    }
    let mut pairs: Vec<(usize, f64)> = acc.into_iter().filter(|&(_, a)| a > 0.0).collect();
    pairs.sort_unstable_by_key(|&(code, _)| code);
    let observed: Vec<f64> = pairs.into_iter().map(|(_, a)| a).collect();
    if observed.is_empty() {
        // Every window was flat, so every weight vanished.
        return Err(ComplexityError::InvalidProbabilities(
            "all pattern weights are zero".to_string(),
        ));
    }
    Probabilities::new(observed)
}

/// Ordinal patterns weighted by the (population) variance of their window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedOrdinalPatterns {
    pub m: usize,
    pub tau: usize,
}

impl WeightedOrdinalPatterns {
    pub fn new(m: usize, tau: usize) -> Result<Self> {
        check_order(m, tau)?;
        Ok(Self { m, tau })
    }
}

impl Default for WeightedOrdinalPatterns {
    fn default() -> Self {
        Self { m: 3, tau: 1 }
    }
}

impl OutcomeSpace for WeightedOrdinalPatterns {
    type Input = Array1<f64>;

    fn name(&self) -> &'static str {
        "WeightedOrdinalPatterns"
    }

    fn probabilities(&self, x: &Array1<f64>) -> Result<Probabilities> {
        weighted_pattern_probabilities(x, self.m, self.tau, |w| {
            let n = w.len() as f64;
            let mean = w.iter().sum::<f64>() / n;
            w.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
        })
    }

    fn total_outcomes(&self, _x: &Array1<f64>) -> Result<usize> {
        check_order(self.m, self.tau)?;
        Ok(factorial(self.m))
    }
}

/// Amplitude-aware ordinal patterns.
///
/// Window weight: `A/m · Σ|x_k| + (1-A)/(m-1) · Σ|x_k - x_{k-1}|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeAwareOrdinalPatterns {
    pub m: usize,
    pub tau: usize,
    pub a: f64,
}

impl AmplitudeAwareOrdinalPatterns {
    pub fn new(m: usize, tau: usize, a: f64) -> Result<Self> {
        check_order(m, tau)?;
        if m < 2 {
            return Err(ComplexityError::invalid(
                "m",
                "amplitude-aware patterns need m >= 2",
            ));
        }
        if !(0.0..=1.0).contains(&a) {
            return Err(ComplexityError::invalid(
                "a",
                format!("amplitude weight must lie in [0, 1], got {a}"),
            ));
        }
        Ok(Self { m, tau, a })
    }
}

impl Default for AmplitudeAwareOrdinalPatterns {
    fn default() -> Self {
        Self { m: 3, tau: 1, a: 0.5 }
    }
}

impl OutcomeSpace for AmplitudeAwareOrdinalPatterns {
    type Input = Array1<f64>;

    fn name(&self) -> &'static str {
        "AmplitudeAwareOrdinalPatterns"
    }

    fn probabilities(&self, x: &Array1<f64>) -> Result<Probabilities> {
        let m = self.m as f64;
        let a = self.a;
        weighted_pattern_probabilities(x, self.m, self.tau, |w| {
            let amplitude: f64 = w.iter().map(|v| v.abs()).sum();
            let variation: f64 = w.windows(2).map(|p| (p[1] - p[0]).abs()).sum();
            a / m * amplitude + (1.0 - a) / (m - 1.0) * variation
        })
    }

    fn total_outcomes(&self, _x: &Array1<f64>) -> Result<usize> {
        check_order(self.m, self.tau)?;
        Ok(factorial(self.m))
    }
}
