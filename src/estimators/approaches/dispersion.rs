// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::debug;
use ndarray::Array1;
use statrs::distribution::{ContinuousCDF, Normal};

use super::ordinal::ordinal_utils::{check_embedding, embedding_windows};
use crate::error::{ComplexityError, Result};
use crate::estimators::probabilities::{Probabilities, probabilities_from_outcomes};
use crate::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};

/// Quantizer mapping values onto `c` categories through the CDF of a normal
/// distribution fitted to the data (mean and sample standard deviation).
///
/// Category `k` (0-based) collects values with `k/c <= Φ(x) < (k+1)/c`. For constant
/// data the CDF degenerates; every value is then placed in the middle category `⌊c/2⌋`.
#[derive(Debug, Clone)]
pub struct GaussianCdfEncoding {
    c: usize,
    normal: Option<Normal>,
}

impl GaussianCdfEncoding {
    /// Fit the encoding to a set of values.
    pub fn fit<'a>(c: usize, values: impl IntoIterator<Item = &'a f64>) -> Result<Self> {
        check_categories(c)?;
        let values: Vec<f64> = values.into_iter().copied().collect();
        let n = values.len();
        if n == 0 {
            return Err(ComplexityError::InsufficientData { needed: 1, got: 0 });
        }
        let mean = values.iter().sum::<f64>() / n as f64;
        let var = if n > 1 {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let sigma = var.sqrt();
        if !(sigma > 0.0) {
            debug!("gaussian cdf encoding fitted on constant data, using the middle category");
            return Ok(Self { c, normal: None });
        }
        let normal = Normal::new(mean, sigma)
            .map_err(|e| ComplexityError::invalid("sigma", e.to_string()))?;
        Ok(Self {
            c,
            normal: Some(normal),
        })
    }

    pub fn categories(&self) -> usize {
        self.c
    }

    pub fn encode(&self, v: f64) -> usize {
        match &self.normal {
            Some(normal) => {
                let y = normal.cdf(v);
                ((y * self.c as f64).floor() as usize).min(self.c - 1)
            }
            None => self.c / 2,
        }
    }
}

pub(crate) fn check_categories(c: usize) -> Result<()> {
    if c < 2 {
        return Err(ComplexityError::invalid(
            "c",
            format!("need at least two categories, got {c}"),
        ));
    }
    Ok(())
}

/// `c^m`, failing when the alphabet does not fit into `usize`.
pub(crate) fn symbol_alphabet_size(c: usize, m: usize) -> Result<usize> {
    let exp = u32::try_from(m).map_err(|_| ComplexityError::invalid("m", "pattern too long"))?;
    c.checked_pow(exp).ok_or_else(|| {
        ComplexityError::invalid("m", format!("alphabet {c}^{m} overflows usize"))
    })
}

/// All symbol strings of length `m` over `0..c`, in lexicographic order.
pub(crate) fn symbol_strings(c: usize, m: usize) -> Result<Vec<Vec<usize>>> {
    let total = symbol_alphabet_size(c, m)?;
    let mut space = Vec::with_capacity(total);
    let mut current = vec![0usize; m];
    for _ in 0..total {
        space.push(current.clone());
        // Increment the base-c counter, last position fastest.
        for digit in current.iter_mut().rev() {
            *digit += 1;
            if *digit < c {
                break;
            }
            *digit = 0;
        }
    }
    Ok(space)
}

/// Dispersion patterns.
///
/// Samples are quantized into `c` categories with a [`GaussianCdfEncoding`] fitted to
/// the series, then delay vectors of `m` symbols (lag `τ`) form the outcomes.
/// Alphabet size `c^m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispersion {
    pub c: usize,
    pub m: usize,
    pub tau: usize,
}

impl Dispersion {
    pub fn new(c: usize, m: usize, tau: usize) -> Result<Self> {
        check_categories(c)?;
        check_embedding(m, tau)?;
        symbol_alphabet_size(c, m)?;
        Ok(Self { c, m, tau })
    }

    /// The per-sample category sequence, before embedding.
    pub fn encode(&self, x: &Array1<f64>) -> Result<Vec<usize>> {
        let encoding = GaussianCdfEncoding::fit(self.c, x.iter())?;
        Ok(x.iter().map(|&v| encoding.encode(v)).collect())
    }
}

impl Default for Dispersion {
    fn default() -> Self {
        Self { c: 3, m: 2, tau: 1 }
    }
}

impl OutcomeSpace for Dispersion {
    type Input = Array1<f64>;

    fn name(&self) -> &'static str {
        "Dispersion"
    }

    fn probabilities(&self, x: &Array1<f64>) -> Result<Probabilities> {
        probabilities_from_outcomes(&self.outcomes(x)?)
    }

    fn total_outcomes(&self, _x: &Array1<f64>) -> Result<usize> {
        check_categories(self.c)?;
        symbol_alphabet_size(self.c, self.m)
    }
}

impl CountingOutcomeSpace for Dispersion {
    type Outcome = Vec<usize>;

    fn outcomes(&self, x: &Array1<f64>) -> Result<Vec<Vec<usize>>> {
        check_categories(self.c)?;
        check_embedding(self.m, self.tau)?;
        let n_windows = embedding_windows(x.len(), self.m, self.tau)?;
        let symbols = self.encode(x)?;
        Ok((0..n_windows)
            .map(|t| (0..self.m).map(|j| symbols[t + j * self.tau]).collect())
            .collect())
    }

    fn outcome_space(&self, _x: &Array1<f64>) -> Result<Vec<Vec<usize>>> {
        check_categories(self.c)?;
        symbol_strings(self.c, self.m)
    }
}
