// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayD;

use super::stencil::Stencil;
use crate::error::Result;
use crate::estimators::approaches::dispersion::{
    GaussianCdfEncoding, check_categories, symbol_alphabet_size, symbol_strings,
};
use crate::estimators::probabilities::{Probabilities, probabilities_from_outcomes};
use crate::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};

/// Dispersion patterns over a stencil, for N-dimensional arrays.
///
/// The Gaussian CDF encoding is fitted to the whole array; each valid reference cell
/// yields the category string of its stencil cells. Alphabet size `c^m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatialDispersion {
    pub stencil: Stencil,
    pub c: usize,
    pub periodic: bool,
}

impl SpatialDispersion {
    pub fn new(stencil: Stencil, c: usize, periodic: bool) -> Result<Self> {
        check_categories(c)?;
        symbol_alphabet_size(c, stencil.len())?;
        Ok(Self {
            stencil,
            c,
            periodic,
        })
    }
}

impl OutcomeSpace for SpatialDispersion {
    type Input = ArrayD<f64>;

    fn name(&self) -> &'static str {
        "SpatialDispersion"
    }

    fn probabilities(&self, x: &ArrayD<f64>) -> Result<Probabilities> {
        probabilities_from_outcomes(&self.outcomes(x)?)
    }

    fn total_outcomes(&self, _x: &ArrayD<f64>) -> Result<usize> {
        check_categories(self.c)?;
        symbol_alphabet_size(self.c, self.stencil.len())
    }
}

impl CountingOutcomeSpace for SpatialDispersion {
    type Outcome = Vec<usize>;

    fn outcomes(&self, x: &ArrayD<f64>) -> Result<Vec<Vec<usize>>> {
        let windows = self.stencil.windows(x.shape(), self.periodic)?;
        let encoding = GaussianCdfEncoding::fit(self.c, x.iter())?;
        let symbols: Vec<usize> = x.iter().map(|&v| encoding.encode(v)).collect();
        Ok(windows
            .into_iter()
            .map(|cells| cells.into_iter().map(|i| symbols[i]).collect())
            .collect())
    }

    fn outcome_space(&self, _x: &ArrayD<f64>) -> Result<Vec<Vec<usize>>> {
        check_categories(self.c)?;
        symbol_strings(self.c, self.stencil.len())
    }
}
