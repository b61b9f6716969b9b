// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayD;

use super::stencil::Stencil;
use crate::error::{ComplexityError, Result};
use crate::estimators::approaches::ordinal::ordinal_utils::{MAX_ORDER, PatternEncoder, factorial};
use crate::estimators::probabilities::{Probabilities, probabilities_from_outcomes};
use crate::estimators::traits::{CountingOutcomeSpace, OutcomeSpace};

/// Ordinal patterns of the values gathered by a stencil, for N-dimensional arrays.
///
/// Values are gathered in the stencil's canonical offset order and encoded exactly
/// like 1D ordinal patterns, so the alphabet has `m!` elements for a stencil of `m` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatialOrdinalPatterns {
    pub stencil: Stencil,
    pub periodic: bool,
}

impl SpatialOrdinalPatterns {
    pub fn new(stencil: Stencil, periodic: bool) -> Result<Self> {
        check_stencil_order(&stencil)?;
        Ok(Self { stencil, periodic })
    }
}

fn check_stencil_order(stencil: &Stencil) -> Result<()> {
    if stencil.len() > MAX_ORDER {
        return Err(ComplexityError::invalid(
            "stencil",
            format!("stencil gathers {} cells, at most {MAX_ORDER} supported", stencil.len()),
        ));
    }
    Ok(())
}

impl OutcomeSpace for SpatialOrdinalPatterns {
    type Input = ArrayD<f64>;

    fn name(&self) -> &'static str {
        "SpatialOrdinalPatterns"
    }

    fn probabilities(&self, x: &ArrayD<f64>) -> Result<Probabilities> {
        probabilities_from_outcomes(&self.outcomes(x)?)
    }

    fn total_outcomes(&self, _x: &ArrayD<f64>) -> Result<usize> {
        check_stencil_order(&self.stencil)?;
        Ok(factorial(self.stencil.len()))
    }
}

impl CountingOutcomeSpace for SpatialOrdinalPatterns {
    type Outcome = usize;

    fn outcomes(&self, x: &ArrayD<f64>) -> Result<Vec<usize>> {
        check_stencil_order(&self.stencil)?;
        let windows = self.stencil.windows(x.shape(), self.periodic)?;
        let values: Vec<f64> = x.iter().copied().collect();
        let mut encoder = PatternEncoder::new(self.stencil.len());
        let mut w = vec![0.0; self.stencil.len()];
        Ok(windows
            .iter()
            .map(|cells| {
                for (slot, &i) in w.iter_mut().zip(cells) {
                    *slot = values[i];
                }
                encoder.encode(&w)
            })
            .collect())
    }

    fn outcome_space(&self, x: &ArrayD<f64>) -> Result<Vec<usize>> {
        Ok((0..self.total_outcomes(x)?).collect())
    }
}
