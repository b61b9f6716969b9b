// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Naive Kernel Density Probabilities
//!
//! Each point receives a weight proportional to the number of points inside a box of
//! half-width `radius` around it (Chebyshev ball, the point itself included):
//!
//! p̂(x_i) = #{ j : ‖x_j - x_i‖_∞ ≤ r } / Σ_k #{ j : ‖x_j - x_k‖_∞ ≤ r }
//!
//! Outcomes are the points themselves, so the alphabet is not known up front and the
//! scheme only implements `probabilities`.

use ndarray::Array2;

use super::dataset::NdDataset;
use crate::error::{ComplexityError, Result};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::OutcomeSpace;

/// Box-kernel density weights for `K`-dimensional points (rows of an `Array2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaiveKernel<const K: usize> {
    pub radius: f64,
}

impl<const K: usize> NaiveKernel<K> {
    pub fn new(radius: f64) -> Result<Self> {
        check_radius(radius)?;
        Ok(Self { radius })
    }
}

fn check_radius(radius: f64) -> Result<()> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(ComplexityError::invalid(
            "radius",
            format!("kernel radius must be positive, got {radius}"),
        ));
    }
    Ok(())
}

impl<const K: usize> OutcomeSpace for NaiveKernel<K> {
    type Input = Array2<f64>;

    fn name(&self) -> &'static str {
        "NaiveKernel"
    }

    fn probabilities(&self, x: &Array2<f64>) -> Result<Probabilities> {
        check_radius(self.radius)?;
        if x.nrows() == 0 {
            return Err(ComplexityError::InsufficientData { needed: 1, got: 0 });
        }
        let dataset = NdDataset::<K>::from_view(x.view())?;
        let weights: Vec<f64> = dataset
            .neighbour_counts_chebyshev(self.radius)
            .into_iter()
            .map(|c| c as f64)
            .collect();
        Probabilities::new(weights)
    }
}
