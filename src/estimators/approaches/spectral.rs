// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use rustfft::{FftPlanner, num_complex::Complex};

use crate::error::{ComplexityError, Result};
use crate::estimators::probabilities::Probabilities;
use crate::estimators::traits::OutcomeSpace;

/// Relative power of each frequency bin of the one-sided spectrum `0..=n/2`.
///
/// Bins without power are dropped, so probabilities are sparse. The number of
/// frequencies depends on the sample length, not on configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerSpectrum;

impl PowerSpectrum {
    pub fn new() -> Self {
        Self
    }

    /// Squared FFT magnitudes of the one-sided spectrum.
    pub fn power(&self, x: &Array1<f64>) -> Vec<f64> {
        let n = x.len();
        let mut buffer: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut buffer);
        buffer[..n / 2 + 1].iter().map(|c| c.norm_sqr()).collect()
    }
}

impl OutcomeSpace for PowerSpectrum {
    type Input = Array1<f64>;

    fn name(&self) -> &'static str {
        "PowerSpectrum"
    }

    fn probabilities(&self, x: &Array1<f64>) -> Result<Probabilities> {
        if x.len() < 2 {
            return Err(ComplexityError::InsufficientData {
                needed: 2,
                got: x.len(),
            });
        }
        let power: Vec<f64> = self.power(x).into_iter().filter(|&p| p > 0.0).collect();
        if power.is_empty() {
            return Err(ComplexityError::InvalidProbabilities(
                "the signal carries no power".to_string(),
            ));
        }
        Probabilities::new(power)
    }
}
