// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Information measure definitions: pure functions of a probability distribution.

pub mod extropy;
pub mod kaniadakis;
pub mod renyi;
pub mod shannon;
pub mod tsallis;

pub use extropy::{RenyiExtropy, ShannonExtropy, TsallisExtropy};
pub use kaniadakis::Kaniadakis;
pub use renyi::Renyi;
pub use shannon::Shannon;
pub use tsallis::Tsallis;

use crate::error::{ComplexityError, Result};

/// Orders closer than this to a special value take the limiting form.
pub(crate) const ORDER_TOL: f64 = 1.5e-8;

/// Logarithm to an arbitrary base.
#[inline]
pub(crate) fn log_base(x: f64, base: f64) -> f64 {
    x.ln() / base.ln()
}

#[inline]
pub(crate) fn near(q: f64, target: f64) -> bool {
    (q - target).abs() < ORDER_TOL
}

/// `-Σ p log_b p` over the strictly positive entries.
pub(crate) fn shannon_sum<I: IntoIterator<Item = f64>>(probs: I, base: f64) -> f64 {
    let mut h = 0.0_f64;
    for p in probs {
        if p > 0.0 {
            h -= p * log_base(p, base);
        }
    }
    h
}

pub(crate) fn check_alphabet(total_outcomes: usize) -> Result<()> {
    if total_outcomes == 0 {
        return Err(ComplexityError::invalid(
            "total_outcomes",
            "the alphabet must contain at least one outcome",
        ));
    }
    Ok(())
}

pub(crate) fn check_order(name: &'static str, q: f64) -> Result<()> {
    if q.is_nan() || q < 0.0 {
        return Err(ComplexityError::invalid(
            name,
            format!("order must be non-negative, got {q}"),
        ));
    }
    Ok(())
}
