// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::cmp::Ordering;

use ndarray::Array1;

use crate::error::{ComplexityError, Result};

/// Largest pattern length whose factorial fits into a `u64` code.
pub const MAX_ORDER: usize = 20;

/// Argsort for f64 values.
///
/// Writes into `idx` the indices that would sort `window` in ascending order.
/// Ties are resolved by the original index order (stable). NaNs sort last.
pub fn argsort(window: &[f64], idx: &mut [usize]) {
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    idx.sort_by(|&i, &j| {
        let a = window[i];
        let b = window[j];
        match a.partial_cmp(&b) {
            Some(Ordering::Equal) => i.cmp(&j),
            Some(ord) => ord,
            None => {
                if a.is_nan() && b.is_nan() {
                    i.cmp(&j)
                } else if a.is_nan() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    });
}

/// `0!, 1!, ..., (m-1)!`
pub fn factorials(m: usize) -> Vec<usize> {
    let mut fact = vec![1usize; m.max(1)];
    for i in 1..m {
        fact[i] = fact[i - 1] * i;
    }
    fact
}

/// `m!`, the number of permutations of `m` elements.
pub fn factorial(m: usize) -> usize {
    (1..=m).product()
}

/// Compute the Lehmer code (factoradic ranking) for a given permutation.
///
/// The code equals the rank of `perm` among all permutations of `0..m` in
/// lexicographic order, so `[0, 1, 2]` is 0 and `[2, 1, 0]` is `3! - 1`.
pub fn lehmer_code(perm: &[usize]) -> usize {
    lehmer_code_with_fact(perm, &factorials(perm.len()))
}

fn lehmer_code_with_fact(perm: &[usize], fact: &[usize]) -> usize {
    let n = perm.len();
    let mut acc = 0usize;
    for i in 0..n {
        let c = perm[i + 1..].iter().filter(|&&p| perm[i] > p).count();
        acc += c * fact[n - 1 - i];
    }
    acc
}

/// Inverse of [`lehmer_code`]: the permutation of `0..m` with the given rank.
pub fn lehmer_decode(code: usize, m: usize) -> Vec<usize> {
    let fact = factorials(m);
    let mut remaining: Vec<usize> = (0..m).collect();
    let mut rest = code;
    let mut perm = Vec::with_capacity(m);
    for i in (0..m).rev() {
        let digit = rest / fact[i];
        rest %= fact[i];
        perm.push(remaining.remove(digit));
    }
    perm
}

/// Check embedding parameters shared by all delay-embedding schemes.
pub fn check_embedding(m: usize, tau: usize) -> Result<()> {
    if m < 1 {
        return Err(ComplexityError::invalid(
            "m",
            "the embedding dimension must be a positive integer",
        ));
    }
    if tau < 1 {
        return Err(ComplexityError::invalid(
            "tau",
            "the delay must be a positive integer",
        ));
    }
    Ok(())
}

/// Check embedding parameters plus the pattern length limit of ordinal codes.
pub fn check_order(m: usize, tau: usize) -> Result<()> {
    check_embedding(m, tau)?;
    if m > MAX_ORDER {
        return Err(ComplexityError::invalid(
            "m",
            format!("pattern length must be <= {MAX_ORDER}, got {m}"),
        ));
    }
    Ok(())
}

/// Number of complete delay vectors of dimension `m` and lag `tau` in a series of length `n`.
pub fn embedding_windows(n: usize, m: usize, tau: usize) -> Result<usize> {
    let span = (m - 1) * tau;
    if n <= span {
        return Err(ComplexityError::InsufficientData {
            needed: span + 1,
            got: n,
        });
    }
    Ok(n - span)
}

/// Reusable encoder mapping a window of values to the rank of its sorting permutation.
pub struct PatternEncoder {
    fact: Vec<usize>,
    idx: Vec<usize>,
}

impl PatternEncoder {
    pub fn new(m: usize) -> Self {
        Self {
            fact: factorials(m),
            idx: (0..m).collect(),
        }
    }

    pub fn encode(&mut self, window: &[f64]) -> usize {
        argsort(window, &mut self.idx);
        lehmer_code_with_fact(&self.idx, &self.fact)
    }
}

/// Convert a time series into ordinal pattern codes (one per delay vector).
pub fn symbolize_series(series: &Array1<f64>, m: usize, tau: usize) -> Result<Vec<usize>> {
    check_order(m, tau)?;
    let n_windows = embedding_windows(series.len(), m, tau)?;

    let mut encoder = PatternEncoder::new(m);
    let mut w: Vec<f64> = vec![0.0; m];
    let mut out = Vec::with_capacity(n_windows);
    for t in 0..n_windows {
        for j in 0..m {
            w[j] = series[t + j * tau];
        }
        out.push(encoder.encode(&w));
    }
    Ok(out)
}
