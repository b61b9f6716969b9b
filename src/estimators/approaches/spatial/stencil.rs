// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{ComplexityError, Result};

/// A finite set of relative offsets around a reference cell.
///
/// Offsets are stored sorted in lexicographic order without duplicates, so stencils
/// describing the same geometry compare equal regardless of how they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stencil {
    offsets: Vec<Vec<isize>>,
}

impl Stencil {
    /// Explicit list of offset vectors, all of the same dimension.
    pub fn from_offsets(offsets: Vec<Vec<isize>>) -> Result<Self> {
        let Some(first) = offsets.first() else {
            return Err(ComplexityError::invalid("stencil", "stencil is empty"));
        };
        let ndim = first.len();
        if ndim == 0 {
            return Err(ComplexityError::invalid(
                "stencil",
                "offsets must have at least one dimension",
            ));
        }
        if let Some(bad) = offsets.iter().find(|o| o.len() != ndim) {
            return Err(ComplexityError::ShapeMismatch(format!(
                "stencil offset {bad:?} has {} dimensions, expected {ndim}",
                bad.len()
            )));
        }
        let mut offsets = offsets;
        offsets.sort();
        let n = offsets.len();
        offsets.dedup();
        if offsets.len() != n {
            return Err(ComplexityError::invalid(
                "stencil",
                "offsets must be distinct",
            ));
        }
        Ok(Self { offsets })
    }

    /// Rectangular block: `extent[d]` cells along dimension `d`, spaced `lag[d]` apart.
    pub fn from_extent_lag(extent: &[usize], lag: &[usize]) -> Result<Self> {
        if extent.len() != lag.len() {
            return Err(ComplexityError::ShapeMismatch(format!(
                "extent has {} dimensions but lag has {}",
                extent.len(),
                lag.len()
            )));
        }
        if extent.contains(&0) || lag.contains(&0) {
            return Err(ComplexityError::invalid(
                "stencil",
                "extent and lag entries must be positive",
            ));
        }
        let mut offsets: Vec<Vec<isize>> = vec![Vec::new()];
        for (&e, &l) in extent.iter().zip(lag) {
            offsets = offsets
                .into_iter()
                .flat_map(|prefix| {
                    (0..e).map(move |k| {
                        let mut o = prefix.clone();
                        o.push((k * l) as isize);
                        o
                    })
                })
                .collect();
        }
        Self::from_offsets(offsets)
    }

    /// Occupancy mask: every `true` cell, at its index, is an offset.
    pub fn from_mask<S, D>(mask: &ArrayBase<S, D>) -> Result<Self>
    where
        S: Data<Elem = bool>,
        D: Dimension,
    {
        let offsets = mask
            .view()
            .into_dyn()
            .indexed_iter()
            .filter(|(_, on)| **on)
            .map(|(idx, _)| idx.slice().iter().map(|&i| i as isize).collect())
            .collect();
        Self::from_offsets(offsets)
    }

    pub fn offsets(&self) -> &[Vec<isize>] {
        &self.offsets
    }

    /// Number of cells gathered per reference position.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn ndim(&self) -> usize {
        self.offsets[0].len()
    }

    /// Row-major flat indices of the cells gathered at every valid reference position.
    ///
    /// With `periodic`, offsets wrap around the array extent and every cell is a valid
    /// reference. Otherwise reference cells whose stencil leaves the array are skipped.
    pub fn windows(&self, shape: &[usize], periodic: bool) -> Result<Vec<Vec<usize>>> {
        if shape.len() != self.ndim() {
            return Err(ComplexityError::ShapeMismatch(format!(
                "stencil has {} dimensions but the array has {}",
                self.ndim(),
                shape.len()
            )));
        }
        let total: usize = shape.iter().product();
        if total == 0 {
            return Err(ComplexityError::InsufficientData { needed: 1, got: 0 });
        }
        let mut strides = vec![1usize; shape.len()];
        for d in (0..shape.len().saturating_sub(1)).rev() {
            strides[d] = strides[d + 1] * shape[d + 1];
        }

        let mut windows = Vec::new();
        let mut reference = vec![0usize; shape.len()];
        'cells: for _ in 0..total {
            let mut gathered = Vec::with_capacity(self.len());
            let mut fits = true;
            for offset in &self.offsets {
                let mut flat = 0usize;
                for d in 0..shape.len() {
                    let extent = shape[d] as isize;
                    let mut c = reference[d] as isize + offset[d];
                    if periodic {
                        c = c.rem_euclid(extent);
                    } else if c < 0 || c >= extent {
                        fits = false;
                        break;
                    }
                    flat += c as usize * strides[d];
                }
                if !fits {
                    break;
                }
                gathered.push(flat);
            }
            if fits {
                windows.push(gathered);
            }
            for (digit, &radix) in reference.iter_mut().zip(shape).rev() {
                *digit += 1;
                if *digit < radix {
                    continue 'cells;
                }
                *digit = 0;
            }
        }

        if windows.is_empty() {
            return Err(ComplexityError::ShapeMismatch(format!(
                "stencil with offsets {:?} does not fit inside an array of shape {shape:?}",
                self.offsets
            )));
        }
        Ok(windows)
    }
}
