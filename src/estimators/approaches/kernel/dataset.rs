// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use kiddo::{ImmutableKdTree, SquaredEuclidean};
use ndarray::ArrayView2;

use crate::error::{ComplexityError, Result};

/// Whether `p` lies within Chebyshev distance `r` of `q`.
#[inline]
pub fn is_in_box<const K: usize>(q: &[f64; K], p: &[f64; K], r: f64) -> bool {
    q.iter().zip(p).all(|(a, b)| (a - b).abs() <= r)
}

/// Point cloud with a KD-tree for radius queries.
pub struct NdDataset<const K: usize> {
    pub points: Vec<[f64; K]>,
    pub tree: ImmutableKdTree<f64, K>,
}

impl<const K: usize> NdDataset<K> {
    pub fn from_points(points: Vec<[f64; K]>) -> Self {
        let tree = ImmutableKdTree::new_from_slice(&points);
        Self { points, tree }
    }

    /// Rows are points; the number of columns must equal `K`.
    pub fn from_view(data: ArrayView2<'_, f64>) -> Result<Self> {
        if data.ncols() != K {
            return Err(ComplexityError::ShapeMismatch(format!(
                "expected {K} columns, got {}",
                data.ncols()
            )));
        }
        let points = data
            .rows()
            .into_iter()
            .map(|row| {
                let mut p = [0.0; K];
                for (slot, &v) in p.iter_mut().zip(row.iter()) {
                    *slot = v;
                }
                p
            })
            .collect();
        Ok(Self::from_points(points))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// For every point, the number of points (itself included) within Chebyshev distance `radius`.
    ///
    /// Candidates come from the circumscribed Euclidean ball of the box and are then
    /// checked against the box itself.
    pub fn neighbour_counts_chebyshev(&self, radius: f64) -> Vec<usize> {
        let reach = radius * (1.0 + 1e-12) + f64::EPSILON;
        let circumscribed_radius_sq = (K as f64) * reach * reach;
        self.points
            .iter()
            .map(|q| {
                self.tree
                    .within_unsorted::<SquaredEuclidean>(q, circumscribed_radius_sq)
                    .into_iter()
                    .filter(|c| is_in_box(q, &self.points[c.item as usize], radius))
                    .count()
            })
            .collect()
    }
}
