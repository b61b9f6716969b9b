// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Stencil-based symbolization of N-dimensional arrays.

pub mod spatial_dispersion;
pub mod spatial_ordinal;
pub mod stencil;
