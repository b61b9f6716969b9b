// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Ordinal (permutation) pattern schemes and their symbolization utilities.

pub mod ordinal;
pub mod ordinal_utils;
pub mod weighted;
