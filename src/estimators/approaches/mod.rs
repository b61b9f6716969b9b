// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod binning;
pub mod dispersion;
pub mod kernel;
pub mod ordinal;
pub mod spatial;
pub mod spectral;
pub mod unique;
pub mod wavelet;

// Unified re-exports for the outcome spaces so tests and users can import
// complexity::estimators::approaches::* ergonomically.
// Counting schemes
pub use binning::{FixedRectangularBinning, RectangularBinning, ValueBinning};
pub use dispersion::Dispersion;
pub use ordinal::ordinal::OrdinalPatterns;
pub use spatial::spatial_dispersion::SpatialDispersion;
pub use spatial::spatial_ordinal::SpatialOrdinalPatterns;
pub use spatial::stencil::Stencil;
pub use unique::{CountOccurrences, FloatKey};

// Weight-based schemes
pub use kernel::NaiveKernel;
pub use ordinal::weighted::{AmplitudeAwareOrdinalPatterns, WeightedOrdinalPatterns};
pub use spectral::PowerSpectrum;
pub use wavelet::WaveletOverlap;
