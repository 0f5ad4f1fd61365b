//! Resampling strategies and their common contract
//!
//! Every strategy implements [`Resampler`]: two single-axis passes, plus the
//! separable [`Resampler::apply`] built on top of them. [`ResampleMethod`]
//! is the closed set of built-in strategies and dispatches with an
//! exhaustive `match`, so callers can switch algorithms without touching the
//! driver.

use crate::{ResampleError, ResampleResult, area, bilinear, nearest, scale};
use std::fmt;
use std::str::FromStr;
use texscale_core::PixelGrid;

/// Single-axis resampling contract shared by all strategies.
pub trait Resampler: Sync {
    /// Resample along X, producing a `target_width x src.height()` grid.
    fn apply_x(
        &self,
        src: &PixelGrid<'_>,
        target_width: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>>;

    /// Resample along Y, producing a `src.width() x target_height` grid.
    fn apply_y(
        &self,
        src: &PixelGrid<'_>,
        target_height: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>>;

    /// Resize to `target_width x target_height` with the separable driver.
    ///
    /// See [`scale::compose`] for the pass ordering.
    fn apply(
        &self,
        src: &PixelGrid<'_>,
        target_width: u32,
        target_height: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        scale::compose(self, src, target_width, target_height, threads)
    }
}

/// Nearest-neighbor sampling (fastest, blocky results)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighbor;

impl Resampler for NearestNeighbor {
    fn apply_x(
        &self,
        src: &PixelGrid<'_>,
        target_width: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        nearest::scale_x(src, target_width, threads)
    }

    fn apply_y(
        &self,
        src: &PixelGrid<'_>,
        target_height: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        nearest::scale_y(src, target_height, threads)
    }
}

/// Box / area-average filtering (best for downscaling)
///
/// Upsampling axes fall back to nearest-neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaAverage {
    /// Weight color lanes by alpha when averaging
    pub premultiply: bool,
}

impl Default for AreaAverage {
    fn default() -> Self {
        Self { premultiply: true }
    }
}

impl Resampler for AreaAverage {
    fn apply_x(
        &self,
        src: &PixelGrid<'_>,
        target_width: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        area::scale_x(src, target_width, threads, self.premultiply)
    }

    fn apply_y(
        &self,
        src: &PixelGrid<'_>,
        target_height: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        area::scale_y(src, target_height, threads, self.premultiply)
    }
}

/// Bilinear interpolation with box pre-filtering for strong downscales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bilinear;

impl Resampler for Bilinear {
    fn apply_x(
        &self,
        src: &PixelGrid<'_>,
        target_width: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        bilinear::scale_x(src, target_width, threads)
    }

    fn apply_y(
        &self,
        src: &PixelGrid<'_>,
        target_height: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        bilinear::scale_y(src, target_height, threads)
    }
}

/// Built-in resampling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResampleMethod {
    /// Nearest-neighbor sampling
    Nearest,
    /// Box / area-average filter with premultiplied alpha
    Box,
    /// Bilinear interpolation with automatic pre-filtering
    #[default]
    Bilinear,
}

impl ResampleMethod {
    /// Every built-in method
    pub const ALL: [ResampleMethod; 3] = [Self::Nearest, Self::Box, Self::Bilinear];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Box => "box",
            Self::Bilinear => "bilinear",
        }
    }
}

impl Resampler for ResampleMethod {
    fn apply_x(
        &self,
        src: &PixelGrid<'_>,
        target_width: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        match self {
            Self::Nearest => NearestNeighbor.apply_x(src, target_width, threads),
            Self::Box => AreaAverage::default().apply_x(src, target_width, threads),
            Self::Bilinear => Bilinear.apply_x(src, target_width, threads),
        }
    }

    fn apply_y(
        &self,
        src: &PixelGrid<'_>,
        target_height: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        match self {
            Self::Nearest => NearestNeighbor.apply_y(src, target_height, threads),
            Self::Box => AreaAverage::default().apply_y(src, target_height, threads),
            Self::Bilinear => Bilinear.apply_y(src, target_height, threads),
        }
    }
}

impl fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResampleMethod {
    type Err = ResampleError;

    /// Parse a method name, case-insensitively.
    ///
    /// Accepts `nearest`, `box` / `area`, and `bilinear` / `linear`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "box" | "area" => Ok(Self::Box),
            "bilinear" | "linear" => Ok(Self::Bilinear),
            _ => Err(ResampleError::UnknownMethod(s.to_string())),
        }
    }
}
