//! texscale-test - Regression test framework for texscale
//!
//! Provides [`RegParams`] for accumulating comparison results and a set of
//! deterministic test patterns, so regression tests need no image files.
//!
//! # Usage
//!
//! ```ignore
//! use texscale_test::{RegParams, checkerboard};
//!
//! let mut rp = RegParams::new("scale");
//! let src = checkerboard(8, 8, 1, 0xff000000, 0xffffffff).unwrap();
//! rp.compare_values(64.0, src.pixels().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use texscale_core::PixelGrid;
use texscale_core::color::compose_argb;

fn build(
    pattern: &'static str,
    width: u32,
    height: u32,
    pixels: Vec<u32>,
) -> TestResult<PixelGrid<'static>> {
    PixelGrid::from_vec(width, height, pixels)
        .map_err(|source| TestError::GridBuild { pattern, source })
}

/// A grid with every pixel set to `color`.
pub fn uniform(width: u32, height: u32, color: u32) -> TestResult<PixelGrid<'static>> {
    PixelGrid::filled(width, height, color).map_err(|source| TestError::GridBuild {
        pattern: "uniform",
        source,
    })
}

/// A checkerboard of `cell` x `cell` squares alternating `c0` and `c1`,
/// starting with `c0` at the origin.
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    c0: u32,
    c1: u32,
) -> TestResult<PixelGrid<'static>> {
    let cell = cell.max(1);
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                if (x / cell + y / cell) % 2 == 0 {
                    c0
                } else {
                    c1
                }
            })
        })
        .collect();
    build("checkerboard", width, height, pixels)
}

/// A smooth gradient: red ramps along x, green along y, blue along the
/// diagonal, alpha ramps down along x.
pub fn gradient(width: u32, height: u32) -> TestResult<PixelGrid<'static>> {
    let ramp = |v: u32, n: u32| (v as u64 * 255 / n.saturating_sub(1).max(1) as u64) as u8;
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let r = ramp(x, width);
                let g = ramp(y, height);
                let b = ((r as u32 + g as u32) / 2) as u8;
                compose_argb(255 - r / 2, r, g, b)
            })
        })
        .collect();
    build("gradient", width, height, pixels)
}

/// Deterministic pseudo-random pixels derived from `seed`.
pub fn noise(width: u32, height: u32, seed: u64) -> TestResult<PixelGrid<'static>> {
    let mut state = seed ^ 0x9e37_79b9_7f4a_7c15;
    let len = width as usize * height as usize;
    let pixels = (0..len)
        .map(|_| {
            // splitmix64
            state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            (z ^ (z >> 31)) as u32
        })
        .collect();
    build("noise", width, height, pixels)
}
