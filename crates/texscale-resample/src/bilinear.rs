//! Bilinear resampling with automatic box pre-filtering
//!
//! Output index `i` is mapped to the source position
//!
//! ```text
//! point = (i + 0.5) / factor - 0.5        factor = dst_len / src_len
//! ```
//!
//! which aligns cell centers rather than corners. Positions before the first
//! or past the last source sample are clamped to that sample; anything in
//! between blends the two neighbouring samples with weight `point - floor(point)`.
//!
//! Two-tap interpolation aliases badly once `factor < 0.5`, so such passes are
//! first box-filtered by a power of two (`2^floor(-log2(factor))`) and then
//! interpolated from the intermediate, which always lands at `factor >= 0.5`.
//!
//! Blending is alpha-weighted, matching the box filter's premultiplied mean.

use crate::ResampleResult;
use crate::area;
use crate::partition::for_each_row;
use crate::scale::{pass_output, validate};
use log::debug;
use texscale_core::PixelGrid;
use texscale_core::color::lerp;

/// Source sample(s) feeding one output index.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tap {
    /// Copy a single source sample
    Exact(u32),
    /// Blend `lo` and `hi`; `weight` is the share of `hi`
    Blend { lo: u32, hi: u32, weight: f64 },
}

impl Tap {
    fn new(i: u32, factor: f64, src_len: u32) -> Self {
        let point = (i as f64 + 0.5) / factor - 0.5;
        let last = src_len - 1;
        if point < 0.0 {
            return Tap::Exact(0);
        }
        if point > last as f64 {
            return Tap::Exact(last);
        }
        let lo = point.floor();
        let hi = point.ceil();
        if lo == hi {
            Tap::Exact(lo as u32)
        } else {
            Tap::Blend {
                lo: lo as u32,
                hi: hi as u32,
                weight: point - lo,
            }
        }
    }
}

/// Box divisor that brings `factor` back to at least 0.5.
#[inline]
fn prefilter_divisor(factor: f64) -> u32 {
    let exp = (-factor.log2()).floor() as u32;
    1u32 << exp.min(31)
}

/// Interpolate along X only, producing a `target_width x src.height()` grid.
///
/// # Errors
///
/// Returns an error for a zero target width or thread count, or if a
/// worker fails.
pub fn scale_x(
    src: &PixelGrid<'_>,
    target_width: u32,
    threads: u32,
) -> ResampleResult<PixelGrid<'static>> {
    let (sw, sh) = src.dimensions();
    validate(target_width, sh, threads)?;
    let factor = target_width as f64 / sw as f64;

    if factor < 0.5 {
        let divisor = prefilter_divisor(factor);
        debug!("bilinear x-pass factor {factor:.4}: box pre-filter {sw} -> {}", sw / divisor);
        let filtered = area::scale_x(src, sw / divisor, threads, true)?;
        return scale_x(&filtered, target_width, threads);
    }
    let mut out = pass_output(target_width, sh, threads)?;
    debug!("bilinear x-pass {sw}x{sh} -> {target_width}x{sh} on {threads} thread(s)");

    let taps: Vec<Tap> = (0..target_width)
        .map(|x| Tap::new(x, factor, sw))
        .collect();

    for_each_row(out.pixels_mut(), target_width, threads, |y, row| {
        let src_row = src.row(y);
        for (p, tap) in row.iter_mut().zip(&taps) {
            *p = match *tap {
                Tap::Exact(sx) => src_row[sx as usize],
                Tap::Blend { lo, hi, weight } => {
                    lerp(src_row[lo as usize], src_row[hi as usize], weight, true)
                }
            };
        }
    })?;
    Ok(out)
}

/// Interpolate along Y only, producing a `src.width() x target_height` grid.
///
/// # Errors
///
/// Returns an error for a zero target height or thread count, or if a
/// worker fails.
pub fn scale_y(
    src: &PixelGrid<'_>,
    target_height: u32,
    threads: u32,
) -> ResampleResult<PixelGrid<'static>> {
    let (sw, sh) = src.dimensions();
    validate(sw, target_height, threads)?;
    let factor = target_height as f64 / sh as f64;

    if factor < 0.5 {
        let divisor = prefilter_divisor(factor);
        debug!("bilinear y-pass factor {factor:.4}: box pre-filter {sh} -> {}", sh / divisor);
        let filtered = area::scale_y(src, sh / divisor, threads, true)?;
        return scale_y(&filtered, target_height, threads);
    }
    let mut out = pass_output(sw, target_height, threads)?;
    debug!("bilinear y-pass {sw}x{sh} -> {sw}x{target_height} on {threads} thread(s)");

    for_each_row(out.pixels_mut(), sw, threads, |y, row| {
        match Tap::new(y, factor, sh) {
            Tap::Exact(sy) => row.copy_from_slice(src.row(sy)),
            Tap::Blend { lo, hi, weight } => {
                let (lo_row, hi_row) = (src.row(lo), src.row(hi));
                for ((p, &a), &b) in row.iter_mut().zip(lo_row).zip(hi_row) {
                    *p = lerp(a, b, weight, true);
                }
            }
        }
    })?;
    Ok(out)
}
