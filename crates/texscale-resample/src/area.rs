//! Box / area-average resampling
//!
//! Each output pixel covers a contiguous span of source pixels and takes
//! their per-lane mean. For output index `i` mapping `src_len` onto
//! `dst_len`, the inclusive span is
//!
//! ```text
//! min = i * src_len / dst_len
//! max = (i + 1) * src_len / dst_len - 1
//! ```
//!
//! The spans only make sense when downsampling (or at equal size); a pass
//! whose target exceeds the source on its axis is delegated to
//! nearest-neighbor, which is what box averaging degenerates to anyway.

use crate::ResampleResult;
use crate::nearest;
use crate::partition::for_each_row;
use crate::scale::pass_output;
use log::debug;
use texscale_core::PixelGrid;

/// Inclusive source span covered by output index `i`.
#[inline]
pub(crate) fn source_span(i: u32, src_len: u32, dst_len: u32) -> (u32, u32) {
    debug_assert!(dst_len <= src_len);
    let (i, src, dst) = (i as u64, src_len as u64, dst_len as u64);
    let min = i * src / dst;
    let max = (i + 1) * src / dst - 1;
    debug_assert!(max >= min, "empty span for index {i}");
    (min as u32, max as u32)
}

/// Box-filter along X only, producing a `target_width x src.height()` grid.
///
/// With `premultiply`, spans are averaged alpha-weighted
/// (see [`PixelGrid::average_region`]). Falls back to nearest-neighbor when
/// `target_width > src.width()`.
///
/// # Errors
///
/// Returns an error for a zero target width or thread count, or if a
/// worker fails.
pub fn scale_x(
    src: &PixelGrid<'_>,
    target_width: u32,
    threads: u32,
    premultiply: bool,
) -> ResampleResult<PixelGrid<'static>> {
    let (sw, sh) = src.dimensions();
    if target_width > sw {
        debug!("area x-pass upsamples {sw} -> {target_width}; using nearest");
        return nearest::scale_x(src, target_width, threads);
    }
    let mut out = pass_output(target_width, sh, threads)?;
    debug!("area x-pass {sw}x{sh} -> {target_width}x{sh} on {threads} thread(s)");

    let spans: Vec<(u32, u32)> = (0..target_width)
        .map(|x| source_span(x, sw, target_width))
        .collect();

    for_each_row(out.pixels_mut(), target_width, threads, |y, row| {
        for (p, &(min_x, max_x)) in row.iter_mut().zip(&spans) {
            *p = if min_x == max_x {
                src.get(min_x, y)
            } else {
                src.average_region(min_x, y, max_x, y, premultiply)
            };
        }
    })?;
    Ok(out)
}

/// Box-filter along Y only, producing a `src.width() x target_height` grid.
///
/// Falls back to nearest-neighbor when `target_height > src.height()`.
///
/// # Errors
///
/// Returns an error for a zero target height or thread count, or if a
/// worker fails.
pub fn scale_y(
    src: &PixelGrid<'_>,
    target_height: u32,
    threads: u32,
    premultiply: bool,
) -> ResampleResult<PixelGrid<'static>> {
    let (sw, sh) = src.dimensions();
    if target_height > sh {
        debug!("area y-pass upsamples {sh} -> {target_height}; using nearest");
        return nearest::scale_y(src, target_height, threads);
    }
    let mut out = pass_output(sw, target_height, threads)?;
    debug!("area y-pass {sw}x{sh} -> {sw}x{target_height} on {threads} thread(s)");

    for_each_row(out.pixels_mut(), sw, threads, |y, row| {
        let (min_y, max_y) = source_span(y, sh, target_height);
        if min_y == max_y {
            row.copy_from_slice(src.row(min_y));
            return;
        }
        for (x, p) in (0..sw).zip(row.iter_mut()) {
            *p = src.average_region(x, min_y, x, max_y, premultiply);
        }
    })?;
    Ok(out)
}
