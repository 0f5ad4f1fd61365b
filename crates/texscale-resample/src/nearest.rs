//! Nearest-neighbor resampling
//!
//! Output pixel `i` copies source pixel `i * src_len / dst_len` (integer
//! division) verbatim. No blending takes place, so this is the only strategy
//! that never produces a color absent from the source.

use crate::ResampleResult;
use crate::partition::for_each_row;
use crate::scale::pass_output;
use log::debug;
use texscale_core::PixelGrid;

/// Source index sampled by output index `i` when mapping `src_len` onto `dst_len`.
#[inline]
pub(crate) fn source_index(i: u32, src_len: u32, dst_len: u32) -> u32 {
    (i as u64 * src_len as u64 / dst_len as u64) as u32
}

/// Resample along X only, producing a `target_width x src.height()` grid.
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
    let mut out = pass_output(target_width, sh, threads)?;
    debug!("nearest x-pass {sw}x{sh} -> {target_width}x{sh} on {threads} thread(s)");

    let columns: Vec<usize> = (0..target_width)
        .map(|x| source_index(x, sw, target_width) as usize)
        .collect();

    for_each_row(out.pixels_mut(), target_width, threads, |y, row| {
        let src_row = src.row(y);
        for (p, &sx) in row.iter_mut().zip(&columns) {
            *p = src_row[sx];
        }
    })?;
    Ok(out)
}

/// Resample along Y only, producing a `src.width() x target_height` grid.
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
    let mut out = pass_output(sw, target_height, threads)?;
    debug!("nearest y-pass {sw}x{sh} -> {sw}x{target_height} on {threads} thread(s)");

    for_each_row(out.pixels_mut(), sw, threads, |y, row| {
        row.copy_from_slice(src.row(source_index(y, sh, target_height)));
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResampleError;

    fn ramp(width: u32, height: u32) -> PixelGrid<'static> {
        PixelGrid::from_vec(width, height, (0..width * height).collect()).unwrap()
    }

    #[test]
    fn test_source_index_floors() {
        assert_eq!(source_index(0, 10, 4), 0);
        assert_eq!(source_index(1, 10, 4), 2);
        assert_eq!(source_index(3, 10, 4), 7);
        assert_eq!(source_index(5, 3, 6), 2);
    }

    #[test]
    fn test_scale_x_downsample() {
        let src = ramp(4, 2);
        let out = scale_x(&src, 2, 1).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.pixels(), &[0, 2, 4, 6]);
    }

    #[test]
    fn test_scale_x_upsample_duplicates() {
        let src = ramp(2, 1);
        let out = scale_x(&src, 5, 2).unwrap();
        assert_eq!(out.pixels(), &[0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_scale_y_copies_rows() {
        let src = ramp(2, 3);
        let out = scale_y(&src, 6, 3).unwrap();
        assert_eq!(out.dimensions(), (2, 6));
        assert_eq!(out.pixels(), &[0, 1, 0, 1, 2, 3, 2, 3, 4, 5, 4, 5]);
    }

    #[test]
    fn test_zero_target_rejected() {
        let src = ramp(2, 2);
        assert!(matches!(
            scale_x(&src, 0, 1),
            Err(ResampleError::InvalidTargetSize { width: 0, .. })
        ));
        assert!(matches!(
            scale_y(&src, 1, 0),
            Err(ResampleError::InvalidThreadCount(0))
        ));
    }
}
