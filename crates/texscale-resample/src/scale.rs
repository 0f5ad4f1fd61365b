//! Separable resize driver and entry points
//!
//! A resize is composed from up to two single-axis passes:
//!
//! | Change | Passes |
//! |---|---|
//! | none | copy of the source |
//! | width only | `apply_x` |
//! | height only | `apply_y` |
//! | both | `apply_x`, then `apply_y` on its output |
//!
//! The X-then-Y order is fixed, so identical inputs always produce
//! bit-identical outputs. Each pass finishes, including its join barrier,
//! before the next starts.
//!
//! # Entry points
//!
//! | Function | Target size |
//! |---|---|
//! | [`resize`] | explicit width and height |
//! | [`scale`] | source size times per-axis factors |
//! | [`scale_to_size`] | explicit size, 0 keeps the aspect ratio |
//! | [`ResampleRequest::execute`] | bundled request |

use crate::method::{ResampleMethod, Resampler};
use crate::{ResampleError, ResampleResult};
use log::debug;
use std::thread;
use texscale_core::PixelGrid;

/// Number of workers used when none is specified.
fn default_threads() -> u32 {
    thread::available_parallelism()
        .ok()
        .and_then(|n| u32::try_from(n.get()).ok())
        .unwrap_or(1)
}

/// Options for resize operations
///
/// Passed explicitly into every call; there is no process-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleOptions {
    /// Resampling algorithm to use
    pub method: ResampleMethod,
    /// Worker threads per pass (1 = run on the calling thread)
    pub threads: u32,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            method: ResampleMethod::default(),
            threads: default_threads(),
        }
    }
}

impl ResampleOptions {
    /// Create options with an explicit method and thread count
    pub fn new(method: ResampleMethod, threads: u32) -> Self {
        Self { method, threads }
    }

    /// Replace the resampling method
    pub fn with_method(mut self, method: ResampleMethod) -> Self {
        self.method = method;
        self
    }

    /// Replace the thread count
    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = threads;
        self
    }
}

/// Check a request's target size and thread count.
///
/// Runs before any thread is spawned or buffer allocated.
///
/// # Errors
///
/// - [`ResampleError::InvalidTargetSize`] if either dimension is 0
/// - [`ResampleError::InvalidThreadCount`] if `threads == 0`
pub fn validate(target_width: u32, target_height: u32, threads: u32) -> ResampleResult<()> {
    if target_width == 0 || target_height == 0 {
        return Err(ResampleError::InvalidTargetSize {
            width: target_width,
            height: target_height,
        });
    }
    if threads == 0 {
        return Err(ResampleError::InvalidThreadCount(threads));
    }
    Ok(())
}

/// Validate and allocate the output grid of one axis pass.
pub(crate) fn pass_output(
    width: u32,
    height: u32,
    threads: u32,
) -> ResampleResult<PixelGrid<'static>> {
    validate(width, height, threads)?;
    Ok(PixelGrid::new(width, height)?)
}

/// Run the separable driver for `resampler`.
///
/// Returns an owning copy of `src` when the size is unchanged, otherwise
/// runs the needed axis passes in X-then-Y order.
///
/// # Errors
///
/// Returns a validation error before doing any work, or the first pass
/// failure. A failed X pass never starts the Y pass.
pub fn compose<R: Resampler + ?Sized>(
    resampler: &R,
    src: &PixelGrid<'_>,
    target_width: u32,
    target_height: u32,
    threads: u32,
) -> ResampleResult<PixelGrid<'static>> {
    validate(target_width, target_height, threads)?;
    let (sw, sh) = src.dimensions();

    match (target_width == sw, target_height == sh) {
        (true, true) => {
            debug!("resize {sw}x{sh}: size unchanged, copying");
            Ok(src.to_owned_grid())
        }
        (false, true) => resampler.apply_x(src, target_width, threads),
        (true, false) => resampler.apply_y(src, target_height, threads),
        (false, false) => {
            debug!("resize {sw}x{sh} -> {target_width}x{target_height}: x then y");
            let intermediate = resampler.apply_x(src, target_width, threads)?;
            resampler.apply_y(&intermediate, target_height, threads)
        }
    }
}

/// Resize an image to exactly `target_width x target_height`.
///
/// # Arguments
/// * `src` - Input grid
/// * `target_width` - Output width (>= 1)
/// * `target_height` - Output height (>= 1)
/// * `options` - Method and thread count
///
/// # Examples
///
/// ```
/// use texscale_core::PixelGrid;
/// use texscale_resample::{ResampleMethod, ResampleOptions, resize};
///
/// let src = PixelGrid::filled(64, 64, 0xff336699).unwrap();
/// let options = ResampleOptions::new(ResampleMethod::Box, 2);
/// let out = resize(&src, 16, 8, &options).unwrap();
/// assert_eq!(out.dimensions(), (16, 8));
/// assert!(out.pixels().iter().all(|&p| p == 0xff336699));
/// ```
pub fn resize(
    src: &PixelGrid<'_>,
    target_width: u32,
    target_height: u32,
    options: &ResampleOptions,
) -> ResampleResult<PixelGrid<'static>> {
    options
        .method
        .apply(src, target_width, target_height, options.threads)
}

fn scaled_dimension(dim: u32, factor: f32, axis: &str) -> ResampleResult<u32> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ResampleError::InvalidScaleFactor(format!(
            "{axis} factor must be positive and finite, got {factor}"
        )));
    }
    let scaled = (dim as f64 * factor as f64).round();
    if scaled > u32::MAX as f64 {
        return Err(ResampleError::InvalidScaleFactor(format!(
            "{axis} factor {factor} overflows dimension {dim}"
        )));
    }
    Ok((scaled as u32).max(1))
}

/// Scale an image by the given factors
///
/// Target dimensions are `round(dim * factor)`, never less than 1.
///
/// # Arguments
/// * `src` - Input grid
/// * `scale_x` - Horizontal scale factor (e.g., 2.0 = double width)
/// * `scale_y` - Vertical scale factor
/// * `options` - Method and thread count
///
/// # Errors
///
/// Returns [`ResampleError::InvalidScaleFactor`] for non-positive,
/// non-finite, or overflowing factors.
pub fn scale(
    src: &PixelGrid<'_>,
    scale_x: f32,
    scale_y: f32,
    options: &ResampleOptions,
) -> ResampleResult<PixelGrid<'static>> {
    let width = scaled_dimension(src.width(), scale_x, "horizontal")?;
    let height = scaled_dimension(src.height(), scale_y, "vertical")?;
    resize(src, width, height, options)
}

/// Scale an image to a specific size
///
/// # Arguments
/// * `src` - Input grid
/// * `width` - Target width (0 to maintain aspect ratio)
/// * `height` - Target height (0 to maintain aspect ratio)
/// * `options` - Method and thread count
///
/// # Errors
///
/// Returns [`ResampleError::InvalidTargetSize`] if both dimensions are 0.
pub fn scale_to_size(
    src: &PixelGrid<'_>,
    width: u32,
    height: u32,
    options: &ResampleOptions,
) -> ResampleResult<PixelGrid<'static>> {
    let (sw, sh) = src.dimensions();
    let keep_aspect = |given: u32, given_src: u32, other_src: u32| {
        let v = (given as u64 * other_src as u64 + given_src as u64 / 2) / given_src as u64;
        u32::try_from(v).unwrap_or(u32::MAX).max(1)
    };
    let (width, height) = match (width, height) {
        (0, 0) => return Err(ResampleError::InvalidTargetSize { width, height }),
        (0, h) => (keep_aspect(h, sh, sw), h),
        (w, 0) => (w, keep_aspect(w, sw, sh)),
        (w, h) => (w, h),
    };
    resize(src, width, height, options)
}

/// A complete resize request
#[derive(Debug, Clone, Copy)]
pub struct ResampleRequest<'s, 'a> {
    /// Grid to resample
    pub source: &'s PixelGrid<'a>,
    /// Output width
    pub target_width: u32,
    /// Output height
    pub target_height: u32,
    /// Worker threads per pass
    pub threads: u32,
    /// Resampling algorithm
    pub method: ResampleMethod,
}

impl<'s, 'a> ResampleRequest<'s, 'a> {
    /// Create a request taking method and thread count from `options`
    pub fn new(
        source: &'s PixelGrid<'a>,
        target_width: u32,
        target_height: u32,
        options: &ResampleOptions,
    ) -> Self {
        Self {
            source,
            target_width,
            target_height,
            threads: options.threads,
            method: options.method,
        }
    }

    /// Check the request invariants
    pub fn validate(&self) -> ResampleResult<()> {
        validate(self.target_width, self.target_height, self.threads)
    }

    /// Run the request
    pub fn execute(&self) -> ResampleResult<PixelGrid<'static>> {
        self.validate()?;
        self.method.apply(
            self.source,
            self.target_width,
            self.target_height,
            self.threads,
        )
    }
}
