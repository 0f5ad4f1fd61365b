//! texscale-resample - Separable multi-threaded texture resampling
//!
//! Resizes a [`PixelGrid`](texscale_core::PixelGrid) as two independent
//! single-axis passes (X, then Y), each spread over a pool of scoped worker
//! threads that claim output rows from a shared cursor.
//!
//! # Strategies
//!
//! | Method | Type | Notes |
//! |---|---|---|
//! | [`ResampleMethod::Nearest`] | [`NearestNeighbor`] | verbatim copies, no blending |
//! | [`ResampleMethod::Box`] | [`AreaAverage`] | premultiplied span mean; nearest when upsampling |
//! | [`ResampleMethod::Bilinear`] | [`Bilinear`] | center-aligned, box pre-filter below 0.5x |
//!
//! # Example
//!
//! ```
//! use texscale_core::PixelGrid;
//! use texscale_resample::{ResampleMethod, ResampleOptions, resize};
//!
//! let src = PixelGrid::filled(256, 128, 0xff204060).unwrap();
//! let out = resize(&src, 64, 32, &ResampleOptions::new(ResampleMethod::Bilinear, 4)).unwrap();
//! assert_eq!(out.dimensions(), (64, 32));
//! ```

mod error;

pub mod area;
pub mod bilinear;
pub mod method;
pub mod nearest;
pub mod partition;
pub mod scale;

pub use error::{ResampleError, ResampleResult};
pub use method::{AreaAverage, Bilinear, NearestNeighbor, ResampleMethod, Resampler};
pub use partition::{WorkCursor, for_each_index, for_each_row};
pub use scale::{
    ResampleOptions, ResampleRequest, compose, resize, scale, scale_to_size, validate,
};
