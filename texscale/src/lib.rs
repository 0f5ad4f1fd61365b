//! texscale - Separable texture resampling engine
//!
//! Resizes packed 32-bit color images with a choice of nearest-neighbor,
//! box (area-average) or bilinear filtering. Every resize runs as an X pass
//! followed by a Y pass, and each pass is split across worker threads by
//! output row, so results are bit-identical for any thread count.
//!
//! # Example
//!
//! ```
//! use texscale::{PixelGrid, ResampleMethod, ResampleOptions, resize};
//!
//! let src = PixelGrid::filled(640, 480, 0xff808080).unwrap();
//! let options = ResampleOptions::default().with_method(ResampleMethod::Box);
//! let thumb = resize(&src, 160, 120, &options).unwrap();
//! assert_eq!(thumb.dimensions(), (160, 120));
//! assert_eq!(thumb.get(0, 0), 0xff808080);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use texscale_core::*;

// Re-export the resampling crate as a module, plus its entry points
pub use texscale_resample as resample;
pub use texscale_resample::{
    ResampleError, ResampleMethod, ResampleOptions, ResampleRequest, ResampleResult, Resampler,
    resize, scale, scale_to_size,
};
