//! Error types for texscale-core
//!
//! Covers the recoverable failures of grid construction. Coordinate
//! violations in pixel accessors are contract errors and panic instead.

use thiserror::Error;

/// texscale-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match `width * height`
    #[error("pixel buffer size mismatch for {width}x{height}: expected {expected}, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for texscale-core operations
pub type Result<T> = std::result::Result<T, Error>;
