//! Error types for texscale-resample

use thiserror::Error;

/// Errors that can occur while resampling
#[derive(Debug, Error)]
pub enum ResampleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] texscale_core::Error),

    /// Target dimensions must both be at least 1
    #[error("invalid target size: {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },

    /// Thread count must be at least 1
    #[error("invalid thread count: {0}")]
    InvalidThreadCount(u32),

    /// Unrecognized resampling method name
    #[error("unknown resampling method: {0}")]
    UnknownMethod(String),

    /// Scale factor is not a positive finite number
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// A worker thread panicked; the pass output was discarded
    #[error("resampling worker panicked: {message}")]
    WorkerPanicked { message: String },

    /// The OS refused to spawn a worker thread
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Result type for resampling operations
pub type ResampleResult<T> = Result<T, ResampleError>;
