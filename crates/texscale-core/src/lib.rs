//! texscale Core - Basic data structures for texture resampling
//!
//! This crate provides the fundamental types used throughout texscale:
//!
//! - [`PixelGrid`] - Row-major grid of packed 32-bit colors, owning its
//!   buffer or wrapping caller memory
//! - [`color`] - Lane extraction, averaging and interpolation helpers for
//!   packed colors
//! - [`Error`] / [`Result`] - Grid construction errors

pub mod color;
pub mod error;
pub mod grid;

pub use color::LaneAccumulator;
pub use error::{Error, Result};
pub use grid::PixelGrid;
