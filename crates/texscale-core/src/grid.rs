//! PixelGrid - rectangular grid of packed-color pixels
//!
//! # Pixel layout
//!
//! - One packed 32-bit color per pixel, see [`crate::color`]
//! - Row-major, no row padding: pixel `(x, y)` lives at `y * width + x`
//!
//! # Ownership model
//!
//! A grid either owns its buffer (`new`, `filled`, `from_vec`) or wraps a
//! caller-supplied `&mut [u32]` (`wrap`), in which case writes land in the
//! caller's memory. [`Clone`] always produces an owning grid, so a clone of a
//! wrapper never aliases the wrapped buffer. The clone keeps the source's
//! lifetime parameter, though; use [`PixelGrid::to_owned_grid`] for a
//! `PixelGrid<'static>` that outlives the wrapped borrow.
//!
//! Coordinates passed to the accessors must lie inside the grid. Violations
//! are contract errors and panic; they are never clamped.

use crate::color::LaneAccumulator;
use crate::error::{Error, Result};
use std::fmt;

enum PixelStore<'a> {
    Owned(Vec<u32>),
    Wrapped(&'a mut [u32]),
}

/// A width x height grid of packed-color pixels.
///
/// # Examples
///
/// ```
/// use texscale_core::PixelGrid;
///
/// let mut grid = PixelGrid::new(4, 3).unwrap();
/// grid.set(1, 2, 0xff00ff00);
/// assert_eq!(grid.get(1, 2), 0xff00ff00);
/// assert_eq!(grid.pixels().len(), 12);
/// ```
pub struct PixelGrid<'a> {
    width: u32,
    height: u32,
    store: PixelStore<'a>,
}

/// Validate dimensions and return the required buffer length.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

fn check_buffer(width: u32, height: u32, actual: usize) -> Result<()> {
    let expected = pixel_count(width, height)?;
    if expected != actual {
        return Err(Error::BufferSizeMismatch {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}

impl PixelGrid<'static> {
    /// Create a zero-filled grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// pixel count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a grid with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: u32) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            store: PixelStore::Owned(vec![color; len]),
        })
    }

    /// Take ownership of an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `pixels.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        check_buffer(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            store: PixelStore::Owned(pixels),
        })
    }
}

impl<'a> PixelGrid<'a> {
    /// Wrap a caller-supplied buffer without copying it.
    ///
    /// Writes through [`PixelGrid::set`] and [`PixelGrid::pixels_mut`] modify
    /// `pixels` directly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `pixels.len() != width * height`.
    pub fn wrap(width: u32, height: u32, pixels: &'a mut [u32]) -> Result<Self> {
        check_buffer(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            store: PixelStore::Wrapped(pixels),
        })
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether this grid wraps caller memory rather than owning its buffer.
    pub fn is_wrapper(&self) -> bool {
        matches!(self.store, PixelStore::Wrapped(_))
    }

    /// Row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        match &self.store {
            PixelStore::Owned(v) => v,
            PixelStore::Wrapped(s) => s,
        }
    }

    /// Mutable row-major pixel data.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        match &mut self.store {
            PixelStore::Owned(v) => v,
            PixelStore::Wrapped(s) => s,
        }
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        assert!(
            y < self.height,
            "row {y} out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        let start = y as usize * self.width as usize;
        &self.pixels()[start..start + self.width as usize]
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get the packed color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        let i = self.index(x, y);
        self.pixels()[i]
    }

    /// Set the packed color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: u32) {
        let i = self.index(x, y);
        self.pixels_mut()[i] = color;
    }

    /// Per-lane mean of the inclusive rectangle `(x0, y0)..=(x1, y1)`.
    ///
    /// With `premultiply`, the color lanes are weighted by alpha before
    /// averaging and the result alpha is the plain mean of alphas, so
    /// transparent samples do not bleed their color into the result.
    /// A single-pixel rectangle returns that pixel unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle is inverted or extends outside the grid.
    pub fn average_region(&self, x0: u32, y0: u32, x1: u32, y1: u32, premultiply: bool) -> u32 {
        assert!(
            x0 <= x1 && y0 <= y1,
            "inverted region ({x0}, {y0})..=({x1}, {y1})"
        );
        // Bounds-checks the far corner; the near corner follows from the above
        let last = self.index(x1, y1);
        if x0 == x1 && y0 == y1 {
            return self.pixels()[last];
        }

        let mut acc = LaneAccumulator::new();
        for y in y0..=y1 {
            let row = self.row(y);
            for &pixel in &row[x0 as usize..=x1 as usize] {
                acc.add(pixel);
            }
        }
        acc.mean(premultiply)
    }

    /// Owning copy of this grid, detached from any wrapped buffer.
    ///
    /// Unlike [`Clone::clone`], the result is `'static`, so it stays usable
    /// after the wrapped buffer is read, written or dropped by its owner.
    pub fn to_owned_grid(&self) -> PixelGrid<'static> {
        PixelGrid {
            width: self.width,
            height: self.height,
            store: PixelStore::Owned(self.pixels().to_vec()),
        }
    }

    /// Consume the grid and return its pixels.
    ///
    /// A wrapper copies the wrapped buffer out.
    pub fn into_vec(self) -> Vec<u32> {
        match self.store {
            PixelStore::Owned(v) => v,
            PixelStore::Wrapped(s) => s.to_vec(),
        }
    }
}

/// Copies the pixels into an owning grid.
///
/// The clone is typed with the same lifetime as `self`, so the borrow
/// checker still ties it to a wrapped buffer. See
/// [`PixelGrid::to_owned_grid`] for a lifetime-free copy.
impl Clone for PixelGrid<'_> {
    fn clone(&self) -> Self {
        self.to_owned_grid()
    }
}

/// Grids compare equal when their dimensions and pixels match, regardless
/// of whether they own or wrap their storage.
impl PartialEq for PixelGrid<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.pixels() == other.pixels()
    }
}

impl Eq for PixelGrid<'_> {}

impl fmt::Debug for PixelGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("wrapper", &self.is_wrapper())
            .finish_non_exhaustive()
    }
}
