//! Packed-color lane helpers
//!
//! # Pixel format
//!
//! Pixels are packed as `0xAARRGGBB` (alpha in the MSB). Apart from locating
//! the alpha lane for premultiplied blending, the three color lanes are
//! treated uniformly and never interpreted as a particular color space.

/// Shift amounts for extracting lanes
pub const ALPHA_SHIFT: u32 = 24;
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

/// Shifts of the three color lanes, in `[red, green, blue]` order.
const COLOR_SHIFTS: [u32; 3] = [RED_SHIFT, GREEN_SHIFT, BLUE_SHIFT];

/// Extract alpha component from a packed pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel >> ALPHA_SHIFT) & 0xff) as u8
}

/// Extract red component from a packed pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a packed pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a packed pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Compose a packed pixel from its four lanes.
#[inline]
pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << ALPHA_SHIFT)
        | ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
}

/// Compose an opaque packed pixel (alpha = 255).
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_argb(255, r, g, b)
}

/// Extract the color lanes as `[red, green, blue]`.
#[inline]
fn color_lanes(pixel: u32) -> [u8; 3] {
    COLOR_SHIFTS.map(|shift| ((pixel >> shift) & 0xff) as u8)
}

#[inline]
fn pack(a: u8, lanes: [u8; 3]) -> u32 {
    compose_argb(a, lanes[0], lanes[1], lanes[2])
}

/// Integer mean, rounding half up.
#[inline]
fn rounded_div(sum: u64, count: u64) -> u8 {
    ((sum + count / 2) / count) as u8
}

/// Running per-lane sums for averaging a set of packed pixels.
///
/// Keeps both the plain lane sums and the alpha-weighted color sums so the
/// same pass over the pixels can produce either kind of mean.
#[derive(Debug, Clone, Default)]
pub struct LaneAccumulator {
    count: u64,
    alpha_sum: u64,
    color_sums: [u64; 3],
    weighted_sums: [u64; 3],
}

impl LaneAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pixel.
    #[inline]
    pub fn add(&mut self, pixel: u32) {
        let a = alpha(pixel) as u64;
        self.count += 1;
        self.alpha_sum += a;
        for (i, lane) in color_lanes(pixel).into_iter().enumerate() {
            self.color_sums[i] += lane as u64;
            self.weighted_sums[i] += lane as u64 * a;
        }
    }

    /// Produce the mean pixel.
    ///
    /// With `premultiply`, each color lane is weighted by its pixel's alpha
    /// and the result alpha is the plain mean of alphas. A set whose alphas
    /// are all zero falls back to the plain color mean.
    ///
    /// # Panics
    ///
    /// Panics if no pixel was added.
    pub fn mean(&self, premultiply: bool) -> u32 {
        assert!(self.count > 0, "mean of an empty pixel set");
        let a = rounded_div(self.alpha_sum, self.count);
        let lanes = if premultiply && self.alpha_sum > 0 {
            self.weighted_sums.map(|sum| rounded_div(sum, self.alpha_sum))
        } else {
            self.color_sums.map(|sum| rounded_div(sum, self.count))
        };
        pack(a, lanes)
    }
}

#[inline]
fn round_lane(v: f64) -> u8 {
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Linearly interpolate between two packed pixels.
///
/// `t` is the weight of `p1` and is expected in `[0, 1]`. With
/// `premultiply`, color lanes are blended alpha-weighted, matching the
/// convention of [`LaneAccumulator::mean`].
pub fn lerp(p0: u32, p1: u32, t: f64, premultiply: bool) -> u32 {
    let s = 1.0 - t;
    let a0 = alpha(p0) as f64;
    let a1 = alpha(p1) as f64;
    let a = a0 * s + a1 * t;
    let c0 = color_lanes(p0);
    let c1 = color_lanes(p1);

    let mut lanes = [0u8; 3];
    for i in 0..3 {
        let v0 = c0[i] as f64;
        let v1 = c1[i] as f64;
        lanes[i] = if premultiply && a > 0.0 {
            round_lane((v0 * a0 * s + v1 * a1 * t) / a)
        } else {
            round_lane(v0 * s + v1 * t)
        };
    }
    pack(round_lane(a), lanes)
}
