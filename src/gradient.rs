//! Per-pixel value synthesis: a left-to-right linear ramp across the gradient
//! domain, optionally perturbed by deterministic block noise.
//!
//! Ramp
//! - `t = (x - left) / (side - 1)`, with `t = 0` for a one-pixel domain.
//! - `value = round(gray_min + t · (gray_max - gray_min))`.
//!
//! Noise
//! - The raster is tiled into `block × block` cells addressed by absolute
//!   pixel coordinates. Each cell gets a value in `[-1, 1]` from an integer
//!   multiply/xor-shift hash of its cell coordinates, scaled by the level's
//!   amplitude and added to the ramp before a second rounding.
//! - The hash is a pure function, so runs are bit-for-bit reproducible.
//!
//! Rounding is half-up (`floor(v + 0.5)`) everywhere; results are clamped to
//! `[0, 255]`.
use crate::domain::GradientDomain;
use log::warn;
use serde::{Deserialize, Serialize};

/// Noise block edge length per level.
pub const BLOCK_BY_LEVEL: [usize; 5] = [1, 2, 4, 8, 12];
/// Noise amplitude (gray levels) per level.
pub const AMPL_BY_LEVEL: [f64; 5] = [0.0, 6.0, 12.0, 18.0, 24.0];
/// Highest supported noise level; larger settings are clamped.
pub const MAX_NOISE_LEVEL: u8 = 4;

/// Gradient endpoints and noise setting.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GradientOptions {
    /// Gray value at the left edge of the domain.
    pub gray_min: u8,
    /// Gray value at the right edge of the domain.
    pub gray_max: u8,
    /// Blocky noise level in `0..=4` (0 disables noise).
    pub noise_level: u8,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            gray_min: 150,
            gray_max: 255,
            noise_level: 0,
        }
    }
}

#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Avalanche hash of a block coordinate pair.
#[inline]
pub fn block_hash(bx: u32, by: u32) -> u32 {
    let mut n = bx
        .wrapping_mul(374_761_393)
        .wrapping_add(by.wrapping_mul(668_265_263));
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    n ^ (n >> 16)
}

/// [`block_hash`] mapped to `[-1, 1]`.
#[inline]
pub fn block_hash_signed(bx: u32, by: u32) -> f64 {
    block_hash(bx, by) as f64 / u32::MAX as f64 * 2.0 - 1.0
}

/// Block size and amplitude for one noise level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockNoise {
    pub block: usize,
    pub amplitude: f64,
}

impl BlockNoise {
    /// Look up the level table, clamping `level` to [`MAX_NOISE_LEVEL`].
    pub fn for_level(level: u8) -> Self {
        let idx = level.min(MAX_NOISE_LEVEL) as usize;
        Self {
            block: BLOCK_BY_LEVEL[idx],
            amplitude: AMPL_BY_LEVEL[idx],
        }
    }

    pub fn is_active(&self) -> bool {
        self.amplitude > 0.0
    }

    /// Signed offset for the block containing pixel (x, y).
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> f64 {
        let bx = (x / self.block) as u32;
        let by = (y / self.block) as u32;
        block_hash_signed(bx, by) * self.amplitude
    }
}

/// Computes the fill value for any pixel of one gradient domain.
#[derive(Clone, Debug)]
pub struct ValueSynthesizer {
    left: usize,
    span: f64,
    gray_min: f64,
    gray_range: f64,
    noise: BlockNoise,
}

impl ValueSynthesizer {
    pub fn new(domain: &GradientDomain, options: &GradientOptions) -> Self {
        if options.noise_level > MAX_NOISE_LEVEL {
            warn!(
                "noise level {} out of range, using {}",
                options.noise_level, MAX_NOISE_LEVEL
            );
        }
        let gray_min = options.gray_min as f64;
        Self {
            left: domain.left,
            span: domain.side.saturating_sub(1) as f64,
            gray_min,
            gray_range: options.gray_max as f64 - gray_min,
            noise: BlockNoise::for_level(options.noise_level),
        }
    }

    /// Normalised horizontal position in `[0, 1]`.
    #[inline]
    pub fn t(&self, x: usize) -> f64 {
        if self.span == 0.0 {
            return 0.0;
        }
        x.saturating_sub(self.left) as f64 / self.span
    }

    /// Noise-free ramp value at column `x`, rounded.
    #[inline]
    pub fn ramp(&self, x: usize) -> f64 {
        round_half_up(self.gray_min + self.t(x) * self.gray_range)
    }

    /// Final clamped value for pixel (x, y).
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> u8 {
        let mut v = self.ramp(x);
        if self.noise.is_active() {
            v = round_half_up(v + self.noise.offset(x, y));
        }
        v.clamp(0.0, 255.0) as u8
    }
}
