//! Parameter types configuring a fill run.
//!
//! Defaults reproduce the classic look: pure-white detection, a 150→255
//! ramp, no noise, notch disabled.

use crate::gradient::GradientOptions;
use crate::notch::NotchOptions;
use serde::{Deserialize, Serialize};

/// Immutable configuration for one [`GradientFill`](super::GradientFill) run.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FillParams {
    /// Pixels with intensity `>=` this value form the region.
    pub white_threshold: u8,
    /// Accepted for compatibility; the gradient domain is always square.
    pub make_square: bool,
    /// Ramp endpoints and noise.
    pub gradient: GradientOptions,
    /// Optional rim notch.
    pub notch: NotchOptions,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            white_threshold: 255,
            make_square: true,
            gradient: GradientOptions::default(),
            notch: NotchOptions::default(),
        }
    }
}
