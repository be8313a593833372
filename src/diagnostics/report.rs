use super::timing::TimingBreakdown;
use crate::domain::GradientDomain;
use crate::notch::NotchGeometry;
use crate::region::BoundingBox;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotchReport {
    pub geometry: NotchGeometry,
    pub pixels_carved: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillReport {
    pub width: usize,
    pub height: usize,
    pub white_threshold: u8,
    /// Pixels that met the threshold before any write.
    pub mask_pixels: usize,
    pub bbox: BoundingBox,
    pub domain: GradientDomain,
    pub gray_min: u8,
    pub gray_max: u8,
    /// Noise level actually applied (after clamping).
    pub noise_level: u8,
    /// Mask pixels recoloured by the ramp.
    pub pixels_filled: usize,
    pub notch: Option<NotchReport>,
    pub timings: TimingBreakdown,
    pub latency_ms: f64,
}
