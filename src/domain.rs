//! Square gradient domain centred on the detected region.
//!
//! The ramp spans a square rather than the raw bounding box so that the
//! gradient is symmetric for round regions. The square side is the larger
//! box extent, shrunk to fit the raster, and the origin is clamped so the
//! square never leaves the image.
use crate::gradient::round_half_up;
use crate::region::BoundingBox;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientDomain {
    pub left: usize,
    pub top: usize,
    pub side: usize,
}

impl GradientDomain {
    /// Build the domain for `bbox` inside a `width × height` raster.
    pub fn from_bbox(bbox: &BoundingBox, width: usize, height: usize) -> Self {
        let side = bbox.width().max(bbox.height()).min(width).min(height);
        let center = bbox.center();
        let half = side as f64 / 2.0;
        let left = clamp_origin(round_half_up(center.x - half), side, width);
        let top = clamp_origin(round_half_up(center.y - half), side, height);
        Self { left, top, side }
    }

    #[inline]
    pub fn right(&self) -> usize {
        self.left + self.side - 1
    }

    #[inline]
    pub fn bottom(&self) -> usize {
        self.top + self.side - 1
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.left..=self.right()).contains(&x) && (self.top..=self.bottom()).contains(&y)
    }
}

// Negative origin goes to 0 first, then the far edge is pulled back inside.
fn clamp_origin(origin: f64, side: usize, extent: usize) -> usize {
    let mut origin = origin.max(0.0) as usize;
    if origin + side > extent {
        origin = extent - side;
    }
    origin
}
