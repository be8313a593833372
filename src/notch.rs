//! Angular notch carved into the rim of the region on its +x side.
//!
//! The region is assumed to approximate a circle inscribed in its bounding
//! box, so the radius estimate is half the smaller box extent. A pixel is
//! darkened when it is a mask member, its distance from the box centre lies
//! in `[r_inner, r]`, and its polar angle (0 along +x) is within the
//! half-angle. Pixels outside the mask are never touched.
use crate::image::ImageViewMut;
use crate::region::{BoundingBox, Mask};
use log::warn;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Value written into notch pixels.
pub const NOTCH_VALUE: u8 = 0;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NotchOptions {
    pub enabled: bool,
    /// Half-width of the wedge in degrees.
    pub half_angle_deg: f64,
    /// Notch depth as a fraction of the estimated radius, clamped to `[0, 1]`.
    pub depth_frac: f64,
}

impl Default for NotchOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            half_angle_deg: 2.0,
            depth_frac: 0.08,
        }
    }
}

/// Annular wedge derived from the bounding box for a single run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotchGeometry {
    pub center: Point2<f64>,
    pub radius: f64,
    pub inner_radius: f64,
    pub half_angle_rad: f64,
}

impl NotchGeometry {
    pub fn from_bbox(bbox: &BoundingBox, options: &NotchOptions) -> Self {
        if !(0.0..=1.0).contains(&options.depth_frac) {
            warn!(
                "notch depth fraction {} outside [0, 1], clamping",
                options.depth_frac
            );
        }
        let depth = options.depth_frac.clamp(0.0, 1.0);
        let radius = bbox.width().min(bbox.height()) as f64 / 2.0;
        Self {
            center: bbox.center(),
            radius,
            inner_radius: radius * (1.0 - depth),
            half_angle_rad: options.half_angle_deg.to_radians(),
        }
    }

    /// Whether pixel (x, y) falls inside the wedge, ignoring mask membership.
    #[inline]
    pub fn covers(&self, x: usize, y: usize) -> bool {
        let d = Point2::new(x as f64, y as f64) - self.center;
        let r2 = d.norm_squared();
        if r2 > self.radius * self.radius || r2 < self.inner_radius * self.inner_radius {
            return false;
        }
        d.y.atan2(d.x).abs() <= self.half_angle_rad
    }

    /// Inclusive pixel window `(x0, y0, x1, y1)` around the estimated circle,
    /// clipped to a `width × height` raster.
    pub fn scan_window(&self, width: usize, height: usize) -> (usize, usize, usize, usize) {
        let lo = |c: f64| (c - self.radius).floor().max(0.0) as usize;
        let hi = |c: f64, extent: usize| ((c + self.radius).ceil() as usize).min(extent - 1);
        (
            lo(self.center.x),
            lo(self.center.y),
            hi(self.center.x, width),
            hi(self.center.y, height),
        )
    }
}

/// Darken mask pixels covered by `geometry`. Returns how many were written.
pub fn carve_notch<I>(image: &mut I, mask: &Mask, geometry: &NotchGeometry) -> usize
where
    I: ImageViewMut<Pixel = u8>,
{
    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 {
        return 0;
    }
    let (x0, y0, x1, y1) = geometry.scan_window(w, h);
    let mut carved = 0usize;
    for y in y0..=y1 {
        let row = image.row_mut(y);
        for (x, px) in row.iter_mut().enumerate().take(x1 + 1).skip(x0) {
            if mask.contains(x, y) && geometry.covers(x, y) {
                *px = NOTCH_VALUE;
                carved += 1;
            }
        }
    }
    carved
}
