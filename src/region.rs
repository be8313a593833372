//! Detection of the originally-white region.
//!
//! A single row-major scan builds a membership [`Mask`] of every pixel whose
//! intensity is at or above the threshold, and tracks the tightest
//! [`BoundingBox`] around those pixels. The mask is a snapshot: it is never
//! recomputed, so later writes to the raster cannot change membership.
use crate::error::FillError;
use crate::image::ImageView;
use nalgebra::Point2;
use serde::Serialize;

/// Tightest inclusive axis-aligned box around all mask members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl BoundingBox {
    fn at(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }

    /// Box midpoint, inclusive of both edges (may land on a half pixel).
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min_x + self.max_x) as f64 / 2.0,
            (self.min_y + self.max_y) as f64 / 2.0,
        )
    }
}

/// Boolean membership grid sized like the source raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    w: usize,
    h: usize,
    bits: Vec<bool>,
    count: usize,
}

impl Mask {
    /// Membership test; coordinates outside the raster are never members.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.w && y < self.h && self.bits[y * self.w + x]
    }

    /// Number of member pixels.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Mask plus bounding box produced by [`detect_region`].
#[derive(Clone, Debug)]
pub struct Region {
    pub mask: Mask,
    pub bbox: BoundingBox,
}

/// Scan every pixel once and collect those with intensity `>= threshold`.
///
/// Fails with [`FillError::EmptyRegion`] when nothing qualifies; the image is
/// only read.
pub fn detect_region<I>(image: &I, threshold: u8) -> Result<Region, FillError>
where
    I: ImageView<Pixel = u8>,
{
    let (w, h) = (image.width(), image.height());
    let mut bits = vec![false; w * h];
    let mut count = 0usize;
    let mut bbox: Option<BoundingBox> = None;

    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            if px < threshold {
                continue;
            }
            bits[y * w + x] = true;
            count += 1;
            match bbox.as_mut() {
                Some(b) => b.include(x, y),
                None => bbox = Some(BoundingBox::at(x, y)),
            }
        }
    }

    let bbox = bbox.ok_or(FillError::EmptyRegion { threshold })?;
    Ok(Region {
        mask: Mask { w, h, bits, count },
        bbox,
    })
}
