//! Fill pipeline driving detection, domain construction, writeback and the
//! optional notch, strictly in that order.
//!
//! Typical usage:
//! ```no_run
//! use gradient_fill::image::GrayImageU8;
//! use gradient_fill::{FillParams, GradientFill};
//!
//! # fn example(mut gray: GrayImageU8) -> Result<(), gradient_fill::FillError> {
//! let fill = GradientFill::new(FillParams::default());
//! let report = fill.process(&mut gray)?;
//! println!("filled {} px", report.pixels_filled);
//! # Ok(())
//! # }
//! ```
use super::params::FillParams;
use super::writeback::write_gradient;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{FillReport, NotchReport, TimingBreakdown};
use crate::domain::GradientDomain;
use crate::error::FillError;
use crate::gradient::{ValueSynthesizer, MAX_NOISE_LEVEL};
use crate::image::ImageViewMut;
use crate::notch::{carve_notch, NotchGeometry};
use crate::region::detect_region;
use log::debug;
use std::time::Instant;

/// Stateless runner holding one immutable parameter record.
#[derive(Clone, Debug, Default)]
pub struct GradientFill {
    params: FillParams,
}

impl GradientFill {
    pub fn new(params: FillParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FillParams {
        &self.params
    }

    /// Recolour the white region of `image` in place.
    ///
    /// On [`FillError::EmptyRegion`] the image is left untouched.
    pub fn process<I>(&self, image: &mut I) -> Result<FillReport, FillError>
    where
        I: ImageViewMut<Pixel = u8>,
    {
        let t0 = Instant::now();
        let params = &self.params;
        let (width, height) = (image.width(), image.height());
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let region = match detect_region(&*image, params.white_threshold) {
            Ok(region) => region,
            Err(err) => {
                debug!("GradientFill::process {err}");
                return Err(err);
            }
        };
        timings.record("detect", stage);
        debug!(
            "GradientFill::process mask={} px bbox={:?}",
            region.mask.len(),
            region.bbox
        );

        let stage = Instant::now();
        if !params.make_square {
            debug!("GradientFill::process make_square=false ignored, domain is always square");
        }
        let domain = GradientDomain::from_bbox(&region.bbox, width, height);
        timings.record("domain", stage);
        debug!("GradientFill::process domain={domain:?}");

        let stage = Instant::now();
        let synth = ValueSynthesizer::new(&domain, &params.gradient);
        let pixels_filled = write_gradient(image, &region.mask, &domain, &synth);
        timings.record("writeback", stage);
        debug!("GradientFill::process wrote {pixels_filled} px");

        let notch = if params.notch.enabled {
            let stage = Instant::now();
            let geometry = NotchGeometry::from_bbox(&region.bbox, &params.notch);
            let pixels_carved = carve_notch(image, &region.mask, &geometry);
            timings.record("notch", stage);
            debug!("GradientFill::process notch {geometry:?} carved {pixels_carved} px");
            Some(NotchReport {
                geometry,
                pixels_carved,
            })
        } else {
            None
        };

        let latency_ms = elapsed_ms(t0);
        timings.total_ms = latency_ms;
        Ok(FillReport {
            width,
            height,
            white_threshold: params.white_threshold,
            mask_pixels: region.mask.len(),
            bbox: region.bbox,
            domain,
            gray_min: params.gradient.gray_min,
            gray_max: params.gradient.gray_max,
            noise_level: params.gradient.noise_level.min(MAX_NOISE_LEVEL),
            pixels_filled,
            notch,
            timings,
            latency_ms,
        })
    }
}

/// One-shot helper equivalent to `GradientFill::new(params.clone()).process(image)`.
pub fn fill_region<I>(image: &mut I, params: &FillParams) -> Result<FillReport, FillError>
where
    I: ImageViewMut<Pixel = u8>,
{
    GradientFill::new(params.clone()).process(image)
}
