#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fill;
pub mod image;

// Pipeline stages, public for tools and tests.
pub mod domain;
pub mod gradient;
pub mod notch;
pub mod region;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::FillReport;
pub use crate::error::FillError;
pub use crate::fill::{fill_region, FillParams, GradientFill};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use gradient_fill::prelude::*;
///
/// let (w, h) = (8usize, 8usize);
/// let mut gray = GrayImageU8::filled(w, h, 255);
/// let report = GradientFill::new(FillParams::default())
///     .process(&mut gray)
///     .expect("white image has a region");
/// assert_eq!(report.pixels_filled, w * h);
/// assert_eq!(gray.get(0, 3), 150);
/// assert_eq!(gray.get(7, 3), 255);
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8, ImageU8Mut};
    pub use crate::{FillError, FillParams, FillReport, GradientFill};
}
