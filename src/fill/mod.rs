//! Masked gradient fill orchestrating the region-to-raster pipeline.
//!
//! Overview
//! - Scans the raster once and snapshots every pixel at or above the white
//!   threshold into a membership mask, together with its bounding box.
//! - Centres a square gradient domain on the box, clipped to the raster.
//! - Writes a left-to-right ramp (optionally with block noise) into every
//!   domain pixel that was a mask member; all other pixels keep their value.
//! - Optionally darkens a thin wedge of the rim on the +x side.
//!
//! Modules
//! - [`params`] – configuration record handed to the pipeline.
//! - `pipeline` – the [`GradientFill`] runner and [`fill_region`] helper.
//! - [`writeback`] – masked write of synthesized values.
//!
//! The mask is taken before any write and never refreshed, so a pixel
//! recoloured by the ramp (or carved by the notch) keeps its membership.

pub mod params;
mod pipeline;
pub mod writeback;

pub use params::FillParams;
pub use pipeline::{fill_region, GradientFill};
