//! Run report returned by the fill pipeline.
//!
//! [`FillReport`] summarises what the pipeline detected and wrote, and is
//! serialisable so the binary can dump it as JSON next to the output image.

pub mod report;
pub mod timing;

pub use report::{FillReport, NotchReport};
pub use timing::{StageTiming, TimingBreakdown};
