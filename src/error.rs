use thiserror::Error;

/// Failures that abort a fill before the raster is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    /// No pixel reached the whiteness threshold.
    #[error("no white region detected at threshold >= {threshold}; lower the white threshold")]
    EmptyRegion { threshold: u8 },
}
