//! Single-channel 8-bit raster access used by the fill pipeline.
//!
//! The pipeline only needs row access through [`ImageView`] and
//! [`ImageViewMut`]; hosts can hand in a borrowed strided buffer
//! ([`ImageU8Mut`]) or an owned one ([`io::GrayImageU8`]).
pub mod io;
pub mod traits;
pub mod u8;

pub use self::io::GrayImageU8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{ImageU8, ImageU8Mut};
