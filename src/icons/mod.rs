//! The icon designs
//!
//! Each submodule is one self-contained design: named geometry constants,
//! a `render()` that returns the final downscaled RGB image, and nothing
//! else. Shared machinery lives in `geometry` and `raster`.

pub mod glyph;
pub mod marker;
