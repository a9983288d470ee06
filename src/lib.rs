//! icongen - procedural generator for the project's touch icons
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Geometry (outlines, fillets, arcs)      │
//! │                  ↓                       │
//! │  Raster (tiny-skia fills, masks) @720px  │
//! │                  ↓                       │
//! │  Lanczos downscale → 180px RGB PNG       │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Each icon is drawn oversized and downscaled once; the downscale is the
//! only anti-aliasing pass that matters for the final pixels.

pub mod constants;
pub mod geometry;
pub mod icons;
pub mod raster;
