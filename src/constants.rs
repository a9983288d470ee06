//! Shared render constants for both icon generators.
//!
//! Per-design geometry (radii, angles, colors) lives next to each design in
//! `icons::marker` and `icons::glyph`; only the values common to the whole
//! pipeline are collected here.

// ============================================================================
// Render Pipeline Constants
// ============================================================================

/// Oversampled render size in pixels (square canvas)
pub const RENDER_SIZE: u32 = 720;

/// Final icon size in pixels (square)
pub const ICON_SIZE: u32 = 180;

/// Output file name, written to the current working directory
pub const ICON_FILE_NAME: &str = "icon-180.png";

// ============================================================================
// Geometry Constants
// ============================================================================

/// Arc subdivision count for corner fillets (segments per arc)
pub const ARC_SEGMENTS: u32 = 20;

// ============================================================================
// Glow Constants
// ============================================================================

/// Number of translucent glow layers drawn behind each icon shape
pub const GLOW_LAYERS: u32 = 20;

/// Radius growth per glow layer in pixels
pub const GLOW_STEP_PX: f32 = 3.0;

/// Alpha of the outermost glow layer (inner layers scale down linearly)
pub const GLOW_MAX_ALPHA: u32 = 4;
