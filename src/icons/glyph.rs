//! The hexagonal "C" glyph icon
//!
//! A rounded-hexagon badge with a double border and a "C" drawn as a thick
//! round-capped circular arc, gap facing right. Same dark-background,
//! layered-glow treatment as the marker icon, in a cyan palette.

use anyhow::Result;
use image::RgbImage;

use crate::constants::{GLOW_LAYERS, GLOW_MAX_ALPHA, GLOW_STEP_PX, ICON_SIZE, RENDER_SIZE};
use crate::geometry::{arc_points, polar, rounded_polygon, Point};
use crate::raster::{Canvas, Rgb};

/// Background color
const BG: Rgb = (10, 12, 20);

/// Border and glow color
const ACCENT: Rgb = (56, 189, 248);

/// Glyph stroke color
const GLYPH: Rgb = (236, 242, 255);

/// Canvas center in pixels
const CENTER_X: f32 = RENDER_SIZE as f32 / 2.0;
const CENTER_Y: f32 = RENDER_SIZE as f32 / 2.0;

/// Hexagon circumradius in pixels
const HEX_RADIUS: f32 = 290.0;

/// Corner fillet radius in pixels
const CORNER_ROUND: f32 = 40.0;

/// Vertex angles in degrees, pointy-top hexagon
const VERTEX_ANGLES: [f32; 6] = [-90.0, -30.0, 30.0, 90.0, 150.0, 210.0];

/// Outer border thickness in pixels
const OUTER_BORDER: f32 = 34.0;

/// Inset of the secondary border from the outer edge in pixels
const INNER_BORDER_INSET: f32 = 56.0;

/// Secondary border thickness in pixels
const INNER_BORDER: f32 = 14.0;

/// Alpha of the secondary border (the accent ring behind the glyph)
const INNER_BORDER_ALPHA: u8 = 90;

/// "C" arc radius in pixels
const GLYPH_RADIUS: f32 = 150.0;

/// "C" arc start angle in degrees (top of the gap, gap faces right)
const GLYPH_START_DEG: f32 = 40.0;

/// "C" arc end angle in degrees (bottom of the gap)
const GLYPH_END_DEG: f32 = 320.0;

/// "C" arc subdivision (segments)
const GLYPH_SEGMENTS: u32 = 48;

/// "C" stroke width in pixels
const GLYPH_STROKE: f32 = 56.0;

fn hexagon_vertices(radius: f32) -> Vec<Point> {
    VERTEX_ANGLES
        .iter()
        .map(|&a| polar(CENTER_X, CENTER_Y, a, radius))
        .collect()
}

fn rounded_hexagon(radius: f32) -> Vec<Point> {
    rounded_polygon(&hexagon_vertices(radius), CORNER_ROUND)
}

/// Render the glyph icon, downscaled to its final size.
pub fn render() -> Result<RgbImage> {
    let mut canvas = Canvas::new(RENDER_SIZE, BG)?;

    // Glow: sharp hexagons growing outward with fading alpha
    for g in (1..=GLOW_LAYERS).rev() {
        let alpha = (GLOW_MAX_ALPHA * g / GLOW_LAYERS) as u8;
        let verts = hexagon_vertices(HEX_RADIUS + g as f32 * GLOW_STEP_PX);
        canvas.fill_polygon(&verts, (ACCENT.0, ACCENT.1, ACCENT.2, alpha));
    }

    // Border layering: each accent fill is carved back to a ring by the
    // next background fill
    canvas.fill_polygon(&rounded_hexagon(HEX_RADIUS), (ACCENT.0, ACCENT.1, ACCENT.2, 255));
    canvas.fill_polygon(&rounded_hexagon(HEX_RADIUS - OUTER_BORDER), (BG.0, BG.1, BG.2, 255));
    canvas.fill_polygon(
        &rounded_hexagon(HEX_RADIUS - INNER_BORDER_INSET),
        (ACCENT.0, ACCENT.1, ACCENT.2, INNER_BORDER_ALPHA),
    );
    canvas.fill_polygon(
        &rounded_hexagon(HEX_RADIUS - INNER_BORDER_INSET - INNER_BORDER),
        (BG.0, BG.1, BG.2, 255),
    );

    // The "C": one thick round-capped arc with the gap facing right
    let arc = arc_points(
        Point::new(CENTER_X, CENTER_Y),
        GLYPH_RADIUS,
        GLYPH_START_DEG,
        GLYPH_END_DEG,
        GLYPH_SEGMENTS,
    );
    canvas.stroke_polyline(&arc, GLYPH_STROKE, GLYPH);

    canvas.into_icon(ICON_SIZE)
}
