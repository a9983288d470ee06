//! The triangular marker icon
//!
//! A rounded triangle pointing up, with three trapezoidal cutouts running
//! from each edge midpoint toward the center and a circular cutout at the
//! center. The cutouts are wide at the edge and narrow toward the center,
//! leaving one thick arm at each vertex. Rendered in pink over a dark
//! background with a subtle layered glow.

use anyhow::Result;
use image::RgbImage;

use crate::constants::{GLOW_LAYERS, GLOW_MAX_ALPHA, GLOW_STEP_PX, ICON_SIZE, RENDER_SIZE};
use crate::geometry::{polar, rounded_polygon, Point};
use crate::raster::{Canvas, MaskLayer, Rgb};

/// Background color
const BG: Rgb = (10, 10, 18);

/// Marker fill color
const PINK: Rgb = (233, 30, 140);

/// Fill inside the cutouts (slightly lighter than the background)
const INNER_BG: Rgb = (16, 13, 24);

/// Canvas center x in pixels
const CENTER_X: f32 = RENDER_SIZE as f32 / 2.0;

/// Canvas center y in pixels (nudged down so the triangle sits centered)
const CENTER_Y: f32 = RENDER_SIZE as f32 / 2.0 + 8.0;

/// Triangle circumradius in pixels
const TRI_RADIUS: f32 = 275.0;

/// Corner fillet radius in pixels
const CORNER_ROUND: f32 = 60.0;

/// Vertex angles in degrees: up, bottom-right, bottom-left
const VERTEX_ANGLES: [f32; 3] = [-90.0, 30.0, 150.0];

/// Edge midpoint angles in degrees
const MID_ANGLES: [f32; 3] = [-30.0, 90.0, 210.0];

/// Notch half-width at the triangle edge in pixels (wide end)
const NOTCH_OUTER_HALF_WIDTH: f32 = 120.0;

/// Notch half-width near the center in pixels (narrow end)
const NOTCH_INNER_HALF_WIDTH: f32 = 42.0;

/// Notch depth from the edge toward the center in pixels
const NOTCH_DEPTH: f32 = 170.0;

/// Center circle cutout radius in pixels
const CENTER_CIRCLE_RADIUS: f32 = 60.0;

/// Trapezoidal notch pointing from one triangle edge midpoint toward the
/// center: wide at the edge, narrow at the inner end.
fn notch_outline(mid_angle_deg: f32) -> Vec<Point> {
    let a = mid_angle_deg.to_radians();
    // Distance from the center to the edge midpoint of the circumscribed
    // triangle is R * cos(30°)
    let mid = polar(
        CENTER_X,
        CENTER_Y,
        mid_angle_deg,
        TRI_RADIUS * 30f32.to_radians().cos(),
    );

    // Outward normal and edge tangent
    let nx = a.cos();
    let ny = a.sin();
    let tx = -ny;
    let ty = nx;

    let o1 = Point::new(mid.x + tx * NOTCH_OUTER_HALF_WIDTH, mid.y + ty * NOTCH_OUTER_HALF_WIDTH);
    let o2 = Point::new(mid.x - tx * NOTCH_OUTER_HALF_WIDTH, mid.y - ty * NOTCH_OUTER_HALF_WIDTH);

    let in_pt = Point::new(mid.x - nx * NOTCH_DEPTH, mid.y - ny * NOTCH_DEPTH);
    let i1 = Point::new(in_pt.x + tx * NOTCH_INNER_HALF_WIDTH, in_pt.y + ty * NOTCH_INNER_HALF_WIDTH);
    let i2 = Point::new(in_pt.x - tx * NOTCH_INNER_HALF_WIDTH, in_pt.y - ty * NOTCH_INNER_HALF_WIDTH);

    vec![o1, o2, i2, i1]
}

fn triangle_vertices(radius: f32) -> Vec<Point> {
    VERTEX_ANGLES
        .iter()
        .map(|&a| polar(CENTER_X, CENTER_Y, a, radius))
        .collect()
}

/// Render the marker icon, downscaled to its final size.
pub fn render() -> Result<RgbImage> {
    // Outer triangle coverage
    let mut tri_mask = MaskLayer::new(RENDER_SIZE)?;
    tri_mask.fill_polygon(&rounded_polygon(&triangle_vertices(TRI_RADIUS), CORNER_ROUND));

    // Cutout coverage: three notches plus the center circle
    let mut notch_mask = MaskLayer::new(RENDER_SIZE)?;
    for &mid_angle in &MID_ANGLES {
        notch_mask.fill_polygon(&notch_outline(mid_angle));
    }
    notch_mask.fill_circle(Point::new(CENTER_X, CENTER_Y), CENTER_CIRCLE_RADIUS);

    // Marker = triangle minus cutouts; the cutout interiors get their own
    // fill, but only where they overlap the triangle
    let marker_mask = tri_mask.subtract(&notch_mask);
    let inner_mask = tri_mask.intersect(&notch_mask);

    let mut canvas = Canvas::new(RENDER_SIZE, BG)?;

    // Subtle glow: sharp triangles growing outward with fading alpha
    for g in (1..=GLOW_LAYERS).rev() {
        let alpha = (GLOW_MAX_ALPHA * g / GLOW_LAYERS) as u8;
        let verts = triangle_vertices(TRI_RADIUS + g as f32 * GLOW_STEP_PX);
        canvas.fill_polygon(&verts, (PINK.0, PINK.1, PINK.2, alpha));
    }

    canvas.paste(PINK, &marker_mask);
    canvas.paste(INNER_BG, &inner_mask);

    canvas.into_icon(ICON_SIZE)
}
