//! Raster canvas and mask composition on top of tiny-skia
//!
//! The drawing library stays a boundary: this module only adapts outlines
//! from `geometry` into tiny-skia paths, wraps the handful of composition
//! operations the icons need, and hands the oversampled result to the
//! `image` crate for the Lanczos downscale and RGB conversion.
//!
//! Masks follow the classic single-channel model: a `MaskLayer` is drawn
//! white-on-transparent, combined with blend modes (`DestinationOut` for
//! subtraction, `DestinationIn` for multiplication), and finally used as
//! per-pixel coverage when pasting a solid color onto the canvas.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::RgbImage;
use tiny_skia::{
    BlendMode, Color, FillRule, LineCap, LineJoin, Mask, MaskType, Paint, Path, PathBuilder,
    Pixmap, PixmapPaint, Rect, Stroke, Transform,
};

use crate::geometry::Point;

/// Opaque RGB color as 8-bit channels
pub type Rgb = (u8, u8, u8);

/// RGBA color as 8-bit channels (alpha unpremultiplied)
pub type Rgba = (u8, u8, u8, u8);

/// Build a closed tiny-skia path from an outline.
///
/// Returns `None` for degenerate outlines (fewer than 2 distinct points);
/// callers skip the fill in that case, matching the no-error policy for
/// visual output.
fn outline_path(outline: &[Point]) -> Option<Path> {
    if outline.len() < 2 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(outline[0].x, outline[0].y);
    for p in &outline[1..] {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

/// Open polyline path for stroking (arcs, glyph strokes).
fn polyline_path(points: &[Point]) -> Option<Path> {
    if points.len() < 2 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x, points[0].y);
    for p in &points[1..] {
        pb.line_to(p.x, p.y);
    }
    pb.finish()
}

fn solid_paint(r: u8, g: u8, b: u8, a: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Single-channel coverage layer, drawn white-on-transparent.
#[derive(Clone)]
pub struct MaskLayer {
    pixmap: Pixmap,
}

impl MaskLayer {
    /// Allocate an empty (fully transparent) square mask layer.
    pub fn new(size: u32) -> Result<Self> {
        let pixmap = Pixmap::new(size, size).context("failed to allocate mask layer")?;
        Ok(Self { pixmap })
    }

    /// Fill a closed outline into the mask at full coverage.
    pub fn fill_polygon(&mut self, outline: &[Point]) {
        if let Some(path) = outline_path(outline) {
            self.pixmap.fill_path(
                &path,
                &solid_paint(255, 255, 255, 255),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Fill a circle into the mask at full coverage.
    pub fn fill_circle(&mut self, center: Point, radius: f32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.pixmap.fill_path(
                &path,
                &solid_paint(255, 255, 255, 255),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Coverage of `self` minus coverage of `other`.
    pub fn subtract(&self, other: &MaskLayer) -> MaskLayer {
        self.combine(other, BlendMode::DestinationOut)
    }

    /// Coverage of `self` multiplied by coverage of `other` (intersection).
    pub fn intersect(&self, other: &MaskLayer) -> MaskLayer {
        self.combine(other, BlendMode::DestinationIn)
    }

    fn combine(&self, other: &MaskLayer, blend_mode: BlendMode) -> MaskLayer {
        let mut out = self.clone();
        let paint = PixmapPaint {
            blend_mode,
            ..PixmapPaint::default()
        };
        out.pixmap.draw_pixmap(
            0,
            0,
            other.pixmap.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
        out
    }

    /// Coverage at a pixel, 0 (outside) to 255 (fully covered).
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        self.pixmap
            .pixel(x, y)
            .map(|p| p.alpha())
            .unwrap_or(0)
    }

    fn to_mask(&self) -> Mask {
        Mask::from_pixmap(self.pixmap.as_ref(), MaskType::Alpha)
    }
}

/// Opaque square RGBA canvas at the oversampled render size.
pub struct Canvas {
    pixmap: Pixmap,
    size: u32,
}

impl Canvas {
    /// Allocate a canvas filled with a solid background color.
    pub fn new(size: u32, background: Rgb) -> Result<Self> {
        let mut pixmap = Pixmap::new(size, size).context("failed to allocate canvas")?;
        let (r, g, b) = background;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));
        Ok(Self { pixmap, size })
    }

    /// Fill a closed outline with a solid (possibly translucent) color,
    /// anti-aliased, nonzero winding.
    pub fn fill_polygon(&mut self, outline: &[Point], color: Rgba) {
        let (r, g, b, a) = color;
        if let Some(path) = outline_path(outline) {
            self.pixmap.fill_path(
                &path,
                &solid_paint(r, g, b, a),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Stroke an open polyline with round caps and joins.
    pub fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Rgb) {
        let (r, g, b) = color;
        if let Some(path) = polyline_path(points) {
            let stroke = Stroke {
                width,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &solid_paint(r, g, b, 255),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }

    /// Paste a solid color onto the canvas through a coverage mask.
    pub fn paste(&mut self, color: Rgb, mask: &MaskLayer) {
        let (r, g, b) = color;
        let rect = match Rect::from_xywh(0.0, 0.0, self.size as f32, self.size as f32) {
            Some(rect) => rect,
            None => return,
        };
        self.pixmap.fill_rect(
            rect,
            &solid_paint(r, g, b, 255),
            Transform::identity(),
            Some(&mask.to_mask()),
        );
    }

    /// Color at a pixel as straight RGB (the canvas is always opaque).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixmap.pixel(x, y).map(|p| (p.red(), p.green(), p.blue()))
    }

    /// Downscale to the final icon size and convert to RGB.
    ///
    /// The canvas stays fully opaque throughout composition, so the
    /// premultiplied pixmap bytes can be reinterpreted as straight RGBA
    /// before the resample.
    pub fn into_icon(self, final_size: u32) -> Result<RgbImage> {
        let size = self.size;
        let rgba = image::RgbaImage::from_raw(size, size, self.pixmap.take())
            .context("canvas buffer has unexpected length")?;
        let resized = image::imageops::resize(&rgba, final_size, final_size, FilterType::Lanczos3);
        Ok(image::DynamicImage::ImageRgba8(resized).to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_outline(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    #[test]
    fn test_mask_subtract_clears_hole() {
        let mut outer = MaskLayer::new(64).unwrap();
        outer.fill_polygon(&square_outline(8.0, 8.0, 56.0, 56.0));
        let mut inner = MaskLayer::new(64).unwrap();
        inner.fill_polygon(&square_outline(24.0, 24.0, 40.0, 40.0));

        let cut = outer.subtract(&inner);
        assert_eq!(cut.coverage(32, 32), 0, "hole should be cleared");
        assert_eq!(cut.coverage(12, 12), 255, "rim should survive");
        assert_eq!(cut.coverage(2, 2), 0, "outside stays empty");
    }

    #[test]
    fn test_mask_intersect_keeps_overlap_only() {
        let mut a = MaskLayer::new(64).unwrap();
        a.fill_polygon(&square_outline(0.0, 0.0, 40.0, 40.0));
        let mut b = MaskLayer::new(64).unwrap();
        b.fill_polygon(&square_outline(24.0, 24.0, 64.0, 64.0));

        let both = a.intersect(&b);
        assert_eq!(both.coverage(32, 32), 255, "overlap kept");
        assert_eq!(both.coverage(8, 8), 0, "a-only cleared");
        assert_eq!(both.coverage(56, 56), 0, "b-only cleared");
    }

    #[test]
    fn test_paste_through_mask() {
        let mut canvas = Canvas::new(64, (0, 0, 0)).unwrap();
        let mut mask = MaskLayer::new(64).unwrap();
        mask.fill_polygon(&square_outline(16.0, 16.0, 48.0, 48.0));

        canvas.paste((200, 10, 10), &mask);
        assert_eq!(canvas.pixel(32, 32), Some((200, 10, 10)));
        assert_eq!(canvas.pixel(4, 4), Some((0, 0, 0)));
    }

    #[test]
    fn test_into_icon_dimensions() {
        let canvas = Canvas::new(64, (10, 20, 30)).unwrap();
        let icon = canvas.into_icon(16).unwrap();
        assert_eq!(icon.dimensions(), (16, 16));
        assert_eq!(icon.get_pixel(8, 8).0, [10, 20, 30]);
    }

    #[test]
    fn test_degenerate_outline_is_skipped() {
        let mut canvas = Canvas::new(32, (0, 0, 0)).unwrap();
        canvas.fill_polygon(&[Point::new(5.0, 5.0)], (255, 255, 255, 255));
        assert_eq!(canvas.pixel(5, 5), Some((0, 0, 0)));
    }
}
