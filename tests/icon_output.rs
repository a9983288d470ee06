//! End-to-end checks for both icon generators: final dimensions, non-blank
//! output, expected colors in known regions, and PNG round trip.

use std::collections::HashSet;

use icongen::constants::ICON_SIZE;
use icongen::icons::{glyph, marker};
use image::RgbImage;

/// Channel tolerance for sampled pixels; the Lanczos downscale shifts
/// colors slightly near edges.
const TOL: i32 = 40;

fn distinct_colors(img: &RgbImage) -> usize {
    let mut colors = HashSet::new();
    for p in img.pixels() {
        colors.insert(p.0);
    }
    colors.len()
}

fn close_to(actual: [u8; 3], expected: (u8, u8, u8)) -> bool {
    let d = |a: u8, b: u8| (a as i32 - b as i32).abs();
    d(actual[0], expected.0) <= TOL && d(actual[1], expected.1) <= TOL && d(actual[2], expected.2) <= TOL
}

#[test]
fn marker_icon_dimensions_and_content() {
    let icon = marker::render().expect("marker render failed");
    assert_eq!(icon.dimensions(), (ICON_SIZE, ICON_SIZE));
    assert!(distinct_colors(&icon) >= 2, "icon is blank");

    // Top corner sits on the background
    assert!(close_to(icon.get_pixel(2, 2).0, (10, 10, 18)));
    // The upper arm of the marker is pink (render (360, 203) -> final (90, 51))
    assert!(
        close_to(icon.get_pixel(90, 51).0, (233, 30, 140)),
        "expected pink arm, got {:?}",
        icon.get_pixel(90, 51).0
    );
}

#[test]
fn glyph_icon_dimensions_and_content() {
    let icon = glyph::render().expect("glyph render failed");
    assert_eq!(icon.dimensions(), (ICON_SIZE, ICON_SIZE));
    assert!(distinct_colors(&icon) >= 2, "icon is blank");

    // Top corner sits on the background
    assert!(close_to(icon.get_pixel(2, 2).0, (10, 12, 20)));
    // Left side of the "C" stroke (render (210, 360) -> final (52, 90))
    assert!(
        close_to(icon.get_pixel(52, 90).0, (236, 242, 255)),
        "expected glyph stroke, got {:?}",
        icon.get_pixel(52, 90).0
    );
    // The gap of the "C" faces right (render (510, 360) -> final (127, 90))
    assert!(
        close_to(icon.get_pixel(127, 90).0, (10, 12, 20)),
        "expected open gap, got {:?}",
        icon.get_pixel(127, 90).0
    );
}

#[test]
fn saved_icon_round_trips_as_png() {
    let icon = marker::render().expect("marker render failed");
    let path = std::env::temp_dir().join(format!("icongen-test-{}.png", std::process::id()));

    icon.save(&path).expect("failed to write png");
    let decoded = image::open(&path).expect("failed to decode png");
    assert_eq!(decoded.width(), ICON_SIZE);
    assert_eq!(decoded.height(), ICON_SIZE);

    let _ = std::fs::remove_file(&path);
}
