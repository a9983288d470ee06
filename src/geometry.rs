//! Geometric primitives for icon outline construction
//!
//! Functions for placing points on circles, sampling circular arcs, and
//! building rounded-corner polygon outlines suitable for a fill primitive.
//! All coordinates are canvas-space pixels (x right, y down); all angles
//! are degrees at the public surface and radians internally.

use crate::constants::ARC_SEGMENTS;

/// Minimum bisector length below which two edge directions are considered
/// anti-parallel (the vertex is a straight continuation, not a corner)
const BISECTOR_EPS: f32 = 1e-3;

/// Minimum sin(half-angle) before the fillet center distance blows up;
/// below this the center distance falls back to the radius itself
const SIN_HALF_EPS: f32 = 1e-3;

/// Arc radius / angular sweep below which a fillet arc degenerates to its
/// two tangent points
const DEGENERATE_ARC_EPS: f32 = 1e-3;

/// Distance below which two emitted outline points are considered coincident
const COINCIDENT_EPS: f32 = 1e-4;

/// A 2D point in canvas space. Value identity only; freely copyable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Place a point at polar coordinates around a center.
///
/// # Arguments
/// * `cx`, `cy` - center in pixels
/// * `angle_deg` - angle in degrees (0° = +x, increasing toward +y)
/// * `r` - radius in pixels
pub fn polar(cx: f32, cy: f32, angle_deg: f32, r: f32) -> Point {
    let a = angle_deg.to_radians();
    Point::new(cx + r * a.cos(), cy + r * a.sin())
}

/// Sample a circular arc as a polyline, endpoints included.
///
/// Angles are in degrees; the sweep goes from `start_deg` to `end_deg` in
/// whichever direction the difference indicates. Returns `segments + 1`
/// points.
pub fn arc_points(center: Point, radius: f32, start_deg: f32, end_deg: f32, segments: u32) -> Vec<Point> {
    let a1 = start_deg.to_radians();
    let a2 = end_deg.to_radians();
    let mut pts = Vec::with_capacity(segments as usize + 1);
    for s in 0..=segments {
        let a = a1 + (a2 - a1) * s as f32 / segments as f32;
        pts.push(Point::new(center.x + radius * a.cos(), center.y + radius * a.sin()));
    }
    pts
}

/// Normalize a vector, returning the zero vector for degenerate input.
fn unit(x: f32, y: f32) -> (f32, f32) {
    let len = x.hypot(y);
    if len < COINCIDENT_EPS {
        (0.0, 0.0)
    } else {
        (x / len, y / len)
    }
}

/// Append a point to an outline unless it coincides with the previous one.
///
/// Degenerate fillets (zero radius, ~180° corners) collapse tangent points
/// onto each other; filtering here keeps the outline free of consecutive
/// duplicates without special-casing every caller.
fn push_point(pts: &mut Vec<Point>, p: Point) {
    if let Some(last) = pts.last() {
        if last.distance(p) < COINCIDENT_EPS {
            return;
        }
    }
    pts.push(p);
}

/// Build a closed outline for a polygon with every corner replaced by a
/// circular fillet of the given radius.
///
/// # Arguments
/// * `verts` - polygon vertices, length >= 3, consistent winding order,
///   implicitly closed (last connects to first)
/// * `radius` - fillet radius in pixels, >= 0
///
/// # Algorithm
/// For each vertex with neighbours `prev` and `next`:
/// 1. Unit vectors `v1` (toward prev) and `v2` (toward next) give the
///    tangent points `t1 = curr + v1*r` and `t2 = curr + v2*r` where the
///    straight edges stop and the fillet begins.
/// 2. The fillet center lies along the normalized bisector of `v1` and `v2`
///    at distance `r / sin(half)` from the vertex, where `half` is half the
///    angle between the edge directions.
/// 3. The arc from `t1` to `t2` is swept toward the vertex (outward from
///    the polygon interior); the sweep direction comes from the sign of
///    `cross(v1, v2)`: positive sweeps the angle downward, otherwise upward.
/// 4. Emit `t1`, the interpolated arc points, then `t2`.
///
/// # Degenerate cases
/// Never an error; the fallbacks keep the output finite:
/// - `radius == 0`: every fillet collapses onto its vertex and the output
///   equals the input vertex sequence
/// - ~180° vertex (anti-parallel edges): tangent points only, no arc
/// - near-zero corner angle: center distance falls back to `radius`
/// - vanishing arc radius or sweep: tangent points only
pub fn rounded_polygon(verts: &[Point], radius: f32) -> Vec<Point> {
    let n = verts.len();
    let mut pts: Vec<Point> = Vec::with_capacity(n * (ARC_SEGMENTS as usize + 1));

    for i in 0..n {
        let prev = verts[(i + n - 1) % n];
        let curr = verts[i];
        let next = verts[(i + 1) % n];

        let (v1x, v1y) = unit(prev.x - curr.x, prev.y - curr.y);
        let (v2x, v2y) = unit(next.x - curr.x, next.y - curr.y);
        let t1 = Point::new(curr.x + v1x * radius, curr.y + v1y * radius);
        let t2 = Point::new(curr.x + v2x * radius, curr.y + v2y * radius);

        // Bisector of the two edge directions; vanishes for a straight
        // continuation, in which case there is no corner to round.
        let bx = v1x + v2x;
        let by = v1y + v2y;
        let bl = bx.hypot(by);
        if bl < BISECTOR_EPS {
            push_point(&mut pts, t1);
            push_point(&mut pts, t2);
            continue;
        }
        let bx = bx / bl;
        let by = by / bl;

        let dot = (v1x * v2x + v1y * v2y).clamp(-1.0, 1.0);
        let half = dot.acos() / 2.0;
        let center_dist = if half.sin() > SIN_HALF_EPS {
            radius / half.sin()
        } else {
            radius
        };
        let center = Point::new(curr.x + bx * center_dist, curr.y + by * center_dist);
        let arc_r = t1.distance(center);

        let a1 = (t1.y - center.y).atan2(t1.x - center.x);
        let mut a2 = (t2.y - center.y).atan2(t2.x - center.x);

        // Sweep the arc outward from the polygon interior (toward the
        // vertex): positive cross decreases the angle, otherwise increase.
        let cross = v1x * v2y - v1y * v2x;
        if cross > 0.0 {
            while a2 > a1 {
                a2 -= std::f32::consts::TAU;
            }
        } else {
            while a2 < a1 {
                a2 += std::f32::consts::TAU;
            }
        }

        push_point(&mut pts, t1);
        if arc_r > DEGENERATE_ARC_EPS && (a2 - a1).abs() > DEGENERATE_ARC_EPS {
            for s in 1..ARC_SEGMENTS {
                let a = a1 + (a2 - a1) * s as f32 / ARC_SEGMENTS as f32;
                push_point(
                    &mut pts,
                    Point::new(center.x + arc_r * a.cos(), center.y + arc_r * a.sin()),
                );
            }
        }
        push_point(&mut pts, t2);
    }

    // The path is implicitly closed; drop a trailing point that landed on
    // the start.
    if pts.len() > 1 && pts[0].distance(pts[pts.len() - 1]) < COINCIDENT_EPS {
        pts.pop();
    }
    pts
}

/// Calculate shortest distance from point P to line segment AB.
///
/// Projects P onto the infinite line through AB, clamps the projection
/// parameter to the segment, and measures to the clamped point.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let wx = p.x - a.x;
    let wy = p.y - a.y;

    // c1 = dot(v, w): projection of w onto v (unnormalized)
    let c1 = vx * wx + vy * wy;
    if c1 <= 0.0 {
        // Point projects before segment start: closest point is A
        return (wx * wx + wy * wy).sqrt();
    }

    // c2 = dot(v, v) = |v|²: squared length of segment
    let c2 = vx * vx + vy * vy;
    if c2 <= c1 {
        // Point projects after segment end: closest point is B
        return p.distance(b);
    }

    let t = c1 / c2;
    p.distance(Point::new(a.x + t * vx, a.y + t * vy))
}
