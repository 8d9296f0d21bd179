//! Planar geometry for traffic matching.
//!
//! All matching math runs on EPSG:3857 (spherical Web Mercator) coordinates
//! so that distances are Euclidean. Geographic lon/lat coordinates must be
//! reprojected with [`to_web_mercator`] before any distance comparison.

use geo_types::{Coord, Line};

/// Half the Earth's circumference in Web Mercator meters.
const MERCATOR_HALF_CIRCUMFERENCE: f64 = 20_037_508.34;

/// Reproject a WGS84 (EPSG:4326) lon/lat pair into EPSG:3857 meters.
pub fn to_web_mercator(lon: f64, lat: f64) -> Coord<f64> {
    let x = lon * MERCATOR_HALF_CIRCUMFERENCE / 180.0;
    let y = ((90.0 + lat) * std::f64::consts::PI / 360.0).tan().ln() / (std::f64::consts::PI / 180.0);
    let y = y * MERCATOR_HALF_CIRCUMFERENCE / 180.0;
    Coord { x, y }
}

/// Axis-aligned bounding box in projected meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Smallest box containing all of `points`.
    fn of_points(points: &[Coord<f64>]) -> Self {
        let mut bbox = BoundingBox {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for p in points {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        bbox
    }
}

/// Bounding box of a segment widened laterally by `tolerance` meters.
///
/// The box is the envelope of the two endpoints each offset perpendicular to
/// the segment in both directions. Returns `None` for a zero-length segment,
/// which has no defined perpendicular.
pub fn segment_bounding_box(segment: Line<f64>, tolerance: f64) -> Option<BoundingBox> {
    let dx = segment.end.x - segment.start.x;
    let dy = segment.end.y - segment.start.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return None;
    }

    let x_perp = dy / length;
    let y_perp = -dx / length;

    let corners = [
        Coord {
            x: segment.start.x + tolerance * x_perp,
            y: segment.start.y + tolerance * y_perp,
        },
        Coord {
            x: segment.start.x - tolerance * x_perp,
            y: segment.start.y - tolerance * y_perp,
        },
        Coord {
            x: segment.end.x + tolerance * x_perp,
            y: segment.end.y + tolerance * y_perp,
        },
        Coord {
            x: segment.end.x - tolerance * x_perp,
            y: segment.end.y - tolerance * y_perp,
        },
    ];
    Some(BoundingBox::of_points(&corners))
}

/// Squared distance from `point` to `segment`, in squared meters.
///
/// The projection onto the segment is clamped to the segment's endpoints.
pub fn point_segment_distance_sq(point: Coord<f64>, segment: Line<f64>) -> f64 {
    let dx = segment.end.x - segment.start.x;
    let dy = segment.end.y - segment.start.y;
    let length_sq = dx * dx + dy * dy;

    let (cx, cy) = if length_sq == 0.0 {
        (segment.start.x, segment.start.y)
    } else {
        let t = ((point.x - segment.start.x) * dx + (point.y - segment.start.y) * dy) / length_sq;
        let t = t.clamp(0.0, 1.0);
        (segment.start.x + t * dx, segment.start.y + t * dy)
    };

    let ex = point.x - cx;
    let ey = point.y - cy;
    ex * ex + ey * ey
}

/// Perpendicular distance from `point` to the infinite line through
/// `segment`, as the cross-product ratio |cross| / |segment|.
///
/// For a zero-length segment this falls back to the distance to its start.
pub fn point_line_distance(point: Coord<f64>, segment: Line<f64>) -> f64 {
    let dx = segment.end.x - segment.start.x;
    let dy = segment.end.y - segment.start.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        let ex = point.x - segment.start.x;
        let ey = point.y - segment.start.y;
        return (ex * ex + ey * ey).sqrt();
    }
    let cross = dx * (point.y - segment.start.y) - dy * (point.x - segment.start.x);
    cross.abs() / length
}

/// Orientation of the ordered triple (p, q, r).
///
/// Returns 0 for collinear points, 1 for clockwise, 2 for counterclockwise.
fn orientation(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> u8 {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        0
    } else if val > 0.0 {
        1
    } else {
        2
    }
}

/// For collinear p, q, r: does q lie within the bounding box of segment pr?
fn on_segment(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Standard orientation-based segment intersection test.
///
/// Touching endpoints and collinear overlap both count as intersecting.
pub fn segments_intersect(a: Line<f64>, b: Line<f64>) -> bool {
    let o1 = orientation(a.start, a.end, b.start);
    let o2 = orientation(a.start, a.end, b.end);
    let o3 = orientation(b.start, b.end, a.start);
    let o4 = orientation(b.start, b.end, a.end);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear special cases
    (o1 == 0 && on_segment(a.start, b.start, a.end))
        || (o2 == 0 && on_segment(a.start, b.end, a.end))
        || (o3 == 0 && on_segment(b.start, a.start, b.end))
        || (o4 == 0 && on_segment(b.start, a.end, b.end))
}

/// Minimum distance between two segments.
///
/// Zero when the segments intersect; otherwise the minimum of the four
/// endpoint-to-opposite-line perpendicular distances (see
/// [`point_line_distance`] for the exact formula).
pub fn segment_min_distance(a: Line<f64>, b: Line<f64>) -> f64 {
    if segments_intersect(a, b) {
        return 0.0;
    }
    let candidates = [
        point_line_distance(a.start, b),
        point_line_distance(a.end, b),
        point_line_distance(b.start, a),
        point_line_distance(b.end, a),
    ];
    candidates.into_iter().fold(f64::INFINITY, f64::min)
}

/// Magnitude of the normalized dot product of the two segments' direction
/// vectors: 1 for parallel or antiparallel headings, 0 for perpendicular.
///
/// A zero-length segment has no heading and yields 0.
pub fn direction_cosine(a: Line<f64>, b: Line<f64>) -> f64 {
    let adx = a.end.x - a.start.x;
    let ady = a.end.y - a.start.y;
    let bdx = b.end.x - b.start.x;
    let bdy = b.end.y - b.start.y;

    let a_len = (adx * adx + ady * ady).sqrt();
    let b_len = (bdx * bdx + bdy * bdy).sqrt();
    if a_len == 0.0 || b_len == 0.0 {
        return 0.0;
    }
    ((adx * bdx + ady * bdy) / (a_len * b_len)).abs()
}
