//! Geometric predicates shared by the paint rules.

use std::f64::consts::PI;

/// True when the point lies inside a centered rounded rectangle with
/// half-extents `hw`/`hh` and corner radius `cr`. The straight-edge bands are
/// an exact rect test; the corner squares fall back to a circle test.
pub fn in_rounded_rect(x: f64, y: f64, cx: f64, cy: f64, hw: f64, hh: f64, cr: f64) -> bool {
    let dx = (x - cx).abs() - (hw - cr);
    let dy = (y - cy).abs() - (hh - cr);
    if dx <= 0.0 || dy <= 0.0 {
        return (x - cx).abs() <= hw && (y - cy).abs() <= hh;
    }
    dx * dx + dy * dy <= cr * cr
}

/// Euclidean distance between two points.
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x1 - x2).hypot(y1 - y2)
}

/// Shortest-arc distance between two angles, in [0, pi].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    if d > PI {
        2.0 * PI - d
    } else {
        d
    }
}

/// Signed distance from a point inside the plate to the rounded-rect
/// boundary, for the anti-aliasing band. Corner regions are the Euclidean
/// distance to the corner center minus the corner radius; edge regions use a
/// linear form. Distances below -1 are collapsed to -2 since only the
/// (-1, 0] band matters.
pub fn edge_distance(x: f64, y: f64, center: f64, half: f64, corner: f64) -> f64 {
    let ex = (x - center).abs() - (half - corner);
    let ey = (y - center).abs() - (half - corner);
    if ex > 0.0 && ey > 0.0 {
        (ex * ex + ey * ey).sqrt() - corner
    } else if ex > 0.0 {
        let d = ex - (half - (y - center).abs());
        if d < -1.0 {
            -2.0
        } else {
            d
        }
    } else if ey > 0.0 {
        let d = ey - (half - (x - center).abs());
        if d < -1.0 {
            -2.0
        } else {
            d
        }
    } else {
        0.0
    }
}

/// Alpha for a pixel at the given signed boundary distance: a linear ramp
/// over the 1-pixel band just inside the edge, opaque everywhere else inside.
pub fn edge_alpha(distance: f64) -> u8 {
    if distance > -1.0 && distance <= 0.0 {
        (255.0 * (1.0 + distance)) as u8
    } else {
        255
    }
}
