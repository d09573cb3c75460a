use super::Bounds;
use crate::selection::Shape;

/// Segments used to approximate an ellipse outline.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Inclusive axis-aligned containment on the normalized box.
pub fn box_contains(bounds: &Bounds, x: i32, y: i32) -> bool {
    x >= bounds.left() && x <= bounds.right() && y >= bounds.top() && y <= bounds.bottom()
}

/// Point-in-ellipse test for the ellipse inscribed in `bounds`.
///
/// A zero radius collapses the ellipse onto the segment (or point) it spans,
/// so a freshly clicked zero-area region can still be picked.
pub fn ellipse_contains(bounds: &Bounds, x: i32, y: i32) -> bool {
    if !box_contains(bounds, x, y) {
        return false;
    }

    let (cx, cy) = bounds.center();
    let rx = f64::from(bounds.width()) / 2.0;
    let ry = f64::from(bounds.height()) / 2.0;
    let (px, py) = (f64::from(x), f64::from(y));

    match (rx > 0.0, ry > 0.0) {
        (true, true) => {
            let nx = (px - cx) / rx;
            let ny = (py - cy) / ry;
            nx * nx + ny * ny <= 1.0
        }
        (false, true) => px == cx,
        (true, false) => py == cy,
        (false, false) => px == cx && py == cy,
    }
}

/// Shape-specific containment.
pub fn contains(shape: Shape, bounds: &Bounds, x: i32, y: i32) -> bool {
    match shape {
        Shape::Box => box_contains(bounds, x, y),
        Shape::Ellipse => ellipse_contains(bounds, x, y),
    }
}

/// Closed outline of a region as a polyline, in the coordinate space of
/// `bounds`. The last point is not repeated.
pub fn outline_points(shape: Shape, bounds: &Bounds, segments: usize) -> Vec<(f32, f32)> {
    let (left, top) = (bounds.left() as f32, bounds.top() as f32);
    let (right, bottom) = (bounds.right() as f32, bounds.bottom() as f32);

    match shape {
        Shape::Box => vec![(left, top), (right, top), (right, bottom), (left, bottom)],
        Shape::Ellipse => {
            let segments = segments.max(4);
            let (cx, cy) = ((left + right) / 2.0, (top + bottom) / 2.0);
            let (rx, ry) = ((right - left) / 2.0, (bottom - top) / 2.0);

            (0..segments)
                .map(|i| {
                    let t = std::f32::consts::TAU * i as f32 / segments as f32;
                    (cx + rx * t.cos(), cy + ry * t.sin())
                })
                .collect()
        }
    }
}
