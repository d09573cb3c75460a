use serde::{Deserialize, Serialize};

/// Two corner points of a region in integer pixel coordinates.
///
/// The corners are kept exactly as they were supplied: a drag from the
/// bottom-right towards the top-left produces `x0 > x1`. Everything derived
/// from the corners (location, size, containment) goes through min/max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn left(&self) -> i32 {
        self.x0.min(self.x1)
    }

    pub fn top(&self) -> i32 {
        self.y0.min(self.y1)
    }

    pub fn right(&self) -> i32 {
        self.x0.max(self.x1)
    }

    pub fn bottom(&self) -> i32 {
        self.y0.max(self.y1)
    }

    pub fn width(&self) -> i32 {
        self.right().saturating_sub(self.left())
    }

    pub fn height(&self) -> i32 {
        self.bottom().saturating_sub(self.top())
    }

    /// Corners reordered so the first point is the minimum on each axis.
    pub fn normalized(&self) -> Self {
        Self::new(self.left(), self.top(), self.right(), self.bottom())
    }

    /// Center of the normalized box, in sub-pixel precision.
    pub fn center(&self) -> (f64, f64) {
        (
            (f64::from(self.left()) + f64::from(self.right())) / 2.0,
            (f64::from(self.top()) + f64::from(self.bottom())) / 2.0,
        )
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x0.saturating_add(dx),
            self.y0.saturating_add(dy),
            self.x1.saturating_add(dx),
            self.y1.saturating_add(dy),
        )
    }

    /// Same top-left corner, new size. Negative sizes collapse to zero.
    pub fn with_size(&self, width: i32, height: i32) -> Self {
        let (left, top) = (self.left(), self.top());
        Self::new(
            left,
            top,
            left.saturating_add(width.max(0)),
            top.saturating_add(height.max(0)),
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// A normalized axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

impl From<Bounds> for Rectangle {
    fn from(bounds: Bounds) -> Self {
        Self::new(bounds.left(), bounds.top(), bounds.width(), bounds.height())
    }
}

impl From<Rectangle> for Bounds {
    fn from(rect: Rectangle) -> Self {
        Bounds::new(rect.x, rect.y, rect.right(), rect.bottom())
    }
}
