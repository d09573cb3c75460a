//! Display space versus image-native space.
//!
//! Pointer events and the on-screen overlay live in display space (the canvas
//! the image is scaled onto). Detectors and crops live in image-native space
//! (the full-resolution capture). The two are related by one factor per axis,
//! and keeping the spaces as distinct types means a rectangle can only be
//! scaled once on its way through.

use super::Bounds;

/// Corners in display (canvas) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayRect(pub Bounds);

/// Corners in image-native pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageRect(pub Bounds);

impl DisplayRect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self(Bounds::new(x0, y0, x1, y1))
    }

    pub fn bounds(&self) -> Bounds {
        self.0
    }
}

impl ImageRect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self(Bounds::new(x0, y0, x1, y1))
    }

    pub fn bounds(&self) -> Bounds {
        self.0
    }
}

/// Display-per-image scale factors: `x = canvas_width / image_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Scale {
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: sanitize(x, "x"),
            y: sanitize(y, "y"),
        }
    }

    /// Factors that project an `image` sized buffer onto a `canvas` sized one.
    ///
    /// A zero dimension on either side leaves that axis unscaled.
    pub fn between(canvas: (u32, u32), image: (u32, u32)) -> Self {
        Self::new(ratio(canvas.0, image.0), ratio(canvas.1, image.1))
    }

    pub fn to_display(&self, rect: ImageRect) -> DisplayRect {
        let b = rect.0;
        DisplayRect::new(
            mul(b.x0, self.x),
            mul(b.y0, self.y),
            mul(b.x1, self.x),
            mul(b.y1, self.y),
        )
    }

    pub fn to_image(&self, rect: DisplayRect) -> ImageRect {
        let b = rect.0;
        ImageRect::new(
            mul(b.x0, 1.0 / self.x),
            mul(b.y0, 1.0 / self.y),
            mul(b.x1, 1.0 / self.x),
            mul(b.y1, 1.0 / self.y),
        )
    }

    /// Display-space point projected into image space, sub-pixel.
    pub fn point_to_image(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.x, y / self.y)
    }
}

fn ratio(canvas: u32, image: u32) -> f64 {
    if canvas == 0 || image == 0 {
        log::warn!("Degenerate scale {}/{}, leaving axis unscaled", canvas, image);
        1.0
    } else {
        f64::from(canvas) / f64::from(image)
    }
}

fn sanitize(factor: f64, axis: &str) -> f64 {
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        log::warn!("Invalid {} scale factor {}, using 1.0", axis, factor);
        1.0
    }
}

// `as` saturates on overflow and maps NaN to 0.
fn mul(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor).round() as i32
}
