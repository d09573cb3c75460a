// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};
use image::{Rgba, RgbaImage};

use crate::geometry::hit_testing::{ELLIPSE_SEGMENTS, outline_points};
use crate::geometry::{Bounds, Scale};
use crate::selection::{Region, SelectionMode, Shape as RegionShape};
use crate::store::{NO_REGION, RegionStore};

/// Widest outline, in pixels, either renderer will draw.
pub const MAX_THICKNESS: f32 = 64.0;

/// Colors and stroke width of the region overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub marker: Color32,
    pub selected: Color32,
    pub thickness: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            marker: Color32::GREEN,
            selected: Color32::RED,
            thickness: 2.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct Renderer {
    style: OverlayStyle,
}

impl Renderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn set_marker_color(&mut self, color: Color32) {
        self.style.marker = color;
    }

    pub fn set_selected_color(&mut self, color: Color32) {
        self.style.selected = color;
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.style.thickness = thickness.max(0.0).min(MAX_THICKNESS);
    }

    /// Overlay shapes for the canvas whose top-left corner is `origin`.
    ///
    /// Enabled regions are outlined in the marker color in creation order.
    /// The `selected` region is then drawn again in the selected color.
    /// A disabled selection is not drawn at all.
    pub fn overlay_shapes(&self, store: &RegionStore, selected: usize, origin: Pos2) -> Vec<Shape> {
        let regions = store.regions();
        let mut shapes: Vec<Shape> = regions
            .iter()
            .filter(|region| region.enabled)
            .map(|region| self.region_shape(region.shape(), &region.bounds, origin, self.style.marker))
            .collect();

        if let Some(region) = selected_region(&regions, selected) {
            shapes.push(self.region_shape(region.shape(), &region.bounds, origin, self.style.selected));
        }

        shapes
    }

    /// Rubber-band outline of a drag that has not been released yet.
    pub fn drag_preview(&self, mode: SelectionMode, bounds: Bounds, origin: Pos2) -> Shape {
        self.region_shape(mode.shape(), &bounds, origin, self.style.selected)
    }

    /// Paint the overlay for `store` into a canvas at `canvas_rect`.
    pub fn paint(&self, painter: &Painter, canvas_rect: Rect, store: &RegionStore, selected: usize) {
        painter.extend(self.overlay_shapes(store, selected, canvas_rect.min));
    }

    /// Burn the overlay into an image-native buffer.
    ///
    /// Region bounds are in display space and are divided by `scale` on the
    /// way in, so the markers land on the same pixels they cover on screen.
    pub fn render_markers(&self, image: &mut RgbaImage, store: &RegionStore, selected: usize, scale: Scale) {
        let regions = store.regions();
        let marker = to_rgba(self.style.marker);
        let thickness = self.style.thickness.max(1.0).min(MAX_THICKNESS).round() as i64;

        for region in regions.iter().filter(|region| region.enabled) {
            burn_outline(image, region, scale, marker, thickness);
        }

        if let Some(region) = selected_region(&regions, selected) {
            burn_outline(image, region, scale, to_rgba(self.style.selected), thickness);
        }
    }

    fn region_shape(&self, shape: RegionShape, bounds: &Bounds, origin: Pos2, color: Color32) -> Shape {
        let stroke = Stroke::new(self.style.thickness.max(0.0).min(MAX_THICKNESS), color);
        match shape {
            RegionShape::Box => {
                let rect = Rect::from_min_max(
                    origin + egui::vec2(bounds.left() as f32, bounds.top() as f32),
                    origin + egui::vec2(bounds.right() as f32, bounds.bottom() as f32),
                );
                Shape::rect_stroke(rect, 0.0, stroke)
            }
            RegionShape::Ellipse => {
                let points = outline_points(shape, bounds, ELLIPSE_SEGMENTS)
                    .into_iter()
                    .map(|(x, y)| origin + egui::vec2(x, y))
                    .collect();
                Shape::closed_line(points, stroke)
            }
        }
    }
}

fn selected_region(regions: &[Region], selected: usize) -> Option<&Region> {
    if selected == NO_REGION {
        return None;
    }
    regions.get(selected - 1).filter(|region| region.enabled)
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

fn burn_outline(image: &mut RgbaImage, region: &Region, scale: Scale, color: Rgba<u8>, thickness: i64) {
    let points: Vec<(f64, f64)> = outline_points(region.shape(), &region.bounds, ELLIPSE_SEGMENTS)
        .into_iter()
        .map(|(x, y)| scale.point_to_image(f64::from(x), f64::from(y)))
        .collect();

    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        draw_line(image, start, end, color, thickness);
    }
}

/// Stamp a square brush along the segment, clipped to the image.
///
/// The segment is cut to the image (grown by the brush) before stepping, so
/// the work is bounded by the image size whatever the stored coordinates are.
fn draw_line(image: &mut RgbaImage, start: (f64, f64), end: (f64, f64), color: Rgba<u8>, thickness: i64) {
    let half = thickness / 2;
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let margin = thickness as f64;
    let window = (-margin, -margin, width as f64 + margin, height as f64 + margin);

    let Some((start, end)) = clip_segment(start, end, window) else {
        return;
    };

    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let cx = (start.0 + dx * t).round() as i64;
        let cy = (start.1 + dy * t).round() as i64;

        for y in (cy - half)..(cy - half + thickness) {
            for x in (cx - half)..(cx - half + thickness) {
                if (0..width).contains(&x) && (0..height).contains(&y) {
                    image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

/// Liang-Barsky clip of a segment against `(min_x, min_y, max_x, max_y)`.
fn clip_segment(
    start: (f64, f64),
    end: (f64, f64),
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);

    let edges = [
        (-dx, start.0 - min_x),
        (dx, max_x - start.0),
        (-dy, start.1 - min_y),
        (dy, max_y - start.1),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
    }

    Some((
        (start.0 + dx * t0, start.1 + dy * t0),
        (start.0 + dx * t1, start.1 + dy * t1),
    ))
}
