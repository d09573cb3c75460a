//! Moving regions between the store and image-native pixels.
//!
//! Detectors report rectangles in image-native space; [`ingest`] scales them
//! into display space before they reach the store. The save features go the
//! other way: [`export_boxes`] and the crop helpers divide the stored
//! display-space bounds back out to full-resolution pixels.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::error::{ExportError, ExportResult};
use crate::geometry::{DisplayRect, ImageRect, Scale};
use crate::selection::SelectionMode;
use crate::store::RegionStore;

/// How a detector batch combines with what is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestPolicy {
    /// Clear the store first (face and circle detectors).
    Replace,
    /// Add alongside existing regions (blob detectors, manual drags).
    Append,
}

/// Add one region per detected rectangle. Returns the new indices in order.
pub fn ingest(
    store: &RegionStore,
    mode: SelectionMode,
    detections: &[ImageRect],
    scale: Scale,
    policy: IngestPolicy,
) -> Vec<usize> {
    if policy == IngestPolicy::Replace {
        store.clear();
    }

    let indices: Vec<usize> = detections
        .iter()
        .map(|rect| store.add_bounds(mode, scale.to_display(*rect).bounds()))
        .collect();

    log::info!(
        "Ingested {} detections ({:?}), store now holds {}",
        indices.len(),
        policy,
        store.count()
    );
    indices
}

/// Enabled regions as image-native rectangles, in creation order.
pub fn export_boxes(store: &RegionStore, scale: Scale) -> Vec<ImageRect> {
    store
        .bounding_boxes()
        .into_iter()
        .map(|rect| scale.to_image(DisplayRect(rect.into())).0.normalized())
        .map(ImageRect)
        .collect()
}

/// One crop per enabled region, clipped to the image.
///
/// Regions that fall entirely outside the image, or have no area once
/// clipped, produce no crop.
pub fn crop_regions(image: &DynamicImage, store: &RegionStore, scale: Scale) -> Vec<RgbaImage> {
    let (width, height) = image.dimensions();

    export_boxes(store, scale)
        .into_iter()
        .filter_map(|rect| clip(rect, width, height))
        .map(|(x, y, w, h)| image.view(x, y, w, h).to_image())
        .collect()
}

/// Write every crop as `{base}-{n:04}.png` inside `dir`, numbered from 1.
pub fn save_crops(
    image: &DynamicImage,
    store: &RegionStore,
    scale: Scale,
    dir: impl AsRef<Path>,
    base: &str,
) -> ExportResult<Vec<PathBuf>> {
    let crops = crop_regions(image, store, scale);
    if crops.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(crops.len());
    for (n, crop) in crops.iter().enumerate() {
        let path = dir.join(format!("{}-{:04}.png", base, n + 1));
        crop.save(&path)?;
        log::info!("Saved {}x{} crop to {}", crop.width(), crop.height(), path.display());
        written.push(path);
    }

    Ok(written)
}

/// Intersect a rectangle with the image, as `(x, y, width, height)`.
fn clip(rect: ImageRect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let bounds = rect.bounds();
    let max_x = i64::from(width);
    let max_y = i64::from(height);

    let left = i64::from(bounds.left()).clamp(0, max_x);
    let top = i64::from(bounds.top()).clamp(0, max_y);
    let right = i64::from(bounds.right()).clamp(0, max_x);
    let bottom = i64::from(bounds.bottom()).clamp(0, max_y);

    if right <= left || bottom <= top {
        log::debug!("Skipping crop outside image: {:?}", bounds);
        return None;
    }

    Some((
        left as u32,
        top as u32,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}
