use parking_lot::Mutex;

use crate::geometry::{Bounds, Rectangle};
use crate::selection::{Region, SelectionMode, Shape};

/// Index value meaning "no region".
pub const NO_REGION: usize = 0;

/// Ordered collection of regions addressed by a 1-based index.
///
/// Indices are handed out in creation order and stay valid until [`clear`].
/// Index `0` and anything past [`count`] are never an error: mutators do
/// nothing and accessors report absence, because the caller's notion of the
/// selected region routinely goes stale across a clear.
///
/// Every public call takes the internal lock for its own duration only, so a
/// store can be shared between a render thread and the event loop.
///
/// [`clear`]: RegionStore::clear
/// [`count`]: RegionStore::count
#[derive(Debug, Default)]
pub struct RegionStore {
    regions: Mutex<Vec<Region>>,
}

impl Clone for RegionStore {
    fn clone(&self) -> Self {
        Self {
            regions: Mutex::new(self.regions.lock().clone()),
        }
    }
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region of the shape selected by `mode` and return its index.
    pub fn add(&self, mode: SelectionMode, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
        self.add_bounds(mode, Bounds::new(x0, y0, x1, y1))
    }

    pub fn add_bounds(&self, mode: SelectionMode, bounds: Bounds) -> usize {
        let mut regions = self.regions.lock();
        regions.push(Region::new(mode.shape(), bounds));
        let index = regions.len();
        log::debug!("Added {:?} region {} at {:?}", mode.shape(), index, bounds);
        index
    }

    /// Remove every region. All previously returned indices become invalid.
    pub fn clear(&self) {
        let mut regions = self.regions.lock();
        log::debug!("Clearing {} regions", regions.len());
        regions.clear();
    }

    pub fn count(&self) -> usize {
        self.regions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.lock().is_empty()
    }

    pub fn is_valid(&self, index: usize) -> bool {
        index != NO_REGION && index <= self.count()
    }

    pub fn get(&self, index: usize) -> Option<Region> {
        let regions = self.regions.lock();
        slot(index).and_then(|i| regions.get(i).copied())
    }

    /// Snapshot of all regions in creation order.
    pub fn regions(&self) -> Vec<Region> {
        self.regions.lock().clone()
    }

    /// Translate both corners of a region.
    pub fn move_by(&self, dx: i32, dy: i32, index: usize) {
        self.update(index, |region| {
            region.bounds = region.bounds.translated(dx, dy);
        });
    }

    /// Translate a region so its top-left corner lands on `(x, y)`.
    pub fn move_to(&self, index: usize, x: i32, y: i32) {
        self.update(index, |region| {
            let dx = x.saturating_sub(region.bounds.left());
            let dy = y.saturating_sub(region.bounds.top());
            region.bounds = region.bounds.translated(dx, dy);
        });
    }

    /// Set a region's size, keeping its top-left corner. Negative sizes
    /// become zero.
    pub fn resize(&self, index: usize, width: i32, height: i32) {
        self.update(index, |region| {
            region.bounds = region.bounds.with_size(width, height);
        });
    }

    pub fn switch(&self, index: usize, enabled: bool) {
        self.update(index, |region| region.enabled = enabled);
    }

    /// Enabled flag, or `false` for an invalid index.
    pub fn status(&self, index: usize) -> bool {
        self.get(index).is_some_and(|region| region.enabled)
    }

    /// Normalized top-left corner.
    pub fn location(&self, index: usize) -> Option<(i32, i32)> {
        self.get(index)
            .map(|region| (region.bounds.left(), region.bounds.top()))
    }

    pub fn size(&self, index: usize) -> Option<(i32, i32)> {
        self.get(index)
            .map(|region| (region.bounds.width(), region.bounds.height()))
    }

    /// Normalized bounds of every enabled region, in creation order.
    pub fn bounding_boxes(&self) -> Vec<Rectangle> {
        self.regions
            .lock()
            .iter()
            .filter(|region| region.enabled)
            .map(Region::rectangle)
            .collect()
    }

    /// Index of the topmost region containing `(x, y)`.
    ///
    /// Later regions are drawn over earlier ones, so the search runs newest
    /// first. Disabled regions are still found.
    pub fn find(&self, x: i32, y: i32) -> Option<usize> {
        self.regions
            .lock()
            .iter()
            .rposition(|region| region.contains(x, y))
            .map(|i| i + 1)
    }

    /// Flip the enabled flag of the region under `(x, y)`.
    pub fn toggle_at(&self, x: i32, y: i32) -> Option<usize> {
        let mut regions = self.regions.lock();
        let i = regions.iter().rposition(|region| region.contains(x, y))?;
        let region = &mut regions[i];
        region.enabled = !region.enabled;
        log::debug!("Region {} enabled: {}", i + 1, region.enabled);
        Some(i + 1)
    }

    /// Replace the contents with the decoded box and ellipse strings.
    ///
    /// Boxes are loaded before ellipses. Returns the number of regions loaded.
    pub fn parse(&self, boxes: &str, ellipses: &str) -> usize {
        let boxes = crate::codec::parse_tuples(boxes);
        let ellipses = crate::codec::parse_tuples(ellipses);

        let mut regions = self.regions.lock();
        regions.clear();
        regions.extend(boxes.into_iter().map(|b| Region::new(Shape::Box, b)));
        regions.extend(ellipses.into_iter().map(|b| Region::new(Shape::Ellipse, b)));
        log::info!("Loaded {} regions", regions.len());
        regions.len()
    }

    fn update(&self, index: usize, apply: impl FnOnce(&mut Region)) {
        let mut regions = self.regions.lock();
        match slot(index).and_then(|i| regions.get_mut(i)) {
            Some(region) => {
                apply(region);
                log::debug!("Region {} now {:?}", index, region.bounds);
            }
            None => log::debug!("Ignoring update of invalid region {}", index),
        }
    }
}

fn slot(index: usize) -> Option<usize> {
    index.checked_sub(1)
}
