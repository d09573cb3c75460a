//! Text encoding of a region set.
//!
//! Each shape kind is persisted as its own field: a `;`-separated list of
//! `x0,y0,x1,y1` integer tuples in creation order, for example
//! `"2,2,8,8;10,12,40,30"`. An empty field means no regions of that shape.
//! Decoding skips any tuple it cannot read and keeps the rest.

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::selection::{Region, Shape};
use crate::store::RegionStore;

const TUPLE_SEPARATOR: &str = ";";
const FIELD_SEPARATOR: char = ',';

/// The two persisted fields of a region set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedRegions {
    pub boxes: String,
    pub ellipses: String,
}

/// Encode every region of one shape, in creation order.
pub fn encode_shape(store: &RegionStore, shape: Shape) -> String {
    join_shape(&store.regions(), shape)
}

/// Encode both fields from one snapshot of the store.
pub fn encode(store: &RegionStore) -> EncodedRegions {
    let regions = store.regions();
    EncodedRegions {
        boxes: join_shape(&regions, Shape::Box),
        ellipses: join_shape(&regions, Shape::Ellipse),
    }
}

/// Replace the store contents with `encoded`. Returns the number loaded.
pub fn parse_into(store: &RegionStore, encoded: &EncodedRegions) -> usize {
    store.parse(&encoded.boxes, &encoded.ellipses)
}

/// Decode one field. Unreadable tuples are logged and skipped.
pub fn parse_tuples(field: &str) -> Vec<Bounds> {
    field
        .split(TUPLE_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let bounds = parse_bounds(entry);
            if bounds.is_none() {
                log::warn!("Skipping malformed region entry {:?}", entry);
            }
            bounds
        })
        .collect()
}

fn join_shape(regions: &[Region], shape: Shape) -> String {
    regions
        .iter()
        .filter(|region| region.shape() == shape)
        .map(|region| encode_bounds(&region.bounds))
        .collect::<Vec<_>>()
        .join(TUPLE_SEPARATOR)
}

fn encode_bounds(bounds: &Bounds) -> String {
    format!("{},{},{},{}", bounds.x0, bounds.y0, bounds.x1, bounds.y1)
}

fn parse_bounds(entry: &str) -> Option<Bounds> {
    let mut values = [0i32; 4];
    let mut fields = entry.split(FIELD_SEPARATOR);

    for value in values.iter_mut() {
        *value = fields.next()?.trim().parse().ok()?;
    }

    if fields.next().is_some() {
        return None;
    }

    let [x0, y0, x1, y1] = values;
    Some(Bounds::new(x0, y0, x1, y1))
}
