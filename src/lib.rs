#![warn(clippy::all, rust_2018_idioms)]

pub mod codec;
pub mod error;
pub mod export;
pub mod geometry;
pub mod renderer;
pub mod selection;
pub mod state;
pub mod store;

pub use codec::EncodedRegions;
pub use error::{ExportError, SettingsError};
pub use export::IngestPolicy;
pub use geometry::{Bounds, DisplayRect, ImageRect, Rectangle, Scale};
pub use renderer::{OverlayStyle, Renderer};
pub use selection::{Region, SelectionMode, Shape};
pub use state::{SelectionSettings, SettingsFile};
pub use store::{NO_REGION, RegionStore};
