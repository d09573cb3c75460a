mod bounds;
pub mod hit_testing;
pub mod space;

pub use bounds::{Bounds, Rectangle};
pub use space::{DisplayRect, ImageRect, Scale};
