use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Rectangle};

/// Outline of a stored region. Fixed when the region is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Shape {
    Box,
    Ellipse,
}

/// Which shape a new drag or detector batch produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SelectionMode {
    Box,
    #[default]
    Ellipse,
}

impl SelectionMode {
    pub fn from_ellipse_flag(ellipse_mode: bool) -> Self {
        if ellipse_mode { Self::Ellipse } else { Self::Box }
    }

    pub fn is_ellipse(self) -> bool {
        self == Self::Ellipse
    }

    pub fn shape(self) -> Shape {
        match self {
            Self::Box => Shape::Box,
            Self::Ellipse => Shape::Ellipse,
        }
    }
}

/// One selectable area, in display coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    shape: Shape,
    pub bounds: Bounds,
    pub enabled: bool,
}

impl Region {
    pub fn new(shape: Shape, bounds: Bounds) -> Self {
        Self {
            shape,
            bounds,
            enabled: true,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rectangle(&self) -> Rectangle {
        Rectangle::from(self.bounds)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        crate::geometry::hit_testing::contains(self.shape, &self.bounds, x, y)
    }
}
