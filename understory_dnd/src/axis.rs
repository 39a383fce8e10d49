// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis descriptor for droppables.
//!
//! A droppable orders its items along a *main* axis. The perpendicular *cross* axis is the one
//! the resolver inspects when the dragged box's center is not inside the droppable.
//!
//! | [`Axis`]     | main line | main start/end  | cross line | cross start/end |
//! |--------------|-----------|-----------------|------------|-----------------|
//! | `Vertical`   | `y`       | `top`/`bottom`  | `x`        | `left`/`right`  |
//! | `Horizontal` | `x`       | `left`/`right`  | `y`        | `top`/`bottom`  |

use kurbo::{Point, Rect};

/// Orientation of a droppable's list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Items are stacked top to bottom (a column).
    #[default]
    Vertical,
    /// Items are laid out left to right (a row).
    Horizontal,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Leading edge of `rect` along the main axis.
    #[inline]
    pub fn main_start(self, rect: &Rect) -> f64 {
        match self {
            Self::Vertical => rect.y0,
            Self::Horizontal => rect.x0,
        }
    }

    /// Trailing edge of `rect` along the main axis.
    #[inline]
    pub fn main_end(self, rect: &Rect) -> f64 {
        match self {
            Self::Vertical => rect.y1,
            Self::Horizontal => rect.x1,
        }
    }

    /// Coordinate of `point` along the main axis.
    #[inline]
    pub fn main_line(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Leading edge of `rect` along the cross axis.
    #[inline]
    pub fn cross_start(self, rect: &Rect) -> f64 {
        self.cross().main_start(rect)
    }

    /// Trailing edge of `rect` along the cross axis.
    #[inline]
    pub fn cross_end(self, rect: &Rect) -> f64 {
        self.cross().main_end(rect)
    }

    /// Coordinate of `point` along the cross axis.
    #[inline]
    pub fn cross_line(self, point: Point) -> f64 {
        self.cross().main_line(point)
    }
}
