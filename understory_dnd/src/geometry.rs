// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle predicates used by the resolver.
//!
//! Rectangles are [`kurbo::Rect`] with `x0 = left`, `y0 = top`, `x1 = right`, `y1 = bottom`.
//! Note that [`Rect::contains`] is half-open; containment here is inclusive on both ends.

use kurbo::{Point, Rect};

use crate::error::{GeometryError, RectRole};

/// Whether two rectangles share a region of positive area.
///
/// All four comparisons are strict, so rectangles that only touch along an edge or at a
/// corner do not overlap.
#[inline]
pub fn overlaps(first: &Rect, second: &Rect) -> bool {
    first.x0 < second.x1 && first.x1 > second.x0 && first.y0 < second.y1 && first.y1 > second.y0
}

/// `min <= value <= max`.
#[inline]
pub fn is_within(min: f64, max: f64, value: f64) -> bool {
    min <= value && value <= max
}

/// Whether `point` lies within `frame`, edges included.
#[inline]
pub fn is_position_in_frame(frame: &Rect, point: Point) -> bool {
    is_within(frame.x0, frame.x1, point.x) && is_within(frame.y0, frame.y1, point.y)
}

/// Area of the intersection of two rectangles, if it has positive width and height.
pub fn overlap_area(first: &Rect, second: &Rect) -> Option<f64> {
    let width = first.x1.min(second.x1) - first.x0.max(second.x0);
    let height = first.y1.min(second.y1) - first.y0.max(second.y0);
    (width > 0.0 && height > 0.0).then(|| width * height)
}

/// Whether `rect` has finite coordinates and is not inverted.
#[inline]
pub(crate) fn is_well_formed(rect: &Rect) -> bool {
    validate(rect, RectRole::Dragged).is_ok()
}

/// Check that `rect` has finite coordinates and `left <= right`, `top <= bottom`.
pub(crate) fn validate(rect: &Rect, role: RectRole) -> Result<(), GeometryError> {
    let finite = rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite();
    if !finite {
        return Err(GeometryError::NonFinite(role));
    }
    if rect.x0 > rect.x1 || rect.y0 > rect.y1 {
        return Err(GeometryError::Inverted(role));
    }
    Ok(())
}
