// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Droppable resolution: which droppable is the dragged item over?
//!
//! ## Eligibility
//!
//! Each droppable is checked in order of cost, stopping at the first decisive rule:
//!
//! 1. Disabled droppables are rejected.
//! 2. Droppables without an active (visible) rectangle are rejected.
//! 3. Droppables whose active rectangle does not [overlap](crate::geometry::overlaps) the
//!    dragged box are rejected.
//! 4. If the dragged box's center lies within the active rectangle, the droppable is accepted.
//! 5. Otherwise the droppable's [cross axis](crate::axis::Axis) decides. If neither cross-axis
//!    edge of the dragged box lies within the active rectangle, the dragged item covers the
//!    droppable on that axis and it is accepted. If only the leading edge lies within, it must
//!    be before the droppable's cross-axis center line; otherwise the trailing edge must be past it.
//!
//! Requiring an edge to cross the center line keeps the two partial-containment rules from
//! both accepting neighbours of the same dragged box.
//!
//! ## Selection
//!
//! A single eligible droppable is the answer. Several are only expected for large dragged items;
//! then the droppable whose active rectangle has the greatest intersection area with the dragged
//! box wins. Ties keep the earliest droppable in input order.

use kurbo::Rect;
use log::trace;

use crate::droppable::Droppable;
use crate::error::{GeometryError, RectRole};
use crate::geometry::{
    is_position_in_frame, is_well_formed, is_within, overlap_area, overlaps, validate,
};

/// Resolve the droppable the dragged item is over.
///
/// `page_border_box` is the dragged item's current page-space box; `droppables` is this frame's
/// snapshot of candidates. Returns `None` when the dragged item is not over any droppable, which
/// is a normal outcome (for example while dragging between lists).
///
/// The result only depends on the arguments. Any returned id comes from `droppables`.
///
/// The dragged box and the active rectangle of every enabled droppable must have finite
/// coordinates and must not be inverted. This is asserted in debug builds; use
/// [`try_droppable_over`] to check it at runtime instead.
///
/// ```
/// use kurbo::Rect;
/// use understory_dnd::{Axis, Droppable, droppable_over};
///
/// let columns = [
///     Droppable::new("todo", Axis::Vertical, Rect::new(0.0, 0.0, 200.0, 600.0)),
///     Droppable::new("done", Axis::Vertical, Rect::new(220.0, 0.0, 420.0, 600.0)),
/// ];
///
/// let card = Rect::new(250.0, 40.0, 400.0, 90.0);
/// assert_eq!(droppable_over(card, &columns), Some("done"));
///
/// let gutter = Rect::new(195.0, 700.0, 225.0, 720.0);
/// assert_eq!(droppable_over(gutter, &columns), None);
/// ```
pub fn droppable_over<K: Copy>(page_border_box: Rect, droppables: &[Droppable<K>]) -> Option<K> {
    debug_assert!(
        is_well_formed(&page_border_box),
        "dragged box must be finite and not inverted: {page_border_box:?}"
    );

    let mut candidates = droppables
        .iter()
        .filter(|droppable| is_eligible(&page_border_box, droppable));

    let first = candidates.next()?;
    let Some(second) = candidates.next() else {
        return Some(first.id);
    };

    trace!("several droppables are eligible, falling back to greatest overlap");
    candidate_with_greatest_overlap(
        &page_border_box,
        [first, second].into_iter().chain(candidates),
    )
}

/// Like [`droppable_over`], but first validates every rectangle it will look at.
///
/// The dragged box and the page and active rectangles of every enabled droppable must have
/// finite coordinates and must not be inverted. Disabled droppables are not inspected.
///
/// ```
/// use kurbo::Rect;
/// use understory_dnd::{Axis, Droppable, GeometryError, RectRole, try_droppable_over};
///
/// let list = [Droppable::new(1_u32, Axis::Vertical, Rect::new(0.0, 0.0, 100.0, 100.0))];
/// let bad = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
/// assert_eq!(
///     try_droppable_over(bad, &list),
///     Err(GeometryError::NonFinite(RectRole::Dragged))
/// );
/// assert_eq!(try_droppable_over(Rect::new(0.0, 0.0, 10.0, 10.0), &list), Ok(Some(1)));
/// ```
pub fn try_droppable_over<K: Copy>(
    page_border_box: Rect,
    droppables: &[Droppable<K>],
) -> Result<Option<K>, GeometryError> {
    validate(&page_border_box, RectRole::Dragged)?;
    for (i, droppable) in droppables.iter().enumerate() {
        if !droppable.enabled {
            continue;
        }
        validate(&droppable.subject.page, RectRole::Page(i))?;
        if let Some(active) = &droppable.subject.active {
            validate(active, RectRole::Active(i))?;
        }
    }
    Ok(droppable_over(page_border_box, droppables))
}

/// Whether `droppable` may be the target of a dragged item with box `page_border_box`.
///
/// This is the per-droppable eligibility test used by [`droppable_over`]; several droppables can
/// be eligible at once. The active rectangle of an enabled droppable must be finite and not
/// inverted; this is asserted in debug builds.
pub fn is_eligible<K>(page_border_box: &Rect, droppable: &Droppable<K>) -> bool {
    let Some(active) = droppable.target_rect() else {
        return false;
    };
    debug_assert!(
        is_well_formed(&active),
        "droppable active rect must be finite and not inverted: {active:?}"
    );
    if !overlaps(page_border_box, &active) {
        return false;
    }

    if is_position_in_frame(&active, page_border_box.center()) {
        return true;
    }

    let axis = droppable.axis;
    let child_center = axis.cross_line(active.center());
    let cross_start = axis.cross_start(page_border_box);
    let cross_end = axis.cross_end(page_border_box);

    let is_contained =
        |value: f64| is_within(axis.cross_start(&active), axis.cross_end(&active), value);
    let is_start_contained = is_contained(cross_start);
    let is_end_contained = is_contained(cross_end);

    // Dragged box spans the whole droppable on the cross axis.
    if !is_start_contained && !is_end_contained {
        return true;
    }

    if is_start_contained {
        cross_start < child_center
    } else {
        cross_end > child_center
    }
}

/// Pick the candidate whose active rectangle has the largest positive intersection area with
/// `page_border_box`. Earlier candidates win ties.
fn candidate_with_greatest_overlap<'a, K: Copy + 'a>(
    page_border_box: &Rect,
    candidates: impl IntoIterator<Item = &'a Droppable<K>>,
) -> Option<K> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let active = candidate.subject.active?;
            let area = overlap_area(page_border_box, &active)?;
            Some((candidate.id, area))
        })
        .fold(None, |best: Option<(K, f64)>, (id, area)| match best {
            Some((_, best_area)) if area <= best_area => best,
            _ => Some((id, area)),
        })
        .map(|(id, _)| id)
}
