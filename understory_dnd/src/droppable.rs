// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Droppable snapshots: identity, enabled state, axis, and visible geometry.
//!
//! A [`Droppable`] is a read-only snapshot taken by the host's measurement layer each frame.
//! Nothing here is cached between resolver calls.

use kurbo::Rect;

use crate::axis::Axis;

/// Page-space geometry of a droppable.
///
/// `active` is the part of `page` that is currently visible. It is absent when the droppable
/// is scrolled fully out of view or clipped away, and such a droppable can never be dragged over.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subject {
    /// Full border box of the droppable.
    pub page: Rect,
    /// Visible portion of `page`, if any.
    pub active: Option<Rect>,
}

impl Subject {
    /// A fully visible subject.
    pub const fn new(page: Rect) -> Self {
        Self {
            page,
            active: Some(page),
        }
    }

    /// A subject with no visible area.
    pub const fn hidden(page: Rect) -> Self {
        Self { page, active: None }
    }

    /// A subject clipped by a scroll container `frame`.
    ///
    /// The active rectangle is the intersection of `page` and `frame` when that has positive
    /// area, and absent otherwise.
    pub fn clipped(page: Rect, frame: Rect) -> Self {
        let visible = page.intersect(frame);
        let active = (visible.width() > 0.0 && visible.height() > 0.0).then_some(visible);
        Self { page, active }
    }
}

/// A drop target candidate.
///
/// `K` is any small, copyable identifier (an application id, a box tree node, ...). The
/// resolver only ever returns `id`s taken from the candidates it was given.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Droppable<K> {
    /// Stable identifier of the droppable.
    pub id: K,
    /// Disabled droppables never receive the dragged item.
    pub enabled: bool,
    /// Orientation of the droppable's list.
    pub axis: Axis,
    /// Measured geometry.
    pub subject: Subject,
}

impl<K> Droppable<K> {
    /// An enabled, fully visible droppable.
    pub const fn new(id: K, axis: Axis, page: Rect) -> Self {
        Self {
            id,
            enabled: true,
            axis,
            subject: Subject::new(page),
        }
    }

    /// Replace the subject, for example with a [`Subject::clipped`] one.
    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = subject;
        self
    }

    /// Set the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The rectangle the resolver tests against: the active rectangle of an enabled droppable.
    #[inline]
    pub fn target_rect(&self) -> Option<Rect> {
        if self.enabled { self.subject.active } else { None }
    }
}
