// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dnd --heading-base-level=0

//! Understory DnD: drag-and-drop geometry for list and board UIs.
//!
//! Understory DnD answers one question per frame of a drag: *which droppable is the dragged item
//! over?* It also helps a drag handle keep keyboard focus when a drop remounts it.
//!
//! - [`droppable_over`] resolves at most one [`Droppable`] from the dragged item's page-space box.
//! - [`try_droppable_over`] does the same after validating the geometry it is given.
//! - [`FocusRetainer`] and [`HandleFocus`] carry keyboard focus across an unmount/mount cycle.
//!
//! The crate does no measurement and keeps no drag state. The host measures droppables into
//! [`Droppable`] snapshots (full page box, visible [`Subject::active`] rectangle, [`Axis`], and an
//! enabled flag), calls the resolver, and feeds the result to its own drag state machine.
//!
//! ## Resolution rules
//!
//! See [`resolve`] for the full rules. In short, a droppable is eligible when it is enabled,
//! visible, and overlaps the dragged box, and either contains the dragged box's center or is
//! crossed far enough along its cross axis. One eligible droppable is the answer; with several
//! (only expected for large items), the one with the greatest intersection area wins and the
//! earliest in input order wins ties.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_dnd::{Axis, Droppable, Subject, droppable_over};
//!
//! // Two columns of a board; the second is scrolled so only its top half is visible.
//! let todo = Droppable::new(1_u32, Axis::Vertical, Rect::new(0.0, 0.0, 200.0, 800.0));
//! let doing_page = Rect::new(220.0, 0.0, 420.0, 800.0);
//! let viewport = Rect::new(0.0, 0.0, 1000.0, 400.0);
//! let doing = Droppable::new(2_u32, Axis::Vertical, doing_page)
//!     .with_subject(Subject::clipped(doing_page, viewport));
//! let board = [todo, doing];
//!
//! // A card over the visible part of the second column.
//! assert_eq!(droppable_over(Rect::new(240.0, 100.0, 400.0, 160.0), &board), Some(2));
//!
//! // The same card below the visible part is over nothing.
//! assert_eq!(droppable_over(Rect::new(240.0, 500.0, 400.0, 560.0), &board), None);
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are assumed finite and rectangles not inverted. [`droppable_over`] asserts this in
//! debug builds; [`try_droppable_over`] reports a [`GeometryError`] instead.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`Axis`], [`Subject`], [`Droppable`], and
//!   [`HandleState`].
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod axis;
pub mod droppable;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod resolve;

pub use axis::Axis;
pub use droppable::{Droppable, Subject};
pub use error::{GeometryError, RectRole};
pub use focus::{FocusHandle, FocusRetainer, HandleFocus, HandleState};
pub use geometry::{is_position_in_frame, is_within, overlap_area, overlaps};
pub use resolve::{droppable_over, is_eligible, try_droppable_over};
