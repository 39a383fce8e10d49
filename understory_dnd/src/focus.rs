// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep keyboard focus on a drag handle across a drop.
//!
//! Dropping an item usually moves it to a new list, which tears down its drag handle and
//! creates a new one. Without help, keyboard focus is lost on the way.
//!
//! - A [`HandleFocus`] tracks whether one drag handle is focused and what state its draggable
//!   is in.
//! - When a focused handle unmounts during a drag or drop animation, it records its draggable id
//!   in a [`FocusRetainer`].
//! - When a handle for the same draggable mounts, it takes the id back and focuses itself.
//!
//! The [`FocusRetainer`] is an ordinary value: create one per application instance, pass it to
//! the handles, and drop it when the application is torn down. The host calls
//! [`FocusRetainer::clear`] on the frame after a drop so a stale id cannot take focus later.
//!
//! ```
//! use understory_dnd::{FocusHandle, FocusRetainer, HandleFocus, HandleState};
//!
//! #[derive(Default)]
//! struct Button { focused: bool }
//!
//! impl FocusHandle for Button {
//!     fn has_focus(&self) -> bool { self.focused }
//!     fn focus(&mut self) { self.focused = true; }
//! }
//!
//! let mut retainer = FocusRetainer::new();
//!
//! // The handle for draggable 3 is focused and being dragged when the drop unmounts it.
//! let mut old = HandleFocus::new(3_u32, HandleState::ENABLED | HandleState::DRAGGING);
//! old.on_focus();
//! assert!(old.unmount(&mut retainer));
//!
//! // Its replacement in the destination list mounts and gets focus back.
//! let mut button = Button::default();
//! let new = HandleFocus::new(3_u32, HandleState::ENABLED);
//! assert!(new.mount(&mut retainer, &mut button));
//! assert!(button.focused);
//! assert_eq!(retainer.retaining(), None);
//! ```

use log::debug;

/// A focusable drag handle, as provided by the host toolkit.
pub trait FocusHandle {
    /// Whether the handle currently has keyboard focus.
    fn has_focus(&self) -> bool;
    /// Give the handle keyboard focus.
    fn focus(&mut self);
}

bitflags::bitflags! {
    /// State of the draggable a handle belongs to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HandleState: u8 {
        /// The handle accepts drags and focus restoration.
        const ENABLED        = 0b0000_0001;
        /// The draggable is being dragged.
        const DRAGGING       = 0b0000_0010;
        /// The draggable is animating into its drop position.
        const DROP_ANIMATING = 0b0000_0100;
    }
}

/// Registry of the draggable whose handle should get focus back when it remounts.
///
/// Holds at most one id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusRetainer<K> {
    retaining: Option<K>,
}

impl<K> Default for FocusRetainer<K> {
    fn default() -> Self {
        Self { retaining: None }
    }
}

impl<K: Copy + Eq> FocusRetainer<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The draggable currently waiting for focus, if any.
    pub fn retaining(&self) -> Option<K> {
        self.retaining
    }

    /// Remember `id`, replacing any previously retained draggable.
    pub fn retain(&mut self, id: K) {
        self.retaining = Some(id);
    }

    /// Forget the retained draggable.
    pub fn clear(&mut self) {
        self.retaining = None;
    }

    /// Give `handle` focus if `id` is the retained draggable.
    ///
    /// A matching id is consumed even when the handle is already focused. Returns whether
    /// [`FocusHandle::focus`] was called.
    pub fn try_restore(&mut self, id: K, handle: &mut impl FocusHandle) -> bool {
        if self.retaining != Some(id) {
            return false;
        }
        self.retaining = None;
        if handle.has_focus() {
            return false;
        }
        handle.focus();
        true
    }
}

/// Focus bookkeeping for a single drag handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandleFocus<K> {
    id: K,
    state: HandleState,
    focused: bool,
}

impl<K: Copy + Eq + core::fmt::Debug> HandleFocus<K> {
    /// Track the handle of draggable `id`. The handle starts unfocused.
    pub fn new(id: K, state: HandleState) -> Self {
        Self {
            id,
            state,
            focused: false,
        }
    }

    /// The draggable this handle belongs to.
    pub fn id(&self) -> K {
        self.id
    }

    /// Current draggable state.
    pub fn state(&self) -> HandleState {
        self.state
    }

    /// Whether the handle is focused, as last reported by the host.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The handle gained focus.
    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    /// The handle lost focus.
    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    /// Record the latest draggable state. The state at unmount decides retention.
    pub fn set_state(&mut self, state: HandleState) {
        self.state = state;
    }

    /// The handle now belongs to a different draggable.
    pub fn set_id(&mut self, id: K) {
        self.id = id;
    }

    /// Called when the handle mounts: restore focus if it was retained for this draggable.
    ///
    /// Disabled handles never take focus back. Returns whether focus was given.
    pub fn mount(&self, retainer: &mut FocusRetainer<K>, handle: &mut impl FocusHandle) -> bool {
        if !self.state.contains(HandleState::ENABLED) {
            return false;
        }
        let restored = retainer.try_restore(self.id, handle);
        if restored {
            debug!("restored focus to drag handle of {:?}", self.id);
        }
        restored
    }

    /// Whether unmounting now should retain focus: the handle is enabled, focused, and a drag
    /// or drop animation is in progress.
    pub fn should_retain_focus(&self) -> bool {
        self.state.contains(HandleState::ENABLED)
            && self.focused
            && self
                .state
                .intersects(HandleState::DRAGGING | HandleState::DROP_ANIMATING)
    }

    /// Called when the handle unmounts. Returns whether its draggable was retained.
    pub fn unmount(&self, retainer: &mut FocusRetainer<K>) -> bool {
        if !self.should_retain_focus() {
            return false;
        }
        debug!("retaining focus for drag handle of {:?}", self.id);
        retainer.retain(self.id);
        true
    }

    /// The host replaced the handle element while the handle stays mounted.
    ///
    /// Focus follows to the new element if the old one was focused and the handle is enabled.
    pub fn handle_replaced(&self, handle: &mut impl FocusHandle) -> bool {
        if !self.focused || !self.state.contains(HandleState::ENABLED) {
            return false;
        }
        handle.focus();
        true
    }
}
