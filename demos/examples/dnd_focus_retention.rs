// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus retention.
//!
//! A keyboard user drops a card into another list. The handle in the old list unmounts and a new
//! one mounts in the destination; focus follows the card.
//!
//! Run:
//! - `cargo run -p understory_demos --example dnd_focus_retention`

use understory_dnd::{FocusHandle, FocusRetainer, HandleFocus, HandleState};

#[derive(Debug)]
struct Button {
    label: &'static str,
    focused: bool,
}

impl FocusHandle for Button {
    fn has_focus(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        println!("focus -> {}", self.label);
        self.focused = true;
    }
}

fn main() {
    // One registry for the application, passed to every handle.
    let mut retainer: FocusRetainer<&'static str> = FocusRetainer::new();

    let mut source = HandleFocus::new("card-42", HandleState::ENABLED);
    source.on_focus();

    // Space bar lifts the card; arrow keys move it; space drops it.
    source.set_state(HandleState::ENABLED | HandleState::DRAGGING);
    source.set_state(HandleState::ENABLED | HandleState::DROP_ANIMATING);

    // The drop moves the card to another list: the old handle unmounts...
    let retained = source.unmount(&mut retainer);
    println!("retained: {retained}, registry holds {:?}", retainer.retaining());

    // ...and a new one mounts in the destination list.
    let mut button = Button {
        label: "card-42 handle (done list)",
        focused: false,
    };
    let destination = HandleFocus::new("card-42", HandleState::ENABLED);
    let restored = destination.mount(&mut retainer, &mut button);
    assert!(restored && button.focused, "focus follows the dropped card");

    // Next frame: nothing is left to restore.
    retainer.clear();
    assert_eq!(retainer.retaining(), None);
}
