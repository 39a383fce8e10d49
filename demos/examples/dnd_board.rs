// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board drag.
//!
//! Drag a card across a three-column board, one column scrolled, and print the droppable it is
//! over at each step.
//!
//! Run:
//! - `cargo run -p understory_demos --example dnd_board`

use kurbo::{Rect, Vec2};
use understory_dnd::{Axis, Droppable, Subject, droppable_over};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Column {
    Todo,
    Doing,
    Done,
}

fn main() {
    // Visible part of the page.
    let viewport = Rect::new(0.0, 0.0, 700.0, 600.0);

    let doing_page = Rect::new(240.0, -300.0, 460.0, 900.0);
    let board = [
        Droppable::new(Column::Todo, Axis::Vertical, Rect::new(0.0, 0.0, 220.0, 600.0)),
        // Scrolled down by 300: only part of it is on screen.
        Droppable::new(Column::Doing, Axis::Vertical, doing_page)
            .with_subject(Subject::clipped(doing_page, viewport)),
        // Archived lists do not accept drops.
        Droppable::new(Column::Done, Axis::Vertical, Rect::new(480.0, 0.0, 700.0, 600.0))
            .with_enabled(false),
    ];

    let mut card = Rect::new(10.0, 40.0, 210.0, 100.0);
    let mut last = None;
    for step in 0..14 {
        let over = droppable_over(card, &board);
        if over != last {
            println!("step {step:2}: card at x={:5.1} is over {over:?}", card.x0);
            last = over;
        }
        card = card + Vec2::new(50.0, 0.0);
    }
    assert_eq!(last, None, "disabled and off-board columns never take the card");

    // A card stretched across the board overlaps two columns; the larger overlap wins.
    let wide = Rect::new(100.0, 40.0, 420.0, 100.0);
    let over = droppable_over(wide, &board);
    println!("wide card is over {over:?}");
    assert_eq!(over, Some(Column::Doing));
}
