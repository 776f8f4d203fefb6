// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-anchoring in action: the content grows while the drawer rests at
//! its bottom stop, and again while the entrance is still in flight.

use lowboy_demos::{ConsoleCanvas, Narrator, SampleContent};
use lowboy_present::DrawerSession;

const FRAME: f64 = 1.0 / 60.0;

fn main() {
    let canvas = ConsoleCanvas::new(400.0, 1000.0);
    let content = SampleContent {
        collapsed_height: 400.0,
    };
    let mut session = DrawerSession::present(canvas, content, Narrator);

    println!("-- content grows mid-entrance; the reveal retargets");
    session.tick(FRAME);
    session.content_mut().collapsed_height = 340.0;
    session.on_layout_changed();
    while session.tick(FRAME) {}
    println!("drawer rests at {}", session.surface().min_y());

    println!("-- content shrinks at rest; the bottom stop re-anchors");
    session.content_mut().collapsed_height = 420.0;
    session.on_layout_changed();
    while session.tick(FRAME) {}
    println!("drawer rests at {}", session.surface().min_y());
}
