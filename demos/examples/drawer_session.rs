// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drawer session: entrance, a couple of drags, pull-down,
//! and dismissal, narrated to stdout.

use kurbo::Vec2;
use lowboy_demos::{ConsoleCanvas, Narrator, SampleContent};
use lowboy_drag::DragEvent;
use lowboy_present::DrawerSession;

const FRAME: f64 = 1.0 / 60.0;

fn run(session: &mut DrawerSession<ConsoleCanvas, SampleContent, Narrator>) {
    while session.tick(FRAME) {}
}

fn main() {
    let canvas = ConsoleCanvas::new(400.0, 1000.0);
    let content = SampleContent {
        collapsed_height: 400.0,
    };
    let mut session = DrawerSession::present(canvas, content, Narrator);

    println!("-- entrance");
    run(&mut session);
    println!("drawer rests at {}", session.surface().min_y());

    println!("-- slow drag toward the middle stop");
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -80.0)));
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -110.0)));
    session.on_drag_event(&DragEvent::ended(Vec2::new(0.0, -60.0)));
    run(&mut session);
    println!("drawer rests at {}", session.surface().min_y());

    println!("-- flick to the top");
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -120.0)));
    session.on_drag_event(&DragEvent::ended(Vec2::new(0.0, -1800.0)));
    run(&mut session);
    println!(
        "drawer rests at {} with dimming {:.2}",
        session.surface().min_y(),
        session.canvas().dimming
    );

    println!("-- pull down");
    session.pull_down();
    run(&mut session);

    println!("-- dismiss");
    session.dismiss();
    run(&mut session);
    println!("phase: {:?}", session.phase());
}
