// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end presentation scenarios over a recording canvas.

use kurbo::{Point, Rect, Size, Vec2};
use lowboy_anchor::{DrawerPosition, PositionProvider};
use lowboy_drag::{DragEvent, DragState};
use lowboy_present::{
    Canvas, DrawerContent, DrawerSession, DrawerStyle, PositionDelegate, SessionPhase,
};

const FRAME: f64 = 1.0 / 60.0;

#[derive(Debug)]
struct TestCanvas {
    bounds: Size,
    frame: Rect,
    dimming: f64,
    attached: bool,
    style: Option<DrawerStyle>,
}

impl TestCanvas {
    fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: Size::new(width, height),
            frame: Rect::ZERO,
            dimming: 0.0,
            attached: true,
            style: None,
        }
    }
}

impl Canvas for TestCanvas {
    fn bounds(&self) -> Size {
        self.bounds
    }
    fn set_drawer_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
    fn set_dimming(&mut self, alpha: f64) {
        self.dimming = alpha;
    }
    fn apply_style(&mut self, style: &DrawerStyle) {
        self.style = Some(*style);
    }
    fn detach_content(&mut self) {
        self.attached = false;
    }
}

#[derive(Debug)]
struct Content {
    top: f64,
    middle: Option<f64>,
    /// Height of the visible sliver at the bottom stop; the stop itself
    /// is the canvas height minus this.
    bottom_height: f64,
}

impl PositionProvider for Content {
    fn top_position_y(&self, _canvas_height: f64) -> f64 {
        self.top
    }
    fn middle_position_y(&self, _canvas_height: f64) -> Option<f64> {
        self.middle
    }
    fn bottom_position_y(&self, canvas_height: f64) -> f64 {
        canvas_height - self.bottom_height
    }
}

impl DrawerContent for Content {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Event {
    Top,
    Middle,
    Base,
    WillDismiss,
    DidDismiss,
}

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<Event>,
}

impl PositionDelegate for Recorder {
    fn on_reached_top(&mut self) {
        self.events.push(Event::Top);
    }
    fn on_reached_middle(&mut self) {
        self.events.push(Event::Middle);
    }
    fn on_reached_base(&mut self) {
        self.events.push(Event::Base);
    }
    fn on_will_dismiss(&mut self) {
        self.events.push(Event::WillDismiss);
    }
    fn on_did_dismiss(&mut self) {
        self.events.push(Event::DidDismiss);
    }
}

type Session = DrawerSession<TestCanvas, Content, Recorder>;

/// Canvas 400x1000, stops at 50 / 300 / 600.
fn present_default() -> Session {
    DrawerSession::present(
        TestCanvas::new(400.0, 1000.0),
        Content {
            top: 50.0,
            middle: Some(300.0),
            bottom_height: 400.0,
        },
        Recorder::default(),
    )
}

fn run(session: &mut Session) {
    let mut ticks = 0;
    while session.tick(FRAME) {
        ticks += 1;
        assert!(ticks < 1000, "animation never completed");
    }
}

fn drag_to_top(session: &mut Session) {
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -550.0)));
    session.on_drag_event(&DragEvent::ended(Vec2::new(0.0, -200.0)));
    run(session);
}

#[test]
fn entrance_reveals_to_the_bottom_stop() {
    let mut session = present_default();
    // The container starts fully below the canvas, overpull-padded.
    assert_eq!(session.phase(), SessionPhase::Entering);
    assert_eq!(session.surface().min_y(), 1000.0);
    assert_eq!(session.surface().height(), 1150.0);
    assert_eq!(session.canvas().frame, Rect::new(0.0, 1000.0, 400.0, 2150.0));

    run(&mut session);
    assert_eq!(session.phase(), SessionPhase::Resting);
    assert_eq!(session.surface().min_y(), 600.0);
    assert_eq!(session.position(), DrawerPosition::Bottom);
    assert_eq!(session.delegate().events, vec![Event::Base]);
}

#[test]
fn entrance_is_animated_rather_than_a_jump() {
    let mut session = present_default();
    session.tick(FRAME);
    let min_y = session.surface().min_y();
    assert!(min_y < 1000.0 && min_y > 600.0);
    assert!(session.is_animating());
}

#[test]
fn drag_events_are_ignored_while_entering() {
    let mut session = present_default();
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -100.0)));
    assert_eq!(session.drag().state(), DragState::Idle);
    assert_eq!(session.surface().min_y(), 1000.0);
}

#[test]
fn style_is_applied_at_present_time() {
    let session = present_default();
    let style = session.canvas().style.expect("style never reached the canvas");
    assert_eq!(style, DrawerStyle::default());
    assert_eq!(style.corner_radius, 10.0);
    assert!(style.background.is_none());
}

#[test]
fn dragging_to_the_top_dims_and_reports_top() {
    let mut session = present_default();
    run(&mut session);
    drag_to_top(&mut session);
    assert_eq!(session.surface().min_y(), 50.0);
    assert_eq!(session.position(), DrawerPosition::Top);
    assert_eq!(session.canvas().dimming, 0.4);
    assert_eq!(session.delegate().events, vec![Event::Base, Event::Top]);
}

#[test]
fn dimming_tracks_in_bounds_travel_onto_the_canvas() {
    let mut session = present_default();
    run(&mut session);
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -425.0)));
    // Halfway between the dim-start stop (300) and top (50).
    assert_eq!(session.surface().min_y(), 175.0);
    assert_eq!(session.canvas().dimming, 0.2);
    assert_eq!(session.position(), DrawerPosition::Between);
}

#[test]
fn slow_release_near_the_middle_stop_reports_middle() {
    let mut session = present_default();
    run(&mut session);
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -290.0)));
    assert_eq!(session.surface().min_y(), 310.0);
    session.on_drag_event(&DragEvent::ended(Vec2::new(0.0, 50.0)));
    run(&mut session);
    assert_eq!(session.surface().min_y(), 300.0);
    assert_eq!(session.delegate().events, vec![Event::Base, Event::Middle]);
}

#[test]
fn layout_change_while_resting_at_the_bottom_stop_reanchors() {
    let mut session = present_default();
    run(&mut session);
    // Content grows; the bottom stop moves from 600 to 650.
    session.content_mut().bottom_height = 350.0;
    session.on_layout_changed();
    assert!(session.is_animating());
    assert_eq!(session.phase(), SessionPhase::Resting);
    run(&mut session);
    assert_eq!(session.surface().min_y(), 650.0);
    assert_eq!(session.position(), DrawerPosition::Bottom);
    // reached-base is reported again for the re-anchored stop.
    assert_eq!(session.delegate().events, vec![Event::Base, Event::Base]);
}

#[test]
fn layout_change_resizes_the_container_for_the_new_top_stop() {
    let mut session = present_default();
    run(&mut session);
    session.content_mut().top = 80.0;
    session.on_layout_changed();
    // Height follows the top stop; the drawer rests at the unchanged
    // bottom stop, so nothing animates.
    assert_eq!(session.surface().height(), 1120.0);
    assert_eq!(session.canvas().frame.height(), 1120.0);
    assert!(!session.is_animating());
    assert_eq!(session.delegate().events, vec![Event::Base]);
}

#[test]
fn layout_change_during_entrance_folds_into_the_reveal() {
    let mut session = present_default();
    session.tick(FRAME);
    session.tick(FRAME);
    session.content_mut().bottom_height = 350.0;
    session.on_layout_changed();
    // Still the same entrance animation, now heading for the new stop.
    assert_eq!(session.phase(), SessionPhase::Entering);
    run(&mut session);
    assert_eq!(session.surface().min_y(), 650.0);
    // One reveal, one reached-base.
    assert_eq!(session.delegate().events, vec![Event::Base]);
}

#[test]
fn reanchoring_matches_stops_in_top_first_priority() {
    let mut session = present_default();
    run(&mut session);
    drag_to_top(&mut session);
    // Both the top and middle stops move while resting at the top.
    session.content_mut().top = 80.0;
    session.content_mut().middle = Some(320.0);
    session.on_layout_changed();
    run(&mut session);
    assert_eq!(session.surface().min_y(), 80.0);
    assert_eq!(session.canvas().dimming, 0.4);
    assert_eq!(
        session.delegate().events,
        vec![Event::Base, Event::Top, Event::Top]
    );
}

#[test]
fn layout_change_is_idempotent_without_geometry_changes() {
    let mut session = present_default();
    run(&mut session);
    session.on_layout_changed();
    assert!(!session.is_animating());
    let frame = session.canvas().frame;
    session.on_layout_changed();
    assert!(!session.is_animating());
    assert_eq!(session.canvas().frame, frame);
    assert_eq!(session.delegate().events, vec![Event::Base]);
}

#[test]
fn drag_events_are_ignored_while_a_reposition_is_in_flight() {
    let mut session = present_default();
    run(&mut session);
    session.content_mut().bottom_height = 350.0;
    session.on_layout_changed();
    assert!(session.is_animating());
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -100.0)));
    assert_eq!(session.drag().state(), DragState::Idle);
    run(&mut session);
    assert_eq!(session.surface().min_y(), 650.0);
}

#[test]
fn refresh_during_a_live_drag_leaves_the_finger_in_charge() {
    let mut session = present_default();
    run(&mut session);
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -200.0)));
    assert_eq!(session.surface().min_y(), 400.0);
    session.content_mut().bottom_height = 350.0;
    session.on_layout_changed();
    // No repositioning animation; the drag session still owns the surface.
    assert!(!session.is_animating());
    assert_eq!(session.drag().state(), DragState::Dragging);
    assert_eq!(session.surface().min_y(), 400.0);
    // The refreshed stops drive the release.
    session.on_drag_event(&DragEvent::ended(Vec2::new(0.0, 500.0)));
    run(&mut session);
    assert_eq!(session.surface().min_y(), 650.0);
}

#[test]
fn dismissal_detaches_after_will_and_before_did() {
    let mut session = present_default();
    run(&mut session);
    session.dismiss();
    // will-dismiss fires before the slide-out starts.
    assert_eq!(
        session.delegate().events,
        vec![Event::Base, Event::WillDismiss]
    );
    assert!(session.canvas().attached);
    assert_eq!(session.phase(), SessionPhase::Dismissing);

    run(&mut session);
    assert_eq!(session.phase(), SessionPhase::Dismissed);
    assert_eq!(session.surface().min_y(), 1000.0);
    assert_eq!(session.canvas().dimming, 0.0);
    assert!(!session.canvas().attached);
    assert_eq!(
        session.delegate().events,
        vec![Event::Base, Event::WillDismiss, Event::DidDismiss]
    );
}

#[test]
fn dismissed_sessions_ignore_every_operation() {
    let mut session = present_default();
    run(&mut session);
    session.dismiss();
    run(&mut session);
    let events = session.delegate().events.clone();
    session.dismiss();
    session.pull_down();
    session.on_layout_changed();
    session.on_drag_event(&DragEvent::began());
    assert!(!session.is_animating());
    assert_eq!(session.delegate().events, events);
}

#[test]
fn dismiss_during_entrance_takes_the_surface_over() {
    let mut session = present_default();
    session.tick(FRAME);
    session.dismiss();
    run(&mut session);
    assert_eq!(session.phase(), SessionPhase::Dismissed);
    // The entrance never completed, so reached-base never fired.
    assert_eq!(
        session.delegate().events,
        vec![Event::WillDismiss, Event::DidDismiss]
    );
}

#[test]
fn pull_down_returns_to_base_without_detaching() {
    let mut session = present_default();
    run(&mut session);
    drag_to_top(&mut session);
    session.pull_down();
    run(&mut session);
    assert_eq!(session.phase(), SessionPhase::Resting);
    assert_eq!(session.surface().min_y(), 600.0);
    assert_eq!(session.canvas().dimming, 0.0);
    assert!(session.canvas().attached);
    assert_eq!(
        session.delegate().events,
        vec![Event::Base, Event::Top, Event::Base]
    );
}

#[test]
fn pull_down_during_a_settle_takes_over_silently() {
    let mut session = present_default();
    run(&mut session);
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -430.0)));
    session.on_drag_event(&DragEvent::ended(Vec2::new(0.0, -50.0)));
    assert_eq!(session.drag().state(), DragState::Settling);
    session.tick(FRAME);
    session.pull_down();
    assert_eq!(session.drag().state(), DragState::Idle);
    run(&mut session);
    assert_eq!(session.surface().min_y(), 600.0);
    // The abandoned settle never reported; only the pull-down did.
    assert_eq!(session.delegate().events, vec![Event::Base, Event::Base]);
}

#[test]
fn pull_down_is_ignored_while_a_finger_is_down() {
    let mut session = present_default();
    run(&mut session);
    session.on_drag_event(&DragEvent::began());
    session.on_drag_event(&DragEvent::changed(Vec2::new(0.0, -300.0)));
    session.pull_down();
    assert!(!session.is_animating());
    assert_eq!(session.drag().state(), DragState::Dragging);
}

#[test]
fn hit_testing_covers_the_drawer_and_the_dimmed_backdrop() {
    let mut session = present_default();
    run(&mut session);
    // Resting at the bottom, no dimming: only the drawer itself hits.
    assert!(session.hit_test(Point::new(200.0, 700.0)));
    assert!(!session.hit_test(Point::new(200.0, 100.0)));

    drag_to_top(&mut session);
    // Fully open: the dimmed backdrop above the drawer captures too.
    assert!(session.hit_test(Point::new(200.0, 10.0)));

    session.dismiss();
    run(&mut session);
    assert!(!session.hit_test(Point::new(200.0, 700.0)));
}

#[test]
fn teardown_returns_the_collaborators() {
    let mut session = present_default();
    run(&mut session);
    let (canvas, content, delegate) = session.into_parts();
    assert!(canvas.attached);
    assert_eq!(content.top, 50.0);
    assert_eq!(delegate.events, vec![Event::Base]);
}
