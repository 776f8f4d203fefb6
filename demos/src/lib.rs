// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Lowboy demos: a console-backed canvas, a
//! sample content provider, and a delegate that narrates transitions.

use kurbo::{Rect, Size};
use lowboy_anchor::PositionProvider;
use lowboy_present::{Canvas, DrawerContent, DrawerStyle, PositionDelegate};

/// A stand-in host surface that remembers what the session pushed to it.
#[derive(Debug)]
pub struct ConsoleCanvas {
    bounds: Size,
    /// Last drawer frame the session pushed.
    pub frame: Rect,
    /// Last dimming alpha the session pushed.
    pub dimming: f64,
    /// Whether the content is still attached.
    pub attached: bool,
}

impl ConsoleCanvas {
    /// Creates a canvas with the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: Size::new(width, height),
            frame: Rect::ZERO,
            dimming: 0.0,
            attached: true,
        }
    }
}

impl Canvas for ConsoleCanvas {
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
        println!("canvas: drawer chrome with corner radius {}", style.corner_radius);
    }

    fn detach_content(&mut self) {
        self.attached = false;
        println!("canvas: content detached");
    }
}

/// Sample content with a fixed header and a growable body.
#[derive(Debug)]
pub struct SampleContent {
    /// Height of the content when collapsed to the bottom stop.
    pub collapsed_height: f64,
}

impl PositionProvider for SampleContent {
    fn top_position_y(&self, _canvas_height: f64) -> f64 {
        50.0
    }

    fn middle_position_y(&self, canvas_height: f64) -> Option<f64> {
        Some(canvas_height / 2.0)
    }

    fn bottom_position_y(&self, canvas_height: f64) -> f64 {
        canvas_height - self.collapsed_height
    }
}

impl DrawerContent for SampleContent {}

/// A delegate that narrates every transition to stdout.
#[derive(Debug, Default)]
pub struct Narrator;

impl PositionDelegate for Narrator {
    fn on_reached_top(&mut self) {
        println!("delegate: reached top");
    }

    fn on_reached_middle(&mut self) {
        println!("delegate: reached middle");
    }

    fn on_reached_base(&mut self) {
        println!("delegate: reached base");
    }

    fn on_will_dismiss(&mut self) {
        println!("delegate: will dismiss");
    }

    fn on_did_dismiss(&mut self) {
        println!("delegate: did dismiss");
    }
}
