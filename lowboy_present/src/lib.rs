// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lowboy_present --heading-base-level=0

//! Lowboy Present: the drawer's presentation lifecycle.
//!
//! A [`DrawerSession`] owns one presented drawer from entrance to
//! dismissal. It wires three consumer-supplied collaborators together:
//!
//! - a [`Canvas`] — the opaque host surface the session reads bounds from
//!   and pushes frame/dimming mutations to;
//! - a [`DrawerContent`] — the embedded content, supplying stop
//!   coordinates (`lowboy_anchor::PositionProvider`) and optional style
//!   overrides;
//! - a [`PositionDelegate`] — the consumer listening for
//!   position-transition events.
//!
//! The session runs the lifecycle state machine (Entering → Resting →
//! Dismissing → Dismissed), delegates live gestures to
//! `lowboy_drag::DragController`, re-anchors the drawer when the content's
//! layout changes — folding the adjustment into an animation that is
//! already in flight rather than racing a second one — and reports every
//! confident settle to the delegate.
//!
//! Everything is single-threaded and host-driven: the host forwards
//! gesture events and layout notifications as they arrive and calls
//! [`DrawerSession::tick`] from its frame loop while
//! [`DrawerSession::is_animating`] holds.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use lowboy_anchor::PositionProvider;
//! use lowboy_present::{
//!     Canvas, DrawerContent, DrawerSession, DrawerStyle, PositionDelegate, SessionPhase,
//! };
//!
//! // A recording stand-in for the host's view surface.
//! struct Host {
//!     bounds: Size,
//!     frame: Rect,
//!     dimming: f64,
//!     attached: bool,
//! }
//!
//! impl Canvas for Host {
//!     fn bounds(&self) -> Size {
//!         self.bounds
//!     }
//!     fn set_drawer_frame(&mut self, frame: Rect) {
//!         self.frame = frame;
//!     }
//!     fn set_dimming(&mut self, alpha: f64) {
//!         self.dimming = alpha;
//!     }
//!     fn apply_style(&mut self, _style: &DrawerStyle) {}
//!     fn detach_content(&mut self) {
//!         self.attached = false;
//!     }
//! }
//!
//! struct Sheet;
//!
//! impl PositionProvider for Sheet {
//!     fn top_position_y(&self, _canvas_height: f64) -> f64 {
//!         50.0
//!     }
//!     fn bottom_position_y(&self, canvas_height: f64) -> f64 {
//!         canvas_height - 200.0
//!     }
//! }
//!
//! impl DrawerContent for Sheet {}
//!
//! #[derive(Default)]
//! struct Events {
//!     reached_base: u32,
//!     dismissed: bool,
//! }
//!
//! impl PositionDelegate for Events {
//!     fn on_reached_base(&mut self) {
//!         self.reached_base += 1;
//!     }
//!     fn on_did_dismiss(&mut self) {
//!         self.dismissed = true;
//!     }
//! }
//!
//! let host = Host {
//!     bounds: Size::new(400.0, 800.0),
//!     frame: Rect::ZERO,
//!     dimming: 0.0,
//!     attached: true,
//! };
//! let mut session = DrawerSession::present(host, Sheet, Events::default());
//!
//! // Run the entrance reveal to completion.
//! while session.tick(1.0 / 60.0) {}
//! assert_eq!(session.phase(), SessionPhase::Resting);
//! assert_eq!(session.surface().min_y(), 600.0);
//! assert_eq!(session.delegate().reached_base, 1);
//!
//! // Dismiss and run the slide-out.
//! session.dismiss();
//! while session.tick(1.0 / 60.0) {}
//! assert_eq!(session.phase(), SessionPhase::Dismissed);
//! assert!(!session.canvas().attached);
//! assert!(session.delegate().dismissed);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod canvas;
mod content;
mod delegate;
mod session;

pub use canvas::Canvas;
pub use content::{DEFAULT_CORNER_RADIUS, DrawerContent, DrawerStyle};
pub use delegate::PositionDelegate;
pub use session::{
    DISMISS_DURATION, DrawerSession, ENTRANCE_DURATION, OVERPULL_PADDING, PULL_DOWN_DURATION,
    REANCHOR_DURATION, SessionPhase,
};
