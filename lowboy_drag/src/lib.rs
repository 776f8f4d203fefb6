// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lowboy_drag --heading-base-level=0

//! Lowboy Drag: the drawer's gesture state machine.
//!
//! A [`DragController`] tracks one finger drag at a time over a
//! [`Surface`] (the drawer's frame plus its dimming-overlay alpha) and an
//! anchor snapshot from `lowboy_anchor`:
//!
//! - **Began** captures the container center and opens a drag session.
//! - **Changed** moves the surface with the finger. Travel beyond the
//!   top/bottom stops is rubber-banded — resisted, not clipped — and the
//!   dimming overlay follows in-bounds travel between the dim-start stop
//!   and the top stop.
//! - **Ended / Cancelled** (identical by policy) classify the release
//!   velocity into a target stop and hand the surface to a settle motion:
//!   a damped spring for brisk releases, a plain ease otherwise.
//!
//! The settle is driven by [`DragController::advance`] from the host's
//! frame loop; on completion it reports the stop the surface actually
//! landed on — and nothing at all when the final position matches no stop,
//! so only confident settles are ever reported.
//!
//! Geometry ownership is structural: every mutating call takes
//! `&mut Surface`, so exactly one component can drive the drawer's frame
//! for the duration of a call, and the controller only moves it between
//! a `Began` and the end of the settle it started.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use lowboy_anchor::{Anchor, AnchorSet};
//! use lowboy_drag::{DragController, DragEvent, Surface};
//!
//! let anchors = AnchorSet::new(50.0, Some(300.0), 600.0);
//! let mut drag = DragController::new(anchors);
//! let mut surface = Surface::new(Rect::new(0.0, 600.0, 400.0, 1350.0));
//!
//! // Finger down, pull up 290 points, let go gently.
//! drag.handle_event(&DragEvent::began(), &mut surface);
//! drag.handle_event(&DragEvent::changed(Vec2::new(0.0, -290.0)), &mut surface);
//! drag.handle_event(&DragEvent::ended(Vec2::new(0.0, -50.0)), &mut surface);
//!
//! // The slow release settles on the nearest stop: the middle one.
//! let mut landed = None;
//! while landed.is_none() {
//!     landed = drag.advance(1.0 / 60.0, &mut surface);
//! }
//! assert_eq!(landed, Some(Anchor::Middle));
//! assert_eq!(surface.min_y(), 300.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod constants;
mod controller;
mod surface;

pub use controller::{DragController, DragEvent, DragPhase, DragState};
pub use surface::Surface;
