// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag controller: session tracking, rubber-banding, release
//! classification, and settle motion.

use kurbo::Vec2;

use lowboy_anchor::{Anchor, AnchorSet};
use lowboy_motion::{Easing, Motion, Tween};

use crate::constants::{
    BOUNCE_VELOCITY_THRESHOLD, MAX_DIMMING_ALPHA, RUBBER_CONSTANT, SETTLE_EASE_DURATION,
    SETTLE_SPRING_DAMPING, SETTLE_SPRING_DURATION, SKIP_MIDDLE_VELOCITY_THRESHOLD,
};
use crate::surface::Surface;

/// Phase of a pointer drag gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// Finger down; a drag session opens.
    Began,
    /// Finger moved; `translation` is cumulative since `Began`.
    Changed,
    /// Finger lifted; `velocity` is the release velocity.
    Ended,
    /// Gesture cancelled by the system. Handled identically to `Ended`.
    Cancelled,
}

/// One gesture callback's worth of drag data.
///
/// Translation and velocity are both in canvas coordinates; only the
/// vertical component drives the drawer. Velocity is points per second,
/// negative Y pointing up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEvent {
    /// Gesture phase.
    pub phase: DragPhase,
    /// Cumulative finger translation since the gesture began.
    pub translation: Vec2,
    /// Instantaneous finger velocity.
    pub velocity: Vec2,
}

impl DragEvent {
    /// A `Began` event.
    #[must_use]
    pub fn began() -> Self {
        Self {
            phase: DragPhase::Began,
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    /// A `Changed` event with the given cumulative translation.
    #[must_use]
    pub fn changed(translation: Vec2) -> Self {
        Self {
            phase: DragPhase::Changed,
            translation,
            velocity: Vec2::ZERO,
        }
    }

    /// An `Ended` event with the given release velocity.
    #[must_use]
    pub fn ended(velocity: Vec2) -> Self {
        Self {
            phase: DragPhase::Ended,
            translation: Vec2::ZERO,
            velocity,
        }
    }

    /// A `Cancelled` event with the given release velocity.
    #[must_use]
    pub fn cancelled(velocity: Vec2) -> Self {
        Self {
            phase: DragPhase::Cancelled,
            translation: Vec2::ZERO,
            velocity,
        }
    }
}

/// Observable controller state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragState {
    /// No gesture and no settle in flight.
    Idle,
    /// A finger owns the surface.
    Dragging,
    /// A release settle owns the surface.
    Settling,
}

/// Per-gesture record, created on `Began` and consumed on release.
#[derive(Copy, Clone, Debug)]
struct DragSession {
    /// Container center Y when the gesture began.
    start_center_y: f64,
}

/// An in-flight release settle.
#[derive(Copy, Clone, Debug)]
struct Settle {
    motion: Motion,
    dimming: Tween,
}

/// The drawer's gesture state machine: Idle → Dragging → Settling → Idle.
///
/// See the crate docs for the full interaction contract. The controller
/// never allocates and never touches the host; it only rewrites the
/// [`Surface`] it is handed.
#[derive(Clone, Debug)]
pub struct DragController {
    anchors: AnchorSet,
    session: Option<DragSession>,
    settle: Option<Settle>,
}

impl DragController {
    /// Creates an idle controller over the given stops.
    #[must_use]
    pub fn new(anchors: AnchorSet) -> Self {
        Self {
            anchors,
            session: None,
            settle: None,
        }
    }

    /// The current anchor snapshot.
    #[must_use]
    pub fn anchors(&self) -> AnchorSet {
        self.anchors
    }

    /// Replaces the anchor snapshot.
    ///
    /// Safe at any time, including mid-drag or mid-settle: the live drag
    /// session keeps its captured start center, and an in-flight settle
    /// keeps its target coordinate, but all subsequent rubber-band math,
    /// release classification, and settle-completion matching use the new
    /// stops.
    pub fn refresh_anchors(&mut self, anchors: AnchorSet) {
        self.anchors = anchors;
    }

    /// Abandons any live drag session and any in-flight settle.
    ///
    /// Used when another component takes the surface over (dismissal,
    /// pull-down). Abandoned settles never complete and never report.
    pub fn reset(&mut self) {
        self.session = None;
        self.settle = None;
    }

    /// Observable state.
    #[must_use]
    pub fn state(&self) -> DragState {
        if self.session.is_some() {
            DragState::Dragging
        } else if self.settle.is_some() {
            DragState::Settling
        } else {
            DragState::Idle
        }
    }

    /// Whether a finger currently owns the surface.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a release settle is in flight.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Feeds one gesture callback into the state machine.
    ///
    /// `Changed` without a preceding `Began` is ignored; so is a release
    /// without a live session. A `Began` while a settle is still in
    /// flight abandons the settle — its completion never fires — and the
    /// new session captures the surface where it currently is.
    pub fn handle_event(&mut self, event: &DragEvent, surface: &mut Surface) {
        match event.phase {
            DragPhase::Began => {
                self.settle = None;
                self.session = Some(DragSession {
                    start_center_y: surface.center_y(),
                });
            }
            DragPhase::Changed => {
                let Some(session) = self.session else {
                    return;
                };
                self.drag_to(session.start_center_y + event.translation.y, surface);
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                if self.session.take().is_some() {
                    self.release(event.velocity.y, surface);
                }
            }
        }
    }

    /// Advances an in-flight settle, returning the stop reached when it
    /// completes.
    ///
    /// Returns `None` while settling is still under way, when the
    /// controller is idle or dragging, and — deliberately — when the
    /// settle finishes somewhere that matches no current stop (the stops
    /// may have been refreshed mid-settle): only confident settles are
    /// reported.
    pub fn advance(&mut self, dt: f64, surface: &mut Surface) -> Option<Anchor> {
        let settle = self.settle.as_mut()?;
        let y = settle.motion.advance(dt);
        surface.set_min_y(y);
        surface.dimming = settle.dimming.sample(settle.motion.progress());
        if !settle.motion.is_finished() {
            return None;
        }
        self.settle = None;
        let reached = self.anchors.matching(y);
        log::trace!("settle finished at {y}: {reached:?}");
        reached
    }

    /// The dimming-overlay alpha for a drawer whose top edge sits at
    /// `min_y`: zero at and below the dim-start stop, rising to the
    /// maximum at the top stop.
    #[must_use]
    pub fn dimming_alpha(&self, min_y: f64) -> f64 {
        let dim_start = self.anchors.dim_start_y();
        let travel = dim_start - self.anchors.top_y();
        if travel <= 0.0 {
            return 0.0;
        }
        ((dim_start - min_y) / travel).clamp(0.0, 1.0) * MAX_DIMMING_ALPHA
    }

    fn drag_to(&mut self, candidate_center_y: f64, surface: &mut Surface) {
        let candidate_min_y = candidate_center_y - surface.height() / 2.0;
        let overdrag = self.overdrag_amount(candidate_min_y);
        let center_y = candidate_center_y - overdrag * RUBBER_CONSTANT;
        surface.set_center_y(center_y);
        // Dimming only reflects in-bounds travel; while overdragged it
        // keeps its last value.
        if overdrag == 0.0 {
            surface.dimming = self.dimming_alpha(surface.min_y());
        }
    }

    fn release(&mut self, velocity_y: f64, surface: &mut Surface) {
        let target = self.settle_target(surface.min_y(), velocity_y);
        let target_y = self
            .anchors
            .y_of(target)
            .unwrap_or_else(|| self.anchors.bottom_y());
        let bounce = velocity_y.abs() > BOUNCE_VELOCITY_THRESHOLD;
        let motion = if bounce {
            Motion::spring(
                surface.min_y(),
                target_y,
                SETTLE_SPRING_DURATION,
                SETTLE_SPRING_DAMPING,
            )
        } else {
            Motion::eased(
                surface.min_y(),
                target_y,
                SETTLE_EASE_DURATION,
                Easing::EaseInOut,
            )
        };
        log::trace!(
            "released at {} with vy {velocity_y}: settling to {target:?} ({})",
            surface.min_y(),
            if bounce { "spring" } else { "ease" },
        );
        self.settle = Some(Settle {
            motion,
            dimming: Tween::new(surface.dimming, self.dimming_alpha(target_y)),
        });
    }

    /// Classifies a release into a target stop.
    ///
    /// Five-way and total over (speed, direction): skip-threshold flicks
    /// go straight to the end of travel, slow releases snap to the
    /// nearest stop, and everything in between advances one stop in the
    /// direction of travel. The collapsed sixth combination — moderate
    /// speed with no direction — cannot occur, since moderate speed
    /// implies a nonzero vertical velocity.
    fn settle_target(&self, min_y: f64, velocity_y: f64) -> Anchor {
        let speed = velocity_y.abs();
        if speed > SKIP_MIDDLE_VELOCITY_THRESHOLD {
            return if velocity_y < 0.0 {
                Anchor::Top
            } else {
                Anchor::Bottom
            };
        }
        if speed < BOUNCE_VELOCITY_THRESHOLD {
            return self.anchors.nearest(min_y);
        }
        if velocity_y < 0.0 {
            self.anchors.nearest_above(min_y)
        } else {
            debug_assert!(velocity_y > 0.0, "moderate-speed release with zero velocity");
            self.anchors.nearest_below(min_y)
        }
    }

    fn overdrag_amount(&self, min_y: f64) -> f64 {
        let above_top = min_y - self.anchors.top_y();
        let under_bottom = min_y - self.anchors.bottom_y();
        if above_top < 0.0 {
            above_top
        } else if under_bottom > 0.0 {
            under_bottom
        } else {
            0.0
        }
    }
}
