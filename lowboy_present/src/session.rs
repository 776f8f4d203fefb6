// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation session: lifecycle, re-anchoring, and delegation.

use kurbo::{Point, Rect};

use lowboy_anchor::{Anchor, AnchorSet, DrawerPosition, quantize};
use lowboy_drag::{DragController, DragEvent, DragState, Surface};
use lowboy_motion::{Easing, Motion, Tween};

use crate::canvas::Canvas;
use crate::content::DrawerContent;
use crate::delegate::PositionDelegate;

/// Blank space appended below the bottom stop so the drawer can be
/// dragged or settled slightly past it without exposing the host behind.
pub const OVERPULL_PADDING: f64 = 200.0;

/// Duration of the entrance reveal, in seconds.
pub const ENTRANCE_DURATION: f64 = 0.25;

/// Duration of the dismissal slide-out, in seconds.
pub const DISMISS_DURATION: f64 = 0.25;

/// Duration of a programmatic pull-down to the bottom stop, in seconds.
pub const PULL_DOWN_DURATION: f64 = 0.25;

/// Duration of a re-anchoring move after a layout change, in seconds.
pub const REANCHOR_DURATION: f64 = 0.25;

/// Lifecycle phase of a presentation session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// The entrance reveal is in flight.
    Entering,
    /// The drawer is interactive; the drag controller owns gestures.
    Resting,
    /// The dismissal slide-out is in flight.
    Dismissing,
    /// Terminal. The content has been detached.
    Dismissed,
}

/// What an in-flight session animation is for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FlightIntent {
    Enter,
    MoveTo(Anchor),
    PullDown,
    Dismiss,
}

impl FlightIntent {
    /// The stop this animation is logically heading for, if any. A layout
    /// change folds into the animation when this stop's coordinate moves.
    fn target_anchor(self) -> Option<Anchor> {
        match self {
            Self::Enter | Self::PullDown => Some(Anchor::Bottom),
            Self::MoveTo(anchor) => Some(anchor),
            Self::Dismiss => None,
        }
    }
}

/// A session-owned animation. At most one exists at a time, and while it
/// does, drag input is ignored — the two never race on the surface.
#[derive(Copy, Clone, Debug)]
struct Flight {
    motion: Motion,
    dimming: Tween,
    intent: FlightIntent,
}

/// A live drawer presentation.
///
/// The session is the handle the original closure-injection design is
/// replaced with: it owns the canvas, the content, the delegate, the
/// drag controller, and the surface, and it exposes the dismiss /
/// pull-down / layout-changed flows as methods. Constructed with
/// [`DrawerSession::present`]; torn down explicitly with
/// [`DrawerSession::into_parts`].
///
/// The host forwards gesture events via
/// [`on_drag_event`](DrawerSession::on_drag_event), layout passes via
/// [`on_layout_changed`](DrawerSession::on_layout_changed), and frame
/// deltas via [`tick`](DrawerSession::tick). Everything — including
/// delegate callbacks — runs synchronously inside those calls, on the
/// host's control thread.
#[derive(Debug)]
pub struct DrawerSession<V, C, D>
where
    V: Canvas,
    C: DrawerContent,
    D: PositionDelegate,
{
    canvas: V,
    content: C,
    delegate: D,
    drag: DragController,
    surface: Surface,
    phase: SessionPhase,
    flight: Option<Flight>,
}

impl<V, C, D> DrawerSession<V, C, D>
where
    V: Canvas,
    C: DrawerContent,
    D: PositionDelegate,
{
    /// Presents `content` in a drawer over `canvas`.
    ///
    /// The container starts fully below the canvas, sized to the top stop
    /// plus [`OVERPULL_PADDING`], with the content's style pushed to the
    /// canvas; the entrance reveal then eases it up to the bottom stop.
    /// The host should call this once layout has produced a real canvas
    /// size — an unsized canvas yields a degenerate initial geometry that
    /// the first [`on_layout_changed`](Self::on_layout_changed) repairs.
    #[must_use]
    pub fn present(mut canvas: V, content: C, delegate: D) -> Self {
        let bounds = canvas.bounds();
        let anchors = AnchorSet::resolve(&content, bounds.height);
        let height = bounds.height - anchors.top_y() + OVERPULL_PADDING;
        let frame = Rect::new(0.0, bounds.height, bounds.width, bounds.height + height);
        canvas.apply_style(&content.style());
        log::debug!(
            "presenting drawer: stops {anchors:?}, start frame {frame:?}"
        );
        let mut session = Self {
            canvas,
            content,
            delegate,
            drag: DragController::new(anchors),
            surface: Surface::new(frame),
            phase: SessionPhase::Entering,
            flight: Some(Flight {
                motion: Motion::eased(
                    bounds.height,
                    anchors.bottom_y(),
                    ENTRANCE_DURATION,
                    Easing::EaseInOut,
                ),
                dimming: Tween::new(0.0, 0.0),
                intent: FlightIntent::Enter,
            }),
        };
        session.sync_canvas();
        session
    }

    /// Advances whatever animation currently owns the surface and fires
    /// any completion effects. Returns `true` while motion is still in
    /// flight, so hosts can keep scheduling frames.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.flight.is_some() {
            self.advance_flight(dt);
        } else if self.drag.is_settling() {
            let reached = self.drag.advance(dt, &mut self.surface);
            self.sync_canvas();
            if let Some(anchor) = reached {
                self.notify_reached(anchor);
            }
        }
        self.is_animating()
    }

    /// Routes a gesture event to the drag controller.
    ///
    /// Ignored outside [`SessionPhase::Resting`] and while a session
    /// animation (entrance, re-anchoring, pull-down, dismissal) owns the
    /// surface — drag input is disabled for exactly as long as a
    /// programmatic reposition is in flight.
    pub fn on_drag_event(&mut self, event: &DragEvent) {
        if self.phase != SessionPhase::Resting || self.flight.is_some() {
            return;
        }
        self.drag.handle_event(event, &mut self.surface);
        self.sync_canvas();
    }

    /// Re-derives the stops after the content or canvas changed size.
    ///
    /// Resizes the container for the new top stop, then preserves the
    /// drawer's *logical* position: if an in-flight session animation is
    /// heading for a stop whose coordinate moved, the new coordinate is
    /// folded into that same animation; otherwise, if the drawer rests on
    /// a stop of the previous snapshot whose coordinate moved (matched in
    /// top > middle > bottom priority), it animates to the stop's new
    /// coordinate and re-reports it on completion. At most one
    /// repositioning fires per call. A live finger drag keeps the
    /// surface; only the drag controller's stop snapshot is refreshed.
    pub fn on_layout_changed(&mut self) {
        if matches!(self.phase, SessionPhase::Dismissing | SessionPhase::Dismissed) {
            return;
        }
        let bounds = self.canvas.bounds();
        if bounds.height <= 0.0 {
            return;
        }
        let previous = self.drag.anchors();
        let anchors = AnchorSet::resolve(&self.content, bounds.height);
        self.drag.refresh_anchors(anchors);

        let new_height = bounds.height - anchors.top_y() + OVERPULL_PADDING;
        if self.surface.height() != new_height {
            log::debug!(
                "container height {} -> {new_height}",
                self.surface.height()
            );
            self.surface.set_height(new_height);
        }

        if self.drag.state() != DragState::Idle {
            // A drag or settle owns the position; it picked up the new
            // stops through refresh_anchors.
            self.sync_canvas();
            return;
        }

        if let Some(flight) = self.flight.as_mut() {
            if let Some(target) = flight.intent.target_anchor() {
                let old_y = previous
                    .y_of(target)
                    .unwrap_or_else(|| previous.bottom_y());
                let new_y = anchors.y_of(target).unwrap_or_else(|| anchors.bottom_y());
                if quantize(new_y) != quantize(old_y) {
                    log::trace!("folding stop move {old_y} -> {new_y} into flight");
                    flight.motion.retarget(new_y);
                }
            }
            self.sync_canvas();
            return;
        }

        let current = self.surface.min_y();
        let mut reposition = None;
        for (anchor, old_y) in previous.stops() {
            if quantize(current) != quantize(old_y) {
                continue;
            }
            let Some(new_y) = anchors.y_of(anchor) else {
                continue;
            };
            if quantize(new_y) != quantize(old_y) {
                reposition = Some((anchor, new_y));
                break;
            }
        }
        if let Some((anchor, new_y)) = reposition {
            log::debug!("re-anchoring {anchor:?} from {current} to {new_y}");
            self.flight = Some(Flight {
                motion: Motion::eased(current, new_y, REANCHOR_DURATION, Easing::EaseInOut),
                dimming: Tween::new(self.surface.dimming, self.drag.dimming_alpha(new_y)),
                intent: FlightIntent::MoveTo(anchor),
            });
        }
        self.sync_canvas();
    }

    /// Dismisses the drawer: notifies `on_will_dismiss`, slides the
    /// container fully off-canvas while fading the dimming overlay, then
    /// detaches the content and notifies `on_did_dismiss`. Terminal; any
    /// later call no-ops. Takes the surface over from whatever was
    /// animating or dragging.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, SessionPhase::Dismissing | SessionPhase::Dismissed) {
            return;
        }
        self.drag.reset();
        self.delegate.on_will_dismiss();
        self.phase = SessionPhase::Dismissing;
        let off_canvas = self.canvas.bounds().height;
        log::debug!("dismissing drawer from {}", self.surface.min_y());
        self.flight = Some(Flight {
            motion: Motion::eased(
                self.surface.min_y(),
                off_canvas,
                DISMISS_DURATION,
                Easing::EaseInOut,
            ),
            dimming: Tween::new(self.surface.dimming, 0.0),
            intent: FlightIntent::Dismiss,
        });
    }

    /// Returns the drawer to its bottom stop, fading the dimming overlay,
    /// and re-reports reached-base on completion. The content stays
    /// attached. Only meaningful while resting; ignored during a live
    /// finger drag and in every other phase.
    pub fn pull_down(&mut self) {
        if self.phase != SessionPhase::Resting || self.drag.is_dragging() {
            return;
        }
        self.drag.reset();
        let bottom = self.drag.anchors().bottom_y();
        log::debug!("pulling drawer down to {bottom}");
        self.flight = Some(Flight {
            motion: Motion::eased(
                self.surface.min_y(),
                bottom,
                PULL_DOWN_DURATION,
                Easing::EaseInOut,
            ),
            dimming: Tween::new(self.surface.dimming, 0.0),
            intent: FlightIntent::PullDown,
        });
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Where the drawer sits relative to the current stops. `Between`
    /// while mid-drag or mid-animation.
    #[must_use]
    pub fn position(&self) -> DrawerPosition {
        self.drag.anchors().classify(self.surface.min_y())
    }

    /// Whether any motion — session animation or drag settle — is in
    /// flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flight.is_some() || self.drag.is_settling()
    }

    /// The drawer's current surface state.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The drag controller, for state inspection.
    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Whether a point should be captured by the drawer's chrome: inside
    /// the container, or anywhere over an active dimming overlay (taps on
    /// the dimmed backdrop must not fall through to the host).
    #[must_use]
    pub fn hit_test(&self, point: Point) -> bool {
        self.phase != SessionPhase::Dismissed
            && (self.surface.frame.contains(point) || self.surface.dimming > 0.0)
    }

    /// Shared access to the canvas.
    #[must_use]
    pub fn canvas(&self) -> &V {
        &self.canvas
    }

    /// Shared access to the content.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the content, e.g. to change what it will report
    /// from its position provider before `on_layout_changed`.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Shared access to the delegate.
    #[must_use]
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Tears the session down, returning its collaborators. Works in any
    /// phase; a host abandoning a live session is responsible for its own
    /// view cleanup.
    #[must_use]
    pub fn into_parts(self) -> (V, C, D) {
        (self.canvas, self.content, self.delegate)
    }

    fn advance_flight(&mut self, dt: f64) {
        let Some(flight) = self.flight.as_mut() else {
            return;
        };
        let y = flight.motion.advance(dt);
        let dimming = flight.dimming.sample(flight.motion.progress());
        let finished = flight.motion.is_finished();
        let intent = flight.intent;
        self.surface.set_min_y(y);
        self.surface.dimming = dimming;
        if finished {
            self.flight = None;
        }
        self.sync_canvas();
        if finished {
            self.finish_flight(intent);
        }
    }

    fn finish_flight(&mut self, intent: FlightIntent) {
        match intent {
            FlightIntent::Enter | FlightIntent::MoveTo(_) | FlightIntent::PullDown => {
                self.phase = SessionPhase::Resting;
                log::debug!("drawer resting at {}", self.surface.min_y());
                if let Some(anchor) = self.drag.anchors().matching(self.surface.min_y()) {
                    self.notify_reached(anchor);
                }
            }
            FlightIntent::Dismiss => {
                self.canvas.detach_content();
                self.phase = SessionPhase::Dismissed;
                log::debug!("drawer dismissed");
                self.delegate.on_did_dismiss();
            }
        }
    }

    fn notify_reached(&mut self, anchor: Anchor) {
        match anchor {
            Anchor::Top => self.delegate.on_reached_top(),
            Anchor::Middle => self.delegate.on_reached_middle(),
            Anchor::Bottom => self.delegate.on_reached_base(),
        }
    }

    fn sync_canvas(&mut self) {
        self.canvas.set_drawer_frame(self.surface.frame);
        self.canvas.set_dimming(self.surface.dimming);
    }
}
