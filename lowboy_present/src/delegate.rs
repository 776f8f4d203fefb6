// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position delegation to the presenting consumer.

/// Receives drawer position-transition events.
///
/// All callbacks fire on the control thread, from inside the session call
/// that completed the transition (usually `tick`). Reached events fire
/// only for confident settles — a transition that ends between stops
/// reports nothing. After [`PositionDelegate::on_did_dismiss`] the
/// drawer's geometry is gone; the consumer must not touch it.
pub trait PositionDelegate {
    /// The drawer settled on its top stop.
    fn on_reached_top(&mut self) {}

    /// The drawer settled on its middle stop.
    fn on_reached_middle(&mut self) {}

    /// The drawer settled on its bottom stop.
    fn on_reached_base(&mut self) {}

    /// Dismissal is about to animate.
    fn on_will_dismiss(&mut self) {}

    /// Dismissal finished and the content has been detached.
    fn on_did_dismiss(&mut self) {}
}
