// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host canvas contract.

use kurbo::{Rect, Size};

use crate::content::DrawerStyle;

/// The host screen's view surface, as the drawer session sees it.
///
/// The session never walks the host's view hierarchy: it reads the
/// canvas's bounds and pushes frame and dimming mutations back. All calls
/// arrive on the host's control thread, in the order the session decides
/// them.
pub trait Canvas {
    /// Current canvas size. A canvas that has not been laid out yet may
    /// report a zero size; layout-dependent session operations treat that
    /// as "not ready" and no-op.
    fn bounds(&self) -> Size;

    /// Positions the drawer container.
    fn set_drawer_frame(&mut self, frame: Rect);

    /// Sets the dimming-overlay alpha in `[0, 1]`.
    fn set_dimming(&mut self, alpha: f64);

    /// Applies the content's style overrides once, at presentation time.
    fn apply_style(&mut self, style: &DrawerStyle);

    /// Removes the embedded content from the host. Called exactly once,
    /// during dismissal, before the delegate hears `on_did_dismiss`.
    fn detach_content(&mut self);
}
