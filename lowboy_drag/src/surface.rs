// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer surface: frame plus dimming overlay alpha.

use kurbo::Rect;

/// The mutable presentation state of the drawer.
///
/// Exactly one component mutates a `Surface` at a time: the drag
/// controller while a drag or settle is live, the presentation layer
/// otherwise. Callers hand it out as `&mut Surface`, which makes that
/// ownership rule structural rather than a convention.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    /// The drawer container's frame in canvas coordinates.
    pub frame: Rect,
    /// Dimming-overlay alpha in `[0, 1]`.
    pub dimming: f64,
}

impl Surface {
    /// Creates a surface with the given frame and no dimming.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            dimming: 0.0,
        }
    }

    /// The frame's top edge (min-Y), the coordinate stops are defined in.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.frame.y0
    }

    /// The frame's vertical center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.frame.center().y
    }

    /// The frame's height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.frame.height()
    }

    /// Moves the frame so its top edge sits at `y`, preserving its size.
    pub fn set_min_y(&mut self, y: f64) {
        self.frame = self.frame.with_origin((self.frame.x0, y));
    }

    /// Moves the frame so its vertical center sits at `y`, preserving its
    /// size.
    pub fn set_center_y(&mut self, y: f64) {
        self.set_min_y(y - self.height() / 2.0);
    }

    /// Resizes the frame to `height`, keeping its origin.
    pub fn set_height(&mut self, height: f64) {
        self.frame = Rect::new(
            self.frame.x0,
            self.frame.y0,
            self.frame.x1,
            self.frame.y0 + height,
        );
    }
}
