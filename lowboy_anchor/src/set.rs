// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor snapshots and stop classification.

use smallvec::SmallVec;

use crate::provider::PositionProvider;

/// Quantizes a canvas Y coordinate for stop identity checks.
///
/// Two coordinates denote the same stop when they truncate to the same
/// integral pixel. Truncation (rather than rounding) matches the host
/// toolkits this layer integrates with.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "integral-pixel identity truncates fractional coordinates on purpose"
)]
pub fn quantize(y: f64) -> i64 {
    y as i64
}

/// One of the drawer's rest stops.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The minimal-Y stop; drawer fully open.
    Top,
    /// The optional intermediate stop.
    Middle,
    /// The maximal-Y stop; drawer at rest.
    Bottom,
}

/// Where the drawer currently sits relative to an [`AnchorSet`].
///
/// `Between` is transient — mid-drag or mid-animation — and is never
/// reported to position delegates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawerPosition {
    /// Resting at the top stop.
    Top,
    /// Resting at the middle stop.
    Middle,
    /// Resting at the bottom stop.
    Bottom,
    /// Anywhere else.
    Between,
}

/// An immutable snapshot of the drawer's stop coordinates.
///
/// Invariant: `top <= middle <= bottom` when a middle stop is present,
/// `top <= bottom` always. Sets are recomputed from a
/// [`PositionProvider`] whenever layout changes; they are never mutated
/// in place, which keeps "did this stop move" a pure comparison of two
/// snapshots.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorSet {
    top: f64,
    middle: Option<f64>,
    bottom: f64,
}

impl AnchorSet {
    /// Creates a set from raw stop coordinates.
    #[must_use]
    pub fn new(top: f64, middle: Option<f64>, bottom: f64) -> Self {
        debug_assert!(top <= bottom, "anchor stops out of order");
        if let Some(middle) = middle {
            debug_assert!(
                top <= middle && middle <= bottom,
                "middle stop outside [top, bottom]"
            );
        }
        Self {
            top,
            middle,
            bottom,
        }
    }

    /// Snapshots a provider's stops for the given canvas height.
    #[must_use]
    pub fn resolve<P: PositionProvider + ?Sized>(provider: &P, canvas_height: f64) -> Self {
        Self::new(
            provider.top_position_y(canvas_height),
            provider.middle_position_y(canvas_height),
            provider.bottom_position_y(canvas_height),
        )
    }

    /// Min-Y of the top stop.
    #[must_use]
    pub fn top_y(&self) -> f64 {
        self.top
    }

    /// Min-Y of the middle stop, if present.
    #[must_use]
    pub fn middle_y(&self) -> Option<f64> {
        self.middle
    }

    /// Min-Y of the bottom stop.
    #[must_use]
    pub fn bottom_y(&self) -> f64 {
        self.bottom
    }

    /// Whether this set has a middle stop.
    #[must_use]
    pub fn has_middle(&self) -> bool {
        self.middle.is_some()
    }

    /// Coordinate of the given stop, or `None` for an absent middle.
    #[must_use]
    pub fn y_of(&self, anchor: Anchor) -> Option<f64> {
        match anchor {
            Anchor::Top => Some(self.top),
            Anchor::Middle => self.middle,
            Anchor::Bottom => Some(self.bottom),
        }
    }

    /// The stop below which the dimming overlay stays fully transparent:
    /// the middle stop when present, else the bottom stop.
    #[must_use]
    pub fn dim_start_y(&self) -> f64 {
        self.middle.unwrap_or(self.bottom)
    }

    /// Present stops in top→bottom order.
    #[must_use]
    pub fn stops(&self) -> SmallVec<[(Anchor, f64); 3]> {
        let mut stops = SmallVec::new();
        stops.push((Anchor::Top, self.top));
        if let Some(middle) = self.middle {
            stops.push((Anchor::Middle, middle));
        }
        stops.push((Anchor::Bottom, self.bottom));
        stops
    }

    /// The stop closest to `y`.
    ///
    /// Equidistant ties resolve to the stop with the smaller Y (the more
    /// open stop): stops are scanned top→bottom and only a strictly
    /// smaller distance displaces the current best.
    #[must_use]
    pub fn nearest(&self, y: f64) -> Anchor {
        let mut best = Anchor::Top;
        let mut best_dist = f64::INFINITY;
        for (anchor, stop_y) in self.stops() {
            let dist = (y - stop_y).abs();
            if dist < best_dist {
                best = anchor;
                best_dist = dist;
            }
        }
        best
    }

    /// The nearest stop strictly above `y` (smaller Y), or [`Anchor::Top`]
    /// when none is.
    #[must_use]
    pub fn nearest_above(&self, y: f64) -> Anchor {
        let mut found = Anchor::Top;
        for (anchor, stop_y) in self.stops() {
            if stop_y < y {
                found = anchor;
            }
        }
        found
    }

    /// The nearest stop strictly below `y` (larger Y), or
    /// [`Anchor::Bottom`] when none is.
    #[must_use]
    pub fn nearest_below(&self, y: f64) -> Anchor {
        for (anchor, stop_y) in self.stops() {
            if stop_y > y {
                return anchor;
            }
        }
        Anchor::Bottom
    }

    /// The stop `y` sits on, by integral-pixel identity, in priority
    /// order top > middle > bottom. `None` when `y` matches no stop.
    #[must_use]
    pub fn matching(&self, y: f64) -> Option<Anchor> {
        let q = quantize(y);
        self.stops()
            .into_iter()
            .find(|&(_, stop_y)| quantize(stop_y) == q)
            .map(|(anchor, _)| anchor)
    }

    /// Classifies `y` into a [`DrawerPosition`].
    #[must_use]
    pub fn classify(&self, y: f64) -> DrawerPosition {
        match self.matching(y) {
            Some(Anchor::Top) => DrawerPosition::Top,
            Some(Anchor::Middle) => DrawerPosition::Middle,
            Some(Anchor::Bottom) => DrawerPosition::Bottom,
            None => DrawerPosition::Between,
        }
    }
}
