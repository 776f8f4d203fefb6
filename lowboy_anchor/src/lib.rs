// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lowboy_anchor --heading-base-level=0

//! Lowboy Anchor: anchor stops and the position provider contract.
//!
//! A drawer rests at up to three vertical *stops* — top, an optional
//! middle, and bottom — expressed as min-Y coordinates in the host
//! canvas's space. This crate models a snapshot of those stops
//! ([`AnchorSet`]) together with the queries the drag and presentation
//! layers need: nearest-stop search, strictly-above/below search, and
//! integral-pixel stop identity.
//!
//! Stop coordinates come from a [`PositionProvider`] — typically the
//! embedded content — as pure functions of the canvas height. Providers
//! are re-queried after every layout pass, so an [`AnchorSet`] is always
//! a *recomputed snapshot*, never mutated in place. Resolving twice with
//! unchanged inputs yields an identical set.
//!
//! ## Minimal example
//!
//! ```
//! use lowboy_anchor::{Anchor, AnchorSet, PositionProvider};
//!
//! struct Sheet;
//!
//! impl PositionProvider for Sheet {
//!     fn top_position_y(&self, _canvas_height: f64) -> f64 {
//!         50.0
//!     }
//!     fn middle_position_y(&self, _canvas_height: f64) -> Option<f64> {
//!         Some(300.0)
//!     }
//!     fn bottom_position_y(&self, canvas_height: f64) -> f64 {
//!         canvas_height - 200.0
//!     }
//! }
//!
//! let anchors = AnchorSet::resolve(&Sheet, 800.0);
//!
//! // 310 is 10 away from the middle stop, far from the others.
//! assert_eq!(anchors.nearest(310.0), Anchor::Middle);
//! // Stop identity is integral-pixel: 600.4 still "is" the bottom stop.
//! assert_eq!(anchors.matching(600.4), Some(Anchor::Bottom));
//! // Strictly-above search never returns the stop you are sitting on.
//! assert_eq!(anchors.nearest_above(300.0), Anchor::Top);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod provider;
mod set;

pub use provider::PositionProvider;
pub use set::{Anchor, AnchorSet, DrawerPosition, quantize};
