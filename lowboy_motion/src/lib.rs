// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lowboy_motion --heading-base-level=0

//! Lowboy Motion: host-agnostic settle and reveal motion primitives.
//!
//! The drawer never talks to a platform animation facility. Instead, each
//! transition owns a small motion value — an eased tween or a damped
//! spring — that the host advances from its frame loop with
//! [`Motion::advance`]. Completion effects (delegate notifications,
//! content detach) fire synchronously from whatever code observes
//! [`Motion::is_finished`], which keeps the whole interaction layer on
//! one control thread.
//!
//! A motion can be *retargeted* while in flight ([`Motion::retarget`]):
//! the value stays continuous and the remaining travel heads for the new
//! target. This is how a layout change folds its frame adjustment into an
//! animation that is already running, instead of racing a second animator
//! against the same geometry.
//!
//! ## Minimal example
//!
//! ```
//! use lowboy_motion::{Easing, Motion};
//!
//! // Ease a value from 0 to 100 over a quarter second.
//! let mut motion = Motion::eased(0.0, 100.0, 0.25, Easing::EaseInOut);
//!
//! // The host drives it with frame deltas.
//! motion.advance(0.1);
//! assert!(motion.value() > 0.0 && motion.value() < 100.0);
//!
//! // Finishing lands exactly on the target.
//! motion.advance(0.2);
//! assert!(motion.is_finished());
//! assert_eq!(motion.value(), 100.0);
//! ```
//!
//! This crate is `no_std` and uses only `core` arithmetic: spring motion
//! is integrated numerically rather than evaluated in closed form, so no
//! transcendental functions (and no `libm`) are needed.

#![no_std]

mod easing;
mod motion;
mod spring;

pub use easing::Easing;
pub use motion::{EasedMotion, Motion, Tween};
pub use spring::SpringMotion;
