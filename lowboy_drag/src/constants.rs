// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture and settle tuning constants.

/// Release speed (points/second) above which the settle uses the damped
/// spring instead of the plain ease.
pub const BOUNCE_VELOCITY_THRESHOLD: f64 = 100.0;

/// Release speed (points/second) above which the drawer skips any
/// intermediate stop and heads straight for the end of travel.
pub const SKIP_MIDDLE_VELOCITY_THRESHOLD: f64 = 1500.0;

/// Rubber-band resistance for travel beyond the permitted range.
/// 0 means no resistance, 1 means no movement at all.
pub const RUBBER_CONSTANT: f64 = 0.75;

/// Dimming-overlay alpha with the drawer fully open.
pub const MAX_DIMMING_ALPHA: f64 = 0.4;

/// Duration of the plain ease settle, in seconds.
pub const SETTLE_EASE_DURATION: f64 = 0.25;

/// Duration of the damped spring settle, in seconds.
pub const SETTLE_SPRING_DURATION: f64 = 0.4;

/// Damping ratio of the spring settle; under-damped, so brisk releases
/// visibly bounce.
pub const SETTLE_SPRING_DAMPING: f64 = 0.75;
