// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration eased motion and the motion sum type.

use crate::easing::Easing;
use crate::spring::SpringMotion;

/// A linear interpolation track between two values.
///
/// Used for values that ride along with a primary motion — the dimming
/// overlay follows the frame's motion progress through one of these.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    /// Value at progress 0.
    pub from: f64,
    /// Value at progress 1.
    pub to: f64,
}

impl Tween {
    /// Creates a track from `from` to `to`.
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Samples the track at a progress fraction, clamped to `[0, 1]`.
    ///
    /// Progress `>= 1` returns `to` exactly.
    #[must_use]
    pub fn sample(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            return self.to;
        }
        let progress = progress.max(0.0);
        self.from + (self.to - self.from) * progress
    }
}

/// A fixed-duration motion along an easing curve.
///
/// Supports in-flight retargeting: [`EasedMotion::retarget`] rebases the
/// remaining travel onto the new target without a value discontinuity,
/// completing at the motion's original end time. Retargeting an already
/// finished motion jumps straight to the new target.
#[derive(Copy, Clone, Debug)]
pub struct EasedMotion {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
    easing: Easing,
    /// Eased fraction at the last retarget; remaining travel is spread
    /// over the eased fraction still ahead of this point.
    base: f64,
    value: f64,
}

impl EasedMotion {
    /// Creates a motion from `from` to `to` over `duration` seconds.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        let mut motion = Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
            base: 0.0,
            value: from,
        };
        if motion.duration == 0.0 {
            motion.value = to;
        }
        motion
    }

    /// Advances by a frame delta, returning the new value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);
        self.value = self.sample_at(self.progress());
        self.value
    }

    /// Redirects the motion toward a new target.
    pub fn retarget(&mut self, to: f64) {
        self.base = self.eased_fraction();
        self.from = self.value;
        self.to = to;
        if self.is_finished() {
            self.value = to;
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the motion has run its full duration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Eased, rebased progress in `[0, 1]` for linked tracks.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let eased = self.eased_fraction();
        if self.base >= 1.0 - 1e-9 {
            return 1.0;
        }
        ((eased - self.base) / (1.0 - self.base)).clamp(0.0, 1.0)
    }

    fn eased_fraction(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.transform((self.elapsed / self.duration).clamp(0.0, 1.0))
    }

    fn sample_at(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * progress
    }
}

/// A settle/reveal motion: eased or spring-damped.
///
/// Both variants are advanced with host frame deltas and support
/// value-continuous retargeting, so a layout change can fold a new target
/// into whatever is currently in flight.
#[derive(Copy, Clone, Debug)]
pub enum Motion {
    /// Fixed-duration eased motion.
    Eased(EasedMotion),
    /// Damped spring motion.
    Spring(SpringMotion),
}

impl Motion {
    /// Creates an eased motion.
    #[must_use]
    pub fn eased(from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        Self::Eased(EasedMotion::new(from, to, duration, easing))
    }

    /// Creates a damped spring motion.
    #[must_use]
    pub fn spring(from: f64, to: f64, duration: f64, damping_ratio: f64) -> Self {
        Self::Spring(SpringMotion::new(from, to, duration, damping_ratio))
    }

    /// Advances by a frame delta, returning the new value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        match self {
            Self::Eased(motion) => motion.advance(dt),
            Self::Spring(motion) => motion.advance(dt),
        }
    }

    /// Redirects the motion toward a new target without a value jump.
    pub fn retarget(&mut self, to: f64) {
        match self {
            Self::Eased(motion) => motion.retarget(to),
            Self::Spring(motion) => motion.retarget(to),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Eased(motion) => motion.value(),
            Self::Spring(motion) => motion.value(),
        }
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> f64 {
        match self {
            Self::Eased(motion) => motion.target(),
            Self::Spring(motion) => motion.target(),
        }
    }

    /// Whether the motion has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match self {
            Self::Eased(motion) => motion.is_finished(),
            Self::Spring(motion) => motion.is_finished(),
        }
    }

    /// Progress fraction in `[0, 1]` for linked tracks.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self {
            Self::Eased(motion) => motion.progress(),
            Self::Spring(motion) => motion.progress(),
        }
    }
}
