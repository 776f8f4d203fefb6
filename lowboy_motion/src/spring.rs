// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring motion, integrated numerically.

/// Integration step ceiling. Host frame deltas are subdivided to at most
/// this step so stiff springs stay stable at low frame rates.
const MAX_STEP: f64 = 1.0 / 240.0;

/// Displacement below which the spring may come to rest.
const REST_DISPLACEMENT: f64 = 0.5;

/// Speed below which the spring may come to rest.
const REST_SPEED: f64 = 10.0;

/// Elapsed-time multiple of the nominal duration after which the spring is
/// forcibly snapped to its target.
const OVERTIME_FACTOR: f64 = 4.0;

/// A damped spring driving a value toward a target.
///
/// Parameterized the way drawer settles are tuned — a nominal duration
/// and a damping ratio — and converted to unit-mass stiffness/damping with
/// the natural frequency `tau / duration`. A damping ratio below `1.0`
/// under-damps, so a fast release visibly overshoots its stop before
/// settling.
///
/// Integration is semi-implicit Euler with substepping. The spring rests
/// (and snaps exactly onto the target) once both displacement and speed
/// fall under small thresholds, or unconditionally after an overtime cap,
/// so [`SpringMotion::is_finished`] always converges.
#[derive(Copy, Clone, Debug)]
pub struct SpringMotion {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    elapsed: f64,
    nominal_duration: f64,
    finished: bool,
}

impl SpringMotion {
    /// Creates a spring at `from`, heading for `to`, with the given
    /// nominal duration (seconds) and damping ratio.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64, damping_ratio: f64) -> Self {
        let duration = duration.max(1e-3);
        let omega = core::f64::consts::TAU / duration;
        Self {
            position: from,
            velocity: 0.0,
            target: to,
            stiffness: omega * omega,
            damping: 2.0 * damping_ratio * omega,
            elapsed: 0.0,
            nominal_duration: duration,
            finished: false,
        }
    }

    /// Advances the spring by a frame delta, returning the new value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if self.finished || dt <= 0.0 {
            return self.position;
        }
        self.elapsed += dt;
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let accel =
                self.stiffness * (self.target - self.position) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
            if (self.position - self.target).abs() < REST_DISPLACEMENT
                && self.velocity.abs() < REST_SPEED
            {
                self.snap();
                break;
            }
        }
        if !self.finished && self.elapsed >= self.nominal_duration * OVERTIME_FACTOR {
            self.snap();
        }
        self.position
    }

    /// Redirects the spring toward a new target, keeping the current
    /// position and velocity, so the value stays continuous.
    pub fn retarget(&mut self, to: f64) {
        self.target = to;
        self.finished = false;
        self.elapsed = 0.0;
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.position
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the spring has come to rest on its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Nominal-time fraction in `[0, 1]`, for tracks linked to this
    /// spring (the dimming overlay).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.finished {
            return 1.0;
        }
        (self.elapsed / self.nominal_duration).clamp(0.0, 1.0)
    }

    fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn converges_and_snaps_exactly() {
        let mut spring = SpringMotion::new(0.0, 100.0, 0.4, 0.75);
        let mut steps = 0;
        while !spring.is_finished() {
            spring.advance(FRAME);
            steps += 1;
            assert!(steps < 600, "spring failed to settle");
        }
        assert_eq!(spring.value(), 100.0);
        // Settles in the vicinity of its nominal duration, not the
        // overtime cap.
        assert!(steps as f64 * FRAME < 1.2);
    }

    #[test]
    fn underdamped_spring_overshoots_then_returns() {
        let mut spring = SpringMotion::new(0.0, 100.0, 0.4, 0.75);
        let mut max = 0.0_f64;
        while !spring.is_finished() {
            max = max.max(spring.advance(FRAME));
        }
        assert!(max > 100.1, "no overshoot observed (max {max})");
        assert!(max < 112.0, "overshoot out of range (max {max})");
    }

    #[test]
    fn stays_bounded_at_coarse_frame_deltas() {
        let mut spring = SpringMotion::new(0.0, 100.0, 0.4, 0.75);
        for _ in 0..40 {
            let value = spring.advance(0.1);
            assert!((-50.0..200.0).contains(&value));
        }
        assert!(spring.is_finished());
    }

    #[test]
    fn retarget_is_value_continuous() {
        let mut spring = SpringMotion::new(0.0, 100.0, 0.4, 0.75);
        for _ in 0..6 {
            spring.advance(FRAME);
        }
        let before = spring.value();
        spring.retarget(160.0);
        assert_eq!(spring.value(), before);
        let mut steps = 0;
        while !spring.is_finished() {
            spring.advance(FRAME);
            steps += 1;
            assert!(steps < 600, "retargeted spring failed to settle");
        }
        assert_eq!(spring.value(), 160.0);
    }

    #[test]
    fn starting_on_target_finishes_immediately() {
        let mut spring = SpringMotion::new(42.0, 42.0, 0.4, 0.75);
        spring.advance(FRAME);
        assert!(spring.is_finished());
        assert_eq!(spring.value(), 42.0);
    }

    #[test]
    fn progress_saturates_at_one() {
        let mut spring = SpringMotion::new(0.0, 100.0, 0.4, 0.75);
        assert_eq!(spring.progress(), 0.0);
        spring.advance(0.2);
        assert!(spring.progress() > 0.0 && spring.progress() <= 1.0);
        while !spring.is_finished() {
            spring.advance(FRAME);
        }
        assert_eq!(spring.progress(), 1.0);
    }
}
