//! Threshold timers for gated transitions
//!
//! Ignition, burn-out and melt transitions only fire once enough contact
//! time has accumulated. Losing contact does not necessarily cancel the
//! progress: each timer carries a reset policy with a grace delay, so a
//! brief gap in contact reports keeps an in-progress ignition alive.

use serde::{Deserialize, Serialize};

use crate::config::ThresholdSpec;

/// What happens to an accumulated timer once its condition has been false
/// for longer than the configured reset delay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetPolicy {
    /// Leave the accumulated time unchanged
    None,
    /// Snap the accumulated time to zero
    #[default]
    ZeroReset,
    /// Decay the accumulated time by `dt` per tick
    GraduallyReset,
}

/// Accumulated contact time plus idle tracking for hysteresis
#[derive(Clone, Copy, Debug, Default)]
pub struct ThresholdTimer {
    accumulated: f32,
    idle: f32,
    asserted: bool,
}

impl ThresholdTimer {
    /// Record `dt` seconds of the triggering condition holding this tick.
    /// Returns the new accumulated total.
    pub fn accumulate(&mut self, dt: f32) -> f32 {
        self.asserted = true;
        self.idle = 0.0;
        self.accumulated += dt;
        self.accumulated
    }

    /// Snap back to zero (after a successful gated transition)
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.idle = 0.0;
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// End-of-tick bookkeeping. If the condition was not asserted this
    /// tick, idle time grows and the reset policy applies once the grace
    /// delay has elapsed. Decay clamps at zero, never underflows.
    pub fn settle(&mut self, dt: f32, reset_delay: f32, policy: ResetPolicy) {
        if self.asserted {
            self.asserted = false;
            return;
        }
        self.idle += dt;
        if self.idle < reset_delay {
            return;
        }
        match policy {
            ResetPolicy::None => {}
            ResetPolicy::ZeroReset => self.accumulated = 0.0,
            ResetPolicy::GraduallyReset => {
                self.accumulated = (self.accumulated - dt).max(0.0);
            }
        }
    }
}

/// A threshold timer bound to its per-entity configuration
#[derive(Clone, Copy, Debug)]
pub struct GatedTimer {
    spec: ThresholdSpec,
    timer: ThresholdTimer,
}

impl GatedTimer {
    pub fn new(spec: ThresholdSpec) -> Self {
        Self {
            spec,
            timer: ThresholdTimer::default(),
        }
    }

    /// Accumulate `dt` of the gating condition holding. Returns true once
    /// the threshold is reached; the timer resets on success so the
    /// transition fires exactly once.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.timer.accumulate(dt) >= self.spec.time {
            self.timer.reset();
            true
        } else {
            false
        }
    }

    /// End-of-tick decay with this timer's own policy
    pub fn settle(&mut self, dt: f32) {
        self.timer
            .settle(dt, self.spec.reset_delay, self.spec.reset_policy);
    }

    pub fn accumulated(&self) -> f32 {
        self.timer.accumulated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(time: f32, reset_delay: f32, reset_policy: ResetPolicy) -> ThresholdSpec {
        ThresholdSpec {
            time,
            reset_delay,
            reset_policy,
        }
    }

    #[test]
    fn test_advance_fires_once_at_threshold() {
        let mut timer = GatedTimer::new(spec(2.0, 0.5, ResetPolicy::ZeroReset));

        // 1.9s of contact: not yet
        for _ in 0..19 {
            assert!(!timer.advance(0.1));
        }
        // crossing 2.0s: fires, and resets
        assert!(timer.advance(0.1));
        assert_eq!(timer.accumulated(), 0.0);
        // next tick starts over
        assert!(!timer.advance(0.1));
    }

    #[test]
    fn test_zero_reset_snaps_after_delay() {
        let mut timer = GatedTimer::new(spec(2.0, 0.5, ResetPolicy::ZeroReset));
        for _ in 0..12 {
            timer.advance(0.1);
        }
        assert!((timer.accumulated() - 1.2).abs() < 1e-5);

        // Contact lost: progress survives the grace delay untouched
        for _ in 0..4 {
            timer.settle(0.1);
            assert!((timer.accumulated() - 1.2).abs() < 1e-5);
        }
        // 0.5s post-loss: snap to zero, not gradually
        timer.settle(0.1);
        assert_eq!(timer.accumulated(), 0.0);
    }

    #[test]
    fn test_gradual_reset_decays_and_clamps() {
        let mut timer = GatedTimer::new(spec(2.0, 0.0, ResetPolicy::GraduallyReset));
        for _ in 0..3 {
            timer.advance(0.1);
        }
        timer.settle(0.1);
        assert!((timer.accumulated() - 0.2).abs() < 1e-5);

        // Keep decaying well past zero: clamps, never underflows
        for _ in 0..10 {
            timer.settle(0.1);
        }
        assert_eq!(timer.accumulated(), 0.0);
    }

    #[test]
    fn test_none_policy_keeps_progress() {
        let mut timer = GatedTimer::new(spec(2.0, 0.0, ResetPolicy::None));
        for _ in 0..5 {
            timer.advance(0.1);
        }
        for _ in 0..100 {
            timer.settle(0.1);
        }
        assert!((timer.accumulated() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_reassertion_clears_idle() {
        let mut timer = GatedTimer::new(spec(2.0, 0.5, ResetPolicy::ZeroReset));
        for _ in 0..10 {
            timer.advance(0.1);
        }
        // Brief loss of contact, shorter than the grace delay
        for _ in 0..3 {
            timer.settle(0.1);
        }
        // Contact resumes: progress picked up where it left off
        timer.advance(0.1);
        assert!((timer.accumulated() - 1.1).abs() < 1e-5);
        // And the idle clock restarted
        for _ in 0..4 {
            timer.settle(0.1);
        }
        assert!((timer.accumulated() - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_settle_while_asserted_does_nothing() {
        let mut timer = GatedTimer::new(spec(2.0, 0.0, ResetPolicy::ZeroReset));
        timer.advance(0.1);
        // Same tick: the settle pass sees the assertion and keeps progress
        timer.settle(0.1);
        assert!((timer.accumulated() - 0.1).abs() < 1e-5);
    }
}
