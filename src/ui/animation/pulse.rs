//! Endless auto-reversing pulse
//!
//! `iced_anim` transitions play once, so the pulse re-targets itself
//! between rest and peak every time a leg settles.

use std::time::{Duration, Instant};

use super::is_settled;
use super::prelude::{Animated, Easing};

/// Pulse between a rest value and a peak value, forever
#[derive(Debug)]
pub struct PulseAnimation {
    animation: Animated<f32>,
    rest: f32,
    peak: f32,
    leg: Duration,
}

fn pulse_easing(leg: Duration) -> Easing {
    Easing::EASE_OUT.with_duration(leg)
}

impl PulseAnimation {
    /// Start at `rest`, heading for `peak`; each leg lasts `leg`
    pub fn new(rest: f32, peak: f32, leg: Duration) -> Self {
        let mut animation = Animated::transition(rest, pulse_easing(leg));
        animation.update(peak.into());
        Self {
            animation,
            rest,
            peak,
            leg,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        *self.animation.value()
    }

    /// Value the current leg is heading for
    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    pub fn peak(&self) -> f32 {
        self.peak
    }

    /// Duration of one leg (rest to peak, or back)
    pub fn leg(&self) -> Duration {
        self.leg
    }

    /// Tick the animation forward, reversing at either end
    ///
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
        if is_settled(&self.animation) {
            let next = if self.target() == self.peak {
                self.rest
            } else {
                self.peak
            };
            self.animation.update(next.into());
        }
    }
}
