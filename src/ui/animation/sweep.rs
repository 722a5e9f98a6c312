//! Stroke sweep of the progress ring
//!
//! Holds at most one running transition. Starting a new sweep drops the old
//! one, so two sweeps can never fight over the same stroke.

use std::time::{Duration, Instant};

use super::is_settled;
use super::prelude::{Animated, Easing};

/// Linear stroke transition from 0 to a target fraction
#[derive(Debug, Default)]
pub struct StrokeSweep {
    animation: Option<Animated<f32>>,
}

impl StrokeSweep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running sweep with one from 0 to `to` over `duration`
    pub fn start(&mut self, to: f32, duration: Duration) {
        let mut animation = Animated::transition(0.0, Easing::LINEAR.with_duration(duration));
        animation.update(to.into());
        self.animation = Some(animation);
    }

    /// Drop the running sweep, if any
    pub fn cancel(&mut self) -> bool {
        self.animation.take().is_some()
    }

    /// Presented stroke fraction while a sweep is running
    pub fn value(&self) -> Option<f32> {
        self.animation.as_ref().map(|animation| *animation.value())
    }

    /// Check if a sweep is still in progress
    pub fn is_animating(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| !is_settled(animation))
    }

    /// Advance the sweep and drop it once it has settled
    ///
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        if let Some(animation) = self.animation.as_mut() {
            animation.tick(now);
            if is_settled(animation) {
                self.animation = None;
            }
        }
    }
}
