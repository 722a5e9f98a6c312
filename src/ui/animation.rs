//! Ring animations built on `iced_anim`
//!
//! Layers never drive per-frame drawing themselves. They own `Animated`
//! values that the widget ticks on every animation frame.
//!
//! # Usage
//!
//! ```rust
//! use std::time::Duration;
//! use circle_progress::ui::animation::StrokeSweep;
//!
//! let mut sweep = StrokeSweep::new();
//! sweep.start(0.5, Duration::from_secs(2));
//! assert!(sweep.is_animating());
//!
//! // Cancelling drops the running sweep
//! sweep.cancel();
//! assert!(!sweep.is_animating());
//! ```

mod pulse;
mod sweep;
pub mod prelude;

pub use pulse::PulseAnimation;
pub use sweep::StrokeSweep;

use prelude::Animated;

/// Whether a transition has reached its target
pub(crate) fn is_settled(animation: &Animated<f32>) -> bool {
    !animation.is_animating() || animation.value() == animation.target()
}
