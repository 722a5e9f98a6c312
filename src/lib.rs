//! circle-progress - an animated circular progress indicator for iced
//!
//! The widget draws three concentric rings (border or pulse, track, progress),
//! sweeps the progress ring toward a target percentage and counts a numeric
//! label up in step with the sweep.
//!
//! # Usage
//!
//! ```rust,no_run
//! use circle_progress::ui::widgets::{CircleProgress, WidgetConfig};
//!
//! let mut ring = CircleProgress::new(WidgetConfig::default().pulsing(true));
//! ring.start(2.0, 75);
//! ```

pub mod features;
pub mod ui;
