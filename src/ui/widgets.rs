//! Stateful widgets with their own message loop
//!
//! # Contents
//!
//! - [`CircleProgress`] - Animated ring with a counting percentage label

pub mod circle_progress;

pub use circle_progress::{
    CircleProgress, CounterSession, CounterState, Message, RingGeometry, RingKind, RingLayer,
    RingStack, SessionId, WidgetConfig,
};
