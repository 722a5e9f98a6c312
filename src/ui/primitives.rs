//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level pieces that implement iced's
//! `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No widget state**: Primitives paint snapshots and never mutate anything
//! - **Generic Message types**: Use type parameters for flexibility
//!
//! # Contents
//!
//! - [`ProgressRing`] - Concentric ring layers drawn on a Canvas

pub mod progress_ring;

pub use progress_ring::{ProgressRing, RING_COUNT, RingFrame, view_progress_ring};
