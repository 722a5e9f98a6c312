//! UI module for the circular progress indicator
//!
//! # Architecture
//!
//! - **Animation** (`animation`): Stroke sweep and border pulse on `iced_anim`
//! - **Primitives** (`primitives`): Canvas programs that paint ring snapshots
//! - **Widgets** (`widgets`): The stateful progress widget and its message loop

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
