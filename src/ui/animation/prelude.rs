//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust
//! use circle_progress::ui::animation::prelude::*;
//! ```

// Re-export iced_anim types
pub use iced_anim::Animated;
pub use iced_anim::transition::Easing;
