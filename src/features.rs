//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly, apart from the
//! widget configuration they produce.

pub mod settings;

pub use settings::{RingSettings, Settings, SettingsError};
