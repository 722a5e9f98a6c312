//! Widget configuration with explicit defaults

use iced::{Color, Size};

use crate::ui::theme;

/// Default sweep duration in seconds
pub const DEFAULT_DURATION_SECS: f32 = 2.0;
/// Default frame edge length
pub const DEFAULT_SIZE: f32 = 100.0;

/// Visual and behavioral parameters, fixed once the widget is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetConfig {
    /// Progress ring stroke
    pub progress_color: Color,
    /// Track ring stroke
    pub track_color: Color,
    /// Border ring stroke, also used for the pulse
    pub border_color: Color,
    /// Track ring fill
    pub background_color: Color,
    /// Pulse the border ring instead of drawing a thick static outline
    pub pulsing: bool,
    /// Label color
    pub text_color: Color,
    /// Target percentage (0 - 100)
    pub target_percent: u32,
    /// Sweep duration in seconds
    pub animation_duration: f32,
    /// Start the sweep as soon as the widget is built
    pub auto_start: bool,
    /// Render the track ring at half opacity
    pub transparent_background: bool,
    /// Frame size
    pub bounds: Size,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            progress_color: theme::PROGRESS_RED,
            track_color: theme::TRACK_LIGHT_GRAY,
            border_color: theme::BORDER_BLACK,
            background_color: theme::CLEAR,
            pulsing: false,
            text_color: theme::TEXT_BLACK,
            target_percent: 0,
            animation_duration: DEFAULT_DURATION_SECS,
            auto_start: false,
            transparent_background: false,
            bounds: Size::new(DEFAULT_SIZE, DEFAULT_SIZE),
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_color(mut self, color: Color) -> Self {
        self.progress_color = color;
        self
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn pulsing(mut self, pulsing: bool) -> Self {
        self.pulsing = pulsing;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn target_percent(mut self, percent: u32) -> Self {
        self.target_percent = percent;
        self
    }

    pub fn animation_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = seconds;
        self
    }

    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    pub fn transparent_background(mut self, transparent: bool) -> Self {
        self.transparent_background = transparent;
        self
    }

    pub fn bounds(mut self, bounds: Size) -> Self {
        self.bounds = bounds;
        self
    }

    /// Square frame of the given edge length
    pub fn size(self, size: f32) -> Self {
        self.bounds(Size::new(size, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.progress_color, Color::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(config.border_color, Color::BLACK);
        assert_eq!(config.background_color, Color::TRANSPARENT);
        assert_eq!(config.text_color, Color::BLACK);
        assert!(!config.pulsing);
        assert_eq!(config.target_percent, 0);
        assert_eq!(config.animation_duration, 2.0);
        assert!(!config.auto_start);
        assert!(!config.transparent_background);
        assert_eq!(config.bounds, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_builder_overrides() {
        let config = WidgetConfig::new()
            .pulsing(true)
            .target_percent(42)
            .animation_duration(1.5)
            .auto_start(true)
            .transparent_background(true)
            .track_color(Color::WHITE)
            .size(240.0);

        assert!(config.pulsing);
        assert_eq!(config.target_percent, 42);
        assert_eq!(config.animation_duration, 1.5);
        assert!(config.auto_start);
        assert!(config.transparent_background);
        assert_eq!(config.track_color, Color::WHITE);
        assert_eq!(config.bounds, Size::new(240.0, 240.0));
    }
}
