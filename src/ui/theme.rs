//! Default palette for the progress ring

use iced::Color;
use iced::color;

/// Default progress stroke
pub const PROGRESS_RED: Color = color!(0xff0000);
/// Default track stroke
pub const TRACK_LIGHT_GRAY: Color = color!(0xaaaaaa);
/// Default border / pulse stroke
pub const BORDER_BLACK: Color = Color::BLACK;
/// Default label color
pub const TEXT_BLACK: Color = Color::BLACK;
/// Default track fill
pub const CLEAR: Color = Color::TRANSPARENT;

/// Multiply a color's alpha by a layer opacity
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_opacity_scales_alpha() {
        let faded = with_opacity(PROGRESS_RED, 0.5);
        assert_eq!(faded.r, 1.0);
        assert_eq!(faded.a, 0.5);
    }

    #[test]
    fn test_with_opacity_keeps_clear_clear() {
        assert_eq!(with_opacity(CLEAR, 0.5).a, 0.0);
        assert_eq!(with_opacity(TEXT_BLACK, 3.0).a, 1.0);
    }
}
