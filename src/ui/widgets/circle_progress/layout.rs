//! Label stack: counter value followed by a smaller percent sign

use iced::widget::{container, row, text};
use iced::{Alignment, Color, Element, Size};

use super::geometry::RingGeometry;

/// Literal shown after the counter value
pub const PERCENT_SIGN: &str = "%";

/// Font sizes of the value and percent labels
///
/// Tiny rings still get a renderable (1px) font.
pub fn label_sizes(geometry: &RingGeometry) -> (f32, f32) {
    (
        geometry.label_font_size.max(1.0),
        geometry.percent_font_size.max(1.0),
    )
}

/// Value and percent labels side by side, tops aligned, centered in `bounds`
pub fn label_stack<'a, Message: 'a>(
    value: &str,
    geometry: &RingGeometry,
    text_color: Color,
    bounds: Size,
) -> Element<'a, Message> {
    let (value_size, percent_size) = label_sizes(geometry);
    let value_label = text(value.to_owned()).size(value_size).color(text_color);
    let percent_label = text(PERCENT_SIGN).size(percent_size).color(text_color);

    let labels = row![value_label, percent_label].align_y(Alignment::Start);

    container(labels)
        .center_x(bounds.width)
        .center_y(bounds.height)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_sign_is_smaller() {
        let geometry = RingGeometry::from_width(200.0);
        let (value_size, percent_size) = label_sizes(&geometry);
        assert_eq!(value_size, geometry.label_font_size);
        assert_eq!(percent_size, geometry.percent_font_size);
        assert!(percent_size < value_size);
    }

    #[test]
    fn test_tiny_ring_keeps_readable_sizes() {
        let geometry = RingGeometry::from_width(0.0);
        assert_eq!(label_sizes(&geometry), (1.0, 1.0));
    }

    #[test]
    fn test_label_stack_fills_bounds() {
        let geometry = RingGeometry::from_width(120.0);
        let bounds = Size::new(120.0, 120.0);
        let element: Element<'_, ()> = label_stack("42", &geometry, Color::BLACK, bounds);

        let size = element.as_widget().size();
        assert_eq!(size.width, iced::Length::Fixed(120.0));
        assert_eq!(size.height, iced::Length::Fixed(120.0));
    }
}
