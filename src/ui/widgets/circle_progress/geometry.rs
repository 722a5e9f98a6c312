//! Ring geometry derived from the widget frame width
//!
//! The widget is circular, so only the width matters.

/// Stroke width as a fraction of the frame width
const LINE_WIDTH_RATIO: f32 = 0.06;
/// Inset removed from the diameter before computing the radius
const RING_INSET_RATIO: f32 = 0.2;
/// Value label font size as a fraction of the frame width
const LABEL_FONT_RATIO: f32 = 0.3;
/// Percent sign font size relative to the value label
const PERCENT_FONT_RATIO: f32 = 0.35;

pub fn line_width(width: f32) -> f32 {
    width * LINE_WIDTH_RATIO
}

pub fn ring_radius(width: f32) -> f32 {
    (width - width * RING_INSET_RATIO) / 2.0
}

pub fn label_font_size(width: f32) -> f32 {
    width * LABEL_FONT_RATIO
}

pub fn percent_font_size(width: f32) -> f32 {
    label_font_size(width) * PERCENT_FONT_RATIO
}

/// All derived sizes for one frame width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub line_width: f32,
    pub ring_radius: f32,
    pub label_font_size: f32,
    pub percent_font_size: f32,
}

impl RingGeometry {
    /// Derive geometry from a frame width
    ///
    /// Non-positive widths yield degenerate (zero or negative) sizes.
    pub fn from_width(width: f32) -> Self {
        Self {
            line_width: line_width(width),
            ring_radius: ring_radius(width),
            label_font_size: label_font_size(width),
            percent_font_size: percent_font_size(width),
        }
    }
}
