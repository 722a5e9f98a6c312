//! Concentric progress ring primitive
//!
//! Paints a stack of ring snapshots using iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It receives already-resolved [`RingFrame`]s, so it knows nothing about
//! animations or counters.

use std::f32::consts::TAU;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{Color, Element, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};

/// One ring as it appears in a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f32,
    pub radius: f32,
    /// Angle where the stroke begins, in radians (0 = 3 o'clock)
    pub start_angle: f32,
    /// Visible fraction of the circumference (0.0 - 1.0)
    pub stroke_end: f32,
}

impl RingFrame {
    /// Angle where the stroke ends
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.stroke_end * TAU
    }

    fn is_drawable(&self) -> bool {
        self.radius > 0.0 && self.radius.is_finite()
    }
}

/// Number of concentric rings in the stack
pub const RING_COUNT: usize = 3;

/// Ring stack painted bottom to top
#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    pub rings: [RingFrame; RING_COUNT],
}

impl ProgressRing {
    pub fn new(rings: [RingFrame; RING_COUNT]) -> Self {
        Self { rings }
    }
}

impl<Message> Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        for ring in self.rings.iter().filter(|ring| ring.is_drawable()) {
            let circle = Path::circle(center, ring.radius);
            if ring.fill_color.a > 0.0 {
                frame.fill(&circle, ring.fill_color);
            }

            if ring.stroke_end <= 0.0 || ring.line_width <= 0.0 {
                continue;
            }

            let stroke = Stroke::default()
                .with_width(ring.line_width)
                .with_color(ring.stroke_color)
                .with_line_cap(LineCap::Round);

            if ring.stroke_end >= 1.0 {
                frame.stroke(&circle, stroke);
            } else {
                let arc = Path::new(|builder| {
                    builder.arc(iced::widget::canvas::path::Arc {
                        center,
                        radius: ring.radius,
                        start_angle: Radians(ring.start_angle),
                        end_angle: Radians(ring.end_angle()),
                    });
                });
                frame.stroke(&arc, stroke);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Create a canvas element painting `ring` at `size`
pub fn view_progress_ring<'a, Message: 'a>(
    ring: ProgressRing,
    size: Size,
) -> Element<'a, Message> {
    Canvas::new(ring).width(size.width).height(size.height).into()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn ring(stroke_end: f32) -> RingFrame {
        RingFrame {
            stroke_color: Color::BLACK,
            fill_color: Color::TRANSPARENT,
            line_width: 6.0,
            radius: 40.0,
            start_angle: -FRAC_PI_2,
            stroke_end,
        }
    }

    #[test]
    fn test_half_sweep_ends_at_six_oclock() {
        let half = ring(0.5);
        assert!((half.end_angle() - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_radius_is_skipped() {
        assert!(ring(1.0).is_drawable());
        assert!(!RingFrame { radius: 0.0, ..ring(1.0) }.is_drawable());
        assert!(!RingFrame { radius: -3.0, ..ring(1.0) }.is_drawable());
        assert!(!RingFrame { radius: f32::NAN, ..ring(1.0) }.is_drawable());
    }
}
