//! Ring layers built from the widget configuration
//!
//! Each layer keeps a model value (what it rests at) and the animations
//! attached to it. [`RingLayer::presentation`] merges the two into a
//! [`RingFrame`] that the canvas paints.

use std::f32::consts::FRAC_PI_2;
use std::time::{Duration, Instant};

use iced::Color;

use super::config::WidgetConfig;
use super::geometry::RingGeometry;
use crate::ui::animation::{PulseAnimation, StrokeSweep};
use crate::ui::primitives::RingFrame;
use crate::ui::theme;

/// Peak scale of the border pulse
pub const PULSE_SCALE: f32 = 1.17;
/// One-way duration of the border pulse
pub const PULSE_DURATION: Duration = Duration::from_millis(800);
/// Track opacity when the background is transparent
pub const TRANSPARENT_TRACK_OPACITY: f32 = 0.5;

/// Which ring a layer is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingKind {
    /// Outer outline, or the pulsating halo
    Border,
    /// Full circle behind the progress arc
    Track,
    /// Arc sweeping from 12 o'clock
    Progress,
}

/// One concentric ring
#[derive(Debug)]
pub struct RingLayer {
    pub kind: RingKind,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f32,
    pub radius: f32,
    pub opacity: f32,
    /// Rotation in radians, applied before the stroke starts
    pub rotation: f32,
    /// Resting visible fraction (0.0 - 1.0)
    pub stroke_end: f32,
    /// Whole-layer scale pulse, never stopped once attached
    pub pulse: Option<PulseAnimation>,
    /// Running stroke transition
    pub sweep: StrokeSweep,
}

impl RingLayer {
    fn new(kind: RingKind, stroke_color: Color, fill_color: Color, geometry: &RingGeometry) -> Self {
        Self {
            kind,
            stroke_color,
            fill_color,
            line_width: geometry.line_width,
            radius: geometry.ring_radius,
            opacity: 1.0,
            rotation: 0.0,
            stroke_end: 1.0,
            pulse: None,
            sweep: StrokeSweep::new(),
        }
    }

    /// Snapshot of the layer as it currently appears
    pub fn presentation(&self) -> RingFrame {
        let stroke_end = self.sweep.value().unwrap_or(self.stroke_end);
        let scale = self.pulse.as_ref().map_or(1.0, PulseAnimation::value);

        RingFrame {
            stroke_color: theme::with_opacity(self.stroke_color, self.opacity),
            fill_color: theme::with_opacity(self.fill_color, self.opacity),
            line_width: self.line_width * scale,
            radius: self.radius * scale,
            start_angle: self.rotation,
            stroke_end: stroke_end.clamp(0.0, 1.0),
        }
    }

    /// Check if this layer has an animation in progress
    pub fn is_animating(&self) -> bool {
        self.pulse.is_some() || self.sweep.is_animating()
    }

    /// Advance every attached animation to `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some(pulse) = self.pulse.as_mut() {
            pulse.tick(now);
        }
        self.sweep.tick(now);
    }
}

/// The three rings in paint order: border, track, progress
#[derive(Debug)]
pub struct RingStack {
    pub border: RingLayer,
    pub track: RingLayer,
    pub progress: RingLayer,
}

impl RingStack {
    /// Build all rings against `geometry`
    ///
    /// A pulsing border gets its endless scale pulse attached here.
    pub fn build(config: &WidgetConfig, geometry: &RingGeometry) -> Self {
        let mut border = RingLayer::new(
            RingKind::Border,
            config.border_color,
            theme::CLEAR,
            geometry,
        );
        if config.pulsing {
            border.pulse = Some(PulseAnimation::new(1.0, PULSE_SCALE, PULSE_DURATION));
        } else {
            border.line_width = geometry.line_width * 2.0;
        }

        let mut track = RingLayer::new(
            RingKind::Track,
            config.track_color,
            config.background_color,
            geometry,
        );
        if config.transparent_background {
            track.opacity = TRANSPARENT_TRACK_OPACITY;
        }

        let mut progress = RingLayer::new(
            RingKind::Progress,
            config.progress_color,
            theme::CLEAR,
            geometry,
        );
        progress.rotation = -FRAC_PI_2;
        progress.stroke_end = 0.0;

        Self {
            border,
            track,
            progress,
        }
    }

    /// Layers bottom to top
    pub fn layers(&self) -> [&RingLayer; 3] {
        [&self.border, &self.track, &self.progress]
    }

    /// Presentation snapshot of every layer, bottom to top
    pub fn snapshot(&self) -> [RingFrame; 3] {
        self.layers().map(RingLayer::presentation)
    }

    /// Check if any layer has an animation in progress
    pub fn is_animating(&self) -> bool {
        self.layers().iter().any(|layer| layer.is_animating())
    }

    /// Advance every layer's animations to `now`
    pub fn tick(&mut self, now: Instant) {
        self.border.tick(now);
        self.track.tick(now);
        self.progress.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(config: WidgetConfig) -> (RingStack, RingGeometry) {
        let geometry = RingGeometry::from_width(config.bounds.width);
        (RingStack::build(&config, &geometry), geometry)
    }

    #[test]
    fn test_paint_order() {
        let (rings, _) = build(WidgetConfig::default());
        let kinds = rings.layers().map(|layer| layer.kind);
        assert_eq!(kinds, [RingKind::Border, RingKind::Track, RingKind::Progress]);
    }

    #[test]
    fn test_static_border_is_double_width() {
        let (rings, geometry) = build(WidgetConfig::default().size(200.0));
        assert_eq!(rings.border.line_width, 2.0 * geometry.line_width);
        assert!(rings.border.pulse.is_none());
        assert!(!rings.is_animating());
    }

    #[test]
    fn test_pulsing_border_keeps_base_width() {
        let (rings, geometry) = build(WidgetConfig::default().pulsing(true).size(200.0));
        assert_eq!(rings.border.line_width, geometry.line_width);

        let pulse = rings.border.pulse.as_ref();
        assert!(pulse.is_some_and(|pulse| pulse.peak() == PULSE_SCALE
            && pulse.leg() == PULSE_DURATION));
        assert!(rings.is_animating());
    }

    #[test]
    fn test_pulse_scales_whole_layer() {
        let (mut rings, geometry) = build(WidgetConfig::default().pulsing(true));
        let start = Instant::now();

        // Settle the first leg at the peak
        rings.tick(start);
        rings.tick(start + Duration::from_secs(2));
        let frame = rings.border.presentation();
        assert!(frame.radius > geometry.ring_radius * 1.16);
        assert!(frame.line_width > geometry.line_width * 1.16);

        // Pulsing never settles
        rings.tick(start + Duration::from_secs(600));
        assert!(rings.is_animating());
    }

    #[test]
    fn test_track_fill_and_opacity() {
        let (rings, _) = build(
            WidgetConfig::default()
                .background_color(Color::WHITE)
                .transparent_background(true),
        );
        assert_eq!(rings.track.fill_color, Color::WHITE);
        assert_eq!(rings.track.opacity, TRANSPARENT_TRACK_OPACITY);

        let frame = rings.track.presentation();
        assert_eq!(frame.fill_color.a, 0.5);
    }

    #[test]
    fn test_progress_starts_empty_at_top() {
        let (rings, _) = build(WidgetConfig::default());
        assert_eq!(rings.progress.stroke_end, 0.0);
        assert_eq!(rings.progress.rotation, -FRAC_PI_2);
        assert_eq!(rings.progress.fill_color, Color::TRANSPARENT);
        assert_eq!(rings.progress.presentation().stroke_end, 0.0);
    }

    #[test]
    fn test_all_rings_share_radius() {
        let (rings, geometry) = build(WidgetConfig::default().size(150.0));
        for layer in rings.layers() {
            assert_eq!(layer.radius, geometry.ring_radius);
        }
    }
}
