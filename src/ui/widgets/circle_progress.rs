//! Animated circular progress indicator
//!
//! `CircleProgress` owns three ring layers and a counting label. A call to
//! [`CircleProgress::start`] drives two animations that share no clock:
//!
//! - the progress ring's stroke sweeps linearly from 0 to `value / 100`,
//! - the label counts 0..=value on a repeating tick of `duration / value`.
//!
//! With one tick per percentage point the label appears to follow the sweep.
//!
//! # Session ownership
//!
//! At most one counter session exists. Starting again replaces the previous
//! session and cancels the previous sweep before anything new is scheduled.
//! Ticks carry their session id, and ticks for any other id are dropped.

mod config;
mod counter;
mod geometry;
mod layout;
mod rings;

use std::time::{Duration, Instant};

use iced::widget::stack;
use iced::{Element, Subscription};

pub use config::{DEFAULT_DURATION_SECS, DEFAULT_SIZE, WidgetConfig};
pub use counter::{CounterSession, CounterState, SessionId, tick_interval};
pub use geometry::{
    RingGeometry, label_font_size, line_width, percent_font_size, ring_radius,
};
pub use layout::PERCENT_SIGN;
pub use rings::{PULSE_DURATION, PULSE_SCALE, RingKind, RingLayer, RingStack};

use crate::ui::primitives::{ProgressRing, view_progress_ring};

/// Highest accepted percentage
pub const MAX_PERCENT: u32 = 100;

/// Widget messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Start a new sweep and counter session
    Start { duration: f32, value: u32 },
    /// Counter tick for the given session
    Tick(SessionId),
    /// Animation frame; advances the ring animations to this instant
    Frame(Instant),
}

/// The progress widget state
#[derive(Debug)]
pub struct CircleProgress {
    config: WidgetConfig,
    geometry: RingGeometry,
    rings: RingStack,
    /// The single active (or last completed) counter session
    session: Option<CounterSession>,
    next_session: SessionId,
    label: String,
}

impl CircleProgress {
    /// Build the widget; starts the entry animation when `auto_start` is set
    pub fn new(config: WidgetConfig) -> Self {
        let geometry = RingGeometry::from_width(config.bounds.width);
        let rings = RingStack::build(&config, &geometry);

        let mut widget = Self {
            config,
            geometry,
            rings,
            session: None,
            next_session: SessionId::new(0),
            label: String::from("0"),
        };

        if config.auto_start {
            widget.start(config.animation_duration, config.target_percent);
        }

        widget
    }

    /// Trigger a new sweep and counter session
    ///
    /// Returns the id of the new running session, or `None` when nothing
    /// needs to tick (zero value, or a duration that completes instantly).
    pub fn start(&mut self, duration: f32, value: u32) -> Option<SessionId> {
        let value = if value > MAX_PERCENT {
            tracing::warn!("Progress value {} clamped to {}", value, MAX_PERCENT);
            MAX_PERCENT
        } else {
            value
        };

        // Invalidate whatever the previous start scheduled
        self.rings.progress.sweep.cancel();
        if let Some(previous) = self.session.take()
            && previous.is_running()
        {
            tracing::debug!(
                "Replacing running counter session {:?} at {}/{}",
                previous.id(),
                previous.count(),
                previous.target()
            );
        }
        self.label = String::from("0");

        let fraction = value as f32 / MAX_PERCENT as f32;
        self.rings.progress.stroke_end = fraction;

        if value == 0 {
            tracing::debug!("Progress value is zero, no counter session started");
            return None;
        }

        let id = self.next_session;
        self.next_session = id.next();

        let scheduled = sweep_duration(duration).and_then(|duration| {
            CounterSession::new(id, duration, value).map(|session| (duration, session))
        });
        let Some((duration, session)) = scheduled else {
            tracing::warn!(
                "Animation duration {} cannot be scheduled, completing at {}% immediately",
                duration,
                value
            );
            self.session = Some(CounterSession::completed(id, value));
            self.label = value.to_string();
            return None;
        };

        self.rings.progress.sweep.start(fraction, duration);
        self.session = Some(session);
        tracing::info!(
            "Counter session {:?} started: {}% over {:?}",
            id,
            value,
            duration
        );

        Some(id)
    }

    /// Advance the counter if `id` names the active session
    ///
    /// Returns the new count when the label changed.
    pub fn tick(&mut self, id: SessionId) -> Option<u32> {
        let session = self.session.as_mut().filter(|session| session.id() == id)?;
        let count = session.tick()?;
        self.label = count.to_string();

        if !session.is_running() {
            tracing::debug!("Counter session {:?} completed at {}", id, count);
        }
        Some(count)
    }

    /// Handle a widget message
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Start { duration, value } => {
                self.start(duration, value);
            }
            Message::Tick(id) => {
                self.tick(id);
            }
            Message::Frame(now) => self.rings.tick(now),
        }
    }

    /// Session the counter subscription is keyed on, with its tick interval
    ///
    /// `None` once the session completed or when none was started.
    pub fn ticking_session(&self) -> Option<(SessionId, Duration)> {
        self.session
            .as_ref()
            .filter(|session| session.is_running())
            .map(|session| (session.id(), session.interval()))
    }

    /// Counter ticks for the active session, frames while animations run
    pub fn subscription(&self) -> Subscription<Message> {
        let counter = match self.ticking_session() {
            Some((id, interval)) => iced::time::every(interval)
                .with(id)
                .map(|(id, _)| Message::Tick(id)),
            None => Subscription::none(),
        };

        let frames = if self.rings.is_animating() {
            iced::window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([counter, frames])
    }

    /// Rings and label as they should appear right now
    pub fn view(&self) -> Element<'_, Message> {
        let bounds = self.config.bounds;
        let ring = ProgressRing::new(self.rings.snapshot());

        stack![
            view_progress_ring(ring, bounds),
            layout::label_stack(
                &self.label,
                &self.geometry,
                self.config.text_color,
                bounds
            ),
        ]
        .into()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    pub fn rings(&self) -> &RingStack {
        &self.rings
    }

    /// Text currently shown in the value label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resting stroke fraction of the progress ring
    pub fn progress_fraction(&self) -> f32 {
        self.rings.progress.stroke_end
    }

    pub fn counter_state(&self) -> CounterState {
        self.session
            .as_ref()
            .map_or(CounterState::Idle, CounterSession::state)
    }

    pub fn session(&self) -> Option<&CounterSession> {
        self.session.as_ref()
    }

    /// Check if any ring has an animation in progress
    pub fn is_animating(&self) -> bool {
        self.rings.is_animating()
    }
}

/// Convert a duration in seconds, rejecting values that cannot be scheduled
fn sweep_duration(seconds: f32) -> Option<Duration> {
    if seconds.is_nan() || seconds <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f32(seconds)
        .ok()
        .filter(|duration| !duration.is_zero())
}
