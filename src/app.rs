//! Demo application embedding a single progress ring

use iced::widget::{Space, button, column, container, row, slider, text};
use iced::{Alignment, Element, Fill, Subscription, Task, Theme};

use circle_progress::features::Settings;
use circle_progress::ui::widgets::circle_progress as progress;
use circle_progress::ui::widgets::{CircleProgress, WidgetConfig};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the progress ring
    Ring(progress::Message),
    /// Percent slider moved
    PercentChanged(f32),
    /// Duration slider moved (seconds)
    DurationChanged(f32),
    /// Restart the ring with the slider values
    Restart,
    /// Persist the current settings
    SaveSettings,
}

/// Demo application state
pub struct App {
    settings: Settings,
    ring: CircleProgress,
    percent: u32,
    duration: f32,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let config = match settings.ring.widget_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid ring settings, using defaults: {}", e);
                WidgetConfig::default()
            }
        };

        let app = Self {
            percent: config.target_percent,
            duration: config.animation_duration,
            ring: CircleProgress::new(config),
            settings,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("Circle Progress - {}%", self.percent)
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Ring(message) => self.ring.update(message),
            Message::PercentChanged(value) => {
                self.percent = value.round() as u32;
            }
            Message::DurationChanged(value) => {
                self.duration = value;
            }
            Message::Restart => {
                self.ring.update(progress::Message::Start {
                    duration: self.duration,
                    value: self.percent,
                });
            }
            Message::SaveSettings => {
                self.settings.ring.target_percent = self.percent;
                self.settings.ring.animation_duration = self.duration;
                match self.settings.save() {
                    Ok(()) => tracing::info!("Settings saved"),
                    Err(e) => tracing::warn!("Failed to save settings: {}", e),
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controls = column![
            row![
                text("Percent").width(80),
                slider(0.0..=100.0, self.percent as f32, Message::PercentChanged).step(1.0),
                text(format!("{:>3}%", self.percent)).width(48),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            row![
                text("Duration").width(80),
                slider(0.1..=10.0, self.duration, Message::DurationChanged).step(0.1),
                text(format!("{:.1}s", self.duration)).width(48),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            row![
                button(text("Start")).on_press(Message::Restart),
                button(text("Save")).on_press(Message::SaveSettings),
            ]
            .spacing(12),
        ]
        .spacing(12)
        .max_width(420);

        let content = column![
            self.ring.view().map(Message::Ring),
            Space::new().height(24),
            controls,
        ]
        .align_x(Alignment::Center);

        container(content).center(Fill).padding(24).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.ring.subscription().map(Message::Ring)
    }
}
