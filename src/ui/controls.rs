// SPDX-License-Identifier: MPL-2.0
//! Player overlay.
//!
//! Renders the fitted frame, the auto-hiding control bars, the settings panel
//! and the buffering indicator. Every widget emits a controller
//! [`Message`] directly; the view never decides anything itself and only
//! reflects a [`ControlsView`] snapshot.

use crate::application::port::MediaResource;
use crate::domain::ui::Rect;
use crate::domain::video::{PlaybackRate, PlaybackState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::controller::{Message, PlaybackController};
use crate::video_player::keyboard::SKIP_STEP_SECS;
use iced::widget::{
    button, column, container, mouse_area, progress_bar, row, slider, text, Column, Row, Space,
    Stack,
};
use iced::{Alignment, Element, Length};

/// Timeline slider resolution as a fraction of the duration.
const TIMELINE_STEP: f64 = 0.0001;

/// Everything the overlay needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub heading: String,
    pub description: Option<String>,
    pub playback: PlaybackState,
    pub loading: bool,
    pub buffering: bool,
    pub progress: f64,
    pub buffered: f64,
    pub position_label: String,
    pub duration_label: String,
    pub volume: f32,
    pub muted: bool,
    pub rate: PlaybackRate,
    pub loop_enabled: bool,
    pub controls_visible: bool,
    pub settings_open: bool,
    pub fullscreen: bool,
    pub viewport: Rect,
}

impl ControlsView {
    /// Snapshots the controller.
    pub fn from_controller<R: MediaResource>(controller: &PlaybackController<R>) -> Self {
        let info = controller.media_info();
        Self {
            heading: info.map(|i| i.heading()).unwrap_or_default(),
            description: info.and_then(|i| i.description.clone()),
            playback: controller.playback_state(),
            loading: controller.is_loading(),
            buffering: controller.is_buffering(),
            progress: controller.progress_fraction(),
            buffered: controller.buffered_fraction(),
            position_label: controller.position_label(),
            duration_label: controller.duration_label(),
            volume: controller.volume().value(),
            muted: controller.is_effectively_muted(),
            rate: controller.rate(),
            loop_enabled: controller.loop_enabled(),
            controls_visible: controller.controls_visible(),
            settings_open: controller.settings_open(),
            fullscreen: controller.is_fullscreen(),
            viewport: controller.viewport(),
        }
    }

    /// Label of the play/pause button.
    #[must_use]
    pub fn play_label(&self) -> &'static str {
        match self.playback {
            PlaybackState::Playing => "Pause",
            PlaybackState::Ended => "Replay",
            PlaybackState::Idle | PlaybackState::Paused => "Play",
        }
    }

    /// Centre badge text, if any. Loading wins over buffering.
    #[must_use]
    pub fn status_badge(&self) -> Option<&'static str> {
        if self.loading {
            Some("Loading…")
        } else if self.buffering {
            Some("Buffering…")
        } else {
            None
        }
    }
}

/// Formats a rate as shown in the settings panel (`1x`, `0.75x`).
#[must_use]
pub fn format_rate(rate: PlaybackRate) -> String {
    format!("{}x", rate.value())
}

fn control_button(label: impl ToString, message: Message, selected: bool) -> Element<'static, Message> {
    let base = button(text(label.to_string()).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));
    if selected {
        base.style(styles::button::selected).into()
    } else {
        base.style(styles::button::control).into()
    }
}

/// Fitted frame on a black stage.
fn stage(viewport: Rect) -> Element<'static, Message> {
    let frame = container(Space::new())
        .width(Length::Fixed(viewport.width))
        .height(Length::Fixed(viewport.height))
        .style(styles::overlay::frame);

    let positioned = column![
        Space::new().height(Length::Fixed(viewport.y)),
        row![Space::new().width(Length::Fixed(viewport.x)), frame],
    ];

    container(positioned)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::stage)
        .into()
}

fn top_bar(view: &ControlsView) -> Element<'static, Message> {
    let mut content = Column::new()
        .spacing(spacing::XXS)
        .push(text(view.heading.clone()).size(typography::TITLE_MD));
    if let Some(description) = &view.description {
        content = content.push(text(description.clone()).size(typography::CAPTION));
    }
    container(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::overlay::bar)
        .into()
}

fn timeline(view: &ControlsView) -> Element<'static, Message> {
    let scrubber = slider(0.0..=1.0, view.progress, Message::SeekToFraction)
        .step(TIMELINE_STEP)
        .width(Length::Fill);
    let buffered = progress_bar(0.0..=1.0, view.buffered as f32)
        .girth(Length::Fixed(sizing::TIMELINE_TRACK));
    column![scrubber, buffered].spacing(spacing::XXS).into()
}

fn bottom_bar(view: &ControlsView) -> Element<'static, Message> {
    let skip_label = format!("{SKIP_STEP_SECS}s");
    let volume_slider = slider(0.0..=1.0, view.volume, Message::SetVolume)
        .step(0.01)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH));

    let buttons: Row<'static, Message> = row![
        control_button(view.play_label(), Message::TogglePlayPause, false),
        control_button(format!("-{skip_label}"), Message::Skip(-SKIP_STEP_SECS), false),
        control_button(format!("+{skip_label}"), Message::Skip(SKIP_STEP_SECS), false),
        text(format!("{} / {}", view.position_label, view.duration_label)).size(typography::BODY),
        Space::new().width(Length::Fill),
        control_button(if view.muted { "Unmute" } else { "Mute" }, Message::ToggleMute, view.muted),
        volume_slider,
        control_button("Loop", Message::ToggleLoop, view.loop_enabled),
        control_button(format_rate(view.rate), Message::ToggleSettings, view.settings_open),
        control_button(
            if view.fullscreen { "Exit fullscreen" } else { "Fullscreen" },
            Message::ToggleFullscreen,
            view.fullscreen,
        ),
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    container(column![timeline(view), buttons].spacing(spacing::XS))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::overlay::bar)
        .into()
}

fn settings_panel(view: &ControlsView) -> Element<'static, Message> {
    let rates = PlaybackRate::all().fold(Row::new().spacing(spacing::XXS), |row, rate| {
        row.push(control_button(
            format_rate(rate),
            Message::ChangeRate(rate.value()),
            rate == view.rate,
        ))
    });
    container(column![text("Playback speed").size(typography::CAPTION), rates].spacing(spacing::XS))
        .padding(spacing::XS)
        .style(styles::overlay::panel)
        .into()
}

fn status_badge(label: &'static str) -> Element<'static, Message> {
    container(text(label).size(typography::BODY))
        .padding(spacing::XS)
        .style(styles::overlay::panel)
        .into()
}

/// Builds the full player surface.
pub fn view(view: &ControlsView) -> Element<'static, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(stage(view.viewport));

    if let Some(label) = view.status_badge() {
        layers = layers.push(
            container(status_badge(label))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        );
    }

    if view.controls_visible {
        let mut bottom = Column::new().spacing(spacing::XS).align_x(Alignment::End);
        if view.settings_open {
            bottom = bottom.push(container(settings_panel(view)).padding(spacing::XS));
        }
        bottom = bottom.push(bottom_bar(view));

        layers = layers.push(
            column![top_bar(view), Space::new().height(Length::Fill), bottom]
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    mouse_area(layers)
        .on_move(|_| Message::PointerMoved)
        .on_exit(Message::PointerLeft)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::MediaInfo;
    use crate::video_player::controller::ControllerSettings;
    use crate::video_player::keyboard::KeyDispatcher;
    use crate::video_player::simulated::{simulated, SimulatedResource};
    use crate::application::port::MediaEvent;

    fn mounted() -> (PlaybackController<SimulatedResource>, KeyDispatcher) {
        let (resource, driver) = simulated(125.0, (1280, 720));
        let dispatcher = KeyDispatcher::new();
        let mut controller = PlaybackController::new();
        controller.mount(
            MediaInfo::new("sim://a", "Night Walk").with_description("A walk at night"),
            resource,
            &dispatcher,
            ControllerSettings::default(),
        );
        driver.load_metadata();
        for event in driver.drain_events() {
            controller.handle(Message::Media(event));
        }
        (controller, dispatcher)
    }

    #[test]
    fn snapshot_reflects_controller() {
        let (controller, _dispatcher) = mounted();
        let view = ControlsView::from_controller(&controller);
        assert_eq!(view.heading, "Night Walk");
        assert_eq!(view.description.as_deref(), Some("A walk at night"));
        assert_eq!(view.duration_label, "2:05");
        assert_eq!(view.position_label, "0:00");
        assert_eq!(view.play_label(), "Play");
        assert!(view.controls_visible);
        assert_eq!(view.status_badge(), None);
    }

    #[test]
    fn unloaded_controller_shows_loading_badge() {
        let controller: PlaybackController<SimulatedResource> = PlaybackController::new();
        let view = ControlsView::from_controller(&controller);
        assert_eq!(view.status_badge(), Some("Loading…"));
    }

    #[test]
    fn buffering_badge_after_waiting() {
        let (mut controller, _dispatcher) = mounted();
        controller.handle(Message::Media(MediaEvent::Waiting));
        let view = ControlsView::from_controller(&controller);
        assert_eq!(view.status_badge(), Some("Buffering…"));
    }

    #[test]
    fn zero_volume_renders_as_muted() {
        let (mut controller, _dispatcher) = mounted();
        controller.set_volume_level(0.0);
        assert!(ControlsView::from_controller(&controller).muted);
    }

    #[test]
    fn rates_are_formatted_compactly() {
        let labels: Vec<String> = PlaybackRate::all().map(format_rate).collect();
        assert_eq!(labels, ["0.5x", "0.75x", "1x", "1.25x", "1.5x", "2x"]);
    }

    #[test]
    fn view_builds_for_every_visibility_state() {
        let (mut controller, _dispatcher) = mounted();
        let _ = view(&ControlsView::from_controller(&controller));
        controller.handle(Message::ToggleSettings);
        let _ = view(&ControlsView::from_controller(&controller));
    }
}
