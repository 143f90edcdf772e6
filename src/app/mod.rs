// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the player controller,
//! the media platform and the window.
//!
//! The `App` struct wires together the [`PlaybackController`], the simulated
//! media platform it drives and the keyboard dispatcher. It turns controller
//! [`Effect`]s into iced [`Task`]s and feeds platform events back in on every
//! tick.

pub mod message;
pub mod persistence;
pub mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_NATURAL_SIZE, PLATFORM_TICK_MS};
use crate::domain::ui::Size;
use crate::domain::video::MediaInfo;
use crate::ui::controls::{self, ControlsView};
use crate::video_player::controller::{self as player, ControllerSettings, Effect, PlaybackController};
use crate::video_player::keyboard::{KeyDispatcher, SessionId};
use crate::video_player::simulated::{simulated, MediaDriver, SimulatedResource};
use iced::{window, Element, Subscription, Task, Theme};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 320;

const APP_TITLE: &str = "Watch Player";

/// Root iced application state.
pub struct App {
    controller: PlaybackController<SimulatedResource>,
    driver: MediaDriver,
    dispatcher: KeyDispatcher,
    session: SessionId,
    window_id: Option<window::Id>,
    last_tick: Option<Instant>,
    config: Config,
    config_dir: Option<PathBuf>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Closing goes through `Message::WindowCloseRequested` so preferences
        // are saved first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, mounts the media and reports its metadata.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        if let Some(warning) = config_warning {
            warn!("app: {warning}; using defaults");
        }

        let mut info = MediaInfo::new(flags.source, flags.title).with_kind(flags.kind);
        if let Some(description) = flags.description {
            info = info.with_description(description);
        }

        let (resource, driver) = simulated(flags.duration, DEFAULT_NATURAL_SIZE);
        let dispatcher = KeyDispatcher::new();
        let mut controller = PlaybackController::new();
        let session = controller.mount(
            info,
            resource,
            &dispatcher,
            ControllerSettings::from_config(&config),
        );
        controller.handle(player::Message::ContainerResized(Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        )));

        let mut app = App {
            controller,
            driver,
            dispatcher,
            session,
            window_id: None,
            last_tick: None,
            config,
            config_dir: flags.config_dir,
        };

        app.driver.load_metadata();
        let task = app.pump();
        (app, task)
    }

    fn title(&self) -> String {
        match self.controller.media_info() {
            Some(info) => format!("{} - {APP_TITLE}", info.heading()),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Player(message) => {
                let effects = self.controller.handle(message);
                self.run_effects(effects)
            }
            Message::KeyPressed { window, key } => {
                self.window_id = Some(window);
                match self.dispatcher.dispatch(key) {
                    Some((owner, _)) if Some(owner) == self.controller.session_id() => {
                        let effects = self.controller.handle(player::Message::Key(key));
                        self.run_effects(effects)
                    }
                    _ => Task::none(),
                }
            }
            Message::Resized { window, size } => {
                self.window_id = Some(window);
                let effects = self
                    .controller
                    .handle(player::Message::ContainerResized(Size::new(size.width, size.height)));
                self.run_effects(effects)
            }
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map_or(Duration::from_millis(PLATFORM_TICK_MS), |last| {
                        now.saturating_duration_since(last)
                    });
                self.last_tick = Some(now);
                self.driver.advance(elapsed);
                self.pump()
            }
            Message::HideTimerElapsed { session, token } => {
                if Some(session) != self.controller.session_id() {
                    debug!("app: hide timer from session {} dropped", session.value());
                    return Task::none();
                }
                let effects = self
                    .controller
                    .handle(player::Message::HideTimerElapsed(token));
                self.run_effects(effects)
            }
            Message::WindowCloseRequested(window_id) => {
                self.save_preferences();
                window::close(window_id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        controls::view(&ControlsView::from_controller(&self.controller)).map(Message::Player)
    }

    /// Feeds every pending platform event to the controller.
    fn pump(&mut self) -> Task<Message> {
        if self.controller.session_id() != Some(self.session) {
            // Events queued for a session that is gone.
            let stale = self.driver.drain_events();
            if !stale.is_empty() {
                debug!("app: dropped {} stale media events", stale.len());
            }
            return Task::none();
        }
        let mut effects = Vec::new();
        for event in self.driver.drain_events() {
            effects.extend(self.controller.handle(player::Message::Media(event)));
        }
        self.run_effects(effects)
    }

    fn run_effects(&self, effects: Vec<Effect>) -> Task<Message> {
        Task::batch(effects.into_iter().map(|effect| self.effect_task(effect)))
    }

    fn effect_task(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScheduleHide { token, delay } => {
                let session = self.session;
                Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |()| Message::HideTimerElapsed { session, token },
                )
            }
            Effect::RequestFullscreen => self.set_window_mode(true),
            Effect::ExitFullscreen => self.set_window_mode(false),
            Effect::FullscreenSignal(active) => {
                info!("app: fullscreen {}", if active { "entered" } else { "left" });
                Task::none()
            }
        }
    }

    /// Switches the window mode, then reads the mode back and reports what
    /// the window actually did.
    fn set_window_mode(&self, fullscreen: bool) -> Task<Message> {
        let Some(window_id) = self.window_id else {
            return Task::done(Message::Player(player::Message::FullscreenRejected));
        };
        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode).chain(
            window::mode(window_id)
                .map(move |actual| Message::Player(mode_confirmation(fullscreen, actual))),
        )
    }

    /// Saves the session's preferences; failures are logged and closing goes on.
    fn save_preferences(&mut self) {
        let config_dir = self.config_dir.clone();
        if let Err(err) =
            persistence::persist_preferences(&mut self.config, &self.controller, config_dir)
        {
            warn!("app: failed to save preferences: {err}");
        }
    }

    /// Configuration the session was started with, plus any saved preferences.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Maps the mode read back after a switch to the controller's confirmation.
///
/// Only `Fullscreen` confirms entering; any other mode confirms leaving.
fn mode_confirmation(requested_fullscreen: bool, actual: window::Mode) -> player::Message {
    let is_fullscreen = actual == window::Mode::Fullscreen;
    if is_fullscreen == requested_fullscreen {
        player::Message::FullscreenChanged(requested_fullscreen)
    } else {
        player::Message::FullscreenRejected
    }
}
