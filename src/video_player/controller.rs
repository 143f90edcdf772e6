// SPDX-License-Identifier: MPL-2.0
//! Playback controller.
//!
//! Owns one mounted media session and keeps the overlay state in step with
//! what the resource actually reports. The rules:
//!
//! - Playing/paused/ended and fullscreen change **only** on confirmation
//!   (a [`MediaEvent`] or [`Message::FullscreenChanged`]). User commands are
//!   requests sent through the [`PlaybackEngine`].
//! - Volume, mute and rate are preferences. They are written through
//!   immediately and reconciled when the resource confirms.
//! - Nothing the host delivers after [`PlaybackController::unmount`] can
//!   mutate state.
//!
//! Side effects the controller cannot perform itself (sleeping, switching the
//! window mode, telling collaborators about fullscreen) are returned as
//! [`Effect`]s for the host to carry out.

use super::buffered::BufferedProgress;
use super::engine::PlaybackEngine;
use super::fit::fit_natural_pixels;
use super::hide_timer::{HideTimer, HideToken};
use super::keyboard::{route, KeyCommand, KeyDispatcher, KeyboardLease, PhysicalKey, SessionId};
use super::time_format::{format_optional_time, format_time, fraction_of};
use crate::application::port::{MediaEvent, MediaResource};
use crate::config::Config;
use crate::domain::ui::{HideDelay, Rect, Size};
use crate::domain::video::{BufferState, MediaInfo, PlaybackRate, PlaybackState, Volume};
use log::{debug, trace, warn};
use std::time::Duration;

/// Preferences applied to every newly mounted session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerSettings {
    pub volume: Volume,
    pub muted: bool,
    pub rate: PlaybackRate,
    pub loop_enabled: bool,
    pub hide_delay: HideDelay,
}

impl ControllerSettings {
    /// Resolves persisted preferences, clamping out-of-range values.
    ///
    /// A rate that is not one of the presets falls back to normal speed.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            volume: config.video.volume.map_or(defaults.volume, Volume::new),
            muted: config.video.muted.unwrap_or(defaults.muted),
            rate: config
                .video
                .playback_rate
                .and_then(PlaybackRate::from_value)
                .unwrap_or(defaults.rate),
            loop_enabled: config.video.loop_enabled.unwrap_or(defaults.loop_enabled),
            hide_delay: config
                .controls
                .hide_delay_ms
                .map_or(defaults.hide_delay, HideDelay::new),
        }
    }
}

/// Inputs the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Event reported by the mounted resource.
    Media(MediaEvent),
    TogglePlayPause,
    /// Relative seek in seconds.
    Skip(f64),
    /// Absolute seek as a fraction of the duration (timeline click or drag).
    SeekToFraction(f64),
    SetVolume(f32),
    ToggleMute,
    ChangeRate(f64),
    ToggleSettings,
    ToggleLoop,
    ToggleFullscreen,
    RequestFullscreen,
    ExitFullscreen,
    /// Platform confirmed the window mode.
    FullscreenChanged(bool),
    /// Platform refused a fullscreen request.
    FullscreenRejected,
    PointerMoved,
    PointerLeft,
    ShowControls,
    Key(PhysicalKey),
    HideTimerElapsed(HideToken),
    ContainerResized(Size),
}

/// Work the host must carry out on the controller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver [`Message::HideTimerElapsed`] with `token` after `delay`.
    ScheduleHide { token: HideToken, delay: Duration },
    /// Ask the platform to enter fullscreen.
    RequestFullscreen,
    /// Ask the platform to leave fullscreen.
    ExitFullscreen,
    /// Confirmed fullscreen state, for collaborators outside the player.
    FullscreenSignal(bool),
}

/// State of one mounted resource. Dropping it releases the keyboard lease.
#[derive(Debug)]
struct Session<R: MediaResource> {
    id: SessionId,
    info: MediaInfo,
    engine: PlaybackEngine<R>,
    lease: KeyboardLease,

    playback: PlaybackState,
    buffer: BufferState,
    /// Play/pause confirmed before metadata; decides the first settled state.
    early_playing: Option<bool>,
    current_time: f64,
    /// Set by a confirmed seek so the next position may move backwards.
    seek_pending: bool,
    duration: Option<f64>,
    buffered: BufferedProgress,

    volume: Volume,
    muted: bool,
    rate: PlaybackRate,
    loop_enabled: bool,

    controls_visible: bool,
    settings_open: bool,
    hide_timer: HideTimer,
    hide_delay: HideDelay,

    container: Size,
    viewport: Rect,
}

impl<R: MediaResource> Session<R> {
    fn can_hide(&self) -> bool {
        self.playback.is_playing() && !self.buffer.is_buffering() && !self.settings_open
    }

    fn show_controls(&mut self) {
        self.controls_visible = true;
        self.hide_timer.cancel();
    }

    /// Shows the overlay and restarts the countdown if hiding is allowed.
    fn touch(&mut self, effects: &mut Vec<Effect>) {
        self.controls_visible = true;
        self.arm_hide(effects);
    }

    fn arm_hide(&mut self, effects: &mut Vec<Effect>) {
        if self.can_hide() {
            let token = self.hide_timer.reset();
            effects.push(Effect::ScheduleHide {
                token,
                delay: self.hide_delay.as_duration(),
            });
        } else {
            self.hide_timer.cancel();
        }
    }

    fn refit(&mut self) {
        self.viewport = fit_natural_pixels(self.container, self.engine.natural_size());
    }

    fn on_progress(&mut self) {
        self.buffered.update(self.engine.buffered_fraction());
    }

    fn sync_position(&mut self) {
        let time = self.engine.current_time();
        if self.playback.is_playing() && !self.seek_pending && time < self.current_time {
            trace!(
                "controller: ignoring backwards position {time:.3}s < {:.3}s",
                self.current_time
            );
            return;
        }
        self.current_time = time;
        self.seek_pending = false;
    }

    fn on_media(&mut self, event: MediaEvent, effects: &mut Vec<Effect>) {
        trace!("controller: media event {event:?} in {:?}", self.playback);
        match event {
            MediaEvent::LoadedMetadata => {
                self.duration = self.engine.duration();
                self.current_time = self.engine.current_time();
                if self.playback.is_idle() {
                    self.playback = if self.early_playing.take() == Some(true) {
                        PlaybackState::Playing
                    } else {
                        PlaybackState::Paused
                    };
                }
                self.refit();
                self.on_progress();
                debug!(
                    "controller: metadata loaded, duration {}, settled {:?}",
                    format_optional_time(self.duration),
                    self.playback
                );
                self.arm_hide(effects);
            }
            MediaEvent::Play => match self.playback {
                PlaybackState::Idle => self.early_playing = Some(true),
                PlaybackState::Ended => {
                    debug!("controller: play while ended, waiting for a seek");
                }
                PlaybackState::Paused | PlaybackState::Playing => {
                    self.playback = PlaybackState::Playing;
                    self.arm_hide(effects);
                }
            },
            MediaEvent::Pause => match self.playback {
                PlaybackState::Idle => self.early_playing = Some(false),
                PlaybackState::Ended => {}
                PlaybackState::Paused | PlaybackState::Playing => {
                    self.playback = PlaybackState::Paused;
                    self.show_controls();
                }
            },
            MediaEvent::TimeUpdate => {
                self.sync_position();
                self.on_progress();
            }
            MediaEvent::Progress => self.on_progress(),
            MediaEvent::Waiting => {
                if self.playback.is_ended() {
                    return;
                }
                self.buffer = BufferState::Buffering;
                self.show_controls();
            }
            MediaEvent::CanPlay => {
                let was_buffering = self.buffer.is_buffering();
                self.buffer = BufferState::Ready;
                if was_buffering {
                    self.arm_hide(effects);
                }
            }
            MediaEvent::Seeking => {
                self.seek_pending = true;
                self.buffered.invalidate();
                if self.playback.is_ended() {
                    self.playback = PlaybackState::Paused;
                }
                self.current_time = self.engine.current_time();
            }
            MediaEvent::Seeked => {
                self.current_time = self.engine.current_time();
                self.on_progress();
            }
            MediaEvent::Ended => {
                self.playback = PlaybackState::Ended;
                self.buffer = BufferState::Ready;
                self.current_time = self.duration.unwrap_or_else(|| self.engine.current_time());
                self.show_controls();
            }
            MediaEvent::VolumeChange => {
                self.volume = self.engine.volume();
                self.muted = self.engine.muted();
            }
            MediaEvent::RateChange => match self.engine.rate() {
                Some(rate) => self.rate = rate,
                None => warn!("controller: resource reported an unsupported playback rate"),
            },
        }
    }

    fn toggle_play_pause(&mut self) {
        if self.playback.is_playing() {
            self.engine.pause();
        } else {
            self.engine.play();
        }
    }

    fn skip(&mut self, delta: f64) {
        if self.duration.is_none() {
            debug!("controller: skip ignored, duration unknown");
            return;
        }
        let target = self.engine.current_time() + delta;
        self.engine.seek_to(target);
    }

    fn seek_to_fraction(&mut self, fraction: f64) {
        let Some(duration) = self.duration else {
            return;
        };
        if !fraction.is_finite() {
            return;
        }
        self.engine.seek_to(fraction.clamp(0.0, 1.0) * duration);
    }

    fn set_volume_level(&mut self, level: f32) {
        self.volume = Volume::new(level);
        self.muted = self.volume.is_silent();
        self.engine.set_volume(self.volume);
        self.engine.set_muted(self.muted);
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.engine.set_muted(self.muted);
    }

    fn change_rate(&mut self, value: f64, effects: &mut Vec<Effect>) {
        let Some(rate) = PlaybackRate::from_value(value) else {
            debug!("controller: rejected playback rate {value}");
            return;
        };
        self.rate = rate;
        self.engine.set_rate(rate);
        self.settings_open = false;
        self.arm_hide(effects);
    }

    fn toggle_settings(&mut self, effects: &mut Vec<Effect>) {
        self.settings_open = !self.settings_open;
        if self.settings_open {
            self.show_controls();
        } else {
            self.arm_hide(effects);
        }
    }

    fn toggle_loop(&mut self) {
        self.loop_enabled = !self.loop_enabled;
        self.engine.set_loop(self.loop_enabled);
    }

    fn run_key_command(
        &mut self,
        command: KeyCommand,
        effects: &mut Vec<Effect>,
        fullscreen: bool,
    ) {
        match command {
            KeyCommand::TogglePlayPause => self.toggle_play_pause(),
            KeyCommand::Skip(delta) => self.skip(delta),
            KeyCommand::VolumeUp => self.set_volume_level(self.volume.increase().value()),
            KeyCommand::VolumeDown => self.set_volume_level(self.volume.decrease().value()),
            KeyCommand::ToggleMute => self.toggle_mute(),
            KeyCommand::ToggleFullscreen => effects.push(if fullscreen {
                Effect::ExitFullscreen
            } else {
                Effect::RequestFullscreen
            }),
        }
    }
}

/// Drives one media resource at a time and exposes the overlay state.
#[derive(Debug)]
pub struct PlaybackController<R: MediaResource> {
    session: Option<Session<R>>,
    fullscreen: bool,
    container: Size,
    /// Last hide generation used by any session; the next one continues it.
    hide_generation: u64,
}

impl<R: MediaResource> Default for PlaybackController<R> {
    fn default() -> Self {
        Self {
            session: None,
            fullscreen: false,
            container: Size::default(),
            hide_generation: 0,
        }
    }
}

impl<R: MediaResource> PlaybackController<R> {
    /// Creates an unmounted controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `resource`, replacing any current one.
    ///
    /// Preferences from `settings` are pushed to the resource immediately and
    /// the session takes the keyboard from `dispatcher`.
    pub fn mount(
        &mut self,
        info: MediaInfo,
        resource: R,
        dispatcher: &KeyDispatcher,
        settings: ControllerSettings,
    ) -> SessionId {
        self.unmount();

        let id = dispatcher.new_session();
        let lease = dispatcher.acquire(id);
        let mut engine = PlaybackEngine::new(resource);
        engine.set_volume(settings.volume);
        engine.set_muted(settings.muted);
        engine.set_rate(settings.rate);
        engine.set_loop(settings.loop_enabled);

        debug!(
            "controller: mounted session {} for {:?} ({})",
            id.value(),
            info.heading(),
            info.source
        );

        let mut session = Session {
            id,
            info,
            engine,
            lease,
            playback: PlaybackState::Idle,
            buffer: BufferState::Ready,
            early_playing: None,
            current_time: 0.0,
            seek_pending: false,
            duration: None,
            buffered: BufferedProgress::new(),
            volume: settings.volume,
            muted: settings.muted,
            rate: settings.rate,
            loop_enabled: settings.loop_enabled,
            controls_visible: true,
            settings_open: false,
            hide_timer: HideTimer::continuing(self.hide_generation),
            hide_delay: settings.hide_delay,
            container: self.container,
            viewport: Rect::default(),
        };
        session.refit();
        self.session = Some(session);
        id
    }

    /// Tears the session down: the timer is cancelled and the keyboard released.
    pub fn unmount(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.hide_timer.cancel();
            self.hide_generation = session.hide_timer.generation();
            debug!("controller: unmounted session {}", session.id.value());
        }
    }

    /// Applies one message and returns the effects the host must run.
    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        // Window state outlives sessions.
        match message {
            Message::FullscreenChanged(active) => {
                if active != self.fullscreen {
                    self.fullscreen = active;
                    effects.push(Effect::FullscreenSignal(active));
                }
                return effects;
            }
            Message::FullscreenRejected => {
                warn!("controller: fullscreen request rejected by the platform");
                return effects;
            }
            Message::ContainerResized(size) => {
                self.container = size;
                if let Some(session) = self.session.as_mut() {
                    session.container = size;
                    session.refit();
                }
                return effects;
            }
            _ => {}
        }

        let fullscreen = self.fullscreen;
        let Some(session) = self.session.as_mut() else {
            trace!("controller: dropping {message:?}, nothing mounted");
            return effects;
        };

        match message {
            Message::Media(event) => session.on_media(event, &mut effects),
            Message::TogglePlayPause => session.toggle_play_pause(),
            Message::Skip(delta) => session.skip(delta),
            Message::SeekToFraction(fraction) => session.seek_to_fraction(fraction),
            Message::SetVolume(level) => session.set_volume_level(level),
            Message::ToggleMute => session.toggle_mute(),
            Message::ChangeRate(rate) => session.change_rate(rate, &mut effects),
            Message::ToggleSettings => session.toggle_settings(&mut effects),
            Message::ToggleLoop => session.toggle_loop(),
            Message::ToggleFullscreen => session.run_key_command(
                KeyCommand::ToggleFullscreen,
                &mut effects,
                fullscreen,
            ),
            Message::RequestFullscreen => {
                if !fullscreen {
                    effects.push(Effect::RequestFullscreen);
                }
            }
            Message::ExitFullscreen => {
                if fullscreen {
                    effects.push(Effect::ExitFullscreen);
                }
            }
            Message::PointerMoved | Message::ShowControls => session.touch(&mut effects),
            Message::PointerLeft => {
                // Buffering keeps the overlay up, same as the hide timer.
                if session.can_hide() {
                    session.hide_timer.cancel();
                    session.controls_visible = false;
                }
            }
            Message::Key(key) => {
                if !session.lease.is_active() {
                    trace!("controller: key {key:?} for inactive session dropped");
                    return effects;
                }
                if let Some(command) = route(key) {
                    session.run_key_command(command, &mut effects, fullscreen);
                    session.touch(&mut effects);
                }
            }
            Message::HideTimerElapsed(token) => {
                if session.hide_timer.fire(token) && session.can_hide() {
                    session.controls_visible = false;
                }
            }
            Message::FullscreenChanged(_)
            | Message::FullscreenRejected
            | Message::ContainerResized(_) => {}
        }

        effects
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Requests play when not playing, pause when playing.
    pub fn toggle_play_pause(&mut self) -> Vec<Effect> {
        self.handle(Message::TogglePlayPause)
    }

    /// Requests a relative seek of `delta` seconds.
    pub fn skip(&mut self, delta: f64) -> Vec<Effect> {
        self.handle(Message::Skip(delta))
    }

    /// Sets the volume, clamped to [0, 1]. Zero mutes, anything else unmutes.
    pub fn set_volume_level(&mut self, level: f32) -> Vec<Effect> {
        self.handle(Message::SetVolume(level))
    }

    pub fn toggle_mute(&mut self) -> Vec<Effect> {
        self.handle(Message::ToggleMute)
    }

    /// Applies a preset rate and closes the settings panel. Other values are ignored.
    pub fn change_rate(&mut self, rate: f64) -> Vec<Effect> {
        self.handle(Message::ChangeRate(rate))
    }

    /// Recomputes the buffered fraction from the resource.
    pub fn on_progress(&mut self) -> Vec<Effect> {
        self.handle(Message::Media(MediaEvent::Progress))
    }

    pub fn request_fullscreen(&mut self) -> Vec<Effect> {
        self.handle(Message::RequestFullscreen)
    }

    pub fn exit_fullscreen(&mut self) -> Vec<Effect> {
        self.handle(Message::ExitFullscreen)
    }

    pub fn toggle_fullscreen(&mut self) -> Vec<Effect> {
        self.handle(Message::ToggleFullscreen)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    /// Identifier of the mounted session.
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    #[must_use]
    pub fn media_info(&self) -> Option<&MediaInfo> {
        self.session.as_ref().map(|s| &s.info)
    }

    /// Confirmed playback state; `Idle` when nothing is mounted.
    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.session.as_ref().map_or(PlaybackState::Idle, |s| s.playback)
    }

    #[must_use]
    pub fn buffer_state(&self) -> BufferState {
        self.session.as_ref().map_or(BufferState::Ready, |s| s.buffer)
    }

    /// Returns true while the buffering indicator should show.
    #[must_use]
    pub fn is_buffering(&self) -> bool {
        self.buffer_state().is_buffering()
    }

    /// Returns true until metadata has loaded.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.playback_state().is_idle()
    }

    /// Last confirmed position in seconds.
    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |s| s.current_time)
    }

    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.session.as_ref().and_then(|s| s.duration)
    }

    /// Played fraction in [0, 1]; zero while the duration is unknown.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        fraction_of(self.current_time(), self.duration())
    }

    /// Buffered fraction in [0, 1].
    #[must_use]
    pub fn buffered_fraction(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |s| s.buffered.fraction())
    }

    /// Position formatted as `m:ss`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format_time(self.current_time())
    }

    /// Duration formatted as `m:ss`, `0:00` while unknown.
    #[must_use]
    pub fn duration_label(&self) -> String {
        format_optional_time(self.duration())
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.session.as_ref().map_or_else(Volume::default, |s| s.volume)
    }

    /// Raw muted flag.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.muted)
    }

    /// Whether the mute icon should show: muted or volume at zero.
    #[must_use]
    pub fn is_effectively_muted(&self) -> bool {
        self.is_muted() || self.volume().is_silent()
    }

    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.session.as_ref().map_or_else(PlaybackRate::default, |s| s.rate)
    }

    #[must_use]
    pub fn loop_enabled(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.loop_enabled)
    }

    /// Whether the overlay is shown. Always true with the settings panel open.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.controls_visible || s.settings_open)
    }

    #[must_use]
    pub fn settings_open(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.settings_open)
    }

    /// Returns true while an auto-hide countdown is armed.
    #[must_use]
    pub fn hide_pending(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.hide_timer.is_pending())
    }

    /// Confirmed fullscreen state.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Letterboxed frame rectangle inside the container.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.session.as_ref().map_or_else(Rect::default, |s| s.viewport)
    }
}
