// SPDX-License-Identifier: MPL-2.0
//! Integration tests driving the playback controller end to end through the
//! simulated media platform.

use approx::assert_abs_diff_eq;
use std::time::Duration;
use watch_player::application::port::MediaEvent;
use watch_player::domain::ui::Size;
use watch_player::domain::video::{MediaInfo, PlaybackState};
use watch_player::video_player::{
    simulated, ControllerSettings, Effect, HideToken, KeyDispatcher, MediaDriver, Message,
    PhysicalKey, PlaybackController, SimulatedResource,
};

struct Player {
    controller: PlaybackController<SimulatedResource>,
    driver: MediaDriver,
    dispatcher: KeyDispatcher,
    effects: Vec<Effect>,
}

impl Player {
    fn mount(duration: f64) -> Self {
        let (resource, driver) = simulated(duration, (1920, 1080));
        let dispatcher = KeyDispatcher::new();
        let mut controller = PlaybackController::new();
        let mut effects = controller.handle(Message::ContainerResized(Size::new(800.0, 800.0)));
        controller.mount(
            MediaInfo::new("sim://feature", "Feature"),
            resource,
            &dispatcher,
            ControllerSettings::default(),
        );
        effects.clear();
        Self {
            controller,
            driver,
            dispatcher,
            effects,
        }
    }

    fn send(&mut self, message: Message) {
        let effects = self.controller.handle(message);
        self.effects.extend(effects);
    }

    fn pump(&mut self) {
        for event in self.driver.drain_events() {
            self.send(Message::Media(event));
        }
    }

    fn advance(&mut self, secs: f64) {
        self.driver.advance(Duration::from_secs_f64(secs));
        self.pump();
    }

    fn last_hide_token(&self) -> Option<(HideToken, Duration)> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::ScheduleHide { token, delay } => Some((*token, *delay)),
            _ => None,
        })
    }
}

#[test]
fn mount_play_hide_then_arrow_right_reveals_and_skips() {
    let mut player = Player::mount(120.0);

    player.driver.load_metadata();
    player.pump();
    assert_eq!(player.controller.playback_state(), PlaybackState::Paused);
    assert_eq!(player.controller.duration(), Some(120.0));
    let viewport = player.controller.viewport();
    assert_abs_diff_eq!(viewport.width, 800.0, epsilon = 0.5);
    assert_abs_diff_eq!(viewport.height, 450.0, epsilon = 0.5);
    assert_abs_diff_eq!(viewport.y, 175.0, epsilon = 0.5);

    // Requesting play does not flip the state by itself.
    player.send(Message::TogglePlayPause);
    assert_eq!(player.controller.playback_state(), PlaybackState::Paused);
    player.pump();
    assert_eq!(player.controller.playback_state(), PlaybackState::Playing);

    let (token, delay) = player.last_hide_token().expect("hide should be scheduled");
    assert_eq!(delay, Duration::from_millis(3_000));

    player.advance(1.0);
    player.send(Message::HideTimerElapsed(token));
    assert!(!player.controller.controls_visible());

    player.send(Message::Key(PhysicalKey::ArrowRight));
    assert!(player.controller.controls_visible());
    let (next, _) = player.last_hide_token().expect("hide should be re-armed");
    assert_ne!(next, token);

    player.pump();
    assert_abs_diff_eq!(player.controller.current_time(), 11.0, epsilon = 1e-6);
}

#[test]
fn nothing_mutates_after_unmount() {
    let mut player = Player::mount(60.0);
    player.driver.load_metadata();
    player.pump();
    player.send(Message::TogglePlayPause);
    player.pump();
    let (token, _) = player.last_hide_token().expect("hide should be scheduled");

    player.controller.unmount();
    assert!(!player.controller.is_mounted());
    assert_eq!(player.dispatcher.active_session(), None);

    player.effects.clear();
    player.send(Message::HideTimerElapsed(token));
    player.send(Message::Key(PhysicalKey::Space));
    player.send(Message::Key(PhysicalKey::Character('m')));
    player.send(Message::Media(MediaEvent::Pause));
    player.send(Message::PointerMoved);

    assert!(player.effects.is_empty());
    assert!(!player.driver.is_paused(), "space must not reach the old resource");
    assert_eq!(player.controller.playback_state(), PlaybackState::Idle);
    assert!(!player.controller.is_muted());
}

#[test]
fn newer_session_takes_the_keyboard() {
    let mut first = Player::mount(60.0);
    let (resource, driver) = simulated(30.0, (640, 480));
    let mut second = PlaybackController::new();
    second.mount(
        MediaInfo::new("sim://second", "Second"),
        resource,
        &first.dispatcher,
        ControllerSettings::default(),
    );
    driver.load_metadata();
    for event in driver.drain_events() {
        second.handle(Message::Media(event));
    }

    first.send(Message::Key(PhysicalKey::Character('m')));
    assert!(!first.controller.is_muted(), "first session lost the keyboard");

    second.handle(Message::Key(PhysicalKey::Character('m')));
    assert!(second.is_muted());

    drop(second);
    first.send(Message::Key(PhysicalKey::Character('m')));
    assert!(first.controller.is_muted(), "keyboard returns after the newer session goes");
}

#[test]
fn fullscreen_follows_confirmation_only() {
    let mut player = Player::mount(60.0);
    player.send(Message::Key(PhysicalKey::Character('f')));
    assert!(player.effects.contains(&Effect::RequestFullscreen));
    assert!(!player.controller.is_fullscreen());

    player.effects.clear();
    player.send(Message::FullscreenRejected);
    assert!(!player.controller.is_fullscreen());
    assert!(player.effects.is_empty());

    player.send(Message::FullscreenChanged(true));
    assert!(player.controller.is_fullscreen());
    assert_eq!(player.effects, vec![Effect::FullscreenSignal(true)]);

    player.effects.clear();
    player.send(Message::Key(PhysicalKey::Character('F')));
    assert_eq!(player.effects.first(), Some(&Effect::ExitFullscreen));
}

#[test]
fn looping_media_restarts_instead_of_ending() {
    let mut player = Player::mount(5.0);
    player.driver.set_download_rate(1000.0);
    player.driver.load_metadata();
    player.pump();
    player.send(Message::ToggleLoop);
    player.send(Message::TogglePlayPause);
    player.pump();

    player.advance(5.0);
    assert_eq!(player.controller.playback_state(), PlaybackState::Playing);
    assert!(player.controller.current_time() < 1.0);
}

#[test]
fn media_ends_and_replays_from_start() {
    let mut player = Player::mount(5.0);
    player.driver.set_download_rate(1000.0);
    player.driver.load_metadata();
    player.pump();
    player.send(Message::TogglePlayPause);
    player.pump();

    player.advance(6.0);
    assert_eq!(player.controller.playback_state(), PlaybackState::Ended);
    assert!(player.controller.controls_visible());

    player.send(Message::TogglePlayPause);
    player.pump();
    assert_eq!(player.controller.playback_state(), PlaybackState::Playing);
    assert_abs_diff_eq!(player.controller.current_time(), 0.0, epsilon = 1e-6);
}

#[test]
fn stalled_download_shows_buffering_and_keeps_controls() {
    let mut player = Player::mount(60.0);
    player.driver.set_download_rate(0.0);
    player.driver.load_metadata();
    player.pump();
    player.send(Message::TogglePlayPause);
    player.pump();

    player.advance(0.5);
    assert!(player.controller.is_buffering());
    assert!(!player.controller.hide_pending());

    player.driver.set_download_rate(1000.0);
    player.advance(0.5);
    assert!(!player.controller.is_buffering());
    assert!(player.controller.hide_pending());
}
