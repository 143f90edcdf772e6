// SPDX-License-Identifier: MPL-2.0
//! Saving the session's playback preferences back to `settings.toml`.

use crate::application::port::MediaResource;
use crate::config::{self, Config};
use crate::error::Result;
use crate::video_player::controller::PlaybackController;
use std::path::PathBuf;

/// Copies volume, mute, rate and loop from the mounted session into `config`.
///
/// Leaves `config` untouched when nothing is mounted, so an unmounted
/// controller never overwrites saved values with defaults.
pub fn apply_preferences<R: MediaResource>(config: &mut Config, controller: &PlaybackController<R>) {
    if !controller.is_mounted() {
        return;
    }
    config.video.volume = Some(controller.volume().value());
    config.video.muted = Some(controller.is_muted());
    config.video.playback_rate = Some(controller.rate().value());
    config.video.loop_enabled = Some(controller.loop_enabled());
}

/// Writes the current preferences to `settings.toml` under `config_dir`.
pub fn persist_preferences<R: MediaResource>(
    config: &mut Config,
    controller: &PlaybackController<R>,
    config_dir: Option<PathBuf>,
) -> Result<()> {
    apply_preferences(config, controller);
    config::save_with_override(config, config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlsConfig;
    use crate::domain::video::MediaInfo;
    use crate::video_player::controller::{ControllerSettings, Message};
    use crate::video_player::keyboard::KeyDispatcher;
    use crate::video_player::simulated::{simulated, SimulatedResource};
    use tempfile::tempdir;

    fn mounted(dispatcher: &KeyDispatcher) -> PlaybackController<SimulatedResource> {
        let (resource, _driver) = simulated(30.0, (640, 360));
        let mut controller = PlaybackController::new();
        controller.mount(
            MediaInfo::new("sim://clip", "Clip"),
            resource,
            dispatcher,
            ControllerSettings::default(),
        );
        controller
    }

    #[test]
    fn preferences_are_written_to_settings_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let dispatcher = KeyDispatcher::new();
        let mut controller = mounted(&dispatcher);
        controller.handle(Message::SetVolume(0.3));
        controller.handle(Message::ToggleLoop);

        let mut config = Config::default();
        persist_preferences(&mut config, &controller, Some(dir.path().to_path_buf()))
            .expect("save should succeed");

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.video.volume, Some(0.3));
        assert_eq!(saved.video.loop_enabled, Some(true));
        assert_eq!(saved.video.muted, Some(false));
        assert_eq!(saved.video.playback_rate, Some(1.0));
    }

    #[test]
    fn unrelated_sections_survive_the_save() {
        let dispatcher = KeyDispatcher::new();
        let controller = mounted(&dispatcher);
        let mut config = Config::default();
        config.controls = ControlsConfig {
            hide_delay_ms: Some(5_000),
        };

        apply_preferences(&mut config, &controller);
        assert_eq!(config.controls.hide_delay_ms, Some(5_000));
    }

    #[test]
    fn unmounted_controller_keeps_saved_values() {
        let controller: PlaybackController<SimulatedResource> = PlaybackController::new();
        let mut config = Config::default();
        config.video.volume = Some(0.25);

        apply_preferences(&mut config, &controller);
        assert_eq!(config.video.volume, Some(0.25));
    }
}
