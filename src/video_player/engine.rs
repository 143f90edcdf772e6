// SPDX-License-Identifier: MPL-2.0
//! Playback engine adapter.
//!
//! [`PlaybackEngine`] is the only thing in the crate allowed to touch a
//! [`MediaResource`]. It normalises requests (clamping, rejecting non-finite
//! input) and exposes sanitised reads. It never reports success or failure:
//! every mutator is fire-and-forget and callers learn the outcome from the
//! resource's events.

use super::buffered;
use crate::application::port::MediaResource;
use crate::domain::video::{PlaybackRate, Volume};
use log::{debug, trace};

/// Thin facade over the live media resource.
#[derive(Debug)]
pub struct PlaybackEngine<R: MediaResource> {
    resource: R,
}

impl<R: MediaResource> PlaybackEngine<R> {
    /// Takes exclusive ownership of `resource`.
    pub fn new(resource: R) -> Self {
        Self { resource }
    }

    /// Requests playback to start or resume.
    pub fn play(&mut self) {
        trace!("engine: play requested");
        self.resource.play();
    }

    /// Requests playback to pause.
    pub fn pause(&mut self) {
        trace!("engine: pause requested");
        self.resource.pause();
    }

    /// Requests a seek, clamped to `[0, duration]`.
    ///
    /// Non-finite targets and seeks before the duration is known are dropped.
    pub fn seek_to(&mut self, secs: f64) {
        if !secs.is_finite() {
            debug!("engine: ignoring non-finite seek target {secs}");
            return;
        }
        let Some(duration) = self.duration() else {
            debug!("engine: ignoring seek to {secs:.2}s, duration unknown");
            return;
        };
        let target = secs.clamp(0.0, duration);
        trace!("engine: seek to {target:.2}s (requested {secs:.2}s)");
        self.resource.set_current_time(target);
    }

    /// Sets the output volume.
    pub fn set_volume(&mut self, volume: Volume) {
        self.resource.set_volume(volume.value());
    }

    /// Sets the muted flag.
    pub fn set_muted(&mut self, muted: bool) {
        self.resource.set_muted(muted);
    }

    /// Sets the playback rate.
    pub fn set_rate(&mut self, rate: PlaybackRate) {
        self.resource.set_playback_rate(rate.value());
    }

    /// Sets loop mode.
    pub fn set_loop(&mut self, enabled: bool) {
        self.resource.set_loop(enabled);
    }

    /// Current position in seconds, `0.0` if the resource reports garbage.
    #[must_use]
    pub fn current_time(&self) -> f64 {
        let time = self.resource.current_time();
        if time.is_finite() {
            time.max(0.0)
        } else {
            0.0
        }
    }

    /// Duration in seconds, `None` while unknown, zero or not finite.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        let duration = self.resource.duration();
        (duration.is_finite() && duration > 0.0).then_some(duration)
    }

    /// Furthest buffered end divided by duration, in [0, 1].
    #[must_use]
    pub fn buffered_fraction(&self) -> f64 {
        buffered::buffered_fraction(&self.resource.buffered(), self.resource.duration())
    }

    /// Intrinsic frame size in pixels.
    #[must_use]
    pub fn natural_size(&self) -> (u32, u32) {
        self.resource.natural_size()
    }

    /// Volume currently applied by the resource.
    #[must_use]
    pub fn volume(&self) -> Volume {
        Volume::new(self.resource.volume())
    }

    /// Muted flag currently applied by the resource.
    #[must_use]
    pub fn muted(&self) -> bool {
        self.resource.muted()
    }

    /// Rate currently applied by the resource, if it is one we support.
    #[must_use]
    pub fn rate(&self) -> Option<PlaybackRate> {
        PlaybackRate::from_value(self.resource.playback_rate())
    }
}
