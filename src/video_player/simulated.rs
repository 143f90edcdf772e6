// SPDX-License-Identifier: MPL-2.0
//! In-process media resource that behaves like a browser video element.
//!
//! [`simulated`] returns two halves sharing one state:
//!
//! - [`SimulatedResource`] implements [`MediaResource`] and is handed to the
//!   playback engine.
//! - [`MediaDriver`] stays with the host. It plays the part of the platform:
//!   loading metadata, advancing the clock, downloading data and queueing the
//!   events the controller must be fed.
//!
//! Commands never change state silently. Every observable change queues the
//! same event a real element would fire, and commands that change nothing fire
//! nothing.

use crate::application::port::{MediaEvent, MediaResource, TimeRange};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Seconds of media fetched per wall-clock second by default.
pub const DEFAULT_DOWNLOAD_RATE: f64 = 4.0;

#[derive(Debug)]
struct Shared {
    /// Duration revealed by `load_metadata`.
    source_duration: f64,
    source_size: (u32, u32),
    metadata_loaded: bool,
    time: f64,
    paused: bool,
    ended: bool,
    looping: bool,
    volume: f32,
    muted: bool,
    rate: f64,
    buffer_start: f64,
    buffer_end: f64,
    waiting: bool,
    download_rate: f64,
    play_blocked: bool,
    events: VecDeque<MediaEvent>,
}

impl Shared {
    fn new(duration: f64, natural_size: (u32, u32)) -> Self {
        Self {
            source_duration: duration,
            source_size: natural_size,
            metadata_loaded: false,
            time: 0.0,
            paused: true,
            ended: false,
            looping: false,
            volume: 1.0,
            muted: false,
            rate: 1.0,
            buffer_start: 0.0,
            buffer_end: 0.0,
            waiting: false,
            download_rate: DEFAULT_DOWNLOAD_RATE,
            play_blocked: false,
            events: VecDeque::new(),
        }
    }

    fn emit(&mut self, event: MediaEvent) {
        self.events.push_back(event);
    }

    fn duration(&self) -> f64 {
        if self.metadata_loaded {
            self.source_duration
        } else {
            f64::NAN
        }
    }

    fn seek(&mut self, secs: f64) {
        let duration = self.source_duration;
        self.time = secs.clamp(0.0, duration);
        if self.time < duration {
            self.ended = false;
        }
        // Jumping outside the buffered span discards it.
        if self.time < self.buffer_start || self.time > self.buffer_end {
            self.buffer_start = self.time;
            self.buffer_end = self.time;
        }
        self.emit(MediaEvent::Seeking);
        self.emit(MediaEvent::Seeked);
        self.emit(MediaEvent::TimeUpdate);
    }

    fn download(&mut self, secs: f64) {
        if self.download_rate <= 0.0 || self.buffer_end >= self.source_duration {
            return;
        }
        let end = (self.buffer_end + self.download_rate * secs).min(self.source_duration);
        if end > self.buffer_end {
            self.buffer_end = end;
            self.emit(MediaEvent::Progress);
        }
    }

    fn play_forward(&mut self, secs: f64) {
        let duration = self.source_duration;
        let fully_buffered = self.buffer_end >= duration;
        if self.time >= self.buffer_end && !fully_buffered {
            if !self.waiting {
                self.waiting = true;
                self.emit(MediaEvent::Waiting);
            }
            return;
        }
        if self.waiting {
            self.waiting = false;
            self.emit(MediaEvent::CanPlay);
        }

        self.time = (self.time + secs * self.rate).min(self.buffer_end).min(duration);
        self.emit(MediaEvent::TimeUpdate);

        if self.time >= duration {
            if self.looping {
                self.seek(0.0);
            } else {
                self.ended = true;
                self.paused = true;
                self.emit(MediaEvent::Pause);
                self.emit(MediaEvent::Ended);
            }
        }
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Creates a resource for media of `duration` seconds and the given size.
#[must_use]
pub fn simulated(duration: f64, natural_size: (u32, u32)) -> (SimulatedResource, MediaDriver) {
    let shared = Arc::new(Mutex::new(Shared::new(duration, natural_size)));
    (
        SimulatedResource {
            shared: Arc::clone(&shared),
        },
        MediaDriver { shared },
    )
}

/// Engine-facing half.
#[derive(Debug)]
pub struct SimulatedResource {
    shared: Arc<Mutex<Shared>>,
}

impl MediaResource for SimulatedResource {
    fn play(&mut self) {
        let mut state = lock(&self.shared);
        if state.play_blocked {
            return;
        }
        if state.ended {
            state.seek(0.0);
        }
        if state.paused {
            state.paused = false;
            state.emit(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        let mut state = lock(&self.shared);
        if !state.paused {
            state.paused = true;
            state.emit(MediaEvent::Pause);
        }
    }

    fn set_current_time(&mut self, secs: f64) {
        let mut state = lock(&self.shared);
        if state.metadata_loaded && secs.is_finite() {
            state.seek(secs);
        }
    }

    fn set_volume(&mut self, volume: f32) {
        let mut state = lock(&self.shared);
        let volume = volume.clamp(0.0, 1.0);
        if (state.volume - volume).abs() > f32::EPSILON {
            state.volume = volume;
            state.emit(MediaEvent::VolumeChange);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        let mut state = lock(&self.shared);
        if state.muted != muted {
            state.muted = muted;
            state.emit(MediaEvent::VolumeChange);
        }
    }

    fn set_playback_rate(&mut self, rate: f64) {
        let mut state = lock(&self.shared);
        if rate.is_finite() && rate > 0.0 && (state.rate - rate).abs() > f64::EPSILON {
            state.rate = rate;
            state.emit(MediaEvent::RateChange);
        }
    }

    fn set_loop(&mut self, enabled: bool) {
        lock(&self.shared).looping = enabled;
    }

    fn current_time(&self) -> f64 {
        lock(&self.shared).time
    }

    fn duration(&self) -> f64 {
        lock(&self.shared).duration()
    }

    fn buffered(&self) -> Vec<TimeRange> {
        let state = lock(&self.shared);
        if state.metadata_loaded && state.buffer_end > state.buffer_start {
            vec![TimeRange::new(state.buffer_start, state.buffer_end)]
        } else {
            Vec::new()
        }
    }

    fn natural_size(&self) -> (u32, u32) {
        let state = lock(&self.shared);
        if state.metadata_loaded {
            state.source_size
        } else {
            (0, 0)
        }
    }

    fn volume(&self) -> f32 {
        lock(&self.shared).volume
    }

    fn muted(&self) -> bool {
        lock(&self.shared).muted
    }

    fn playback_rate(&self) -> f64 {
        lock(&self.shared).rate
    }
}

/// Host-facing half that plays the platform's role.
#[derive(Debug, Clone)]
pub struct MediaDriver {
    shared: Arc<Mutex<Shared>>,
}

impl MediaDriver {
    /// Reveals duration and natural size. Idempotent.
    pub fn load_metadata(&self) {
        let mut state = lock(&self.shared);
        if state.metadata_loaded {
            return;
        }
        state.metadata_loaded = true;
        state.emit(MediaEvent::LoadedMetadata);
    }

    /// Advances the platform clock by `elapsed`.
    ///
    /// Downloads first, then moves the playhead if playing. Does nothing
    /// before metadata is loaded.
    pub fn advance(&self, elapsed: Duration) {
        let mut state = lock(&self.shared);
        if !state.metadata_loaded {
            return;
        }
        let secs = elapsed.as_secs_f64();
        state.download(secs);
        if !state.paused && !state.ended {
            state.play_forward(secs);
        }
    }

    /// Changes how many media seconds are fetched per second. Zero stalls.
    pub fn set_download_rate(&self, media_secs_per_sec: f64) {
        lock(&self.shared).download_rate = media_secs_per_sec.max(0.0);
    }

    /// Makes `play()` requests silently fail, like an autoplay policy.
    pub fn set_play_blocked(&self, blocked: bool) {
        lock(&self.shared).play_blocked = blocked;
    }

    /// Takes every event queued since the last call, in emission order.
    pub fn drain_events(&self) -> Vec<MediaEvent> {
        lock(&self.shared).events.drain(..).collect()
    }

    /// Platform-side playhead, for assertions.
    #[must_use]
    pub fn current_time(&self) -> f64 {
        lock(&self.shared).time
    }

    /// Returns true while the platform is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        lock(&self.shared).paused
    }

    /// Returns true while loop mode is on.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        lock(&self.shared).looping
    }
}
