// SPDX-License-Identifier: MPL-2.0
//! Playback and buffering state enums.
//!
//! The two enums are orthogonal: `PlaybackState` mirrors the resource's
//! play/pause/ended signals, `BufferState` mirrors its waiting/can-play
//! signals. Keeping them separate (instead of a pile of booleans) makes the
//! legal combinations explicit.

/// Where the media resource is in its play/pause lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Metadata has not loaded yet.
    #[default]
    Idle,
    /// Resource confirmed it is paused.
    Paused,
    /// Resource confirmed it is playing.
    Playing,
    /// Resource reported completion. Left only by a confirmed seek.
    Ended,
}

impl PlaybackState {
    /// Returns true if the resource is playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the resource is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true before metadata has loaded.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true once playback reached the end.
    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Returns true once metadata is known (any state but `Idle`).
    #[must_use]
    pub fn is_ready(self) -> bool {
        !self.is_idle()
    }
}

/// Whether the resource has enough data to keep playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferState {
    /// Enough data is available.
    #[default]
    Ready,
    /// The resource is waiting for data.
    Buffering,
}

impl BufferState {
    /// Returns true while the resource waits for data.
    #[must_use]
    pub fn is_buffering(self) -> bool {
        matches!(self, Self::Buffering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_ready() {
        assert_eq!(PlaybackState::default(), PlaybackState::Idle);
        assert_eq!(BufferState::default(), BufferState::Ready);
    }

    #[test]
    fn state_checks() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Paused.is_playing());

        assert!(PlaybackState::Paused.is_paused());
        assert!(PlaybackState::Idle.is_idle());
        assert!(PlaybackState::Ended.is_ended());

        assert!(!PlaybackState::Idle.is_ready());
        assert!(PlaybackState::Ended.is_ready());
    }

    #[test]
    fn buffering_check() {
        assert!(BufferState::Buffering.is_buffering());
        assert!(!BufferState::Ready.is_buffering());
    }
}
