// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timer for the controls overlay.
//!
//! The timer itself does not sleep. It hands out generation tokens; the host
//! schedules a wake-up for each token and reports back with it. Only the token
//! from the most recent [`HideTimer::reset`] is honoured, so re-arming or
//! cancelling simply makes every in-flight wake-up stale.

/// Identifies one armed countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HideToken(u64);

impl HideToken {
    /// Generation number of this token.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Cancellable single-shot countdown, debounced by re-arming.
#[derive(Debug, Default)]
pub struct HideTimer {
    generation: u64,
    pending: Option<HideToken>,
}

impl HideTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts after `generation` so tokens handed out by an earlier timer
    /// can never match this one.
    #[must_use]
    pub fn continuing(generation: u64) -> Self {
        Self {
            generation,
            pending: None,
        }
    }

    /// Generation of the most recently issued token.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Arms the timer, invalidating any earlier token.
    pub fn reset(&mut self) -> HideToken {
        self.generation = self.generation.wrapping_add(1);
        let token = HideToken(self.generation);
        self.pending = Some(token);
        token
    }

    /// Disarms the timer. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consumes `token` if it is the pending one.
    ///
    /// Returns `false` for stale or cancelled tokens; the timer is left as is.
    pub fn fire(&mut self, token: HideToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Returns true while a countdown is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_timer_is_idle() {
        assert!(!HideTimer::new().is_pending());
    }

    #[test]
    fn reset_then_fire_is_accepted_once() {
        let mut timer = HideTimer::new();
        let token = timer.reset();
        assert!(timer.is_pending());
        assert!(timer.fire(token));
        assert!(!timer.is_pending());
        assert!(!timer.fire(token));
    }

    #[test]
    fn reset_invalidates_older_tokens() {
        let mut timer = HideTimer::new();
        let first = timer.reset();
        let second = timer.reset();
        assert_ne!(first, second);
        assert!(!timer.fire(first));
        assert!(timer.is_pending());
        assert!(timer.fire(second));
    }

    #[test]
    fn cancel_invalidates_pending_token() {
        let mut timer = HideTimer::new();
        let token = timer.reset();
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.fire(token));
    }

    #[test]
    fn cancel_when_idle_is_harmless() {
        let mut timer = HideTimer::new();
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_pending());
    }

    #[test]
    fn continued_timer_rejects_tokens_of_its_predecessor() {
        let mut first = HideTimer::new();
        let old = first.reset();

        let mut second = HideTimer::continuing(first.generation());
        assert!(!second.is_pending());
        let new = second.reset();
        assert_ne!(new, old);
        assert!(!second.fire(old));
        assert!(second.fire(new));
    }

    #[test]
    fn tokens_are_not_reused_after_cancel() {
        let mut timer = HideTimer::new();
        let old = timer.reset();
        timer.cancel();
        let new = timer.reset();
        assert!(new.generation() > old.generation());
        assert!(!timer.fire(old));
    }
}
