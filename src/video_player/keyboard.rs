// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the player.
//!
//! Two pieces live here:
//!
//! - [`route`] maps a [`PhysicalKey`] to a [`KeyCommand`]. The table is fixed
//!   and pure.
//! - [`KeyDispatcher`] is the single top-level key sink. A mounted player
//!   acquires a [`KeyboardLease`] and only the most recently acquired live
//!   lease receives keys. Dropping the lease unregisters it, so a torn-down
//!   player can never be reached by a late key press.

use crate::domain::video::newtypes::volume_bounds;
use iced::keyboard;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Seconds skipped by the arrow keys.
pub const SKIP_STEP_SECS: f64 = 10.0;

/// Volume change per arrow key press.
pub const VOLUME_STEP: f32 = volume_bounds::STEP;

// =============================================================================
// Routing
// =============================================================================

/// Keys the router distinguishes. Everything else collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalKey {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Character(char),
    Other,
}

impl From<&keyboard::Key> for PhysicalKey {
    fn from(key: &keyboard::Key) -> Self {
        use keyboard::key::Named;

        match key {
            keyboard::Key::Named(Named::Space) => Self::Space,
            keyboard::Key::Named(Named::ArrowLeft) => Self::ArrowLeft,
            keyboard::Key::Named(Named::ArrowRight) => Self::ArrowRight,
            keyboard::Key::Named(Named::ArrowUp) => Self::ArrowUp,
            keyboard::Key::Named(Named::ArrowDown) => Self::ArrowDown,
            keyboard::Key::Character(c) => {
                let mut chars = c.as_str().chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Character(ch),
                    _ => Self::Other,
                }
            }
            _ => Self::Other,
        }
    }
}

/// Player action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyCommand {
    TogglePlayPause,
    /// Relative seek in seconds.
    Skip(f64),
    VolumeUp,
    VolumeDown,
    ToggleFullscreen,
    ToggleMute,
}

/// Maps a key to its command. Letters match regardless of case.
///
/// # Examples
///
/// ```
/// use watch_player::video_player::keyboard::{route, KeyCommand, PhysicalKey};
///
/// assert_eq!(route(PhysicalKey::Character('F')), Some(KeyCommand::ToggleFullscreen));
/// assert_eq!(route(PhysicalKey::Character('x')), None);
/// ```
#[must_use]
pub fn route(key: PhysicalKey) -> Option<KeyCommand> {
    match key {
        PhysicalKey::Space => Some(KeyCommand::TogglePlayPause),
        PhysicalKey::ArrowLeft => Some(KeyCommand::Skip(-SKIP_STEP_SECS)),
        PhysicalKey::ArrowRight => Some(KeyCommand::Skip(SKIP_STEP_SECS)),
        PhysicalKey::ArrowUp => Some(KeyCommand::VolumeUp),
        PhysicalKey::ArrowDown => Some(KeyCommand::VolumeDown),
        PhysicalKey::Character(c) => match c.to_ascii_lowercase() {
            'f' => Some(KeyCommand::ToggleFullscreen),
            'm' => Some(KeyCommand::ToggleMute),
            _ => None,
        },
        PhysicalKey::Other => None,
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Identifies one mounted player session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_session: u64,
    /// Live registrations, most recent last.
    leases: Vec<SessionId>,
}

/// Top-level key sink shared between the host and every player it mounts.
///
/// Cloning is cheap; all clones share one registration table.
#[derive(Debug, Clone, Default)]
pub struct KeyDispatcher {
    registry: Arc<Mutex<Registry>>,
}

impl KeyDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the table half-updated,
    // so a poisoned mutex is still safe to use.
    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocates a fresh session identifier.
    pub fn new_session(&self) -> SessionId {
        let mut registry = self.registry();
        registry.next_session = registry.next_session.wrapping_add(1);
        SessionId(registry.next_session)
    }

    /// Registers `session` as the current key receiver.
    ///
    /// The registration lasts as long as the returned lease.
    #[must_use = "dropping the lease releases the keyboard immediately"]
    pub fn acquire(&self, session: SessionId) -> KeyboardLease {
        let mut registry = self.registry();
        registry.leases.retain(|&s| s != session);
        registry.leases.push(session);
        log::debug!("keyboard: session {} acquired", session.value());
        KeyboardLease {
            session,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Session currently receiving keys, if any.
    #[must_use]
    pub fn active_session(&self) -> Option<SessionId> {
        self.registry().leases.last().copied()
    }

    /// Returns true if `session` is the current key receiver.
    #[must_use]
    pub fn is_active(&self, session: SessionId) -> bool {
        self.active_session() == Some(session)
    }

    /// Resolves a key press to its receiving session and command.
    ///
    /// Returns `None` when nobody holds a lease or the key is unbound.
    #[must_use]
    pub fn dispatch(&self, key: PhysicalKey) -> Option<(SessionId, KeyCommand)> {
        let session = self.active_session()?;
        route(key).map(|command| (session, command))
    }
}

/// Keeps a session registered with the [`KeyDispatcher`] until dropped.
#[derive(Debug)]
pub struct KeyboardLease {
    session: SessionId,
    registry: Arc<Mutex<Registry>>,
}

impl KeyboardLease {
    /// Returns true while no newer lease has superseded this one.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.leases.last() == Some(&self.session)
    }
}

impl Drop for KeyboardLease {
    fn drop(&mut self) {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.leases.retain(|&s| s != self.session);
        log::debug!("keyboard: session {} released", self.session.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_covers_the_fixed_table() {
        assert_eq!(route(PhysicalKey::Space), Some(KeyCommand::TogglePlayPause));
        assert_eq!(route(PhysicalKey::ArrowLeft), Some(KeyCommand::Skip(-10.0)));
        assert_eq!(route(PhysicalKey::ArrowRight), Some(KeyCommand::Skip(10.0)));
        assert_eq!(route(PhysicalKey::ArrowUp), Some(KeyCommand::VolumeUp));
        assert_eq!(route(PhysicalKey::ArrowDown), Some(KeyCommand::VolumeDown));
        assert_eq!(route(PhysicalKey::Character('f')), Some(KeyCommand::ToggleFullscreen));
        assert_eq!(route(PhysicalKey::Character('m')), Some(KeyCommand::ToggleMute));
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(route(PhysicalKey::Character('F')), Some(KeyCommand::ToggleFullscreen));
        assert_eq!(route(PhysicalKey::Character('M')), Some(KeyCommand::ToggleMute));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(route(PhysicalKey::Character('k')), None);
        assert_eq!(route(PhysicalKey::Character(' ')), None);
        assert_eq!(route(PhysicalKey::Other), None);
    }

    #[test]
    fn iced_keys_convert() {
        use keyboard::key::Named;

        assert_eq!(
            PhysicalKey::from(&keyboard::Key::Named(Named::Space)),
            PhysicalKey::Space
        );
        assert_eq!(
            PhysicalKey::from(&keyboard::Key::Named(Named::ArrowUp)),
            PhysicalKey::ArrowUp
        );
        assert_eq!(
            PhysicalKey::from(&keyboard::Key::Character("m".into())),
            PhysicalKey::Character('m')
        );
        assert_eq!(
            PhysicalKey::from(&keyboard::Key::Named(Named::Escape)),
            PhysicalKey::Other
        );
    }

    #[test]
    fn no_lease_means_no_dispatch() {
        let dispatcher = KeyDispatcher::new();
        assert!(dispatcher.dispatch(PhysicalKey::Space).is_none());
    }

    #[test]
    fn lease_receives_keys_until_dropped() {
        let dispatcher = KeyDispatcher::new();
        let session = dispatcher.new_session();
        let lease = dispatcher.acquire(session);

        assert_eq!(
            dispatcher.dispatch(PhysicalKey::Space),
            Some((session, KeyCommand::TogglePlayPause))
        );

        drop(lease);
        assert!(dispatcher.dispatch(PhysicalKey::Space).is_none());
        assert!(!dispatcher.is_active(session));
    }

    #[test]
    fn most_recent_lease_wins() {
        let dispatcher = KeyDispatcher::new();
        let first = dispatcher.new_session();
        let second = dispatcher.new_session();
        let first_lease = dispatcher.acquire(first);
        let second_lease = dispatcher.acquire(second);

        assert!(dispatcher.is_active(second));

        drop(second_lease);
        assert!(dispatcher.is_active(first));

        drop(first_lease);
        assert_eq!(dispatcher.active_session(), None);
    }

    #[test]
    fn dropping_an_older_lease_keeps_newer_active() {
        let dispatcher = KeyDispatcher::new();
        let first = dispatcher.new_session();
        let second = dispatcher.new_session();
        let first_lease = dispatcher.acquire(first);
        let _second_lease = dispatcher.acquire(second);

        drop(first_lease);
        assert!(dispatcher.is_active(second));
    }

    #[test]
    fn sessions_are_unique() {
        let dispatcher = KeyDispatcher::new();
        let a = dispatcher.new_session();
        let b = dispatcher.clone().new_session();
        assert_ne!(a, b);
    }
}
