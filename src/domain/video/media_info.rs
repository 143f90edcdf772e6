// SPDX-License-Identifier: MPL-2.0
//! Descriptive data handed to the player by the surrounding page.
//!
//! The catalog side decides whether it is showing a standalone title or an
//! episode; the player only uses that to build its heading.

/// What kind of content is being watched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    /// A standalone asset (film, clip, recorded stream).
    #[default]
    Single,
    /// One episode of a series.
    Episode { season: u32, episode: u32 },
}

/// Source locator plus display metadata for one watch session.
///
/// # Example
///
/// ```
/// use watch_player::domain::video::{ContentKind, MediaInfo};
///
/// let info = MediaInfo::new("https://cdn.example/ep3.mp4", "Pilot")
///     .with_kind(ContentKind::Episode { season: 1, episode: 3 });
/// assert_eq!(info.heading(), "Pilot · S1E3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfo {
    /// URI of the media resource.
    pub source: String,
    /// Title shown in the overlay header.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Single asset or episode.
    pub kind: ContentKind,
}

impl MediaInfo {
    /// Creates metadata for a single asset without description.
    #[must_use]
    pub fn new(source: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            description: None,
            kind: ContentKind::Single,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the content kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the overlay heading: the title, suffixed with the episode code
    /// for episodic content.
    #[must_use]
    pub fn heading(&self) -> String {
        match self.kind {
            ContentKind::Single => self.title.clone(),
            ContentKind::Episode { season, episode } => {
                format!("{} · S{}E{}", self.title, season, episode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_heading_is_title() {
        let info = MediaInfo::new("file:///a.mp4", "Documentary");
        assert_eq!(info.heading(), "Documentary");
        assert!(info.description.is_none());
    }

    #[test]
    fn episode_heading_has_code() {
        let info = MediaInfo::new("file:///b.mp4", "Finale")
            .with_description("Season closer")
            .with_kind(ContentKind::Episode {
                season: 2,
                episode: 10,
            });
        assert_eq!(info.heading(), "Finale · S2E10");
        assert_eq!(info.description.as_deref(), Some("Season closer"));
    }
}
