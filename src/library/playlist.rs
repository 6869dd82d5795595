use serde::Deserialize;

use super::model::{Track, TrackId};
use super::registry::TrackRegistry;

/// A named, ordered selection of registry tracks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Playlist {
    pub title: String,
    #[serde(rename = "tracks", alias = "track_ids", default)]
    pub track_ids: Vec<TrackId>,
    #[serde(default, alias = "cover_image")]
    pub cover_image_url: Option<String>,
}

impl Playlist {
    pub fn new(title: &str, track_ids: Vec<TrackId>) -> Self {
        Self {
            title: title.to_string(),
            track_ids,
            cover_image_url: None,
        }
    }

    /// Tracks of this playlist that resolve in `registry`, in playlist order.
    pub fn tracks<'a>(&'a self, registry: &'a TrackRegistry) -> impl Iterator<Item = &'a Track> {
        self.track_ids.iter().filter_map(|id| registry.find(id).ok())
    }

    /// Sum of durations of the resolvable tracks. Unknown ids contribute nothing.
    pub fn total_duration_secs(&self, registry: &TrackRegistry) -> u32 {
        self.tracks(registry)
            .fold(0u32, |acc, t| acc.saturating_add(t.duration_secs))
    }

    /// The track "play all" starts from.
    pub fn first_track(&self) -> Option<&TrackId> {
        self.track_ids.first()
    }
}
