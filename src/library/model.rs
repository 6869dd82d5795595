use serde::Deserialize;

/// Identifier of a track in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub String);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<&str> for TrackId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A playable song record. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    #[serde(alias = "duration")]
    pub duration_secs: u32,
    #[serde(default, alias = "album_art")]
    pub album_art_url: Option<String>,
}

impl Track {
    pub fn new(id: &str, title: &str, artist: &str, duration_secs: u32) -> Self {
        Self {
            id: TrackId::from(id),
            title: title.to_string(),
            artist: artist.to_string(),
            duration_secs,
            album_art_url: None,
        }
    }
}
