//! Startup catalog: the built-in sample data, or a TOML catalog file standing in
//! for a future catalog service.
//!
//! File format:
//!
//! ```toml
//! [[tracks]]
//! id = "1"
//! title = "Golden Sparrow"
//! artist = "G.V. Prakash, Dhanush"
//! duration = 240
//!
//! [[playlists]]
//! title = "Focus Flow"
//! tracks = ["1"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;

use super::model::{Track, TrackId};
use super::playlist::Playlist;
use super::registry::TrackRegistry;

/// Registry plus the playlists seeded alongside it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub registry: TrackRegistry,
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default)]
    playlists: Vec<Playlist>,
}

pub fn sample_tracks() -> Vec<Track> {
    vec![
        Track::new("1", "Golden Sparrow", "G.V. Prakash, Dhanush", 240),
        Track::new("2", "Thodu Vaanam", "Harris Jayaraj", 220),
    ]
}

fn sample_playlists(tracks: &[Track]) -> Vec<Playlist> {
    let ids: Vec<TrackId> = tracks.iter().map(|t| t.id.clone()).collect();
    vec![
        Playlist::new("Chill Vibes", ids.iter().take(3).cloned().collect()),
        Playlist::new("Workout Energy", ids.iter().skip(1).cloned().collect()),
        Playlist::new("Focus Flow", ids),
    ]
}

impl Catalog {
    /// The built-in sample catalog.
    pub fn sample() -> Self {
        let tracks = sample_tracks();
        let playlists = sample_playlists(&tracks);
        Self {
            registry: TrackRegistry::new(tracks),
            playlists,
        }
    }

    /// Parse a catalog from TOML text. Duplicate track ids are rejected.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;

        let mut registry = TrackRegistry::default();
        for track in file.tracks {
            registry.append(track)?;
        }

        for playlist in &file.playlists {
            for id in &playlist.track_ids {
                if registry.position(id).is_none() {
                    tracing::warn!(playlist = %playlist.title, "playlist references unknown track {id}");
                }
            }
        }

        Ok(Self {
            registry,
            playlists: file.playlists,
        })
    }
}

/// Read and parse the catalog file at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_toml(&text)
}
