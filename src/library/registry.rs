//! The ordered, append-only collection of playable tracks.
//!
//! Lookups are linear scans: the catalog is small sample data and no index
//! is maintained.

use crate::error::PlaybackError;

use super::model::{Track, TrackId};

#[derive(Debug, Clone, Default)]
pub struct TrackRegistry {
    tracks: Vec<Track>,
}

impl TrackRegistry {
    /// Build a registry from `tracks`, keeping the first occurrence of any duplicated id.
    pub fn new(tracks: Vec<Track>) -> Self {
        let mut registry = Self::default();
        for track in tracks {
            if let Err(e) = registry.append(track) {
                tracing::warn!("skipping seed track: {e}");
            }
        }
        registry
    }

    /// Tracks in insertion order.
    pub fn list(&self) -> &[Track] {
        &self.tracks
    }

    pub fn find(&self, id: &TrackId) -> Result<&Track, PlaybackError> {
        self.tracks
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| PlaybackError::NotFound(id.clone()))
    }

    pub fn position(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Append `track` at the end of the registry. Ids must stay unique.
    pub fn append(&mut self, track: Track) -> Result<(), PlaybackError> {
        if self.position(&track.id).is_some() {
            return Err(PlaybackError::DuplicateTrack(track.id));
        }
        self.tracks.push(track);
        Ok(())
    }
}
