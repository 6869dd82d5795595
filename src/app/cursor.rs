//! The playback cursor: which track is current and whether it is playing.
//!
//! Only the cursor is stored. Per-row "is this the one playing" state is
//! derived by comparing ids, so at most one track can ever be current.

use crate::error::PlaybackError;
use crate::library::{TrackId, TrackRegistry};

/// The two states of the playback machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackCursor {
    current: Option<TrackId>,
    state: PlaybackState,
}

impl PlaybackCursor {
    /// Paused on the first registry track, or on nothing if the registry is empty.
    pub fn new(registry: &TrackRegistry) -> Self {
        Self {
            current: registry.get(0).map(|t| t.id.clone()),
            state: PlaybackState::Paused,
        }
    }

    pub fn current(&self) -> Option<&TrackId> {
        self.current.as_ref()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// True when `id` is the current track and playback is active.
    pub fn is_playing_track(&self, id: &TrackId) -> bool {
        self.is_playing() && self.is_current(id)
    }

    pub fn is_current(&self, id: &TrackId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Select `id` and start playing it. Re-playing the current track restarts it.
    pub fn play(&mut self, registry: &TrackRegistry, id: &TrackId) -> Result<(), PlaybackError> {
        registry.find(id)?;
        self.current = Some(id.clone());
        self.state = PlaybackState::Playing;
        Ok(())
    }

    /// Flip between playing and paused on the current track.
    pub fn toggle_play_pause(&mut self, registry: &TrackRegistry) -> Result<(), PlaybackError> {
        if registry.is_empty() {
            return Err(PlaybackError::EmptyRegistry);
        }
        if self.current.is_none() {
            return Err(PlaybackError::NoCurrentTrack);
        }
        self.state = match self.state {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
        };
        Ok(())
    }

    /// Play the track after the current one, wrapping at the end.
    pub fn next(&mut self, registry: &TrackRegistry) -> Result<(), PlaybackError> {
        let len = registry.len();
        let target = match self.current_index(registry)? {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.play_index(registry, target)
    }

    /// Play the track before the current one, wrapping at the start.
    pub fn previous(&mut self, registry: &TrackRegistry) -> Result<(), PlaybackError> {
        let len = registry.len();
        let target = match self.current_index(registry)? {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.play_index(registry, target)
    }

    // A current id that is no longer in the registry navigates as if nothing were selected.
    fn current_index(&self, registry: &TrackRegistry) -> Result<Option<usize>, PlaybackError> {
        if registry.is_empty() {
            return Err(PlaybackError::EmptyRegistry);
        }
        Ok(self.current.as_ref().and_then(|id| registry.position(id)))
    }

    fn play_index(&mut self, registry: &TrackRegistry, index: usize) -> Result<(), PlaybackError> {
        let id = registry
            .get(index)
            .map(|t| t.id.clone())
            .ok_or(PlaybackError::EmptyRegistry)?;
        self.play(registry, &id)
    }
}
