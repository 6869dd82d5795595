//! Application model: the single owned session state.
//!
//! `App` holds the registry, playlists, playback cursor, liked sets, search
//! query and player bar. Views read it through accessors and change it only
//! through [`App::dispatch`].

use crate::error::PlaybackError;
use crate::library::{Catalog, Playlist, Track, TrackId, TrackRegistry};

use super::command::Command;
use super::cursor::{PlaybackCursor, PlaybackState};
use super::filter::filter;
use super::liked::LikedSet;
use super::menu::MenuContext;
use super::player_bar::PlayerBar;

/// Which collection the track list is showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Library,
    Liked,
    Playlist(usize),
}

impl View {
    pub fn menu_context(self) -> MenuContext {
        match self {
            View::Library => MenuContext::Library,
            View::Liked => MenuContext::Liked,
            View::Playlist(_) => MenuContext::Playlist,
        }
    }
}

pub struct App {
    registry: TrackRegistry,
    playlists: Vec<Playlist>,
    cursor: PlaybackCursor,
    liked: LikedSet<TrackId>,
    /// Keyed by playlist index: titles may repeat and playlists are never removed.
    liked_playlists: LikedSet<usize>,
    query: String,
    player: PlayerBar,
}

impl App {
    /// Create a new `App` paused on the first catalog track.
    pub fn new(catalog: Catalog) -> Self {
        let cursor = PlaybackCursor::new(&catalog.registry);
        Self {
            registry: catalog.registry,
            playlists: catalog.playlists,
            cursor,
            liked: LikedSet::default(),
            liked_playlists: LikedSet::default(),
            query: String::new(),
            player: PlayerBar::default(),
        }
    }

    pub fn with_player(mut self, player: PlayerBar) -> Self {
        self.player = player;
        self
    }

    pub fn registry(&self) -> &TrackRegistry {
        &self.registry
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn cursor(&self) -> &PlaybackCursor {
        &self.cursor
    }

    pub fn playback(&self) -> PlaybackState {
        self.cursor.state()
    }

    pub fn player(&self) -> &PlayerBar {
        &self.player
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current track, if it still resolves in the registry.
    pub fn current_track(&self) -> Option<&Track> {
        self.cursor
            .current()
            .and_then(|id| self.registry.find(id).ok())
    }

    pub fn is_liked(&self, id: &TrackId) -> bool {
        self.liked.contains(id)
    }

    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }

    pub fn is_playlist_liked(&self, index: usize) -> bool {
        index < self.playlists.len() && self.liked_playlists.contains(&index)
    }

    /// Registry tracks matching the current query, lazily.
    pub fn filtered(&self) -> impl Iterator<Item = &Track> + Clone {
        filter(&self.query, self.registry.list())
    }

    /// Rows to render for `view`: the filtered tracks restricted to that collection.
    pub fn rows(&self, view: View) -> Vec<&Track> {
        match view {
            View::Library => self.filtered().collect(),
            View::Liked => self.filtered().filter(|t| self.is_liked(&t.id)).collect(),
            View::Playlist(index) => {
                let Some(playlist) = self.playlists.get(index) else {
                    return Vec::new();
                };
                let query_lower = self.query.to_lowercase();
                playlist
                    .tracks(&self.registry)
                    .filter(|t| super::filter::matches(t, &query_lower))
                    .collect()
            }
        }
    }

    /// Apply `cmd`. Failures are absorbed here and leave the state unchanged.
    pub fn dispatch(&mut self, cmd: Command) {
        tracing::trace!(?cmd, "dispatch");
        if let Err(e) = self.apply(cmd) {
            tracing::debug!("command ignored: {e}");
        }
    }

    fn apply(&mut self, cmd: Command) -> Result<(), PlaybackError> {
        match cmd {
            Command::Play(id) => self.play(&id),
            Command::TogglePlayPause => self.cursor.toggle_play_pause(&self.registry),
            Command::Next => {
                self.cursor.next(&self.registry)?;
                self.player.restart();
                Ok(())
            }
            Command::Previous => {
                self.cursor.previous(&self.registry)?;
                self.player.restart();
                Ok(())
            }
            Command::Like(id) => {
                let liked = self.liked.toggle(&id);
                tracing::debug!(%id, liked, "like toggled");
                Ok(())
            }
            Command::LikeCurrent => {
                let id = self
                    .cursor
                    .current()
                    .cloned()
                    .ok_or(PlaybackError::NoCurrentTrack)?;
                self.liked.toggle(&id);
                Ok(())
            }
            Command::RowActivated(id) => {
                if self.cursor.is_playing_track(&id) {
                    self.cursor.toggle_play_pause(&self.registry)
                } else {
                    self.play(&id)
                }
            }
            Command::PlayPlaylist(index) => {
                let first = self
                    .playlists
                    .get(index)
                    .and_then(|p| p.first_track())
                    .cloned();
                match first {
                    Some(id) => self.play(&id),
                    None => {
                        tracing::debug!(index, "playlist is missing or empty");
                        Ok(())
                    }
                }
            }
            Command::LikePlaylist(index) => {
                if index < self.playlists.len() {
                    self.liked_playlists.toggle(&index);
                } else {
                    tracing::debug!(index, "no such playlist");
                }
                Ok(())
            }
            Command::AddToPlaylist { playlist, track } => {
                self.registry.find(&track)?;
                if let Some(p) = self.playlists.get_mut(playlist) {
                    if !p.track_ids.contains(&track) {
                        p.track_ids.push(track);
                    }
                }
                Ok(())
            }
            Command::RemoveFromPlaylist { playlist, track } => {
                if let Some(p) = self.playlists.get_mut(playlist) {
                    p.track_ids.retain(|id| id != &track);
                }
                Ok(())
            }
            Command::PushQueryChar(c) => {
                self.query.push(c);
                Ok(())
            }
            Command::PopQueryChar => {
                self.query.pop();
                Ok(())
            }
            Command::ClearQuery => {
                self.query.clear();
                Ok(())
            }
            Command::SeekPercent(p) => {
                self.cursor
                    .current()
                    .ok_or(PlaybackError::NoCurrentTrack)?;
                self.player.seek(p);
                Ok(())
            }
            Command::SetVolume(v) => {
                self.player.set_volume(v);
                Ok(())
            }
        }
    }

    fn play(&mut self, id: &TrackId) -> Result<(), PlaybackError> {
        self.cursor.play(&self.registry, id)?;
        self.player.restart();
        tracing::debug!(%id, "playing");
        Ok(())
    }
}
