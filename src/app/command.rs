use crate::library::TrackId;

/// Intents dispatched by views to the single state owner, [`crate::app::App`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Select a track and start playing it.
    Play(TrackId),
    /// Flip play/pause on the current track.
    TogglePlayPause,
    /// Play the next registry track, wrapping at the end.
    Next,
    /// Play the previous registry track, wrapping at the start.
    Previous,
    /// Toggle a track's membership in the liked set.
    Like(TrackId),
    /// Toggle the current track's membership in the liked set (player-bar heart).
    LikeCurrent,
    /// A row was activated: toggles if it is the playing track, plays it otherwise.
    RowActivated(TrackId),
    /// Play a playlist from its first track.
    PlayPlaylist(usize),
    /// Toggle a playlist's liked marker.
    LikePlaylist(usize),
    AddToPlaylist { playlist: usize, track: TrackId },
    RemoveFromPlaylist { playlist: usize, track: TrackId },
    PushQueryChar(char),
    PopQueryChar,
    ClearQuery,
    /// Move the progress slider to a percentage of the current track.
    SeekPercent(u8),
    SetVolume(u8),
}
