//! Error types shared by the library and the playback store.

use std::path::PathBuf;

use thiserror::Error;

use crate::library::TrackId;

/// Errors raised by registry lookups and cursor transitions.
///
/// None of these are fatal: the store absorbs them at its boundary and leaves
/// its state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("track {0} is not in the registry")]
    NotFound(TrackId),

    #[error("the registry has no tracks")]
    EmptyRegistry,

    #[error("no track is currently selected")]
    NoCurrentTrack,

    #[error("track {0} is already registered")]
    DuplicateTrack(TrackId),
}

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Registry(#[from] PlaybackError),
}
