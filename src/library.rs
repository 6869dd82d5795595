//! Library module: track records, the track registry, playlists and the
//! startup catalog.

mod display;
mod model;
mod playlist;
mod registry;
mod seed;

pub use display::{display_from_fields, format_duration, format_total_duration};
pub use model::{Track, TrackId};
pub use playlist::Playlist;
pub use registry::TrackRegistry;
pub use seed::{Catalog, load_catalog};
