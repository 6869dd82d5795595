//! Search filtering over the registry.

use crate::library::Track;

/// Case-insensitive substring match against title or artist.
///
/// The query is matched as typed (no trimming). An empty query matches every track.
pub fn matches(track: &Track, query_lower: &str) -> bool {
    query_lower.is_empty()
        || track.title.to_lowercase().contains(query_lower)
        || track.artist.to_lowercase().contains(query_lower)
}

/// Lazy view of the tracks matching `query`, in registry order.
///
/// The iterator is `Clone`, so a view can be restarted without recomputing the query.
pub fn filter<'a>(
    query: &str,
    tracks: &'a [Track],
) -> impl Iterator<Item = &'a Track> + Clone + use<'a> {
    let query_lower = query.to_lowercase();
    tracks.iter().filter(move |t| matches(t, &query_lower))
}
