//! Application module: the session store and the playback pieces it owns.
//!
//! `App` lives in `app::model`. Views read it and send it [`Command`]s; the
//! cursor, filter, liked sets, player bar and menu capabilities are its parts.

mod command;
mod cursor;
mod filter;
mod liked;
mod menu;
mod model;
mod player_bar;

pub use command::Command;
pub use cursor::PlaybackState;
pub use menu::{MenuAction, MenuCapabilities, MenuContext};
pub use model::*;
pub use player_bar::PlayerBar;

#[cfg(test)]
mod tests;
