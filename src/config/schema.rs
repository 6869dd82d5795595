use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/melodify/config.toml` or `~/.config/melodify/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MELODIFY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub player: PlayerSettings,
    pub catalog: CatalogSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which track fields make up a row label, and in what order.
    ///
    /// Example: ["title", "artist"]
    pub row_fields: Vec<TrackDisplayField>,

    /// Separator used to join `row_fields`.
    pub row_separator: String,

    /// Whether rows show the album-art column.
    pub show_album_art: bool,

    /// Add the catalog maintenance actions (edit, delete) to every context menu.
    pub admin_tools: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Your AI-powered music companion awaits! ".to_string(),
            row_fields: vec![TrackDisplayField::Title, TrackDisplayField::Artist],
            row_separator: " - ".to_string(),
            show_album_art: true,
            admin_tools: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Initial position of the progress slider (percent).
    pub progress_percent: u8,
    /// Initial volume (percent).
    pub volume_percent: u8,
    /// Step used by the seek keys (percent).
    pub seek_step_percent: u8,
    /// Step used by the volume keys (percent).
    pub volume_step_percent: u8,
    /// Start the session playing the first track instead of paused.
    pub start_playing: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            progress_percent: 0,
            volume_percent: 75,
            seek_step_percent: 5,
            volume_step_percent: 5,
            start_playing: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Optional TOML catalog to seed the registry from. The built-in sample is used otherwise.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive; `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// File to write logs to. Logging is disabled when unset, since the terminal is in use.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "melodify=info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    #[serde(alias = "length")]
    Duration,
}
