use ::config::ConfigError;

use crate::config::Settings;

/// Settings for this session plus the reason defaults were used, if they were.
///
/// The caller logs the warning after logging is initialised from these settings.
pub fn load_settings() -> (Settings, Option<String>) {
    settings_or_defaults(Settings::load())
}

fn settings_or_defaults(loaded: Result<Settings, ConfigError>) -> (Settings, Option<String>) {
    match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        // Config is optional; a broken file never keeps the app from starting.
        Err(e) => (
            Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
