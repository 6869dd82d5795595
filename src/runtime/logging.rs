use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::config::LogSettings;

/// Install the global `tracing` subscriber.
///
/// The terminal belongs to the TUI, so events only go to `settings.file`.
/// Without a file nothing is recorded. `RUST_LOG` overrides `settings.filter`.
pub fn init(settings: &LogSettings) -> std::io::Result<()> {
    let Some(path) = &settings.file else {
        return Ok(());
    };

    let log_file = std::fs::File::create(path)?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.filter)),
        )
        .init();

    Ok(())
}
