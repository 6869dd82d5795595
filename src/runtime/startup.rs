use crate::app::{App, Command, PlayerBar};
use crate::config;
use crate::library::{Catalog, load_catalog};

/// Seed the catalog from `settings.catalog.path`, falling back to the built-in sample.
pub fn load_catalog_or_sample(settings: &config::CatalogSettings) -> Catalog {
    let Some(path) = &settings.path else {
        tracing::info!("no catalog configured, using sample data");
        return Catalog::sample();
    };

    match load_catalog(path) {
        Ok(catalog) => {
            tracing::info!(
                path = %path.display(),
                tracks = catalog.registry.len(),
                playlists = catalog.playlists.len(),
                "catalog loaded"
            );
            catalog
        }
        Err(e) => {
            tracing::warn!("failed to load catalog, using sample data: {e}");
            eprintln!("melodify: failed to load catalog, using sample data: {e}");
            Catalog::sample()
        }
    }
}

/// Build the session store and apply player defaults.
pub fn build_app(catalog: Catalog, settings: &config::Settings) -> App {
    let player = PlayerBar::new(
        settings.player.progress_percent,
        settings.player.volume_percent,
    );
    let mut app = App::new(catalog).with_player(player);

    if settings.player.start_playing {
        if let Some(id) = app.cursor().current().cloned() {
            app.dispatch(Command::Play(id));
            // Playing resets the slider; keep the configured start position.
            app.dispatch(Command::SeekPercent(settings.player.progress_percent));
        }
    }

    app
}
