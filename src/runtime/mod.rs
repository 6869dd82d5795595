use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

mod event_loop;
mod logging;
mod settings;
mod startup;

pub use event_loop::EventLoopState;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();

    if let Err(e) = logging::init(&settings.log) {
        eprintln!("melodify: failed to open log file, logging disabled: {e}");
    }
    if let Some(warning) = settings_warning {
        tracing::warn!("{warning}");
        eprintln!("melodify: {warning}");
    }

    // A catalog path given on the command line wins over the config file.
    let mut catalog_settings = settings.catalog.clone();
    if let Some(path) = std::env::args_os().nth(1) {
        catalog_settings.path = Some(path.into());
    }

    let catalog = startup::load_catalog_or_sample(&catalog_settings);
    let mut app = startup::build_app(catalog, &settings);
    tracing::info!(tracks = app.registry().len(), "session started");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
