use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Command, MenuAction, MenuCapabilities, MenuContext, View};
use crate::config;
use crate::library::TrackId;
use crate::ui;

/// Open context menu over the selected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub track: TrackId,
    pub capabilities: MenuCapabilities,
    /// `capabilities` in menu order.
    pub actions: Vec<MenuAction>,
    pub selected: usize,
}

/// View state tracked by the event loop across iterations.
///
/// The highlighted row is independent of the playback cursor held by `App`.
pub struct EventLoopState {
    pub view: View,
    /// Index into the rows of `view`.
    pub selected: usize,
    /// Playlist targeted by play-all, like and add-to-playlist.
    pub highlighted_playlist: usize,
    pub filter_mode: bool,
    pub menu: Option<MenuState>,
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            view: View::Library,
            selected: 0,
            highlighted_playlist: 0,
            filter_mode: false,
            menu: None,
            pending_gg: false,
        }
    }

    /// Id of the highlighted row in `app`, if any.
    pub fn selected_track(&self, app: &App) -> Option<TrackId> {
        app.rows(self.view)
            .get(self.selected)
            .map(|t| t.id.clone())
    }

    fn clamp_selection(&mut self, app: &App) {
        let len = app.rows(self.view).len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn move_down(&mut self, app: &App) {
        let len = app.rows(self.view).len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    fn move_up(&mut self, app: &App) {
        let len = app.rows(self.view).len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    fn cycle_view(&mut self, app: &App) {
        self.view = match self.view {
            View::Library => View::Liked,
            View::Liked if !app.playlists().is_empty() => View::Playlist(self.highlighted_playlist),
            View::Liked | View::Playlist(_) => View::Library,
        };
        self.selected = 0;
    }

    fn cycle_playlist(&mut self, app: &App) {
        let len = app.playlists().len();
        if len == 0 {
            return;
        }
        self.highlighted_playlist = (self.highlighted_playlist + 1) % len;
        if let View::Playlist(_) = self.view {
            self.view = View::Playlist(self.highlighted_playlist);
            self.selected = 0;
        }
    }
}

impl MenuState {
    pub fn new(track: TrackId, capabilities: MenuCapabilities) -> Self {
        Self {
            track,
            capabilities,
            actions: capabilities.actions(),
            selected: 0,
        }
    }
}

/// Capabilities of the menu opened from `view`, widened by the admin tools when enabled.
pub fn menu_capabilities(view: View, ui: &config::UiSettings) -> MenuCapabilities {
    let base = MenuCapabilities::for_context(view.menu_context());
    if ui.admin_tools {
        base.union(MenuCapabilities::for_context(MenuContext::Admin))
    } else {
        base
    }
}

impl Default for EventLoopState {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a menu action on `track` into a store command.
///
/// Returns `None` for actions outside `capabilities` and for actions that
/// have no effect in the listener view.
pub fn menu_command(
    action: MenuAction,
    capabilities: MenuCapabilities,
    app: &App,
    state: &EventLoopState,
    track: &TrackId,
) -> Option<Command> {
    if !capabilities.allows(action) {
        return None;
    }
    match action {
        MenuAction::Play => Some(Command::Play(track.clone())),
        MenuAction::Like => Some(Command::Like(track.clone())),
        MenuAction::RemoveFromLiked => app
            .is_liked(track)
            .then(|| Command::Like(track.clone())),
        MenuAction::AddToPlaylist => (!app.playlists().is_empty()).then(|| {
            Command::AddToPlaylist {
                playlist: state.highlighted_playlist,
                track: track.clone(),
            }
        }),
        MenuAction::RemoveFromPlaylist => match state.view {
            View::Playlist(playlist) => Some(Command::RemoveFromPlaylist {
                playlist,
                track: track.clone(),
            }),
            _ => None,
        },
        MenuAction::Edit | MenuAction::Delete => None,
    }
}

/// Main terminal event loop: handles input and UI drawing.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        state.clamp_selection(app);
        terminal.draw(|f| ui::draw(f, app, state, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, state) {
                    break;
                }
            }
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> bool {
    if state.menu.is_some() {
        handle_menu_key(key, app, state);
        return false;
    }

    if state.filter_mode {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => {
                app.dispatch(Command::ClearQuery);
                state.filter_mode = false;
            }
            KeyCode::Backspace => app.dispatch(Command::PopQueryChar),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.move_down(app)
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.move_up(app)
            }
            KeyCode::Down => state.move_down(app),
            KeyCode::Up => state.move_up(app),
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.dispatch(Command::PushQueryChar(c));
                    state.selected = 0;
                }
            }
            KeyCode::Enter => {
                state.filter_mode = false;
                if let Some(id) = state.selected_track(app) {
                    app.dispatch(Command::RowActivated(id));
                }
            }
            _ => {}
        }
        return false;
    }

    let player = &settings.player;
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => state.filter_mode = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_down(app),
        KeyCode::Char('k') | KeyCode::Up => state.move_up(app),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                state.selected = 0;
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.selected = app.rows(state.view).len().saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(id) = state.selected_track(app) {
                app.dispatch(Command::RowActivated(id));
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => app.dispatch(Command::TogglePlayPause),
        KeyCode::Char('l') => app.dispatch(Command::Next),
        KeyCode::Char('h') => app.dispatch(Command::Previous),
        KeyCode::Char('f') => {
            if let Some(id) = state.selected_track(app) {
                app.dispatch(Command::Like(id));
            }
        }
        KeyCode::Char('F') => app.dispatch(Command::LikeCurrent),
        KeyCode::Char(']') => {
            let p = app
                .player()
                .progress_percent()
                .saturating_add(player.seek_step_percent);
            app.dispatch(Command::SeekPercent(p));
        }
        KeyCode::Char('[') => {
            let p = app
                .player()
                .progress_percent()
                .saturating_sub(player.seek_step_percent);
            app.dispatch(Command::SeekPercent(p));
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let v = app
                .player()
                .volume_percent()
                .saturating_add(player.volume_step_percent);
            app.dispatch(Command::SetVolume(v));
        }
        KeyCode::Char('-') => {
            let v = app
                .player()
                .volume_percent()
                .saturating_sub(player.volume_step_percent);
            app.dispatch(Command::SetVolume(v));
        }
        KeyCode::Char('v') => state.cycle_view(app),
        KeyCode::Tab => state.cycle_playlist(app),
        KeyCode::Char('P') => app.dispatch(Command::PlayPlaylist(state.highlighted_playlist)),
        KeyCode::Char('L') => app.dispatch(Command::LikePlaylist(state.highlighted_playlist)),
        KeyCode::Char('m') => {
            if let Some(track) = state.selected_track(app) {
                let capabilities = menu_capabilities(state.view, &settings.ui);
                state.menu = Some(MenuState::new(track, capabilities));
            }
        }
        _ => {}
    }

    false
}

fn handle_menu_key(key: KeyEvent, app: &mut App, state: &mut EventLoopState) {
    let Some(menu) = state.menu.as_mut() else {
        return;
    };
    let len = menu.actions.len();

    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => state.menu = None,
        KeyCode::Char('j') | KeyCode::Down if len > 0 => {
            menu.selected = (menu.selected + 1) % len;
        }
        KeyCode::Char('k') | KeyCode::Up if len > 0 => {
            menu.selected = (menu.selected + len - 1) % len;
        }
        KeyCode::Enter => {
            let chosen = menu.actions.get(menu.selected).copied();
            let track = menu.track.clone();
            let capabilities = menu.capabilities;
            state.menu = None;
            if let Some(action) = chosen {
                match menu_command(action, capabilities, app, state, &track) {
                    Some(cmd) => app.dispatch(cmd),
                    None => tracing::debug!(?action, "menu action unavailable here"),
                }
            }
        }
        _ => {}
    }
}
