//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the `App` store with `ratatui`. It only reads state;
//! every change goes through commands dispatched by the runtime.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, PlaybackState, View};
use crate::config::UiSettings;
use crate::library::{Track, display_from_fields, format_duration, format_total_duration};
use crate::runtime::EventLoopState;

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("enter", "play row"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("f/F", "like row/current"),
    ("[/]", "seek"),
    ("-/+", "volume"),
    ("/", "search"),
    ("v", "view"),
    ("tab", "playlist"),
    ("P/L", "play/like playlist"),
    ("m", "menu"),
    ("q", "quit"),
];

const EMPTY_PLAYER_TEXT: &str = "Choose a song to start your musical journey!";

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// One rendered track row: play/pause glyph, optional art marker, label, heart and length.
fn row_text(app: &App, track: &Track, ui: &UiSettings) -> String {
    let glyph = if app.cursor().is_playing_track(&track.id) {
        "⏸"
    } else {
        "▶"
    };
    let heart = if app.is_liked(&track.id) { "♥" } else { "♡" };
    let label = display_from_fields(track, &ui.row_fields, &ui.row_separator);

    let mut text = format!("{glyph} ");
    if ui.show_album_art {
        text.push_str(if track.album_art_url.is_some() { "▣ " } else { "♪ " });
    }
    text.push_str(&format!(
        "{label}  {heart} {}",
        format_duration(track.duration_secs)
    ));
    text
}

/// Text slider of `width` cells filled to `percent`.
fn progress_bar(percent: u8, width: usize) -> String {
    let filled = usize::from(percent.min(100)) * width / 100;
    format!("{}{}", "━".repeat(filled), "─".repeat(width - filled))
}

/// The player bar's two lines, or the empty-state prompt when nothing is current.
fn player_text(app: &App) -> String {
    let Some(track) = app.current_track() else {
        return EMPTY_PLAYER_TEXT.to_string();
    };

    let player = app.player();
    let state = match app.playback() {
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    };
    let heart = if app.is_liked(&track.id) { "♥" } else { "♡" };

    format!(
        "{} - {}  {heart}\n{} {} {} • {state} • Vol {}%",
        track.title,
        track.artist,
        format_duration(player.elapsed_secs(track)),
        progress_bar(player.progress_percent(), 24),
        format_duration(track.duration_secs),
        player.volume_percent(),
    )
}

fn view_title(app: &App, view: View) -> String {
    match view {
        View::Library => " trending now ".to_string(),
        View::Liked => format!(" liked songs ({}) ", app.liked_count()),
        View::Playlist(i) => app
            .playlists()
            .get(i)
            .map(|p| format!(" {} ", p.title))
            .unwrap_or_else(|| " playlist ".to_string()),
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, state: &EventLoopState, ui: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header with the search box folded in.
    let header_text = if state.filter_mode || !app.query().is_empty() {
        format!("{} • search: {}", ui.header_text, app.query())
    } else {
        ui.header_text.clone()
    };
    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Melodify ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(chunks[1]);

    // Track rows
    let rows = app.rows(state.view);
    let items: Vec<ListItem> = rows
        .iter()
        .map(|t| ListItem::new(row_text(app, t, ui)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(view_title(app, state.view)))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if !rows.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, body[0], &mut list_state);

    // Playlists
    let playlist_items: Vec<ListItem> = app
        .playlists()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let heart = if app.is_playlist_liked(i) { "♥" } else { " " };
            ListItem::new(format!(
                "{heart} {} ({} songs, {})",
                p.title,
                p.track_ids.len(),
                format_total_duration(p.total_duration_secs(app.registry()))
            ))
        })
        .collect();
    let playlists = List::new(playlist_items)
        .block(Block::default().borders(Borders::ALL).title(" made for you "))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("* ");
    let mut playlist_state = ListState::default();
    if !app.playlists().is_empty() {
        playlist_state.select(Some(state.highlighted_playlist));
    }
    frame.render_stateful_widget(playlists, body[1], &mut playlist_state);

    // Context menu popup over the track list
    if let Some(menu) = &state.menu {
        let height = menu.actions.len() as u16 + 2;
        let popup_area = centered_rect_sized(28, height, body[0]);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = menu
            .actions
            .iter()
            .map(|a| ListItem::new(a.label()))
            .collect();
        let popup = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" actions "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut popup_state = ListState::default();
        popup_state.select(Some(menu.selected));
        frame.render_stateful_widget(popup, popup_area, &mut popup_state);
    }

    let player = Paragraph::new(player_text(app))
        .block(padded(" now playing ".to_string()))
        .wrap(Wrap { trim: true });
    frame.render_widget(player, chunks[2]);

    let footer = Paragraph::new(controls_text())
        .block(padded(" controls ".to_string()))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
