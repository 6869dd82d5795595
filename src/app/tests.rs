use super::cursor::PlaybackCursor;
use super::filter::filter;
use super::liked::LikedSet;
use super::*;
use crate::library::{Catalog, Playlist, Track, TrackId, TrackRegistry};

fn t(id: &str, title: &str, artist: &str) -> Track {
    Track::new(id, title, artist, 200)
}

fn id(s: &str) -> TrackId {
    TrackId::from(s)
}

fn app_with(tracks: Vec<Track>) -> App {
    App::new(Catalog {
        registry: TrackRegistry::new(tracks),
        playlists: Vec::new(),
    })
}

fn scenario_app() -> App {
    app_with(vec![
        Track::new("1", "Golden Sparrow", "G.V. Prakash, Dhanush", 240),
        Track::new("2", "Thodu Vaanam", "Harris Jayaraj", 220),
    ])
}

fn abc() -> App {
    app_with(vec![t("a", "Alpha", "X"), t("b", "Beta", "Y"), t("c", "Gamma", "Z")])
}

fn set_query(app: &mut App, query: &str) {
    app.dispatch(Command::ClearQuery);
    for c in query.chars() {
        app.dispatch(Command::PushQueryChar(c));
    }
}

fn current(app: &App) -> Option<&str> {
    app.cursor().current().map(|i| i.0.as_str())
}

#[test]
fn starts_paused_on_first_track() {
    let app = abc();
    assert_eq!(current(&app), Some("a"));
    assert_eq!(app.playback(), PlaybackState::Paused);
    assert_eq!(app.current_track().map(|t| t.title.as_str()), Some("Alpha"));
}

#[test]
fn empty_registry_starts_with_no_current_track() {
    let app = app_with(vec![]);
    assert_eq!(current(&app), None);
    assert_eq!(app.playback(), PlaybackState::Paused);
    assert!(app.current_track().is_none());
}

#[test]
fn play_sets_current_and_playing() {
    let mut app = abc();
    for target in ["c", "a", "b"] {
        app.dispatch(Command::Play(id(target)));
        assert_eq!(current(&app), Some(target));
        assert!(app.cursor().is_playing());
    }
}

#[test]
fn play_unknown_id_is_a_silent_noop() {
    let mut app = abc();
    app.dispatch(Command::Play(id("b")));
    app.dispatch(Command::TogglePlayPause);
    let before = app.cursor().clone();

    app.dispatch(Command::Play(id("missing")));
    assert_eq!(app.cursor(), &before);
}

#[test]
fn only_the_current_track_reports_playing() {
    let mut app = abc();
    app.dispatch(Command::Play(id("a")));
    app.dispatch(Command::Play(id("c")));
    let playing: Vec<&str> = app
        .registry()
        .list()
        .iter()
        .filter(|t| app.cursor().is_playing_track(&t.id))
        .map(|t| t.id.0.as_str())
        .collect();
    assert_eq!(playing, vec!["c"]);
}

#[test]
fn toggle_play_pause_is_an_involution() {
    let mut app = abc();
    for _ in 0..2 {
        let before = app.playback();
        app.dispatch(Command::TogglePlayPause);
        assert_ne!(app.playback(), before);
        app.dispatch(Command::TogglePlayPause);
        assert_eq!(app.playback(), before);
        app.dispatch(Command::Play(id("b")));
    }
}

#[test]
fn toggle_on_empty_registry_does_nothing() {
    let mut app = app_with(vec![]);
    app.dispatch(Command::TogglePlayPause);
    app.dispatch(Command::Next);
    app.dispatch(Command::Previous);
    assert_eq!(current(&app), None);
    assert_eq!(app.playback(), PlaybackState::Paused);
}

#[test]
fn cursor_rejects_toggle_without_current_track() {
    let registry = TrackRegistry::new(vec![t("a", "Alpha", "X")]);
    let mut cursor = PlaybackCursor::default();
    assert_eq!(
        cursor.toggle_play_pause(&registry),
        Err(crate::error::PlaybackError::NoCurrentTrack)
    );
    assert_eq!(cursor.state(), PlaybackState::Paused);
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=4 {
        let tracks: Vec<Track> = (0..n)
            .map(|i| t(&i.to_string(), &format!("T{i}"), "A"))
            .collect();
        for start in 0..n {
            let mut app = app_with(tracks.clone());
            let start_id = id(&start.to_string());
            app.dispatch(Command::Play(start_id.clone()));
            for _ in 0..n {
                app.dispatch(Command::Next);
            }
            assert_eq!(app.cursor().current(), Some(&start_id));
            assert!(app.cursor().is_playing());
        }
    }
}

#[test]
fn previous_undoes_next() {
    let mut app = abc();
    for start in ["a", "b", "c"] {
        app.dispatch(Command::Play(id(start)));
        app.dispatch(Command::TogglePlayPause);
        app.dispatch(Command::Next);
        app.dispatch(Command::Previous);
        assert_eq!(current(&app), Some(start));
        assert_eq!(app.playback(), PlaybackState::Playing);
    }
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut app = abc();
    app.dispatch(Command::Previous);
    assert_eq!(current(&app), Some("c"));
    assert!(app.cursor().is_playing());
}

#[test]
fn navigation_without_current_track_picks_an_end() {
    let registry = TrackRegistry::new(vec![t("a", "Alpha", "X"), t("b", "Beta", "Y")]);

    let mut cursor = PlaybackCursor::default();
    cursor.next(&registry).unwrap();
    assert_eq!(cursor.current(), Some(&id("a")));

    let mut cursor = PlaybackCursor::default();
    cursor.previous(&registry).unwrap();
    assert_eq!(cursor.current(), Some(&id("b")));
}

#[test]
fn single_track_navigation_restarts_playback() {
    let mut app = app_with(vec![t("only", "Solo", "X")]);
    app.dispatch(Command::SeekPercent(60));
    assert_eq!(app.player().progress_percent(), 60);

    app.dispatch(Command::Next);
    assert_eq!(current(&app), Some("only"));
    assert!(app.cursor().is_playing());
    assert_eq!(app.player().progress_percent(), 0);

    app.dispatch(Command::TogglePlayPause);
    app.dispatch(Command::Previous);
    assert_eq!(current(&app), Some("only"));
    assert!(app.cursor().is_playing());
}

#[test]
fn like_toggle_is_an_involution_and_independent() {
    let mut app = abc();
    app.dispatch(Command::Like(id("b")));
    assert!(app.is_liked(&id("b")));
    assert!(!app.is_liked(&id("a")));

    app.dispatch(Command::Like(id("a")));
    app.dispatch(Command::Like(id("a")));
    assert!(!app.is_liked(&id("a")));
    assert!(app.is_liked(&id("b")));

    let before = app.cursor().clone();
    app.dispatch(Command::Like(id("c")));
    assert_eq!(app.cursor(), &before);
}

#[test]
fn like_current_uses_the_shared_liked_set() {
    let mut app = abc();
    app.dispatch(Command::Play(id("b")));
    app.dispatch(Command::LikeCurrent);
    assert!(app.is_liked(&id("b")));
    assert_eq!(app.liked_count(), 1);

    let mut empty = app_with(vec![]);
    empty.dispatch(Command::LikeCurrent);
    assert_eq!(empty.liked_count(), 0);
}

#[test]
fn row_activation_toggles_playing_row_and_plays_others() {
    let mut app = abc();

    app.dispatch(Command::RowActivated(id("b")));
    assert_eq!(current(&app), Some("b"));
    assert!(app.cursor().is_playing());

    app.dispatch(Command::RowActivated(id("b")));
    assert_eq!(current(&app), Some("b"));
    assert!(!app.cursor().is_playing());

    app.dispatch(Command::RowActivated(id("b")));
    assert!(app.cursor().is_playing());

    app.dispatch(Command::RowActivated(id("c")));
    assert_eq!(current(&app), Some("c"));
    assert!(app.cursor().is_playing());
}

#[test]
fn empty_query_returns_full_registry_in_order() {
    let app = abc();
    let ids: Vec<&str> = app.filtered().map(|t| t.id.0.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn query_is_case_insensitive_over_title_and_artist() {
    let mut app = scenario_app();
    set_query(&mut app, "golden");
    let titles: Vec<&str> = app.filtered().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Golden Sparrow"]);

    set_query(&mut app, "HARRIS");
    let titles: Vec<&str> = app.filtered().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Thodu Vaanam"]);

    set_query(&mut app, "a");
    assert_eq!(app.filtered().count(), 2);

    set_query(&mut app, "nothing here");
    assert_eq!(app.filtered().count(), 0);
}

#[test]
fn filter_view_is_restartable_and_leaves_registry_alone() {
    let registry = TrackRegistry::new(vec![t("a", "Alpha", "X"), t("b", "Beta", "Y")]);
    let view = filter("ET", registry.list());
    let first: Vec<&str> = view.clone().map(|t| t.id.0.as_str()).collect();
    let second: Vec<&str> = view.map(|t| t.id.0.as_str()).collect();
    assert_eq!(first, vec!["b"]);
    assert_eq!(first, second);
    assert_eq!(registry.len(), 2);
}

#[test]
fn query_is_not_trimmed() {
    let mut app = abc();
    set_query(&mut app, "alpha ");
    assert_eq!(app.filtered().count(), 0);
}

#[test]
fn filtered_out_track_keeps_playing() {
    let mut app = abc();
    app.dispatch(Command::Play(id("a")));
    set_query(&mut app, "gamma");
    assert!(app.rows(View::Library).iter().all(|t| t.id != id("a")));
    assert_eq!(current(&app), Some("a"));
    assert!(app.cursor().is_playing());
}

#[test]
fn query_editing_commands() {
    let mut app = abc();
    app.dispatch(Command::PushQueryChar('b'));
    app.dispatch(Command::PushQueryChar('e'));
    assert_eq!(app.query(), "be");
    assert_eq!(app.rows(View::Library).len(), 1);
    app.dispatch(Command::PopQueryChar);
    assert_eq!(app.query(), "b");
    app.dispatch(Command::ClearQuery);
    assert_eq!(app.query(), "");
    assert_eq!(app.rows(View::Library).len(), 3);
}

#[test]
fn liked_view_shows_only_liked_matching_tracks() {
    let mut app = abc();
    app.dispatch(Command::Like(id("a")));
    app.dispatch(Command::Like(id("c")));
    let ids: Vec<&str> = app.rows(View::Liked).iter().map(|t| t.id.0.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);

    set_query(&mut app, "gam");
    let ids: Vec<&str> = app.rows(View::Liked).iter().map(|t| t.id.0.as_str()).collect();
    assert_eq!(ids, vec!["c"]);
}

fn app_with_playlists() -> App {
    App::new(Catalog {
        registry: TrackRegistry::new(vec![
            t("a", "Alpha", "X"),
            t("b", "Beta", "Y"),
            t("c", "Gamma", "Z"),
        ]),
        playlists: vec![
            Playlist::new("Mix", vec![id("c"), id("a")]),
            Playlist::new("Empty", vec![]),
        ],
    })
}

#[test]
fn play_playlist_starts_first_track() {
    let mut app = app_with_playlists();
    app.dispatch(Command::PlayPlaylist(0));
    assert_eq!(current(&app), Some("c"));
    assert!(app.cursor().is_playing());

    app.dispatch(Command::TogglePlayPause);
    app.dispatch(Command::PlayPlaylist(1));
    app.dispatch(Command::PlayPlaylist(7));
    assert_eq!(current(&app), Some("c"));
    assert!(!app.cursor().is_playing());
}

#[test]
fn playlist_view_keeps_playlist_order() {
    let app = app_with_playlists();
    let ids: Vec<&str> = app
        .rows(View::Playlist(0))
        .iter()
        .map(|t| t.id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["c", "a"]);
    assert!(app.rows(View::Playlist(9)).is_empty());
}

#[test]
fn add_and_remove_playlist_tracks() {
    let mut app = app_with_playlists();
    app.dispatch(Command::AddToPlaylist {
        playlist: 1,
        track: id("b"),
    });
    app.dispatch(Command::AddToPlaylist {
        playlist: 1,
        track: id("b"),
    });
    app.dispatch(Command::AddToPlaylist {
        playlist: 1,
        track: id("ghost"),
    });
    assert_eq!(app.playlists()[1].track_ids, vec![id("b")]);

    app.dispatch(Command::RemoveFromPlaylist {
        playlist: 0,
        track: id("c"),
    });
    assert_eq!(app.playlists()[0].track_ids, vec![id("a")]);
}

#[test]
fn like_playlist_toggles_by_index() {
    let mut app = app_with_playlists();
    app.dispatch(Command::LikePlaylist(0));
    assert!(app.is_playlist_liked(0));
    assert!(!app.is_playlist_liked(1));
    app.dispatch(Command::LikePlaylist(0));
    assert!(!app.is_playlist_liked(0));
    app.dispatch(Command::LikePlaylist(42));
    assert!(!app.is_playlist_liked(42));
}

#[test]
fn liking_a_playlist_leaves_same_titled_playlists_alone() {
    let catalog = Catalog::from_toml(
        r#"
[[tracks]]
id = "a"
title = "Alpha"
artist = "X"
duration = 10

[[playlists]]
title = "Mix"
tracks = ["a"]

[[playlists]]
title = "Mix"
tracks = []
"#,
    )
    .unwrap();
    let mut app = App::new(catalog);

    app.dispatch(Command::LikePlaylist(0));
    assert!(app.is_playlist_liked(0));
    assert!(!app.is_playlist_liked(1));

    app.dispatch(Command::LikePlaylist(1));
    app.dispatch(Command::LikePlaylist(0));
    assert!(!app.is_playlist_liked(0));
    assert!(app.is_playlist_liked(1));
}

#[test]
fn player_bar_derives_elapsed_from_progress() {
    let mut app = scenario_app();
    app.dispatch(Command::SeekPercent(30));
    let track = app.current_track().unwrap().clone();
    assert_eq!(app.player().elapsed_secs(&track), 72);

    app.dispatch(Command::SeekPercent(250));
    assert_eq!(app.player().progress_percent(), 100);
    assert_eq!(app.player().elapsed_secs(&track), 240);

    app.dispatch(Command::SetVolume(101));
    assert_eq!(app.player().volume_percent(), 100);
    app.dispatch(Command::SetVolume(20));
    assert_eq!(app.player().volume_percent(), 20);
}

#[test]
fn player_bar_new_clamps_and_seek_needs_a_track() {
    let bar = PlayerBar::new(130, 200);
    assert_eq!(bar.progress_percent(), 100);
    assert_eq!(bar.volume_percent(), 100);

    let mut empty = app_with(vec![]).with_player(PlayerBar::new(10, 50));
    empty.dispatch(Command::SeekPercent(90));
    assert_eq!(empty.player().progress_percent(), 10);
}

#[test]
fn liked_set_counts_members() {
    let mut set: LikedSet<String> = LikedSet::default();
    assert_eq!(set.len(), 0);
    assert!(set.toggle(&"x".to_string()));
    assert_eq!(set.len(), 1);
    assert!(!set.toggle(&"x".to_string()));
    assert_eq!(set.len(), 0);
}

#[test]
fn menu_capabilities_per_context() {
    assert_eq!(
        MenuCapabilities::for_context(MenuContext::Library).actions(),
        vec![MenuAction::Play, MenuAction::Like, MenuAction::AddToPlaylist]
    );
    assert_eq!(
        MenuCapabilities::for_context(MenuContext::Playlist).actions(),
        vec![
            MenuAction::Play,
            MenuAction::Like,
            MenuAction::AddToPlaylist,
            MenuAction::RemoveFromPlaylist
        ]
    );
    let liked = MenuCapabilities::for_context(MenuContext::Liked);
    assert!(liked.allows(MenuAction::RemoveFromLiked));
    assert!(!liked.allows(MenuAction::Like));
    let admin = MenuCapabilities::for_context(MenuContext::Admin);
    assert!(admin.allows(MenuAction::Edit) && admin.allows(MenuAction::Delete));
    assert!(!admin.allows(MenuAction::AddToPlaylist));
    let widened = liked.union(admin);
    assert!(widened.allows(MenuAction::RemoveFromLiked) && widened.allows(MenuAction::Delete));
    assert!(!widened.allows(MenuAction::Like));

    assert_eq!(View::Playlist(3).menu_context(), MenuContext::Playlist);
    assert_eq!(View::Liked.menu_context(), MenuContext::Liked);
}

#[test]
fn two_song_session_walkthrough() {
    let mut app = scenario_app();
    let mut cursor = PlaybackCursor::default();
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.state(), PlaybackState::Paused);

    cursor.play(app.registry(), &id("1")).unwrap();
    assert_eq!(cursor.current(), Some(&id("1")));
    assert!(cursor.is_playing());

    app.dispatch(Command::Play(id("1")));
    assert_eq!(current(&app), Some("1"));
    assert_eq!(app.playback(), PlaybackState::Playing);

    app.dispatch(Command::Next);
    assert_eq!(current(&app), Some("2"));
    assert_eq!(app.playback(), PlaybackState::Playing);

    app.dispatch(Command::Next);
    assert_eq!(current(&app), Some("1"));
    assert_eq!(app.playback(), PlaybackState::Playing);

    app.dispatch(Command::TogglePlayPause);
    assert_eq!(current(&app), Some("1"));
    assert_eq!(app.playback(), PlaybackState::Paused);

    app.dispatch(Command::Like(id("1")));
    assert!(app.is_liked(&id("1")));
    assert_eq!(app.liked_count(), 1);
    app.dispatch(Command::Like(id("1")));
    assert_eq!(app.liked_count(), 0);
}
