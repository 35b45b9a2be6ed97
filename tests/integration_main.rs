use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reqwest::Client;
use segno::app::config::AppConfig;
use segno::app::input_handler::handle_input;
use segno::app::{App, CatalogRow};
use segno::catalog::model::{Album, Sheet, Song};
use segno::viewer::pages::PagesState;
use segno::viewer::ViewerState;
use tokio::sync::mpsc;

/// Helper to create a test app instance
fn create_test_app() -> App {
    App::new(AppConfig::default())
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn paged_sheet(kind: &str, pages: usize) -> Sheet {
    Sheet {
        kind: kind.to_string(),
        urls: (0..pages).map(|i| format!("page-{i}.png")).collect(),
        file_paths: Vec::new(),
    }
}

fn scroll_sheet(kind: &str, pages: usize) -> Sheet {
    Sheet {
        kind: kind.to_string(),
        urls: Vec::new(),
        file_paths: (0..pages).map(|i| format!("line-{i}.svg")).collect(),
    }
}

fn song(title: &str, sheets: Vec<Sheet>) -> Song {
    Song {
        title: title.to_string(),
        albums: vec![Album {
            name: format!("{title} (album)"),
            artist: "Tester".to_string(),
            youtube: "https://youtube.com/watch?v=x".to_string(),
            sheets,
        }],
    }
}

#[test]
fn test_app_initialization() {
    let app = create_test_app();
    assert!(app.is_running);
    assert!(app.songs.is_empty());
    assert!(!app.viewer.is_open());
    assert_eq!(app.default_bpm, 120);
}

#[test]
fn test_catalog_sorted_and_first_expanded() {
    let mut app = create_test_app();
    app.set_catalog(vec![
        song("B Song", vec![paged_sheet("Solo", 3)]),
        song("A Song", vec![paged_sheet("Solo", 3)]),
    ]);

    let titles: Vec<&str> = app.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["A Song", "B Song"]);
    assert_eq!(app.expanded, [true, false]);

    // Row list: expanded first song contributes its album row
    let rows = app.visible_rows();
    assert_eq!(rows[0], CatalogRow::Song(0));
    assert_eq!(rows[1], CatalogRow::Album { song: 0, album: 0 });
    assert_eq!(rows[2], CatalogRow::Song(1));

    // Loading the same data again keeps the order
    let before: Vec<String> = app.songs.iter().map(|s| s.title.clone()).collect();
    let again = app.songs.clone();
    app.set_catalog(again);
    let after: Vec<String> = app.songs.iter().map(|s| s.title.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_open_sheet_and_wrap_around() {
    let mut app = create_test_app();
    app.set_catalog(vec![
        song("B Song", vec![paged_sheet("Solo", 3)]),
        song("A Song", vec![paged_sheet("Solo", 3)]),
    ]);

    // Open "A Song"'s first sheet (3 pages)
    let sheet = app.songs[0].albums[0].sheets[0].clone();
    app.open_sheet(&sheet);

    let ViewerState::Paged(ref mut pager) = app.viewer else {
        panic!("expected paged viewer");
    };
    assert_eq!(pager.page_index, 0);

    pager.next();
    pager.next();
    assert_eq!(pager.page_index, 2);
    pager.next();
    assert_eq!(pager.page_index, 0); // wrapped
}

#[test]
fn test_reopening_resets_page_index() {
    let mut app = create_test_app();
    let sheet = paged_sheet("Solo", 4);

    app.open_sheet(&sheet);
    if let ViewerState::Paged(ref mut pager) = app.viewer {
        pager.next();
        pager.next();
        assert_eq!(pager.page_index, 2);
    }
    app.close_viewer();
    assert!(!app.viewer.is_open());

    app.open_sheet(&sheet);
    let ViewerState::Paged(ref pager) = app.viewer else {
        panic!("expected paged viewer");
    };
    assert_eq!(pager.page_index, 0);
}

#[test]
fn test_stale_page_results_are_dropped() {
    let mut app = create_test_app();

    let first = app.open_sheet(&paged_sheet("Solo", 2));
    let stale_epoch = first.epoch;

    // User closes and opens something else before the load lands
    app.close_viewer();
    app.open_sheet(&scroll_sheet("Ensemble", 2));

    app.on_pages_loaded(stale_epoch, PagesState::Loaded(Vec::new()));
    let ViewerState::Scrolling(ref view) = app.viewer else {
        panic!("expected scroll viewer");
    };
    assert!(matches!(view.pages, PagesState::Loading));

    // The current epoch still lands
    app.on_pages_loaded(app.viewer_epoch, PagesState::Loaded(Vec::new()));
    let ViewerState::Scrolling(ref view) = app.viewer else {
        panic!("expected scroll viewer");
    };
    assert!(matches!(view.pages, PagesState::Loaded(_)));
}

#[tokio::test]
async fn test_space_toggles_scrolling_and_is_consumed() {
    let (tx, _rx) = mpsc::channel(8);
    let client = Client::new();

    let mut app = create_test_app();
    app.set_catalog(vec![song("A Song", vec![scroll_sheet("Solo", 2)])]);

    let sheet = app.songs[0].albums[0].sheets[0].clone();
    app.open_sheet(&sheet);
    app.on_pages_loaded(app.viewer_epoch, PagesState::Loaded(Vec::new()));

    let selected_before = app.selected;

    handle_input(key(' '), &mut app, &tx, &client);
    let ViewerState::Scrolling(ref view) = app.viewer else {
        panic!("expected scroll viewer");
    };
    assert!(view.engine.is_scrolling());

    handle_input(key(' '), &mut app, &tx, &client);
    let ViewerState::Scrolling(ref view) = app.viewer else {
        panic!("expected scroll viewer");
    };
    assert!(!view.engine.is_scrolling());

    // The key never fell through to catalog navigation
    assert_eq!(app.selected, selected_before);
}

#[tokio::test]
async fn test_tempo_edit_clamps_on_commit_only() {
    let (tx, _rx) = mpsc::channel(8);
    let client = Client::new();

    let mut app = create_test_app();
    app.open_sheet(&scroll_sheet("Solo", 1));

    // b opens the tempo popup, prefilled with the current tempo
    handle_input(key('b'), &mut app, &tx, &client);
    assert!(app.tempo_input.is_some());

    // Type an absurd value; nothing is clamped while typing
    if let Some(input) = app.tempo_input.as_mut() {
        input.value.clear();
    }
    for c in "9999".chars() {
        handle_input(key(c), &mut app, &tx, &client);
    }
    assert_eq!(app.tempo_input.as_ref().unwrap().value, "9999");

    // Enter commits and clamps
    handle_input(
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        &mut app,
        &tx,
        &client,
    );
    assert!(app.tempo_input.is_none());
    assert_eq!(app.current_tempo(), 320);

    // Too-low values clamp up to the floor
    handle_input(key('b'), &mut app, &tx, &client);
    if let Some(input) = app.tempo_input.as_mut() {
        input.value.clear();
    }
    for c in "10".chars() {
        handle_input(key(c), &mut app, &tx, &client);
    }
    handle_input(
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        &mut app,
        &tx,
        &client,
    );
    assert_eq!(app.current_tempo(), 40);

    // In-range values pass through untouched
    handle_input(key('b'), &mut app, &tx, &client);
    if let Some(input) = app.tempo_input.as_mut() {
        input.value.clear();
    }
    for c in "200".chars() {
        handle_input(key(c), &mut app, &tx, &client);
    }
    handle_input(
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        &mut app,
        &tx,
        &client,
    );
    assert_eq!(app.current_tempo(), 200);
}

#[test]
fn test_default_bpm_is_clamped() {
    let config = AppConfig {
        catalog: None,
        default_bpm: 9999,
    };
    let app = App::new(config);
    assert_eq!(app.default_bpm, 320);
}

#[test]
fn test_song_section_toggle() {
    let mut app = create_test_app();
    app.set_catalog(vec![
        song("A Song", vec![paged_sheet("Solo", 1)]),
        song("B Song", vec![paged_sheet("Solo", 1)]),
    ]);
    assert_eq!(app.visible_rows().len(), 3); // first song expanded

    app.toggle_expanded(0);
    assert_eq!(app.visible_rows().len(), 2);

    app.toggle_expanded(1);
    assert_eq!(app.visible_rows().len(), 3);
}
