use crate::app::events::AppEvent;
use crate::app::{App, CatalogRow, TempoInput};
use crate::viewer::{pages, ViewerState};
use crossterm::event::{KeyCode, KeyEvent};
use reqwest::Client;
use tokio::sync::mpsc;

/// The one stable key handler. Input falls through in priority order:
/// tempo popup, help overlay, open viewer, catalog list. Whatever the
/// viewer consumes (the space key above all) never reaches the list below
/// it.
pub fn handle_input(key: KeyEvent, app: &mut App, tx: &mpsc::Sender<AppEvent>, client: &Client) {
    // Tempo popup captures all input while open
    if app.tempo_input.is_some() {
        match key.code {
            // Enter commits, Esc is the blur analogue; the deferred clamp
            // runs in both cases.
            KeyCode::Enter | KeyCode::Esc => {
                if let Some(input) = app.tempo_input.take() {
                    let tempo = input.commit(app.current_tempo());
                    app.apply_tempo(tempo);
                    app.show_toast(&format!("♩ BPM: {tempo}"));
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = app.tempo_input.as_mut() {
                    input.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = app.tempo_input.as_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    // Close the help overlay first, Neovim-style
    if app.show_keyhints {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
        ) {
            app.show_keyhints = false;
            return;
        }
    }

    if app.viewer.is_open() {
        handle_viewer_key(key, app);
        return;
    }

    handle_catalog_key(key, app, tx, client);
}

fn handle_viewer_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_viewer();
            return;
        }
        KeyCode::Char('?') => {
            app.show_keyhints = !app.show_keyhints;
            return;
        }
        _ => {}
    }

    let mut toast: Option<String> = None;
    match &mut app.viewer {
        ViewerState::Paged(pager) => match key.code {
            KeyCode::Left | KeyCode::Char('h') => pager.prev(),
            KeyCode::Right | KeyCode::Char('l') => pager.next(),
            _ => {}
        },
        ViewerState::Scrolling(view) => match key.code {
            // Toggle from anywhere while the viewer is up; consumed here so
            // it never doubles as a list action.
            KeyCode::Char(' ') => view.toggle(),
            KeyCode::Char('r') => {
                view.reset();
                toast = Some("↺ Back to top".to_string());
            }
            KeyCode::Char('b') => {
                app.tempo_input = Some(TempoInput::new(view.engine.tempo()));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                view.engine.nudge_tempo(1);
                toast = Some(format!("♩ BPM: {}", view.engine.tempo()));
            }
            KeyCode::Char('-') => {
                view.engine.nudge_tempo(-1);
                toast = Some(format!("♩ BPM: {}", view.engine.tempo()));
            }
            _ => {}
        },
        ViewerState::Closed => {}
    }
    if let Some(msg) = toast {
        app.show_toast(&msg);
    }
}

fn handle_catalog_key(key: KeyEvent, app: &mut App, tx: &mpsc::Sender<AppEvent>, client: &Client) {
    match key.code {
        KeyCode::Char('q') => {
            app.is_running = false;
        }
        KeyCode::Char('?') => {
            app.show_keyhints = !app.show_keyhints;
        }
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.button_left(),
        KeyCode::Right | KeyCode::Char('l') => app.button_right(),
        KeyCode::Enter => activate_row(app, tx, client),
        _ => {}
    }
}

fn activate_row(app: &mut App, tx: &mpsc::Sender<AppEvent>, client: &Client) {
    match app.selected_row() {
        Some(CatalogRow::Song(i)) => app.toggle_expanded(i),
        Some(CatalogRow::Album { song, album }) => {
            let Some(album_data) = app.songs.get(song).and_then(|s| s.albums.get(album)) else {
                return;
            };

            if app.button_col < album_data.sheets.len() {
                let sheet = album_data.sheets[app.button_col].clone();
                let req = app.open_sheet(&sheet);
                pages::spawn_load(client.clone(), tx.clone(), req);
            } else {
                // Video link button: hand the URL to the system browser
                let url = album_data.youtube.clone();
                match open::that_detached(&url) {
                    Ok(_) => app.show_toast("▶ Opening video"),
                    Err(e) => {
                        tracing::warn!("could not open {}: {}", url, e);
                        app.show_toast("❌ Could not open video");
                    }
                }
            }
        }
        None => {}
    }
}
