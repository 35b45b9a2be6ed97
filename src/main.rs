use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use human_panic::setup_panic;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

use segno::app::cli::Args;
use segno::app::config::AppConfig;
use segno::app::events::AppEvent;
use segno::app::input_handler::handle_input;
use segno::app::App;
use segno::catalog::loader;
use segno::ui;
use segno::viewer::scroll;

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic!();

    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default().to_toml_string());
        return Ok(());
    }

    // File logger — the terminal itself belongs to the UI
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("segno");
    std::fs::create_dir_all(&log_dir).ok();
    let appender = tracing_appender::rolling::never(&log_dir, "segno.log");
    let (writer, _log_guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut config = AppConfig::load();
    if let Some(bpm) = args.bpm {
        config.default_bpm = scroll::clamp_tempo(bpm as i64);
    }
    let catalog_source = args
        .catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .unwrap_or_else(|| "catalog.json".to_string());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let (tx, mut rx) = mpsc::channel(100);

    // Shared HTTP client (catalog document + page images)
    let client = reqwest::Client::builder()
        .user_agent(concat!("segno/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default();

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. One-shot catalog load 📜
    loader::spawn_load(client.clone(), catalog_source, tx.clone());

    // 3. Tick Task — the only repeating timer; drives the auto-scroll
    //    engine and toast expiry
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(scroll::TICK_MS));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    loop {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        if let Some(event) = rx.recv().await {
            match event {
                AppEvent::Input(Event::Key(key)) => {
                    handle_input(key, &mut app, &tx, &client);
                }
                AppEvent::Input(_) => {}
                AppEvent::CatalogUpdate(songs) => app.set_catalog(songs),
                AppEvent::PagesLoaded(epoch, state) => app.on_pages_loaded(epoch, state),
                AppEvent::Tick => app.on_tick(),
            }
        }

        if !app.is_running {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
