use crate::app::config::AppConfig;
use crate::catalog::model::{self, Sheet, Song};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::viewer::pager::Pager;
use crate::viewer::pages::{LoadRequest, PageFit, PagesState};
use crate::viewer::scroll::{clamp_tempo, ScrollView};
use crate::viewer::ViewerState;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// One selectable row of the flattened catalog list 📜
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogRow {
    Song(usize),
    Album { song: usize, album: usize },
}

/// Tempo input popup state. The buffer takes whatever integer text the user
/// types; the clamp to the valid range happens only in `commit`, when the
/// edit ends.
#[derive(Debug, Clone)]
pub struct TempoInput {
    pub value: String,
}

impl TempoInput {
    pub fn new(current: u16) -> Self {
        Self {
            value: current.to_string(),
        }
    }

    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '-' && self.value.is_empty()) {
            self.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Deferred validation: parse and clamp now, not per keystroke.
    /// Text that isn't an integer leaves the tempo unchanged.
    pub fn commit(&self, fallback: u16) -> u16 {
        match self.value.trim().parse::<i64>() {
            Ok(v) => clamp_tempo(v),
            Err(_) => fallback,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub deadline: Instant,
}

pub struct App {
    pub theme: Theme,
    pub is_running: bool,

    /// Catalog, sorted by title on receipt.
    pub songs: Vec<Song>,
    /// Per-song section state, parallel to `songs`.
    pub expanded: Vec<bool>,
    /// Selected row in the flattened list.
    pub selected: usize,
    /// Selected button within an album row (sheets, then the video link).
    pub button_col: usize,

    /// Sheet viewer overlay FSM.
    pub viewer: ViewerState,
    /// Bumped on every open/close; page loads for older epochs are stale.
    pub viewer_epoch: u64,

    pub tempo_input: Option<TempoInput>,
    pub default_bpm: u16,

    pub show_keyhints: bool,
    pub toast: Option<Toast>,

    /// Last drawn terminal size, kept for sizing page decodes.
    pub area: (u16, u16),
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            theme: crate::ui::theme::load_current_theme(),
            is_running: true,
            songs: Vec::new(),
            expanded: Vec::new(),
            selected: 0,
            button_col: 0,
            viewer: ViewerState::Closed,
            viewer_epoch: 0,
            tempo_input: None,
            default_bpm: clamp_tempo(config.default_bpm as i64),
            show_keyhints: false,
            toast: None,
            area: (80, 24),
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Catalog list
    // ═══════════════════════════════════════════════════════════════

    /// Install the loaded catalog: sort by title, expand the first section.
    pub fn set_catalog(&mut self, mut songs: Vec<Song>) {
        model::sort_by_title(&mut songs);
        self.expanded = vec![false; songs.len()];
        if let Some(first) = self.expanded.first_mut() {
            *first = true;
        }
        self.songs = songs;
        self.selected = 0;
        self.button_col = 0;
    }

    pub fn visible_rows(&self) -> Vec<CatalogRow> {
        let mut rows = Vec::new();
        for (i, song) in self.songs.iter().enumerate() {
            rows.push(CatalogRow::Song(i));
            if self.expanded.get(i).copied().unwrap_or(false) {
                for j in 0..song.albums.len() {
                    rows.push(CatalogRow::Album { song: i, album: j });
                }
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<CatalogRow> {
        self.visible_rows().get(self.selected).copied()
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.button_col = 0;
    }

    pub fn select_next(&mut self) {
        let max = self.visible_rows().len();
        if self.selected + 1 < max {
            self.selected += 1;
            self.button_col = 0;
        }
    }

    /// Buttons on a row: one per sheet variant plus the video link.
    pub fn button_count(&self, row: CatalogRow) -> usize {
        match row {
            CatalogRow::Song(_) => 0,
            CatalogRow::Album { song, album } => self
                .songs
                .get(song)
                .and_then(|s| s.albums.get(album))
                .map(|a| a.sheets.len() + 1)
                .unwrap_or(0),
        }
    }

    pub fn button_left(&mut self) {
        self.button_col = self.button_col.saturating_sub(1);
    }

    pub fn button_right(&mut self) {
        if let Some(row) = self.selected_row() {
            let count = self.button_count(row);
            if self.button_col + 1 < count {
                self.button_col += 1;
            }
        }
    }

    pub fn toggle_expanded(&mut self, song: usize) {
        if let Some(flag) = self.expanded.get_mut(song) {
            *flag = !*flag;
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Sheet viewer
    // ═══════════════════════════════════════════════════════════════

    /// Open the viewer for a sheet. Paged sheets start on page 0, scroll
    /// sheets at the top with the default tempo; either way the previous
    /// viewer state is gone. Returns the page-load job for the caller to
    /// spawn.
    pub fn open_sheet(&mut self, sheet: &Sheet) -> LoadRequest {
        self.viewer_epoch += 1;
        let sources = sheet.pages().to_vec();
        let screen = Rect::new(0, 0, self.area.0, self.area.1);

        let (fit, cols, rows) = if sheet.is_continuous() {
            let (cols, rows) = layout::scroll_canvas_size(screen);
            self.viewer = ViewerState::Scrolling(ScrollView::new(
                sheet.kind.clone(),
                sources.clone(),
                self.default_bpm,
            ));
            (PageFit::Width, cols, rows)
        } else {
            let (cols, rows) = layout::paged_canvas_size(screen);
            self.viewer = ViewerState::Paged(Pager::new(sheet.kind.clone(), sources.clone()));
            (PageFit::Window, cols, rows)
        };

        LoadRequest {
            epoch: self.viewer_epoch,
            sources,
            fit,
            cols,
            rows,
        }
    }

    /// Dismiss the overlay and drop all viewer state. The epoch bump makes
    /// any in-flight page load stale.
    pub fn close_viewer(&mut self) {
        self.viewer = ViewerState::Closed;
        self.viewer_epoch += 1;
    }

    /// Deliver finished page loads; results from a viewer that is no longer
    /// the current one are discarded untouched.
    pub fn on_pages_loaded(&mut self, epoch: u64, state: PagesState) {
        if epoch != self.viewer_epoch {
            tracing::debug!("dropping stale page load (epoch {epoch})");
            return;
        }
        match &mut self.viewer {
            ViewerState::Paged(pager) => pager.pages = state,
            ViewerState::Scrolling(view) => view.pages = state,
            ViewerState::Closed => {}
        }
    }

    /// Tempo of the open scroll view, or the configured default.
    pub fn current_tempo(&self) -> u16 {
        match &self.viewer {
            ViewerState::Scrolling(view) => view.engine.tempo(),
            _ => self.default_bpm,
        }
    }

    pub fn apply_tempo(&mut self, tempo: u16) {
        if let ViewerState::Scrolling(view) = &mut self.viewer {
            view.engine.set_tempo(tempo as i64);
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Ticking & feedback
    // ═══════════════════════════════════════════════════════════════

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            deadline: Instant::now() + Duration::from_millis(2000),
        });
    }

    /// Fixed 10ms tick: expire the toast, step the auto-scroll.
    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.deadline {
                self.toast = None;
            }
        }
        if let ViewerState::Scrolling(view) = &mut self.viewer {
            view.on_tick();
        }
    }
}
