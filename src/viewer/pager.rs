use crate::viewer::pages::PagesState;

/// Paginated sheet view: one page image at a time with wrap-around
/// navigation. A fresh `Pager` always starts on page 0, so reopening a sheet
/// never inherits the previous visit's position.
pub struct Pager {
    /// Sheet variant label ("Solo", "Ensemble", ...), shown in the overlay.
    pub kind: String,
    pub sources: Vec<String>,
    pub pages: PagesState,
    pub page_index: usize,
}

impl Pager {
    pub fn new(kind: String, sources: Vec<String>) -> Self {
        Self {
            kind,
            sources,
            pages: PagesState::Loading,
            page_index: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.sources.len()
    }

    /// Advance with wrap-around. No-op for single-page sheets.
    pub fn next(&mut self) {
        let n = self.page_count();
        if n <= 1 {
            return;
        }
        self.page_index = (self.page_index + 1) % n;
    }

    /// Step back with wrap-around. No-op for single-page sheets.
    pub fn prev(&mut self) {
        let n = self.page_count();
        if n <= 1 {
            return;
        }
        self.page_index = (self.page_index + n - 1) % n;
    }

    /// "2 / 5" style indicator, 1-based like the printed page corner.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.page_index + 1, self.page_count())
    }
}
