use crate::viewer::pages::PagesState;

pub const MIN_TEMPO: u16 = 40;
pub const MAX_TEMPO: u16 = 320;

/// Engine tick period in milliseconds. The app's tick task runs at this rate
/// and `on_tick` assumes it.
pub const TICK_MS: u64 = 10;

/// Cells advanced per tick = tempo / STEP_DIVISOR.
const STEP_DIVISOR: f64 = 800.0;

pub fn clamp_tempo(raw: i64) -> u16 {
    raw.clamp(MIN_TEMPO as i64, MAX_TEMPO as i64) as u16
}

/// Tempo-driven auto-scroll engine for hands-free sight-reading.
///
/// Each tick advances `tempo / 800` cells. At low tempos that is below one
/// cell, so the fractional part is carried between ticks and only the
/// integer part is applied; the average rate then converges to the requested
/// tempo even though every individual step is whole cells. The carry
/// survives stop/start on purpose — resuming continues the same sub-cell
/// cadence.
pub struct AutoScroll {
    tempo: u16,
    scrolling: bool,
    carry: f64,
}

impl AutoScroll {
    pub fn new(tempo: u16) -> Self {
        Self {
            tempo: clamp_tempo(tempo as i64),
            scrolling: false,
            carry: 0.0,
        }
    }

    pub fn tempo(&self) -> u16 {
        self.tempo
    }

    pub fn set_tempo(&mut self, raw: i64) {
        self.tempo = clamp_tempo(raw);
    }

    pub fn nudge_tempo(&mut self, delta: i64) {
        self.set_tempo(self.tempo as i64 + delta);
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn start(&mut self) {
        if self.scrolling {
            return;
        }
        self.scrolling = true;
    }

    /// Stops advancing. The carry is kept.
    pub fn stop(&mut self) {
        self.scrolling = false;
    }

    pub fn toggle(&mut self) {
        if self.scrolling {
            self.stop();
        } else {
            self.start();
        }
    }

    /// One fixed-rate tick: returns how many whole cells to advance now.
    pub fn on_tick(&mut self) -> usize {
        if !self.scrolling {
            return 0;
        }
        self.carry += self.tempo as f64 / STEP_DIVISOR;
        let step = self.carry as usize;
        self.carry -= step as f64;
        step
    }
}

/// Continuous-scroll view: stacked page images in a fixed-height viewport,
/// with the engine driving the offset.
pub struct ScrollView {
    /// Sheet variant label ("Solo", "Ensemble", ...), shown in the overlay.
    pub kind: String,
    pub sources: Vec<String>,
    pub pages: PagesState,
    pub engine: AutoScroll,
    /// Row offset into the stacked content.
    pub offset: usize,
    /// Viewport height in rows, refreshed by the renderer each frame.
    pub viewport_rows: usize,
}

impl ScrollView {
    pub fn new(kind: String, sources: Vec<String>, tempo: u16) -> Self {
        Self {
            kind,
            sources,
            pages: PagesState::Loading,
            engine: AutoScroll::new(tempo),
            offset: 0,
            viewport_rows: 0,
        }
    }

    pub fn content_rows(&self) -> usize {
        match &self.pages {
            PagesState::Loaded(pages) => pages.iter().map(|p| p.rows.len()).sum(),
            _ => 0,
        }
    }

    fn max_offset(&self) -> usize {
        self.content_rows()
            .saturating_sub(self.viewport_rows.max(1))
    }

    /// Space-key action. Starting is gated until the pages have arrived —
    /// there is nothing to scroll over before that.
    pub fn toggle(&mut self) {
        if self.engine.is_scrolling() {
            self.engine.stop();
        } else if matches!(self.pages, PagesState::Loaded(_)) {
            self.engine.start();
        }
    }

    /// Jump back to the top. Does not stop a running scroll.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn on_tick(&mut self) {
        let step = self.engine.on_tick();
        if step > 0 {
            self.offset = (self.offset + step).min(self.max_offset());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::pages::SheetPage;

    #[test]
    fn test_accumulator_converges() {
        // 97/800 per tick is far below one cell; the carry must keep the
        // average honest over many ticks.
        let mut engine = AutoScroll::new(97);
        engine.start();

        let ticks = 10_000;
        let total: usize = (0..ticks).map(|_| engine.on_tick()).sum();
        let expected = ticks as f64 * 97.0 / 800.0;
        assert!((total as f64 - expected).abs() <= 1.0);
    }

    #[test]
    fn test_low_tempo_steps_eventually() {
        // 50/800 = 0.0625, exactly representable, so tick counts are exact
        let mut engine = AutoScroll::new(50);
        engine.start();
        let first_15: usize = (0..15).map(|_| engine.on_tick()).sum();
        assert_eq!(first_15, 0);
        assert_eq!(engine.on_tick(), 1); // 16th tick crosses 1.0
    }

    #[test]
    fn test_stop_preserves_carry() {
        let mut engine = AutoScroll::new(50);
        engine.start();
        for _ in 0..8 {
            engine.on_tick(); // carry now 0.5
        }
        engine.stop();
        assert_eq!(engine.on_tick(), 0); // stopped: no advance
        engine.start();
        for _ in 0..7 {
            engine.on_tick();
        }
        // 0.5 carried over + 8 * 0.0625 = 1.0 on the eighth resumed tick
        assert_eq!(engine.on_tick(), 1);
    }

    #[test]
    fn test_tempo_clamped_on_set() {
        let mut engine = AutoScroll::new(120);
        engine.set_tempo(10);
        assert_eq!(engine.tempo(), MIN_TEMPO);
        engine.set_tempo(9999);
        assert_eq!(engine.tempo(), MAX_TEMPO);
        engine.set_tempo(200);
        assert_eq!(engine.tempo(), 200);
    }

    #[test]
    fn test_start_gated_until_loaded() {
        let mut view = ScrollView::new("Solo".to_string(), vec!["a.svg".into()], 120);
        view.toggle();
        assert!(!view.engine.is_scrolling());

        view.pages = PagesState::Loaded(vec![SheetPage { rows: Vec::new() }]);
        view.toggle();
        assert!(view.engine.is_scrolling());
        view.toggle();
        assert!(!view.engine.is_scrolling());
    }

    #[test]
    fn test_reset_keeps_engine_running() {
        let mut view = ScrollView::new("Solo".to_string(), vec!["a.svg".into()], 320);
        view.pages = PagesState::Loaded(vec![SheetPage {
            rows: vec![ratatui::text::Line::raw(""); 500],
        }]);
        view.viewport_rows = 40;
        view.toggle();
        for _ in 0..100 {
            view.on_tick();
        }
        assert!(view.offset > 0);
        view.reset();
        assert_eq!(view.offset, 0);
        assert!(view.engine.is_scrolling());
    }

    #[test]
    fn test_offset_clamped_to_content() {
        let mut view = ScrollView::new("Solo".to_string(), vec!["a.svg".into()], 320);
        view.pages = PagesState::Loaded(vec![SheetPage {
            rows: vec![ratatui::text::Line::raw(""); 50],
        }]);
        view.viewport_rows = 40;
        view.toggle();
        for _ in 0..10_000 {
            view.on_tick();
        }
        assert_eq!(view.offset, 10);
        // Engine keeps running against the bottom edge
        assert!(view.engine.is_scrolling());
    }
}
