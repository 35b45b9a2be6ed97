use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the control panel beside the scroll viewport.
pub const SCROLL_PANEL_WIDTH: u16 = 20;

pub struct MainLayout {
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Footer keeps 1 line at the bottom always
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        body_area: chunks[0],
        footer_area: chunks[1],
    }
}

/// The viewer overlay: nearly full screen, with a small frame left around it
/// when the terminal is large enough.
pub fn overlay_rect(area: Rect) -> Rect {
    let margin_x = if area.width > 24 { 2 } else { 0 };
    let margin_y = if area.height > 12 { 1 } else { 0 };
    Rect::new(
        area.x + margin_x,
        area.y + margin_y,
        area.width.saturating_sub(margin_x * 2),
        area.height.saturating_sub(margin_y * 2),
    )
}

/// Cell box available for one page in the paginated viewer
/// (borders plus the navigation header take 2 columns and 4 rows).
pub fn paged_canvas_size(screen: Rect) -> (u16, u16) {
    let overlay = overlay_rect(screen);
    (
        overlay.width.saturating_sub(2),
        overlay.height.saturating_sub(4),
    )
}

/// Cell box available for the stacked pages in the scroll viewer
/// (borders plus the side panel).
pub fn scroll_canvas_size(screen: Rect) -> (u16, u16) {
    let overlay = overlay_rect(screen);
    (
        overlay.width.saturating_sub(2 + SCROLL_PANEL_WIDTH),
        overlay.height.saturating_sub(2),
    )
}
