use crate::app::App;
use crate::ui::layout::{self, SCROLL_PANEL_WIDTH};
use crate::ui::theme::Theme;
use crate::viewer::pager::Pager;
use crate::viewer::pages::PagesState;
use crate::viewer::scroll::ScrollView;
use crate::viewer::ViewerState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &mut App) {
    let overlay = layout::overlay_rect(f.area());
    if overlay.width < 6 || overlay.height < 5 {
        return;
    }

    let App {
        ref theme,
        ref mut viewer,
        ..
    } = *app;

    match viewer {
        ViewerState::Paged(pager) => render_paged(f, overlay, theme, pager),
        ViewerState::Scrolling(view) => render_scroll(f, overlay, theme, view),
        ViewerState::Closed => {}
    }
}

fn overlay_block<'a>(theme: &Theme, title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            title,
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(theme.base))
}

fn render_paged(f: &mut Frame, overlay: Rect, theme: &Theme, pager: &Pager) {
    f.render_widget(Clear, overlay);
    let block = overlay_block(theme, format!(" {} ", pager.kind));
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav header
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Page canvas
        ])
        .split(inner);

    // Navigation dims out for single-page sheets
    let nav_style = if pager.page_count() > 1 {
        Style::default().fg(theme.cyan)
    } else {
        Style::default().fg(theme.overlay).add_modifier(Modifier::DIM)
    };
    let header = Line::from(vec![
        Span::styled("← h ", nav_style),
        Span::styled(
            format!("▏ {} ▕", pager.indicator()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" l →", nav_style),
    ]);
    f.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        chunks[0],
    );

    let canvas = chunks[2];
    match &pager.pages {
        PagesState::Loading => render_notice(f, canvas, theme, "Loading pages…"),
        PagesState::Failed(msg) => render_notice(f, canvas, theme, &format!("⚠ {msg}")),
        PagesState::Loaded(pages) => {
            if let Some(page) = pages.get(pager.page_index) {
                // Center the page vertically in the canvas
                let pad = (canvas.height as usize).saturating_sub(page.rows.len()) / 2;
                let mut lines: Vec<Line> = vec![Line::raw(""); pad];
                lines.extend(page.rows.iter().cloned());
                f.render_widget(
                    Paragraph::new(lines).alignment(Alignment::Center),
                    canvas,
                );
            }
        }
    }
}

fn render_scroll(f: &mut Frame, overlay: Rect, theme: &Theme, view: &mut ScrollView) {
    f.render_widget(Clear, overlay);
    let block = overlay_block(theme, format!(" {} ", view.kind));
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                     // Sheet viewport
            Constraint::Length(SCROLL_PANEL_WIDTH), // Controls
        ])
        .split(inner);

    let viewport = chunks[0];
    view.viewport_rows = viewport.height as usize;

    match &view.pages {
        PagesState::Loading => render_notice(f, viewport, theme, "Loading sheet…"),
        PagesState::Failed(msg) => render_notice(f, viewport, theme, &format!("⚠ {msg}")),
        PagesState::Loaded(pages) => {
            let visible: Vec<Line> = pages
                .iter()
                .flat_map(|p| p.rows.iter())
                .skip(view.offset)
                .take(viewport.height as usize)
                .cloned()
                .collect();
            f.render_widget(
                Paragraph::new(visible).alignment(Alignment::Center),
                viewport,
            );
        }
    }

    render_panel(f, chunks[1], theme, view);
}

fn render_panel(f: &mut Frame, area: Rect, theme: &Theme, view: &ScrollView) {
    let (state_dot, state_label, state_color) = if view.engine.is_scrolling() {
        ("●", "Playing", theme.green)
    } else {
        ("○", "Stopped", theme.overlay)
    };

    let key = |k: &str| {
        Span::styled(
            format!(" {k} "),
            Style::default()
                .fg(theme.yellow)
                .add_modifier(Modifier::BOLD),
        )
    };
    let label = |t: &str| Span::styled(t.to_string(), Style::default().fg(theme.overlay));

    let lines: Vec<Line> = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "  BPM",
            Style::default().fg(theme.overlay),
        )),
        Line::from(Span::styled(
            format!("  {}", view.engine.tempo()),
            Style::default()
                .fg(theme.yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("  {state_dot} "), Style::default().fg(state_color)),
            Span::styled(
                state_label,
                Style::default()
                    .fg(state_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "  ".to_string() + &"─".repeat((area.width as usize).saturating_sub(4)),
            Style::default().fg(theme.surface),
        )),
        Line::from(vec![key("␣"), label("start/stop")]),
        Line::from(vec![key("b"), label("set tempo")]),
        Line::from(vec![key("+/-"), label("nudge")]),
        Line::from(vec![key("r"), label("back to top")]),
        Line::from(vec![key("esc"), label("close")]),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn render_notice(f: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let pad = (area.height as usize).saturating_sub(1) / 2;
    let mut lines: Vec<Line> = vec![Line::raw(""); pad];
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.overlay),
    )));
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
