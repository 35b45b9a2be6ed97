use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;

    let width = 44.min(f.area().width.saturating_sub(4));
    let height = 14.min(f.area().height.saturating_sub(2));
    let x = (f.area().width.saturating_sub(width)) / 2;
    let y = (f.area().height.saturating_sub(height)) / 2;
    let area = Rect::new(x, y, width, height);

    f.render_widget(Clear, area);

    let section = |t: &str| {
        Line::from(Span::styled(
            format!(" {t}"),
            Style::default()
                .fg(theme.magenta)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let bind = |k: &str, action: &str| {
        Line::from(vec![
            Span::styled(
                format!("  {k:<7}"),
                Style::default()
                    .fg(theme.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(action.to_string(), Style::default().fg(theme.text)),
        ])
    };

    let lines: Vec<Line> = vec![
        Line::from(""),
        section("Catalog"),
        bind("j/k", "move · h/l pick a button"),
        bind("enter", "expand song / open sheet"),
        bind("q", "quit"),
        Line::from(""),
        section("Pages"),
        bind("h/l", "previous / next page"),
        Line::from(""),
        section("Auto-scroll"),
        bind("space", "start / stop"),
        bind("b", "tempo · +/- nudge · r top"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.magenta))
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(theme.magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(Color::Reset));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
