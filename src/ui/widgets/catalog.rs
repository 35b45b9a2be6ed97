use crate::app::{App, CatalogRow};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Transcriptions ",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let w = inner.width as usize;
    let h = inner.height as usize;
    if w == 0 || h == 0 {
        return;
    }

    let rows = app.visible_rows();
    if rows.is_empty() {
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                "  No transcriptions loaded",
                Style::default().fg(theme.overlay),
            )),
        ];
        f.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;

    for (idx, row) in rows.iter().enumerate() {
        let is_selected = idx == app.selected;
        if is_selected {
            selected_line = lines.len();
        }

        match *row {
            CatalogRow::Song(i) => {
                let song = &app.songs[i];
                let open = app.expanded.get(i).copied().unwrap_or(false);
                let marker = if open { "▾" } else { "▸" };
                let cursor = if is_selected { "❯" } else { " " };

                let title_style = if is_selected {
                    Style::default()
                        .fg(theme.yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
                };

                lines.push(Line::from(vec![
                    Span::styled(format!("{cursor} "), Style::default().fg(theme.yellow)),
                    Span::styled(format!("{marker} "), Style::default().fg(theme.overlay)),
                    Span::styled(truncate_to_width(&song.title, w.saturating_sub(4)), title_style),
                ]));
            }
            CatalogRow::Album { song, album } => {
                let album_data = &app.songs[song].albums[album];
                let cursor = if is_selected { "❯" } else { " " };

                // Button strip: one per sheet variant, then the video link
                let mut spans: Vec<Span> = vec![Span::styled(
                    format!("{cursor}   "),
                    Style::default().fg(theme.yellow),
                )];

                let mut buttons_width = 0usize;
                let mut buttons: Vec<Span> = Vec::new();
                for (b, sheet) in album_data.sheets.iter().enumerate() {
                    // Solo variants stand out from the rest
                    let color = if sheet.kind == "Solo" {
                        theme.magenta
                    } else {
                        theme.blue
                    };
                    let mut style = Style::default().fg(color);
                    if is_selected && app.button_col == b {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    let label = format!(" {} ", sheet.kind);
                    buttons_width += label.width() + 1;
                    buttons.push(Span::styled(label, style));
                    buttons.push(Span::raw(" "));
                }
                let mut yt_style = Style::default().fg(theme.red);
                if is_selected && app.button_col == album_data.sheets.len() {
                    yt_style = yt_style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                buttons_width += " YouTube ".len();
                buttons.push(Span::styled(" YouTube ", yt_style));

                let text_budget = w.saturating_sub(buttons_width + 7);
                let label = truncate_to_width(
                    &format!("{} · {}", album_data.name, album_data.artist),
                    text_budget,
                );
                let pad = text_budget.saturating_sub(label.width()) + 1;

                spans.push(Span::styled(label, Style::default().fg(theme.text)));
                spans.push(Span::raw(" ".repeat(pad)));
                spans.extend(buttons);
                lines.push(Line::from(spans));
            }
        }
    }

    // Keep the selection in view
    let start = if selected_line >= h {
        selected_line + 1 - h
    } else {
        0
    };
    let visible: Vec<Line> = lines.into_iter().skip(start).take(h).collect();

    f.render_widget(
        Paragraph::new(visible).block(Block::default().style(Style::default().bg(Color::Reset))),
        inner,
    );
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw + 1 > max {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}
