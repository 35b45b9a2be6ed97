use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, app: &App) {
    if let Some(ref toast) = app.toast {
        let theme = &app.theme;

        // Expiry is handled in App::on_tick()
        let width = (toast.message.width() as u16 + 6).min(f.area().width.saturating_sub(4));
        let height = 3;
        let x = f.area().width.saturating_sub(width + 1); // Top-right fixed
        let area = Rect::new(x, 1, width, height).intersection(f.area());
        if area.is_empty() {
            return;
        }

        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .style(Style::default().bg(Color::Reset));

        let style = Style::default().fg(theme.blue).add_modifier(Modifier::BOLD);
        let text = Paragraph::new(Line::from(Span::styled(toast.message.as_str(), style)))
            .alignment(Alignment::Center)
            .block(block);

        f.render_widget(text, area);
    }
}
