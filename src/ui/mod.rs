pub mod layout;
pub mod theme;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.area = (area.width, area.height);

    // 1. Layout
    let main_layout = layout::get_main_layout(area);

    // 2. Catalog list
    widgets::catalog::render(f, main_layout.body_area, app);

    // 3. Footer hint (hidden while the help popup is up)
    if !app.show_keyhints {
        use ratatui::layout::Alignment;
        use ratatui::style::{Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::Paragraph;

        let theme = &app.theme;
        let hint = Line::from(vec![
            Span::styled(
                " ? ",
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("keys", Style::default().fg(theme.overlay)),
        ]);
        let footer = Paragraph::new(hint).alignment(Alignment::Right);
        f.render_widget(footer, main_layout.footer_area);
    }

    // 4. Sheet viewer overlay
    if app.viewer.is_open() {
        widgets::viewer::render(f, app);
    }

    // 5. Popups on top of everything
    widgets::popups::render(f, app);
}
