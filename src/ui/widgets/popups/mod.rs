use crate::app::App;
use ratatui::Frame;

pub mod help;
pub mod tempo;
pub mod toast;

pub fn render(f: &mut Frame, app: &mut App) {
    // TOAST NOTIFICATION
    if app.toast.is_some() {
        toast::render(f, app);
    }

    // TEMPO INPUT POPUP
    if app.tempo_input.is_some() {
        tempo::render(f, app);
    }

    // KEYHINTS POPUP
    if app.show_keyhints {
        help::render(f, app);
    }
}
