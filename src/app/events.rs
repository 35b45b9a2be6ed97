use crate::catalog::model::Song;
use crate::viewer::pages::PagesState;
use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    /// The one-shot catalog load finished successfully.
    CatalogUpdate(Vec<Song>),
    /// Page images for the viewer opened at the given epoch.
    PagesLoaded(u64, PagesState),
    Tick,
}
