pub mod pager;
pub mod pages;
pub mod scroll;

use pager::Pager;
use scroll::ScrollView;

/// The sheet viewer overlay, modeled as an explicit state machine instead of
/// leaning on any modal primitive. `Closed` carries nothing; opening a sheet
/// always builds a fresh sub-state, so page index and scroll position reset
/// on every open.
pub enum ViewerState {
    Closed,
    Paged(Pager),
    Scrolling(ScrollView),
}

impl ViewerState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ViewerState::Closed)
    }
}
