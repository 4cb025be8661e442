//! Messages for the room search view.

use crossterm::event::KeyCode;

use crate::api::Floor;

#[derive(Debug, Clone)]
pub enum Msg {
    /// Move focus to the next form element
    FocusNext,
    /// Move focus to the previous form element
    FocusPrev,
    /// Toggle the focused checkbox (no-op on anything else)
    ToggleFocused,
    /// Key routed to the seats input field
    SeatsInput(KeyCode),
    /// Run a search with the current filters
    SearchRequested,
    /// A search task finished; the sequence number guards against stale results
    SearchCompleted(u64, Result<Vec<Floor>, String>),
    /// Scroll the result list
    ResultsScroll(KeyCode),
    /// Leave the application
    Quit,
}
