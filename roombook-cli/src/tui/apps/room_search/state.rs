//! State for the room search view.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::api::{FilterCriteria, Floor};
use crate::tui::widgets::NumericInputField;

use super::msg::Msg;

/// Focusable elements of the filter form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Seats,
    Projector,
    Whiteboard,
    SpeakerSystem,
    SearchButton,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Seats => Focus::Projector,
            Focus::Projector => Focus::Whiteboard,
            Focus::Whiteboard => Focus::SpeakerSystem,
            Focus::SpeakerSystem => Focus::SearchButton,
            Focus::SearchButton => Focus::Results,
            Focus::Results => Focus::Seats,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Seats => Focus::Results,
            Focus::Projector => Focus::Seats,
            Focus::Whiteboard => Focus::Projector,
            Focus::SpeakerSystem => Focus::Whiteboard,
            Focus::SearchButton => Focus::SpeakerSystem,
            Focus::Results => Focus::SearchButton,
        }
    }
}

/// What the results area should show; derived from the rest of the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsDisplay {
    /// Never searched: prompt the user to apply filters
    Prompt,
    /// Searched, zero results
    NoRooms,
    /// One card per room
    Rooms,
}

pub struct State {
    // Filter form
    pub seats_input: NumericInputField,
    pub projector: bool,
    pub whiteboard: bool,
    pub speaker_system: bool,
    pub focus: Focus,

    /// Floors from the last successful search; empty floors already dropped.
    /// Replaced wholesale, never merged.
    pub floors: Vec<Floor>,
    /// Distinguishes "never searched" from "searched, zero results".
    pub search_attempted: bool,
    /// Failure reason for the error banner; cleared when a search starts.
    pub last_error: Option<String>,
    pub searching: bool,

    /// Cursor into the flattened room card list.
    pub results_offset: usize,

    pub(super) msg_tx: UnboundedSender<Msg>,
    pub(super) search_seq: u64,
    pub(super) search_task: Option<JoinHandle<()>>,
}

impl State {
    pub fn new(msg_tx: UnboundedSender<Msg>) -> Self {
        Self {
            seats_input: NumericInputField::new(),
            projector: false,
            whiteboard: false,
            speaker_system: false,
            focus: Focus::Seats,
            floors: Vec::new(),
            search_attempted: false,
            last_error: None,
            searching: false,
            results_offset: 0,
            msg_tx,
            search_seq: 0,
            search_task: None,
        }
    }

    /// Current filters as sent to the backend.
    pub fn filters(&self) -> FilterCriteria {
        FilterCriteria {
            min_seats: self.seats_input.parsed(),
            projector: self.projector,
            whiteboard: self.whiteboard,
            speaker_system: self.speaker_system,
        }
    }

    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|floor| floor.rooms.len()).sum()
    }

    pub fn results_display(&self) -> ResultsDisplay {
        if !self.floors.is_empty() {
            ResultsDisplay::Rooms
        } else if self.search_attempted {
            ResultsDisplay::NoRooms
        } else {
            ResultsDisplay::Prompt
        }
    }
}
