//! Update logic for the room search view.

use crossterm::event::KeyCode;
use log::{debug, error, info};

use crate::api::{Floor, FloorsClient};

use super::msg::Msg;
use super::state::{Focus, State};

/// Outcome of an update step, consumed by the runtime loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn update(state: &mut State, client: &FloorsClient, msg: Msg) -> Flow {
    match msg {
        Msg::FocusNext => {
            state.focus = state.focus.next();
            Flow::Continue
        }
        Msg::FocusPrev => {
            state.focus = state.focus.prev();
            Flow::Continue
        }
        Msg::ToggleFocused => {
            match state.focus {
                Focus::Projector => state.projector = !state.projector,
                Focus::Whiteboard => state.whiteboard = !state.whiteboard,
                Focus::SpeakerSystem => state.speaker_system = !state.speaker_system,
                _ => {}
            }
            Flow::Continue
        }
        Msg::SeatsInput(key) => {
            state.seats_input.handle_key(key);
            Flow::Continue
        }
        Msg::SearchRequested => {
            start_search(state, client);
            Flow::Continue
        }
        Msg::SearchCompleted(seq, result) => {
            apply_search_result(state, seq, result);
            Flow::Continue
        }
        Msg::ResultsScroll(key) => {
            scroll_results(state, key);
            Flow::Continue
        }
        Msg::Quit => Flow::Exit,
    }
}

/// Spawn the search task, cancelling any still-pending one so only the most
/// recently requested search can ever apply.
pub fn start_search(state: &mut State, client: &FloorsClient) {
    if let Some(task) = state.search_task.take() {
        task.abort();
    }
    state.search_seq += 1;
    state.searching = true;
    state.last_error = None;

    let seq = state.search_seq;
    let filters = state.filters();
    let client = client.clone();
    let tx = state.msg_tx.clone();

    debug!("search #{seq} with params {:?}", filters.query_params());

    state.search_task = Some(tokio::spawn(async move {
        let result = client
            .search_floors(&filters)
            .await
            .map_err(|err| format!("{err:#}"));
        // Send failing means the loop already shut down.
        let _ = tx.send(Msg::SearchCompleted(seq, result));
    }));
}

fn apply_search_result(state: &mut State, seq: u64, result: Result<Vec<Floor>, String>) {
    if seq != state.search_seq {
        debug!(
            "dropping stale search result #{seq} (current is #{})",
            state.search_seq
        );
        return;
    }
    state.searching = false;
    state.search_task = None;

    match result {
        Ok(floors) => {
            let total = floors.len();
            let floors: Vec<Floor> = floors
                .into_iter()
                .filter(|floor| !floor.rooms.is_empty())
                .collect();
            info!("search #{seq}: {} of {total} floors have rooms", floors.len());
            state.floors = floors;
            state.search_attempted = true;
            state.results_offset = 0;
        }
        Err(err) => {
            // Prior results and the attempted flag stay untouched.
            error!("search #{seq} failed: {err}");
            state.last_error = Some(err);
        }
    }
}

fn scroll_results(state: &mut State, key: KeyCode) {
    let last = state.room_count().saturating_sub(1);
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            state.results_offset = state.results_offset.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.results_offset = (state.results_offset + 1).min(last);
        }
        _ => {}
    }
}
