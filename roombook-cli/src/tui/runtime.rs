//! Terminal bootstrap and the message-driven event loop.
//!
//! Async work never blocks the loop: the search task delivers its result as a
//! message over an unbounded channel, drained between draws.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::api::FloorsClient;
use crate::config::Config;
use crate::tui::apps::room_search::{self, Flow, Focus, Msg, State};

/// Keyboard poll timeout between channel drains.
const TICK: Duration = Duration::from_millis(50);

pub async fn run(config: Config) -> Result<()> {
    let client = FloorsClient::new(config.api_base_url);
    let (tx, rx) = mpsc::unbounded_channel();
    let mut state = State::new(tx);

    // Initial load: one automatic search with default filters, equivalent to
    // "show all rooms across all floors".
    room_search::start_search(&mut state, &client);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state, &client, rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut State,
    client: &FloorsClient,
    mut rx: mpsc::UnboundedReceiver<Msg>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| room_search::render(frame, state))?;

        while let Ok(msg) = rx.try_recv() {
            if room_search::update(state, client, msg) == Flow::Exit {
                return Ok(());
            }
        }

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(msg) = map_key(state, key.code, key.modifiers) {
                    if room_search::update(state, client, msg) == Flow::Exit {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn map_key(state: &State, code: KeyCode, modifiers: KeyModifiers) -> Option<Msg> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Msg::Quit);
    }
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Tab => Some(Msg::FocusNext),
        KeyCode::BackTab => Some(Msg::FocusPrev),
        KeyCode::Enter => Some(Msg::SearchRequested),
        KeyCode::Char(' ') => Some(Msg::ToggleFocused),
        KeyCode::Char(c) if c.is_ascii_digit() && state.focus == Focus::Seats => {
            Some(Msg::SeatsInput(code))
        }
        KeyCode::Backspace if state.focus == Focus::Seats => Some(Msg::SeatsInput(code)),
        KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
            Some(Msg::ResultsScroll(code))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> State {
        let (tx, _rx) = mpsc::unbounded_channel();
        State::new(tx)
    }

    #[test]
    fn digits_route_to_the_seats_field_only_when_focused() {
        let mut state = make_state();
        assert!(matches!(
            map_key(&state, KeyCode::Char('5'), KeyModifiers::NONE),
            Some(Msg::SeatsInput(KeyCode::Char('5')))
        ));

        state.focus = Focus::Projector;
        assert!(map_key(&state, KeyCode::Char('5'), KeyModifiers::NONE).is_none());
    }

    #[test]
    fn enter_always_requests_a_search() {
        let mut state = make_state();
        state.focus = Focus::Results;
        assert!(matches!(
            map_key(&state, KeyCode::Enter, KeyModifiers::NONE),
            Some(Msg::SearchRequested)
        ));
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let state = make_state();
        assert!(matches!(
            map_key(&state, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Msg::Quit)
        ));
        assert!(matches!(
            map_key(&state, KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Msg::Quit)
        ));
    }
}
