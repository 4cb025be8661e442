//! Rendering for the room search view. Pure function of state, no side
//! effects.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::api::{Floor, Room};

use super::state::{Focus, ResultsDisplay, State};

pub fn render(frame: &mut Frame, state: &State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // filter form
            Constraint::Length(1), // status line
            Constraint::Min(5),    // results
            Constraint::Length(1), // help
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_filter_form(frame, state, chunks[1]);
    render_status(frame, state, chunks[2]);
    render_results(frame, state, chunks[3]);
    render_help(frame, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("RoomBook — find a room")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn checkbox_span(label: &str, checked: bool, focused: bool) -> Span<'static> {
    let mark = if checked { "x" } else { " " };
    Span::styled(format!("[{mark}] {label}"), focus_style(focused))
}

fn render_filter_form(frame: &mut Frame, state: &State, area: Rect) {
    let seats_display = format!("Seats: [{:<4}]", state.seats_input.value());

    let line = Line::from(vec![
        Span::styled(seats_display, focus_style(state.focus == Focus::Seats)),
        Span::raw("  "),
        checkbox_span("Projector", state.projector, state.focus == Focus::Projector),
        Span::raw("  "),
        checkbox_span("Whiteboard", state.whiteboard, state.focus == Focus::Whiteboard),
        Span::raw("  "),
        checkbox_span(
            "Speaker System",
            state.speaker_system,
            state.focus == Focus::SpeakerSystem,
        ),
        Span::raw("  "),
        Span::styled("[ Search ]", focus_style(state.focus == Focus::SearchButton)),
    ]);

    let form = Paragraph::new(line).block(Block::default().title("Filters").borders(Borders::ALL));
    frame.render_widget(form, area);
}

fn render_status(frame: &mut Frame, state: &State, area: Rect) {
    let line = if let Some(err) = &state.last_error {
        Line::from(Span::styled(
            format!("Search failed: {err}"),
            Style::default().fg(Color::Red),
        ))
    } else if state.searching {
        Line::from(Span::styled("Searching...", Style::default().fg(Color::Gray)))
    } else if !state.floors.is_empty() {
        Line::from(Span::styled(
            format!(
                "{} room(s) across {} floor(s)",
                state.room_count(),
                state.floors.len()
            ),
            Style::default().fg(Color::Gray),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_results(frame: &mut Frame, state: &State, area: Rect) {
    let block = Block::default().title("Rooms").borders(Borders::ALL);

    match state.results_display() {
        ResultsDisplay::Prompt => {
            let prompt = Paragraph::new("Apply filters to get appropriate rooms.")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            frame.render_widget(prompt, area);
        }
        ResultsDisplay::NoRooms => {
            let empty = Paragraph::new("No rooms found with these filters.")
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(empty, area);
        }
        ResultsDisplay::Rooms => {
            let items: Vec<ListItem> = state
                .floors
                .iter()
                .flat_map(|floor| floor.rooms.iter().map(move |room| (floor, room)))
                .map(|(floor, room)| room_card(floor, room))
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::BOLD));

            let mut list_state = ListState::default();
            if state.focus == Focus::Results {
                list_state.select(Some(state.results_offset));
            }
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// One card per room, carrying its parent floor's id and number.
fn room_card<'a>(floor: &'a Floor, room: &'a Room) -> ListItem<'a> {
    let title = Line::from(Span::styled(
        format!("Room {} (ID: {})", room.room_name, room.room_number),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let lines = vec![
        title,
        Line::from(format!(
            "  Floor: {} (Floor Number: {})",
            floor.id, floor.floor_number
        )),
        Line::from(format!("  Seats: {}", room.seats)),
        Line::from(format!(
            "  Projector: {}   Whiteboard: {}   Speaker System: {}",
            yes_no(room.projector),
            yes_no(room.whiteboard),
            yes_no(room.speaker_system)
        )),
        Line::from(format!("  Booked: {}", yes_no(room.is_booked))),
        Line::default(),
    ];
    ListItem::new(lines)
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "[Tab] Focus  [Space] Toggle  [Enter] Search  [j/k] Scroll  [q] Quit",
    )
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}
