//! The room search view: a filter form, one asynchronous floors fetch, and a
//! list of room cards.

pub mod app;
pub mod msg;
pub mod state;
pub mod view;

pub use app::{Flow, start_search, update};
pub use msg::Msg;
pub use state::{Focus, ResultsDisplay, State};
pub use view::render;
