//! HTTP interface to the RoomBook backend.
//!
//! One endpoint matters here: `GET /floors`, a list-and-filter call returning
//! floors with their nested rooms. Query construction lives in [`query`],
//! wire shapes in [`models`], the reqwest wrapper in [`client`].

pub mod client;
pub mod models;
pub mod query;

pub use client::FloorsClient;
pub use models::{Floor, Room};
pub use query::FilterCriteria;
