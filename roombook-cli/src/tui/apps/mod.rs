pub mod room_search;
