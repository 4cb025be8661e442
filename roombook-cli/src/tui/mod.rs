pub mod apps;
pub mod runtime;
pub mod widgets;

pub use runtime::run;
