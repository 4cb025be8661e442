pub mod fields;

pub use fields::NumericInputField;
