// Output module - terminal report and JSON export

pub mod json;
pub mod terminal;
