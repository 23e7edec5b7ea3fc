pub mod cli;
pub mod error;
pub mod plot;
pub mod prompt;
pub mod tui;
pub mod widgets;
