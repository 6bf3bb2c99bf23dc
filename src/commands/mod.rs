//! Command implementations

pub mod play;

pub use play::{ConsoleInput, run_play};
