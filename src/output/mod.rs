//! Terminal output formatting
//!
//! Console presenter and pretty-printing helpers.

pub mod display;
pub mod formatters;

pub use display::ConsolePresenter;
