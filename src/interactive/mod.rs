//! Interactive TUI interface
//!
//! Live search: matches update as tiles and constraints are typed.

pub mod app;
mod rendering;

pub use app::{App, run_tui};
