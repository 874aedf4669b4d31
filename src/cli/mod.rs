//! Interactive terminal front end.
//!
//! The menu loop in [`App`] only talks to the terminal through the
//! [`Console`] trait, so whole sessions can be scripted in tests.

pub mod app;
pub mod args;
pub mod console;
pub mod error;
pub mod menu;

pub use app::{App, export_once};
pub use args::Args;
pub use console::{Console, Terminal, Tone};
pub use error::AppError;
