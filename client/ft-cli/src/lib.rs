//! ft-cli library
//!
//! Terminal presentation layer for the FinTrack auth core.

pub mod app;
pub mod cli;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod logger;
pub mod terminal_navigator;
pub mod terminal_presenter;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
