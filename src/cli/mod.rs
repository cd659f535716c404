//! Terminal front end: line-editing shell, commands, and a terminal view.

mod commands;
pub mod output;
mod registry;
mod shell;
mod shell_context;
pub mod terminal_view;

pub use shell::{run_cli, SCRIPT_ENV};
pub use shell_context::{CliMode, CommandError};
