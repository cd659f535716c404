use std::result::Result as StdResult;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::ledger::EntryKind;

/// Failures reported by the ledger and its input boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount `{0}`: only whole units and up to two decimal places can be entered")]
    InvalidAmount(String),
    #[error("No {kind} entry with id {id}")]
    NotFound { kind: EntryKind, id: u64 },
    #[error("Enter both a description and an amount; the {0} is missing")]
    EmptyInput(&'static str),
    #[error("Unknown entry type `{0}`; expected `inc` or `exp`")]
    InvalidKind(String),
    #[error("Invalid item reference `{0}`")]
    InvalidItemRef(String),
}

pub type Result<T> = StdResult<T, LedgerError>;

/// Configuration loading and saving failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration format error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unable to locate a configuration directory")]
    NoConfigDir,
}

/// Top-level error for the terminal front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
