use std::path::Path;

use anyhow::Context as _;
use thiserror::Error;

/// Reasons the roster refuses a new entry
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("Fencer name cannot be empty")]
    EmptyName,
    #[error("A fencer named '{0}' already exists")]
    DuplicateName(String),
    #[error("Unknown fencer: {0}")]
    UnknownFencer(String),
    #[error("Fencer 1 and Fencer 2 cannot be the same person")]
    SameFencer,
    #[error("Scores cannot be tied, one fencer must win")]
    TiedScore,
    #[error("Score {score} is above the maximum of {max}")]
    ScoreOutOfRange { score: u32, max: u32 },
}

/// Add context to store read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read store file: {}", path.display())
}

/// Add context to store write errors
pub fn write_context(path: &Path) -> String {
    format!("Failed to write store file: {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(path: &Path) -> String {
    format!("Failed to parse store file: {}", path.display())
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| read_context(path))
}

/// Wrap result with write context
pub fn with_write_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| write_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(path))
}
