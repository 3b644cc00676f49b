use std::path::PathBuf;

use crate::game::{InsertOutcome, Player};

/// Errors an agent can raise while choosing a column.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("board has no dimensions ({width}x{height})")]
    InvalidSnapshot { width: usize, height: usize },

    #[error("scripted agent ran out of moves after {played} columns")]
    ScriptExhausted { played: usize },

    #[error("no column can take another token")]
    NoLegalColumn,

    #[error("input closed before a column was chosen")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while running a game between two agents.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{seat} seat was given an agent playing {agent}")]
    ColorMismatch { seat: Player, agent: Player },

    #[error("{player} chose illegal column {column} ({reason:?})")]
    IllegalMove {
        player: Player,
        column: usize,
        reason: InsertOutcome,
    },

    #[error("game is already over")]
    GameOver,

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
