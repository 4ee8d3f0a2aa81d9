use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Errors raised by the rule registry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    #[error("unknown rule: {0}")]
    UnknownRule(String),
    #[error("invalid options for {rule}: {reason}")]
    InvalidOptions { rule: String, reason: String },
    #[error("rule {0} is already registered with a different option shape")]
    ConflictingRegistration(String),
}

/// Errors raised while building layers or loading a layer list.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid layer {layer}: {reason}")]
    InvalidLayer { layer: String, reason: String },
    #[error("invalid rule setting for {rule}: {value}")]
    InvalidRuleSetting { rule: String, value: Value },
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("invalid entry #{index} in {path}: {reason}")]
    InvalidEntry {
        path: PathBuf,
        index: usize,
        reason: String,
    },
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("failed to parse {0}: {1}")]
    Json(PathBuf, #[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("File not found error: {0}")]
    FileNotFound(String),
    #[error("Illegal setting file error: {0}")]
    IllegalSettingFile(String),
    #[error("Invalid settings error: {0}")]
    InvalidSettings(String),
}
