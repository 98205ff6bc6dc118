use std::io;

use thiserror::Error;

/// Application-level errors for mdkindle operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file missing at the expected path.
    #[error("Configuration file not found: {0}")]
    ConfigMissing(String),

    /// Configuration file exists but could not be read.
    #[error("Failed to read configuration '{path}': {details}")]
    ConfigRead { path: String, details: String },

    /// Configuration file is not valid JSON.
    #[error("Failed to parse configuration '{path}': {details}")]
    ConfigParse { path: String, details: String },

    /// Configuration is readable but incomplete; every violation is listed.
    #[error("Invalid configuration: {}", .violations.join("; "))]
    ConfigInvalid { violations: Vec<String> },

    /// Document argument does not name an existing file.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// External tool invocation failed.
    #[error("{tool} error: {details}")]
    ExternalTool { tool: String, details: String },

    /// Message composition or SMTP dispatch failed.
    #[error("Mail delivery failed: {0}")]
    Mail(String),

    /// Source-control query failed.
    #[error("Source-control error during {operation}: {details}")]
    SourceControl { operation: String, details: String },
}
