//! Delivery configuration loading and validation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::error::AppError;

fn default_md_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("output")
}

/// Key set as it appears in the configuration file, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    smtp_server: Option<String>,
    smtp_port: Option<u16>,
    smtp_user: Option<String>,
    smtp_password: Option<String>,
    kindle_email: Option<String>,
    #[serde(default = "default_md_directory")]
    md_directory: PathBuf,
    #[serde(default = "default_output_directory")]
    output_directory: PathBuf,
    #[serde(default)]
    stylesheet: Option<PathBuf>,
}

/// Validated delivery settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// SMTP relay host.
    pub smtp_server: String,
    /// SMTP relay port.
    pub smtp_port: u16,
    /// Sender account, also the authentication identity.
    pub smtp_user: String,
    /// Password for the sender account.
    pub smtp_password: String,
    /// Kindle address that receives converted documents.
    pub kindle_email: String,
    /// Default root for batch selection.
    pub md_directory: PathBuf,
    /// Directory holding transient EPUB artifacts.
    pub output_directory: PathBuf,
    /// Custom stylesheet applied during conversion, if any.
    pub stylesheet: Option<PathBuf>,
}

impl DeliveryConfig {
    /// Load and validate the configuration at `path`.
    ///
    /// Missing required keys are collected and reported together rather than
    /// surfacing one at a time at point of use.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::ConfigMissing(path.display().to_string())
            } else {
                AppError::ConfigRead {
                    path: path.display().to_string(),
                    details: e.to_string(),
                }
            }
        })?;

        let raw: RawConfig =
            serde_json::from_str(&content).map_err(|e| AppError::ConfigParse {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self, AppError> {
        let mut violations = Vec::new();

        let smtp_server = require(raw.smtp_server, "smtp_server", &mut violations);
        let smtp_port = require(raw.smtp_port, "smtp_port", &mut violations);
        let smtp_user = require(raw.smtp_user, "smtp_user", &mut violations);
        let smtp_password = require(raw.smtp_password, "smtp_password", &mut violations);
        let kindle_email = require(raw.kindle_email, "kindle_email", &mut violations);

        match (smtp_server, smtp_port, smtp_user, smtp_password, kindle_email) {
            (
                Some(smtp_server),
                Some(smtp_port),
                Some(smtp_user),
                Some(smtp_password),
                Some(kindle_email),
            ) => Ok(Self {
                smtp_server,
                smtp_port,
                smtp_user,
                smtp_password,
                kindle_email,
                md_directory: raw.md_directory,
                output_directory: raw.output_directory,
                stylesheet: raw.stylesheet,
            }),
            _ => Err(AppError::ConfigInvalid { violations }),
        }
    }
}

fn require<T>(value: Option<T>, key: &str, violations: &mut Vec<String>) -> Option<T> {
    if value.is_none() {
        violations.push(format!("missing required key '{key}'"));
    }
    value
}
