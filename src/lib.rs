//! mdkindle: convert Markdown documents to EPUB and deliver them to a Kindle
//! address over SMTP.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::git_source_control::GitSourceControl;
use adapters::pandoc_renderer::PandocRenderer;
use adapters::smtp_mailer::SmtpMailer;
use app::{
    AppContext,
    commands::{self, changed, scan, send},
};

pub use domain::{
    AppError, BatchReport, CleanupOutcome, DeliveryConfig, DeliveryOutcome, DocumentReport,
};

/// Create an `AppContext` wired to the real external services.
fn create_context(config: &DeliveryConfig) -> AppContext<PandocRenderer, SmtpMailer> {
    AppContext::new(PandocRenderer::new(), SmtpMailer::from_config(config))
}

/// Convert a single document and send it to the configured Kindle address.
///
/// The argument must name an existing file; this is the one selection that
/// fails fast instead of degrading to an empty batch.
pub fn send_document(config_path: &Path, document: &Path) -> Result<DocumentReport, AppError> {
    let config = DeliveryConfig::load(config_path)?;
    let ctx = create_context(&config);
    send::execute(&ctx, &config, document)
}

/// Convert and send every Markdown document under `directory`, or under the
/// configured `md_directory` when no directory is given.
pub fn send_tree(config_path: &Path, directory: Option<&Path>) -> Result<BatchReport, AppError> {
    let config = DeliveryConfig::load(config_path)?;
    let root = commands::resolve_root(&config, directory);
    let ctx = create_context(&config);
    scan::execute(&ctx, &config, &root)
}

/// Convert and send the Markdown documents that changed since the last
/// commit in `directory`, or in the configured `md_directory`.
///
/// A directory that is not under source control yields an empty report, not
/// an error.
pub fn send_changed(config_path: &Path, directory: Option<&Path>) -> Result<BatchReport, AppError> {
    let config = DeliveryConfig::load(config_path)?;
    let root = commands::resolve_root(&config, directory);
    let ctx = create_context(&config);
    let source_control = GitSourceControl::new(&root);
    changed::execute(&ctx, &source_control, &config, &root)
}
