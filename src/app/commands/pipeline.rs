//! Per-document delivery pipeline and the sequential batch loop.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::AppContext;
use crate::app::commands::title;
use crate::domain::{
    AppError, BatchReport, CandidateDocument, CleanupOutcome, DeliveryConfig, DeliveryOutcome,
    DocumentReport, OutboundEmail, subject_line,
};
use crate::ports::{Mailer, Renderer};

/// Stylesheet applied when the configuration names none.
const DEFAULT_STYLESHEET: &str = include_str!("epub-style.css");

/// Filename the embedded stylesheet is materialized under.
const STYLESHEET_FILENAME: &str = "epub-style.css";

/// Run the pipeline over `documents`, strictly in order.
///
/// A document failure is recorded in the report and never aborts the batch.
/// An empty selection is a valid terminal state and touches nothing on disk.
pub fn run_batch<R, M>(
    ctx: &AppContext<R, M>,
    config: &DeliveryConfig,
    documents: Vec<CandidateDocument>,
    revision: Option<String>,
) -> Result<BatchReport, AppError>
where
    R: Renderer,
    M: Mailer,
{
    if documents.is_empty() {
        tracing::info!("No Markdown documents selected; nothing to send");
        return Ok(BatchReport {
            revision,
            reports: Vec::new(),
        });
    }

    let stylesheet = prepare_output(config)?;

    let mut reports = Vec::with_capacity(documents.len());
    for document in &documents {
        reports.push(deliver(ctx, config, document, &stylesheet, revision.as_deref()));
    }

    Ok(BatchReport { revision, reports })
}

/// Create the output directory and resolve the stylesheet for this run.
///
/// When the configuration names no stylesheet, the embedded default is
/// written into the output directory. That copy is regenerated every run and
/// is not subject to artifact cleanup.
pub(crate) fn prepare_output(config: &DeliveryConfig) -> Result<PathBuf, AppError> {
    fs::create_dir_all(&config.output_directory)?;

    if let Some(stylesheet) = &config.stylesheet {
        return Ok(stylesheet.clone());
    }
    let path = config.output_directory.join(STYLESHEET_FILENAME);
    fs::write(&path, DEFAULT_STYLESHEET)?;
    Ok(path)
}

/// One pass of the per-document pipeline: extract title, render, send, then
/// attempt artifact cleanup regardless of what came before.
pub(crate) fn deliver<R, M>(
    ctx: &AppContext<R, M>,
    config: &DeliveryConfig,
    document: &CandidateDocument,
    stylesheet: &Path,
    revision: Option<&str>,
) -> DocumentReport
where
    R: Renderer,
    M: Mailer,
{
    let artifact = artifact_path(&config.output_directory, &document.path);
    let title = title::extract_title(&document.path);
    tracing::info!(
        document = %document.path.display(),
        origin = ?document.origin,
        title = %title,
        "Processing document"
    );

    let outcome = convert_and_send(ctx, config, document, &artifact, &title, stylesheet, revision);
    let cleanup = remove_artifact(&artifact);

    DocumentReport {
        document: document.path.clone(),
        title,
        outcome,
        cleanup,
    }
}

fn convert_and_send<R, M>(
    ctx: &AppContext<R, M>,
    config: &DeliveryConfig,
    document: &CandidateDocument,
    artifact: &Path,
    title: &str,
    stylesheet: &Path,
    revision: Option<&str>,
) -> DeliveryOutcome
where
    R: Renderer,
    M: Mailer,
{
    if let Err(e) = ctx
        .renderer()
        .render(&document.path, artifact, title, Some(stylesheet))
    {
        tracing::error!(
            document = %document.path.display(),
            error = %e,
            "Conversion failed; skipping delivery"
        );
        return DeliveryOutcome::RenderFailed(e.to_string());
    }
    tracing::debug!(artifact = %artifact.display(), "Converted document");

    let email = match compose(config, artifact, title, revision) {
        Ok(email) => email,
        Err(e) => {
            tracing::error!(
                artifact = %artifact.display(),
                error = %e,
                "Could not compose message"
            );
            return DeliveryOutcome::SendFailed(e.to_string());
        }
    };

    match ctx.mailer().send(&email) {
        Ok(()) => {
            tracing::info!(
                artifact = %artifact.display(),
                to = %config.kindle_email,
                "Sent artifact"
            );
            DeliveryOutcome::Delivered
        }
        Err(e) => {
            tracing::error!(
                artifact = %artifact.display(),
                to = %config.kindle_email,
                error = %e,
                "Delivery failed"
            );
            DeliveryOutcome::SendFailed(e.to_string())
        }
    }
}

/// Destination for the converted artifact: the document stem with an `.epub`
/// extension, under the output directory.
fn artifact_path(output_directory: &Path, document: &Path) -> PathBuf {
    let mut name = PathBuf::from(document.file_name().unwrap_or(OsStr::new("document")));
    name.set_extension("epub");
    output_directory.join(name)
}

fn compose(
    config: &DeliveryConfig,
    artifact: &Path,
    title: &str,
    revision: Option<&str>,
) -> Result<OutboundEmail, AppError> {
    let attachment = fs::read(artifact)?;
    let attachment_name = artifact
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.epub".to_string());

    Ok(OutboundEmail {
        from: config.smtp_user.clone(),
        to: config.kindle_email.clone(),
        subject: subject_line(title, revision, Local::now()),
        attachment_name,
        attachment,
    })
}

/// Remove the artifact after the pass. Failures are logged, not retried; a
/// missing artifact (e.g. after a conversion failure) is not a failure.
fn remove_artifact(artifact: &Path) -> CleanupOutcome {
    match fs::remove_file(artifact) {
        Ok(()) => {
            tracing::debug!(artifact = %artifact.display(), "Removed artifact");
            CleanupOutcome::Removed
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => CleanupOutcome::NothingToRemove,
        Err(e) => {
            tracing::error!(
                artifact = %artifact.display(),
                error = %e,
                "Failed to remove artifact"
            );
            CleanupOutcome::Failed(e.to_string())
        }
    }
}
