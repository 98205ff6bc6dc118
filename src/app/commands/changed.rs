use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::{pipeline, select};
use crate::domain::{AppError, BatchReport, DeliveryConfig};
use crate::ports::{Mailer, Renderer, SourceControl};

/// Execute the changed command: deliver the Markdown documents that differ
/// from the last commit under `root`.
pub fn execute<R, M, S>(
    ctx: &AppContext<R, M>,
    source_control: &S,
    config: &DeliveryConfig,
    root: &Path,
) -> Result<BatchReport, AppError>
where
    R: Renderer,
    M: Mailer,
    S: SourceControl,
{
    let documents = select::changed_markdown_files(source_control, root);
    tracing::info!(
        root = %root.display(),
        count = documents.len(),
        "Selected documents by commit diff"
    );

    let revision = if documents.is_empty() {
        None
    } else {
        select::head_revision(source_control)
    };

    pipeline::run_batch(ctx, config, documents, revision)
}
