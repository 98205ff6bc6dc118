use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::{pipeline, select};
use crate::domain::{AppError, BatchReport, DeliveryConfig};
use crate::ports::{Mailer, Renderer};

/// Execute the scan command: deliver every Markdown document under `root`.
pub fn execute<R, M>(
    ctx: &AppContext<R, M>,
    config: &DeliveryConfig,
    root: &Path,
) -> Result<BatchReport, AppError>
where
    R: Renderer,
    M: Mailer,
{
    let documents = select::scan_markdown_files(root);
    tracing::info!(
        root = %root.display(),
        count = documents.len(),
        "Selected documents by directory scan"
    );
    pipeline::run_batch(ctx, config, documents, None)
}
