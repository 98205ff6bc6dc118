use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::pipeline;
use crate::domain::{
    AppError, CandidateDocument, DeliveryConfig, DocumentReport, SelectionOrigin,
};
use crate::ports::{Mailer, Renderer};

/// Execute the send command: deliver a single named document.
///
/// Unlike batch selection, an argument that does not name an existing file
/// is an error.
pub fn execute<R, M>(
    ctx: &AppContext<R, M>,
    config: &DeliveryConfig,
    document: &Path,
) -> Result<DocumentReport, AppError>
where
    R: Renderer,
    M: Mailer,
{
    if !document.is_file() {
        return Err(AppError::DocumentNotFound(document.display().to_string()));
    }

    let stylesheet = pipeline::prepare_output(config)?;
    let candidate = CandidateDocument::new(document, SelectionOrigin::Argument);
    Ok(pipeline::deliver(ctx, config, &candidate, &stylesheet, None))
}
