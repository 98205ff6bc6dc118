use crate::domain::AppError;
use std::path::Path;

/// Rendering service that synthesizes an EPUB from a Markdown source.
pub trait Renderer {
    /// Render `source` to an EPUB at `destination`, embedding `title` as
    /// document metadata and applying `stylesheet` when given.
    fn render(
        &self,
        source: &Path,
        destination: &Path,
        title: &str,
        stylesheet: Option<&Path>,
    ) -> Result<(), AppError>;
}
