use crate::domain::AppError;
use std::path::PathBuf;

/// Source-control queries scoped to one working directory.
pub trait SourceControl {
    /// Paths, relative to the working directory, that differ from the
    /// current checked-out revision. Includes files not yet tracked.
    fn list_changed(&self) -> Result<Vec<PathBuf>, AppError>;

    /// Short identifier of the current checked-out revision.
    fn current_revision(&self) -> Result<String, AppError>;
}
