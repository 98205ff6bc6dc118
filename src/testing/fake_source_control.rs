use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::SourceControl;

/// Source-control fake scripted with a fixed change set, or unavailable.
pub struct FakeSourceControl {
    changed: Option<Vec<PathBuf>>,
    revision: Option<String>,
}

impl FakeSourceControl {
    pub fn with_changes(paths: &[&str], revision: &str) -> Self {
        Self {
            changed: Some(paths.iter().map(PathBuf::from).collect()),
            revision: Some(revision.to_string()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            changed: None,
            revision: None,
        }
    }
}

impl SourceControl for FakeSourceControl {
    fn list_changed(&self) -> Result<Vec<PathBuf>, AppError> {
        self.changed.clone().ok_or_else(|| AppError::SourceControl {
            operation: "list_changed".into(),
            details: "scripted failure".into(),
        })
    }

    fn current_revision(&self) -> Result<String, AppError> {
        self.revision.clone().ok_or_else(|| AppError::SourceControl {
            operation: "current_revision".into(),
            details: "scripted failure".into(),
        })
    }
}
