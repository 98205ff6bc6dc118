use crate::domain::AppError;
use crate::ports::SourceControl;
use git2::{DiffOptions, Repository};
use std::path::PathBuf;

/// Source-control adapter backed by libgit2.
#[derive(Debug, Clone)]
pub struct GitSourceControl {
    root: PathBuf,
}

impl GitSourceControl {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::open(&self.root).map_err(|e| AppError::SourceControl {
            operation: "git2::Repository::open".to_string(),
            details: e.to_string(),
        })
    }
}

impl SourceControl for GitSourceControl {
    fn list_changed(&self) -> Result<Vec<PathBuf>, AppError> {
        let repo = self.repo()?;
        let head_tree =
            repo.head().and_then(|h| h.peel_to_tree()).map_err(|e| AppError::SourceControl {
                operation: "git2::Repository::head".to_string(),
                details: e.to_string(),
            })?;

        let mut opts = DiffOptions::new();
        opts.include_untracked(true).recurse_untracked_dirs(true);

        let diff = repo
            .diff_tree_to_workdir_with_index(Some(&head_tree), Some(&mut opts))
            .map_err(|e| AppError::SourceControl {
                operation: "git2::Repository::diff_tree_to_workdir_with_index".to_string(),
                details: e.to_string(),
            })?;

        let mut changed = Vec::new();
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path() {
                changed.push(path.to_path_buf());
            }
        }
        Ok(changed)
    }

    fn current_revision(&self) -> Result<String, AppError> {
        let repo = self.repo()?;
        let object = repo.revparse_single("HEAD").map_err(|e| AppError::SourceControl {
            operation: "git2::Repository::revparse_single".to_string(),
            details: e.to_string(),
        })?;
        let short_id = object.short_id().map_err(|e| AppError::SourceControl {
            operation: "git2::Object::short_id".to_string(),
            details: e.to_string(),
        })?;

        match short_id.as_str() {
            Some(id) => Ok(id.to_string()),
            None => Ok(object.id().to_string()),
        }
    }
}
