//! Document selection for batch runs.

use std::path::Path;

use walkdir::WalkDir;

use crate::domain::{CandidateDocument, SelectionOrigin};
use crate::ports::SourceControl;

/// Suffix a candidate document's file name must carry.
const MARKDOWN_SUFFIX: &str = ".md";

/// Changed paths containing this substring are never selected.
const EXCLUDED_PATH_MARKER: &str = "prompt";

/// Recursively collect every Markdown file under `root`.
///
/// Unreadable entries are skipped with a warning; a missing root yields an
/// empty selection.
pub fn scan_markdown_files(root: &Path) -> Vec<CandidateDocument> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            documents.push(CandidateDocument::new(
                entry.path(),
                SelectionOrigin::DirectoryScan,
            ));
        }
    }
    documents
}

/// Collect the Markdown files reported as changed since the last commit,
/// excluding any path containing the reserved marker.
///
/// A root that is not under source control yields an empty selection and a
/// warning, not an error.
pub fn changed_markdown_files<S: SourceControl>(
    source_control: &S,
    root: &Path,
) -> Vec<CandidateDocument> {
    let changed = match source_control.list_changed() {
        Ok(changed) => changed,
        Err(e) => {
            tracing::warn!(
                root = %root.display(),
                error = %e,
                "Source control unavailable; selecting nothing"
            );
            return Vec::new();
        }
    };

    changed
        .into_iter()
        .filter(|path| is_selectable_change(path))
        .map(|path| CandidateDocument::new(root.join(path), SelectionOrigin::CommitDiff))
        .collect()
}

/// Revision id for the batch, when source control can supply one.
pub fn head_revision<S: SourceControl>(source_control: &S) -> Option<String> {
    match source_control.current_revision() {
        Ok(revision) => Some(revision),
        Err(e) => {
            tracing::warn!(error = %e, "Could not resolve the current revision");
            None
        }
    }
}

fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(MARKDOWN_SUFFIX))
}

fn is_selectable_change(path: &Path) -> bool {
    is_markdown(path) && !path.to_string_lossy().contains(EXCLUDED_PATH_MARKER)
}
