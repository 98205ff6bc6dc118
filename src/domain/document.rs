use std::path::PathBuf;

/// How a document entered the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    /// Named directly on the command line.
    Argument,
    /// Found by the recursive directory scan.
    DirectoryScan,
    /// Reported as changed by source control.
    CommitDiff,
}

/// A Markdown source selected for one pipeline pass.
#[derive(Debug, Clone)]
pub struct CandidateDocument {
    /// Path to the Markdown source.
    pub path: PathBuf,
    /// Discovery context, carried for logging.
    pub origin: SelectionOrigin,
}

impl CandidateDocument {
    pub fn new(path: impl Into<PathBuf>, origin: SelectionOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }
}
