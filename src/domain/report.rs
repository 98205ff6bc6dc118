//! Per-document and per-batch outcome values.
//!
//! The pipeline never aborts a batch on a document failure; it records what
//! happened and moves on. These types carry that record to callers.

use std::path::PathBuf;

/// Result of the convert-and-send stages for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Converted and accepted by the mail relay.
    Delivered,
    /// Conversion failed; delivery was skipped.
    RenderFailed(String),
    /// Conversion succeeded but composition or dispatch failed.
    SendFailed(String),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Result of the artifact removal attempt for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// Artifact existed and was removed.
    Removed,
    /// No artifact existed at the destination.
    NothingToRemove,
    /// Removal failed; not retried.
    Failed(String),
}

/// Everything recorded for one document pass.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    /// The Markdown source that was processed.
    pub document: PathBuf,
    /// Extracted title, or the sentinel.
    pub title: String,
    pub outcome: DeliveryOutcome,
    pub cleanup: CleanupOutcome,
}

/// Aggregated outcomes of one batch invocation.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Revision id attached to the batch, when source control supplied one.
    pub revision: Option<String>,
    pub reports: Vec<DocumentReport>,
}

impl BatchReport {
    pub fn delivered_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.outcome.is_delivered())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
