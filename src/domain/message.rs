//! Outbound message value and subject formatting.

use chrono::{DateTime, Local};

/// A composed message ready for dispatch.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    /// Sender identity (the configured account).
    pub from: String,
    /// Recipient address (the configured Kindle address).
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Base filename presented for the attachment.
    pub attachment_name: String,
    /// Raw artifact bytes.
    pub attachment: Vec<u8>,
}

/// Format the delivery subject for a title, an optional revision id, and a
/// timestamp.
pub fn subject_line(title: &str, revision: Option<&str>, at: DateTime<Local>) -> String {
    let mut subject = format!(
        "New EPUB \"{}\" for Your Kindle ({})",
        title,
        at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(revision) = revision {
        subject.push_str(&format!(" [Commit: {revision}]"));
    }
    subject
}
