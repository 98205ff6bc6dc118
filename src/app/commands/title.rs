//! Document title extraction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Fallback title when no level-one heading is found.
pub const UNTITLED: &str = "Untitled";

/// Derive a display title from the first line beginning with `# `.
///
/// The title is cosmetic metadata: an unreadable document yields the
/// sentinel rather than an error, and subsequent headings are ignored.
pub fn extract_title(path: &Path) -> String {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(
                document = %path.display(),
                error = %e,
                "Could not open document for title extraction"
            );
            return UNTITLED.to_string();
        }
    };

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if let Some(rest) = line.strip_prefix("# ") {
            return rest.trim().to_string();
        }
    }

    UNTITLED.to_string()
}
