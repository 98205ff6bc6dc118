pub mod changed;
pub mod pipeline;
pub mod scan;
pub mod select;
pub mod send;
pub mod title;

use std::path::{Path, PathBuf};

use crate::domain::DeliveryConfig;

/// The directory a batch operates on: the argument when it names an existing
/// directory, otherwise the configured `md_directory`.
pub fn resolve_root(config: &DeliveryConfig, directory: Option<&Path>) -> PathBuf {
    match directory {
        Some(dir) if dir.is_dir() => dir.to_path_buf(),
        Some(dir) => {
            tracing::warn!(
                directory = %dir.display(),
                "Not a directory; falling back to the configured md_directory"
            );
            config.md_directory.clone()
        }
        None => config.md_directory.clone(),
    }
}
