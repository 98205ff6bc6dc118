use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::Renderer;

/// Renderer backed by the `pandoc` binary.
#[derive(Debug, Clone, Default)]
pub struct PandocRenderer;

impl PandocRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for PandocRenderer {
    fn render(
        &self,
        source: &Path,
        destination: &Path,
        title: &str,
        stylesheet: Option<&Path>,
    ) -> Result<(), AppError> {
        let mut cmd = Command::new("pandoc");
        cmd.arg(source);
        cmd.arg("--to=epub");
        cmd.arg("-o").arg(destination);
        cmd.arg(format!("--metadata=title={title}"));
        if let Some(stylesheet) = stylesheet {
            let mut css = OsString::from("--css=");
            css.push(stylesheet);
            cmd.arg(css);
        }

        let output = cmd.output().map_err(|e| AppError::ExternalTool {
            tool: "pandoc".into(),
            details: format!("Failed to execute pandoc: {}", e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::ExternalTool {
                tool: "pandoc".into(),
                details: format!("pandoc conversion failed: {}", stderr.trim()),
            });
        }

        Ok(())
    }
}
