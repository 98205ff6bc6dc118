use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Renderer;

/// Arguments recorded for one render call.
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub title: String,
    pub stylesheet: Option<PathBuf>,
}

/// Renderer fake that writes a stub artifact, or fails on demand.
#[derive(Default)]
pub struct FakeRenderer {
    pub calls: Mutex<Vec<RenderCall>>,
    fail: bool,
}

impl FakeRenderer {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Renderer for FakeRenderer {
    fn render(
        &self,
        source: &Path,
        destination: &Path,
        title: &str,
        stylesheet: Option<&Path>,
    ) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(RenderCall {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            title: title.to_string(),
            stylesheet: stylesheet.map(Path::to_path_buf),
        });

        if self.fail {
            return Err(AppError::ExternalTool {
                tool: "pandoc".into(),
                details: "scripted failure".into(),
            });
        }
        fs::write(destination, b"fake epub bytes")?;
        Ok(())
    }
}
