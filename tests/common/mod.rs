//! Shared testing utilities for mdkindle CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// The generated configuration points the SMTP relay at an unroutable local
/// port, so delivery always fails fast without touching the network.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the configuration file inside the work directory.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("config.json")
    }

    /// Directory the default configuration selects documents from.
    pub fn docs_dir(&self) -> PathBuf {
        self.work_dir.join("docs")
    }

    /// Directory the default configuration writes artifacts into.
    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("output")
    }

    /// Write a complete configuration with an unroutable SMTP relay.
    pub fn write_config(&self) -> PathBuf {
        fs::create_dir_all(self.docs_dir()).expect("Failed to create docs directory");
        let config = serde_json::json!({
            "smtp_server": "127.0.0.1",
            "smtp_port": 1,
            "smtp_user": "sender@example.com",
            "smtp_password": "secret",
            "kindle_email": "reader@kindle.example",
            "md_directory": self.docs_dir(),
            "output_directory": self.output_dir(),
        });
        self.write_config_raw(
            &serde_json::to_string_pretty(&config).expect("Failed to serialize config"),
        )
    }

    /// Write arbitrary configuration file content.
    pub fn write_config_raw(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Write a Markdown document under the docs directory.
    pub fn write_document(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.docs_dir().join(relative);
        fs::create_dir_all(path.parent().expect("document path has no parent"))
            .expect("Failed to create document directory");
        fs::write(&path, content).expect("Failed to write document");
        path
    }

    /// Build a command for invoking the compiled `mdkindle` binary within the
    /// work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mdkindle").expect("Failed to locate mdkindle binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Assert that no EPUB artifacts remain in the output directory.
    pub fn assert_no_artifacts(&self) {
        let Ok(entries) = fs::read_dir(self.output_dir()) else {
            return;
        };
        for entry in entries {
            let path = entry.expect("Failed to read output entry").path();
            assert!(
                path.extension().is_none_or(|ext| ext != "epub"),
                "artifact left behind: {}",
                path.display()
            );
        }
    }

    /// Initialize a git repository at `dir` with a deterministic branch name.
    pub fn git_init(&self, dir: &Path) {
        let output = std::process::Command::new("git")
            .args(["init", "--initial-branch=main"])
            .current_dir(dir)
            .output()
            .expect("Failed to git init");
        assert!(
            output.status.success(),
            "git init failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let output = std::process::Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(dir)
            .output()
            .expect("Failed to configure git user.name");
        assert!(output.status.success());

        let output = std::process::Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(dir)
            .output()
            .expect("Failed to configure git user.email");
        assert!(output.status.success());
    }

    /// Stage and commit everything at `dir`.
    pub fn git_commit_all(&self, dir: &Path, message: &str) {
        let output = std::process::Command::new("git")
            .args(["add", "."])
            .current_dir(dir)
            .output()
            .expect("git add failed");
        assert!(
            output.status.success(),
            "git add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let output = std::process::Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(dir)
            .output()
            .expect("git commit failed");
        assert!(
            output.status.success(),
            "git commit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
