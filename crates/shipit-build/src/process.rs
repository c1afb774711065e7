//! Shell step execution.

use std::path::Path;
use std::process::Stdio;

use shipit_core::{Error, Result};
use tokio::process::Command;
use tracing::info;

/// One fixed shell command in the build sequence.
#[derive(Debug, Clone)]
pub struct ShellStep {
    /// Script passed to `sh -c`.
    pub script: String,
    /// Human-readable description used in logs and errors.
    pub description: String,
}

impl ShellStep {
    pub fn new(script: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            description: description.into(),
        }
    }

    /// `npm install` — install the application's dependencies.
    pub fn npm_install() -> Self {
        Self::new("npm install", "install dependencies (npm install)")
    }

    /// `npm run generate` — build the static site.
    pub fn npm_generate() -> Self {
        Self::new("npm run generate", "build static site (npm run generate)")
    }
}

/// Run a shell step to completion in `project_dir`.
///
/// Stdio is inherited so build output streams to the terminal rather than
/// being captured. No retries, no timeout; a non-zero exit (or termination by
/// signal, reported as `code: None`) fails the step.
pub async fn run(project_dir: &Path, step: &ShellStep) -> Result<()> {
    info!(step = %step.description, script = %step.script, "running build step");

    let status = Command::new("sh")
        .arg("-c")
        .arg(&step.script)
        .current_dir(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await?;

    if !status.success() {
        return Err(Error::Build {
            command: step.description.clone(),
            code: status.code(),
        });
    }

    info!(step = %step.description, "build step succeeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_step() {
        let dir = tempfile::tempdir().unwrap();
        let step = ShellStep::new("true", "no-op");
        run(dir.path(), &step).await.unwrap();
    }

    #[tokio::test]
    async fn test_failing_step_reports_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let step = ShellStep::new("exit 3", "always fails");
        let err = run(dir.path(), &step).await.unwrap_err();
        match err {
            Error::Build { command, code } => {
                assert_eq!(command, "always fails");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_step_runs_in_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        let step = ShellStep::new("touch marker", "create marker");
        run(dir.path(), &step).await.unwrap();
        assert!(dir.path().join("marker").is_file());
    }
}
