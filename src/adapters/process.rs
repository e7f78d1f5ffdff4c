use crate::domain::model::{ChildCommand, ChildStatus};
use crate::domain::ports::ProcessRunner;
use crate::utils::error::{LauncherError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs children as real OS processes sharing the launcher's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, command: &ChildCommand) -> Result<ChildStatus> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| LauncherError::SpawnError {
                command: command.to_string(),
                source,
            })?;

        tracing::debug!("Child `{}` exited with {}", command, status);
        Ok(ChildStatus::from_code(status.code()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_exit_is_ok() {
        let command = ChildCommand::new("true", ".");
        let status = SystemProcessRunner.run(&command).await.unwrap();
        assert_eq!(status, ChildStatus::Ok);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_child_failure() {
        let command = ChildCommand::new("sh", ".").arg("-c").arg("exit 3");
        let status = SystemProcessRunner.run(&command).await.unwrap();
        assert_eq!(status, ChildStatus::ChildFailed { code: Some(3) });
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let command = ChildCommand::new("molecule-x-no-such-interpreter", ".").arg("src/train.py");
        let err = SystemProcessRunner.run(&command).await.unwrap_err();
        assert!(matches!(err, LauncherError::SpawnError { .. }));
        assert!(err
            .to_string()
            .contains("molecule-x-no-such-interpreter src/train.py"));
    }

    #[tokio::test]
    async fn test_runs_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), b"").unwrap();

        let command = ChildCommand::new("sh", dir.path())
            .arg("-c")
            .arg("test -f marker.txt");
        let status = SystemProcessRunner.run(&command).await.unwrap();
        assert_eq!(status, ChildStatus::Ok);
    }
}
