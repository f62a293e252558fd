// components/video_downloader/src/runner.rs
use crate::command::YtDlpCommand;
use crate::types::{DownloadError, ProcessOutput};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::process::Stdio;
use tokio::process::Command;

#[async_trait]
pub trait CommandRunner {
    /// Check that the downloader binary can be found
    async fn check_available(&self, program: &OsStr) -> Result<(), DownloadError>;

    /// Run a command to completion, capturing its stdout. Stderr is passed through.
    async fn capture(&self, command: &YtDlpCommand) -> Result<ProcessOutput, DownloadError>;

    /// Run a command to completion with inherited stdio
    async fn run(&self, command: &YtDlpCommand) -> Result<ProcessOutput, DownloadError>;
}

/// Spawns real child processes
pub struct SystemRunner;

impl SystemRunner {
    fn command(command: &YtDlpCommand) -> Command {
        let mut cmd = Command::new(command.program());
        cmd.args(command.args());
        cmd
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn check_available(&self, program: &OsStr) -> Result<(), DownloadError> {
        which::which(program)
            .map(|path| tracing::debug!("Using downloader at {}", path.display()))
            .map_err(|_| DownloadError::DependencyNotFound(program.to_string_lossy().into_owned()))
    }

    async fn capture(&self, command: &YtDlpCommand) -> Result<ProcessOutput, DownloadError> {
        tracing::info!("Running {}", command);

        let output = Self::command(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| DownloadError::io(format!("running {command}"), e))?;

        tracing::info!("{} exited with {}", command.program().to_string_lossy(), output.status);

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: output.stdout,
        })
    }

    async fn run(&self, command: &YtDlpCommand) -> Result<ProcessOutput, DownloadError> {
        tracing::info!("Running {}", command);

        let status = Self::command(command)
            .status()
            .await
            .map_err(|e| DownloadError::io(format!("running {command}"), e))?;

        tracing::info!("{} exited with {}", command.program().to_string_lossy(), status);

        Ok(ProcessOutput {
            exit_code: status.code(),
            success: status.success(),
            stdout: Vec::new(),
        })
    }
}

#[cfg(test)]
pub mod stub {
    use super::*;
    use parking_lot::Mutex;

    /// Records every command and answers with a canned result
    pub struct RunnerStub {
        pub available: bool,
        pub output: ProcessOutput,
        pub commands: Mutex<Vec<YtDlpCommand>>,
    }

    impl RunnerStub {
        pub fn succeeding(stdout: &str) -> Self {
            Self::with_stdout(stdout.as_bytes().to_vec())
        }

        pub fn with_stdout(stdout: Vec<u8>) -> Self {
            Self {
                available: true,
                output: ProcessOutput {
                    exit_code: Some(0),
                    success: true,
                    stdout,
                },
                commands: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(exit_code: i32) -> Self {
            Self {
                available: true,
                output: ProcessOutput {
                    exit_code: Some(exit_code),
                    success: false,
                    stdout: Vec::new(),
                },
                commands: Mutex::new(Vec::new()),
            }
        }

        pub fn missing() -> Self {
            Self {
                available: false,
                ..Self::succeeding("")
            }
        }

        pub fn recorded(&self) -> Vec<YtDlpCommand> {
            self.commands.lock().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for RunnerStub {
        async fn check_available(&self, program: &OsStr) -> Result<(), DownloadError> {
            if self.available {
                Ok(())
            } else {
                Err(DownloadError::DependencyNotFound(program.to_string_lossy().into_owned()))
            }
        }

        async fn capture(&self, command: &YtDlpCommand) -> Result<ProcessOutput, DownloadError> {
            self.commands.lock().push(command.clone());
            Ok(self.output.clone())
        }

        async fn run(&self, command: &YtDlpCommand) -> Result<ProcessOutput, DownloadError> {
            self.commands.lock().push(command.clone());
            Ok(ProcessOutput {
                stdout: Vec::new(),
                ..self.output.clone()
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_missing_program() {
        let result = SystemRunner
            .check_available(OsStr::new("definitely-not-a-real-downloader-binary"))
            .await;
        assert_matches!(result, Err(DownloadError::DependencyNotFound(name)) if name == "definitely-not-a-real-downloader-binary");
    }

    #[tokio::test]
    async fn test_capture_stdout() {
        let command = YtDlpCommand::new("echo").arg("hello world");
        let output = SystemRunner.capture(&command).await.unwrap();

        assert!(output.success);
        assert_eq!(output.exit_code, Some(0));
        assert_eq!(String::from_utf8_lossy(&output.stdout), "hello world\n");
    }

    #[tokio::test]
    async fn test_run_reports_failure() {
        let output = SystemRunner.run(&YtDlpCommand::new("false")).await.unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, Some(1));
    }
}
