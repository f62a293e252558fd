// components/video_downloader/src/dispatcher.rs
use crate::command::{YtDlpCommand, DEFAULT_PROGRAM};
use crate::format::{is_playlist_url, select_format, validate_url};
use crate::runner::{CommandRunner, SystemRunner};
use crate::types::{DownloadError, InvocationRequest, Mode, Outcome};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A planned unit of work, ready to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    FetchQualities {
        command: YtDlpCommand,
        metadata_path: PathBuf,
    },
    DownloadVideo {
        command: YtDlpCommand,
        save_path: PathBuf,
    },
    DownloadPlaylist {
        command: YtDlpCommand,
        save_path: PathBuf,
    },
}

impl Job {
    pub fn command(&self) -> &YtDlpCommand {
        match self {
            Job::FetchQualities { command, .. }
            | Job::DownloadVideo { command, .. }
            | Job::DownloadPlaylist { command, .. } => command,
        }
    }
}

pub struct Dispatcher {
    program: OsString,
    runner: Arc<dyn CommandRunner + Send + Sync>,
}

impl Dispatcher {
    /// Create a dispatcher that runs `yt-dlp` from the search path
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_PROGRAM, Arc::new(SystemRunner))
    }

    /// Create a dispatcher for a specific downloader binary and runner
    pub fn with_runner(
        program: impl Into<OsString>,
        runner: Arc<dyn CommandRunner + Send + Sync>,
    ) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Decide what a request should do, without running anything
    pub fn plan(&self, request: &InvocationRequest) -> Result<Job, DownloadError> {
        match request.mode {
            Mode::Fetch => self.plan_fetch(&request.url, &request.metadata_path),
            Mode::Download if is_playlist_url(&request.url) => {
                self.plan_playlist(&request.url, &request.save_path)
            }
            Mode::Download => self.plan_video(
                &request.url,
                &request.save_path,
                request.is_audio,
                request.quality.as_deref(),
            ),
        }
    }

    pub fn plan_fetch(&self, url: &str, metadata_path: &Path) -> Result<Job, DownloadError> {
        validate_url(url)?;
        Ok(Job::FetchQualities {
            command: YtDlpCommand::fetch_metadata(self.program.clone(), url),
            metadata_path: metadata_path.to_owned(),
        })
    }

    pub fn plan_video(
        &self,
        url: &str,
        save_path: &Path,
        is_audio: bool,
        quality: Option<&str>,
    ) -> Result<Job, DownloadError> {
        validate_url(url)?;
        let format = select_format(is_audio, quality);
        tracing::debug!("Selected format {} for {}", format, url);

        Ok(Job::DownloadVideo {
            command: YtDlpCommand::download_single(self.program.clone(), url, save_path, &format),
            save_path: save_path.to_owned(),
        })
    }

    pub fn plan_playlist(&self, url: &str, save_path: &Path) -> Result<Job, DownloadError> {
        validate_url(url)?;
        Ok(Job::DownloadPlaylist {
            command: YtDlpCommand::download_playlist(self.program.clone(), url, save_path),
            save_path: save_path.to_owned(),
        })
    }

    /// Run a planned job to completion
    pub async fn execute(&self, job: &Job) -> Result<Outcome, DownloadError> {
        self.runner.check_available(&self.program).await?;

        match job {
            Job::FetchQualities {
                command,
                metadata_path,
            } => self.run_fetch(command, metadata_path).await,
            Job::DownloadVideo { command, save_path } => {
                ensure_directory(save_path).await?;
                let output = self.runner.run(command).await?;
                if !output.success {
                    return Err(DownloadError::DownloadFailed(exit_description(output.exit_code)));
                }
                Ok(Outcome::Downloaded {
                    save_path: save_path.clone(),
                })
            }
            Job::DownloadPlaylist { command, save_path } => {
                ensure_directory(save_path).await?;
                let output = self.runner.run(command).await?;
                if !output.success {
                    return Err(DownloadError::PlaylistFailed(exit_description(output.exit_code)));
                }
                Ok(Outcome::PlaylistDownloaded {
                    save_path: save_path.clone(),
                })
            }
        }
    }

    async fn run_fetch(
        &self,
        command: &YtDlpCommand,
        metadata_path: &Path,
    ) -> Result<Outcome, DownloadError> {
        let output = self.runner.capture(command).await?;

        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            return Err(DownloadError::EmptyMetadata(command.to_string()));
        }
        if !output.success {
            tracing::warn!(
                "{} exited with {} but produced output",
                command,
                exit_description(output.exit_code)
            );
        }

        // The file gets the bytes exactly as emitted; only the echo is decoded
        tokio::fs::write(metadata_path, &output.stdout)
            .await
            .map_err(|e| DownloadError::io(format!("writing {}", metadata_path.display()), e))?;

        Ok(Outcome::Fetched {
            metadata: String::from_utf8_lossy(&output.stdout).into_owned(),
            path: metadata_path.to_owned(),
        })
    }

    /// Fetch metadata for `url` and write it to `metadata_path`
    pub async fn fetch_qualities(
        &self,
        url: &str,
        metadata_path: &Path,
    ) -> Result<Outcome, DownloadError> {
        self.execute(&self.plan_fetch(url, metadata_path)?).await
    }

    /// Download a single video into `save_path`
    pub async fn download_video(
        &self,
        url: &str,
        save_path: &Path,
        is_audio: bool,
        quality: Option<&str>,
    ) -> Result<Outcome, DownloadError> {
        self.execute(&self.plan_video(url, save_path, is_audio, quality)?)
            .await
    }

    /// Download every entry of a playlist into `save_path/<playlist title>`
    pub async fn download_playlist(
        &self,
        url: &str,
        save_path: &Path,
    ) -> Result<Outcome, DownloadError> {
        self.execute(&self.plan_playlist(url, save_path)?).await
    }

    pub async fn dispatch(&self, request: &InvocationRequest) -> Result<Outcome, DownloadError> {
        self.execute(&self.plan(request)?).await
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

async fn ensure_directory(path: &Path) -> Result<(), DownloadError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| DownloadError::io(format!("creating {}", path.display()), e))
}

fn exit_description(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("yt-dlp exited with status {code}"),
        None => "yt-dlp was terminated by a signal".to_string(),
    }
}
