// components/video_downloader/src/command.rs
use crate::format::{playlist_template, single_template, DEFAULT_VIDEO_FORMAT};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// Program name used when no explicit downloader binary is configured
pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// A downloader invocation as a discrete argument list.
///
/// Arguments are handed to the process-spawn primitive one by one and never
/// pass through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YtDlpCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl YtDlpCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// `<program> -J <url> --no-playlist`
    pub fn fetch_metadata(program: impl Into<OsString>, url: &str) -> Self {
        Self::new(program).arg("-J").arg(url).arg("--no-playlist")
    }

    /// `<program> -o <save_path>/%(title)s.%(ext)s -f <format> <url>`
    pub fn download_single(
        program: impl Into<OsString>,
        url: &str,
        save_path: &Path,
        format: &str,
    ) -> Self {
        Self::new(program)
            .arg("-o")
            .arg(single_template(save_path))
            .arg("-f")
            .arg(format)
            .arg(url)
    }

    /// `<program> -o <save_path>/%(playlist_title)s/%(title)s.%(ext)s -f <default video format> <url>`
    pub fn download_playlist(program: impl Into<OsString>, url: &str, save_path: &Path) -> Self {
        Self::new(program)
            .arg("-o")
            .arg(playlist_template(save_path))
            .arg("-f")
            .arg(DEFAULT_VIDEO_FORMAT)
            .arg(url)
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for YtDlpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
