// components/video_downloader/src/lib.rs
//! Thin orchestration over an external `yt-dlp` binary.
//!
//! Requests are planned into a [`Job`] holding the exact argument list, then
//! executed by a [`CommandRunner`]. Nothing is ever passed through a shell.
mod command;
mod dispatcher;
mod format;
mod runner;
mod summary;
mod types;

pub use command::{YtDlpCommand, DEFAULT_PROGRAM};
pub use dispatcher::{Dispatcher, Job};
pub use format::{
    is_playlist_url, playlist_template, select_format, single_template, validate_url,
    AUDIO_FORMAT, DEFAULT_VIDEO_FORMAT,
};
pub use runner::{CommandRunner, SystemRunner};
pub use summary::{QualitySummary, VideoFormat};
pub use types::{
    DownloadError, InvocationRequest, Mode, Outcome, ProcessOutput, DEFAULT_METADATA_PATH,
    DEFAULT_SAVE_PATH,
};
