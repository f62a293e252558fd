// components/video_downloader/src/types.rs
use std::path::PathBuf;
use thiserror::Error;

/// Default directory downloads are written to
pub const DEFAULT_SAVE_PATH: &str = "./Downloads";

/// Default file the raw metadata of a fetch is written to
pub const DEFAULT_METADATA_PATH: &str = "qualities.json";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Error fetching qualities: {0} produced no output")]
    EmptyMetadata(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Playlist download failed: {0}")]
    PlaylistFailed(String),

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(#[from] serde_json::Error),

    #[error("IO error while {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        DownloadError::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// What the invocation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Dump metadata for a single video
    Fetch,
    /// Download a single video or a whole playlist
    Download,
}

/// A validated request, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub mode: Mode,
    pub url: String,
    /// Directory downloads land in
    pub save_path: PathBuf,
    pub is_audio: bool,
    /// Format id to prefer; `None` means let the default selector decide
    pub quality: Option<String>,
    /// Where fetched metadata is written
    pub metadata_path: PathBuf,
}

impl InvocationRequest {
    pub fn new(mode: Mode, url: impl Into<String>) -> Self {
        Self {
            mode,
            url: url.into(),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            is_audio: false,
            quality: None,
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
        }
    }

    pub fn with_save_path(mut self, save_path: impl Into<PathBuf>) -> Self {
        self.save_path = save_path.into();
        self
    }

    pub fn with_audio(mut self, is_audio: bool) -> Self {
        self.is_audio = is_audio;
        self
    }

    /// Empty quality strings are treated as no quality at all
    pub fn with_quality(mut self, quality: Option<String>) -> Self {
        self.quality = quality.filter(|q| !q.is_empty());
        self
    }

    pub fn with_metadata_path(mut self, metadata_path: impl Into<PathBuf>) -> Self {
        self.metadata_path = metadata_path.into();
        self
    }
}

/// Result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: Vec<u8>,
}

/// What a successfully executed job produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Fetched { metadata: String, path: PathBuf },
    Downloaded { save_path: PathBuf },
    PlaylistDownloaded { save_path: PathBuf },
}
