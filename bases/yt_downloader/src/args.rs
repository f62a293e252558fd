// bases/yt_downloader/src/args.rs
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use video_downloader::{
    validate_url, InvocationRequest, Mode, DEFAULT_METADATA_PATH, DEFAULT_PROGRAM,
    DEFAULT_SAVE_PATH,
};

/// Exit status for a malformed command line
pub const USAGE_EXIT_CODE: i32 = 1;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Dump the video's metadata as JSON
    Fetch,
    /// Download a video, or a whole playlist for playlist URLs
    Download,
}

/// Fetch video metadata or download videos with yt-dlp
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// Video or playlist URL
    #[arg(value_parser = parse_url)]
    pub url: String,

    /// Directory to store downloaded files
    #[arg(default_value = DEFAULT_SAVE_PATH)]
    pub save_path: PathBuf,

    /// "true" to download audio only
    pub audio: Option<String>,

    /// Format id to download, merged with the best audio. Overrides the audio flag
    pub quality: Option<String>,

    /// yt-dlp binary to run
    #[arg(long = "yt-dlp", env = "YT_DLP", default_value = DEFAULT_PROGRAM)]
    pub yt_dlp: PathBuf,

    /// File fetched metadata is written to
    #[arg(long, default_value = DEFAULT_METADATA_PATH)]
    pub metadata_out: PathBuf,

    /// Print a sorted list of video formats instead of the raw metadata
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_url(url: &str) -> Result<String, String> {
    validate_url(url).map_err(|e| e.to_string())?;
    Ok(url.to_string())
}

impl Args {
    /// Parse the process arguments, exiting with [`USAGE_EXIT_CODE`] on usage errors
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(error) => match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
                _ => {
                    let _ = error.print();
                    std::process::exit(USAGE_EXIT_CODE);
                }
            },
        }
    }

    pub fn into_request(self) -> InvocationRequest {
        let mode = match self.mode {
            ModeArg::Fetch => Mode::Fetch,
            ModeArg::Download => Mode::Download,
        };

        InvocationRequest::new(mode, self.url)
            .with_save_path(self.save_path)
            .with_audio(self.audio.as_deref() == Some("true"))
            .with_quality(self.quality)
            .with_metadata_path(self.metadata_out)
    }
}
