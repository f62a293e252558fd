// bases/yt_downloader/src/output.rs
use video_downloader::{Job, Outcome};

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_job_start(&self, job: &Job) {
        match job {
            // stdout carries the metadata itself
            Job::FetchQualities { command, .. } => tracing::debug!("Fetching with command: {}", command),
            Job::DownloadVideo { command, .. } => println!("Downloading with command: {}", command),
            Job::DownloadPlaylist { command, .. } => {
                println!("Downloading playlist with command: {}", command)
            }
        }
    }

    pub fn print_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Fetched { metadata, path } => {
                println!("{}", metadata.trim_end());
                if self.verbose {
                    eprintln!("Metadata written to {}", path.display());
                }
            }
            Outcome::Downloaded { save_path } => {
                println!("Download complete!");
                if self.verbose {
                    eprintln!("Saved to: {}", save_path.display());
                }
            }
            Outcome::PlaylistDownloaded { save_path } => {
                println!("Playlist download complete!");
                if self.verbose {
                    eprintln!("Saved to: {}", save_path.display());
                }
            }
        }
    }

    pub fn print_summary(&self, summary: &str) {
        println!("{}", summary);
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
