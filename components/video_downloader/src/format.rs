// components/video_downloader/src/format.rs
use crate::types::DownloadError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Selector used for audio-only downloads
pub const AUDIO_FORMAT: &str = "bestaudio/best";

/// Best mp4 video merged with the best m4a audio, falling back to the best single mp4
pub const DEFAULT_VIDEO_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]";

const PLAYLIST_MARKER: &str = "playlist?";
const TITLE_FILE: &str = "%(title)s.%(ext)s";
const PLAYLIST_DIR: &str = "%(playlist_title)s";

/// Pick the `-f` selector for a single video.
///
/// A non-empty quality wins over the audio flag.
pub fn select_format(is_audio: bool, quality: Option<&str>) -> String {
    match quality.filter(|q| !q.is_empty()) {
        Some(quality) => format!("{quality}+bestaudio/best"),
        None if is_audio => AUDIO_FORMAT.to_string(),
        None => DEFAULT_VIDEO_FORMAT.to_string(),
    }
}

/// `<save_path>/%(title)s.%(ext)s`
pub fn single_template(save_path: impl AsRef<Path>) -> PathBuf {
    template(save_path.as_ref(), &[TITLE_FILE])
}

/// `<save_path>/%(playlist_title)s/%(title)s.%(ext)s`
pub fn playlist_template(save_path: impl AsRef<Path>) -> PathBuf {
    template(save_path.as_ref(), &[PLAYLIST_DIR, TITLE_FILE])
}

// Always `/`-separated, whatever the host path separator is
fn template(save_path: &Path, parts: &[&str]) -> PathBuf {
    let mut template = OsString::from(save_path);
    for part in parts {
        let ends_with_separator = template
            .to_string_lossy()
            .ends_with(|c: char| c == '/' || c == '\\');
        if !ends_with_separator {
            template.push("/");
        }
        template.push(part);
    }
    PathBuf::from(template)
}

pub fn is_playlist_url(url: &str) -> bool {
    url.contains(PLAYLIST_MARKER)
}

/// Reject URLs yt-dlp would parse as an option
pub fn validate_url(url: &str) -> Result<(), DownloadError> {
    if url.starts_with('-') {
        return Err(DownloadError::InvalidUrl(format!(
            "{url} looks like an option, not a URL"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case(false, None, "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]")]
    #[case(false, Some(""), "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]")]
    #[case(true, None, "bestaudio/best")]
    #[case(true, Some(""), "bestaudio/best")]
    #[case(false, Some("720p"), "720p+bestaudio/best")]
    #[case(true, Some("720p"), "720p+bestaudio/best")]
    fn test_select_format(
        #[case] is_audio: bool,
        #[case] quality: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(select_format(is_audio, quality), expected);
    }

    #[test]
    fn test_single_template() {
        assert_eq!(
            single_template("./Downloads"),
            PathBuf::from("./Downloads/%(title)s.%(ext)s")
        );
    }

    #[test]
    fn test_template_does_not_double_separator() {
        assert_eq!(
            single_template("videos/"),
            PathBuf::from("videos/%(title)s.%(ext)s")
        );
    }

    #[test]
    fn test_template_uses_forward_slashes() {
        let template = playlist_template(r"C:\Users\me\Downloads");
        assert_eq!(
            template.to_string_lossy(),
            r"C:\Users\me\Downloads/%(playlist_title)s/%(title)s.%(ext)s"
        );
    }

    #[rstest]
    #[case("--exec=touch /tmp/x")]
    #[case("-J")]
    #[case("-")]
    fn test_option_like_urls_rejected(#[case] url: &str) {
        assert_matches!(validate_url(url), Err(DownloadError::InvalidUrl(_)));
    }

    #[rstest]
    #[case("https://youtu.be/abc")]
    #[case("dQw4w9WgXcQ")]
    #[case("https://example.com/--exec")]
    fn test_urls_accepted(#[case] url: &str) {
        assert_matches!(validate_url(url), Ok(()));
    }

    #[test]
    fn test_playlist_template() {
        assert_eq!(
            playlist_template("/music/videos"),
            PathBuf::from("/music/videos/%(playlist_title)s/%(title)s.%(ext)s")
        );
    }

    #[rstest]
    #[case("https://www.youtube.com/playlist?list=PL123", true)]
    #[case("https://www.youtube.com/watch?v=abc&list=PL123", false)]
    #[case("https://example.com/my-playlist", false)]
    #[case("playlist?", true)]
    fn test_is_playlist_url(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_playlist_url(url), expected);
    }
}
