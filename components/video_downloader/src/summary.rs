// components/video_downloader/src/summary.rs
use crate::types::DownloadError;
use serde::{Deserialize, Serialize};

/// The video formats offered for a URL, best first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualitySummary {
    pub title: String,
    /// Duration in seconds
    pub duration: f64,
    pub formats: Vec<VideoFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFormat {
    #[serde(default, deserialize_with = "null_as_default")]
    pub format_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ext: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub format_note: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filesize: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vcodec: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub acodec: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fps: f64,
}

#[derive(Debug, Deserialize)]
struct YtDlpMetadata {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    duration: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    formats: Vec<VideoFormat>,
}

// yt-dlp emits explicit nulls for fields it could not determine
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl QualitySummary {
    /// Build a summary from the JSON printed by `yt-dlp -J`.
    ///
    /// Audio-only formats are dropped; the rest are ordered by height, then file size.
    pub fn from_metadata(metadata: &str) -> Result<Self, DownloadError> {
        let meta: YtDlpMetadata = serde_json::from_str(metadata)?;

        let mut formats: Vec<VideoFormat> = meta
            .formats
            .into_iter()
            .filter(|f| f.vcodec != "none")
            .collect();
        formats.sort_by(|a, b| (b.height, b.filesize).cmp(&(a.height, a.filesize)));

        Ok(Self {
            title: meta.title,
            duration: meta.duration,
            formats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const METADATA: &str = r#"{
        "title": "Test Video",
        "duration": 212.5,
        "formats": [
            {"format_id": "140", "ext": "m4a", "vcodec": "none", "acodec": "mp4a.40.2", "filesize": 3400000},
            {"format_id": "18", "ext": "mp4", "width": 640, "height": 360, "vcodec": "avc1", "acodec": "mp4a", "fps": 30, "filesize": 9000000},
            {"format_id": "137", "ext": "mp4", "width": 1920, "height": 1080, "vcodec": "avc1", "acodec": "none", "fps": 30, "filesize": null},
            {"format_id": "136", "ext": "mp4", "width": 1280, "height": 720, "vcodec": "avc1", "acodec": "none", "fps": 30, "filesize": 21000000, "format_note": "720p"},
            {"format_id": "398", "ext": "mp4", "width": 1280, "height": 720, "vcodec": "av01", "acodec": "none", "fps": 30, "filesize": 15000000}
        ]
    }"#;

    #[test]
    fn test_summary_filters_and_sorts() {
        let summary = QualitySummary::from_metadata(METADATA).unwrap();

        assert_eq!(summary.title, "Test Video");
        assert_eq!(summary.duration, 212.5);

        let ids: Vec<&str> = summary.formats.iter().map(|f| f.format_id.as_str()).collect();
        assert_eq!(ids, vec!["137", "136", "398", "18"]);
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let summary = QualitySummary::from_metadata(METADATA).unwrap();
        let full_hd = &summary.formats[0];

        assert_eq!(full_hd.filesize, 0);
        assert_eq!(full_hd.format_note, "");
    }

    #[test]
    fn test_no_formats() {
        let summary = QualitySummary::from_metadata(r#"{"title": "Live"}"#).unwrap();
        assert!(summary.formats.is_empty());
        assert_eq!(summary.duration, 0.0);
    }

    #[test]
    fn test_invalid_json() {
        assert_matches!(
            QualitySummary::from_metadata("ERROR: unsupported URL"),
            Err(DownloadError::InvalidMetadata(_))
        );
    }
}
