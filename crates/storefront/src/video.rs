//! Video source resolution for the home-page video section.
//!
//! Maps heterogeneous CMS video entries (YouTube link or uploaded file) to
//! a tagged playable value. Shape matching only - URL reachability and
//! playback are the browser's problem.

use std::sync::LazyLock;

use regex::Regex;

use crate::cms::types::{HomeContent, MediaRef, SiteVideos, VideoEntry, VideoKind};

/// Matches the id segment after the common YouTube URL shapes
/// (`watch?v=`, `youtu.be/`, `embed/`, `v/`, `u/\w/`, `&v=`).
static YOUTUBE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a compile-time constant
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|/embed/|watch\?v=|&v=)([^#&?/\s]*)").unwrap()
});

/// Exact length of a YouTube video id.
const YOUTUBE_ID_LEN: usize = 11;

/// Mime type assumed for uploads the CMS stored without one.
const DEFAULT_VIDEO_MIME: &str = "video/mp4";

/// A video the templates know how to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayableVideo {
    /// YouTube iframe embed.
    Embedded { id: String },
    /// Native `<video>` element over an uploaded file.
    File {
        url: String,
        mime_type: String,
        poster_url: Option<String>,
    },
}

impl PlayableVideo {
    /// Iframe src for embedded players.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        match self {
            Self::Embedded { id } => Some(format!(
                "https://www.youtube.com/embed/{id}?rel=0&modestbranding=1"
            )),
            Self::File { .. } => None,
        }
    }
}

/// A resolved entry paired with its optional display title.
#[derive(Debug, Clone)]
pub struct VideoSection {
    pub title: Option<String>,
    pub video: PlayableVideo,
}

/// Extract an 11-character YouTube video id from a URL string.
///
/// Candidates of any other length are rejected - the entry is unplayable,
/// not defaulted.
#[must_use]
pub fn extract_youtube_id(url: &str) -> Option<String> {
    let captures = YOUTUBE_ID_RE.captures(url)?;
    let id = captures.get(1)?.as_str();
    (id.len() == YOUTUBE_ID_LEN).then(|| id.to_string())
}

/// Resolve one CMS video entry to a playable video, or none.
///
/// Total over its input: missing URLs, unresolved file relations, and
/// unknown kinds all degrade to `None`.
#[must_use]
pub fn resolve_entry(entry: &VideoEntry) -> Option<PlayableVideo> {
    match entry.kind {
        VideoKind::Youtube => {
            let url = entry.youtube_url.as_deref().filter(|u| !u.is_empty())?;
            extract_youtube_id(url).map(|id| PlayableVideo::Embedded { id })
        }
        VideoKind::Upload => {
            let file = entry.video_file.as_ref()?;
            let url = file.url()?;
            Some(PlayableVideo::File {
                url: url.to_string(),
                mime_type: file
                    .mime_type()
                    .unwrap_or(DEFAULT_VIDEO_MIME)
                    .to_string(),
                poster_url: file.thumbnail_url().map(String::from),
            })
        }
        VideoKind::Unknown => None,
    }
}

/// Maximum entries rendered on the home page.
const MAX_SECTIONS: usize = 2;

/// Resolve the site-videos global, falling back to the legacy home-page
/// video fields when it has no playable entries.
#[must_use]
pub fn resolve_sections(site_videos: &SiteVideos, home: &HomeContent) -> Vec<VideoSection> {
    let sections: Vec<VideoSection> = site_videos
        .videos
        .iter()
        .filter_map(|entry| {
            resolve_entry(entry).map(|video| VideoSection {
                title: entry.title.clone(),
                video,
            })
        })
        .take(MAX_SECTIONS)
        .collect();

    if !sections.is_empty() {
        return sections;
    }

    // Legacy single-video fields go through the same extractor.
    home.video_url
        .as_deref()
        .and_then(extract_youtube_id)
        .map(|id| VideoSection {
            title: home.video_title.clone(),
            video: PlayableVideo::Embedded { id },
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn youtube_entry(url: &str) -> VideoEntry {
        VideoEntry {
            kind: VideoKind::Youtube,
            youtube_url: Some(url.to_string()),
            video_file: None,
            title: None,
        }
    }

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_short_embed_and_legacy_shapes() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/u/w/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ",
        ] {
            assert_eq!(
                extract_youtube_id(url).as_deref(),
                Some("dQw4w9WgXcQ"),
                "failed for {url}"
            );
        }
    }

    #[test]
    fn test_extract_strips_trailing_params() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_rejects_non_urls_and_wrong_lengths() {
        assert_eq!(extract_youtube_id("not a url"), None);
        assert_eq!(extract_youtube_id(""), None);
        // 12-character candidate is not a video id.
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ2"),
            None
        );
        assert_eq!(extract_youtube_id("https://youtu.be/short"), None);
    }

    #[test]
    fn test_resolve_youtube_entry() {
        let entry = youtube_entry("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        let video = resolve_entry(&entry).unwrap();
        assert_eq!(
            video,
            PlayableVideo::Embedded {
                id: "dQw4w9WgXcQ".to_string()
            }
        );
        assert_eq!(
            video.embed_url().unwrap(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
        );
    }

    #[test]
    fn test_resolve_unplayable_link_is_none() {
        assert_eq!(resolve_entry(&youtube_entry("not a url")), None);
    }

    #[test]
    fn test_resolve_upload_entry() {
        let entry = VideoEntry {
            kind: VideoKind::Upload,
            youtube_url: None,
            video_file: Some(MediaRef::Resolved(crate::cms::types::Media {
                id: "m1".to_string(),
                url: Some("https://cdn.example.com/clip.mp4".to_string()),
                alt: None,
                mime_type: None,
                thumbnail_url: Some("https://cdn.example.com/poster.jpg".to_string()),
            })),
            title: None,
        };
        let video = resolve_entry(&entry).unwrap();
        assert_eq!(
            video,
            PlayableVideo::File {
                url: "https://cdn.example.com/clip.mp4".to_string(),
                mime_type: "video/mp4".to_string(),
                poster_url: Some("https://cdn.example.com/poster.jpg".to_string()),
            }
        );
        assert!(video.embed_url().is_none());
    }

    #[test]
    fn test_resolve_upload_without_file_is_none() {
        let entry = VideoEntry {
            kind: VideoKind::Upload,
            youtube_url: None,
            video_file: None,
            title: None,
        };
        assert_eq!(resolve_entry(&entry), None);

        // An unresolved relation is "file missing", not a URL.
        let entry = VideoEntry {
            kind: VideoKind::Upload,
            youtube_url: None,
            video_file: Some(MediaRef::Unresolved("663a1b2c".to_string())),
            title: None,
        };
        assert_eq!(resolve_entry(&entry), None);
    }

    #[test]
    fn test_resolve_unknown_kind_is_none() {
        let entry = VideoEntry {
            kind: VideoKind::Unknown,
            youtube_url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
            video_file: None,
            title: None,
        };
        assert_eq!(resolve_entry(&entry), None);
    }

    #[test]
    fn test_sections_cap_and_skip_unplayable() {
        let site_videos = SiteVideos {
            videos: vec![
                youtube_entry("nope"),
                youtube_entry("https://youtu.be/dQw4w9WgXcQ"),
                youtube_entry("https://youtu.be/aaaaaaaaaaa"),
                youtube_entry("https://youtu.be/bbbbbbbbbbb"),
            ],
        };
        let sections = resolve_sections(&site_videos, &HomeContent::default());
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_sections_fall_back_to_legacy_fields() {
        let home = HomeContent {
            video_title: Some("Factory tour".to_string()),
            video_url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
            ..HomeContent::default()
        };
        let sections = resolve_sections(&SiteVideos::default(), &home);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title.as_deref(), Some("Factory tour"));

        // An unextractable legacy URL yields no section at all.
        let home = HomeContent {
            video_url: Some("not a url".to_string()),
            ..HomeContent::default()
        };
        assert!(resolve_sections(&SiteVideos::default(), &home).is_empty());
    }
}
