//! Trailer selection from TMDB video lists.

use super::types::VideoEntry;

/// Base URL for embeddable YouTube players.
const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Picks the first YouTube trailer and returns its embeddable player URL.
///
/// Entries whose kind is not "Trailer" or whose hosting site is not YouTube
/// are skipped; `None` when nothing matches.
#[must_use]
pub fn pick_trailer(videos: &[VideoEntry]) -> Option<String> {
    videos
        .iter()
        .find(|video| video.kind == "Trailer" && video.site == "YouTube")
        .map(|video| format!("{EMBED_BASE_URL}{}", video.key))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::tmdb::types::VideoListResponse;

    fn make_video(key: &str, site: &str, kind: &str) -> VideoEntry {
        VideoEntry {
            key: String::from(key),
            name: String::from("Official Trailer"),
            site: String::from(site),
            kind: String::from(kind),
            official: true,
        }
    }

    #[test]
    fn test_picks_first_youtube_trailer() {
        // Arrange
        let videos = vec![
            make_video("teaser1", "YouTube", "Teaser"),
            make_video("trailer1", "YouTube", "Trailer"),
            make_video("trailer2", "YouTube", "Trailer"),
        ];

        // Act
        let url = pick_trailer(&videos);

        // Assert
        assert_eq!(
            url.unwrap(),
            "https://www.youtube.com/embed/trailer1"
        );
    }

    #[test]
    fn test_skips_trailers_on_other_sites() {
        // Arrange
        let videos = vec![
            make_video("vimeo1", "Vimeo", "Trailer"),
            make_video("yt1", "YouTube", "Trailer"),
        ];

        // Act
        let url = pick_trailer(&videos);

        // Assert
        assert_eq!(url.unwrap(), "https://www.youtube.com/embed/yt1");
    }

    #[test]
    fn test_none_when_no_trailer_matches() {
        // Arrange: teasers and clips only
        let videos = vec![
            make_video("teaser1", "YouTube", "Teaser"),
            make_video("clip1", "YouTube", "Clip"),
            make_video("vimeo1", "Vimeo", "Trailer"),
        ];

        // Act & Assert
        assert!(pick_trailer(&videos).is_none());
    }

    #[test]
    fn test_none_for_empty_list() {
        // Arrange & Act & Assert
        assert!(pick_trailer(&[]).is_none());
    }

    #[test]
    fn test_fixture_without_trailer_yields_none() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/videos_without_trailer.json");
        let response: VideoListResponse = serde_json::from_str(json).unwrap();

        // Act & Assert
        assert!(pick_trailer(&response.results).is_none());
    }

    #[test]
    fn test_fixture_with_trailer_yields_embed_url() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/videos_with_trailer.json");
        let response: VideoListResponse = serde_json::from_str(json).unwrap();

        // Act
        let url = pick_trailer(&response.results);

        // Assert
        assert_eq!(
            url.unwrap(),
            "https://www.youtube.com/embed/vKQi3bBA1y8"
        );
    }
}
