//! TMDB API response types.

use serde::Deserialize;

/// Base URL for poster images (w500 rendition).
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

// --- Result pages ---

/// One page of results from the `discover`, `search`, or `trending` endpoints.
///
/// Every field is defaulted so a body without a `results` list decodes to an
/// empty page instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaPage {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Result items.
    #[serde(default)]
    pub results: Vec<MediaItem>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// A single movie or TV entry as returned by TMDB list endpoints.
///
/// Movie entries carry `title`/`release_date`, TV entries `name`/
/// `first_air_date`; the pair that does not apply is `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    /// TMDB ID.
    pub id: u64,
    /// Movie title.
    #[serde(default)]
    pub title: Option<String>,
    /// Series name.
    #[serde(default)]
    pub name: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Release date (movies, YYYY-MM-DD).
    #[serde(default)]
    pub release_date: Option<String>,
    /// First air date (TV, YYYY-MM-DD).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Poster image path fragment.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Media type discriminator (present on trending responses).
    #[serde(default)]
    pub media_type: Option<String>,
}

impl MediaItem {
    /// Display title: the movie `title`, falling back to the series `name`.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("(untitled)")
    }

    /// Full poster image URL, or `None` when TMDB has no poster.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{IMAGE_BASE_URL}{path}"))
    }

    /// Release date for movies, first air date for TV.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
    }
}

// --- Genres ---

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Response from the `genre/movie/list` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreListResponse {
    /// Genre entries.
    #[serde(default)]
    pub genres: Vec<Genre>,
}

// --- Videos ---

/// Response from the `{type}/{id}/videos` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
    /// ID of the title the videos belong to.
    #[serde(default)]
    pub id: u64,
    /// Video entries.
    #[serde(default)]
    pub results: Vec<VideoEntry>,
}

/// A single video entry (trailer, teaser, clip, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct VideoEntry {
    /// Hosting-site video key (the YouTube video ID).
    pub key: String,
    /// Video title.
    #[serde(default)]
    pub name: String,
    /// Hosting site (e.g., "YouTube").
    pub site: String,
    /// Video kind (e.g., "Trailer", "Teaser").
    #[serde(rename = "type")]
    pub kind: String,
    /// Official upload flag.
    #[serde(default)]
    pub official: bool,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    pub success: bool,
}
