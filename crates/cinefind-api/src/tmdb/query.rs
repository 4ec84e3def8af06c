//! Query construction for the discover and search endpoints.
//!
//! Translates the current filter/search state into a request descriptor
//! (endpoint path plus query parameters) understood by TMDB.

use std::str::FromStr;

use anyhow::bail;

use super::types::Genre;

/// Media classification; selects endpoint paths and year parameter names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaType {
    /// Feature film.
    #[default]
    Movie,
    /// TV series.
    Tv,
}

impl MediaType {
    /// URL path segment for this media type.
    #[must_use]
    pub const fn as_path_segment(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Tv => "TV Series",
        }
    }
}

impl FromStr for MediaType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "tv" => Ok(Self::Tv),
            other => bail!("unknown media type: {other} (expected \"movie\" or \"tv\")"),
        }
    }
}

/// Time window for the trending endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendingWindow {
    /// Trending today.
    Day,
    /// Trending this week.
    #[default]
    Week,
}

impl TrendingWindow {
    /// URL path segment for this window.
    #[must_use]
    pub const fn as_path_segment(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl FromStr for TrendingWindow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            other => bail!("unknown trending window: {other} (expected \"day\" or \"week\")"),
        }
    }
}

/// Original-language filter option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code sent to the API.
    pub code: String,
    /// Human-readable label shown in the picker.
    pub label: String,
}

impl Language {
    /// Creates a new language option.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Current filter selection. At most one value per dimension; `None` = unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Genre name as shown in the picker; resolved to an ID at query time.
    pub genre: Option<String>,
    /// Release/first-air year (4-digit string, passed through unvalidated).
    pub year: Option<String>,
    /// Original language.
    pub language: Option<Language>,
    /// Media type; queries fall back to movie when unset.
    pub media_type: Option<MediaType>,
}

impl FilterState {
    /// Effective media type (movie when unset).
    #[must_use]
    pub fn media_type_or_default(&self) -> MediaType {
        self.media_type.unwrap_or_default()
    }

    /// Returns `true` when no dimension is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.genre.is_none()
            && self.year.is_none()
            && self.language.is_none()
            && self.media_type.is_none()
    }

    /// Clears every dimension.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Free-text search state.
///
/// `committed` changes only on explicit submit; `input` follows every
/// keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Raw input text.
    pub input: String,
    /// Committed query; `None` when no search is active.
    pub committed: Option<String>,
}

impl SearchState {
    /// Commits the trimmed input. A blank input clears the committed query,
    /// falling back to discover mode.
    pub fn submit(&mut self) {
        let trimmed = self.input.trim();
        self.committed = if trimmed.is_empty() {
            None
        } else {
            Some(String::from(trimmed))
        };
    }

    /// Clears both the input and the committed query.
    pub fn clear(&mut self) {
        self.input.clear();
        self.committed = None;
    }
}

/// Read-only mapping from genre name to the numeric ID the API expects.
///
/// Fetched once at startup from `genre/movie/list`.
#[derive(Debug, Clone, Default)]
pub struct GenreCatalog {
    entries: Vec<Genre>,
}

impl GenreCatalog {
    /// Creates a catalog from fetched genre entries.
    #[must_use]
    pub const fn new(entries: Vec<Genre>) -> Self {
        Self { entries }
    }

    /// Resolves a genre name to its ID; `None` when the name is unknown.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|genre| genre.name == name)
            .map(|genre| genre.id)
    }

    /// Catalog entries in API order.
    #[must_use]
    pub fn entries(&self) -> &[Genre] {
        &self.entries
    }

    /// Returns `true` when the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A ready-to-send request descriptor: endpoint path plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// Path relative to the API base URL (e.g., `discover/movie`).
    pub path: String,
    /// Query parameters, excluding authentication.
    pub params: Vec<(&'static str, String)>,
}

/// Builds the request descriptor for the current filter and search state.
///
/// A committed search targets `search/{type}` with the query text and ignores
/// the other filter dimensions. Otherwise the descriptor targets
/// `discover/{type}` sorted by descending popularity, with one parameter per
/// set filter. A genre name missing from the catalog is dropped without
/// error; the year string is passed through unvalidated.
#[must_use]
pub fn build_query(
    filters: &FilterState,
    search: &SearchState,
    catalog: &GenreCatalog,
) -> QueryPlan {
    let media_type = filters.media_type_or_default();

    if let Some(ref query) = search.committed {
        return QueryPlan {
            path: format!("search/{}", media_type.as_path_segment()),
            params: vec![("query", query.clone())],
        };
    }

    let mut params: Vec<(&'static str, String)> =
        vec![("sort_by", String::from("popularity.desc"))];

    if let Some(ref name) = filters.genre
        && let Some(id) = catalog.resolve(name)
    {
        params.push(("with_genres", id.to_string()));
    }
    if let Some(ref year) = filters.year {
        let key = match media_type {
            MediaType::Movie => "primary_release_year",
            MediaType::Tv => "first_air_date_year",
        };
        params.push((key, year.clone()));
    }
    if let Some(ref language) = filters.language {
        params.push(("with_original_language", language.code.clone()));
    }

    QueryPlan {
        path: format!("discover/{}", media_type.as_path_segment()),
        params,
    }
}
