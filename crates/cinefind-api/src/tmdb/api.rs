//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::query::{MediaType, QueryPlan, TrendingWindow};
use super::types::{GenreListResponse, MediaPage, VideoListResponse};

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches one page of results for a built query plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn fetch_page(&self, plan: &QueryPlan) -> Result<MediaPage>;

    /// Fetches the genre catalog from `genre/movie/list`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn genre_list(&self, language: &str) -> Result<GenreListResponse>;

    /// Fetches the trending list for the given media type and window.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn trending(&self, media_type: MediaType, window: TrendingWindow) -> Result<MediaPage>;

    /// Fetches the video list for a title.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn video_list(&self, media_type: MediaType, id: u64) -> Result<VideoListResponse>;
}
