//! TMDB API client module.
//!
//! Builds discover/search queries from filter state, fetches result
//! pages over HTTPS/JSON, and resolves embeddable trailer URLs.

mod api;
mod browse;
mod client;
mod query;
mod trailer;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
pub use browse::{DEFAULT_ROW_SIZE, fetch_browse_rows, fetch_trailer_url, trim_to_full_rows};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
pub use query::{
    FilterState, GenreCatalog, Language, MediaType, QueryPlan, SearchState, TrendingWindow,
    build_query,
};
pub use trailer::pick_trailer;
pub use types::{
    Genre, GenreListResponse, IMAGE_BASE_URL, MediaItem, MediaPage, TmdbErrorResponse, VideoEntry,
    VideoListResponse,
};
