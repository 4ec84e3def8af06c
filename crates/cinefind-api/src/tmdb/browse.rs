//! Browse-path helpers shared by the TUI and the one-shot commands.

use anyhow::Result;
use tracing::instrument;

use super::api::LocalTmdbApi;
use super::query::{FilterState, GenreCatalog, MediaType, SearchState, build_query};
use super::trailer::pick_trailer;
use super::types::MediaItem;

/// Default grid row size used when no configuration overrides it.
pub const DEFAULT_ROW_SIZE: usize = 5;

/// Truncates to the largest multiple of `row_size` not exceeding the length.
///
/// Keeps the original order; up to `row_size - 1` trailing items are
/// silently dropped so the grid renders full rows only. A `row_size` of
/// zero leaves the list untouched.
#[must_use]
pub fn trim_to_full_rows(mut items: Vec<MediaItem>, row_size: usize) -> Vec<MediaItem> {
    if row_size == 0 {
        return items;
    }
    let full = items.len().div_euclid(row_size).saturating_mul(row_size);
    items.truncate(full);
    items
}

/// Runs one browse cycle: build the query, fetch the page, trim to full rows.
///
/// Any failure is logged and degrades to an empty list; the caller only ever
/// sees items or nothing.
#[instrument(skip_all)]
pub async fn fetch_browse_rows(
    api: &(impl LocalTmdbApi + Sync),
    filters: &FilterState,
    search: &SearchState,
    catalog: &GenreCatalog,
    row_size: usize,
) -> Vec<MediaItem> {
    let plan = build_query(filters, search, catalog);

    match api.fetch_page(&plan).await {
        Ok(page) => trim_to_full_rows(page.results, row_size),
        Err(error) => {
            tracing::warn!(path = %plan.path, error = %error, "browse fetch failed");
            Vec::new()
        }
    }
}

/// Resolves the embeddable trailer URL for a title.
///
/// `Ok(None)` means the video list was fetched but held no YouTube trailer;
/// transport and decode failures surface as errors.
///
/// # Errors
///
/// Returns an error if the HTTP request or JSON parsing fails.
#[instrument(skip_all)]
pub async fn fetch_trailer_url(
    api: &(impl LocalTmdbApi + Sync),
    media_type: MediaType,
    id: u64,
) -> Result<Option<String>> {
    let videos = api.video_list(media_type, id).await?;
    Ok(pick_trailer(&videos.results))
}
