//! Browser state management.
//!
//! UI state is an explicit value plus a reducer: every interaction and every
//! fetch outcome is a [`BrowserEvent`], and [`BrowserState::apply`] mutates the
//! state and optionally emits an [`Effect`] for the event loop to execute.
//! Fetch effects carry a monotonic sequence token; outcomes bearing a token
//! other than the latest issued one are stale and discarded.

use cinefind_api::tmdb::{
    FilterState, GenreCatalog, Language, MediaItem, MediaType, SearchState,
};

/// Notice text shown when a title has no matching trailer.
pub const TRAILER_UNAVAILABLE: &str = "Trailer not available.";

/// Lifecycle of one query cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No fetch has been issued yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch has settled (possibly with an empty grid).
    Loaded,
}

/// Which input surface currently receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Grid navigation.
    Grid,
    /// Search text entry.
    Search,
    /// A filter picker menu is open.
    Menu(FilterDimension),
}

/// One filter dimension of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    /// Genre name.
    Genre,
    /// Release / first-air year.
    Year,
    /// Original language.
    Language,
    /// Movie vs. TV series.
    Type,
}

/// Option sets offered by the filter picker menus.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Genre names (resolved against the fetched catalog at query time).
    pub genres: Vec<String>,
    /// Year strings, newest first.
    pub years: Vec<String>,
    /// Language options.
    pub languages: Vec<Language>,
    /// Media type options.
    pub types: Vec<MediaType>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            genres: ["Action", "Comedy", "Drama", "Horror", "Animation", "Romance"]
                .map(String::from)
                .to_vec(),
            years: ["2025", "2024", "2023", "2022", "2021"]
                .map(String::from)
                .to_vec(),
            languages: vec![
                Language::new("en", "English"),
                Language::new("hi", "Hindi"),
                Language::new("ja", "Japanese"),
                Language::new("es", "Spanish"),
            ],
            types: vec![MediaType::Movie, MediaType::Tv],
        }
    }
}

/// One interaction or fetch outcome.
#[derive(Debug, Clone)]
pub enum BrowserEvent {
    /// Enter search input mode.
    StartSearch,
    /// Append a character to the search input.
    SearchChar(char),
    /// Remove the last character from the search input.
    SearchBackspace,
    /// Commit the search input and refresh.
    SearchSubmit,
    /// Leave search input mode without committing.
    SearchCancel,
    /// Open a filter picker menu.
    OpenMenu(FilterDimension),
    /// Move the menu cursor up.
    MenuUp,
    /// Move the menu cursor down.
    MenuDown,
    /// Pick the highlighted menu option and refresh.
    MenuPick,
    /// Clear the open menu's filter dimension and refresh.
    MenuClear,
    /// Close the menu without changes.
    MenuCancel,
    /// Move the grid cursor one cell left.
    CursorLeft,
    /// Move the grid cursor one cell right.
    CursorRight,
    /// Move the grid cursor one row up.
    CursorUp,
    /// Move the grid cursor one row down.
    CursorDown,
    /// Request the trailer for the title under the cursor.
    RequestTrailer,
    /// Dismiss the trailer modal.
    CloseTrailer,
    /// Dismiss the notice modal.
    DismissNotice,
    /// Reset search and filters to a fresh discover cycle.
    ResetHome,
    /// The startup genre catalog arrived; starts the initial cycle.
    CatalogLoaded(GenreCatalog),
    /// A browse fetch settled.
    ResultsArrived {
        /// Sequence token the fetch was issued with.
        token: u64,
        /// Normalized (full-row) result list.
        items: Vec<MediaItem>,
    },
    /// A trailer resolution settled.
    TrailerArrived {
        /// Sequence token the resolution was issued with.
        token: u64,
        /// Embeddable URL, or `None` when no trailer matched.
        url: Option<String>,
    },
    /// A trailer resolution failed (transport or decode error).
    TrailerFailed {
        /// Sequence token the resolution was issued with.
        token: u64,
    },
}

/// Snapshot handed to a spawned browse fetch task.
#[derive(Debug, Clone)]
pub struct FetchSpec {
    /// Sequence token to tag the outcome with.
    pub token: u64,
    /// Filter state at issue time.
    pub filters: FilterState,
    /// Search state at issue time.
    pub search: SearchState,
    /// Genre catalog at issue time.
    pub catalog: GenreCatalog,
    /// Grid row size for full-row truncation.
    pub row_size: usize,
}

/// Snapshot handed to a spawned trailer resolution task.
#[derive(Debug, Clone, Copy)]
pub struct TrailerSpec {
    /// Sequence token to tag the outcome with.
    pub token: u64,
    /// Media type of the title.
    pub media_type: MediaType,
    /// TMDB ID of the title.
    pub id: u64,
}

/// Side effect the event loop must execute after applying an event.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Re-run the query cycle.
    Refresh(FetchSpec),
    /// Resolve a trailer URL.
    ResolveTrailer(TrailerSpec),
}

/// State for the browser TUI.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct BrowserState {
    /// Current filter selection.
    pub filters: FilterState,
    /// Current search state.
    pub search: SearchState,
    /// Genre catalog (empty until `CatalogLoaded`).
    pub catalog: GenreCatalog,
    /// Filter picker option sets.
    pub options: FilterOptions,
    /// Normalized result list shown in the grid.
    pub results: Vec<MediaItem>,
    /// Query cycle phase.
    pub phase: Phase,
    /// Active input surface.
    pub input_mode: InputMode,
    /// Cursor position within the open menu.
    pub menu_cursor: usize,
    /// Cursor position within the grid.
    pub cursor: usize,
    /// Open trailer modal URL; `None` when closed.
    pub trailer: Option<String>,
    /// Blocking notice text; `None` when no notice is shown.
    pub notice: Option<String>,
    /// Grid row size.
    pub row_size: usize,
    /// Last issued sequence token.
    seq: u64,
    /// Token of the browse fetch whose outcome is still wanted (0 = none).
    pending_browse: u64,
    /// Token of the trailer resolution whose outcome is still wanted (0 = none).
    pending_trailer: u64,
}

impl BrowserState {
    /// Creates a fresh state with the given grid row size.
    #[must_use]
    pub fn new(row_size: usize) -> Self {
        Self {
            filters: FilterState::default(),
            search: SearchState::default(),
            catalog: GenreCatalog::default(),
            options: FilterOptions::default(),
            results: Vec::new(),
            phase: Phase::Idle,
            input_mode: InputMode::Grid,
            menu_cursor: 0,
            cursor: 0,
            trailer: None,
            notice: None,
            row_size,
            seq: 0,
            pending_browse: 0,
            pending_trailer: 0,
        }
    }

    /// Heading line above the grid.
    #[must_use]
    pub fn heading(&self) -> String {
        self.search.committed.as_ref().map_or_else(
            || String::from("Movies & TV Shows"),
            |query| format!("Search Results for \"{query}\""),
        )
    }

    /// Number of options in the given picker menu.
    #[must_use]
    pub fn menu_len(&self, dimension: FilterDimension) -> usize {
        match dimension {
            FilterDimension::Genre => self.options.genres.len(),
            FilterDimension::Year => self.options.years.len(),
            FilterDimension::Language => self.options.languages.len(),
            FilterDimension::Type => self.options.types.len(),
        }
    }

    /// Label of one option in the given picker menu.
    #[must_use]
    pub fn menu_label(&self, dimension: FilterDimension, index: usize) -> Option<String> {
        match dimension {
            FilterDimension::Genre => self.options.genres.get(index).cloned(),
            FilterDimension::Year => self.options.years.get(index).cloned(),
            FilterDimension::Language => self
                .options
                .languages
                .get(index)
                .map(|lang| lang.label.clone()),
            FilterDimension::Type => self
                .options
                .types
                .get(index)
                .map(|t| String::from(t.label())),
        }
    }

    /// Applies one event and returns the effect to execute, if any.
    pub fn apply(&mut self, event: BrowserEvent) -> Option<Effect> {
        // Fetch outcomes and modal dismissals are always processed; while a
        // modal is up, every other interaction is swallowed.
        match event {
            BrowserEvent::CatalogLoaded(catalog) => {
                self.catalog = catalog;
                return Some(self.refresh());
            }
            BrowserEvent::ResultsArrived { token, items } => {
                self.apply_results(token, items);
                return None;
            }
            BrowserEvent::TrailerArrived { token, url } => {
                self.apply_trailer(token, url);
                return None;
            }
            BrowserEvent::TrailerFailed { token } => {
                if token == self.pending_trailer {
                    self.pending_trailer = 0;
                }
                return None;
            }
            BrowserEvent::CloseTrailer => {
                self.trailer = None;
                return None;
            }
            BrowserEvent::DismissNotice => {
                self.notice = None;
                return None;
            }
            _ => {}
        }
        if self.trailer.is_some() || self.notice.is_some() {
            return None;
        }

        match event {
            BrowserEvent::StartSearch => {
                self.input_mode = InputMode::Search;
                None
            }
            BrowserEvent::SearchChar(c) => {
                if self.input_mode == InputMode::Search {
                    self.search.input.push(c);
                }
                None
            }
            BrowserEvent::SearchBackspace => {
                if self.input_mode == InputMode::Search {
                    self.search.input.pop();
                }
                None
            }
            BrowserEvent::SearchSubmit => {
                if self.input_mode != InputMode::Search {
                    return None;
                }
                self.input_mode = InputMode::Grid;
                self.search.submit();
                Some(self.refresh())
            }
            BrowserEvent::SearchCancel => {
                self.input_mode = InputMode::Grid;
                None
            }
            BrowserEvent::OpenMenu(dimension) => {
                self.input_mode = InputMode::Menu(dimension);
                self.menu_cursor = self.selected_menu_index(dimension).unwrap_or(0);
                None
            }
            BrowserEvent::MenuUp => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
                None
            }
            BrowserEvent::MenuDown => {
                if let InputMode::Menu(dimension) = self.input_mode {
                    let last = self.menu_len(dimension).saturating_sub(1);
                    self.menu_cursor = self.menu_cursor.saturating_add(1).min(last);
                }
                None
            }
            BrowserEvent::MenuPick => {
                let InputMode::Menu(dimension) = self.input_mode else {
                    return None;
                };
                self.input_mode = InputMode::Grid;
                if self.pick_option(dimension, self.menu_cursor) {
                    Some(self.refresh())
                } else {
                    None
                }
            }
            BrowserEvent::MenuClear => {
                let InputMode::Menu(dimension) = self.input_mode else {
                    return None;
                };
                self.input_mode = InputMode::Grid;
                match dimension {
                    FilterDimension::Genre => self.filters.genre = None,
                    FilterDimension::Year => self.filters.year = None,
                    FilterDimension::Language => self.filters.language = None,
                    FilterDimension::Type => self.filters.media_type = None,
                }
                Some(self.refresh())
            }
            BrowserEvent::MenuCancel => {
                self.input_mode = InputMode::Grid;
                None
            }
            BrowserEvent::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            BrowserEvent::CursorRight => {
                self.move_cursor_by(1);
                None
            }
            BrowserEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(self.row_size.max(1));
                None
            }
            BrowserEvent::CursorDown => {
                self.move_cursor_by(self.row_size.max(1));
                None
            }
            BrowserEvent::RequestTrailer => self.request_trailer(),
            BrowserEvent::ResetHome => {
                self.search.clear();
                self.filters.clear();
                self.cursor = 0;
                Some(self.refresh())
            }
            // Handled above.
            BrowserEvent::CatalogLoaded(_)
            | BrowserEvent::ResultsArrived { .. }
            | BrowserEvent::TrailerArrived { .. }
            | BrowserEvent::TrailerFailed { .. }
            | BrowserEvent::CloseTrailer
            | BrowserEvent::DismissNotice => None,
        }
    }

    /// Issues a new browse fetch, invalidating any in-flight outcomes.
    fn refresh(&mut self) -> Effect {
        self.seq = self.seq.saturating_add(1);
        self.pending_browse = self.seq;
        self.pending_trailer = 0;
        self.phase = Phase::Loading;
        Effect::Refresh(FetchSpec {
            token: self.seq,
            filters: self.filters.clone(),
            search: self.search.clone(),
            catalog: self.catalog.clone(),
            row_size: self.row_size,
        })
    }

    /// Stores a browse outcome, or discards it as stale.
    fn apply_results(&mut self, token: u64, items: Vec<MediaItem>) {
        if token != self.pending_browse {
            tracing::debug!(token, latest = self.pending_browse, "discarding stale results");
            return;
        }
        self.pending_browse = 0;
        self.results = items;
        self.phase = Phase::Loaded;
        self.cursor = self.cursor.min(self.results.len().saturating_sub(1));
    }

    /// Stores a trailer outcome, or discards it as stale.
    fn apply_trailer(&mut self, token: u64, url: Option<String>) {
        if token != self.pending_trailer {
            tracing::debug!(token, latest = self.pending_trailer, "discarding stale trailer");
            return;
        }
        self.pending_trailer = 0;
        match url {
            Some(url) => self.trailer = Some(url),
            None => self.notice = Some(String::from(TRAILER_UNAVAILABLE)),
        }
    }

    /// Issues a trailer resolution for the title under the cursor.
    fn request_trailer(&mut self) -> Option<Effect> {
        if self.input_mode != InputMode::Grid {
            return None;
        }
        let item = self.results.get(self.cursor)?;
        // Trending rows carry their own discriminator; discover/search rows
        // inherit the type filter.
        let media_type = match item.media_type.as_deref() {
            Some("tv") => MediaType::Tv,
            Some("movie") => MediaType::Movie,
            _ => self.filters.media_type_or_default(),
        };
        let id = item.id;
        self.seq = self.seq.saturating_add(1);
        self.pending_trailer = self.seq;
        Some(Effect::ResolveTrailer(TrailerSpec {
            token: self.seq,
            media_type,
            id,
        }))
    }

    /// Advances the grid cursor, clamping to the last result.
    fn move_cursor_by(&mut self, step: usize) {
        let last = self.results.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(step).min(last);
    }

    /// Index of the currently-set option in a picker menu, if any.
    fn selected_menu_index(&self, dimension: FilterDimension) -> Option<usize> {
        match dimension {
            FilterDimension::Genre => {
                let set = self.filters.genre.as_ref()?;
                self.options.genres.iter().position(|g| g == set)
            }
            FilterDimension::Year => {
                let set = self.filters.year.as_ref()?;
                self.options.years.iter().position(|y| y == set)
            }
            FilterDimension::Language => {
                let set = self.filters.language.as_ref()?;
                self.options.languages.iter().position(|l| l.code == set.code)
            }
            FilterDimension::Type => {
                let set = self.filters.media_type?;
                self.options.types.iter().position(|t| *t == set)
            }
        }
    }

    /// Applies a picked menu option; `false` when the index is out of range.
    fn pick_option(&mut self, dimension: FilterDimension, index: usize) -> bool {
        match dimension {
            FilterDimension::Genre => {
                let Some(genre) = self.options.genres.get(index) else {
                    return false;
                };
                self.filters.genre = Some(genre.clone());
            }
            FilterDimension::Year => {
                let Some(year) = self.options.years.get(index) else {
                    return false;
                };
                self.filters.year = Some(year.clone());
            }
            FilterDimension::Language => {
                let Some(language) = self.options.languages.get(index) else {
                    return false;
                };
                self.filters.language = Some(language.clone());
            }
            FilterDimension::Type => {
                let Some(media_type) = self.options.types.get(index) else {
                    return false;
                };
                self.filters.media_type = Some(*media_type);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use cinefind_api::tmdb::Genre;

    use super::*;

    fn make_item(id: u64) -> MediaItem {
        MediaItem {
            id,
            title: Some(format!("Title {id}")),
            name: None,
            original_language: None,
            release_date: None,
            first_air_date: None,
            overview: None,
            popularity: 0.0,
            vote_average: 0.0,
            genre_ids: vec![],
            poster_path: None,
            media_type: None,
        }
    }

    fn make_items(count: u64) -> Vec<MediaItem> {
        (1..=count).map(make_item).collect()
    }

    fn make_catalog() -> GenreCatalog {
        GenreCatalog::new(vec![Genre {
            id: 28,
            name: String::from("Action"),
        }])
    }

    /// State after the startup catalog arrived and the first fetch settled.
    fn loaded_state(item_count: u64) -> BrowserState {
        let mut state = BrowserState::new(5);
        let effect = state.apply(BrowserEvent::CatalogLoaded(make_catalog()));
        let Some(Effect::Refresh(spec)) = effect else {
            panic!("catalog load must refresh");
        };
        state.apply(BrowserEvent::ResultsArrived {
            token: spec.token,
            items: make_items(item_count),
        });
        state
    }

    fn refresh_token(effect: Option<Effect>) -> u64 {
        match effect {
            Some(Effect::Refresh(spec)) => spec.token,
            other => panic!("expected refresh effect, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        // Arrange & Act
        let state = BrowserState::new(5);

        // Assert
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.input_mode, InputMode::Grid);
        assert!(state.results.is_empty());
        assert!(state.trailer.is_none());
        assert!(state.notice.is_none());
        assert_eq!(state.heading(), "Movies & TV Shows");
    }

    #[test]
    fn test_catalog_load_starts_initial_cycle() {
        // Arrange
        let mut state = BrowserState::new(5);

        // Act
        let effect = state.apply(BrowserEvent::CatalogLoaded(make_catalog()));

        // Assert
        assert_eq!(state.phase, Phase::Loading);
        let Some(Effect::Refresh(spec)) = effect else {
            panic!("expected refresh");
        };
        assert_eq!(spec.token, 1);
        assert_eq!(spec.row_size, 5);
        assert!(spec.search.committed.is_none());
    }

    #[test]
    fn test_results_arrival_loads_grid() {
        // Arrange & Act
        let state = loaded_state(10);

        // Assert
        assert_eq!(state.phase, Phase::Loaded);
        assert_eq!(state.results.len(), 10);
    }

    #[test]
    fn test_stale_results_are_discarded() {
        // Arrange: two refreshes in flight (filter pick while loading)
        let mut state = BrowserState::new(5);
        let first = refresh_token(state.apply(BrowserEvent::CatalogLoaded(make_catalog())));
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Genre));
        let second = refresh_token(state.apply(BrowserEvent::MenuPick));

        // Act: newer response lands first, older one afterwards
        state.apply(BrowserEvent::ResultsArrived {
            token: second,
            items: make_items(5),
        });
        state.apply(BrowserEvent::ResultsArrived {
            token: first,
            items: make_items(15),
        });

        // Assert: the slow old response did not overwrite the newer result
        assert_eq!(state.results.len(), 5);
        assert_eq!(state.phase, Phase::Loaded);
    }

    #[test]
    fn test_search_submit_commits_and_refreshes() {
        // Arrange
        let mut state = loaded_state(5);
        state.apply(BrowserEvent::StartSearch);
        for c in "Matrix".chars() {
            state.apply(BrowserEvent::SearchChar(c));
        }

        // Act
        let effect = state.apply(BrowserEvent::SearchSubmit);

        // Assert
        let Some(Effect::Refresh(spec)) = effect else {
            panic!("expected refresh");
        };
        assert_eq!(spec.search.committed.as_deref(), Some("Matrix"));
        assert_eq!(state.phase, Phase::Loading);
        assert_eq!(state.input_mode, InputMode::Grid);
        assert_eq!(state.heading(), "Search Results for \"Matrix\"");
    }

    #[test]
    fn test_blank_search_submit_falls_back_to_discover() {
        // Arrange
        let mut state = loaded_state(5);
        state.apply(BrowserEvent::StartSearch);
        state.apply(BrowserEvent::SearchChar(' '));

        // Act
        let effect = state.apply(BrowserEvent::SearchSubmit);

        // Assert: still refreshes, but with no committed query
        let Some(Effect::Refresh(spec)) = effect else {
            panic!("expected refresh");
        };
        assert!(spec.search.committed.is_none());
        assert_eq!(state.heading(), "Movies & TV Shows");
    }

    #[test]
    fn test_search_chars_ignored_outside_search_mode() {
        // Arrange
        let mut state = loaded_state(5);

        // Act
        state.apply(BrowserEvent::SearchChar('x'));

        // Assert
        assert!(state.search.input.is_empty());
    }

    #[test]
    fn test_menu_pick_sets_filter_and_refreshes() {
        // Arrange
        let mut state = loaded_state(5);
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Genre));
        state.apply(BrowserEvent::MenuDown);

        // Act
        let effect = state.apply(BrowserEvent::MenuPick);

        // Assert: second genre option is "Comedy"
        assert_eq!(state.filters.genre.as_deref(), Some("Comedy"));
        let Some(Effect::Refresh(spec)) = effect else {
            panic!("expected refresh");
        };
        assert_eq!(spec.filters.genre.as_deref(), Some("Comedy"));
    }

    #[test]
    fn test_menu_clear_unsets_dimension() {
        // Arrange
        let mut state = loaded_state(5);
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Year));
        state.apply(BrowserEvent::MenuPick);
        assert!(state.filters.year.is_some());

        // Act
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Year));
        let effect = state.apply(BrowserEvent::MenuClear);

        // Assert
        assert!(state.filters.year.is_none());
        assert!(matches!(effect, Some(Effect::Refresh(_))));
    }

    #[test]
    fn test_menu_opens_on_current_selection() {
        // Arrange
        let mut state = loaded_state(5);
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Language));
        state.apply(BrowserEvent::MenuDown);
        state.apply(BrowserEvent::MenuDown);
        state.apply(BrowserEvent::MenuPick); // "Japanese"

        // Act
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Language));

        // Assert
        assert_eq!(state.menu_cursor, 2);
    }

    #[test]
    fn test_menu_cursor_clamps_at_ends() {
        // Arrange
        let mut state = loaded_state(5);
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Type));

        // Act & Assert: two options, cursor stays in range
        state.apply(BrowserEvent::MenuUp);
        assert_eq!(state.menu_cursor, 0);
        for _ in 0..5 {
            state.apply(BrowserEvent::MenuDown);
        }
        assert_eq!(state.menu_cursor, 1);
    }

    #[test]
    fn test_menu_cancel_keeps_filters() {
        // Arrange
        let mut state = loaded_state(5);
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Genre));
        state.apply(BrowserEvent::MenuDown);

        // Act
        let effect = state.apply(BrowserEvent::MenuCancel);

        // Assert
        assert!(effect.is_none());
        assert!(state.filters.genre.is_none());
        assert_eq!(state.input_mode, InputMode::Grid);
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        // Arrange
        let mut state = loaded_state(15);

        // Act & Assert
        state.apply(BrowserEvent::CursorRight);
        assert_eq!(state.cursor, 1);
        state.apply(BrowserEvent::CursorDown);
        assert_eq!(state.cursor, 6);
        state.apply(BrowserEvent::CursorUp);
        assert_eq!(state.cursor, 1);
        state.apply(BrowserEvent::CursorLeft);
        assert_eq!(state.cursor, 0);
        state.apply(BrowserEvent::CursorLeft);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_clamps_to_last_result() {
        // Arrange
        let mut state = loaded_state(5);

        // Act
        for _ in 0..10 {
            state.apply(BrowserEvent::CursorDown);
        }

        // Assert
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_cursor_clamped_when_results_shrink() {
        // Arrange
        let mut state = loaded_state(15);
        for _ in 0..14 {
            state.apply(BrowserEvent::CursorRight);
        }
        assert_eq!(state.cursor, 14);

        // Act: a refresh settles with fewer rows
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Genre));
        let token = refresh_token(state.apply(BrowserEvent::MenuPick));
        state.apply(BrowserEvent::ResultsArrived {
            token,
            items: make_items(5),
        });

        // Assert
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_trailer_request_and_success() {
        // Arrange
        let mut state = loaded_state(5);

        // Act
        let effect = state.apply(BrowserEvent::RequestTrailer);
        let Some(Effect::ResolveTrailer(spec)) = effect else {
            panic!("expected trailer resolution");
        };
        state.apply(BrowserEvent::TrailerArrived {
            token: spec.token,
            url: Some(String::from("https://www.youtube.com/embed/abc")),
        });

        // Assert
        assert_eq!(spec.id, 1);
        assert_eq!(spec.media_type, MediaType::Movie);
        assert_eq!(
            state.trailer.as_deref(),
            Some("https://www.youtube.com/embed/abc")
        );
    }

    #[test]
    fn test_trailer_missing_shows_notice() {
        // Arrange
        let mut state = loaded_state(5);
        let effect = state.apply(BrowserEvent::RequestTrailer);
        let Some(Effect::ResolveTrailer(spec)) = effect else {
            panic!("expected trailer resolution");
        };

        // Act
        state.apply(BrowserEvent::TrailerArrived {
            token: spec.token,
            url: None,
        });

        // Assert
        assert!(state.trailer.is_none());
        assert_eq!(state.notice.as_deref(), Some(TRAILER_UNAVAILABLE));

        // Dismiss
        state.apply(BrowserEvent::DismissNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_trailer_failure_stays_closed() {
        // Arrange
        let mut state = loaded_state(5);
        let effect = state.apply(BrowserEvent::RequestTrailer);
        let Some(Effect::ResolveTrailer(spec)) = effect else {
            panic!("expected trailer resolution");
        };

        // Act
        state.apply(BrowserEvent::TrailerFailed { token: spec.token });

        // Assert
        assert!(state.trailer.is_none());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_trailer_outcome_stale_after_newer_refresh() {
        // Arrange
        let mut state = loaded_state(5);
        let effect = state.apply(BrowserEvent::RequestTrailer);
        let Some(Effect::ResolveTrailer(spec)) = effect else {
            panic!("expected trailer resolution");
        };

        // Act: the user picks a filter before the trailer resolves
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Genre));
        state.apply(BrowserEvent::MenuPick);
        state.apply(BrowserEvent::TrailerArrived {
            token: spec.token,
            url: Some(String::from("https://www.youtube.com/embed/late")),
        });

        // Assert: stale trailer is discarded
        assert!(state.trailer.is_none());
    }

    #[test]
    fn test_trailer_request_on_empty_grid_is_ignored() {
        // Arrange
        let mut state = loaded_state(0);

        // Act
        let effect = state.apply(BrowserEvent::RequestTrailer);

        // Assert
        assert!(effect.is_none());
    }

    #[test]
    fn test_trailer_uses_item_media_type_discriminator() {
        // Arrange: a trending-style row marked as TV
        let mut state = loaded_state(0);
        let mut item = make_item(1396);
        item.media_type = Some(String::from("tv"));
        let token = refresh_token(state.apply(BrowserEvent::ResetHome));
        state.apply(BrowserEvent::ResultsArrived {
            token,
            items: vec![item],
        });

        // Act
        let effect = state.apply(BrowserEvent::RequestTrailer);

        // Assert
        let Some(Effect::ResolveTrailer(spec)) = effect else {
            panic!("expected trailer resolution");
        };
        assert_eq!(spec.media_type, MediaType::Tv);
    }

    #[test]
    fn test_close_trailer_discards_url() {
        // Arrange
        let mut state = loaded_state(5);
        state.trailer = Some(String::from("https://www.youtube.com/embed/abc"));

        // Act
        state.apply(BrowserEvent::CloseTrailer);

        // Assert
        assert!(state.trailer.is_none());
    }

    #[test]
    fn test_interactions_swallowed_while_trailer_open() {
        // Arrange
        let mut state = loaded_state(5);
        state.trailer = Some(String::from("https://www.youtube.com/embed/abc"));

        // Act
        let effect = state.apply(BrowserEvent::RequestTrailer);
        state.apply(BrowserEvent::CursorRight);

        // Assert
        assert!(effect.is_none());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_reset_home_clears_everything_and_refreshes() {
        // Arrange
        let mut state = loaded_state(5);
        state.apply(BrowserEvent::StartSearch);
        for c in "Matrix".chars() {
            state.apply(BrowserEvent::SearchChar(c));
        }
        state.apply(BrowserEvent::SearchSubmit);
        state.apply(BrowserEvent::OpenMenu(FilterDimension::Genre));
        state.apply(BrowserEvent::MenuPick);

        // Act
        let effect = state.apply(BrowserEvent::ResetHome);

        // Assert
        let Some(Effect::Refresh(spec)) = effect else {
            panic!("expected refresh");
        };
        assert!(spec.search.committed.is_none());
        assert!(spec.filters.is_empty());
        assert!(state.search.input.is_empty());
        assert_eq!(state.cursor, 0);
        assert_eq!(state.heading(), "Movies & TV Shows");
    }

    #[test]
    fn test_menu_labels() {
        // Arrange
        let state = BrowserState::new(5);

        // Act & Assert
        assert_eq!(
            state.menu_label(FilterDimension::Genre, 0).as_deref(),
            Some("Action")
        );
        assert_eq!(
            state.menu_label(FilterDimension::Language, 1).as_deref(),
            Some("Hindi")
        );
        assert_eq!(
            state.menu_label(FilterDimension::Type, 1).as_deref(),
            Some("TV Series")
        );
        assert!(state.menu_label(FilterDimension::Year, 99).is_none());
        assert_eq!(state.menu_len(FilterDimension::Year), 5);
    }
}
