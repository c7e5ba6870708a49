//! Main browser API
//!
//! Combines the TMDB client, the card renderers and the page model into
//! the search-and-render flow. Operations never return errors: every
//! failure is logged and turned into something visible on the page.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::client::{ClientConfig, TmdbClient};
use crate::error::{FilmsokError, Result};
use crate::page::{Alert, Page, TrailerModal};
use crate::render::{MAX_CARDS, render_card, render_empty_state, render_error};
use crate::types::{
    Category, ResultItem, SearchRequest, SearchResponse, TrailerReference, VideosResponse,
};
use crate::url::{build_request_url, build_videos_url};

/// What a search did to the results container
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", content = "cards", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Container now holds this many cards
    Rendered(usize),
    /// No results; the empty-state message is shown
    Empty,
    /// Request failed; the generic error message is shown
    Failed,
    /// A newer search was issued meanwhile; the response was dropped
    Superseded,
}

/// What a trailer request did
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", content = "key", rename_all = "snake_case")]
pub enum TrailerOutcome {
    /// Modal opened with this video key
    Opened(String),
    /// No videos listed; the unavailable notice is shown
    Unavailable,
    /// Lookup failed; the failure notice is shown
    Failed,
}

/// Search, render and trailer flow over a shared page
///
/// Cheap to share behind an `Arc`: searches and trailer lookups may run
/// concurrently. The page lock is never held across a network call.
pub struct FilmBrowser {
    client: TmdbClient,
    page: Arc<Mutex<Page>>,
    generation: AtomicU64,
}

impl FilmBrowser {
    /// Create a browser with default client configuration and a page
    /// that has an empty heading
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TmdbClient::with_config(config)?;
        Ok(Self::with_page(client, Page::with_heading("")))
    }

    /// Create a browser over an existing client and page
    pub fn with_page(client: TmdbClient, page: Page) -> Self {
        Self {
            client,
            page: Arc::new(Mutex::new(page)),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the page as it is right now
    pub async fn page(&self) -> Page {
        self.page.lock().await.clone()
    }

    /// Shared handle to the live page
    pub fn page_handle(&self) -> Arc<Mutex<Page>> {
        Arc::clone(&self.page)
    }

    /// Set the heading text; does nothing if the page has no heading
    pub async fn set_heading(&self, text: &str) {
        if !self.page.lock().await.set_heading(text) {
            debug!("no heading element, skipping heading update");
        }
    }

    /// Browse a category, or search it when `search_term` is not blank
    ///
    /// Only the most recently issued search may touch the results
    /// container; earlier responses that arrive late are dropped.
    pub async fn run_search(&self, category: Category, search_term: &str) -> SearchOutcome {
        let request = SearchRequest::new(category, search_term);
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = self.fetch_results(&request).await;

        let mut page = self.page.lock().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(category = %category, ticket, "discarding superseded search response");
            return SearchOutcome::Superseded;
        }

        match fetched {
            Ok(items) if items.is_empty() => {
                page.set_heading("");
                page.show_message(render_empty_state(category));
                SearchOutcome::Empty
            }
            Ok(items) => {
                page.clear_results();
                for item in &items {
                    page.push_card(render_card(item));
                }
                info!(category = %category, cards = items.len(), "rendered search results");
                SearchOutcome::Rendered(items.len())
            }
            Err(e) => {
                if e.is_network_failure() {
                    error!(category = %category, error = %e, "search request failed");
                } else {
                    warn!(category = %category, error = %e, "search endpoint not found");
                }
                page.show_message(render_error());
                SearchOutcome::Failed
            }
        }
    }

    /// Fetch the first page of results, capped at `MAX_CARDS` items
    ///
    /// A result that cannot be read is skipped so the rest of the grid
    /// still renders.
    async fn fetch_results(&self, request: &SearchRequest) -> Result<Vec<ResultItem>> {
        let url = build_request_url(self.client.base_url(), request, self.client.locale());
        let response: SearchResponse = self.client.get_json(&url).await?;

        let items = response
            .results
            .unwrap_or_default()
            .into_iter()
            .take(MAX_CARDS)
            .filter_map(
                |value| match ResultItem::from_json(request.category, value) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!(category = %request.category, error = %e, "skipping unreadable result");
                        None
                    }
                },
            )
            .collect();

        Ok(items)
    }

    /// Look up the trailer for a title and open it in the modal
    ///
    /// Failures only raise a notice; the results grid is left alone.
    pub async fn request_trailer(&self, movie_id: u64) -> TrailerOutcome {
        match self.fetch_trailer(movie_id).await {
            Ok(Some(reference)) => {
                let mut page = self.page.lock().await;
                page.open_modal(TrailerModal::new(&reference));
                debug!(movie_id, key = %reference.key, "opened trailer modal");
                TrailerOutcome::Opened(reference.key)
            }
            Ok(None) => {
                info!(movie_id, "no trailer available");
                self.page.lock().await.alert(Alert::TrailerUnavailable);
                TrailerOutcome::Unavailable
            }
            Err(e) => {
                error!(movie_id, error = %e, "failed to load trailer");
                self.page.lock().await.alert(Alert::TrailerFailed);
                TrailerOutcome::Failed
            }
        }
    }

    /// A 404 means TMDB knows no videos for the title, not a failed lookup
    async fn fetch_trailer(&self, movie_id: u64) -> Result<Option<TrailerReference>> {
        let url = build_videos_url(self.client.base_url(), movie_id, self.client.locale());
        let videos: VideosResponse = match self.client.get_json(&url).await {
            Ok(videos) => videos,
            Err(FilmsokError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        if let Some(video) = videos.results.first() {
            debug!(
                movie_id,
                name = video.name.as_deref().unwrap_or(""),
                site = video.site.as_deref().unwrap_or(""),
                "picked first listed video"
            );
        }
        Ok(videos.first_trailer())
    }

    /// Resolve a category string coming from the front end
    pub fn parse_category(value: Option<&str>) -> Result<Category> {
        match value {
            Some(value) => value.parse(),
            None => Ok(Category::Movie),
        }
    }
}
