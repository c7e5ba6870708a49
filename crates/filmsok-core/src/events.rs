//! Inbound UI events
//!
//! The page's controls (top rated, popular, search form, trailer
//! buttons) are reduced to `UiEvent` values and dispatched here.

use serde::{Deserialize, Serialize};

use crate::browser::{FilmBrowser, SearchOutcome, TrailerOutcome};
use crate::types::Category;

pub const HEADING_TOP_RATED: &str = "Topp tio filmer";
pub const HEADING_POPULAR: &str = "Mest populära filmer";
pub const HEADING_PEOPLE: &str = "Skådespelare";
pub const HEADING_MOVIES: &str = "Filmer";

/// A user interaction with the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// "Top rated" control clicked
    TopRated,
    /// "Popular" control clicked
    Popular,
    /// Search form submitted; `category` is the checked radio button
    Search {
        #[serde(default)]
        category: Option<Category>,
        #[serde(default)]
        query: String,
    },
    /// Trailer button on a card clicked; the id is the card's binding
    Trailer { movie_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventOutcome {
    Search(SearchOutcome),
    Trailer(TrailerOutcome),
}

/// Heading shown for a submitted search
pub fn search_heading(category: Category) -> &'static str {
    if category.is_person() {
        HEADING_PEOPLE
    } else {
        HEADING_MOVIES
    }
}

impl FilmBrowser {
    /// Dispatch one UI event
    ///
    /// Search events set the heading before the request goes out, the
    /// way the page updates it while results are still loading.
    pub async fn handle_event(&self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::TopRated => {
                self.set_heading(HEADING_TOP_RATED).await;
                EventOutcome::Search(self.run_search(Category::TopRated, "").await)
            }
            UiEvent::Popular => {
                self.set_heading(HEADING_POPULAR).await;
                EventOutcome::Search(self.run_search(Category::Popular, "").await)
            }
            UiEvent::Search { category, query } => {
                let category = category.unwrap_or(Category::Movie);
                self.set_heading(search_heading(category)).await;
                EventOutcome::Search(self.run_search(category, &query).await)
            }
            UiEvent::Trailer { movie_id } => {
                EventOutcome::Trailer(self.request_trailer(movie_id).await)
            }
        }
    }
}
