//! Filmsok Core Library
//!
//! Async client for browsing and searching movies and people on TMDB and
//! rendering the results as Bootstrap cards.
//!
//! # Overview
//!
//! This crate provides the whole search-and-render flow of the filmsok
//! page:
//! - HTTP client carrying the shared TMDB request options
//! - Card renderers for people and titles
//! - A page model (heading, results grid, trailer modal, notices)
//! - [`FilmBrowser`], which ties them together and dispatches UI events
//!
//! # Example
//!
//! ```no_run
//! use filmsok_core::{Category, ClientConfig, FilmBrowser, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let browser = FilmBrowser::with_config(ClientConfig::from_env()?)?;
//!
//!     browser.run_search(Category::Movie, "sällskapsresan").await;
//!
//!     let page = browser.page().await;
//!     println!("{}", page.results_html());
//!
//!     // Play the trailer of the first title card
//!     if let Some(movie_id) = page.trailer_targets().first() {
//!         browser.request_trailer(*movie_id).await;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failures
//!
//! [`FilmBrowser`] operations never return errors. A failed search shows a
//! generic message in the results grid, a failed trailer lookup raises an
//! [`Alert`]. Both are logged through `tracing`.

mod browser;
mod client;
mod error;
mod events;
mod page;
pub mod render;
mod types;
pub mod url;

// Re-export main browser API
pub use browser::{FilmBrowser, SearchOutcome, TrailerOutcome};

// Re-export client types
pub use client::{ClientConfig, TmdbClient};

// Re-export error types
pub use error::{FilmsokError, Result};

// Re-export UI event types
pub use events::{
    EventOutcome, HEADING_MOVIES, HEADING_PEOPLE, HEADING_POPULAR, HEADING_TOP_RATED, UiEvent,
    search_heading,
};

// Re-export page model
pub use page::{Alert, Heading, Page, ResultNode, TrailerModal};

// Re-export render entry points
pub use render::cards::RenderedCard;

// Re-export data types
pub use types::{
    Category, KnownForEntry, PersonResult, ResultItem, SearchRequest, SearchResponse,
    TitleResult, TrailerReference, Video, VideosResponse, release_year,
};
