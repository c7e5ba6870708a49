//! Filmsok Tauri Integration
//!
//! Provides a Tauri plugin that connects the page's controls to the
//! filmsok browser.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(filmsok_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend and render the returned page:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // "Top rated" button
//! let page = await invoke('plugin:filmsok|show_top_rated');
//!
//! // Search form
//! page = await invoke('plugin:filmsok|submit_search', { category: 'person', query: 'Noomi' });
//!
//! // Trailer button, id taken from the card's data-movie-id
//! page = await invoke('plugin:filmsok|request_trailer', { movieId: 603 });
//! ```
//!
//! The TMDB token and language are read from `TMDB_*` environment
//! variables when the plugin starts.

use std::sync::Arc;

use filmsok_core::{ClientConfig, FilmBrowser};
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;

/// Shared browser handed to every command
///
/// `FilmBrowser` guards its own page, so commands share it through an
/// `Arc` and a search never blocks a trailer lookup.
pub struct BrowserState {
    pub(crate) browser: Arc<FilmBrowser>,
}

impl BrowserState {
    /// Create a new BrowserState configured from the environment
    ///
    /// # Errors
    /// Returns error string if the configuration or client is invalid
    pub fn from_env() -> Result<Self, String> {
        let config = ClientConfig::from_env().map_err(|e| e.to_string())?;
        Self::with_config(config)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let browser = FilmBrowser::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            browser: Arc::new(browser),
        })
    }
}

/// Initialize the filmsok plugin
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(filmsok_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("filmsok")
        .invoke_handler(tauri::generate_handler![
            commands::show_top_rated,
            commands::show_popular,
            commands::submit_search,
            commands::request_trailer,
            commands::current_page,
            commands::dismiss_trailer
        ])
        .setup(|app, _api| {
            let state = BrowserState::from_env().map_err(Box::<dyn std::error::Error>::from)?;
            tracing::info!("filmsok plugin ready");
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use filmsok_core::Page;
