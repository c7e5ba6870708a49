//! Tauri commands for the filmsok page
//!
//! One command per page control. Each returns the page after the
//! operation so the frontend can redraw heading, grid, modal and alerts.

use filmsok_core::{FilmBrowser, Page, UiEvent};
use tauri::State;

use crate::BrowserState;

/// Dispatch an event and hand back the resulting page
///
/// Alerts are drained so each one is shown exactly once.
async fn dispatch(state: &BrowserState, event: UiEvent) -> Page {
    state.browser.handle_event(event).await;
    let handle = state.browser.page_handle();
    let mut page = handle.lock().await;
    let snapshot = page.clone();
    page.take_alerts();
    snapshot
}

/// "Top rated" control
#[tauri::command]
pub async fn show_top_rated(state: State<'_, BrowserState>) -> Result<Page, String> {
    Ok(dispatch(&state, UiEvent::TopRated).await)
}

/// "Popular" control
#[tauri::command]
pub async fn show_popular(state: State<'_, BrowserState>) -> Result<Page, String> {
    Ok(dispatch(&state, UiEvent::Popular).await)
}

/// Search form submit
///
/// # Arguments
/// * `category` - Value of the checked radio button, `movie` if none
/// * `query` - Text field contents
///
/// # Errors
/// Returns error message as String if the category is unknown
#[tauri::command]
pub async fn submit_search(
    state: State<'_, BrowserState>,
    category: Option<String>,
    query: String,
) -> Result<Page, String> {
    let category = FilmBrowser::parse_category(category.as_deref()).map_err(|e| e.to_string())?;
    let event = UiEvent::Search {
        category: Some(category),
        query,
    };
    Ok(dispatch(&state, event).await)
}

/// Trailer button on a title card
#[tauri::command]
pub async fn request_trailer(
    state: State<'_, BrowserState>,
    movie_id: u64,
) -> Result<Page, String> {
    Ok(dispatch(&state, UiEvent::Trailer { movie_id }).await)
}

/// Current page without changing anything
#[tauri::command]
pub async fn current_page(state: State<'_, BrowserState>) -> Result<Page, String> {
    Ok(state.browser.page().await)
}

/// Close the trailer modal
#[tauri::command]
pub async fn dismiss_trailer(state: State<'_, BrowserState>) -> Result<Page, String> {
    let handle = state.browser.page_handle();
    let mut page = handle.lock().await;
    page.close_modal();
    Ok(page.clone())
}
