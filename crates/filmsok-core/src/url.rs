//! URL helper functions for TMDB
//!
//! Provides functions for building API, image and trailer embed URLs.

use crate::types::{Category, SearchRequest};

/// TMDB API v3 root
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Response language sent with every request
pub const DEFAULT_LOCALE: &str = "sv-SE";

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Bundled image for people without a profile photo
pub const DEFAULT_PROFILE_IMAGE: &str = "./images/default.profile.jpg";

/// Bundled image for titles without backdrop or poster
pub const DEFAULT_TITLE_IMAGE: &str = "./images/default.jpg";

/// Builds the browse-by-category URL
///
/// # Example
/// ```
/// use filmsok_core::url::build_browse_url;
/// let url = build_browse_url("https://api.themoviedb.org/3", "top_rated", "sv-SE");
/// assert_eq!(url, "https://api.themoviedb.org/3/movie/top_rated?language=sv-SE");
/// ```
pub fn build_browse_url(base: &str, category: &str, locale: &str) -> String {
    format!(
        "{}/movie/{}?language={}",
        trim_base(base),
        category,
        urlencoding::encode(locale)
    )
}

/// Builds the search URL for a given query
///
/// URL encodes the query and constructs the search URL.
///
/// # Example
/// ```
/// use filmsok_core::url::build_search_url;
/// let url = build_search_url("https://api.themoviedb.org/3", "movie", "star wars", "sv-SE");
/// assert_eq!(
///     url,
///     "https://api.themoviedb.org/3/search/movie?query=star%20wars&language=sv-SE"
/// );
/// ```
pub fn build_search_url(base: &str, category: &str, query: &str, locale: &str) -> String {
    format!(
        "{}/search/{}?query={}&language={}",
        trim_base(base),
        category,
        urlencoding::encode(query),
        urlencoding::encode(locale)
    )
}

/// Picks the browse or search endpoint for a request
pub fn build_request_url(base: &str, request: &SearchRequest, locale: &str) -> String {
    let category: Category = request.category;
    match request.query.as_deref() {
        Some(query) => build_search_url(base, category.as_str(), query, locale),
        None => build_browse_url(base, category.as_str(), locale),
    }
}

/// Builds the video list URL used for trailer lookups
pub fn build_videos_url(base: &str, movie_id: u64, locale: &str) -> String {
    format!(
        "{}/movie/{}/videos?language={}",
        trim_base(base),
        movie_id,
        urlencoding::encode(locale)
    )
}

/// Builds a CDN image URL, or returns `fallback` when there is no path
///
/// # Example
/// ```
/// use filmsok_core::url::{build_image_url, DEFAULT_TITLE_IMAGE};
/// assert_eq!(
///     build_image_url(Some("/abc.jpg"), DEFAULT_TITLE_IMAGE),
///     "https://image.tmdb.org/t/p/w500/abc.jpg"
/// );
/// assert_eq!(build_image_url(None, DEFAULT_TITLE_IMAGE), "./images/default.jpg");
/// ```
pub fn build_image_url(path: Option<&str>, fallback: &str) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{}{}", IMAGE_BASE, path),
        _ => fallback.to_string(),
    }
}

/// Builds the player URL embedded in the trailer modal
pub fn build_embed_url(key: &str) -> String {
    format!("{}{}", EMBED_BASE, urlencoding::encode(key))
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}
