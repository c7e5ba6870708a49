//! Markup builders for the results grid and trailer modal
//!
//! Every builder returns a self-contained HTML fragment using the page's
//! Bootstrap classes. Values coming from the API are always escaped.

pub mod cards;
pub mod trailer;

pub use cards::{
    MAX_CARDS, MAX_KNOWN_FOR, render_card, render_empty_state, render_error, render_person_card,
    render_title_card,
};
pub use trailer::render_trailer_embed;

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
