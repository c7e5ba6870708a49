//! Result cards and results-container messages
//!
//! Builds one card per result item. Person cards show a profile with a
//! short filmography, title cards a backdrop with a trailer button.

use serde::Serialize;

use super::escape_html;
use crate::types::{Category, PersonResult, ResultItem, TitleResult};
use crate::url::{DEFAULT_PROFILE_IMAGE, DEFAULT_TITLE_IMAGE, build_image_url};

/// Cards rendered per search, the rest of the result page is dropped
pub const MAX_CARDS: usize = 10;

/// Known-for credits listed on a person card
pub const MAX_KNOWN_FOR: usize = 4;

const CARD_COLUMN: &str = "col-sm-6 col-md-4 col-lg-4";

/// Markup for one result plus the title id its trailer button targets
///
/// The id travels with the card so a click handler never has to look it
/// up from surrounding state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    pub html: String,
    pub trailer_target: Option<u64>,
}

/// Render any result item as a card
pub fn render_card(item: &ResultItem) -> RenderedCard {
    match item {
        ResultItem::Person(person) => RenderedCard {
            html: render_person_card(person),
            trailer_target: None,
        },
        ResultItem::Title(title) => RenderedCard {
            html: render_title_card(title),
            trailer_target: Some(title.id),
        },
    }
}

/// Profile card: photo, name, department and up to four known-for credits
pub fn render_person_card(person: &PersonResult) -> String {
    let image = build_image_url(person.profile_path(), DEFAULT_PROFILE_IMAGE);
    let name = escape_html(&person.name);

    format!(
        concat!(
            r#"<div class="{column}">"#,
            r#"<div class="card mb-3" style="width: 100%;">"#,
            r#"<img class="card-img-top" src="{image}" style="width:100%;height:400px;object-fit:cover;" alt="{name}">"#,
            r#"<div class="card-body">"#,
            r#"<h5 class="card-title">{name}</h5>"#,
            r#"<p class="card-text text-muted">{department}</p>"#,
            "{known_for}",
            "</div></div></div>"
        ),
        column = CARD_COLUMN,
        image = escape_html(&image),
        name = name,
        department = escape_html(person.department()),
        known_for = render_known_for(person),
    )
}

fn render_known_for(person: &PersonResult) -> String {
    let credits = person.known_for();
    if credits.is_empty() {
        return r#"<small class="text-muted mt-2 d-block">Ingen filmografi tillgänglig</small>"#
            .to_string();
    }

    let items: String = credits
        .iter()
        .take(MAX_KNOWN_FOR)
        .map(|credit| {
            let title = escape_html(credit.display_title());
            format!(
                r#"<li class="text-truncate" title="{title}">• {title} <small class="text-muted">({year})</small></li>"#,
                title = title,
                year = escape_html(credit.display_year()),
            )
        })
        .collect();

    let overflow = match credits.len().checked_sub(MAX_KNOWN_FOR) {
        Some(rest) if rest > 0 => format!(
            r#"<small class="text-muted d-block mt-1">+ ytterligare {} titlar</small>"#,
            rest
        ),
        _ => String::new(),
    };

    format!(
        concat!(
            r#"<div class="mt-3">"#,
            r#"<h6 class="mb-2">🎬 Kända roller:</h6>"#,
            r#"<ul class="list-unstyled mb-0" style="font-size: 0.85rem;">{items}</ul>"#,
            "{overflow}",
            "</div>"
        ),
        items = items,
        overflow = overflow,
    )
}

/// Title card: backdrop, title with year, synopsis and the trailer button
pub fn render_title_card(title: &TitleResult) -> String {
    let image = build_image_url(title.image_path(), DEFAULT_TITLE_IMAGE);

    format!(
        concat!(
            r#"<div class="{column}">"#,
            r#"<div class="card mb-3" style="width: 100%;">"#,
            r#"<img class="card-img-top" src="{image}" style="width:100%;height:200px;object-fit:cover;" alt="{alt}">"#,
            r#"<div class="card-body">"#,
            r#"<h5 class="card-title">{heading}</h5>"#,
            r#"<p class="card-text text-truncate">{overview}</p>"#,
            r##"<a href="#" data-movie-id="{id}" class="btn btn-primary">Titta</a>"##,
            "</div></div></div>"
        ),
        column = CARD_COLUMN,
        image = escape_html(&image),
        alt = escape_html(&title.title),
        heading = escape_html(&title.title_with_year()),
        overview = escape_html(title.overview()),
        id = title.id,
    )
}

/// Message shown in place of cards when a search returns nothing
pub fn render_empty_state(category: Category) -> String {
    let message = if category.is_person() {
        "Inga skådespelare hittades"
    } else {
        "Inga filmer hittades"
    };
    format!(
        r#"<div class="col-12"><p class="text-muted fs-5">{}</p></div>"#,
        message
    )
}

/// Generic failure message; 404 and network errors look the same to users
pub fn render_error() -> String {
    r#"<div class="col-12"><p class="text-danger">Ett fel uppstod vid hämtning av data.</p></div>"#
        .to_string()
}
