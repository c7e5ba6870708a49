//! Debug script that runs one search against TMDB and prints the grid
//!
//! Usage: `TMDB_ACCESS_TOKEN=... cargo run --example render_search -- person "Noomi Rapace"`

use filmsok_core::{ClientConfig, FilmBrowser, UiEvent};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let event = match args.next().as_deref() {
        None | Some("top_rated") => UiEvent::TopRated,
        Some("popular") => UiEvent::Popular,
        Some(category) => UiEvent::Search {
            category: Some(category.parse()?),
            query: args.collect::<Vec<_>>().join(" "),
        },
    };

    let browser = FilmBrowser::with_config(ClientConfig::from_env()?)?;
    let outcome = browser.handle_event(event).await;
    println!("Outcome: {:?}\n", outcome);

    let page = browser.page().await;
    println!("Heading: {}", page.heading().unwrap_or_default());
    for node in page.results() {
        println!("{}\n", node.html());
    }

    if let Some(movie_id) = page.trailer_targets().first().copied() {
        let trailer = browser.request_trailer(movie_id).await;
        println!("Trailer for {}: {:?}", movie_id, trailer);
        let page = browser.page().await;
        for alert in page.alerts() {
            println!("Alert: {}", alert.message());
        }
    }

    Ok(())
}
