//! End-to-end search and trailer flows against a mock TMDB server

use std::sync::Arc;
use std::time::Duration;

use filmsok_core::{
    Alert, Category, ClientConfig, EventOutcome, FilmBrowser, SearchOutcome, TrailerOutcome,
    UiEvent,
};
use scraper::{Html, Selector};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn browser_for(server: &MockServer) -> FilmBrowser {
    let config = ClientConfig {
        base_url: server.uri(),
        access_token: Some("test-token".to_string()),
        timeout_secs: 5,
        ..Default::default()
    };
    FilmBrowser::with_config(config).expect("browser should build")
}

fn movies(count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": 100 + i,
                "title": format!("Film {}", i),
                "release_date": "2001-09-14",
                "backdrop_path": format!("/b{}.jpg", i),
                "overview": "En film."
            })
        })
        .collect();
    json!({ "page": 1, "results": results })
}

fn card_titles(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("h5.card-title").unwrap();
    fragment
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_browse_uses_category_endpoint_with_locale_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .and(query_param("language", "sv-SE"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movies(3)))
        .expect(1)
        .mount(&server)
        .await;

    let browser = browser_for(&server);
    let outcome = browser.run_search(Category::TopRated, "   ").await;

    assert_eq!(outcome, SearchOutcome::Rendered(3));
    let page = browser.page().await;
    assert_eq!(
        card_titles(&page.results_html()),
        vec!["Film 0 (2001)", "Film 1 (2001)", "Film 2 (2001)"]
    );
    assert_eq!(page.trailer_targets(), vec![100, 101, 102]);
}

#[tokio::test]
async fn test_search_uses_search_endpoint_with_trimmed_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "star wars"))
        .and(query_param("language", "sv-SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movies(1)))
        .expect(1)
        .mount(&server)
        .await;

    let browser = browser_for(&server);
    let outcome = browser.run_search(Category::Movie, "  star wars ").await;
    assert_eq!(outcome, SearchOutcome::Rendered(1));
}

#[tokio::test]
async fn test_renders_at_most_ten_cards_in_api_order() {
    for count in [1usize, 9, 10, 11, 25] {
        let server = MockServer::start().await;
        mount_json(&server, "/movie/popular", movies(count)).await;

        let browser = browser_for(&server);
        let outcome = browser.run_search(Category::Popular, "").await;

        let expected = count.min(10);
        assert_eq!(outcome, SearchOutcome::Rendered(expected));
        let page = browser.page().await;
        assert_eq!(page.card_count(), expected);
        let titles = card_titles(&page.results_html());
        let wanted: Vec<String> = (0..expected).map(|i| format!("Film {} (2001)", i)).collect();
        assert_eq!(titles, wanted);
    }
}

#[tokio::test]
async fn test_empty_and_missing_results_show_empty_state() {
    let server = MockServer::start().await;
    mount_json(&server, "/search/person", json!({ "results": [] })).await;
    mount_json(&server, "/search/movie", json!({ "page": 1 })).await;

    let browser = browser_for(&server);

    browser
        .handle_event(UiEvent::Search {
            category: Some(Category::Person),
            query: "nobody".to_string(),
        })
        .await;
    let page = browser.page().await;
    assert_eq!(page.card_count(), 0);
    assert!(page.results_html().contains("Inga skådespelare hittades"));
    assert_eq!(page.heading(), Some(""));

    let outcome = browser.run_search(Category::Movie, "nothing").await;
    assert_eq!(outcome, SearchOutcome::Empty);
    let page = browser.page().await;
    assert!(page.results_html().contains("Inga filmer hittades"));
}

#[tokio::test]
async fn test_not_found_and_server_error_render_same_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let browser = browser_for(&server);

    assert_eq!(
        browser.run_search(Category::TopRated, "").await,
        SearchOutcome::Failed
    );
    let not_found = browser.page().await.results_html();

    assert_eq!(
        browser.run_search(Category::Popular, "").await,
        SearchOutcome::Failed
    );
    let server_error = browser.page().await.results_html();

    assert_eq!(not_found, server_error);
    assert!(not_found.contains("Ett fel uppstod vid hämtning av data."));
}

#[tokio::test]
async fn test_malformed_json_renders_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let browser = browser_for(&server);
    assert_eq!(
        browser.run_search(Category::Popular, "").await,
        SearchOutcome::Failed
    );
}

#[tokio::test]
async fn test_null_fields_do_not_fail_the_search() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/movie/popular",
        json!({
            "page": 1,
            "results": [
                { "id": 1, "title": "Good", "release_date": "2010-01-01", "overview": null },
                { "id": 2, "title": null, "release_date": null, "backdrop_path": null }
            ]
        }),
    )
    .await;

    let browser = browser_for(&server);
    assert_eq!(
        browser.run_search(Category::Popular, "").await,
        SearchOutcome::Rendered(2)
    );

    let page = browser.page().await;
    assert_eq!(page.card_count(), 2);
    assert_eq!(card_titles(&page.results_html()), vec!["Good (2010)", ""]);
    assert_eq!(page.trailer_targets(), vec![1, 2]);
}

#[tokio::test]
async fn test_unreadable_result_is_skipped() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/movie/popular",
        json!({
            "results": [
                { "id": "not-a-number", "title": "Broken" },
                { "id": 5, "title": "Kept" }
            ]
        }),
    )
    .await;

    let browser = browser_for(&server);
    assert_eq!(
        browser.run_search(Category::Popular, "").await,
        SearchOutcome::Rendered(1)
    );
    assert_eq!(card_titles(&browser.page().await.results_html()), vec!["Kept"]);
}

#[tokio::test]
async fn test_person_cards_cap_known_for() {
    let server = MockServer::start().await;
    let known_for: Vec<Value> = (0..6)
        .map(|i| json!({ "title": format!("Roll {}", i), "release_date": "2010-01-01" }))
        .collect();
    mount_json(
        &server,
        "/search/person",
        json!({
            "results": [
                {
                    "id": 1,
                    "name": "Stellan Skarsgård",
                    "profile_path": null,
                    "known_for_department": "Acting",
                    "known_for": known_for
                },
                { "id": 2, "name": "Ny Skådis", "known_for": [] }
            ]
        }),
    )
    .await;

    let browser = browser_for(&server);
    let outcome = browser.run_search(Category::Person, "skarsgård").await;
    assert_eq!(outcome, SearchOutcome::Rendered(2));

    let page = browser.page().await;
    let html = page.results_html();
    let fragment = Html::parse_fragment(&html);
    let items = Selector::parse("li").unwrap();
    assert_eq!(fragment.select(&items).count(), 4);
    assert!(html.contains("+ ytterligare 2 titlar"));
    assert!(html.contains("Ingen filmografi tillgänglig"));
    assert!(html.contains("./images/default.profile.jpg"));
    assert!(page.trailer_targets().is_empty());
}

#[tokio::test]
async fn test_successive_searches_replace_previous_cards() {
    let server = MockServer::start().await;
    mount_json(&server, "/movie/popular", movies(5)).await;
    mount_json(
        &server,
        "/search/person",
        json!({ "results": [{ "id": 9, "name": "Greta Garbo" }] }),
    )
    .await;

    let browser = browser_for(&server);
    browser.run_search(Category::Popular, "").await;
    assert_eq!(browser.page().await.card_count(), 5);

    browser.run_search(Category::Person, "garbo").await;
    let page = browser.page().await;
    assert_eq!(page.card_count(), 1);
    assert!(!page.results_html().contains("data-movie-id"));
    assert_eq!(card_titles(&page.results_html()), vec!["Greta Garbo"]);
}

#[tokio::test]
async fn test_late_response_from_older_search_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(movies(8))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    mount_json(&server, "/movie/top_rated", movies(2)).await;

    let browser = Arc::new(browser_for(&server));

    let slow = {
        let browser = Arc::clone(&browser);
        tokio::spawn(async move { browser.run_search(Category::Popular, "").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let fast = browser.run_search(Category::TopRated, "").await;
    let slow = slow.await.expect("search task should not panic");

    assert_eq!(fast, SearchOutcome::Rendered(2));
    assert_eq!(slow, SearchOutcome::Superseded);
    assert_eq!(browser.page().await.card_count(), 2);
}

#[tokio::test]
async fn test_trailer_opens_modal_with_first_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603/videos"))
        .and(query_param("language", "sv-SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "results": [
                { "key": "m8e-FF8MsqU", "site": "YouTube", "type": "Trailer" },
                { "key": "other", "site": "YouTube", "type": "Teaser" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let browser = browser_for(&server);
    let outcome = browser
        .handle_event(UiEvent::Trailer { movie_id: 603 })
        .await;

    assert_eq!(
        outcome,
        EventOutcome::Trailer(TrailerOutcome::Opened("m8e-FF8MsqU".to_string()))
    );
    let page = browser.page().await;
    let modal = page.modal().expect("modal should be open");
    assert!(modal.embed_url.contains("m8e-FF8MsqU"));
    assert!(modal.body_html.contains("<iframe"));
    assert!(page.alerts().is_empty());
}

#[tokio::test]
async fn test_trailer_without_videos_raises_unavailable_notice() {
    let server = MockServer::start().await;
    mount_json(&server, "/movie/7/videos", json!({ "id": 7, "results": [] })).await;

    let browser = browser_for(&server);
    assert_eq!(browser.request_trailer(7).await, TrailerOutcome::Unavailable);

    let page = browser.page().await;
    assert!(page.modal().is_none());
    assert_eq!(page.alerts(), &[Alert::TrailerUnavailable]);
}

#[tokio::test]
async fn test_trailer_not_found_raises_unavailable_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/8/videos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let browser = browser_for(&server);
    assert_eq!(browser.request_trailer(8).await, TrailerOutcome::Unavailable);

    let page = browser.page().await;
    assert!(page.modal().is_none());
    assert_eq!(page.alerts(), &[Alert::TrailerUnavailable]);
}

#[tokio::test]
async fn test_trailer_failure_leaves_grid_untouched() {
    let server = MockServer::start().await;
    mount_json(&server, "/movie/top_rated", movies(3)).await;
    Mock::given(method("GET"))
        .and(path("/movie/101/videos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let browser = browser_for(&server);
    browser.handle_event(UiEvent::TopRated).await;
    let before = browser.page().await.results_html();

    let target = browser.page().await.trailer_targets()[1];
    assert_eq!(target, 101);
    assert_eq!(browser.request_trailer(target).await, TrailerOutcome::Failed);

    let page = browser.page().await;
    assert_eq!(page.results_html(), before);
    assert_eq!(page.alerts(), &[Alert::TrailerFailed]);
    assert_eq!(page.heading(), Some("Topp tio filmer"));
}

#[tokio::test]
async fn test_handle_event_sets_headings() {
    let server = MockServer::start().await;
    mount_json(&server, "/movie/popular", movies(1)).await;
    mount_json(&server, "/search/movie", movies(1)).await;

    let browser = browser_for(&server);

    browser.handle_event(UiEvent::Popular).await;
    assert_eq!(browser.page().await.heading(), Some("Mest populära filmer"));

    let outcome = browser
        .handle_event(UiEvent::Search {
            category: None,
            query: "amelie".to_string(),
        })
        .await;
    assert_eq!(outcome, EventOutcome::Search(SearchOutcome::Rendered(1)));
    assert_eq!(browser.page().await.heading(), Some("Filmer"));
}
