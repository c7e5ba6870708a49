//! Core data types for the filmsok client
//!
//! Request values, the JSON shapes returned by TMDB, and the
//! per-category result items cards are rendered from.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FilmsokError;

static YEAR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})").expect("static regex is valid"));

/// Content kind being browsed or searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Highest rated movies (browse)
    TopRated,
    /// Currently popular movies (browse)
    Popular,
    /// Movie titles (search)
    Movie,
    /// Actors and other people (search)
    Person,
}

impl Category {
    /// Path segment used in TMDB endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TopRated => "top_rated",
            Category::Popular => "popular",
            Category::Movie => "movie",
            Category::Person => "person",
        }
    }

    /// People render as profile cards, everything else as title cards
    pub fn is_person(&self) -> bool {
        matches!(self, Category::Person)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FilmsokError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_rated" => Ok(Category::TopRated),
            "popular" => Ok(Category::Popular),
            "movie" => Ok(Category::Movie),
            "person" => Ok(Category::Person),
            other => Err(FilmsokError::InvalidCategory(other.to_string())),
        }
    }
}

/// One search or browse request
///
/// The query is stored trimmed; a blank query is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub category: Category,
    pub query: Option<String>,
}

impl SearchRequest {
    pub fn new(category: Category, search_term: &str) -> Self {
        let trimmed = search_term.trim();
        let query = (!trimmed.is_empty()).then(|| trimmed.to_string());
        Self { category, query }
    }

    /// True when the request targets the search endpoint
    pub fn is_search(&self) -> bool {
        self.query.is_some()
    }
}

/// Raw `results` envelope shared by the browse and search endpoints
///
/// Items stay as JSON until the category tells us how to read them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<serde_json::Value>>,
}

/// A person from `/search/person`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub known_for: Option<Vec<KnownForEntry>>,
}

impl PersonResult {
    pub fn profile_path(&self) -> Option<&str> {
        non_empty(&self.profile_path)
    }

    pub fn department(&self) -> &str {
        non_empty(&self.known_for_department).unwrap_or("")
    }

    pub fn known_for(&self) -> &[KnownForEntry] {
        self.known_for.as_deref().unwrap_or(&[])
    }
}

/// A credit listed under a person's `known_for`
///
/// Movies carry `title`/`release_date`, TV shows `name`/`first_air_date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnownForEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

impl KnownForEntry {
    pub fn display_title(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.name))
            .unwrap_or("Okänd titel")
    }

    /// Four digit year, or `?` when the credit has no usable date
    pub fn display_year(&self) -> &str {
        let date = non_empty(&self.release_date).or_else(|| non_empty(&self.first_air_date));
        release_year(date).unwrap_or("?")
    }
}

/// A movie from the browse endpoints or `/search/movie`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl TitleResult {
    /// Backdrop if present, otherwise the poster
    pub fn image_path(&self) -> Option<&str> {
        non_empty(&self.backdrop_path).or_else(|| non_empty(&self.poster_path))
    }

    pub fn year(&self) -> Option<&str> {
        release_year(non_empty(&self.release_date))
    }

    /// `Title (YYYY)` when a release year is known, the bare title otherwise
    pub fn title_with_year(&self) -> String {
        match self.year() {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }

    pub fn overview(&self) -> &str {
        non_empty(&self.overview).unwrap_or("")
    }
}

/// One entry of a result list, shaped by the request category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultItem {
    Person(PersonResult),
    Title(TitleResult),
}

impl ResultItem {
    /// Read a raw result according to the category it was requested under
    pub fn from_json(category: Category, value: serde_json::Value) -> crate::Result<Self> {
        let item = if category.is_person() {
            ResultItem::Person(serde_json::from_value(value).map_err(|e| {
                FilmsokError::ParseError(format!("person result: {}", e))
            })?)
        } else {
            ResultItem::Title(serde_json::from_value(value).map_err(|e| {
                FilmsokError::ParseError(format!("title result: {}", e))
            })?)
        };
        Ok(item)
    }
}

/// Envelope of `/movie/{id}/videos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideosResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Video>,
}

impl VideosResponse {
    /// Key of the first listed video, which is what gets played
    pub fn first_trailer(&self) -> Option<TrailerReference> {
        self.results.first().map(|video| TrailerReference {
            key: video.key.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Video {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
}

/// Resolved video key for a single trailer display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerReference {
    pub key: String,
}

/// Leading four digit year of a `YYYY-MM-DD` date
pub fn release_year(date: Option<&str>) -> Option<&str> {
    let date = date?;
    YEAR_PREFIX
        .captures(date)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// TMDB sends `null` for unknown values; read those like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
