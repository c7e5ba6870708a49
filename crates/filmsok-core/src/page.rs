//! Visible page state
//!
//! Holds what the user currently sees: the heading, the results
//! container, the trailer modal and any blocking notices. The page is
//! only mutated through these methods, and each search replaces the
//! results container wholesale.

use serde::Serialize;

use crate::render::cards::RenderedCard;
use crate::render::render_trailer_embed;
use crate::types::TrailerReference;
use crate::url::build_embed_url;

/// Handle to the page heading element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub text: String,
}

/// One child of the results container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultNode {
    Card(RenderedCard),
    Message { html: String },
}

impl ResultNode {
    pub fn html(&self) -> &str {
        match self {
            ResultNode::Card(card) => &card.html,
            ResultNode::Message { html } => html,
        }
    }
}

/// Blocking notification raised by a trailer lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    TrailerUnavailable,
    TrailerFailed,
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::TrailerUnavailable => "Ingen trailer tillgänglig för denna film.",
            Alert::TrailerFailed => "Kunde inte ladda trailern.",
        }
    }
}

/// Modal playing one trailer, built fresh for every display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailerModal {
    pub key: String,
    pub embed_url: String,
    pub body_html: String,
}

impl TrailerModal {
    pub fn new(reference: &TrailerReference) -> Self {
        Self {
            key: reference.key.clone(),
            embed_url: build_embed_url(&reference.key),
            body_html: render_trailer_embed(&reference.key),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    heading: Option<Heading>,
    results: Vec<ResultNode>,
    modal: Option<TrailerModal>,
    alerts: Vec<Alert>,
}

impl Page {
    /// Page without a heading element; heading updates are ignored
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heading(text: &str) -> Self {
        Self {
            heading: Some(Heading {
                text: text.to_string(),
            }),
            ..Self::default()
        }
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_ref().map(|h| h.text.as_str())
    }

    /// Returns false when there is no heading to update
    pub fn set_heading(&mut self, text: &str) -> bool {
        match self.heading.as_mut() {
            Some(heading) => {
                heading.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    pub fn push_card(&mut self, card: RenderedCard) {
        self.results.push(ResultNode::Card(card));
    }

    /// Replace the whole results container with a single message
    pub fn show_message(&mut self, html: String) {
        self.results.clear();
        self.results.push(ResultNode::Message { html });
    }

    pub fn results(&self) -> &[ResultNode] {
        &self.results
    }

    pub fn cards(&self) -> impl Iterator<Item = &RenderedCard> {
        self.results.iter().filter_map(|node| match node {
            ResultNode::Card(card) => Some(card),
            ResultNode::Message { .. } => None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// Title ids bound to the trailer buttons, in grid order
    pub fn trailer_targets(&self) -> Vec<u64> {
        self.cards().filter_map(|card| card.trailer_target).collect()
    }

    /// Container markup as the browser would hold it
    pub fn results_html(&self) -> String {
        self.results.iter().map(ResultNode::html).collect()
    }

    pub fn open_modal(&mut self, modal: TrailerModal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) -> Option<TrailerModal> {
        self.modal.take()
    }

    pub fn modal(&self) -> Option<&TrailerModal> {
        self.modal.as_ref()
    }

    pub fn alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Hand pending alerts to the front end, which shows them once
    pub fn take_alerts(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }
}
