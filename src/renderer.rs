use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;

use crate::classifier::Category;
use crate::model::{Dataset, Destination};
use crate::time::{resolve_time_at, timezone_for, TimeInfo};

pub const FAILURE_TITLE: &str = "Oops! Something went wrong";
pub const FAILURE_HINT: &str = "Please try your search again.";

/// Request to open the booking page for one recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitAction {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub visit: VisitAction,
}

impl From<&Destination> for Card {
    fn from(item: &Destination) -> Self {
        Card {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            image_url: item.image_url.clone(),
            visit: VisitAction { id: item.id },
        }
    }
}

/// Presentation-agnostic result of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPayload {
    /// At least one card, optionally preceded by a time banner.
    Results {
        time: Option<TimeInfo>,
        cards: Vec<Card>,
    },
    /// The search matched nothing.
    Empty { message: String },
    /// The dataset could not be loaded.
    Failed { message: String },
}

impl RenderPayload {
    pub fn cards(&self) -> &[Card] {
        match self {
            RenderPayload::Results { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn time(&self) -> Option<&TimeInfo> {
        match self {
            RenderPayload::Results { time, .. } => time.as_ref(),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            RenderPayload::Empty { message } | RenderPayload::Failed { message } => Some(message),
            RenderPayload::Results { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderPayload::Empty { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderPayload::Failed { .. })
    }
}

pub fn empty_message(search_term: &str) -> String {
    format!("No recommendations found for \"{}\".", search_term)
}

/// Generic payload shown when the dataset could not be fetched.
pub fn render_failure() -> RenderPayload {
    RenderPayload::Failed {
        message: format!("{}. {}", FAILURE_TITLE, FAILURE_HINT),
    }
}

/// Build the payload for `category` using the current time for the banner.
pub fn render(category: Category, dataset: &Dataset, search_term: &str) -> RenderPayload {
    render_at(category, dataset, search_term, Utc::now())
}

pub fn render_at(
    category: Category,
    dataset: &Dataset,
    search_term: &str,
    now: DateTime<Utc>,
) -> RenderPayload {
    let items = category.select(dataset).unwrap_or_default();
    if items.is_empty() {
        debug!("No items for {:?} (term '{}')", category, search_term);
        return RenderPayload::Empty {
            message: empty_message(search_term),
        };
    }

    let time = banner_candidate(category, items, search_term)
        .and_then(|item| time_banner(item, now));
    let cards = items.iter().map(Card::from).collect();

    RenderPayload::Results { time, cards }
}

/// First item whose region contains the term. For a country's cities, failing
/// that, the first city whose locality does.
fn banner_candidate<'a>(
    category: Category,
    items: &'a [Destination],
    search_term: &str,
) -> Option<&'a Destination> {
    let term = search_term.to_lowercase();
    items
        .iter()
        .find(|item| {
            item.region()
                .is_some_and(|region| region.to_lowercase().contains(&term))
        })
        .or_else(|| {
            if !category.is_cities() {
                return None;
            }
            items
                .iter()
                .find(|item| item.locality().to_lowercase().contains(&term))
        })
}

fn time_banner(item: &Destination, now: DateTime<Utc>) -> Option<TimeInfo> {
    let timezone = timezone_for(&item.name)?;
    match resolve_time_at(timezone, &item.name, now) {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("Error getting time for {}: {}", item.name, e);
            None
        }
    }
}
