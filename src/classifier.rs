use serde::Serialize;

use crate::model::{Dataset, Destination};

/// Result bucket a search term resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Beaches,
    Temples,
    AustraliaCities,
    JapanCities,
    BrazilCities,
    Unmatched,
}

// Checked in order; the first keyword contained in the term wins.
const KEYWORDS: [(&str, Category); 5] = [
    ("beach", Category::Beaches),
    ("temple", Category::Temples),
    ("australia", Category::AustraliaCities),
    ("japan", Category::JapanCities),
    ("brazil", Category::BrazilCities),
];

/// Map a free-text query to its category by case-insensitive keyword containment.
pub fn classify(search_term: &str) -> Category {
    let term = search_term.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| term.contains(keyword))
        .map_or(Category::Unmatched, |(_, category)| *category)
}

impl Category {
    /// The item list this category selects, or `None` for `Unmatched`.
    pub fn select<'a>(&self, dataset: &'a Dataset) -> Option<&'a [Destination]> {
        match self {
            Category::Beaches => Some(dataset.beaches.as_slice()),
            Category::Temples => Some(dataset.temples.as_slice()),
            Category::AustraliaCities => Some(dataset.cities_of("Australia", 0)),
            Category::JapanCities => Some(dataset.cities_of("Japan", 1)),
            Category::BrazilCities => Some(dataset.cities_of("Brazil", 2)),
            Category::Unmatched => None,
        }
    }

    /// Whether the category selects the cities of one country.
    pub fn is_cities(&self) -> bool {
        matches!(
            self,
            Category::AustraliaCities | Category::JapanCities | Category::BrazilCities
        )
    }
}
