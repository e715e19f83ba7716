//! Keyword search over a static travel recommendation dataset.
//!
//! A search term is classified into one of five categories (beaches, temples,
//! or the cities of Australia, Japan and Brazil), the dataset is fetched fresh
//! from its host, and the matching destinations are turned into a
//! [`RenderPayload`]: cards, an optional local-time banner, or an empty or
//! failure message. Presentation stays behind the [`Presenter`] trait.

pub mod builder;
pub mod classifier;
pub mod config;
pub mod contact;
pub mod error;
pub mod fetchers;
pub mod model;
pub mod panel;
pub mod pipelines;
pub mod presenters;
pub mod renderer;
pub mod time;

pub use builder::{RecommendationSearch, SearchBuilder, SearchResult};
pub use classifier::{classify, Category};
pub use config::SearchConfig;
pub use contact::{ContactForm, ContactReceipt};
pub use error::{ContactError, SearchError, TimeError};
pub use fetchers::{DatasetSource, RequestFetcher};
pub use model::{Country, Dataset, Destination};
pub use panel::{DismissSignal, ResultsPanel};
pub use pipelines::{SearchOutcome, SearchPipeline};
pub use presenters::{HtmlPresenter, OutputStyle, Presenter, TerminalPresenter};
pub use renderer::{render, render_failure, Card, RenderPayload, VisitAction};
pub use time::{resolve_time, TimeInfo};

/// Search the default dataset for `term`.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let result = travel_recommendation::search("japan").await?;
/// for card in result.payload.cards() {
///     println!("{}", card.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(term: &str) -> Result<SearchResult, SearchError> {
    RecommendationSearch::builder().term(term).build().await
}

/// Search the dataset served at `url` for `term`.
pub async fn search_dataset_at(url: &str, term: &str) -> Result<SearchResult, SearchError> {
    RecommendationSearch::builder()
        .term(term)
        .dataset_url(url)
        .build()
        .await
}
