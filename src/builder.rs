use log::debug;

use crate::classifier::{classify, Category};
use crate::config::SearchConfig;
use crate::fetchers::{DatasetSource, RequestFetcher};
use crate::renderer::{render, RenderPayload};
use crate::SearchError;

/// Result of a one-shot search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Trimmed term the search ran with
    pub term: String,
    pub category: Category,
    pub payload: RenderPayload,
}

/// Builder for configuring and running a single search
#[derive(Default)]
pub struct SearchBuilder {
    term: Option<String>,
    dataset_url: Option<String>,
    config: Option<SearchConfig>,
    source: Option<Box<dyn DatasetSource>>,
}

impl SearchBuilder {
    /// Set the search term
    ///
    /// # Example
    /// ```
    /// use travel_recommendation::RecommendationSearch;
    ///
    /// let builder = RecommendationSearch::builder().term("japan");
    /// ```
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Fetch the dataset from `url` instead of the configured location
    ///
    /// # Example
    /// ```
    /// use travel_recommendation::RecommendationSearch;
    ///
    /// let builder = RecommendationSearch::builder()
    ///     .term("beach")
    ///     .dataset_url("http://localhost:8080/data.json");
    /// ```
    pub fn dataset_url(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = Some(url.into());
        self
    }

    /// Use settings other than the defaults
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Read the dataset from a custom source (takes precedence over any URL)
    pub fn source(mut self, source: impl DatasetSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Fetch the dataset and build the payload for the term
    ///
    /// Unlike [`SearchPipeline`](crate::SearchPipeline), fetch errors are
    /// returned as they are instead of becoming a failure payload.
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - No term was set, or the term is blank
    /// - The dataset cannot be fetched or decoded
    ///
    /// # Example
    /// ```no_run
    /// # use travel_recommendation::RecommendationSearch;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecommendationSearch::builder()
    ///     .term("temple")
    ///     .build()
    ///     .await?;
    /// println!("{} cards", result.payload.cards().len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<SearchResult, SearchError> {
        let term = self
            .term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .ok_or_else(|| {
                SearchError::Builder("No search term specified. Use .term()".to_string())
            })?
            .to_string();

        let source = match self.source {
            Some(source) => source,
            None => {
                let url = match self.dataset_url {
                    Some(url) => url,
                    None => self.config.unwrap_or_default().dataset_url,
                };
                Box::new(RequestFetcher::new(url))
            }
        };

        let dataset = source.fetch_dataset().await?;
        let category = classify(&term);
        debug!("'{}' classified as {:?}", term, category);
        let payload = render(category, &dataset, &term);

        Ok(SearchResult {
            term,
            category,
            payload,
        })
    }
}

/// Main entry point for the builder API
pub struct RecommendationSearch;

impl RecommendationSearch {
    /// Creates a new builder for a search
    ///
    /// # Example
    /// ```
    /// use travel_recommendation::RecommendationSearch;
    ///
    /// let builder = RecommendationSearch::builder();
    /// ```
    pub fn builder() -> SearchBuilder {
        SearchBuilder::default()
    }
}
