mod request;

pub use request::{RequestFetcher, DEFAULT_DATASET_URL};

use async_trait::async_trait;

use crate::error::SearchError;
use crate::model::Dataset;

/// Anything that can hand out a fresh copy of the recommendation dataset.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the dataset. Every call goes back to the source; nothing is cached.
    async fn fetch_dataset(&self) -> Result<Dataset, SearchError>;
}
