use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::SearchError;
use crate::fetchers::DatasetSource;
use crate::model::Dataset;

pub const DEFAULT_DATASET_URL: &str =
    "https://luna-lin.github.io/travelRecommendation/data/travel_recommendation_api.json";

/// Fetches the dataset with a plain `GET`, no retries and no caching.
pub struct RequestFetcher {
    client: Client,
    url: String,
}

impl RequestFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RequestFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_URL)
    }
}

#[async_trait]
impl DatasetSource for RequestFetcher {
    async fn fetch_dataset(&self) -> Result<Dataset, SearchError> {
        debug!("Fetching dataset from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let dataset: Dataset = serde_json::from_str(&body)?;
        debug!(
            "Fetched dataset: {} beaches, {} temples, {} countries",
            dataset.beaches.len(),
            dataset.temples.len(),
            dataset.countries.len()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_dataset() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/data.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "countries": [],
                    "temples": [],
                    "beaches": [{
                        "id": 9,
                        "name": "Bora Bora, French Polynesia",
                        "imageUrl": "bora.jpg",
                        "description": "Lagoon"
                    }]
                }"#,
            )
            .create();

        let fetcher = RequestFetcher::new(format!("{}/data.json", server.url()));
        let dataset = fetcher.fetch_dataset().await.unwrap();
        assert_eq!(dataset.beaches.len(), 1);
        assert_eq!(dataset.beaches[0].id, 9);
        mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_dataset_status_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/data.json")
            .with_status(404)
            .create();

        let fetcher = RequestFetcher::new(format!("{}/data.json", server.url()));
        match fetcher.fetch_dataset().await {
            Err(SearchError::HttpStatus {
                status,
                status_text,
            }) => {
                assert_eq!(status, 404);
                assert_eq!(status_text, "Not Found");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
        mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_dataset_decode_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/data.json")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let fetcher = RequestFetcher::new(format!("{}/data.json", server.url()));
        let result = fetcher.fetch_dataset().await;
        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_dataset_missing_keys() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/data.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create();

        let fetcher = RequestFetcher::new(format!("{}/data.json", server.url()));
        let result = fetcher.fetch_dataset().await;
        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_dataset_transport_error() {
        // Nothing listens on port 9 of localhost.
        let fetcher = RequestFetcher::new("http://127.0.0.1:9/data.json");
        let result = fetcher.fetch_dataset().await;
        assert!(matches!(result, Err(SearchError::Transport(_))));
    }

    #[test]
    fn test_default_url() {
        assert_eq!(RequestFetcher::default().url(), DEFAULT_DATASET_URL);
    }
}
