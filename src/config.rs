use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::fetchers::DEFAULT_DATASET_URL;

/// Runtime settings for searches and the contact form
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Where the recommendation dataset is fetched from
    #[serde(default = "default_dataset_url")]
    pub dataset_url: String,
    /// Delay before rendered cards get their entrance animation
    #[serde(default = "default_card_animation_delay_ms")]
    pub card_animation_delay_ms: u64,
    /// Page opened by the Visit and book-now actions
    #[serde(default = "default_visit_target")]
    pub visit_target: String,
    /// Simulated latency of a contact form submission
    #[serde(default = "default_contact_submit_delay_ms")]
    pub contact_submit_delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            dataset_url: default_dataset_url(),
            card_animation_delay_ms: default_card_animation_delay_ms(),
            visit_target: default_visit_target(),
            contact_submit_delay_ms: default_contact_submit_delay_ms(),
        }
    }
}

fn default_dataset_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_card_animation_delay_ms() -> u64 {
    100
}

fn default_visit_target() -> String {
    "/contact.html".to_string()
}

fn default_contact_submit_delay_ms() -> u64 {
    2000
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with TRAVEL__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: TRAVEL__DATASET_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn card_animation_delay(&self) -> Duration {
        Duration::from_millis(self.card_animation_delay_ms)
    }

    pub fn contact_submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact_submit_delay_ms)
    }
}

/// Load configuration from `config.toml` (optional) and `TRAVEL__*` variables
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("TRAVEL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
