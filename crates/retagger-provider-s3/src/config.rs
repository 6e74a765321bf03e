//! S3 provider configuration.

use retagger_provider::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};

/// Largest `MaxBuckets` ListBuckets accepts.
const MAX_PAGE_SIZE: i32 = 10_000;

fn default_page_size() -> i32 {
    1000
}

/// Configuration for the S3 provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// Buckets requested per `ListBuckets` page (1–10000).
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl S3Config {
    /// Validate against the service's documented bounds.
    pub fn validate(&self) -> ProviderResult<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ProviderError::invalid_configuration(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}
