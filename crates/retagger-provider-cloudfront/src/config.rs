//! CloudFront provider configuration.

use retagger_provider::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};

/// Largest `MaxItems` ListDistributions accepts in one page.
const MAX_PAGE_SIZE: i32 = 100;

/// Configuration for the CloudFront provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudFrontConfig {
    /// Distributions requested per `ListDistributions` page (1–100).
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page_size() -> i32 {
    MAX_PAGE_SIZE
}

impl Default for CloudFrontConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl CloudFrontConfig {
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
