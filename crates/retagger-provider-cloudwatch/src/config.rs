//! CloudWatch Logs provider configuration.

use retagger_provider::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};

/// Largest `limit` DescribeLogGroups accepts.
const MAX_PAGE_SIZE: i32 = 50;

/// Configuration for the CloudWatch Logs provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudWatchLogsConfig {
    /// Log groups requested per `DescribeLogGroups` page (1–50).
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page_size() -> i32 {
    MAX_PAGE_SIZE
}

impl Default for CloudWatchLogsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl CloudWatchLogsConfig {
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
