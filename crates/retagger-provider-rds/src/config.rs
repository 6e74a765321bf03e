//! RDS provider configuration.

use retagger_provider::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};

/// Bounds `DescribeDBInstances` enforces on `MaxRecords`.
const MIN_PAGE_SIZE: i32 = 20;
const MAX_PAGE_SIZE: i32 = 100;

/// Configuration for the RDS provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdsConfig {
    /// DB instances requested per `DescribeDBInstances` page (20–100).
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page_size() -> i32 {
    MAX_PAGE_SIZE
}

impl Default for RdsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl RdsConfig {
    /// Validate against the service's documented bounds.
    pub fn validate(&self) -> ProviderResult<()> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ProviderError::invalid_configuration(format!(
                "page_size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}
