//! EC2 provider configuration.

use retagger_provider::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};

/// Bounds `DescribeInstances` enforces on `MaxResults`.
const MIN_PAGE_SIZE: i32 = 5;
const MAX_PAGE_SIZE: i32 = 1000;

/// Configuration for the EC2 provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ec2Config {
    /// Instances requested per `DescribeInstances` page (5–1000).
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page_size() -> i32 {
    MAX_PAGE_SIZE
}

impl Default for Ec2Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Ec2Config {
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
