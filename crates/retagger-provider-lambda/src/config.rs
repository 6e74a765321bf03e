//! Lambda provider configuration.

use retagger_provider::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};

/// Largest `MaxItems` ListFunctions accepts.
const MAX_PAGE_SIZE: i32 = 10_000;

/// Functions actually returned per page top out at 50 regardless of
/// `MaxItems`, so that is the useful default.
fn default_page_size() -> i32 {
    50
}

/// Configuration for the Lambda provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LambdaConfig {
    /// Functions requested per `ListFunctions` page (1–10000).
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl LambdaConfig {
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
