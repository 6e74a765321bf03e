//! Narrow client surface over the Lambda SDK.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::operation::list_functions::ListFunctionsOutput;

use retagger_provider::error::{ProviderError, ProviderResult};

/// The Lambda calls the adapter issues.
///
/// Implemented by the real SDK client and by test doubles. Remote failures
/// are captured with their fully rendered error context as the message and
/// the SDK error retained as source.
#[async_trait]
pub trait LambdaApi: Send + Sync {
    /// One `ListFunctions` page request.
    async fn list_functions(
        &self,
        marker: Option<String>,
        max_items: i32,
    ) -> ProviderResult<ListFunctionsOutput>;

    /// `ListTags` for one function ARN.
    async fn list_tags(&self, resource_arn: &str) -> ProviderResult<HashMap<String, String>>;

    /// `TagResource` for one function ARN.
    async fn tag_resource(
        &self,
        resource_arn: &str,
        tags: HashMap<String, String>,
    ) -> ProviderResult<()>;
}

#[async_trait]
impl LambdaApi for aws_sdk_lambda::Client {
    async fn list_functions(
        &self,
        marker: Option<String>,
        max_items: i32,
    ) -> ProviderResult<ListFunctionsOutput> {
        self.list_functions()
            .set_marker(marker)
            .max_items(max_items)
            .send()
            .await
            .map_err(|e| ProviderError::list_with_source(DisplayErrorContext(&e).to_string(), e))
    }

    async fn list_tags(&self, resource_arn: &str) -> ProviderResult<HashMap<String, String>> {
        let out = self
            .list_tags()
            .resource(resource_arn)
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_read_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(out.tags().cloned().unwrap_or_default())
    }

    async fn tag_resource(
        &self,
        resource_arn: &str,
        tags: HashMap<String, String>,
    ) -> ProviderResult<()> {
        self.tag_resource()
            .resource(resource_arn)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_write_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(())
    }
}
