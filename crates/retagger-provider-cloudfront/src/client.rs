//! Narrow client surface over the CloudFront SDK.

use async_trait::async_trait;
use aws_sdk_cloudfront::error::DisplayErrorContext;
use aws_sdk_cloudfront::operation::list_distributions::ListDistributionsOutput;
use aws_sdk_cloudfront::types::Tags;

use retagger_provider::error::{ProviderError, ProviderResult};

/// The CloudFront calls the adapter issues.
///
/// Implemented by the real SDK client and by test doubles. Remote failures
/// are captured with their fully rendered error context as the message and
/// the SDK error retained as source.
#[async_trait]
pub trait CloudFrontApi: Send + Sync {
    /// One `ListDistributions` page request.
    async fn list_distributions(
        &self,
        marker: Option<String>,
        max_items: i32,
    ) -> ProviderResult<ListDistributionsOutput>;

    /// `ListTagsForResource` for one distribution ARN.
    async fn list_tags_for_resource(&self, resource_arn: &str) -> ProviderResult<Tags>;

    /// `TagResource` for one distribution ARN.
    async fn tag_resource(&self, resource_arn: &str, tags: Tags) -> ProviderResult<()>;
}

#[async_trait]
impl CloudFrontApi for aws_sdk_cloudfront::Client {
    async fn list_distributions(
        &self,
        marker: Option<String>,
        max_items: i32,
    ) -> ProviderResult<ListDistributionsOutput> {
        self.list_distributions()
            .set_marker(marker)
            .max_items(max_items)
            .send()
            .await
            .map_err(|e| ProviderError::list_with_source(DisplayErrorContext(&e).to_string(), e))
    }

    async fn list_tags_for_resource(&self, resource_arn: &str) -> ProviderResult<Tags> {
        let out = self
            .list_tags_for_resource()
            .resource(resource_arn)
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_read_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(out
            .tags()
            .cloned()
            .unwrap_or_else(|| Tags::builder().build()))
    }

    async fn tag_resource(&self, resource_arn: &str, tags: Tags) -> ProviderResult<()> {
        self.tag_resource()
            .resource(resource_arn)
            .tags(tags)
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_write_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(())
    }
}
