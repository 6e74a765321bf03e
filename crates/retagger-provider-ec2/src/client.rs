//! Narrow client surface over the EC2 SDK.

use async_trait::async_trait;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use aws_sdk_ec2::types::{Filter, Tag};

use retagger_provider::error::{ProviderError, ProviderResult};

/// The EC2 calls the adapter issues.
///
/// Implemented by the real SDK client and by test doubles. Remote failures
/// are captured with their fully rendered error context as the message and
/// the SDK error retained as source.
#[async_trait]
pub trait Ec2Api: Send + Sync {
    /// One `DescribeInstances` page request.
    async fn describe_instances(
        &self,
        next_token: Option<String>,
        max_results: i32,
    ) -> ProviderResult<DescribeInstancesOutput>;

    /// `DescribeTags` filtered to one resource ID.
    async fn describe_tags(&self, resource_id: &str) -> ProviderResult<Vec<Tag>>;

    /// `CreateTags` for one resource ID.
    async fn create_tags(&self, resource_id: &str, tags: Vec<Tag>) -> ProviderResult<()>;
}

#[async_trait]
impl Ec2Api for aws_sdk_ec2::Client {
    async fn describe_instances(
        &self,
        next_token: Option<String>,
        max_results: i32,
    ) -> ProviderResult<DescribeInstancesOutput> {
        self.describe_instances()
            .set_next_token(next_token)
            .max_results(max_results)
            .send()
            .await
            .map_err(|e| ProviderError::list_with_source(DisplayErrorContext(&e).to_string(), e))
    }

    async fn describe_tags(&self, resource_id: &str) -> ProviderResult<Vec<Tag>> {
        let out = self
            .describe_tags()
            .filters(
                Filter::builder()
                    .name("resource-id")
                    .values(resource_id)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_read_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;

        Ok(out
            .tags()
            .iter()
            .map(|t| {
                Tag::builder()
                    .set_key(t.key().map(str::to_string))
                    .set_value(t.value().map(str::to_string))
                    .build()
            })
            .collect())
    }

    async fn create_tags(&self, resource_id: &str, tags: Vec<Tag>) -> ProviderResult<()> {
        self.create_tags()
            .resources(resource_id)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_write_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(())
    }
}
