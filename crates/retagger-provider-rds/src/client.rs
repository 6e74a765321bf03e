//! Narrow client surface over the RDS SDK.

use async_trait::async_trait;
use aws_sdk_rds::error::DisplayErrorContext;
use aws_sdk_rds::operation::describe_db_instances::DescribeDbInstancesOutput;
use aws_sdk_rds::types::Tag;

use retagger_provider::error::{ProviderError, ProviderResult};

/// The RDS calls the adapter issues.
///
/// Implemented by the real SDK client and by test doubles. Remote failures
/// are captured with their fully rendered error context as the message and
/// the SDK error retained as source.
#[async_trait]
pub trait RdsApi: Send + Sync {
    /// One `DescribeDBInstances` page request.
    async fn describe_db_instances(
        &self,
        marker: Option<String>,
        max_records: i32,
    ) -> ProviderResult<DescribeDbInstancesOutput>;

    /// `ListTagsForResource` for one DB instance ARN.
    async fn list_tags_for_resource(&self, resource_name: &str) -> ProviderResult<Vec<Tag>>;

    /// `AddTagsToResource` for one DB instance ARN.
    async fn add_tags_to_resource(&self, resource_name: &str, tags: Vec<Tag>)
        -> ProviderResult<()>;
}

#[async_trait]
impl RdsApi for aws_sdk_rds::Client {
    async fn describe_db_instances(
        &self,
        marker: Option<String>,
        max_records: i32,
    ) -> ProviderResult<DescribeDbInstancesOutput> {
        self.describe_db_instances()
            .set_marker(marker)
            .max_records(max_records)
            .send()
            .await
            .map_err(|e| ProviderError::list_with_source(DisplayErrorContext(&e).to_string(), e))
    }

    async fn list_tags_for_resource(&self, resource_name: &str) -> ProviderResult<Vec<Tag>> {
        let out = self
            .list_tags_for_resource()
            .resource_name(resource_name)
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_read_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(out.tag_list().to_vec())
    }

    async fn add_tags_to_resource(
        &self,
        resource_name: &str,
        tags: Vec<Tag>,
    ) -> ProviderResult<()> {
        self.add_tags_to_resource()
            .resource_name(resource_name)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_write_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(())
    }
}
