//! Narrow client surface over the CloudWatch Logs SDK.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::operation::describe_log_groups::DescribeLogGroupsOutput;

use retagger_provider::error::{ProviderError, ProviderResult};

/// The CloudWatch Logs calls the adapter issues.
///
/// Implemented by the real SDK client and by test doubles. Remote failures
/// are captured with their fully rendered error context as the message and
/// the SDK error retained as source.
#[async_trait]
pub trait CloudWatchLogsApi: Send + Sync {
    /// One `DescribeLogGroups` page request.
    async fn describe_log_groups(
        &self,
        next_token: Option<String>,
        limit: i32,
    ) -> ProviderResult<DescribeLogGroupsOutput>;

    /// `ListTagsForResource` for one log-group ARN.
    async fn list_tags_for_resource(
        &self,
        resource_arn: &str,
    ) -> ProviderResult<HashMap<String, String>>;

    /// `TagResource` for one log-group ARN.
    async fn tag_resource(
        &self,
        resource_arn: &str,
        tags: HashMap<String, String>,
    ) -> ProviderResult<()>;
}

#[async_trait]
impl CloudWatchLogsApi for aws_sdk_cloudwatchlogs::Client {
    async fn describe_log_groups(
        &self,
        next_token: Option<String>,
        limit: i32,
    ) -> ProviderResult<DescribeLogGroupsOutput> {
        self.describe_log_groups()
            .set_next_token(next_token)
            .limit(limit)
            .send()
            .await
            .map_err(|e| ProviderError::list_with_source(DisplayErrorContext(&e).to_string(), e))
    }

    async fn list_tags_for_resource(
        &self,
        resource_arn: &str,
    ) -> ProviderResult<HashMap<String, String>> {
        let out = self
            .list_tags_for_resource()
            .resource_arn(resource_arn)
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
            .resource_arn(resource_arn)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_write_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(())
    }
}
