//! CloudWatch Logs provider implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, warn};

use retagger_provider::codec::TagCodec;
use retagger_provider::engine::TagReconciler;
use retagger_provider::error::ProviderResult;
use retagger_provider::pass::{retag_pass, PassSummary};
use retagger_provider::resource::{ResourceDescriptor, ResourcePage};
use retagger_provider::tags::{TagItem, TagMap};
use retagger_provider::traits::{Provider, ResourceList, TagRead, TagWrite};
use retagger_provider::types::AwsService;

use crate::client::CloudWatchLogsApi;
use crate::config::CloudWatchLogsConfig;

/// Provider adapter for CloudWatch Logs log groups.
pub struct CloudWatchLogsProvider<C = aws_sdk_cloudwatchlogs::Client> {
    client: C,
    config: CloudWatchLogsConfig,
}

impl CloudWatchLogsProvider {
    /// Create an adapter over an already-initialized SDK client.
    pub fn new(client: aws_sdk_cloudwatchlogs::Client) -> Self {
        Self::with_client(client, CloudWatchLogsConfig::default())
            .expect("default config should be valid")
    }
}

impl<C: CloudWatchLogsApi> CloudWatchLogsProvider<C> {
    /// Create an adapter over any [`CloudWatchLogsApi`] implementation.
    pub fn with_client(client: C, config: CloudWatchLogsConfig) -> ProviderResult<Self> {
        config.validate()?;
        debug!(page_size = config.page_size, "cloudwatch logs provider ready");
        Ok(Self { client, config })
    }

    /// Retag every log group in one pass.
    pub async fn retag_log_groups(
        &self,
        engine: &dyn TagReconciler,
    ) -> ProviderResult<PassSummary> {
        retag_pass(self, engine).await
    }
}

impl<C: CloudWatchLogsApi> Provider for CloudWatchLogsProvider<C> {
    fn service(&self) -> AwsService {
        AwsService::CloudWatchLogs
    }

    fn display_name(&self) -> &str {
        "cloudwatch-logs"
    }
}

impl<C: CloudWatchLogsApi> TagCodec for CloudWatchLogsProvider<C> {
    type Native = HashMap<String, String>;

    fn to_map(&self, native: &Self::Native) -> TagMap {
        native.clone().into()
    }

    fn from_canonical(&self, items: &[TagItem]) -> Self::Native {
        items
            .iter()
            .map(|t| (t.name.clone(), t.value.clone()))
            .collect()
    }
}

#[async_trait]
impl<C: CloudWatchLogsApi> TagRead for CloudWatchLogsProvider<C> {
    async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native> {
        self.client.list_tags_for_resource(resource_id).await
    }
}

#[async_trait]
impl<C: CloudWatchLogsApi> TagWrite for CloudWatchLogsProvider<C> {
    async fn set_tags(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()> {
        self.client
            .tag_resource(resource_id, self.from_canonical(desired))
            .await
    }
}

#[async_trait]
impl<C: CloudWatchLogsApi> ResourceList for CloudWatchLogsProvider<C> {
    async fn next_page(&self, cursor: Option<String>) -> ProviderResult<ResourcePage> {
        let out = self
            .client
            .describe_log_groups(cursor, self.config.page_size)
            .await?;

        let mut resources = Vec::new();
        for group in out.log_groups() {
            let Some(arn) = group.arn() else {
                warn!(
                    name = group.log_group_name().unwrap_or("<unnamed>"),
                    "log group has no ARN, skipping"
                );
                continue;
            };
            // DescribeLogGroups reports `...:log-group:<name>:*`; the tagging
            // APIs take the ARN without the trailing `:*`.
            let mut descriptor = ResourceDescriptor::new(arn.trim_end_matches(":*"));
            if let Some(name) = group.log_group_name() {
                descriptor = descriptor.with_key(name);
            }
            resources.push(descriptor);
        }

        let mut page = ResourcePage::new(resources);
        if let Some(next) = out.next_token() {
            page = page.with_cursor(next);
        }
        Ok(page)
    }
}
