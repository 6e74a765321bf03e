//! RDS provider implementation.

use async_trait::async_trait;
use aws_sdk_rds::types::Tag;
use tracing::{debug, warn};

use retagger_provider::codec::TagCodec;
use retagger_provider::engine::TagReconciler;
use retagger_provider::error::ProviderResult;
use retagger_provider::pass::{retag_pass, PassSummary};
use retagger_provider::resource::{ResourceDescriptor, ResourcePage};
use retagger_provider::tags::{TagItem, TagMap};
use retagger_provider::traits::{Provider, ResourceList, TagRead, TagWrite};
use retagger_provider::types::AwsService;

use crate::client::RdsApi;
use crate::config::RdsConfig;

/// Provider adapter for RDS database instances.
pub struct RdsProvider<C = aws_sdk_rds::Client> {
    client: C,
    config: RdsConfig,
}

impl RdsProvider {
    /// Create an adapter over an already-initialized SDK client.
    pub fn new(client: aws_sdk_rds::Client) -> Self {
        Self::with_client(client, RdsConfig::default()).expect("default config should be valid")
    }
}

impl<C: RdsApi> RdsProvider<C> {
    /// Create an adapter over any [`RdsApi`] implementation.
    pub fn with_client(client: C, config: RdsConfig) -> ProviderResult<Self> {
        config.validate()?;
        debug!(page_size = config.page_size, "rds provider ready");
        Ok(Self { client, config })
    }

    /// Retag every DB instance in one pass.
    pub async fn retag_db_instances(
        &self,
        engine: &dyn TagReconciler,
    ) -> ProviderResult<PassSummary> {
        retag_pass(self, engine).await
    }
}

impl<C: RdsApi> Provider for RdsProvider<C> {
    fn service(&self) -> AwsService {
        AwsService::Rds
    }

    fn display_name(&self) -> &str {
        "rds"
    }
}

impl<C: RdsApi> TagCodec for RdsProvider<C> {
    type Native = Vec<Tag>;

    fn to_map(&self, native: &Self::Native) -> TagMap {
        native
            .iter()
            .map(|t| {
                (
                    t.key().unwrap_or_default().to_string(),
                    t.value().unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    fn from_canonical(&self, items: &[TagItem]) -> Self::Native {
        items
            .iter()
            .map(|t| Tag::builder().key(&t.name).value(&t.value).build())
            .collect()
    }
}

#[async_trait]
impl<C: RdsApi> TagRead for RdsProvider<C> {
    async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native> {
        self.client.list_tags_for_resource(resource_id).await
    }
}

#[async_trait]
impl<C: RdsApi> TagWrite for RdsProvider<C> {
    async fn set_tags(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()> {
        self.client
            .add_tags_to_resource(resource_id, self.from_canonical(desired))
            .await
    }
}

#[async_trait]
impl<C: RdsApi> ResourceList for RdsProvider<C> {
    async fn next_page(&self, cursor: Option<String>) -> ProviderResult<ResourcePage> {
        let out = self
            .client
            .describe_db_instances(cursor, self.config.page_size)
            .await?;

        let mut resources = Vec::new();
        for db in out.db_instances() {
            let Some(arn) = db.db_instance_arn() else {
                warn!(
                    identifier = db.db_instance_identifier().unwrap_or("<unknown>"),
                    "db instance has no ARN, skipping"
                );
                continue;
            };
            let mut descriptor = ResourceDescriptor::new(arn);
            if let Some(identifier) = db.db_instance_identifier() {
                descriptor = descriptor.with_key(identifier);
            }
            resources.push(descriptor);
        }

        let mut page = ResourcePage::new(resources);
        if let Some(next) = out.marker() {
            page = page.with_cursor(next);
        }
        Ok(page)
    }
}
