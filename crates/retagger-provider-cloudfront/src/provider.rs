//! CloudFront provider implementation.

use async_trait::async_trait;
use aws_sdk_cloudfront::types::{Tag, Tags};
use tracing::debug;

use retagger_provider::codec::TagCodec;
use retagger_provider::engine::TagReconciler;
use retagger_provider::error::ProviderResult;
use retagger_provider::pass::{retag_pass, PassSummary};
use retagger_provider::resource::{ResourceDescriptor, ResourcePage};
use retagger_provider::tags::{TagItem, TagMap};
use retagger_provider::traits::{Provider, ResourceList, TagRead, TagWrite};
use retagger_provider::types::AwsService;

use crate::client::CloudFrontApi;
use crate::config::CloudFrontConfig;

/// Provider adapter for CloudFront distributions.
pub struct CloudFrontProvider<C = aws_sdk_cloudfront::Client> {
    client: C,
    config: CloudFrontConfig,
}

impl CloudFrontProvider {
    /// Create an adapter over an already-initialized SDK client.
    pub fn new(client: aws_sdk_cloudfront::Client) -> Self {
        Self::with_client(client, CloudFrontConfig::default())
            .expect("default config should be valid")
    }
}

impl<C: CloudFrontApi> CloudFrontProvider<C> {
    /// Create an adapter over any [`CloudFrontApi`] implementation.
    pub fn with_client(client: C, config: CloudFrontConfig) -> ProviderResult<Self> {
        config.validate()?;
        debug!(page_size = config.page_size, "cloudfront provider ready");
        Ok(Self { client, config })
    }

    /// Retag every distribution in one pass.
    pub async fn retag_distributions(
        &self,
        engine: &dyn TagReconciler,
    ) -> ProviderResult<PassSummary> {
        retag_pass(self, engine).await
    }
}

impl<C: CloudFrontApi> Provider for CloudFrontProvider<C> {
    fn service(&self) -> AwsService {
        AwsService::CloudFront
    }

    fn display_name(&self) -> &str {
        "cloudfront"
    }
}

impl<C: CloudFrontApi> TagCodec for CloudFrontProvider<C> {
    type Native = Tags;

    fn to_map(&self, native: &Self::Native) -> TagMap {
        native
            .items()
            .iter()
            .map(|t| {
                (
                    t.key().to_string(),
                    t.value().unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    fn from_canonical(&self, items: &[TagItem]) -> Self::Native {
        let items = items
            .iter()
            .map(|t| {
                Tag::builder()
                    .key(&t.name)
                    .value(&t.value)
                    .build()
                    .expect("key is always set; building a cloudfront tag cannot fail")
            })
            .collect();
        Tags::builder().set_items(Some(items)).build()
    }
}

#[async_trait]
impl<C: CloudFrontApi> TagRead for CloudFrontProvider<C> {
    async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native> {
        self.client.list_tags_for_resource(resource_id).await
    }
}

#[async_trait]
impl<C: CloudFrontApi> TagWrite for CloudFrontProvider<C> {
    async fn set_tags(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()> {
        self.client
            .tag_resource(resource_id, self.from_canonical(desired))
            .await
    }
}

#[async_trait]
impl<C: CloudFrontApi> ResourceList for CloudFrontProvider<C> {
    async fn next_page(&self, cursor: Option<String>) -> ProviderResult<ResourcePage> {
        let out = self
            .client
            .list_distributions(cursor, self.config.page_size)
            .await?;

        let Some(list) = out.distribution_list() else {
            return Ok(ResourcePage::new(Vec::new()));
        };

        let mut resources = Vec::with_capacity(list.items().len());
        for dist in list.items() {
            let mut descriptor =
                ResourceDescriptor::new(dist.arn()).with_key(dist.domain_name());
            if let Some(aliases) = dist.aliases() {
                descriptor = descriptor.with_keys(aliases.items().iter().cloned());
            }
            resources.push(descriptor);
        }

        let mut page = ResourcePage::new(resources);
        if list.is_truncated() {
            if let Some(next) = list.next_marker() {
                page = page.with_cursor(next);
            }
        }
        Ok(page)
    }
}
