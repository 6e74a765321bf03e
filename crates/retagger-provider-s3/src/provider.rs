//! S3 provider implementation.

use async_trait::async_trait;
use aws_sdk_s3::types::Tag;
use tracing::{debug, warn};

use retagger_provider::codec::TagCodec;
use retagger_provider::engine::TagReconciler;
use retagger_provider::error::ProviderResult;
use retagger_provider::pass::{retag_pass, PassSummary};
use retagger_provider::resource::{ResourceDescriptor, ResourcePage};
use retagger_provider::tags::{TagItem, TagMap};
use retagger_provider::traits::{Provider, ResourceList, TagRead, TagWrite};
use retagger_provider::types::AwsService;

use crate::client::S3Api;
use crate::config::S3Config;

/// Provider adapter for S3 buckets.
pub struct S3Provider<C = aws_sdk_s3::Client> {
    client: C,
    config: S3Config,
}

impl S3Provider {
    /// Create an adapter over an already-initialized SDK client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self::with_client(client, S3Config::default()).expect("default config should be valid")
    }
}

impl<C: S3Api> S3Provider<C> {
    /// Create an adapter over any [`S3Api`] implementation.
    pub fn with_client(client: C, config: S3Config) -> ProviderResult<Self> {
        config.validate()?;
        debug!(page_size = config.page_size, "s3 provider ready");
        Ok(Self { client, config })
    }

    /// Retag every bucket in one pass.
    pub async fn retag_buckets(&self, engine: &dyn TagReconciler) -> ProviderResult<PassSummary> {
        retag_pass(self, engine).await
    }
}

impl<C: S3Api> Provider for S3Provider<C> {
    fn service(&self) -> AwsService {
        AwsService::S3
    }

    fn display_name(&self) -> &str {
        "s3"
    }
}

impl<C: S3Api> TagCodec for S3Provider<C> {
    type Native = Vec<Tag>;

    fn to_map(&self, native: &Self::Native) -> TagMap {
        native
            .iter()
            .map(|t| (t.key().to_string(), t.value().to_string()))
            .collect()
    }

    fn from_canonical(&self, items: &[TagItem]) -> Self::Native {
        items
            .iter()
            .map(|t| {
                Tag::builder()
                    .key(&t.name)
                    .value(&t.value)
                    .build()
                    .expect("key and value are always set; building an s3 tag cannot fail")
            })
            .collect()
    }
}

#[async_trait]
impl<C: S3Api> TagRead for S3Provider<C> {
    async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native> {
        self.client.get_bucket_tagging(resource_id).await
    }
}

#[async_trait]
impl<C: S3Api> TagWrite for S3Provider<C> {
    async fn set_tags(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()> {
        self.client
            .put_bucket_tagging(resource_id, self.from_canonical(desired))
            .await
    }
}

#[async_trait]
impl<C: S3Api> ResourceList for S3Provider<C> {
    async fn next_page(&self, cursor: Option<String>) -> ProviderResult<ResourcePage> {
        let out = self
            .client
            .list_buckets(cursor, self.config.page_size)
            .await?;

        let mut resources = Vec::new();
        for bucket in out.buckets() {
            let Some(name) = bucket.name() else {
                warn!("bucket has no name, skipping");
                continue;
            };
            // The bucket name is both the tagging identifier and the
            // natural key.
            resources.push(ResourceDescriptor::new(name).with_key(name));
        }

        let mut page = ResourcePage::new(resources);
        if let Some(next) = out.continuation_token() {
            page = page.with_cursor(next);
        }
        Ok(page)
    }
}
