//! Lambda provider implementation.

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

use crate::client::LambdaApi;
use crate::config::LambdaConfig;

/// Provider adapter for Lambda functions.
pub struct LambdaProvider<C = aws_sdk_lambda::Client> {
    client: C,
    config: LambdaConfig,
}

impl LambdaProvider {
    /// Create an adapter over an already-initialized SDK client.
    pub fn new(client: aws_sdk_lambda::Client) -> Self {
        Self::with_client(client, LambdaConfig::default()).expect("default config should be valid")
    }
}

impl<C: LambdaApi> LambdaProvider<C> {
    /// Create an adapter over any [`LambdaApi`] implementation.
    pub fn with_client(client: C, config: LambdaConfig) -> ProviderResult<Self> {
        config.validate()?;
        debug!(page_size = config.page_size, "lambda provider ready");
        Ok(Self { client, config })
    }

    /// Retag every function in one pass.
    pub async fn retag_functions(&self, engine: &dyn TagReconciler) -> ProviderResult<PassSummary> {
        retag_pass(self, engine).await
    }
}

impl<C: LambdaApi> Provider for LambdaProvider<C> {
    fn service(&self) -> AwsService {
        AwsService::Lambda
    }

    fn display_name(&self) -> &str {
        "lambda"
    }
}

impl<C: LambdaApi> TagCodec for LambdaProvider<C> {
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
impl<C: LambdaApi> TagRead for LambdaProvider<C> {
    async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native> {
        self.client.list_tags(resource_id).await
    }
}

#[async_trait]
impl<C: LambdaApi> TagWrite for LambdaProvider<C> {
    async fn set_tags(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()> {
        self.client
            .tag_resource(resource_id, self.from_canonical(desired))
            .await
    }
}

#[async_trait]
impl<C: LambdaApi> ResourceList for LambdaProvider<C> {
    async fn next_page(&self, cursor: Option<String>) -> ProviderResult<ResourcePage> {
        let out = self
            .client
            .list_functions(cursor, self.config.page_size)
            .await?;

        let mut resources = Vec::new();
        for function in out.functions() {
            let Some(arn) = function.function_arn() else {
                warn!(
                    name = function.function_name().unwrap_or("<unnamed>"),
                    "function has no ARN, skipping"
                );
                continue;
            };
            let mut descriptor = ResourceDescriptor::new(arn);
            if let Some(name) = function.function_name() {
                descriptor = descriptor.with_key(name);
            }
            resources.push(descriptor);
        }

        let mut page = ResourcePage::new(resources);
        if let Some(next) = out.next_marker() {
            page = page.with_cursor(next);
        }
        Ok(page)
    }
}
