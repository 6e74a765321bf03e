//! EC2 provider implementation.

use async_trait::async_trait;
use aws_sdk_ec2::types::Tag;
use tracing::{debug, warn};

use retagger_provider::codec::TagCodec;
use retagger_provider::engine::TagReconciler;
use retagger_provider::error::ProviderResult;
use retagger_provider::pass::{retag_pass, PassSummary};
use retagger_provider::resource::{ResourceDescriptor, ResourcePage};
use retagger_provider::tags::{TagItem, TagMap};
use retagger_provider::traits::{Provider, ResourceList, TagRead, TagWrite};
use retagger_provider::types::AwsService;

use crate::client::Ec2Api;
use crate::config::Ec2Config;

/// Provider adapter for EC2 instances.
pub struct Ec2Provider<C = aws_sdk_ec2::Client> {
    client: C,
    config: Ec2Config,
}

impl Ec2Provider {
    /// Create an adapter over an already-initialized SDK client.
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        Self::with_client(client, Ec2Config::default()).expect("default config should be valid")
    }
}

impl<C: Ec2Api> Ec2Provider<C> {
    /// Create an adapter over any [`Ec2Api`] implementation.
    pub fn with_client(client: C, config: Ec2Config) -> ProviderResult<Self> {
        config.validate()?;
        debug!(page_size = config.page_size, "ec2 provider ready");
        Ok(Self { client, config })
    }

    /// Retag every instance in one pass.
    pub async fn retag_instances(&self, engine: &dyn TagReconciler) -> ProviderResult<PassSummary> {
        retag_pass(self, engine).await
    }
}

impl<C: Ec2Api> Provider for Ec2Provider<C> {
    fn service(&self) -> AwsService {
        AwsService::Ec2
    }

    fn display_name(&self) -> &str {
        "ec2"
    }
}

impl<C: Ec2Api> TagCodec for Ec2Provider<C> {
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
impl<C: Ec2Api> TagRead for Ec2Provider<C> {
    async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native> {
        self.client.describe_tags(resource_id).await
    }
}

#[async_trait]
impl<C: Ec2Api> TagWrite for Ec2Provider<C> {
    async fn set_tags(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()> {
        self.client
            .create_tags(resource_id, self.from_canonical(desired))
            .await
    }
}

#[async_trait]
impl<C: Ec2Api> ResourceList for Ec2Provider<C> {
    async fn next_page(&self, cursor: Option<String>) -> ProviderResult<ResourcePage> {
        let out = self
            .client
            .describe_instances(cursor, self.config.page_size)
            .await?;

        let mut resources = Vec::new();
        for reservation in out.reservations() {
            for instance in reservation.instances() {
                let Some(id) = instance.instance_id() else {
                    warn!("instance has no ID, skipping");
                    continue;
                };
                let mut descriptor = ResourceDescriptor::new(id);
                let name = instance
                    .tags()
                    .iter()
                    .find(|t| t.key() == Some("Name"))
                    .and_then(|t| t.value());
                if let Some(name) = name {
                    descriptor = descriptor.with_key(name);
                }
                resources.push(descriptor);
            }
        }

        let mut page = ResourcePage::new(resources);
        if let Some(next) = out.next_token() {
            page = page.with_cursor(next);
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
    use aws_sdk_ec2::types::{Instance, Reservation};
    use retagger_provider::error::ProviderError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockClient {
        pages: Mutex<VecDeque<DescribeInstancesOutput>>,
        resource_tags: Mutex<Vec<Tag>>,
        seen_id: Mutex<Option<String>>,
        seen_tags: Mutex<Option<Vec<Tag>>>,
        return_error: Mutex<Option<ProviderError>>,
    }

    impl MockClient {
        fn failing(err: ProviderError) -> Self {
            let mock = Self::default();
            *mock.return_error.lock().unwrap() = Some(err);
            mock
        }
    }

    #[async_trait]
    impl Ec2Api for MockClient {
        async fn describe_instances(
            &self,
            _next_token: Option<String>,
            _max_results: i32,
        ) -> ProviderResult<DescribeInstancesOutput> {
            if let Some(err) = self.return_error.lock().unwrap().take() {
                return Err(err);
            }
            Ok(self
                .pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| DescribeInstancesOutput::builder().build()))
        }

        async fn describe_tags(&self, resource_id: &str) -> ProviderResult<Vec<Tag>> {
            *self.seen_id.lock().unwrap() = Some(resource_id.to_string());
            if let Some(err) = self.return_error.lock().unwrap().take() {
                return Err(err);
            }
            Ok(self.resource_tags.lock().unwrap().clone())
        }

        async fn create_tags(&self, resource_id: &str, tags: Vec<Tag>) -> ProviderResult<()> {
            *self.seen_id.lock().unwrap() = Some(resource_id.to_string());
            if let Some(err) = self.return_error.lock().unwrap().take() {
                return Err(err);
            }
            *self.seen_tags.lock().unwrap() = Some(tags);
            Ok(())
        }
    }

    fn provider(mock: MockClient) -> Ec2Provider<MockClient> {
        Ec2Provider::with_client(mock, Ec2Config::default()).unwrap()
    }

    fn tag(key: &str, value: &str) -> Tag {
        Tag::builder().key(key).value(value).build()
    }

    #[test]
    fn test_to_map() {
        let p = provider(MockClient::default());
        assert!(p.to_map(&Vec::new()).is_empty());

        let map = p.to_map(&vec![tag("foo", "bar"), tag("Aerosmith", "rocks")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("foo"), Some("bar"));
        assert_eq!(map.get("Aerosmith"), Some("rocks"));
    }

    #[test]
    fn test_to_map_duplicate_collapses_to_last() {
        let p = provider(MockClient::default());
        let map = p.to_map(&vec![tag("foo", "bar"), tag("foo", "baz")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("foo"), Some("baz"));
    }

    #[test]
    fn test_from_canonical_preserves_order() {
        let p = provider(MockClient::default());
        let native = p.from_canonical(&[
            TagItem::new("foo", "bar"),
            TagItem::new("Aerosmith", "rocks"),
        ]);
        let keys: Vec<&str> = native.iter().filter_map(|t| t.key()).collect();
        assert_eq!(keys, vec!["foo", "Aerosmith"]);
    }

    #[test]
    fn test_from_canonical_empty_yields_present_container() {
        let p = provider(MockClient::default());
        let native = p.from_canonical(&[]);
        assert!(native.is_empty());
        assert!(p.to_map(&native).is_empty());
    }

    #[tokio::test]
    async fn test_get_tags_propagates_identifier() {
        let mock = MockClient::default();
        *mock.resource_tags.lock().unwrap() = vec![tag("foo", "bar")];
        let p = provider(mock);

        let native = p.get_tags("i-0abc123").await.unwrap();
        assert_eq!(p.client.seen_id.lock().unwrap().as_deref(), Some("i-0abc123"));
        assert_eq!(p.to_map(&native).get("foo"), Some("bar"));
    }

    #[tokio::test]
    async fn test_get_tags_error_passthrough() {
        let p = provider(MockClient::failing(ProviderError::tag_read("Badaboom")));
        let err = p.get_tags("i-0abc123").await.unwrap_err();
        assert_eq!(err.to_string(), "failed to read tags: Badaboom");
    }

    #[tokio::test]
    async fn test_set_tags_propagates_identifier_and_tags() {
        let p = provider(MockClient::default());
        p.set_tags("i-0abc123", &[TagItem::new("foo", "bar")])
            .await
            .unwrap();

        assert_eq!(p.client.seen_id.lock().unwrap().as_deref(), Some("i-0abc123"));
        let written = p.client.seen_tags.lock().unwrap().clone().unwrap();
        assert_eq!(written, vec![tag("foo", "bar")]);
    }

    #[tokio::test]
    async fn test_set_tags_error_passthrough() {
        let p = provider(MockClient::failing(ProviderError::tag_write("Badaboom")));
        let err = p
            .set_tags("i-0abc123", &[TagItem::new("foo", "bar")])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to apply tags: Badaboom");
    }

    #[tokio::test]
    async fn test_enumeration_flattens_reservations() {
        let mock = MockClient::default();
        mock.pages.lock().unwrap().push_back(
            DescribeInstancesOutput::builder()
                .reservations(
                    Reservation::builder()
                        .instances(
                            Instance::builder()
                                .instance_id("i-0aaa")
                                .tags(tag("Name", "web-1"))
                                .build(),
                        )
                        .instances(Instance::builder().instance_id("i-0bbb").build())
                        .build(),
                )
                .reservations(
                    Reservation::builder()
                        .instances(Instance::builder().instance_id("i-0ccc").build())
                        .build(),
                )
                .next_token("t1")
                .build(),
        );
        let p = provider(mock);

        let page = p.next_page(None).await.unwrap();
        let ids: Vec<&str> = page.resources.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["i-0aaa", "i-0bbb", "i-0ccc"]);
        assert_eq!(page.resources[0].natural_keys, vec!["web-1"]);
        assert!(page.resources[1].natural_keys.is_empty());
        assert_eq!(page.next_cursor.as_deref(), Some("t1"));
    }
}
