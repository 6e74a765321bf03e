//! The retag pass: enumerate, read, decide, apply.
//!
//! Generic over any provider implementing the three capabilities; each
//! provider crate exposes a service-named entry point delegating here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::engine::{ApplyTags, TagReconciler};
use crate::error::ProviderResult;
use crate::resource::ResourceDescriptor;
use crate::tags::TagItem;
use crate::traits::{Provider, ResourceList, TagRead, TagWrite};

/// Counters for one completed retag pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    /// Resources visited.
    pub resources: u64,
    /// Listing pages fetched.
    pub pages: u64,
}

/// [`ApplyTags`] command object bound to the provider that yielded the
/// resource. Holds nothing but the provider handle; the identifier travels
/// through the call, never through ambient state.
struct ProviderApply<'a, P> {
    provider: &'a P,
}

#[async_trait]
impl<P> ApplyTags for ProviderApply<'_, P>
where
    P: TagWrite,
{
    async fn apply(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()> {
        self.provider.set_tags(resource_id, desired).await
    }
}

/// Run one full retag pass over every resource the provider lists.
///
/// Resources are processed strictly one at a time, in the order the
/// provider's pagination yields them; pages are fetched lazily, one page
/// request at a time. The first read, apply, or listing failure aborts the
/// pass with that error. Tags already applied to earlier resources stay
/// applied; nothing is rolled back.
#[instrument(skip_all, fields(service = %provider.service()))]
pub async fn retag_pass<P>(provider: &P, engine: &dyn TagReconciler) -> ProviderResult<PassSummary>
where
    P: TagRead + TagWrite + ResourceList,
{
    info!(provider = provider.display_name(), "starting retag pass");

    let apply = ProviderApply { provider };
    let mut summary = PassSummary::default();
    let mut cursor: Option<String> = None;

    loop {
        let page = match provider.next_page(cursor.take()).await {
            Ok(page) => page,
            Err(err) => {
                error!(error = %err, pages = summary.pages, "resource listing failed");
                return Err(err);
            }
        };
        summary.pages += 1;
        debug!(
            page = summary.pages,
            resources = page.resources.len(),
            "fetched listing page"
        );

        for resource in &page.resources {
            retag_resource(provider, engine, &apply, resource).await?;
            summary.resources += 1;
        }

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    info!(
        resources = summary.resources,
        pages = summary.pages,
        "retag pass complete"
    );
    Ok(summary)
}

async fn retag_resource<P>(
    provider: &P,
    engine: &dyn TagReconciler,
    apply: &dyn ApplyTags,
    resource: &ResourceDescriptor,
) -> ProviderResult<()>
where
    P: TagRead + TagWrite,
{
    let native = match provider.get_tags(&resource.id).await {
        Ok(native) => native,
        Err(err) => {
            error!(resource = %resource.id, error = %err, "failed to read tags");
            return Err(err);
        }
    };
    let current = provider.to_map(&native);

    if let Err(err) = engine
        .reconcile(&resource.id, &current, &resource.natural_keys, apply)
        .await
    {
        error!(resource = %resource.id, error = %err, "reconciliation failed");
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TagCodec;
    use crate::error::ProviderError;
    use crate::resource::ResourcePage;
    use crate::tags::TagMap;
    use crate::traits::Provider;
    use crate::types::AwsService;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// In-memory provider with an ordered list-of-pairs native shape.
    struct FakeProvider {
        pages: Mutex<VecDeque<ResourcePage>>,
        cursors_seen: Mutex<Vec<Option<String>>>,
        tags: Mutex<HashMap<String, Vec<(String, String)>>>,
        get_calls: Mutex<Vec<String>>,
        set_calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
        fail_get: Mutex<Option<ProviderError>>,
        fail_set: Mutex<Option<ProviderError>>,
    }

    impl FakeProvider {
        fn with_pages(pages: Vec<ResourcePage>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                cursors_seen: Mutex::new(Vec::new()),
                tags: Mutex::new(HashMap::new()),
                get_calls: Mutex::new(Vec::new()),
                set_calls: Mutex::new(Vec::new()),
                fail_get: Mutex::new(None),
                fail_set: Mutex::new(None),
            }
        }

        fn single_resource(id: &str) -> Self {
            Self::with_pages(vec![ResourcePage::new(vec![ResourceDescriptor::new(id)])])
        }
    }

    impl Provider for FakeProvider {
        fn service(&self) -> AwsService {
            AwsService::Ec2
        }

        fn display_name(&self) -> &str {
            "fake"
        }
    }

    impl TagCodec for FakeProvider {
        type Native = Vec<(String, String)>;

        fn to_map(&self, native: &Self::Native) -> TagMap {
            native.iter().cloned().collect()
        }

        fn from_canonical(&self, items: &[TagItem]) -> Self::Native {
            items
                .iter()
                .map(|t| (t.name.clone(), t.value.clone()))
                .collect()
        }
    }

    #[async_trait]
    impl TagRead for FakeProvider {
        async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native> {
            self.get_calls.lock().unwrap().push(resource_id.to_string());
            if let Some(err) = self.fail_get.lock().unwrap().take() {
                return Err(err);
            }
            Ok(self
                .tags
                .lock()
                .unwrap()
                .get(resource_id)
                .cloned()
                .unwrap_or_default())
        }
    }

    #[async_trait]
    impl TagWrite for FakeProvider {
        async fn set_tags(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()> {
            if let Some(err) = self.fail_set.lock().unwrap().take() {
                return Err(err);
            }
            let native = self.from_canonical(desired);
            self.set_calls
                .lock()
                .unwrap()
                .push((resource_id.to_string(), native.clone()));
            self.tags
                .lock()
                .unwrap()
                .insert(resource_id.to_string(), native);
            Ok(())
        }
    }

    #[async_trait]
    impl ResourceList for FakeProvider {
        async fn next_page(&self, cursor: Option<String>) -> ProviderResult<ResourcePage> {
            self.cursors_seen.lock().unwrap().push(cursor);
            match self.pages.lock().unwrap().pop_front() {
                Some(page) => Ok(page),
                None => Ok(ResourcePage::new(Vec::new())),
            }
        }
    }

    /// Engine that applies a fixed desired set to every resource.
    struct StaticEngine {
        desired: Vec<TagItem>,
    }

    #[async_trait]
    impl TagReconciler for StaticEngine {
        async fn reconcile(
            &self,
            resource_id: &str,
            _current: &TagMap,
            _natural_keys: &[String],
            apply: &dyn ApplyTags,
        ) -> ProviderResult<()> {
            apply.apply(resource_id, &self.desired).await
        }
    }

    /// Engine that decides nothing needs applying.
    struct NoopEngine;

    #[async_trait]
    impl TagReconciler for NoopEngine {
        async fn reconcile(
            &self,
            _resource_id: &str,
            _current: &TagMap,
            _natural_keys: &[String],
            _apply: &dyn ApplyTags,
        ) -> ProviderResult<()> {
            Ok(())
        }
    }

    fn page(ids: &[&str]) -> ResourcePage {
        ResourcePage::new(ids.iter().map(|id| ResourceDescriptor::new(*id)).collect())
    }

    #[tokio::test]
    async fn test_enumeration_completeness_across_pages() {
        let provider = FakeProvider::with_pages(vec![
            page(&["a", "b"]).with_cursor("p1"),
            page(&["c", "d"]).with_cursor("p2"),
            page(&["e"]),
        ]);

        let summary = retag_pass(&provider, &NoopEngine).await.unwrap();
        assert_eq!(summary, PassSummary { resources: 5, pages: 3 });

        // Each resource visited exactly once, in pagination order.
        let gets = provider.get_calls.lock().unwrap();
        assert_eq!(*gets, vec!["a", "b", "c", "d", "e"]);

        // Cursors threaded through verbatim.
        let cursors = provider.cursors_seen.lock().unwrap();
        assert_eq!(
            *cursors,
            vec![None, Some("p1".to_string()), Some("p2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let provider = FakeProvider::with_pages(vec![ResourcePage::new(Vec::new())]);
        let summary = retag_pass(&provider, &NoopEngine).await.unwrap();
        assert_eq!(summary, PassSummary { resources: 0, pages: 1 });
        assert!(provider.get_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_short_circuits() {
        let provider = FakeProvider::single_resource("my resource");
        *provider.fail_get.lock().unwrap() = Some(ProviderError::tag_read("Badaboom"));

        let engine = StaticEngine {
            desired: vec![TagItem::new("foo", "bar")],
        };
        let err = retag_pass(&provider, &engine).await.unwrap_err();

        // The read failure comes back unmodified and no write was attempted.
        assert!(matches!(err, ProviderError::TagRead { .. }));
        assert_eq!(err.to_string(), "failed to read tags: Badaboom");
        assert!(provider.set_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_error_surfaces_unmodified() {
        let provider = FakeProvider::single_resource("my resource");
        *provider.fail_set.lock().unwrap() = Some(ProviderError::tag_write("Badaboom"));

        let engine = StaticEngine {
            desired: vec![TagItem::new("foo", "bar")],
        };
        let err = retag_pass(&provider, &engine).await.unwrap_err();

        assert!(matches!(err, ProviderError::TagWrite { .. }));
        assert_eq!(err.to_string(), "failed to apply tags: Badaboom");
    }

    #[tokio::test]
    async fn test_listing_error_aborts_pass() {
        struct FailingList(FakeProvider);

        impl Provider for FailingList {
            fn service(&self) -> AwsService {
                self.0.service()
            }
            fn display_name(&self) -> &str {
                self.0.display_name()
            }
        }
        impl TagCodec for FailingList {
            type Native = Vec<(String, String)>;
            fn to_map(&self, native: &Self::Native) -> TagMap {
                self.0.to_map(native)
            }
            fn from_canonical(&self, items: &[TagItem]) -> Self::Native {
                self.0.from_canonical(items)
            }
        }
        #[async_trait]
        impl TagRead for FailingList {
            async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native> {
                self.0.get_tags(resource_id).await
            }
        }
        #[async_trait]
        impl TagWrite for FailingList {
            async fn set_tags(
                &self,
                resource_id: &str,
                desired: &[TagItem],
            ) -> ProviderResult<()> {
                self.0.set_tags(resource_id, desired).await
            }
        }
        #[async_trait]
        impl ResourceList for FailingList {
            async fn next_page(&self, _cursor: Option<String>) -> ProviderResult<ResourcePage> {
                Err(ProviderError::list("AccessDenied"))
            }
        }

        let provider = FailingList(FakeProvider::with_pages(Vec::new()));
        let err = retag_pass(&provider, &NoopEngine).await.unwrap_err();
        assert!(matches!(err, ProviderError::List { .. }));
        assert_eq!(err.to_string(), "resource listing failed: AccessDenied");
        assert!(provider.0.get_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_untagged_resource() {
        let provider = FakeProvider::single_resource("my resource");
        let engine = StaticEngine {
            desired: vec![TagItem::new("foo", "bar")],
        };

        let summary = retag_pass(&provider, &engine).await.unwrap();
        assert_eq!(summary, PassSummary { resources: 1, pages: 1 });

        // Write carried the exact identifier and one foo=bar pair.
        let sets = provider.set_calls.lock().unwrap();
        assert_eq!(
            *sets,
            vec![(
                "my resource".to_string(),
                vec![("foo".to_string(), "bar".to_string())]
            )]
        );

        // A subsequent read reports the applied tags.
        let native = provider.get_tags("my resource").await.unwrap();
        let map = provider.to_map(&native);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("foo"), Some("bar"));
    }

    #[tokio::test]
    async fn test_natural_keys_reach_the_engine() {
        struct KeyRecorder {
            seen: Mutex<Vec<(String, Vec<String>)>>,
        }

        #[async_trait]
        impl TagReconciler for KeyRecorder {
            async fn reconcile(
                &self,
                resource_id: &str,
                _current: &TagMap,
                natural_keys: &[String],
                _apply: &dyn ApplyTags,
            ) -> ProviderResult<()> {
                self.seen
                    .lock()
                    .unwrap()
                    .push((resource_id.to_string(), natural_keys.to_vec()));
                Ok(())
            }
        }

        let provider = FakeProvider::with_pages(vec![ResourcePage::new(vec![
            ResourceDescriptor::new("arn:aws:logs:us-east-1:123456789012:log-group:/app/api")
                .with_key("/app/api"),
        ])]);
        let engine = KeyRecorder {
            seen: Mutex::new(Vec::new()),
        };

        retag_pass(&provider, &engine).await.unwrap();

        let seen = engine.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].0,
            "arn:aws:logs:us-east-1:123456789012:log-group:/app/api"
        );
        assert_eq!(seen[0].1, vec!["/app/api"]);
    }
}
