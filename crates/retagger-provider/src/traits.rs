//! Provider capability traits.
//!
//! A provider adapter implements the base [`Provider`] trait plus the three
//! capabilities the retag pass composes: reading tags, writing tags, and
//! enumerating resources.

use async_trait::async_trait;

use crate::codec::TagCodec;
use crate::error::ProviderResult;
use crate::resource::ResourcePage;
use crate::tags::TagItem;
use crate::types::AwsService;

/// Base trait for all provider adapters.
///
/// An adapter owns exactly one client handle to a single AWS service and is
/// stateless across calls apart from that handle.
pub trait Provider: Send + Sync {
    /// The AWS service this adapter targets.
    fn service(&self) -> AwsService;

    /// Display name for this adapter instance.
    fn display_name(&self) -> &str;
}

/// Capability: read one resource's current tags in native form.
#[async_trait]
pub trait TagRead: Provider + TagCodec {
    /// Fetch the current tags for `resource_id`.
    ///
    /// Issues exactly one remote read. On failure the provider error
    /// surfaces with its content intact; callers compare and propagate it
    /// verbatim.
    async fn get_tags(&self, resource_id: &str) -> ProviderResult<Self::Native>;
}

/// Capability: ensure tags are present on one resource.
#[async_trait]
pub trait TagWrite: Provider + TagCodec {
    /// Apply the complete desired tag set to `resource_id`.
    ///
    /// Issues exactly one remote write. `desired` is the full desired state
    /// for the resource, not a delta. Services with additive/merge-only
    /// tagging APIs only guarantee the desired tags end up present; removals
    /// are never computed or submitted here.
    async fn set_tags(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()>;
}

/// Capability: walk the provider's paginated resource listing.
#[async_trait]
pub trait ResourceList: Provider {
    /// Fetch one page of resources.
    ///
    /// Pass `None` to start, then each returned cursor until the page comes
    /// back final. One remote page request per call; a failure aborts
    /// enumeration without visiting remaining pages. Enumeration is a
    /// point-in-time best-effort snapshot, not transactionally consistent
    /// with concurrent mutation by other actors.
    async fn next_page(&self, cursor: Option<String>) -> ProviderResult<ResourcePage>;
}
