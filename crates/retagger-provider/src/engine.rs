//! Reconciliation engine boundary.
//!
//! The engine that decides what tags a resource should carry is an external
//! collaborator; this module defines only the narrow contract it is consumed
//! through. Adapters supply mechanism, the engine supplies policy.

use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::tags::{TagItem, TagMap};

/// Applies a desired tag set to a resource.
///
/// Handed to [`TagReconciler::reconcile`] already bound to the provider that
/// yielded the resource. The engine invokes it zero or one time, always with
/// the complete desired tag sequence for the resource.
#[async_trait]
pub trait ApplyTags: Send + Sync {
    /// Apply `desired` to `resource_id` through the owning provider.
    async fn apply(&self, resource_id: &str, desired: &[TagItem]) -> ProviderResult<()>;
}

/// Decides the tags a resource should carry.
///
/// `reconcile` receives the resource identifier, its current tags in lookup
/// form, and its natural keys. It returns no decision value to the caller:
/// whether and what to apply is decided internally and carried out through
/// `apply`. An error returned by `apply` must propagate back unmodified.
#[async_trait]
pub trait TagReconciler: Send + Sync {
    /// Reconcile one resource's tags against policy.
    async fn reconcile(
        &self,
        resource_id: &str,
        current: &TagMap,
        natural_keys: &[String],
        apply: &dyn ApplyTags,
    ) -> ProviderResult<()>;
}
