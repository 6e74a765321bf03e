//! # Provider Adapter Framework
//!
//! Core abstractions for reconciling resource tags across AWS services
//! against a centrally declared tag policy.
//!
//! AWS tagging APIs disagree on almost everything: the shape of a tag
//! container (ordered list of pairs vs. unordered map), how listings
//! paginate, and what identifies a resource (ARN, name, or opaque ID). This
//! crate defines the single canonical contract the per-service adapter
//! crates bridge to:
//!
//! - [`tags::TagItem`] / [`tags::TagMap`] - the canonical ordered and
//!   lookup forms of a tag set
//! - [`codec::TagCodec`] - native/canonical conversion, per provider
//! - [`traits::TagRead`], [`traits::TagWrite`], [`traits::ResourceList`] -
//!   the capabilities a provider adapter implements
//! - [`engine::TagReconciler`] - the boundary to the external policy engine
//! - [`pass::retag_pass`] - the generic enumerate, read, decide, apply pass
//!
//! ## Example
//!
//! ```ignore
//! use retagger_provider::prelude::*;
//! use retagger_provider_cloudwatch::CloudWatchLogsProvider;
//!
//! let sdk_config = aws_config::load_from_env().await;
//! let provider = CloudWatchLogsProvider::new(aws_sdk_cloudwatchlogs::Client::new(&sdk_config));
//!
//! // `engine` is whatever implements TagReconciler for your tag policy.
//! let summary = provider.retag_log_groups(&engine).await?;
//! println!("retagged {} log groups", summary.resources);
//! ```
//!
//! ## Failure model
//!
//! One pass per invocation, no retries, no persisted state. The first read,
//! write, or listing failure aborts the pass with the provider's error
//! content intact; tags already applied stay applied.

pub mod codec;
pub mod engine;
pub mod error;
pub mod pass;
pub mod resource;
pub mod tags;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
///
/// ```
/// use retagger_provider::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codec::TagCodec;
    pub use crate::engine::{ApplyTags, TagReconciler};
    pub use crate::error::{ProviderError, ProviderResult};
    pub use crate::pass::{retag_pass, PassSummary};
    pub use crate::resource::{ResourceDescriptor, ResourcePage};
    pub use crate::tags::{TagItem, TagMap};
    pub use crate::traits::{Provider, ResourceList, TagRead, TagWrite};
    pub use crate::types::AwsService;
}

// Re-export async_trait for adapter implementors
pub use async_trait::async_trait;
