//! RDS provider adapter.
//!
//! Retags database instances. Native tags are an ordered `Vec<Tag>`,
//! resources are identified by DB instance ARN, and listings paginate with
//! `Marker`. The DB instance identifier is the natural key policy rules
//! match against. `AddTagsToResource` is additive: the adapter guarantees
//! the desired tags end up present and never computes removals.

mod client;
mod config;
mod provider;

pub use client::RdsApi;
pub use config::RdsConfig;
pub use provider::RdsProvider;
