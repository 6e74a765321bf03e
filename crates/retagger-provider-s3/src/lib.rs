//! S3 provider adapter.
//!
//! Retags buckets. Native tags are the ordered `TagSet` list, resources are
//! identified by bucket name (also the natural key), and bucket listings
//! paginate with a continuation token. Two S3 quirks are absorbed here:
//! `GetBucketTagging` fails with `NoSuchTagSet` on an untagged bucket, which
//! the adapter reports as an empty tag set, and `PutBucketTagging` replaces
//! the whole set, which matches `set_tags` always carrying the complete
//! desired state.

mod client;
mod config;
mod provider;

pub use client::S3Api;
pub use config::S3Config;
pub use provider::S3Provider;
