//! CloudWatch Logs provider adapter.
//!
//! Retags log groups. Native tags are an unordered map, resources are
//! identified by log-group ARN (`DescribeLogGroups` reports it with a
//! trailing `:*` the tagging APIs reject, so the enumerator strips it), and
//! listings paginate with `nextToken`. The log-group name is the natural key
//! policy rules match against.

mod client;
mod config;
mod provider;

pub use client::CloudWatchLogsApi;
pub use config::CloudWatchLogsConfig;
pub use provider::CloudWatchLogsProvider;
