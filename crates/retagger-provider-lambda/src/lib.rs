//! Lambda provider adapter.
//!
//! Retags functions. Native tags are an unordered map, resources are
//! identified by function ARN, and listings paginate with
//! `Marker`/`NextMarker`. The function name is the natural key policy rules
//! match against.

mod client;
mod config;
mod provider;

pub use client::LambdaApi;
pub use config::LambdaConfig;
pub use provider::LambdaProvider;
