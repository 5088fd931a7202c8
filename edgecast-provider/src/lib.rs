//! # edgecast-provider
//!
//! Resource handlers for EdgeCast CDN objects on top of [`edgecast_api`].
//!
//! Each resource type (`ec_dns_zone`, `ec_cname`, `ec_waf_rate_rule`, ...)
//! implements [`Resource`] over a typed attribute struct. The provider hands
//! them out type-erased as [`DynResource`], which takes and returns JSON
//! attribute bags.
//!
//! ```rust,no_run
//! use edgecast_provider::{EdgecastProvider, ProviderConfig};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config: ProviderConfig = serde_json::from_value(json!({
//!     "api_token": "your-rest-token",
//!     "account_number": "A1B2",
//! }))?;
//! let provider = EdgecastProvider::configure(&config)?;
//!
//! if let Some(cname) = provider.resource("ec_cname") {
//!     let state = cname
//!         .create(json!({
//!             "name": "cdn.example.com",
//!             "media_type": "httplarge",
//!             "origin_id": -1,
//!         }))
//!         .await?;
//!     println!("created CNAME {}", state.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! DNS zone updates go through [`reconcile::reconcile_zone`], which merges the
//! declared zone into the stored one so server-assigned ids survive.

pub mod config;
pub mod error;
pub mod provider;
pub mod reconcile;
pub mod resource;
pub mod resources;

#[cfg(test)]
mod test_utils;

pub use config::ProviderConfig;
pub use error::{ApiResultExt, ConfigValidationError, ProviderError, ProviderResult};
pub use provider::EdgecastProvider;
pub use resource::{DynResource, Resource, ResourceContext, ResourceState};
