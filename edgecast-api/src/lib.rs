//! # edgecast-api
//!
//! Typed async client for the EdgeCast CDN management API.
//!
//! ## API areas
//!
//! | Trait | Endpoints | Auth |
//! |-------|-----------|------|
//! | [`DnsApi`] | `/v2/mcc/customers/{account}/dns/...` | REST token |
//! | [`EdgeCnameApi`] | `/v2/mcc/customers/{account}/cnames` | REST token |
//! | [`OriginApi`] | `/v2/mcc/customers/{account}/origins/{media}` | REST token |
//! | [`CustomerApi`] | `/v2/pcc/customers...` | REST token (partner) |
//! | [`RulesEngineApi`] | `/rules-engine/v1.1/...` | IDS bearer token |
//! | [`WafApi`] | `/v2/mcc/customers/{account}/waf/v1.0/...` | REST token |
//!
//! [`EdgecastClient`] implements all of them. Each call takes the customer
//! account number explicitly, so one client can serve many accounts.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use edgecast_api::{ClientConfig, DnsApi, EdgecastClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EdgecastClient::new(ClientConfig::new("your-rest-token"))?;
//!     let zone = client.get_zone("A1B2", 1234).await?;
//!     for record in &zone.records.a {
//!         println!("{} {} {}", record.name, record.ttl, record.rdata);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`Result<T, ApiError>`](ApiError). Nothing is retried.
//! Use [`ApiError::is_expected`] to choose a log level.

mod api;
mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{
    ClientConfig, DEFAULT_API_ADDRESS, DEFAULT_API_ADDRESS_LEGACY, DEFAULT_IDS_ADDRESS,
    EdgecastClient, IdsCredentials,
};
pub use error::{ApiError, Result};
pub use traits::{
    CustomerApi, DnsApi, EdgeCnameApi, EdgecastApi, OriginApi, RulesEngineApi, WafApi,
};
pub use types::*;
pub use utils::log_sanitizer::{mask_secret, truncate_for_log};
