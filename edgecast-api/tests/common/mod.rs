//! Shared helpers for the HTTP-level tests

#![allow(dead_code)]

use edgecast_api::{ClientConfig, EdgecastClient, IdsCredentials};
use wiremock::MockServer;

pub const ACCOUNT: &str = "A1B2";
pub const TOKEN: &str = "test-rest-token";
pub const AUTH_HEADER: &str = "TOK:test-rest-token";

/// Assert that a `Result` is `Ok` and unwrap it (the test fails otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// A mock server plus a client whose three base addresses all point at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: EdgecastClient,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Like [`TestContext::new`] with IDS credentials configured.
    pub async fn with_ids() -> Self {
        Self::with_config(|config| {
            config.ids_credentials = Some(IdsCredentials {
                client_id: "client-id".to_string(),
                client_secret: "client-secret".to_string(),
                scope: "ec.rules".to_string(),
            });
        })
        .await
    }

    pub async fn with_config(customize: impl FnOnce(&mut ClientConfig)) -> Self {
        let server = MockServer::start().await;
        let mut config = ClientConfig {
            api_token: TOKEN.to_string(),
            api_address: server.uri(),
            ids_address: server.uri(),
            api_address_legacy: server.uri(),
            ..ClientConfig::default()
        };
        customize(&mut config);
        let client = EdgecastClient::new(config).expect("client");
        Self { server, client }
    }
}

pub fn mcc(rest: &str) -> String {
    format!("/v2/mcc/customers/{ACCOUNT}{rest}")
}
