//! EdgeCast REST client
//!
//! One `EdgecastClient` serves every API area. Legacy endpoints
//! (`api_address_legacy`) authenticate with the account's REST token; the
//! newer endpoints (`api_address`) take an IDS bearer token obtained with
//! the client-credentials grant. The IDS token is fetched on first use and
//! kept for the client's lifetime.

use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ApiErrorMapper, ErrorContext};
use crate::types::{IdsToken, PortalContext};
use crate::utils::log_sanitizer::mask_secret;

pub const DEFAULT_API_ADDRESS: &str = "https://api.vdms.io";
pub const DEFAULT_IDS_ADDRESS: &str = "https://id.vdms.io";
pub const DEFAULT_API_ADDRESS_LEGACY: &str = "https://api.edgecast.com";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// OAuth client-credentials for the IDS token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct IdsCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
}

impl std::fmt::Debug for IdsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdsCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("scope", &self.scope)
            .finish()
    }
}

/// Immutable client configuration.
///
/// The customer account is not part of it: every API call takes the account
/// number explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_token: String,
    pub ids_credentials: Option<IdsCredentials>,
    pub api_address: String,
    pub ids_address: String,
    pub api_address_legacy: String,
    pub partner_user_id: Option<i64>,
    pub partner_id: Option<i64>,
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            ids_credentials: None,
            api_address: DEFAULT_API_ADDRESS.to_string(),
            ids_address: DEFAULT_IDS_ADDRESS.to_string(),
            api_address_legacy: DEFAULT_API_ADDRESS_LEGACY.to_string(),
            partner_user_id: None,
            partner_id: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &mask_secret(&self.api_token))
            .field("ids_credentials", &self.ids_credentials)
            .field("api_address", &self.api_address)
            .field("ids_address", &self.ids_address)
            .field("api_address_legacy", &self.api_address_legacy)
            .field("partner_user_id", &self.partner_user_id)
            .field("partner_id", &self.partner_id)
            .finish()
    }
}

/// Which base address a request goes to, and therefore how it authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// `api_address_legacy`, `Authorization: TOK:<token>`
    Legacy,
    /// `api_address`, `Authorization: Bearer <ids token>`
    Api,
}

/// A request under construction (internal use)
#[derive(Debug)]
pub(crate) struct ApiRequest {
    service: &'static str,
    method: Method,
    target: Target,
    path: String,
    query: Vec<(&'static str, String)>,
    headers: Vec<(&'static str, String)>,
    body: Option<Value>,
    context: ErrorContext,
}

impl ApiRequest {
    fn new(service: &'static str, method: Method, path: impl Into<String>) -> Self {
        Self {
            service,
            method,
            target: Target::Legacy,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            context: ErrorContext::default(),
        }
    }

    pub(crate) fn get(service: &'static str, path: impl Into<String>) -> Self {
        Self::new(service, Method::GET, path)
    }

    pub(crate) fn post(service: &'static str, path: impl Into<String>) -> Self {
        Self::new(service, Method::POST, path)
    }

    pub(crate) fn put(service: &'static str, path: impl Into<String>) -> Self {
        Self::new(service, Method::PUT, path)
    }

    pub(crate) fn delete(service: &'static str, path: impl Into<String>) -> Self {
        Self::new(service, Method::DELETE, path)
    }

    /// Send to `api_address` with the IDS bearer token.
    pub(crate) fn on_api(mut self) -> Self {
        self.target = Target::Api;
        self
    }

    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub(crate) fn portal(mut self, ctx: &PortalContext) -> Self {
        for (name, value) in ctx.headers() {
            self.headers.push((name, value.to_string()));
        }
        self
    }

    pub(crate) fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` as the JSON payload.
    pub(crate) fn json<B: serde::Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        let value = HttpUtils::to_json_value(body, self.service)?;
        Ok(self.body(value))
    }

    pub(crate) fn context(mut self, resource: impl Into<String>) -> Self {
        self.context = ErrorContext::resource(resource);
        self
    }

    pub(crate) fn service(&self) -> &'static str {
        self.service
    }

    fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

/// Path prefix of the legacy media-control endpoints for one account.
pub(crate) fn mcc_path(account_number: &str, rest: &str) -> String {
    format!(
        "/v2/mcc/customers/{}{rest}",
        urlencoding::encode(account_number)
    )
}

/// EdgeCast management API client.
pub struct EdgecastClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
    ids_token: OnceCell<String>,
}

impl std::fmt::Debug for EdgecastClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgecastClient")
            .field("config", &self.config)
            .field("ids_token_cached", &self.ids_token.initialized())
            .finish_non_exhaustive()
    }
}

impl EdgecastClient {
    /// Build a client with the default connect/request timeouts.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::NetworkError {
                service: "client".to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self::with_http_client(client, config))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http_client(client: Client, config: ClientConfig) -> Self {
        Self {
            client,
            config,
            ids_token: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and deserialize the JSON response.
    pub(crate) async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let service = request.service();
        let body = self.send(request).await?;
        HttpUtils::parse_json(&body, service)
    }

    /// Send a request whose response body is not needed.
    pub(crate) async fn call_unit(&self, request: ApiRequest) -> Result<()> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: ApiRequest) -> Result<String> {
        let (base, authorization) = match request.target {
            Target::Legacy => (
                self.config.api_address_legacy.as_str(),
                format!("TOK:{}", self.config.api_token),
            ),
            Target::Api => (
                self.config.api_address.as_str(),
                format!("Bearer {}", self.ids_token().await?),
            ),
        };
        let url = request.url(base);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header("Authorization", authorization)
            .header("Accept", "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let (status, text) =
            HttpUtils::execute_request(builder, request.service, request.method.as_str(), &url)
                .await?;

        if (200..300).contains(&status) {
            return Ok(text);
        }

        let raw = crate::api::error::raw_error_from_body(status, &text);
        let err = self.map_error(request.service, raw, request.context);
        if err.is_expected() {
            log::warn!("{err}");
        } else {
            log::error!("{err}");
        }
        Err(err)
    }

    /// IDS bearer token, fetched once per client.
    async fn ids_token(&self) -> Result<&str> {
        let Some(creds) = self.config.ids_credentials.as_ref() else {
            return Err(ApiError::InvalidCredentials {
                service: "ids".to_string(),
                raw_message: Some("IDS client credentials are not configured".to_string()),
            });
        };
        self.ids_token
            .get_or_try_init(|| self.fetch_ids_token(creds))
            .await
            .map(String::as_str)
    }

    async fn fetch_ids_token(&self, creds: &IdsCredentials) -> Result<String> {
        let url = format!(
            "{}/connect/token",
            self.config.ids_address.trim_end_matches('/')
        );
        let form = format!(
            "grant_type=client_credentials&client_id={}&client_secret={}&scope={}",
            urlencoding::encode(&creds.client_id),
            urlencoding::encode(&creds.client_secret),
            urlencoding::encode(&creds.scope),
        );
        let builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form);

        let (status, text) = HttpUtils::execute_request(builder, "ids", "POST", &url).await?;
        if !(200..300).contains(&status) {
            let raw = crate::api::error::raw_error_from_body(status, &text);
            return Err(self.map_error("ids", raw, ErrorContext::default()));
        }

        let token: IdsToken = HttpUtils::parse_json(&text, "ids")?;
        log::debug!("[ids] Obtained access token for client {}", creds.client_id);
        Ok(token.access_token)
    }
}
