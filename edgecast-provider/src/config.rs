//! Provider configuration
//!
//! Deserialized from the provider's attribute bag. Missing addresses fall
//! back to the public EdgeCast endpoints.

use edgecast_api::{
    ClientConfig, DEFAULT_API_ADDRESS, DEFAULT_API_ADDRESS_LEGACY, DEFAULT_IDS_ADDRESS,
    IdsCredentials, mask_secret,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigValidationError;
use crate::resource::ResourceContext;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// REST API token for the legacy endpoints.
    pub api_token: String,
    pub ids_client_id: String,
    pub ids_client_secret: String,
    pub ids_scope: String,
    /// Default customer account for resources that do not set one.
    pub account_number: String,
    pub partner_user_id: Option<i64>,
    pub partner_id: Option<i64>,
    pub api_address: String,
    pub ids_address: String,
    pub api_address_legacy: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            ids_client_id: String::new(),
            ids_client_secret: String::new(),
            ids_scope: String::new(),
            account_number: String::new(),
            partner_user_id: None,
            partner_id: None,
            api_address: DEFAULT_API_ADDRESS.to_string(),
            ids_address: DEFAULT_IDS_ADDRESS.to_string(),
            api_address_legacy: DEFAULT_API_ADDRESS_LEGACY.to_string(),
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_token", &mask_secret(&self.api_token))
            .field("ids_client_id", &self.ids_client_id)
            .field("ids_client_secret", &mask_secret(&self.ids_client_secret))
            .field("ids_scope", &self.ids_scope)
            .field("account_number", &self.account_number)
            .field("partner_user_id", &self.partner_user_id)
            .field("partner_id", &self.partner_id)
            .field("api_address", &self.api_address)
            .field("ids_address", &self.ids_address)
            .field("api_address_legacy", &self.api_address_legacy)
            .finish()
    }
}

impl ProviderConfig {
    /// Check credentials and addresses.
    ///
    /// Either `api_token` or all three IDS fields must be set. A partially
    /// filled IDS triple is rejected even when `api_token` is present.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let ids_fields = [
            ("ids_client_id", &self.ids_client_id),
            ("ids_client_secret", &self.ids_client_secret),
            ("ids_scope", &self.ids_scope),
        ];
        let any_ids = ids_fields.iter().any(|(_, v)| !v.trim().is_empty());

        if any_ids {
            if let Some((field, _)) = ids_fields.iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(ConfigValidationError::EmptyField {
                    field: (*field).to_string(),
                });
            }
        } else if self.api_token.trim().is_empty() {
            return Err(ConfigValidationError::MissingField {
                field: "api_token".to_string(),
            });
        }

        for (field, value) in [
            ("api_address", &self.api_address),
            ("ids_address", &self.ids_address),
            ("api_address_legacy", &self.api_address_legacy),
        ] {
            validate_address(field, value)?;
        }
        Ok(())
    }

    pub fn ids_credentials(&self) -> Option<IdsCredentials> {
        if self.ids_client_id.trim().is_empty() {
            return None;
        }
        Some(IdsCredentials {
            client_id: self.ids_client_id.clone(),
            client_secret: self.ids_client_secret.clone(),
            scope: self.ids_scope.clone(),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_token: self.api_token.clone(),
            ids_credentials: self.ids_credentials(),
            api_address: self.api_address.clone(),
            ids_address: self.ids_address.clone(),
            api_address_legacy: self.api_address_legacy.clone(),
            partner_user_id: self.partner_user_id,
            partner_id: self.partner_id,
        }
    }

    pub fn resource_context(&self) -> ResourceContext {
        ResourceContext {
            account_number: self.account_number.clone(),
            partner_user_id: self.partner_user_id,
        }
    }
}

fn validate_address(field: &str, value: &str) -> Result<(), ConfigValidationError> {
    if value.trim().is_empty() {
        return Err(ConfigValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    let parsed = url::Url::parse(value).map_err(|e| ConfigValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(())
}
