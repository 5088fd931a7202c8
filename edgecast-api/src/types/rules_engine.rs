use serde::{Deserialize, Serialize};

/// Identity headers the rules-engine API requires on every call.
///
/// When a partner manages a customer's policies, all three are sent as
/// `Portal-Account-Number`, `Portal-Customer-User-Id` and
/// `Portal-Portaltype-Id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalContext {
    pub account_number: String,
    pub customer_user_id: String,
    pub portal_type_id: String,
}

impl PortalContext {
    pub fn new(
        account_number: impl Into<String>,
        customer_user_id: impl Into<String>,
        portal_type_id: impl Into<String>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            customer_user_id: customer_user_id.into(),
            portal_type_id: portal_type_id.into(),
        }
    }

    pub(crate) fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("Portal-Account-Number", self.account_number.as_str()),
            ("Portal-Customer-User-Id", self.customer_user_id.as_str()),
            ("Portal-Portaltype-Id", self.portal_type_id.as_str()),
        ]
    }
}

/// Deployment environment of a rules-engine policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Staging,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// Response of `POST /rules-engine/v1.1/policies`.
///
/// The policy body itself stays an opaque JSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyCreated {
    #[serde(deserialize_with = "crate::utils::id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Body of `POST /rules-engine/v1.1/deploy-requests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployRequest {
    pub environment: Environment,
    pub message: String,
    pub policy_id: String,
}

/// Response of a deploy request submission.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployRequestCreated {
    #[serde(deserialize_with = "crate::utils::id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Token response of the IDS `/connect/token` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IdsToken {
    pub(crate) access_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) expires_in: Option<u64>,
}
