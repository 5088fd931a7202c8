use serde::{Deserialize, Serialize};

/// WAF document families, each served from its own collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WafRuleKind {
    AccessRule,
    RateRule,
    ManagedRule,
    CustomRuleSet,
}

impl WafRuleKind {
    /// Collection path segment under `/waf/v1.0/`.
    pub fn path(self) -> &'static str {
        match self {
            Self::AccessRule => "acl",
            Self::RateRule => "limit",
            Self::ManagedRule => "profile",
            Self::CustomRuleSet => "rules",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AccessRule => "access rule",
            Self::RateRule => "rate rule",
            Self::ManagedRule => "managed rule",
            Self::CustomRuleSet => "custom rule set",
        }
    }
}

impl std::fmt::Display for WafRuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Envelope returned by WAF write operations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WafResponse {
    #[serde(default, deserialize_with = "crate::utils::id::deserialize_option")]
    pub id: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Vec<WafError>,
}

impl WafResponse {
    /// Joined error messages, when the API reported any.
    pub fn error_message(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
