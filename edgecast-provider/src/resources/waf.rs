//! WAF rules (`ec_waf_access_rule`, `ec_waf_rate_rule`,
//! `ec_waf_managed_rule`, `ec_waf_custom_rule_set`) and the account-wide
//! WAF scope set (`ec_waf_scopes`).
//!
//! Rule and scope documents are opaque JSON.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{WafApi, WafRuleKind};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{ApiResultExt, ProviderError, ProviderResult};
use crate::resource::{Resource, ResourceContext, ResourceState, cleared, read_after_write};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WafRuleAttributes {
    #[serde(default)]
    pub account_number: String,
    pub rule: Value,
    #[serde(default)]
    pub last_modified_date: String,
}

/// One handler per rule kind.
pub struct WafRuleResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
    kind: WafRuleKind,
}

impl<A> WafRuleResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext, kind: WafRuleKind) -> Self {
        Self { api, ctx, kind }
    }

    /// Call-site name for error prefixes, e.g. `AddRateRule`.
    fn op(&self, verb: &str) -> String {
        let noun = match self.kind {
            WafRuleKind::AccessRule => "AccessRule",
            WafRuleKind::RateRule => "RateRule",
            WafRuleKind::ManagedRule => "ManagedRule",
            WafRuleKind::CustomRuleSet => "CustomRuleSet",
        };
        format!("{verb}{noun}")
    }

    /// The rule document with `customer_id` filled in when missing.
    fn document(&self, account: &str, attrs: &WafRuleAttributes) -> ProviderResult<Value> {
        let mut rule = attrs.rule.clone();
        let Some(fields) = rule.as_object_mut() else {
            return Err(ProviderError::Validation(format!(
                "rule: {} must be a JSON object",
                self.kind
            )));
        };
        fields
            .entry("customer_id")
            .or_insert_with(|| Value::String(account.to_string()));
        Ok(rule)
    }
}

#[async_trait]
impl<A: WafApi + 'static> Resource for WafRuleResource<A> {
    type Attributes = WafRuleAttributes;

    fn type_name(&self) -> &'static str {
        match self.kind {
            WafRuleKind::AccessRule => "ec_waf_access_rule",
            WafRuleKind::RateRule => "ec_waf_rate_rule",
            WafRuleKind::ManagedRule => "ec_waf_managed_rule",
            WafRuleKind::CustomRuleSet => "ec_waf_custom_rule_set",
        }
    }

    async fn create(
        &self,
        attrs: &WafRuleAttributes,
    ) -> ProviderResult<ResourceState<WafRuleAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let rule = self.document(account, attrs)?;
        let id = self
            .api
            .add_waf_rule(account, self.kind, &rule)
            .await
            .context(&self.op("Add"))?;
        log::info!("[waf] created {} {id}", self.kind);
        read_after_write(self, &id, attrs).await
    }

    /// Keeps the declared rule: the API echoes it back with ids and
    /// defaults added.
    async fn read(
        &self,
        id: &str,
        attrs: &WafRuleAttributes,
    ) -> ProviderResult<Option<ResourceState<WafRuleAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        match self.api.get_waf_rule(account, self.kind, id).await {
            Ok(remote) => Ok(Some(ResourceState::new(
                id,
                WafRuleAttributes {
                    last_modified_date: remote
                        .get("last_modified_date")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    ..attrs.clone()
                },
            ))),
            Err(e) => Ok(cleared(self.type_name(), id, &e)),
        }
    }

    async fn update(
        &self,
        id: &str,
        attrs: &WafRuleAttributes,
    ) -> ProviderResult<ResourceState<WafRuleAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let rule = self.document(account, attrs)?;
        self.api
            .update_waf_rule(account, self.kind, id, &rule)
            .await
            .context(&self.op("Update"))?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &WafRuleAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        self.api
            .delete_waf_rule(account, self.kind, id)
            .await
            .context(&self.op("Delete"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WafScopesAttributes {
    #[serde(default)]
    pub account_number: String,
    /// Array of scope documents; replaces the account's whole scope set.
    pub scopes: Value,
}

pub struct WafScopesResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> WafScopesResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

impl<A: WafApi> WafScopesResource<A> {
    /// Replace the scope set and return the id the API reports, falling back
    /// to the account number.
    async fn replace(&self, account: &str, scopes: &Value) -> ProviderResult<String> {
        let body = json!({ "customer_id": account, "scopes": scopes });
        let resp = self
            .api
            .update_waf_scopes(account, &body)
            .await
            .context("UpdateWafScopes")?;
        Ok(resp.id.unwrap_or_else(|| account.to_string()))
    }
}

#[async_trait]
impl<A: WafApi + 'static> Resource for WafScopesResource<A> {
    type Attributes = WafScopesAttributes;

    fn type_name(&self) -> &'static str {
        "ec_waf_scopes"
    }

    async fn create(
        &self,
        attrs: &WafScopesAttributes,
    ) -> ProviderResult<ResourceState<WafScopesAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let id = self.replace(account, &attrs.scopes).await?;
        read_after_write(self, &id, attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &WafScopesAttributes,
    ) -> ProviderResult<Option<ResourceState<WafScopesAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        match self.api.get_waf_scopes(account).await {
            Ok(mut remote) => Ok(Some(ResourceState::new(
                id,
                WafScopesAttributes {
                    account_number: attrs.account_number.clone(),
                    scopes: remote
                        .get_mut("scopes")
                        .map(Value::take)
                        .unwrap_or_else(|| json!([])),
                },
            ))),
            Err(e) => Ok(cleared(self.type_name(), id, &e)),
        }
    }

    async fn update(
        &self,
        _id: &str,
        attrs: &WafScopesAttributes,
    ) -> ProviderResult<ResourceState<WafScopesAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let id = self.replace(account, &attrs.scopes).await?;
        read_after_write(self, &id, attrs).await
    }

    async fn delete(&self, _id: &str, attrs: &WafScopesAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        self.replace(account, &json!([])).await.map(|_| ())
    }
}
