//! `ec_rules_engine_policy`: rules-engine policies and their deployment.
//!
//! Policies are immutable on the vendor side. Every create or update
//! submits a new policy and deploys it, so the resource id changes on
//! update. There is no delete endpoint: deleting deploys a placeholder
//! policy that matches everything and does nothing.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{DeployRequest, Environment, PortalContext, RulesEngineApi};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{ApiResultExt, ProviderResult};
use crate::resource::{Resource, ResourceContext, ResourceState, cleared, read_after_write};
use crate::resources::parse_attr;

const DEFAULT_PLATFORM: &str = "http_large";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesEnginePolicyAttributes {
    #[serde(default)]
    pub account_number: String,
    pub customer_user_id: String,
    #[serde(default = "default_portal_type")]
    pub portal_type_id: String,
    /// Policy document, sent as is.
    pub policy: Value,
    /// `production` or `staging`.
    #[serde(default = "default_deploy_to")]
    pub deploy_to: String,
    #[serde(default)]
    pub deploy_request_id: String,
    /// Vendor-side state of the policy (e.g. `locked`).
    #[serde(default)]
    pub policy_state: String,
}

fn default_portal_type() -> String {
    "1".to_string()
}

fn default_deploy_to() -> String {
    Environment::Production.as_str().to_string()
}

/// Policy deployed in place of a deleted one.
fn placeholder_policy(platform: &str, now: chrono::DateTime<chrono::Utc>) -> Value {
    let stamp = now.format("%Y-%m-%dT%H:%M:%SZ");
    json!({
        "@type": "policy-create",
        "name": format!("Placeholder Policy {stamp}"),
        "platform": platform,
        "state": "locked",
        "rules": [{
            "@type": "rule-create",
            "description": format!("Placeholder rule created {stamp}"),
            "matches": [{
                "type": "match.always",
                "features": [{
                    "type": "feature.comment",
                    "value": format!("Empty policy created on {stamp}"),
                }],
            }],
        }],
    })
}

pub struct RulesEnginePolicyResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> RulesEnginePolicyResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }

    fn portal(&self, attrs: &RulesEnginePolicyAttributes) -> ProviderResult<PortalContext> {
        Ok(PortalContext::new(
            self.ctx.account(&attrs.account_number)?,
            attrs.customer_user_id.clone(),
            attrs.portal_type_id.clone(),
        ))
    }
}

impl<A: RulesEngineApi> RulesEnginePolicyResource<A> {
    /// Submit `policy` and deploy it. Returns the policy id and the deploy
    /// request id.
    async fn submit_and_deploy(
        &self,
        portal: &PortalContext,
        policy: &Value,
        environment: Environment,
    ) -> ProviderResult<(String, String)> {
        let policy_id = self
            .api
            .add_policy(portal, policy)
            .await
            .context("AddPolicy")?;

        let request = DeployRequest {
            environment,
            message: format!("Deploy policy {policy_id}"),
            policy_id: policy_id.clone(),
        };
        let deployed = self
            .api
            .submit_deploy_request(portal, &request)
            .await
            .context("SubmitDeployRequest")?;

        log::info!(
            "[rules-engine] policy {policy_id} deployed to {} (request {})",
            environment.as_str(),
            deployed.id
        );
        Ok((policy_id, deployed.id))
    }

    async fn write(
        &self,
        attrs: &RulesEnginePolicyAttributes,
    ) -> ProviderResult<ResourceState<RulesEnginePolicyAttributes>>
    where
        A: 'static,
    {
        let portal = self.portal(attrs)?;
        let environment: Environment = parse_attr("deploy_to", &attrs.deploy_to)?;
        let (policy_id, request_id) = self
            .submit_and_deploy(&portal, &attrs.policy, environment)
            .await?;

        let written = RulesEnginePolicyAttributes {
            deploy_request_id: request_id,
            ..attrs.clone()
        };
        read_after_write(self, &policy_id, &written).await
    }
}

#[async_trait]
impl<A: RulesEngineApi + 'static> Resource for RulesEnginePolicyResource<A> {
    type Attributes = RulesEnginePolicyAttributes;

    fn type_name(&self) -> &'static str {
        "ec_rules_engine_policy"
    }

    async fn create(
        &self,
        attrs: &RulesEnginePolicyAttributes,
    ) -> ProviderResult<ResourceState<RulesEnginePolicyAttributes>> {
        self.write(attrs).await
    }

    /// The declared policy is kept as is: the API returns it with
    /// server-added fields that would never match the declaration.
    async fn read(
        &self,
        id: &str,
        attrs: &RulesEnginePolicyAttributes,
    ) -> ProviderResult<Option<ResourceState<RulesEnginePolicyAttributes>>> {
        let portal = self.portal(attrs)?;
        match self.api.get_policy(&portal, id).await {
            Ok(remote) => Ok(Some(ResourceState::new(
                id,
                RulesEnginePolicyAttributes {
                    policy_state: remote
                        .get("state")
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
        _id: &str,
        attrs: &RulesEnginePolicyAttributes,
    ) -> ProviderResult<ResourceState<RulesEnginePolicyAttributes>> {
        self.write(attrs).await
    }

    async fn delete(&self, id: &str, attrs: &RulesEnginePolicyAttributes) -> ProviderResult<()> {
        let portal = self.portal(attrs)?;
        let environment: Environment = parse_attr("deploy_to", &attrs.deploy_to)?;
        let platform = attrs
            .policy
            .get("platform")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PLATFORM);

        let placeholder = placeholder_policy(platform, chrono::Utc::now());
        let (placeholder_id, _) = self
            .submit_and_deploy(&portal, &placeholder, environment)
            .await?;
        log::info!("[rules-engine] policy {id} replaced by placeholder {placeholder_id}");
        Ok(())
    }
}
