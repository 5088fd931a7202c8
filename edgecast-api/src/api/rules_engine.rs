//! Rules engine v1.1 (`{api_address}/rules-engine/v1.1`), IDS-authenticated

use async_trait::async_trait;
use serde_json::Value;

use crate::client::{ApiRequest, EdgecastClient};
use crate::error::Result;
use crate::traits::RulesEngineApi;
use crate::types::{DeployRequest, DeployRequestCreated, PolicyCreated, PortalContext};

const SERVICE: &str = "rules-engine";
const BASE: &str = "/rules-engine/v1.1";

#[async_trait]
impl RulesEngineApi for EdgecastClient {
    async fn get_policy(&self, ctx: &PortalContext, policy_id: &str) -> Result<Value> {
        self.call(
            ApiRequest::get(
                SERVICE,
                format!("{BASE}/policies/{}", urlencoding::encode(policy_id)),
            )
            .on_api()
            .portal(ctx)
            .context(format!("policy {policy_id}")),
        )
        .await
    }

    async fn add_policy(&self, ctx: &PortalContext, policy: &Value) -> Result<String> {
        let created: PolicyCreated = self
            .call(
                ApiRequest::post(SERVICE, format!("{BASE}/policies"))
                    .on_api()
                    .portal(ctx)
                    .body(policy.clone())
                    .context("policy"),
            )
            .await?;
        log::info!(
            "[{SERVICE}] Created policy {} (state {:?})",
            created.id,
            created.state
        );
        Ok(created.id)
    }

    async fn submit_deploy_request(
        &self,
        ctx: &PortalContext,
        request: &DeployRequest,
    ) -> Result<DeployRequestCreated> {
        log::info!(
            "[{SERVICE}] Deploying policy {} to {}",
            request.policy_id,
            request.environment.as_str()
        );
        self.call(
            ApiRequest::post(SERVICE, format!("{BASE}/deploy-requests"))
                .on_api()
                .portal(ctx)
                .json(request)?
                .context(format!("policy {}", request.policy_id)),
        )
        .await
    }
}
