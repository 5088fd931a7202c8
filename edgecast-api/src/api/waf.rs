//! WAF rules and scopes (`/v2/mcc/customers/{account}/waf/v1.0`)

use async_trait::async_trait;
use serde_json::Value;

use crate::client::{ApiRequest, EdgecastClient, mcc_path};
use crate::error::{ApiError, Result};
use crate::traits::WafApi;
use crate::types::{WafResponse, WafRuleKind};

const SERVICE: &str = "waf";

fn waf_path(account_number: &str, rest: &str) -> String {
    mcc_path(account_number, &format!("/waf/v1.0{rest}"))
}

fn rule_path(account_number: &str, kind: WafRuleKind, id: Option<&str>) -> String {
    match id {
        Some(id) => waf_path(
            account_number,
            &format!("/{}/{}", kind.path(), urlencoding::encode(id)),
        ),
        None => waf_path(account_number, &format!("/{}", kind.path())),
    }
}

/// A 2xx response can still carry `success: false`.
fn check_response(resp: WafResponse, what: &str) -> Result<WafResponse> {
    if resp.success || resp.errors.is_empty() {
        return Ok(resp);
    }
    Err(ApiError::InvalidParameter {
        service: SERVICE.to_string(),
        param: "body".to_string(),
        detail: format!(
            "{what}: {}",
            resp.error_message().unwrap_or_default()
        ),
    })
}

#[async_trait]
impl WafApi for EdgecastClient {
    async fn get_waf_rule(
        &self,
        account_number: &str,
        kind: WafRuleKind,
        id: &str,
    ) -> Result<Value> {
        self.call(
            ApiRequest::get(SERVICE, rule_path(account_number, kind, Some(id)))
                .context(format!("{kind} {id}")),
        )
        .await
    }

    async fn add_waf_rule(
        &self,
        account_number: &str,
        kind: WafRuleKind,
        rule: &Value,
    ) -> Result<String> {
        let resp: WafResponse = self
            .call(
                ApiRequest::post(SERVICE, rule_path(account_number, kind, None))
                    .body(rule.clone())
                    .context(kind.label()),
            )
            .await?;
        let resp = check_response(resp, &format!("create {kind}"))?;
        resp.id.ok_or_else(|| ApiError::ParseError {
            service: SERVICE.to_string(),
            detail: format!("create {kind} response has no id"),
        })
    }

    async fn update_waf_rule(
        &self,
        account_number: &str,
        kind: WafRuleKind,
        id: &str,
        rule: &Value,
    ) -> Result<WafResponse> {
        let resp: WafResponse = self
            .call(
                ApiRequest::put(SERVICE, rule_path(account_number, kind, Some(id)))
                    .body(rule.clone())
                    .context(format!("{kind} {id}")),
            )
            .await?;
        check_response(resp, &format!("update {kind} {id}"))
    }

    async fn delete_waf_rule(
        &self,
        account_number: &str,
        kind: WafRuleKind,
        id: &str,
    ) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, rule_path(account_number, kind, Some(id)))
                .context(format!("{kind} {id}")),
        )
        .await
    }

    async fn get_waf_scopes(&self, account_number: &str) -> Result<Value> {
        self.call(
            ApiRequest::get(SERVICE, waf_path(account_number, "/scopes"))
                .context(format!("scopes of {account_number}")),
        )
        .await
    }

    async fn update_waf_scopes(&self, account_number: &str, scopes: &Value) -> Result<WafResponse> {
        let resp: WafResponse = self
            .call(
                ApiRequest::post(SERVICE, waf_path(account_number, "/scopes"))
                    .body(scopes.clone())
                    .context(format!("scopes of {account_number}")),
            )
            .await?;
        check_response(resp, "update scopes")
    }
}
