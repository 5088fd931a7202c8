//! Rules engine (IDS-authenticated) and WAF endpoints against a mock server

mod common;

use common::{ACCOUNT, TestContext, mcc};
use edgecast_api::{
    ApiError, DeployRequest, Environment, PortalContext, RulesEngineApi, WafApi, WafRuleKind,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_token(ctx: &TestContext) {
    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ids-token",
            "expires_in": 300,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
}

#[tokio::test]
async fn ids_token_is_fetched_once() {
    let ctx = TestContext::with_ids().await;
    mount_token(&ctx).await;
    Mock::given(method("GET"))
        .and(path("/rules-engine/v1.1/policies/100"))
        .and(header("Authorization", "Bearer ids-token"))
        .and(header("Portal-Account-Number", ACCOUNT))
        .and(header("Portal-Customer-User-Id", "55"))
        .and(header("Portal-Portaltype-Id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 100,
            "name": "policy",
            "rules": []
        })))
        .expect(2)
        .mount(&ctx.server)
        .await;

    let portal = PortalContext::new(ACCOUNT, "55", "1");
    let first = require_ok!(ctx.client.get_policy(&portal, "100").await);
    let second = require_ok!(ctx.client.get_policy(&portal, "100").await);
    assert_eq!(first, second);
    assert_eq!(first["name"], "policy");
}

#[tokio::test]
async fn add_policy_then_deploy() {
    let ctx = TestContext::with_ids().await;
    mount_token(&ctx).await;
    Mock::given(method("POST"))
        .and(path("/rules-engine/v1.1/policies"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "2001", "state": "locked" })),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rules-engine/v1.1/deploy-requests"))
        .and(body_json(json!({
            "environment": "staging",
            "message": "deploy",
            "policy_id": "2001"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 3001, "state": "pending" })),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let portal = PortalContext::new(ACCOUNT, "55", "1");
    let policy = json!({ "name": "p", "platform": "http_large", "state": "locked", "rules": [] });
    let id = require_ok!(ctx.client.add_policy(&portal, &policy).await);
    let deployed = require_ok!(
        ctx.client
            .submit_deploy_request(
                &portal,
                &DeployRequest {
                    environment: Environment::Staging,
                    message: "deploy".into(),
                    policy_id: id,
                },
            )
            .await
    );
    assert_eq!(deployed.id, "3001");
}

#[tokio::test]
async fn bad_ids_credentials() {
    let ctx = TestContext::with_ids().await;
    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client"
        })))
        .mount(&ctx.server)
        .await;

    let portal = PortalContext::new(ACCOUNT, "55", "1");
    let err = ctx.client.get_policy(&portal, "1").await.unwrap_err();
    assert_eq!(err.service(), "ids");
    assert!(
        matches!(&err, ApiError::InvalidParameter { param, .. } if param == "invalid_client"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn waf_rule_create_returns_id() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(mcc("/waf/v1.0/acl")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "AcL1",
            "success": true,
            "status": "success"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let rule = json!({ "name": "block-bad", "customer_id": ACCOUNT });
    let id = require_ok!(
        ctx.client
            .add_waf_rule(ACCOUNT, WafRuleKind::AccessRule, &rule)
            .await
    );
    assert_eq!(id, "AcL1");
}

#[tokio::test]
async fn waf_update_reports_envelope_errors() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path(mcc("/waf/v1.0/limit/R1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errors": [{ "message": "duration_sec must be 1, 5 or 10" }]
        })))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .update_waf_rule(ACCOUNT, WafRuleKind::RateRule, "R1", &json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("duration_sec"), "unexpected: {err}");
}

#[tokio::test]
async fn waf_scopes_are_posted_whole() {
    let ctx = TestContext::new().await;
    let scopes = json!({ "customer_id": ACCOUNT, "scopes": [] });
    Mock::given(method("POST"))
        .and(path(mcc("/waf/v1.0/scopes")))
        .and(body_json(scopes.clone()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "status": "success" })),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = require_ok!(ctx.client.update_waf_scopes(ACCOUNT, &scopes).await);
    assert!(resp.success);
}
