//! Edge CNAME, origin and customer endpoints against a mock server

mod common;

use common::{ACCOUNT, TestContext, mcc};
use edgecast_api::{
    ApiError, Customer, CustomerApi, CustomerUser, EdgeCname, EdgeCnameApi, MediaType, Origin,
    OriginApi, OriginHostname,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn add_cname_reads_cname_id() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(mcc("/cnames")))
        .and(body_partial_json(json!({
            "Name": "cdn.example.com",
            "DirPath": "/images",
            "MediaTypeId": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "CnameId": 801 })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let cname = EdgeCname {
        name: "cdn.example.com".into(),
        dir_path: "/images".into(),
        media_type_id: MediaType::HttpLarge.id(),
        origin_id: 12,
        origin_type: 3,
        ..EdgeCname::default()
    };
    let id = require_ok!(ctx.client.add_cname(ACCOUNT, &cname).await);
    assert_eq!(id, 801);
}

#[tokio::test]
async fn cname_validation_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path(mcc("/cnames/801")))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "Message": "Invalid DirPath" })),
        )
        .mount(&ctx.server)
        .await;

    let cname = EdgeCname {
        id: 801,
        ..EdgeCname::default()
    };
    let err = ctx.client.update_cname(ACCOUNT, &cname).await.unwrap_err();
    assert!(
        matches!(&err, ApiError::InvalidParameter { detail, .. } if detail == "Invalid DirPath"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn origin_uses_media_type_path() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(mcc("/origins/adn")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "CustomerOriginId": 3030 })),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path(mcc("/origins/adn/3030")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Id": 3030,
            "DirectoryName": "api",
            "HostHeader": "api.example.com:443",
            "HttpsHostnames": [{ "Name": "https://origin.example.com:443", "IsPrimary": 1 }],
            "HttpsLoadBalancing": "RR",
            "ShieldPOPs": [{ "POPCode": "OXR", "Name": "Oxford" }]
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(mcc("/origins/3030")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let origin = Origin {
        directory_name: "api".into(),
        host_header: "api.example.com:443".into(),
        https_hostnames: vec![OriginHostname {
            name: "https://origin.example.com:443".into(),
            is_primary: 1,
            ordinal: 0,
        }],
        https_load_balancing: "RR".into(),
        ..Origin::default()
    };
    let id = require_ok!(ctx.client.add_origin(ACCOUNT, MediaType::Adn, &origin).await);
    let stored = require_ok!(ctx.client.get_origin(ACCOUNT, MediaType::Adn, id).await);
    assert_eq!(stored.shield_pops[0].pop_code, "OXR");
    assert_eq!(stored.https_hostnames.len(), 1);
    require_ok!(ctx.client.delete_origin(ACCOUNT, id).await);
}

#[tokio::test]
async fn add_customer_uses_partner_ids() {
    let ctx = TestContext::with_config(|config| {
        config.partner_id = Some(900);
        config.partner_user_id = Some(77);
    })
    .await;
    Mock::given(method("POST"))
        .and(path("/v2/pcc/customers"))
        .and(query_param("parentid", "900"))
        .and(body_partial_json(json!({ "CompanyName": "Acme", "PartnerUserId": 77 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "AccountNumber": "C0FFEE" })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let customer = Customer {
        company_name: "Acme".into(),
        service_level_code: "STND".into(),
        status: 1,
        ..Customer::default()
    };
    let account = require_ok!(ctx.client.add_customer(&customer).await);
    assert_eq!(account, "C0FFEE");
}

#[tokio::test]
async fn customer_services_toggle() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path("/v2/pcc/customers/C0FFEE/services"))
        .and(body_json(json!({ "Id": [1, 9, 15], "Status": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/pcc/customers/C0FFEE/deliveryregions"))
        .and(body_json(json!({ "Id": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    require_ok!(
        ctx.client
            .set_customer_services("C0FFEE", &[1, 9, 15], 1)
            .await
    );
    require_ok!(ctx.client.set_delivery_region("C0FFEE", 1).await);
}

#[tokio::test]
async fn customer_user_scoped_by_customer_id() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/v2/pcc/customers/users"))
        .and(query_param("customerid", "C0FFEE"))
        .and(body_partial_json(json!({ "Email": "ops@example.com", "IsAdmin": 1 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "CustomerUserId": 4321 })),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let user = CustomerUser {
        email: "ops@example.com".into(),
        first_name: "Ops".into(),
        last_name: "Team".into(),
        is_admin: 1,
        ..CustomerUser::default()
    };
    let id = require_ok!(ctx.client.add_customer_user("C0FFEE", &user).await);
    assert_eq!(id, 4321);
}
