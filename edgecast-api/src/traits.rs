use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::types::{
    AccessModule, Customer, CustomerService, CustomerUser, DeliveryRegion, DeployRequest,
    DeployRequestCreated, DnsRouteGroup, EdgeCname, GroupType, MasterServerGroup, MediaType,
    Origin, PortalContext, SecondaryZoneGroup, Tsig, WafResponse, WafRuleKind, Zone,
};

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status of the failed call.
    pub status: u16,
    /// Vendor error code, when the body carried one.
    pub code: Option<String>,
    /// Vendor error message, or the raw body.
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Error context (internal use)
///
/// Names the object a call was addressing so a 404 can say which one was missing.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Description such as `zone 1234` or `cname 77`.
    pub resource: Option<String>,
}

impl ErrorContext {
    pub fn resource(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
        }
    }
}

/// Maps a non-2xx response onto [`ApiError`] (internal use)
pub(crate) trait ApiErrorMapper {
    /// Map a raw API error to the unified error type.
    fn map_error(&self, service: &str, raw: RawApiError, context: ErrorContext) -> ApiError;

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, service: &str, raw: RawApiError) -> ApiError {
        ApiError::Unknown {
            service: service.to_string(),
            raw_code: raw.code.or_else(|| Some(raw.status.to_string())),
            raw_message: raw.message,
        }
    }
}

/// DNS route service: zones, groups, master server groups, TSIG keys and
/// secondary zone groups.
///
/// Every call is scoped to the customer account passed in `account_number`.
#[async_trait]
pub trait DnsApi: Send + Sync {
    async fn get_zone(&self, account_number: &str, zone_id: i64) -> Result<Zone>;

    /// Creates a zone and returns its fixed zone id.
    async fn add_zone(&self, account_number: &str, zone: &Zone) -> Result<i64>;

    /// Replaces the stored zone with `zone`. Records the caller wants removed
    /// must be present with `is_deleted` set.
    async fn update_zone(&self, account_number: &str, zone: &Zone) -> Result<()>;

    async fn delete_zone(&self, account_number: &str, zone_id: i64) -> Result<()>;

    async fn get_group(
        &self,
        account_number: &str,
        group_id: i64,
        group_type: GroupType,
    ) -> Result<DnsRouteGroup>;

    /// Creates a route group and returns its fixed group id.
    async fn add_group(&self, account_number: &str, group: &DnsRouteGroup) -> Result<i64>;

    async fn update_group(&self, account_number: &str, group: &DnsRouteGroup) -> Result<()>;

    async fn delete_group(
        &self,
        account_number: &str,
        group_id: i64,
        group_type: GroupType,
    ) -> Result<()>;

    async fn get_master_server_group(
        &self,
        account_number: &str,
        id: i64,
    ) -> Result<MasterServerGroup>;

    async fn add_master_server_group(
        &self,
        account_number: &str,
        group: &MasterServerGroup,
    ) -> Result<i64>;

    async fn update_master_server_group(
        &self,
        account_number: &str,
        group: &MasterServerGroup,
    ) -> Result<()>;

    async fn delete_master_server_group(&self, account_number: &str, id: i64) -> Result<()>;

    async fn get_tsig(&self, account_number: &str, id: i64) -> Result<Tsig>;

    async fn add_tsig(&self, account_number: &str, tsig: &Tsig) -> Result<i64>;

    async fn update_tsig(&self, account_number: &str, tsig: &Tsig) -> Result<()>;

    async fn delete_tsig(&self, account_number: &str, id: i64) -> Result<()>;

    async fn get_secondary_zone_group(
        &self,
        account_number: &str,
        id: i64,
    ) -> Result<SecondaryZoneGroup>;

    async fn add_secondary_zone_group(
        &self,
        account_number: &str,
        group: &SecondaryZoneGroup,
    ) -> Result<i64>;

    async fn update_secondary_zone_group(
        &self,
        account_number: &str,
        group: &SecondaryZoneGroup,
    ) -> Result<()>;

    async fn delete_secondary_zone_group(&self, account_number: &str, id: i64) -> Result<()>;
}

/// Edge CNAME configuration.
#[async_trait]
pub trait EdgeCnameApi: Send + Sync {
    async fn get_cname(&self, account_number: &str, id: i64) -> Result<EdgeCname>;

    /// Creates an edge CNAME and returns its id.
    async fn add_cname(&self, account_number: &str, cname: &EdgeCname) -> Result<i64>;

    async fn update_cname(&self, account_number: &str, cname: &EdgeCname) -> Result<()>;

    async fn delete_cname(&self, account_number: &str, id: i64) -> Result<()>;
}

/// Customer origin configuration, per delivery platform.
#[async_trait]
pub trait OriginApi: Send + Sync {
    async fn get_origin(&self, account_number: &str, media: MediaType, id: i64) -> Result<Origin>;

    /// Creates an origin and returns its id.
    async fn add_origin(&self, account_number: &str, media: MediaType, origin: &Origin)
    -> Result<i64>;

    async fn update_origin(
        &self,
        account_number: &str,
        media: MediaType,
        origin: &Origin,
    ) -> Result<()>;

    async fn delete_origin(&self, account_number: &str, id: i64) -> Result<()>;
}

/// Partner-level customer account management.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn get_customer(&self, account_number: &str) -> Result<Customer>;

    /// Creates a customer under the configured partner and returns its account number.
    async fn add_customer(&self, customer: &Customer) -> Result<String>;

    async fn update_customer(&self, account_number: &str, customer: &Customer) -> Result<()>;

    async fn delete_customer(&self, account_number: &str) -> Result<()>;

    async fn get_customer_services(&self, account_number: &str) -> Result<Vec<CustomerService>>;

    /// Enables (`status = 1`) or disables (`status = 0`) the listed services.
    async fn set_customer_services(
        &self,
        account_number: &str,
        service_ids: &[i32],
        status: i32,
    ) -> Result<()>;

    async fn get_delivery_region(&self, account_number: &str) -> Result<DeliveryRegion>;

    async fn set_delivery_region(&self, account_number: &str, region_id: i32) -> Result<()>;

    async fn get_access_modules(&self, account_number: &str) -> Result<Vec<AccessModule>>;

    async fn set_access_modules(
        &self,
        account_number: &str,
        module_ids: &[i32],
        status: i32,
    ) -> Result<()>;

    async fn get_customer_user(&self, account_number: &str, user_id: i64) -> Result<CustomerUser>;

    /// Creates a user on the customer account and returns its id.
    async fn add_customer_user(&self, account_number: &str, user: &CustomerUser) -> Result<i64>;

    async fn update_customer_user(
        &self,
        account_number: &str,
        user_id: i64,
        user: &CustomerUser,
    ) -> Result<()>;

    async fn delete_customer_user(&self, account_number: &str, user_id: i64) -> Result<()>;
}

/// Rules-engine policies. Policies are opaque JSON documents.
#[async_trait]
pub trait RulesEngineApi: Send + Sync {
    async fn get_policy(&self, ctx: &PortalContext, policy_id: &str) -> Result<Value>;

    /// Submits a policy document and returns the new policy id.
    async fn add_policy(&self, ctx: &PortalContext, policy: &Value) -> Result<String>;

    async fn submit_deploy_request(
        &self,
        ctx: &PortalContext,
        request: &DeployRequest,
    ) -> Result<DeployRequestCreated>;
}

/// WAF rules and scopes. Rule bodies are opaque JSON documents.
#[async_trait]
pub trait WafApi: Send + Sync {
    async fn get_waf_rule(&self, account_number: &str, kind: WafRuleKind, id: &str)
    -> Result<Value>;

    /// Creates a rule and returns its id.
    async fn add_waf_rule(
        &self,
        account_number: &str,
        kind: WafRuleKind,
        rule: &Value,
    ) -> Result<String>;

    async fn update_waf_rule(
        &self,
        account_number: &str,
        kind: WafRuleKind,
        id: &str,
        rule: &Value,
    ) -> Result<WafResponse>;

    async fn delete_waf_rule(&self, account_number: &str, kind: WafRuleKind, id: &str)
    -> Result<()>;

    async fn get_waf_scopes(&self, account_number: &str) -> Result<Value>;

    /// Replaces the whole scope set of the account.
    async fn update_waf_scopes(&self, account_number: &str, scopes: &Value) -> Result<WafResponse>;
}

/// Every API area, for callers that need the full client behind one object.
pub trait EdgecastApi:
    DnsApi + EdgeCnameApi + OriginApi + CustomerApi + RulesEngineApi + WafApi
{
}

impl<T> EdgecastApi for T where
    T: DnsApi + EdgeCnameApi + OriginApi + CustomerApi + RulesEngineApi + WafApi
{
}
