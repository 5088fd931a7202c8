//! Resource handlers, one module per vendor object family.
//!
//! Every handler owns a shared handle to the API client and the provider's
//! [`ResourceContext`]. Handlers are generic over the API traits they need
//! so tests can run them against an in-memory API.

mod cname;
mod customer;
mod customer_user;
mod group;
mod master_server_group;
mod origin;
mod rules_engine_policy;
mod secondary_zone_group;
mod tsig;
mod waf;
mod zone;

pub use cname::{CnameAttributes, CnameResource};
pub use customer::{CustomerAttributes, CustomerResource};
pub use customer_user::{CustomerUserAttributes, CustomerUserResource};
pub use group::{
    GroupAttributes, GroupMember, GroupResource, HealthCheckAttributes, RouteGroupAttributes,
};
pub use master_server_group::{
    MasterServerAttributes, MasterServerGroupAttributes, MasterServerGroupResource,
};
pub use origin::{OriginAttributes, OriginResource};
pub use rules_engine_policy::{RulesEnginePolicyAttributes, RulesEnginePolicyResource};
pub use secondary_zone_group::{
    SecondaryZoneAttributes, SecondaryZoneGroupAttributes, SecondaryZoneGroupResource,
    TsigPairAttributes,
};
pub use tsig::{TsigAttributes, TsigResource};
pub use waf::{WafRuleAttributes, WafRuleResource, WafScopesAttributes, WafScopesResource};
pub use zone::{ZoneAttributes, ZoneRecordAttributes, ZoneResource};

use crate::error::{ProviderError, ProviderResult};

/// Parse an enum-like attribute through its `FromStr` impl.
pub(crate) fn parse_attr<T>(field: &str, value: &str) -> ProviderResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|e| ProviderError::Validation(format!("{field}: {e}")))
}
