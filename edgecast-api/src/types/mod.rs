//! Request and response models, one module per API area.

mod cname;
mod customer;
mod dns;
mod origin;
mod rules_engine;
mod waf;

pub use cname::{CnameCreated, EdgeCname, ORIGIN_TYPE_ADN, ORIGIN_TYPE_CUSTOMER};
pub(crate) use customer::StatusToggle;
pub use customer::{
    AccessModule, Customer, CustomerCreated, CustomerService, CustomerUser, CustomerUserCreated,
    DeliveryRegion,
};
pub use dns::{
    DnsRecord, DnsRouteGroup, DnsRouteGroupRecord, GroupComposition, GroupProductType, GroupType,
    HealthCheck, IdRef, MasterServer, MasterServerGroup, MasterServerTsigPair, RecordType,
    SecondaryZone, SecondaryZoneGroup, Tsig, TsigAlgorithm, ZONE_STATUS_ACTIVE,
    ZONE_STATUS_INACTIVE, ZONE_TYPE_PRIMARY, Zone, ZoneComposition, ZoneRecords,
};
pub use origin::{MediaType, Origin, OriginCreated, OriginHostname, ShieldPop};
pub(crate) use rules_engine::IdsToken;
pub use rules_engine::{
    DeployRequest, DeployRequestCreated, Environment, PolicyCreated, PortalContext,
};
pub use waf::{WafError, WafResponse, WafRuleKind};
