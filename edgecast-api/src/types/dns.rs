//! DNS route models: zones, records, route groups, master server groups,
//! TSIG keys and secondary zone groups.
//!
//! Field names follow the legacy API's PascalCase JSON. Every struct
//! tolerates missing fields (`#[serde(default)]`) because the API omits
//! zero values and server-assigned ids on some responses.

use serde::{Deserialize, Serialize};

// ============ Records ============

/// A single DNS record inside a zone or a route group.
///
/// `name` is the natural key used when reconciling a declared zone against
/// the stored one; `record_id`/`fixed_record_id` are assigned by the API. A
/// record with `record_id == 0` has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DnsRecord {
    pub record_id: i64,
    pub fixed_record_id: i64,
    pub fixed_group_id: i64,
    pub group_id: i64,
    /// Soft-delete marker. The zone update endpoint only removes a record
    /// when it is sent back with this flag set.
    pub is_deleted: bool,
    pub name: String,
    #[serde(rename = "TTL")]
    pub ttl: i32,
    pub rdata: String,
    pub verify_id: i64,
    pub weight: i32,
    #[serde(rename = "RecordTypeID")]
    pub record_type_id: i32,
    pub record_type_name: String,
}

impl DnsRecord {
    /// Builds a not-yet-created record.
    pub fn new(name: impl Into<String>, ttl: i32, rdata: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl,
            rdata: rdata.into(),
            ..Self::default()
        }
    }
}

/// Record types carried by a route zone, one collection each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Soa,
    Spf,
    Srv,
    Txt,
    Dnskey,
    Rrsig,
    Ds,
    Nsec,
    Nsec3,
    Nsec3param,
    Dlv,
    Caa,
}

impl RecordType {
    /// Every record type, in the order the API lists them.
    pub const ALL: [Self; 18] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Mx,
        Self::Ns,
        Self::Ptr,
        Self::Soa,
        Self::Spf,
        Self::Srv,
        Self::Txt,
        Self::Dnskey,
        Self::Rrsig,
        Self::Ds,
        Self::Nsec,
        Self::Nsec3,
        Self::Nsec3param,
        Self::Dlv,
        Self::Caa,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Soa => "SOA",
            Self::Spf => "SPF",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Dnskey => "DNSKEY",
            Self::Rrsig => "RRSIG",
            Self::Ds => "DS",
            Self::Nsec => "NSEC",
            Self::Nsec3 => "NSEC3",
            Self::Nsec3param => "NSEC3PARAM",
            Self::Dlv => "DLV",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-type record collections of a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", default)]
pub struct ZoneRecords {
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub a: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub aaaa: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub cname: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub mx: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub ns: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub ptr: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub soa: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub spf: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub srv: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub txt: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub dnskey: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub rrsig: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub ds: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub nsec: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub nsec3: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub nsec3param: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub dlv: Vec<DnsRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub caa: Vec<DnsRecord>,
}

impl ZoneRecords {
    pub fn get(&self, record_type: RecordType) -> &Vec<DnsRecord> {
        match record_type {
            RecordType::A => &self.a,
            RecordType::Aaaa => &self.aaaa,
            RecordType::Cname => &self.cname,
            RecordType::Mx => &self.mx,
            RecordType::Ns => &self.ns,
            RecordType::Ptr => &self.ptr,
            RecordType::Soa => &self.soa,
            RecordType::Spf => &self.spf,
            RecordType::Srv => &self.srv,
            RecordType::Txt => &self.txt,
            RecordType::Dnskey => &self.dnskey,
            RecordType::Rrsig => &self.rrsig,
            RecordType::Ds => &self.ds,
            RecordType::Nsec => &self.nsec,
            RecordType::Nsec3 => &self.nsec3,
            RecordType::Nsec3param => &self.nsec3param,
            RecordType::Dlv => &self.dlv,
            RecordType::Caa => &self.caa,
        }
    }

    pub fn get_mut(&mut self, record_type: RecordType) -> &mut Vec<DnsRecord> {
        match record_type {
            RecordType::A => &mut self.a,
            RecordType::Aaaa => &mut self.aaaa,
            RecordType::Cname => &mut self.cname,
            RecordType::Mx => &mut self.mx,
            RecordType::Ns => &mut self.ns,
            RecordType::Ptr => &mut self.ptr,
            RecordType::Soa => &mut self.soa,
            RecordType::Spf => &mut self.spf,
            RecordType::Srv => &mut self.srv,
            RecordType::Txt => &mut self.txt,
            RecordType::Dnskey => &mut self.dnskey,
            RecordType::Rrsig => &mut self.rrsig,
            RecordType::Ds => &mut self.ds,
            RecordType::Nsec => &mut self.nsec,
            RecordType::Nsec3 => &mut self.nsec3,
            RecordType::Nsec3param => &mut self.nsec3param,
            RecordType::Dlv => &mut self.dlv,
            RecordType::Caa => &mut self.caa,
        }
    }

    /// Total number of records across all types, including soft-deleted ones.
    pub fn len(&self) -> usize {
        RecordType::ALL.iter().map(|t| self.get(*t).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============ Zones ============

/// Zone status as sent by the API (`1` active, `2` inactive).
pub const ZONE_STATUS_ACTIVE: i32 = 1;
pub const ZONE_STATUS_INACTIVE: i32 = 2;

/// Zone type for a primary zone hosted by the route service.
pub const ZONE_TYPE_PRIMARY: i32 = 1;

/// A route (primary) zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Zone {
    /// Stable id; this is what the provider stores as the resource id.
    pub fixed_zone_id: i64,
    /// Version id, changes on every update.
    pub zone_id: i64,
    pub domain_name: String,
    pub status: i32,
    pub zone_type: i32,
    pub is_customer_owned: bool,
    pub comment: String,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub records: ZoneRecords,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub groups: Vec<DnsRouteGroup>,
}

// ============ Route groups ============

/// What a route group is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum GroupType {
    #[default]
    Cname,
    SubDomain,
    Zone,
}

impl GroupType {
    pub fn id(self) -> i32 {
        match self {
            Self::Cname => 1,
            Self::SubDomain => 2,
            Self::Zone => 3,
        }
    }

    /// Lower-case name used in configuration (`cname`, `subdomain`, `zone`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cname => "cname",
            Self::SubDomain => "subdomain",
            Self::Zone => "zone",
        }
    }
}

impl TryFrom<i32> for GroupType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Cname),
            2 => Ok(Self::SubDomain),
            3 => Ok(Self::Zone),
            other => Err(format!("unknown group type id {other}")),
        }
    }
}

impl From<GroupType> for i32 {
    fn from(value: GroupType) -> Self {
        value.id()
    }
}

impl std::str::FromStr for GroupType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cname" => Ok(Self::Cname),
            "subdomain" => Ok(Self::SubDomain),
            "zone" => Ok(Self::Zone),
            other => Err(format!("unknown group type '{other}'")),
        }
    }
}

/// How traffic is spread across a route group's members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum GroupProductType {
    LoadBalancing,
    Failover,
    #[default]
    NoGroup,
}

impl GroupProductType {
    pub fn id(self) -> i32 {
        match self {
            Self::LoadBalancing => 1,
            Self::Failover => 2,
            Self::NoGroup => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoadBalancing => "loadbalancing",
            Self::Failover => "failover",
            Self::NoGroup => "nogroup",
        }
    }
}

impl TryFrom<i32> for GroupProductType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::LoadBalancing),
            2 => Ok(Self::Failover),
            3 => Ok(Self::NoGroup),
            other => Err(format!("unknown group product type id {other}")),
        }
    }
}

impl From<GroupProductType> for i32 {
    fn from(value: GroupProductType) -> Self {
        value.id()
    }
}

impl std::str::FromStr for GroupProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "loadbalancing" => Ok(Self::LoadBalancing),
            "failover" => Ok(Self::Failover),
            "nogroup" => Ok(Self::NoGroup),
            other => Err(format!("unknown group product type '{other}'")),
        }
    }
}

/// Health check attached to one member of a failover or load-balancing group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HealthCheck {
    pub id: i64,
    pub fixed_id: i64,
    pub check_interval: i32,
    pub check_type_id: i32,
    pub content_verification: String,
    pub email_notification_address: String,
    pub failed_check_threshold: i32,
    #[serde(rename = "HTTPMethodId")]
    pub http_method_id: i32,
    pub record_id: i64,
    pub fixed_record_id: i64,
    pub group_id: i64,
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    #[serde(rename = "IPVersion")]
    pub ip_version: i32,
    pub port_number: i32,
    pub reintegration_method_id: i32,
    pub status: i32,
    pub status_name: String,
    #[serde(rename = "TimeOut")]
    pub timeout: i32,
    pub uri: String,
}

/// One member of a route group: a record, its optional health check and weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DnsRouteGroupRecord {
    pub record: DnsRecord,
    pub health_check: Option<HealthCheck>,
    pub weight: i32,
}

/// Members of a route group, by record type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", default)]
pub struct GroupComposition {
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub a: Vec<DnsRouteGroupRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub aaaa: Vec<DnsRouteGroupRecord>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub cname: Vec<DnsRouteGroupRecord>,
}

impl GroupComposition {
    /// Iterate over every member regardless of record type.
    pub fn iter(&self) -> impl Iterator<Item = &DnsRouteGroupRecord> {
        self.a.iter().chain(self.aaaa.iter()).chain(self.cname.iter())
    }

    /// Mutably iterate over every member regardless of record type.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DnsRouteGroupRecord> {
        self.a
            .iter_mut()
            .chain(self.aaaa.iter_mut())
            .chain(self.cname.iter_mut())
    }

    pub fn len(&self) -> usize {
        self.a.len() + self.aaaa.len() + self.cname.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A load-balancing or failover route group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DnsRouteGroup {
    pub group_id: i64,
    /// Stable id, used to pair declared and stored groups.
    pub fixed_group_id: i64,
    pub zone_id: i64,
    pub fixed_zone_id: i64,
    pub name: String,
    #[serde(rename = "GroupTypeId")]
    pub group_type: GroupType,
    #[serde(rename = "GroupProductTypeId")]
    pub group_product_type: GroupProductType,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub group_composition: GroupComposition,
}

// ============ Master server groups ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MasterServer {
    pub id: i64,
    pub name: String,
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
}

/// A named set of master name servers that secondary zones transfer from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MasterServerGroup {
    #[serde(rename = "MasterGroupId")]
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub masters: Vec<MasterServer>,
}

// ============ TSIG ============

/// TSIG signing algorithms accepted by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TsigAlgorithm {
    HmacMd5,
    HmacSha1,
    #[default]
    HmacSha256,
    HmacSha384,
    HmacSha224,
    HmacSha512,
}

impl TsigAlgorithm {
    pub fn id(self) -> i32 {
        match self {
            Self::HmacMd5 => 1,
            Self::HmacSha1 => 2,
            Self::HmacSha256 => 3,
            Self::HmacSha384 => 4,
            Self::HmacSha224 => 5,
            Self::HmacSha512 => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::HmacMd5 => "HMAC-MD5",
            Self::HmacSha1 => "HMAC-SHA1",
            Self::HmacSha256 => "HMAC-SHA256",
            Self::HmacSha384 => "HMAC-SHA384",
            Self::HmacSha224 => "HMAC-SHA224",
            Self::HmacSha512 => "HMAC-SHA512",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::HmacMd5,
            Self::HmacSha1,
            Self::HmacSha256,
            Self::HmacSha384,
            Self::HmacSha224,
            Self::HmacSha512,
        ]
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(name))
    }
}

impl TryFrom<i32> for TsigAlgorithm {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::HmacMd5),
            2 => Ok(Self::HmacSha1),
            3 => Ok(Self::HmacSha256),
            4 => Ok(Self::HmacSha384),
            5 => Ok(Self::HmacSha224),
            6 => Ok(Self::HmacSha512),
            other => Err(format!("unknown TSIG algorithm id {other}")),
        }
    }
}

impl From<TsigAlgorithm> for i32 {
    fn from(value: TsigAlgorithm) -> Self {
        value.id()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tsig {
    pub id: i64,
    pub alias: String,
    pub key_name: String,
    pub key_value: String,
    #[serde(rename = "AlgorithmId")]
    pub algorithm: TsigAlgorithm,
    pub algorithm_name: String,
}

// ============ Secondary zone groups ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecondaryZone {
    pub zone_id: i64,
    pub fixed_zone_id: i64,
    pub domain_name: String,
    pub status: i32,
    pub zone_type: i32,
    pub comment: String,
}

/// Reference to an object by id only, as the composition payloads expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IdRef {
    pub id: i64,
}

/// Pairs a master server with the TSIG key used to authenticate transfers from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MasterServerTsigPair {
    pub master_server: IdRef,
    #[serde(rename = "TSIG")]
    pub tsig: IdRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ZoneComposition {
    pub master_group_id: i64,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub master_server_tsigs: Vec<MasterServerTsigPair>,
    #[serde(deserialize_with = "crate::utils::nullable::deserialize")]
    pub zones: Vec<SecondaryZone>,
}

/// A group of secondary zones that transfer from one master server group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecondaryZoneGroup {
    pub id: i64,
    pub name: String,
    pub zone_composition: ZoneComposition,
}
