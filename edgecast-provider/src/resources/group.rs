//! `ec_dns_group`: load-balancing and failover route groups.
//!
//! The group attribute shape is shared with the zone resource, which
//! embeds its zone-level groups.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{
    DnsApi, DnsRecord, DnsRouteGroup, DnsRouteGroupRecord, GroupComposition, GroupProductType,
    GroupType, HealthCheck, RecordType,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderError, ProviderResult};
use crate::reconcile::reconcile_groups;
use crate::resource::{
    Resource, ResourceContext, ResourceState, cleared, parse_id, read_after_write,
};
use crate::resources::parse_attr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheckAttributes {
    pub check_interval: i32,
    pub check_type_id: i32,
    pub content_verification: String,
    pub email_notification_address: String,
    pub failed_check_threshold: i32,
    pub http_method_id: i32,
    pub ip_address: String,
    pub ip_version: i32,
    pub port_number: i32,
    pub reintegration_method_id: i32,
    pub timeout: i32,
    pub uri: String,
}

impl HealthCheckAttributes {
    fn to_api(&self) -> HealthCheck {
        HealthCheck {
            check_interval: self.check_interval,
            check_type_id: self.check_type_id,
            content_verification: self.content_verification.clone(),
            email_notification_address: self.email_notification_address.clone(),
            failed_check_threshold: self.failed_check_threshold,
            http_method_id: self.http_method_id,
            ip_address: self.ip_address.clone(),
            ip_version: self.ip_version,
            port_number: self.port_number,
            reintegration_method_id: self.reintegration_method_id,
            timeout: self.timeout,
            uri: self.uri.clone(),
            ..HealthCheck::default()
        }
    }

    fn from_api(hc: &HealthCheck) -> Self {
        Self {
            check_interval: hc.check_interval,
            check_type_id: hc.check_type_id,
            content_verification: hc.content_verification.clone(),
            email_notification_address: hc.email_notification_address.clone(),
            failed_check_threshold: hc.failed_check_threshold,
            http_method_id: hc.http_method_id,
            ip_address: hc.ip_address.clone(),
            ip_version: hc.ip_version,
            port_number: hc.port_number,
            reintegration_method_id: hc.reintegration_method_id,
            timeout: hc.timeout,
            uri: hc.uri.clone(),
        }
    }
}

/// One record of a route group. Only A, AAAA and CNAME records can be members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub ttl: i32,
    pub rdata: String,
    #[serde(default)]
    pub weight: i32,
    /// Server-assigned; members are matched on it during updates.
    #[serde(default)]
    pub record_id: i64,
    #[serde(default)]
    pub health_check: Option<HealthCheckAttributes>,
}

impl GroupMember {
    fn to_api(&self) -> DnsRouteGroupRecord {
        DnsRouteGroupRecord {
            record: DnsRecord {
                record_id: self.record_id,
                weight: self.weight,
                ..DnsRecord::new(self.name.clone(), self.ttl, self.rdata.clone())
            },
            health_check: self.health_check.as_ref().map(HealthCheckAttributes::to_api),
            weight: self.weight,
        }
    }

    fn from_api(record_type: RecordType, member: &DnsRouteGroupRecord) -> Self {
        Self {
            record_type,
            name: member.record.name.clone(),
            ttl: member.record.ttl,
            rdata: member.record.rdata.clone(),
            weight: member.weight,
            record_id: member.record.record_id,
            health_check: member.health_check.as_ref().map(HealthCheckAttributes::from_api),
        }
    }
}

/// A route group as declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGroupAttributes {
    /// Fixed group id, set once the group exists.
    #[serde(default)]
    pub group_id: i64,
    pub name: String,
    /// `cname`, `subdomain` or `zone`.
    pub group_type: String,
    /// `failover`, `loadbalancing` or `nogroup`.
    pub group_product_type: String,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

impl RouteGroupAttributes {
    pub(crate) fn group_type(&self) -> ProviderResult<GroupType> {
        parse_attr("group_type", &self.group_type)
    }

    pub(crate) fn to_api(&self) -> ProviderResult<DnsRouteGroup> {
        let mut composition = GroupComposition::default();
        for member in &self.members {
            let target = match member.record_type {
                RecordType::A => &mut composition.a,
                RecordType::Aaaa => &mut composition.aaaa,
                RecordType::Cname => &mut composition.cname,
                other => {
                    return Err(ProviderError::Validation(format!(
                        "group '{}': {other} records cannot be group members",
                        self.name
                    )));
                }
            };
            target.push(member.to_api());
        }

        Ok(DnsRouteGroup {
            group_id: self.group_id,
            fixed_group_id: self.group_id,
            name: self.name.clone(),
            group_type: self.group_type()?,
            group_product_type: parse_attr::<GroupProductType>(
                "group_product_type",
                &self.group_product_type,
            )?,
            group_composition: composition,
            ..DnsRouteGroup::default()
        })
    }

    pub(crate) fn from_api(group: &DnsRouteGroup) -> Self {
        let composition = &group.group_composition;
        let members = [
            (RecordType::A, &composition.a),
            (RecordType::Aaaa, &composition.aaaa),
            (RecordType::Cname, &composition.cname),
        ]
        .into_iter()
        .flat_map(|(record_type, members)| {
            members
                .iter()
                .filter(|m| !m.record.is_deleted)
                .map(move |m| GroupMember::from_api(record_type, m))
        })
        .collect();

        Self {
            group_id: group.fixed_group_id,
            name: group.name.clone(),
            group_type: group.group_type.as_str().to_string(),
            group_product_type: group.group_product_type.as_str().to_string(),
            members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAttributes {
    #[serde(default)]
    pub account_number: String,
    #[serde(flatten)]
    pub group: RouteGroupAttributes,
}

pub struct GroupResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> GroupResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

#[async_trait]
impl<A: DnsApi + 'static> Resource for GroupResource<A> {
    type Attributes = GroupAttributes;

    fn type_name(&self) -> &'static str {
        "ec_dns_group"
    }

    async fn create(
        &self,
        attrs: &GroupAttributes,
    ) -> ProviderResult<ResourceState<GroupAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let mut group = attrs.group.to_api()?;
        group.group_id = 0;
        group.fixed_group_id = 0;

        let id = self.api.add_group(account, &group).await.context("AddGroup")?;
        log::info!("[dns] created route group '{}' ({id})", group.name);
        read_after_write(self, &id.to_string(), attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &GroupAttributes,
    ) -> ProviderResult<Option<ResourceState<GroupAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;
        let group_type = attrs.group.group_type()?;

        match self.api.get_group(account, group_id, group_type).await {
            Ok(group) => Ok(Some(ResourceState::new(
                id,
                GroupAttributes {
                    account_number: attrs.account_number.clone(),
                    group: RouteGroupAttributes::from_api(&group),
                },
            ))),
            Err(e) => Ok(cleared(self.type_name(), id, &e)),
        }
    }

    async fn update(
        &self,
        id: &str,
        attrs: &GroupAttributes,
    ) -> ProviderResult<ResourceState<GroupAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;
        let mut local = attrs.group.to_api()?;
        local.fixed_group_id = group_id;

        let remote = self
            .api
            .get_group(account, group_id, local.group_type)
            .await
            .context("GetGroup")?;

        let mut reconciled = reconcile_groups(std::slice::from_ref(&local), vec![remote]);
        let group = reconciled
            .iter_mut()
            .find(|g| g.fixed_group_id == group_id)
            .ok_or_else(|| {
                ProviderError::Validation(format!(
                    "ec_dns_group: stored group does not carry id {group_id}"
                ))
            })?;
        group.name.clone_from(&local.name);
        group.group_product_type = local.group_product_type;

        self.api
            .update_group(account, group)
            .await
            .context("UpdateGroup")?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &GroupAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;
        self.api
            .delete_group(account, group_id, attrs.group.group_type()?)
            .await
            .context("DeleteGroup")
    }
}
