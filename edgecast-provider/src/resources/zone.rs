//! `ec_dns_zone`: primary route zones with their records and zone-level
//! route groups.
//!
//! Updates never send the declared zone directly. The stored zone is
//! fetched, reconciled against the declaration and sent back in full.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{
    DnsApi, DnsRecord, RecordType, ZONE_STATUS_ACTIVE, ZONE_TYPE_PRIMARY, Zone, ZoneRecords,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderResult};
use crate::reconcile::reconcile_zone;
use crate::resource::{
    Resource, ResourceContext, ResourceState, cleared, parse_id, read_after_write,
};
use crate::resources::RouteGroupAttributes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecordAttributes {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub ttl: i32,
    pub rdata: String,
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub record_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAttributes {
    #[serde(default)]
    pub account_number: String,
    pub domain_name: String,
    #[serde(default = "default_status")]
    pub status: i32,
    #[serde(default = "default_zone_type")]
    pub zone_type: i32,
    #[serde(default)]
    pub is_customer_owned: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub records: Vec<ZoneRecordAttributes>,
    #[serde(default)]
    pub groups: Vec<RouteGroupAttributes>,
    /// Version id of the stored zone; changes on every update.
    #[serde(default)]
    pub zone_id: i64,
}

fn default_status() -> i32 {
    ZONE_STATUS_ACTIVE
}

fn default_zone_type() -> i32 {
    ZONE_TYPE_PRIMARY
}

impl ZoneAttributes {
    /// Build the declared zone. Records carry no ids: stored ids are adopted
    /// by name during reconciliation.
    fn to_zone(&self) -> ProviderResult<Zone> {
        let mut records = ZoneRecords::default();
        for record in &self.records {
            records.get_mut(record.record_type).push(DnsRecord {
                weight: record.weight,
                ..DnsRecord::new(record.name.clone(), record.ttl, record.rdata.clone())
            });
        }

        let groups = self
            .groups
            .iter()
            .map(RouteGroupAttributes::to_api)
            .collect::<ProviderResult<Vec<_>>>()?;

        Ok(Zone {
            domain_name: self.domain_name.clone(),
            status: self.status,
            zone_type: self.zone_type,
            is_customer_owned: self.is_customer_owned,
            comment: self.comment.clone(),
            records,
            groups,
            ..Zone::default()
        })
    }

    fn from_zone(account_number: &str, zone: &Zone) -> Self {
        let records = RecordType::ALL
            .into_iter()
            .flat_map(|record_type| {
                zone.records
                    .get(record_type)
                    .iter()
                    .filter(|r| !r.is_deleted)
                    .map(move |r| ZoneRecordAttributes {
                        record_type,
                        name: r.name.clone(),
                        ttl: r.ttl,
                        rdata: r.rdata.clone(),
                        weight: r.weight,
                        record_id: r.record_id,
                    })
            })
            .collect();

        Self {
            account_number: account_number.to_string(),
            domain_name: zone.domain_name.clone(),
            status: zone.status,
            zone_type: zone.zone_type,
            is_customer_owned: zone.is_customer_owned,
            comment: zone.comment.clone(),
            records,
            groups: zone.groups.iter().map(RouteGroupAttributes::from_api).collect(),
            zone_id: zone.zone_id,
        }
    }
}

pub struct ZoneResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> ZoneResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

#[async_trait]
impl<A: DnsApi + 'static> Resource for ZoneResource<A> {
    type Attributes = ZoneAttributes;

    fn type_name(&self) -> &'static str {
        "ec_dns_zone"
    }

    async fn create(
        &self,
        attrs: &ZoneAttributes,
    ) -> ProviderResult<ResourceState<ZoneAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let zone = attrs.to_zone()?;

        let id = self.api.add_zone(account, &zone).await.context("AddZone")?;
        log::info!("[dns] created zone {} ({id})", attrs.domain_name);
        read_after_write(self, &id.to_string(), attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &ZoneAttributes,
    ) -> ProviderResult<Option<ResourceState<ZoneAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let zone_id = parse_id(self.type_name(), id)?;

        match self.api.get_zone(account, zone_id).await {
            Ok(zone) => Ok(Some(ResourceState::new(
                id,
                ZoneAttributes::from_zone(&attrs.account_number, &zone),
            ))),
            Err(e) => Ok(cleared(self.type_name(), id, &e)),
        }
    }

    async fn update(
        &self,
        id: &str,
        attrs: &ZoneAttributes,
    ) -> ProviderResult<ResourceState<ZoneAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let zone_id = parse_id(self.type_name(), id)?;
        let local = attrs.to_zone()?;

        let remote = self
            .api
            .get_zone(account, zone_id)
            .await
            .context("GetZone")?;
        let reconciled = reconcile_zone(&local, remote);

        log::debug!(
            "[dns] updating zone {zone_id}: {} records, {} groups",
            reconciled.records.len(),
            reconciled.groups.len()
        );
        self.api
            .update_zone(account, &reconciled)
            .await
            .context("UpdateZone")?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &ZoneAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        let zone_id = parse_id(self.type_name(), id)?;
        self.api
            .delete_zone(account, zone_id)
            .await
            .context("DeleteZone")
    }
}
