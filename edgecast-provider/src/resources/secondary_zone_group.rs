//! `ec_dns_secondaryzonegroup`: secondary zones sharing one master group.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{
    DnsApi, IdRef, MasterServerTsigPair, SecondaryZone, SecondaryZoneGroup, ZONE_STATUS_ACTIVE,
    ZoneComposition,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderResult};
use crate::resource::{
    Resource, ResourceContext, ResourceState, cleared, parse_id, read_after_write,
};

const ZONE_TYPE_SECONDARY: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryZoneAttributes {
    pub domain_name: String,
    #[serde(default = "default_status")]
    pub status: i32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub zone_id: i64,
}

fn default_status() -> i32 {
    ZONE_STATUS_ACTIVE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsigPairAttributes {
    pub master_server_id: i64,
    pub tsig_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryZoneGroupAttributes {
    #[serde(default)]
    pub account_number: String,
    pub name: String,
    pub master_group_id: i64,
    #[serde(default)]
    pub master_server_tsigs: Vec<TsigPairAttributes>,
    pub zones: Vec<SecondaryZoneAttributes>,
}

impl SecondaryZoneGroupAttributes {
    fn to_api(&self, id: i64) -> SecondaryZoneGroup {
        SecondaryZoneGroup {
            id,
            name: self.name.clone(),
            zone_composition: ZoneComposition {
                master_group_id: self.master_group_id,
                master_server_tsigs: self
                    .master_server_tsigs
                    .iter()
                    .map(|p| MasterServerTsigPair {
                        master_server: IdRef {
                            id: p.master_server_id,
                        },
                        tsig: IdRef { id: p.tsig_id },
                    })
                    .collect(),
                zones: self
                    .zones
                    .iter()
                    .map(|z| SecondaryZone {
                        zone_id: z.zone_id,
                        fixed_zone_id: z.zone_id,
                        domain_name: z.domain_name.clone(),
                        status: z.status,
                        zone_type: ZONE_TYPE_SECONDARY,
                        comment: z.comment.clone(),
                    })
                    .collect(),
            },
        }
    }

    fn from_api(account_number: &str, group: SecondaryZoneGroup) -> Self {
        let composition = group.zone_composition;
        Self {
            account_number: account_number.to_string(),
            name: group.name,
            master_group_id: composition.master_group_id,
            master_server_tsigs: composition
                .master_server_tsigs
                .into_iter()
                .map(|p| TsigPairAttributes {
                    master_server_id: p.master_server.id,
                    tsig_id: p.tsig.id,
                })
                .collect(),
            zones: composition
                .zones
                .into_iter()
                .map(|z| SecondaryZoneAttributes {
                    domain_name: z.domain_name,
                    status: z.status,
                    comment: z.comment,
                    zone_id: z.fixed_zone_id,
                })
                .collect(),
        }
    }
}

pub struct SecondaryZoneGroupResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> SecondaryZoneGroupResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

#[async_trait]
impl<A: DnsApi + 'static> Resource for SecondaryZoneGroupResource<A> {
    type Attributes = SecondaryZoneGroupAttributes;

    fn type_name(&self) -> &'static str {
        "ec_dns_secondaryzonegroup"
    }

    async fn create(
        &self,
        attrs: &SecondaryZoneGroupAttributes,
    ) -> ProviderResult<ResourceState<SecondaryZoneGroupAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let id = self
            .api
            .add_secondary_zone_group(account, &attrs.to_api(0))
            .await
            .context("AddSecondaryZoneGroup")?;
        read_after_write(self, &id.to_string(), attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &SecondaryZoneGroupAttributes,
    ) -> ProviderResult<Option<ResourceState<SecondaryZoneGroupAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;

        match self.api.get_secondary_zone_group(account, group_id).await {
            Ok(group) => Ok(Some(ResourceState::new(
                id,
                SecondaryZoneGroupAttributes::from_api(&attrs.account_number, group),
            ))),
            Err(e) => Ok(cleared(self.type_name(), id, &e)),
        }
    }

    async fn update(
        &self,
        id: &str,
        attrs: &SecondaryZoneGroupAttributes,
    ) -> ProviderResult<ResourceState<SecondaryZoneGroupAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;
        self.api
            .update_secondary_zone_group(account, &attrs.to_api(group_id))
            .await
            .context("UpdateSecondaryZoneGroup")?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &SecondaryZoneGroupAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;
        self.api
            .delete_secondary_zone_group(account, group_id)
            .await
            .context("DeleteSecondaryZoneGroup")
    }
}
