//! `ec_dns_masterservergroup`: master name servers that secondary zones
//! transfer from.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{DnsApi, MasterServer, MasterServerGroup};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderResult};
use crate::resource::{
    Resource, ResourceContext, ResourceState, cleared, parse_id, read_after_write,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterServerAttributes {
    pub name: String,
    pub ip_address: String,
    #[serde(default)]
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterServerGroupAttributes {
    #[serde(default)]
    pub account_number: String,
    pub name: String,
    pub masters: Vec<MasterServerAttributes>,
}

impl MasterServerGroupAttributes {
    fn to_api(&self, id: i64) -> MasterServerGroup {
        MasterServerGroup {
            id,
            name: self.name.clone(),
            masters: self
                .masters
                .iter()
                .map(|m| MasterServer {
                    id: m.id,
                    name: m.name.clone(),
                    ip_address: m.ip_address.clone(),
                })
                .collect(),
        }
    }
}

pub struct MasterServerGroupResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> MasterServerGroupResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

#[async_trait]
impl<A: DnsApi + 'static> Resource for MasterServerGroupResource<A> {
    type Attributes = MasterServerGroupAttributes;

    fn type_name(&self) -> &'static str {
        "ec_dns_masterservergroup"
    }

    async fn create(
        &self,
        attrs: &MasterServerGroupAttributes,
    ) -> ProviderResult<ResourceState<MasterServerGroupAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let id = self
            .api
            .add_master_server_group(account, &attrs.to_api(0))
            .await
            .context("AddMasterServerGroup")?;
        read_after_write(self, &id.to_string(), attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &MasterServerGroupAttributes,
    ) -> ProviderResult<Option<ResourceState<MasterServerGroupAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;

        let group = match self.api.get_master_server_group(account, group_id).await {
            Ok(group) => group,
            Err(e) => return Ok(cleared(self.type_name(), id, &e)),
        };
        Ok(Some(ResourceState::new(
            id,
            MasterServerGroupAttributes {
                account_number: attrs.account_number.clone(),
                name: group.name,
                masters: group
                    .masters
                    .into_iter()
                    .map(|m| MasterServerAttributes {
                        name: m.name,
                        ip_address: m.ip_address,
                        id: m.id,
                    })
                    .collect(),
            },
        )))
    }

    async fn update(
        &self,
        id: &str,
        attrs: &MasterServerGroupAttributes,
    ) -> ProviderResult<ResourceState<MasterServerGroupAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;
        self.api
            .update_master_server_group(account, &attrs.to_api(group_id))
            .await
            .context("UpdateMasterServerGroup")?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &MasterServerGroupAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        let group_id = parse_id(self.type_name(), id)?;
        self.api
            .delete_master_server_group(account, group_id)
            .await
            .context("DeleteMasterServerGroup")
    }
}
