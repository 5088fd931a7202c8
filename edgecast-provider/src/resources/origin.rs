//! `ec_origin`: customer origins for the HTTP Large, HTTP Small and ADN
//! platforms.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{MediaType, Origin, OriginApi, OriginHostname, ShieldPop};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderResult};
use crate::resource::{
    Resource, ResourceContext, ResourceState, cleared, parse_id, read_after_write,
};
use crate::resources::parse_attr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginAttributes {
    #[serde(default)]
    pub account_number: String,
    pub directory_name: String,
    /// `httplarge`, `httpsmall` or `adn`.
    pub media_type: String,
    #[serde(default)]
    pub host_header: String,
    #[serde(default)]
    pub http_hostnames: Vec<String>,
    /// `PF` (primary/failover) or `RR` (round robin).
    #[serde(default = "default_load_balancing")]
    pub http_load_balancing: String,
    #[serde(default)]
    pub https_hostnames: Vec<String>,
    #[serde(default = "default_load_balancing")]
    pub https_load_balancing: String,
    #[serde(default)]
    pub network_configuration: i32,
    /// POP codes that shield the origin.
    #[serde(default)]
    pub shield_pops: Vec<String>,
    #[serde(default)]
    pub validation_url: String,
    #[serde(default)]
    pub origin_url: String,
}

fn default_load_balancing() -> String {
    "PF".to_string()
}

fn hostnames(names: &[String]) -> Vec<OriginHostname> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| OriginHostname {
            name: name.clone(),
            is_primary: i32::from(i == 0),
            ordinal: i32::try_from(i).unwrap_or(i32::MAX),
        })
        .collect()
}

impl OriginAttributes {
    fn media(&self) -> ProviderResult<MediaType> {
        parse_attr("media_type", &self.media_type)
    }

    fn to_api(&self, id: i64) -> Origin {
        Origin {
            id,
            directory_name: self.directory_name.clone(),
            host_header: self.host_header.clone(),
            http_hostnames: hostnames(&self.http_hostnames),
            http_load_balancing: self.http_load_balancing.clone(),
            https_hostnames: hostnames(&self.https_hostnames),
            https_load_balancing: self.https_load_balancing.clone(),
            network_configuration: self.network_configuration,
            shield_pops: self
                .shield_pops
                .iter()
                .map(|code| ShieldPop {
                    pop_code: code.clone(),
                    name: String::new(),
                })
                .collect(),
            validation_url: self.validation_url.clone(),
            origin_url: String::new(),
        }
    }

    fn from_api(declared: &Self, mut origin: Origin) -> Self {
        origin.http_hostnames.sort_by_key(|h| h.ordinal);
        origin.https_hostnames.sort_by_key(|h| h.ordinal);
        Self {
            account_number: declared.account_number.clone(),
            directory_name: origin.directory_name,
            media_type: declared.media_type.clone(),
            host_header: origin.host_header,
            http_hostnames: origin.http_hostnames.into_iter().map(|h| h.name).collect(),
            http_load_balancing: origin.http_load_balancing,
            https_hostnames: origin.https_hostnames.into_iter().map(|h| h.name).collect(),
            https_load_balancing: origin.https_load_balancing,
            network_configuration: origin.network_configuration,
            shield_pops: origin.shield_pops.into_iter().map(|p| p.pop_code).collect(),
            validation_url: origin.validation_url,
            origin_url: origin.origin_url,
        }
    }
}

pub struct OriginResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> OriginResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

#[async_trait]
impl<A: OriginApi + 'static> Resource for OriginResource<A> {
    type Attributes = OriginAttributes;

    fn type_name(&self) -> &'static str {
        "ec_origin"
    }

    async fn create(
        &self,
        attrs: &OriginAttributes,
    ) -> ProviderResult<ResourceState<OriginAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let media = attrs.media()?;
        let id = self
            .api
            .add_origin(account, media, &attrs.to_api(0))
            .await
            .context("AddOrigin")?;
        log::info!("[origin] created {media} origin '{}' ({id})", attrs.directory_name);
        read_after_write(self, &id.to_string(), attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &OriginAttributes,
    ) -> ProviderResult<Option<ResourceState<OriginAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let origin_id = parse_id(self.type_name(), id)?;
        let media = attrs.media()?;

        match self.api.get_origin(account, media, origin_id).await {
            Ok(origin) => Ok(Some(ResourceState::new(
                id,
                OriginAttributes::from_api(attrs, origin),
            ))),
            Err(e) => Ok(cleared(self.type_name(), id, &e)),
        }
    }

    async fn update(
        &self,
        id: &str,
        attrs: &OriginAttributes,
    ) -> ProviderResult<ResourceState<OriginAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let origin_id = parse_id(self.type_name(), id)?;
        self.api
            .update_origin(account, attrs.media()?, &attrs.to_api(origin_id))
            .await
            .context("UpdateOrigin")?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &OriginAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        let origin_id = parse_id(self.type_name(), id)?;
        self.api
            .delete_origin(account, origin_id)
            .await
            .context("DeleteOrigin")
    }
}
