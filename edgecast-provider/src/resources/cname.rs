//! `ec_cname`: edge CNAMEs pointing at a customer or ADN origin.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{EdgeCname, EdgeCnameApi, MediaType, ORIGIN_TYPE_CUSTOMER};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderResult};
use crate::resource::{
    Resource, ResourceContext, ResourceState, cleared, parse_id, read_after_write,
};
use crate::resources::parse_attr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnameAttributes {
    #[serde(default)]
    pub account_number: String,
    pub name: String,
    /// `httplarge`, `httpsmall` or `adn`.
    pub media_type: String,
    /// Origin id, or `-1` for a path on the CDN storage.
    pub origin_id: i64,
    #[serde(default = "default_origin_type")]
    pub origin_type: i32,
    #[serde(default)]
    pub dir_path: String,
    #[serde(default)]
    pub enable_custom_reports: bool,
    /// Full origin path as reported by the API.
    #[serde(default)]
    pub origin_string: String,
}

fn default_origin_type() -> i32 {
    ORIGIN_TYPE_CUSTOMER
}

impl CnameAttributes {
    fn to_api(&self, id: i64) -> ProviderResult<EdgeCname> {
        let media: MediaType = parse_attr("media_type", &self.media_type)?;
        Ok(EdgeCname {
            id,
            name: self.name.clone(),
            dir_path: self.dir_path.clone(),
            enable_custom_reports: i32::from(self.enable_custom_reports),
            media_type_id: media.id(),
            origin_id: self.origin_id,
            origin_type: self.origin_type,
            origin_string: String::new(),
        })
    }
}

pub struct CnameResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> CnameResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

#[async_trait]
impl<A: EdgeCnameApi + 'static> Resource for CnameResource<A> {
    type Attributes = CnameAttributes;

    fn type_name(&self) -> &'static str {
        "ec_cname"
    }

    async fn create(
        &self,
        attrs: &CnameAttributes,
    ) -> ProviderResult<ResourceState<CnameAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let id = self
            .api
            .add_cname(account, &attrs.to_api(0)?)
            .await
            .context("AddCname")?;
        log::info!("[cname] created {} ({id})", attrs.name);
        read_after_write(self, &id.to_string(), attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &CnameAttributes,
    ) -> ProviderResult<Option<ResourceState<CnameAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let cname_id = parse_id(self.type_name(), id)?;

        let cname = match self.api.get_cname(account, cname_id).await {
            Ok(cname) => cname,
            Err(e) => return Ok(cleared(self.type_name(), id, &e)),
        };
        // Unknown media ids keep the declared value.
        let media_type = cname
            .media_type()
            .map_or_else(|| attrs.media_type.clone(), |m| m.as_str().to_string());

        Ok(Some(ResourceState::new(
            id,
            CnameAttributes {
                account_number: attrs.account_number.clone(),
                name: cname.name,
                media_type,
                origin_id: cname.origin_id,
                origin_type: cname.origin_type,
                dir_path: cname.dir_path,
                enable_custom_reports: cname.enable_custom_reports == 1,
                origin_string: cname.origin_string,
            },
        )))
    }

    async fn update(
        &self,
        id: &str,
        attrs: &CnameAttributes,
    ) -> ProviderResult<ResourceState<CnameAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let cname_id = parse_id(self.type_name(), id)?;
        self.api
            .update_cname(account, &attrs.to_api(cname_id)?)
            .await
            .context("UpdateCname")?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &CnameAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        let cname_id = parse_id(self.type_name(), id)?;
        self.api
            .delete_cname(account, cname_id)
            .await
            .context("DeleteCname")
    }
}
