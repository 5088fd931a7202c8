//! `ec_dns_tsig`: TSIG keys for authenticated zone transfers.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{DnsApi, Tsig, TsigAlgorithm};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderError, ProviderResult};
use crate::resource::{
    Resource, ResourceContext, ResourceState, cleared, parse_id, read_after_write,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsigAttributes {
    #[serde(default)]
    pub account_number: String,
    pub alias: String,
    pub key_name: String,
    pub key_value: String,
    /// e.g. `HMAC-SHA256`.
    pub algorithm_name: String,
}

impl TsigAttributes {
    fn to_api(&self, id: i64) -> ProviderResult<Tsig> {
        let algorithm = TsigAlgorithm::from_name(&self.algorithm_name).ok_or_else(|| {
            ProviderError::Validation(format!(
                "algorithm_name: unknown TSIG algorithm '{}'",
                self.algorithm_name
            ))
        })?;
        Ok(Tsig {
            id,
            alias: self.alias.clone(),
            key_name: self.key_name.clone(),
            key_value: self.key_value.clone(),
            algorithm,
            algorithm_name: algorithm.name().to_string(),
        })
    }
}

pub struct TsigResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> TsigResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

#[async_trait]
impl<A: DnsApi + 'static> Resource for TsigResource<A> {
    type Attributes = TsigAttributes;

    fn type_name(&self) -> &'static str {
        "ec_dns_tsig"
    }

    async fn create(
        &self,
        attrs: &TsigAttributes,
    ) -> ProviderResult<ResourceState<TsigAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let id = self
            .api
            .add_tsig(account, &attrs.to_api(0)?)
            .await
            .context("AddTsig")?;
        read_after_write(self, &id.to_string(), attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &TsigAttributes,
    ) -> ProviderResult<Option<ResourceState<TsigAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let tsig_id = parse_id(self.type_name(), id)?;

        match self.api.get_tsig(account, tsig_id).await {
            Ok(tsig) => Ok(Some(ResourceState::new(
                id,
                TsigAttributes {
                    account_number: attrs.account_number.clone(),
                    alias: tsig.alias,
                    key_name: tsig.key_name,
                    key_value: tsig.key_value,
                    algorithm_name: tsig.algorithm.name().to_string(),
                },
            ))),
            Err(e) => Ok(cleared(self.type_name(), id, &e)),
        }
    }

    async fn update(
        &self,
        id: &str,
        attrs: &TsigAttributes,
    ) -> ProviderResult<ResourceState<TsigAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let tsig_id = parse_id(self.type_name(), id)?;
        self.api
            .update_tsig(account, &attrs.to_api(tsig_id)?)
            .await
            .context("UpdateTsig")?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &TsigAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        let tsig_id = parse_id(self.type_name(), id)?;
        self.api
            .delete_tsig(account, tsig_id)
            .await
            .context("DeleteTsig")
    }
}
