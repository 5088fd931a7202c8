//! Edge CNAMEs (`/v2/mcc/customers/{account}/cnames`)

use async_trait::async_trait;

use crate::client::{ApiRequest, EdgecastClient, mcc_path};
use crate::error::Result;
use crate::traits::EdgeCnameApi;
use crate::types::{CnameCreated, EdgeCname};

const SERVICE: &str = "cname";

#[async_trait]
impl EdgeCnameApi for EdgecastClient {
    async fn get_cname(&self, account_number: &str, id: i64) -> Result<EdgeCname> {
        self.call(
            ApiRequest::get(SERVICE, mcc_path(account_number, &format!("/cnames/{id}")))
                .context(format!("cname {id}")),
        )
        .await
    }

    async fn add_cname(&self, account_number: &str, cname: &EdgeCname) -> Result<i64> {
        let created: CnameCreated = self
            .call(
                ApiRequest::post(SERVICE, mcc_path(account_number, "/cnames"))
                    .json(cname)?
                    .context(format!("cname {}", cname.name)),
            )
            .await?;
        Ok(created.cname_id)
    }

    async fn update_cname(&self, account_number: &str, cname: &EdgeCname) -> Result<()> {
        self.call_unit(
            ApiRequest::put(
                SERVICE,
                mcc_path(account_number, &format!("/cnames/{}", cname.id)),
            )
            .json(cname)?
            .context(format!("cname {}", cname.id)),
        )
        .await
    }

    async fn delete_cname(&self, account_number: &str, id: i64) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, mcc_path(account_number, &format!("/cnames/{id}")))
                .context(format!("cname {id}")),
        )
        .await
    }
}
