//! Customer origins (`/v2/mcc/customers/{account}/origins/{media}`)

use async_trait::async_trait;

use crate::client::{ApiRequest, EdgecastClient, mcc_path};
use crate::error::Result;
use crate::traits::OriginApi;
use crate::types::{MediaType, Origin, OriginCreated};

const SERVICE: &str = "origin";

#[async_trait]
impl OriginApi for EdgecastClient {
    async fn get_origin(&self, account_number: &str, media: MediaType, id: i64) -> Result<Origin> {
        self.call(
            ApiRequest::get(
                SERVICE,
                mcc_path(account_number, &format!("/origins/{media}/{id}")),
            )
            .context(format!("{media} origin {id}")),
        )
        .await
    }

    async fn add_origin(
        &self,
        account_number: &str,
        media: MediaType,
        origin: &Origin,
    ) -> Result<i64> {
        let created: OriginCreated = self
            .call(
                ApiRequest::post(SERVICE, mcc_path(account_number, &format!("/origins/{media}")))
                    .json(origin)?
                    .context(format!("{media} origin {}", origin.directory_name)),
            )
            .await?;
        Ok(created.customer_origin_id)
    }

    async fn update_origin(
        &self,
        account_number: &str,
        media: MediaType,
        origin: &Origin,
    ) -> Result<()> {
        self.call_unit(
            ApiRequest::put(
                SERVICE,
                mcc_path(account_number, &format!("/origins/{media}/{}", origin.id)),
            )
            .json(origin)?
            .context(format!("{media} origin {}", origin.id)),
        )
        .await
    }

    async fn delete_origin(&self, account_number: &str, id: i64) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, mcc_path(account_number, &format!("/origins/{id}")))
                .context(format!("origin {id}")),
        )
        .await
    }
}
