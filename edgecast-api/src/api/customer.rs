//! Partner customer management (`/v2/pcc/customers`)

use async_trait::async_trait;
use serde_json::json;

use crate::client::{ApiRequest, EdgecastClient};
use crate::error::Result;
use crate::traits::CustomerApi;
use crate::types::{
    AccessModule, Customer, CustomerCreated, CustomerService, CustomerUser, CustomerUserCreated,
    DeliveryRegion, StatusToggle,
};

const SERVICE: &str = "customer";

fn customer_path(account_number: &str, rest: &str) -> String {
    format!(
        "/v2/pcc/customers/{}{rest}",
        urlencoding::encode(account_number)
    )
}

#[async_trait]
impl CustomerApi for EdgecastClient {
    async fn get_customer(&self, account_number: &str) -> Result<Customer> {
        self.call(
            ApiRequest::get(SERVICE, customer_path(account_number, ""))
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn add_customer(&self, customer: &Customer) -> Result<String> {
        let mut body = customer.clone();
        if body.partner_user_id == 0
            && let Some(partner_user_id) = self.config.partner_user_id
        {
            body.partner_user_id = partner_user_id;
        }

        let mut request = ApiRequest::post(SERVICE, "/v2/pcc/customers");
        if let Some(partner_id) = self.config.partner_id {
            request = request.query("parentid", partner_id);
        }
        log::info!("[{SERVICE}] Creating customer {}", customer.company_name);
        let created: CustomerCreated = self
            .call(
                request
                    .json(&body)?
                    .context(format!("customer {}", customer.company_name)),
            )
            .await?;
        Ok(created.account_number)
    }

    async fn update_customer(&self, account_number: &str, customer: &Customer) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, customer_path(account_number, ""))
                .json(customer)?
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn delete_customer(&self, account_number: &str) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, customer_path(account_number, ""))
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn get_customer_services(&self, account_number: &str) -> Result<Vec<CustomerService>> {
        self.call(
            ApiRequest::get(SERVICE, customer_path(account_number, "/services"))
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn set_customer_services(
        &self,
        account_number: &str,
        service_ids: &[i32],
        status: i32,
    ) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, customer_path(account_number, "/services"))
                .json(&StatusToggle {
                    id: service_ids,
                    status,
                })?
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn get_delivery_region(&self, account_number: &str) -> Result<DeliveryRegion> {
        self.call(
            ApiRequest::get(SERVICE, customer_path(account_number, "/deliveryregions"))
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn set_delivery_region(&self, account_number: &str, region_id: i32) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, customer_path(account_number, "/deliveryregions"))
                .body(json!({ "Id": region_id }))
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn get_access_modules(&self, account_number: &str) -> Result<Vec<AccessModule>> {
        self.call(
            ApiRequest::get(SERVICE, customer_path(account_number, "/accessmodules"))
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn set_access_modules(
        &self,
        account_number: &str,
        module_ids: &[i32],
        status: i32,
    ) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, customer_path(account_number, "/accessmodules"))
                .json(&StatusToggle {
                    id: module_ids,
                    status,
                })?
                .context(format!("customer {account_number}")),
        )
        .await
    }

    async fn get_customer_user(&self, account_number: &str, user_id: i64) -> Result<CustomerUser> {
        self.call(
            ApiRequest::get(SERVICE, format!("/v2/pcc/customers/users/{user_id}"))
                .query("customerid", account_number)
                .context(format!("customer user {user_id}")),
        )
        .await
    }

    async fn add_customer_user(&self, account_number: &str, user: &CustomerUser) -> Result<i64> {
        let created: CustomerUserCreated = self
            .call(
                ApiRequest::post(SERVICE, "/v2/pcc/customers/users")
                    .query("customerid", account_number)
                    .json(user)?
                    .context(format!("customer user {}", user.email)),
            )
            .await?;
        Ok(created.customer_user_id)
    }

    async fn update_customer_user(
        &self,
        account_number: &str,
        user_id: i64,
        user: &CustomerUser,
    ) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, format!("/v2/pcc/customers/users/{user_id}"))
                .query("customerid", account_number)
                .json(user)?
                .context(format!("customer user {user_id}")),
        )
        .await
    }

    async fn delete_customer_user(&self, account_number: &str, user_id: i64) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, format!("/v2/pcc/customers/users/{user_id}"))
                .query("customerid", account_number)
                .context(format!("customer user {user_id}")),
        )
        .await
    }
}
