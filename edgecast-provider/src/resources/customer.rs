//! `ec_customer`: partner-managed customer accounts, with their enabled
//! services, delivery region and access modules.
//!
//! The resource id is the customer's account number.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{Customer, CustomerApi};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderResult};
use crate::resource::{Resource, ResourceContext, ResourceState, cleared, read_after_write};

const STATUS_ENABLED: i32 = 1;
const STATUS_DISABLED: i32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerAttributes {
    /// Assigned by the API on create.
    pub account_number: String,
    pub company_name: String,
    pub service_level_code: String,
    pub status: i32,
    pub account_id_prefix: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub website: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_title: String,
    pub billing_account_tag: String,
    pub notes: String,
    pub bandwidth_usage_limit: i64,
    pub data_transfer_usage_limit: i64,
    /// Ids of the services to enable.
    pub services: Vec<i32>,
    /// `0` leaves the account's region unchanged.
    pub delivery_region: i32,
    pub access_modules: Vec<i32>,
}

impl CustomerAttributes {
    fn to_api(&self, partner_user_id: Option<i64>) -> Customer {
        Customer {
            company_name: self.company_name.clone(),
            service_level_code: self.service_level_code.clone(),
            status: self.status,
            account_id_prefix: self.account_id_prefix.clone(),
            address1: self.address1.clone(),
            address2: self.address2.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            country: self.country.clone(),
            website: self.website.clone(),
            contact_first_name: self.contact_first_name.clone(),
            contact_last_name: self.contact_last_name.clone(),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            contact_title: self.contact_title.clone(),
            billing_account_tag: self.billing_account_tag.clone(),
            notes: self.notes.clone(),
            bandwidth_usage_limit: self.bandwidth_usage_limit,
            data_transfer_usage_limit: self.data_transfer_usage_limit,
            partner_user_id: partner_user_id.unwrap_or_default(),
            ..Customer::default()
        }
    }
}

/// Ids in `wanted` but not in `current`, and the reverse.
fn diff(wanted: &[i32], current: &BTreeSet<i32>) -> (Vec<i32>, Vec<i32>) {
    let wanted: BTreeSet<i32> = wanted.iter().copied().collect();
    (
        wanted.difference(current).copied().collect(),
        current.difference(&wanted).copied().collect(),
    )
}

pub struct CustomerResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> CustomerResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

impl<A: CustomerApi> CustomerResource<A> {
    async fn enabled_services(&self, account: &str) -> ProviderResult<BTreeSet<i32>> {
        let services = self
            .api
            .get_customer_services(account)
            .await
            .context("GetCustomerServices")?;
        Ok(services
            .into_iter()
            .filter(|s| s.status == STATUS_ENABLED)
            .map(|s| s.id)
            .collect())
    }

    async fn enabled_access_modules(&self, account: &str) -> ProviderResult<BTreeSet<i32>> {
        let modules = self
            .api
            .get_access_modules(account)
            .await
            .context("GetCustomerAccessModules")?;
        Ok(modules.into_iter().map(|m| m.id).collect())
    }

    /// Bring services, region and access modules in line with `attrs`.
    async fn apply_settings(
        &self,
        account: &str,
        attrs: &CustomerAttributes,
    ) -> ProviderResult<()> {
        let (enable, disable) = diff(&attrs.services, &self.enabled_services(account).await?);
        if !enable.is_empty() {
            self.api
                .set_customer_services(account, &enable, STATUS_ENABLED)
                .await
                .context("UpdateCustomerServices")?;
        }
        if !disable.is_empty() {
            self.api
                .set_customer_services(account, &disable, STATUS_DISABLED)
                .await
                .context("UpdateCustomerServices")?;
        }

        if attrs.delivery_region != 0 {
            let current = self
                .api
                .get_delivery_region(account)
                .await
                .context("GetCustomerDeliveryRegion")?;
            if current.id != attrs.delivery_region {
                self.api
                    .set_delivery_region(account, attrs.delivery_region)
                    .await
                    .context("UpdateCustomerDeliveryRegion")?;
            }
        }

        let (enable, disable) = diff(
            &attrs.access_modules,
            &self.enabled_access_modules(account).await?,
        );
        if !enable.is_empty() {
            self.api
                .set_access_modules(account, &enable, STATUS_ENABLED)
                .await
                .context("UpdateCustomerAccessModules")?;
        }
        if !disable.is_empty() {
            self.api
                .set_access_modules(account, &disable, STATUS_DISABLED)
                .await
                .context("UpdateCustomerAccessModules")?;
        }
        Ok(())
    }
}

#[async_trait]
impl<A: CustomerApi + 'static> Resource for CustomerResource<A> {
    type Attributes = CustomerAttributes;

    fn type_name(&self) -> &'static str {
        "ec_customer"
    }

    async fn create(
        &self,
        attrs: &CustomerAttributes,
    ) -> ProviderResult<ResourceState<CustomerAttributes>> {
        let account = self
            .api
            .add_customer(&attrs.to_api(self.ctx.partner_user_id))
            .await
            .context("AddCustomer")?;
        log::info!("[customer] created '{}' ({account})", attrs.company_name);

        self.apply_settings(&account, attrs).await?;
        read_after_write(self, &account, attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &CustomerAttributes,
    ) -> ProviderResult<Option<ResourceState<CustomerAttributes>>> {
        let customer = match self.api.get_customer(id).await {
            Ok(customer) => customer,
            Err(e) => return Ok(cleared(self.type_name(), id, &e)),
        };
        let region = self
            .api
            .get_delivery_region(id)
            .await
            .context("GetCustomerDeliveryRegion")?;

        Ok(Some(ResourceState::new(
            id,
            CustomerAttributes {
                account_number: id.to_string(),
                company_name: customer.company_name,
                service_level_code: customer.service_level_code,
                status: customer.status,
                account_id_prefix: customer.account_id_prefix,
                address1: customer.address1,
                address2: customer.address2,
                city: customer.city,
                state: customer.state,
                zip: customer.zip,
                country: customer.country,
                website: customer.website,
                contact_first_name: customer.contact_first_name,
                contact_last_name: customer.contact_last_name,
                contact_email: customer.contact_email,
                contact_phone: customer.contact_phone,
                contact_title: customer.contact_title,
                billing_account_tag: customer.billing_account_tag,
                notes: customer.notes,
                bandwidth_usage_limit: customer.bandwidth_usage_limit,
                data_transfer_usage_limit: customer.data_transfer_usage_limit,
                services: self.enabled_services(id).await?.into_iter().collect(),
                // Region 0 in the declaration means "whatever the API picked".
                delivery_region: if attrs.delivery_region == 0 { 0 } else { region.id },
                access_modules: self.enabled_access_modules(id).await?.into_iter().collect(),
            },
        )))
    }

    async fn update(
        &self,
        id: &str,
        attrs: &CustomerAttributes,
    ) -> ProviderResult<ResourceState<CustomerAttributes>> {
        self.api
            .update_customer(id, &attrs.to_api(self.ctx.partner_user_id))
            .await
            .context("UpdateCustomer")?;
        self.apply_settings(id, attrs).await?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, _attrs: &CustomerAttributes) -> ProviderResult<()> {
        self.api.delete_customer(id).await.context("DeleteCustomer")
    }
}
