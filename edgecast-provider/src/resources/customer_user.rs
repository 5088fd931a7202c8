//! `ec_customer_user`: portal users of a customer account.

use std::sync::Arc;

use async_trait::async_trait;
use edgecast_api::{CustomerApi, CustomerUser};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResultExt, ProviderResult};
use crate::resource::{
    Resource, ResourceContext, ResourceState, cleared, parse_id, read_after_write,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerUserAttributes {
    pub account_number: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub title: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone_number: String,
    pub mobile: String,
    pub fax: String,
    pub time_zone_id: Option<i32>,
}

impl CustomerUserAttributes {
    fn to_api(&self) -> CustomerUser {
        CustomerUser {
            id: 0,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_admin: i32::from(self.is_admin),
            title: self.title.clone(),
            address1: self.address1.clone(),
            address2: self.address2.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            country: self.country.clone(),
            phone_number: self.phone_number.clone(),
            mobile: self.mobile.clone(),
            fax: self.fax.clone(),
            time_zone_id: self.time_zone_id,
        }
    }
}

pub struct CustomerUserResource<A> {
    api: Arc<A>,
    ctx: ResourceContext,
}

impl<A> CustomerUserResource<A> {
    pub fn new(api: Arc<A>, ctx: ResourceContext) -> Self {
        Self { api, ctx }
    }
}

#[async_trait]
impl<A: CustomerApi + 'static> Resource for CustomerUserResource<A> {
    type Attributes = CustomerUserAttributes;

    fn type_name(&self) -> &'static str {
        "ec_customer_user"
    }

    async fn create(
        &self,
        attrs: &CustomerUserAttributes,
    ) -> ProviderResult<ResourceState<CustomerUserAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let id = self
            .api
            .add_customer_user(account, &attrs.to_api())
            .await
            .context("AddCustomerUser")?;
        read_after_write(self, &id.to_string(), attrs).await
    }

    async fn read(
        &self,
        id: &str,
        attrs: &CustomerUserAttributes,
    ) -> ProviderResult<Option<ResourceState<CustomerUserAttributes>>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let user_id = parse_id(self.type_name(), id)?;

        let user = match self.api.get_customer_user(account, user_id).await {
            Ok(user) => user,
            Err(e) => return Ok(cleared(self.type_name(), id, &e)),
        };
        Ok(Some(ResourceState::new(
            id,
            CustomerUserAttributes {
                account_number: attrs.account_number.clone(),
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                is_admin: user.is_admin == 1,
                title: user.title,
                address1: user.address1,
                address2: user.address2,
                city: user.city,
                state: user.state,
                zip: user.zip,
                country: user.country,
                phone_number: user.phone_number,
                mobile: user.mobile,
                fax: user.fax,
                time_zone_id: user.time_zone_id,
            },
        )))
    }

    async fn update(
        &self,
        id: &str,
        attrs: &CustomerUserAttributes,
    ) -> ProviderResult<ResourceState<CustomerUserAttributes>> {
        let account = self.ctx.account(&attrs.account_number)?;
        let user_id = parse_id(self.type_name(), id)?;
        self.api
            .update_customer_user(account, user_id, &attrs.to_api())
            .await
            .context("UpdateCustomerUser")?;
        read_after_write(self, id, attrs).await
    }

    async fn delete(&self, id: &str, attrs: &CustomerUserAttributes) -> ProviderResult<()> {
        let account = self.ctx.account(&attrs.account_number)?;
        let user_id = parse_id(self.type_name(), id)?;
        self.api
            .delete_customer_user(account, user_id)
            .await
            .context("DeleteCustomerUser")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockApi, context};

    fn attrs() -> CustomerUserAttributes {
        CustomerUserAttributes {
            account_number: "C0FFEE".into(),
            email: "ops@example.com".into(),
            first_name: "Ops".into(),
            last_name: "Team".into(),
            is_admin: true,
            ..CustomerUserAttributes::default()
        }
    }

    #[tokio::test]
    async fn lifecycle() {
        let api = Arc::new(MockApi::new());
        let resource = CustomerUserResource::new(Arc::clone(&api), context());

        let created = resource.create(&attrs()).await.unwrap();
        assert!(created.attributes.is_admin);
        assert_eq!(created.attributes.account_number, "C0FFEE");

        let mut desired = created.attributes.clone();
        desired.is_admin = false;
        desired.title = "SRE".into();
        let updated = resource.update(&created.id, &desired).await.unwrap();
        assert!(!updated.attributes.is_admin);
        assert_eq!(updated.attributes.title, "SRE");

        resource.delete(&created.id, &desired).await.unwrap();
        assert!(resource.read(&created.id, &desired).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_failure_is_prefixed() {
        let api = Arc::new(MockApi::new());
        let resource = CustomerUserResource::new(Arc::clone(&api), context());
        let created = resource.create(&attrs()).await.unwrap();

        api.fail_on("update_customer_user").await;
        let err = resource.update(&created.id, &attrs()).await.unwrap_err();
        assert!(err.to_string().starts_with("UpdateCustomerUser: "));
    }
}
