use serde::{Deserialize, Serialize};

/// A customer account managed by a partner.
///
/// `account_id` is the hex account number the API returns on create; it is
/// what every other API area takes as `account_number`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Customer {
    #[serde(rename = "HexId", skip_serializing)]
    pub account_id: String,
    #[serde(rename = "Id", skip_serializing)]
    pub customer_id: i64,
    pub company_name: String,
    /// `STND`, `ENTR` and so on.
    pub service_level_code: String,
    /// `1` active, `0` inactive.
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
    pub contact_fax: String,
    pub contact_mobile: String,
    pub contact_title: String,
    pub billing_account_tag: String,
    pub billing_address1: String,
    pub billing_address2: String,
    pub billing_city: String,
    pub billing_state: String,
    pub billing_zip: String,
    pub billing_country: String,
    pub billing_contact_first_name: String,
    pub billing_contact_last_name: String,
    pub billing_contact_email: String,
    pub billing_contact_phone: String,
    pub billing_rate_info: String,
    pub notes: String,
    #[serde(rename = "UsageLimitBandwidthInTb")]
    pub bandwidth_usage_limit: i64,
    #[serde(rename = "UsageLimitDataTransferInGb")]
    pub data_transfer_usage_limit: i64,
    pub partner_user_id: i64,
}

/// Response of `POST /v2/pcc/customers`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerCreated {
    pub account_number: String,
}

/// A product/service that can be enabled on a customer account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerService {
    pub id: i32,
    pub name: String,
    pub parent_id: i32,
    /// `1` enabled, `0` disabled.
    pub status: i32,
}

/// Body of the service/access-module toggle endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct StatusToggle<'a> {
    pub(crate) id: &'a [i32],
    pub(crate) status: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeliveryRegion {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessModule {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}

/// A login belonging to a customer account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerUser {
    #[serde(skip_serializing)]
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// `1` admin, `0` regular user.
    pub is_admin: i32,
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

/// Response of `POST /v2/pcc/customers/users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerUserCreated {
    pub customer_user_id: i64,
}
