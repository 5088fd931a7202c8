use serde::{Deserialize, Serialize};

use super::MediaType;

/// Origin types an edge CNAME may point at.
pub const ORIGIN_TYPE_CUSTOMER: i32 = 3;
pub const ORIGIN_TYPE_ADN: i32 = 80;

/// An edge CNAME: a customer hostname mapped onto a CDN origin path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EdgeCname {
    #[serde(rename = "Id", skip_serializing_if = "is_zero")]
    pub id: i64,
    pub name: String,
    pub dir_path: String,
    /// `0` or `1` on the wire.
    pub enable_custom_reports: i32,
    pub media_type_id: i32,
    pub origin_id: i64,
    pub origin_type: i32,
    /// Read-only path the API reports for the origin.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin_string: String,
}

impl EdgeCname {
    pub fn media_type(&self) -> Option<MediaType> {
        MediaType::from_id(self.media_type_id)
    }
}

/// Create response of `POST /cnames`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CnameCreated {
    pub cname_id: i64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(v: &i64) -> bool {
    *v == 0
}
