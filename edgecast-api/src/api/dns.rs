//! DNS route service (`/v2/mcc/customers/{account}/dns/...`)

use async_trait::async_trait;

use crate::client::{ApiRequest, EdgecastClient, mcc_path};
use crate::error::Result;
use crate::traits::DnsApi;
use crate::types::{DnsRouteGroup, GroupType, MasterServerGroup, SecondaryZoneGroup, Tsig, Zone};

const SERVICE: &str = "dns";

fn dns_path(account_number: &str, rest: &str) -> String {
    mcc_path(account_number, &format!("/dns{rest}"))
}

#[async_trait]
impl DnsApi for EdgecastClient {
    async fn get_zone(&self, account_number: &str, zone_id: i64) -> Result<Zone> {
        self.call(
            ApiRequest::get(SERVICE, dns_path(account_number, &format!("/routezone/{zone_id}")))
                .context(format!("zone {zone_id}")),
        )
        .await
    }

    async fn add_zone(&self, account_number: &str, zone: &Zone) -> Result<i64> {
        log::info!("[{SERVICE}] Creating zone {}", zone.domain_name);
        self.call(
            ApiRequest::post(SERVICE, dns_path(account_number, "/routezone"))
                .json(zone)?
                .context(format!("zone {}", zone.domain_name)),
        )
        .await
    }

    async fn update_zone(&self, account_number: &str, zone: &Zone) -> Result<()> {
        log::info!(
            "[{SERVICE}] Updating zone {} ({} records)",
            zone.fixed_zone_id,
            zone.records.len()
        );
        self.call_unit(
            ApiRequest::put(
                SERVICE,
                dns_path(account_number, &format!("/routezone/{}", zone.fixed_zone_id)),
            )
            .json(zone)?
            .context(format!("zone {}", zone.fixed_zone_id)),
        )
        .await
    }

    async fn delete_zone(&self, account_number: &str, zone_id: i64) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, dns_path(account_number, &format!("/routezone/{zone_id}")))
                .context(format!("zone {zone_id}")),
        )
        .await
    }

    async fn get_group(
        &self,
        account_number: &str,
        group_id: i64,
        group_type: GroupType,
    ) -> Result<DnsRouteGroup> {
        self.call(
            ApiRequest::get(SERVICE, dns_path(account_number, "/group"))
                .query("id", group_id)
                .query("groupType", group_type.as_str())
                .context(format!("group {group_id}")),
        )
        .await
    }

    async fn add_group(&self, account_number: &str, group: &DnsRouteGroup) -> Result<i64> {
        self.call(
            ApiRequest::post(SERVICE, dns_path(account_number, "/group"))
                .json(group)?
                .context(format!("group {}", group.name)),
        )
        .await
    }

    async fn update_group(&self, account_number: &str, group: &DnsRouteGroup) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, dns_path(account_number, "/group"))
                .json(group)?
                .context(format!("group {}", group.fixed_group_id)),
        )
        .await
    }

    async fn delete_group(
        &self,
        account_number: &str,
        group_id: i64,
        group_type: GroupType,
    ) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, dns_path(account_number, "/group"))
                .query("id", group_id)
                .query("groupType", group_type.as_str())
                .context(format!("group {group_id}")),
        )
        .await
    }

    async fn get_master_server_group(
        &self,
        account_number: &str,
        id: i64,
    ) -> Result<MasterServerGroup> {
        self.call(
            ApiRequest::get(SERVICE, dns_path(account_number, "/mastergroup"))
                .query("id", id)
                .context(format!("master server group {id}")),
        )
        .await
    }

    async fn add_master_server_group(
        &self,
        account_number: &str,
        group: &MasterServerGroup,
    ) -> Result<i64> {
        self.call(
            ApiRequest::post(SERVICE, dns_path(account_number, "/mastergroup"))
                .json(group)?
                .context(format!("master server group {}", group.name)),
        )
        .await
    }

    async fn update_master_server_group(
        &self,
        account_number: &str,
        group: &MasterServerGroup,
    ) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, dns_path(account_number, "/mastergroup"))
                .query("id", group.id)
                .json(group)?
                .context(format!("master server group {}", group.id)),
        )
        .await
    }

    async fn delete_master_server_group(&self, account_number: &str, id: i64) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, dns_path(account_number, "/mastergroup"))
                .query("id", id)
                .context(format!("master server group {id}")),
        )
        .await
    }

    async fn get_tsig(&self, account_number: &str, id: i64) -> Result<Tsig> {
        self.call(
            ApiRequest::get(SERVICE, dns_path(account_number, &format!("/tsig/{id}")))
                .context(format!("tsig {id}")),
        )
        .await
    }

    async fn add_tsig(&self, account_number: &str, tsig: &Tsig) -> Result<i64> {
        self.call(
            ApiRequest::post(SERVICE, dns_path(account_number, "/tsig"))
                .json(tsig)?
                .context(format!("tsig {}", tsig.alias)),
        )
        .await
    }

    async fn update_tsig(&self, account_number: &str, tsig: &Tsig) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, dns_path(account_number, &format!("/tsig/{}", tsig.id)))
                .json(tsig)?
                .context(format!("tsig {}", tsig.id)),
        )
        .await
    }

    async fn delete_tsig(&self, account_number: &str, id: i64) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, dns_path(account_number, &format!("/tsig/{id}")))
                .context(format!("tsig {id}")),
        )
        .await
    }

    async fn get_secondary_zone_group(
        &self,
        account_number: &str,
        id: i64,
    ) -> Result<SecondaryZoneGroup> {
        self.call(
            ApiRequest::get(SERVICE, dns_path(account_number, "/secondarygroup"))
                .query("id", id)
                .context(format!("secondary zone group {id}")),
        )
        .await
    }

    async fn add_secondary_zone_group(
        &self,
        account_number: &str,
        group: &SecondaryZoneGroup,
    ) -> Result<i64> {
        self.call(
            ApiRequest::post(SERVICE, dns_path(account_number, "/secondarygroup"))
                .json(group)?
                .context(format!("secondary zone group {}", group.name)),
        )
        .await
    }

    async fn update_secondary_zone_group(
        &self,
        account_number: &str,
        group: &SecondaryZoneGroup,
    ) -> Result<()> {
        self.call_unit(
            ApiRequest::put(SERVICE, dns_path(account_number, "/secondarygroup"))
                .query("id", group.id)
                .json(group)?
                .context(format!("secondary zone group {}", group.id)),
        )
        .await
    }

    async fn delete_secondary_zone_group(&self, account_number: &str, id: i64) -> Result<()> {
        self.call_unit(
            ApiRequest::delete(SERVICE, dns_path(account_number, "/secondarygroup"))
                .query("id", id)
                .context(format!("secondary zone group {id}")),
        )
        .await
    }
}
