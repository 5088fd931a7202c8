//! Test helpers
//!
//! `MockApi` is an in-memory stand-in for every API area. It hands out
//! sequential ids, records the operations it receives, and can be told to
//! fail a named operation.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use edgecast_api::{
    AccessModule, ApiError, Customer, CustomerApi, CustomerService, CustomerUser, DeliveryRegion,
    DeployRequest, DeployRequestCreated, DnsApi, DnsRouteGroup, EdgeCname, EdgeCnameApi,
    GroupType, MasterServerGroup, MediaType, Origin, OriginApi, PortalContext, RecordType,
    Result, RulesEngineApi, SecondaryZoneGroup, Tsig, WafApi, WafResponse, WafRuleKind, Zone,
};
use serde_json::{Value, json};
use tokio::sync::RwLock;

use crate::provider::EdgecastProvider;
use crate::resource::ResourceContext;

pub const ACCOUNT: &str = "A1B2";

#[derive(Default)]
pub struct MockApi {
    next_id: AtomicI64,
    calls: RwLock<Vec<String>>,
    fail_on: RwLock<Option<String>>,

    pub zones: RwLock<HashMap<i64, Zone>>,
    /// Last zone payload received by `update_zone`, before it was applied.
    pub last_zone_update: RwLock<Option<Zone>>,
    pub groups: RwLock<HashMap<i64, DnsRouteGroup>>,
    pub master_groups: RwLock<HashMap<i64, MasterServerGroup>>,
    pub tsigs: RwLock<HashMap<i64, Tsig>>,
    pub secondary_groups: RwLock<HashMap<i64, SecondaryZoneGroup>>,
    pub cnames: RwLock<HashMap<i64, EdgeCname>>,
    pub origins: RwLock<HashMap<i64, (MediaType, Origin)>>,
    pub customers: RwLock<HashMap<String, Customer>>,
    pub services: RwLock<HashMap<String, BTreeSet<i32>>>,
    pub regions: RwLock<HashMap<String, i32>>,
    pub access_modules: RwLock<HashMap<String, BTreeSet<i32>>>,
    pub users: RwLock<HashMap<i64, CustomerUser>>,
    pub policies: RwLock<HashMap<String, Value>>,
    pub deploy_requests: RwLock<Vec<DeployRequest>>,
    pub waf_rules: RwLock<HashMap<(WafRuleKind, String), Value>>,
    pub waf_scopes: RwLock<HashMap<String, Value>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(100),
            ..Self::default()
        }
    }

    /// Make the named operation (e.g. `"get_zone"`) fail with a server error.
    pub async fn fail_on(&self, op: &str) {
        *self.fail_on.write().await = Some(op.to_string());
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    fn id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn enter(&self, op: &str) -> Result<()> {
        self.calls.write().await.push(op.to_string());
        if self.fail_on.read().await.as_deref() == Some(op) {
            return Err(ApiError::ServerError {
                service: "mock".to_string(),
                status: 500,
                raw_message: Some(format!("{op} failed")),
            });
        }
        Ok(())
    }

    fn not_found(resource: String) -> ApiError {
        ApiError::NotFound {
            service: "mock".to_string(),
            resource,
            raw_message: None,
        }
    }

    /// Apply a zone PUT the way the API does: soft-deleted records are
    /// dropped and new records get ids.
    fn apply_zone(&self, mut zone: Zone) -> Zone {
        for record_type in RecordType::ALL {
            let records = zone.records.get_mut(record_type);
            records.retain(|r| !r.is_deleted);
            for record in records.iter_mut() {
                if record.record_id == 0 {
                    record.record_id = self.id();
                    record.fixed_record_id = record.record_id;
                }
            }
        }
        for group in &mut zone.groups {
            if group.fixed_group_id == 0 {
                group.fixed_group_id = self.id();
                group.group_id = group.fixed_group_id;
            }
            group.fixed_zone_id = zone.fixed_zone_id;
            group.group_composition.a.retain(|m| !m.record.is_deleted);
            group.group_composition.aaaa.retain(|m| !m.record.is_deleted);
            group.group_composition.cname.retain(|m| !m.record.is_deleted);
            for member in group.group_composition.iter_mut() {
                if member.record.record_id == 0 {
                    member.record.record_id = self.id();
                    member.record.fixed_record_id = member.record.record_id;
                }
            }
        }
        zone.groups.retain(|g| !g.group_composition.is_empty());
        zone
    }
}

pub fn context() -> ResourceContext {
    ResourceContext {
        account_number: ACCOUNT.to_string(),
        partner_user_id: None,
    }
}

/// Provider over a fresh `MockApi` with `ACCOUNT` as the default account.
pub fn mock_provider() -> (Arc<MockApi>, EdgecastProvider<MockApi>) {
    let api = Arc::new(MockApi::new());
    let provider = EdgecastProvider::with_api(Arc::clone(&api), context());
    (api, provider)
}

#[async_trait]
impl DnsApi for MockApi {
    async fn get_zone(&self, _: &str, zone_id: i64) -> Result<Zone> {
        self.enter("get_zone").await?;
        self.zones
            .read()
            .await
            .get(&zone_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("zone {zone_id}")))
    }

    async fn add_zone(&self, _: &str, zone: &Zone) -> Result<i64> {
        self.enter("add_zone").await?;
        let id = self.id();
        let mut zone = zone.clone();
        zone.fixed_zone_id = id;
        zone.zone_id = id;
        let zone = self.apply_zone(zone);
        self.zones.write().await.insert(id, zone);
        Ok(id)
    }

    async fn update_zone(&self, _: &str, zone: &Zone) -> Result<()> {
        self.enter("update_zone").await?;
        *self.last_zone_update.write().await = Some(zone.clone());
        let mut applied = self.apply_zone(zone.clone());
        applied.zone_id += 1;
        self.zones.write().await.insert(zone.fixed_zone_id, applied);
        Ok(())
    }

    async fn delete_zone(&self, _: &str, zone_id: i64) -> Result<()> {
        self.enter("delete_zone").await?;
        self.zones
            .write()
            .await
            .remove(&zone_id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(format!("zone {zone_id}")))
    }

    async fn get_group(&self, _: &str, group_id: i64, _: GroupType) -> Result<DnsRouteGroup> {
        self.enter("get_group").await?;
        self.groups
            .read()
            .await
            .get(&group_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("group {group_id}")))
    }

    async fn add_group(&self, _: &str, group: &DnsRouteGroup) -> Result<i64> {
        self.enter("add_group").await?;
        let id = self.id();
        let mut group = group.clone();
        group.fixed_group_id = id;
        group.group_id = id;
        for member in group.group_composition.iter_mut() {
            member.record.record_id = self.id();
        }
        self.groups.write().await.insert(id, group);
        Ok(id)
    }

    async fn update_group(&self, _: &str, group: &DnsRouteGroup) -> Result<()> {
        self.enter("update_group").await?;
        let mut group = group.clone();
        group.group_composition.a.retain(|m| !m.record.is_deleted);
        group.group_composition.aaaa.retain(|m| !m.record.is_deleted);
        group.group_composition.cname.retain(|m| !m.record.is_deleted);
        for member in group.group_composition.iter_mut() {
            if member.record.record_id == 0 {
                member.record.record_id = self.id();
            }
        }
        self.groups
            .write()
            .await
            .insert(group.fixed_group_id, group);
        Ok(())
    }

    async fn delete_group(&self, _: &str, group_id: i64, _: GroupType) -> Result<()> {
        self.enter("delete_group").await?;
        self.groups.write().await.remove(&group_id);
        Ok(())
    }

    async fn get_master_server_group(&self, _: &str, id: i64) -> Result<MasterServerGroup> {
        self.enter("get_master_server_group").await?;
        self.master_groups
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("master server group {id}")))
    }

    async fn add_master_server_group(&self, _: &str, group: &MasterServerGroup) -> Result<i64> {
        self.enter("add_master_server_group").await?;
        let id = self.id();
        let mut group = group.clone();
        group.id = id;
        for master in &mut group.masters {
            master.id = self.id();
        }
        self.master_groups.write().await.insert(id, group);
        Ok(id)
    }

    async fn update_master_server_group(&self, _: &str, group: &MasterServerGroup) -> Result<()> {
        self.enter("update_master_server_group").await?;
        self.master_groups
            .write()
            .await
            .insert(group.id, group.clone());
        Ok(())
    }

    async fn delete_master_server_group(&self, _: &str, id: i64) -> Result<()> {
        self.enter("delete_master_server_group").await?;
        self.master_groups.write().await.remove(&id);
        Ok(())
    }

    async fn get_tsig(&self, _: &str, id: i64) -> Result<Tsig> {
        self.enter("get_tsig").await?;
        self.tsigs
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("tsig {id}")))
    }

    async fn add_tsig(&self, _: &str, tsig: &Tsig) -> Result<i64> {
        self.enter("add_tsig").await?;
        let id = self.id();
        let mut tsig = tsig.clone();
        tsig.id = id;
        tsig.algorithm_name = tsig.algorithm.name().to_string();
        self.tsigs.write().await.insert(id, tsig);
        Ok(id)
    }

    async fn update_tsig(&self, _: &str, tsig: &Tsig) -> Result<()> {
        self.enter("update_tsig").await?;
        self.tsigs.write().await.insert(tsig.id, tsig.clone());
        Ok(())
    }

    async fn delete_tsig(&self, _: &str, id: i64) -> Result<()> {
        self.enter("delete_tsig").await?;
        self.tsigs.write().await.remove(&id);
        Ok(())
    }

    async fn get_secondary_zone_group(&self, _: &str, id: i64) -> Result<SecondaryZoneGroup> {
        self.enter("get_secondary_zone_group").await?;
        self.secondary_groups
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("secondary zone group {id}")))
    }

    async fn add_secondary_zone_group(&self, _: &str, group: &SecondaryZoneGroup) -> Result<i64> {
        self.enter("add_secondary_zone_group").await?;
        let id = self.id();
        let mut group = group.clone();
        group.id = id;
        for zone in &mut group.zone_composition.zones {
            zone.zone_id = self.id();
            zone.fixed_zone_id = zone.zone_id;
        }
        self.secondary_groups.write().await.insert(id, group);
        Ok(id)
    }

    async fn update_secondary_zone_group(
        &self,
        _: &str,
        group: &SecondaryZoneGroup,
    ) -> Result<()> {
        self.enter("update_secondary_zone_group").await?;
        self.secondary_groups
            .write()
            .await
            .insert(group.id, group.clone());
        Ok(())
    }

    async fn delete_secondary_zone_group(&self, _: &str, id: i64) -> Result<()> {
        self.enter("delete_secondary_zone_group").await?;
        self.secondary_groups.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl EdgeCnameApi for MockApi {
    async fn get_cname(&self, _: &str, id: i64) -> Result<EdgeCname> {
        self.enter("get_cname").await?;
        self.cnames
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("cname {id}")))
    }

    async fn add_cname(&self, account_number: &str, cname: &EdgeCname) -> Result<i64> {
        self.enter("add_cname").await?;
        let id = self.id();
        let mut cname = cname.clone();
        cname.id = id;
        cname.origin_string = format!("/80{account_number}{}", cname.dir_path);
        self.cnames.write().await.insert(id, cname);
        Ok(id)
    }

    async fn update_cname(&self, _: &str, cname: &EdgeCname) -> Result<()> {
        self.enter("update_cname").await?;
        self.cnames.write().await.insert(cname.id, cname.clone());
        Ok(())
    }

    async fn delete_cname(&self, _: &str, id: i64) -> Result<()> {
        self.enter("delete_cname").await?;
        self.cnames.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl OriginApi for MockApi {
    async fn get_origin(&self, _: &str, media: MediaType, id: i64) -> Result<Origin> {
        self.enter("get_origin").await?;
        match self.origins.read().await.get(&id) {
            Some((stored_media, origin)) if *stored_media == media => Ok(origin.clone()),
            _ => Err(Self::not_found(format!("{media} origin {id}"))),
        }
    }

    async fn add_origin(&self, _: &str, media: MediaType, origin: &Origin) -> Result<i64> {
        self.enter("add_origin").await?;
        let id = self.id();
        let mut origin = origin.clone();
        origin.id = id;
        origin.origin_url = format!("/{media}/{}", origin.directory_name);
        self.origins.write().await.insert(id, (media, origin));
        Ok(id)
    }

    async fn update_origin(&self, _: &str, media: MediaType, origin: &Origin) -> Result<()> {
        self.enter("update_origin").await?;
        self.origins
            .write()
            .await
            .insert(origin.id, (media, origin.clone()));
        Ok(())
    }

    async fn delete_origin(&self, _: &str, id: i64) -> Result<()> {
        self.enter("delete_origin").await?;
        self.origins.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CustomerApi for MockApi {
    async fn get_customer(&self, account_number: &str) -> Result<Customer> {
        self.enter("get_customer").await?;
        self.customers
            .read()
            .await
            .get(account_number)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("customer {account_number}")))
    }

    async fn add_customer(&self, customer: &Customer) -> Result<String> {
        self.enter("add_customer").await?;
        let account = format!("{:X}", self.id());
        let mut customer = customer.clone();
        customer.account_id.clone_from(&account);
        self.customers
            .write()
            .await
            .insert(account.clone(), customer);
        Ok(account)
    }

    async fn update_customer(&self, account_number: &str, customer: &Customer) -> Result<()> {
        self.enter("update_customer").await?;
        let mut customer = customer.clone();
        customer.account_id = account_number.to_string();
        self.customers
            .write()
            .await
            .insert(account_number.to_string(), customer);
        Ok(())
    }

    async fn delete_customer(&self, account_number: &str) -> Result<()> {
        self.enter("delete_customer").await?;
        self.customers.write().await.remove(account_number);
        Ok(())
    }

    async fn get_customer_services(&self, account_number: &str) -> Result<Vec<CustomerService>> {
        self.enter("get_customer_services").await?;
        let enabled = self
            .services
            .read()
            .await
            .get(account_number)
            .cloned()
            .unwrap_or_default();
        // A couple of disabled services, as the API lists every service.
        let mut services: Vec<CustomerService> = [1, 2, 9, 15]
            .into_iter()
            .filter(|id| !enabled.contains(id))
            .map(|id| CustomerService {
                id,
                name: format!("service {id}"),
                parent_id: 0,
                status: 0,
            })
            .collect();
        services.extend(enabled.into_iter().map(|id| CustomerService {
            id,
            name: format!("service {id}"),
            parent_id: 0,
            status: 1,
        }));
        Ok(services)
    }

    async fn set_customer_services(
        &self,
        account_number: &str,
        service_ids: &[i32],
        status: i32,
    ) -> Result<()> {
        self.enter("set_customer_services").await?;
        let mut all = self.services.write().await;
        let enabled = all.entry(account_number.to_string()).or_default();
        for id in service_ids {
            if status == 1 {
                enabled.insert(*id);
            } else {
                enabled.remove(id);
            }
        }
        Ok(())
    }

    async fn get_delivery_region(&self, account_number: &str) -> Result<DeliveryRegion> {
        self.enter("get_delivery_region").await?;
        let id = self
            .regions
            .read()
            .await
            .get(account_number)
            .copied()
            .unwrap_or(1);
        Ok(DeliveryRegion {
            id,
            name: format!("region {id}"),
            description: String::new(),
        })
    }

    async fn set_delivery_region(&self, account_number: &str, region_id: i32) -> Result<()> {
        self.enter("set_delivery_region").await?;
        self.regions
            .write()
            .await
            .insert(account_number.to_string(), region_id);
        Ok(())
    }

    async fn get_access_modules(&self, account_number: &str) -> Result<Vec<AccessModule>> {
        self.enter("get_access_modules").await?;
        Ok(self
            .access_modules
            .read()
            .await
            .get(account_number)
            .map(|ids| {
                ids.iter()
                    .map(|id| AccessModule {
                        id: *id,
                        name: format!("module {id}"),
                        parent_id: None,
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn set_access_modules(
        &self,
        account_number: &str,
        module_ids: &[i32],
        status: i32,
    ) -> Result<()> {
        self.enter("set_access_modules").await?;
        let mut all = self.access_modules.write().await;
        let enabled = all.entry(account_number.to_string()).or_default();
        for id in module_ids {
            if status == 1 {
                enabled.insert(*id);
            } else {
                enabled.remove(id);
            }
        }
        Ok(())
    }

    async fn get_customer_user(&self, _: &str, user_id: i64) -> Result<CustomerUser> {
        self.enter("get_customer_user").await?;
        self.users
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("customer user {user_id}")))
    }

    async fn add_customer_user(&self, _: &str, user: &CustomerUser) -> Result<i64> {
        self.enter("add_customer_user").await?;
        let id = self.id();
        let mut user = user.clone();
        user.id = id;
        self.users.write().await.insert(id, user);
        Ok(id)
    }

    async fn update_customer_user(&self, _: &str, user_id: i64, user: &CustomerUser) -> Result<()> {
        self.enter("update_customer_user").await?;
        let mut user = user.clone();
        user.id = user_id;
        self.users.write().await.insert(user_id, user);
        Ok(())
    }

    async fn delete_customer_user(&self, _: &str, user_id: i64) -> Result<()> {
        self.enter("delete_customer_user").await?;
        self.users.write().await.remove(&user_id);
        Ok(())
    }
}

#[async_trait]
impl RulesEngineApi for MockApi {
    async fn get_policy(&self, _: &PortalContext, policy_id: &str) -> Result<Value> {
        self.enter("get_policy").await?;
        self.policies
            .read()
            .await
            .get(policy_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("policy {policy_id}")))
    }

    async fn add_policy(&self, _: &PortalContext, policy: &Value) -> Result<String> {
        self.enter("add_policy").await?;
        let id = self.id().to_string();
        let mut stored = policy.clone();
        if let Some(obj) = stored.as_object_mut() {
            obj.insert("id".to_string(), json!(id));
        }
        self.policies.write().await.insert(id.clone(), stored);
        Ok(id)
    }

    async fn submit_deploy_request(
        &self,
        _: &PortalContext,
        request: &DeployRequest,
    ) -> Result<DeployRequestCreated> {
        self.enter("submit_deploy_request").await?;
        self.deploy_requests.write().await.push(request.clone());
        Ok(DeployRequestCreated {
            id: self.id().to_string(),
            state: Some("pending".to_string()),
        })
    }
}

#[async_trait]
impl WafApi for MockApi {
    async fn get_waf_rule(&self, _: &str, kind: WafRuleKind, id: &str) -> Result<Value> {
        self.enter("get_waf_rule").await?;
        self.waf_rules
            .read()
            .await
            .get(&(kind, id.to_string()))
            .cloned()
            .ok_or_else(|| Self::not_found(format!("{kind} {id}")))
    }

    async fn add_waf_rule(&self, _: &str, kind: WafRuleKind, rule: &Value) -> Result<String> {
        self.enter("add_waf_rule").await?;
        let id = format!("w{}", self.id());
        self.waf_rules
            .write()
            .await
            .insert((kind, id.clone()), rule.clone());
        Ok(id)
    }

    async fn update_waf_rule(
        &self,
        _: &str,
        kind: WafRuleKind,
        id: &str,
        rule: &Value,
    ) -> Result<WafResponse> {
        self.enter("update_waf_rule").await?;
        self.waf_rules
            .write()
            .await
            .insert((kind, id.to_string()), rule.clone());
        Ok(WafResponse {
            id: Some(id.to_string()),
            success: true,
            ..WafResponse::default()
        })
    }

    async fn delete_waf_rule(&self, _: &str, kind: WafRuleKind, id: &str) -> Result<()> {
        self.enter("delete_waf_rule").await?;
        self.waf_rules.write().await.remove(&(kind, id.to_string()));
        Ok(())
    }

    async fn get_waf_scopes(&self, account_number: &str) -> Result<Value> {
        self.enter("get_waf_scopes").await?;
        self.waf_scopes
            .read()
            .await
            .get(account_number)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("scopes of {account_number}")))
    }

    async fn update_waf_scopes(&self, account_number: &str, scopes: &Value) -> Result<WafResponse> {
        self.enter("update_waf_scopes").await?;
        self.waf_scopes
            .write()
            .await
            .insert(account_number.to_string(), scopes.clone());
        Ok(WafResponse {
            id: Some(format!("scopes-{account_number}")),
            success: true,
            ..WafResponse::default()
        })
    }
}
