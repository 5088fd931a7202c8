//! DNS zone reconciliation
//!
//! The zone update endpoint replaces the whole zone with what it is sent.
//! Records it should remove must be sent back with `is_deleted` set, and
//! records it should keep must carry their server-assigned ids. These
//! functions take the declared (local) zone and the freshly fetched
//! (remote) zone and produce the payload to PUT:
//!
//! - remote only: kept with `is_deleted = true`
//! - local only: appended without ids
//! - both: remote ids kept, local content copied over
//!
//! Records are matched by `name` (exact, first match wins). Route group
//! members are matched by `record_id`. None of this validates its input or
//! fails.

use edgecast_api::{
    DnsRecord, DnsRouteGroup, DnsRouteGroupRecord, GroupComposition, RecordType, Zone,
};

/// Reconcile one record collection, returning the mutated remote collection.
pub fn reconcile_records(local: &[DnsRecord], mut remote: Vec<DnsRecord>) -> Vec<DnsRecord> {
    let additions: Vec<DnsRecord> = local
        .iter()
        .filter(|l| !remote.iter().any(|r| r.name == l.name))
        .cloned()
        .collect();

    for record in &mut remote {
        match local.iter().find(|l| l.name == record.name) {
            Some(declared) => {
                record.weight = declared.weight;
                record.rdata.clone_from(&declared.rdata);
                record.ttl = declared.ttl;
                record.name.clone_from(&declared.name);
                record.is_deleted = false;
            }
            None => record.is_deleted = true,
        }
    }

    remote.extend(additions);
    remote
}

/// Reconcile one member list of a route group, keyed by `record_id`.
fn reconcile_group_records(
    local: &[DnsRouteGroupRecord],
    mut remote: Vec<DnsRouteGroupRecord>,
) -> Vec<DnsRouteGroupRecord> {
    let additions: Vec<DnsRouteGroupRecord> = local
        .iter()
        .filter(|l| !remote.iter().any(|r| r.record.record_id == l.record.record_id))
        .cloned()
        .collect();

    for member in &mut remote {
        let Some(declared) = local
            .iter()
            .find(|l| l.record.record_id == member.record.record_id)
        else {
            member.record.is_deleted = true;
            continue;
        };

        member.record.name.clone_from(&declared.record.name);
        member.record.ttl = declared.record.ttl;
        member.record.rdata.clone_from(&declared.record.rdata);
        member.record.weight = declared.record.weight;
        member.record.is_deleted = false;
        member.weight = declared.weight;

        if let (Some(remote_hc), Some(local_hc)) =
            (member.health_check.as_mut(), declared.health_check.as_ref())
        {
            remote_hc.port_number = local_hc.port_number;
            remote_hc.timeout = local_hc.timeout;
        }
    }

    remote.extend(additions);
    remote
}

fn mark_composition_deleted(composition: &mut GroupComposition) {
    for member in composition.iter_mut() {
        member.record.is_deleted = true;
    }
}

/// A declared group about to be sent as new: every server id cleared.
fn as_new_group(group: &DnsRouteGroup) -> DnsRouteGroup {
    let mut group = group.clone();
    group.fixed_group_id = 0;
    group.fixed_zone_id = 0;
    group.group_id = 0;
    for member in group.group_composition.iter_mut() {
        member.record.fixed_record_id = 0;
        member.record.record_id = 0;
        member.record.fixed_group_id = 0;
    }
    group
}

/// Reconcile the route groups of a zone, returning the mutated remote groups.
///
/// When the group counts differ, every stored group is dropped and the
/// declared groups are sent as new ones.
pub fn reconcile_groups(
    local: &[DnsRouteGroup],
    mut remote: Vec<DnsRouteGroup>,
) -> Vec<DnsRouteGroup> {
    if local.is_empty() {
        for group in &mut remote {
            mark_composition_deleted(&mut group.group_composition);
        }
        return remote;
    }

    if remote.is_empty() {
        return local.to_vec();
    }

    if local.len() != remote.len() {
        log::debug!(
            "Group count changed ({} stored, {} declared), replacing all groups",
            remote.len(),
            local.len()
        );
        for group in &mut remote {
            mark_composition_deleted(&mut group.group_composition);
        }
        remote.extend(local.iter().map(as_new_group));
        return remote;
    }

    let additions: Vec<DnsRouteGroup> = local
        .iter()
        .filter(|l| !remote.iter().any(|r| r.fixed_group_id == l.fixed_group_id))
        .map(as_new_group)
        .collect();

    for group in &mut remote {
        let Some(declared) = local
            .iter()
            .find(|l| l.fixed_group_id == group.fixed_group_id)
        else {
            mark_composition_deleted(&mut group.group_composition);
            continue;
        };

        let composition = &mut group.group_composition;
        let wanted = &declared.group_composition;
        composition.a = reconcile_group_records(&wanted.a, std::mem::take(&mut composition.a));
        composition.aaaa =
            reconcile_group_records(&wanted.aaaa, std::mem::take(&mut composition.aaaa));
        composition.cname =
            reconcile_group_records(&wanted.cname, std::mem::take(&mut composition.cname));
    }

    remote.extend(additions);
    remote
}

/// Reconcile a whole zone: every record collection, the route groups and the
/// editable zone fields. The remote zone ids are kept.
pub fn reconcile_zone(local: &Zone, mut remote: Zone) -> Zone {
    for record_type in RecordType::ALL {
        let stored = std::mem::take(remote.records.get_mut(record_type));
        *remote.records.get_mut(record_type) =
            reconcile_records(local.records.get(record_type), stored);
    }
    remote.groups = reconcile_groups(&local.groups, std::mem::take(&mut remote.groups));

    remote.domain_name.clone_from(&local.domain_name);
    remote.status = local.status;
    remote.zone_type = local.zone_type;
    remote.is_customer_owned = local.is_customer_owned;
    remote.comment.clone_from(&local.comment);
    remote
}
