//! Rollup statistics over record collections.
//!
//! Pure, stateless functions: no caching, no mutation of inputs. Empty
//! collections yield zero counts, never errors.

use serde::{Deserialize, Serialize};

use soc_core::types::{Asset, AssetStatus, LogEvent, Tenant, TenantId};

use crate::classify::is_active_alert;

/// Count active alerts in `logs`, optionally scoped to one tenant.
pub fn count_active_alerts(logs: &[LogEvent], tenant_id: Option<&TenantId>) -> usize {
    logs.iter()
        .filter(|l| tenant_id.map_or(true, |t| &l.client_id == t))
        .filter(|l| is_active_alert(l))
        .count()
}

/// Count assets, optionally scoped to one tenant.
pub fn count_assets(assets: &[Asset], tenant_id: Option<&TenantId>) -> usize {
    assets
        .iter()
        .filter(|a| tenant_id.map_or(true, |t| &a.client_id == t))
        .count()
}

/// Count assets reporting `online`.
pub fn count_online(assets: &[Asset]) -> usize {
    assets
        .iter()
        .filter(|a| a.status == AssetStatus::Online)
        .count()
}

/// Count assets not reporting `online`.
///
/// Defined as `total - online`: every non-online status, including
/// unrecognized ones, folds into the offline bucket for summary purposes.
pub fn count_offline(assets: &[Asset]) -> usize {
    assets.len() - count_online(assets)
}

/// Whether an asset carries at least one known vulnerability.
pub fn has_vulnerabilities(asset: &Asset) -> bool {
    !asset.vulnerabilities.is_empty()
}

/// Per-tenant summary for the overview tenant cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantRollup {
    pub tenant_id: TenantId,
    pub active_alerts: usize,
    pub asset_count: usize,
}

/// Compute one tenant's card rollup from the GLOBAL snapshots.
///
/// The workspace monitor view runs off a separate, 10-row-capped scoped
/// query; scanning the global collections here is what keeps the card
/// counts exhaustive for tenants with more than 10 recent events.
pub fn tenant_rollup(tenant: &Tenant, all_logs: &[LogEvent], all_assets: &[Asset]) -> TenantRollup {
    TenantRollup {
        tenant_id: tenant.id.clone(),
        active_alerts: count_active_alerts(all_logs, Some(&tenant.id)),
        asset_count: count_assets(all_assets, Some(&tenant.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use soc_core::types::{AssetId, ClassificationLabel, EventId, Severity, Vulnerability};

    fn log(client_id: &TenantId, severity: Severity) -> LogEvent {
        LogEvent {
            event_id: EventId::new(),
            client_id: client_id.clone(),
            timestamp: Utc::now(),
            severity,
            label: ClassificationLabel::default(),
            alert_name: None,
            event_type: "test".to_string(),
            host_ip: "10.0.0.1".to_string(),
            host_name: None,
        }
    }

    fn asset(client_id: &TenantId, status: AssetStatus) -> Asset {
        Asset {
            id: AssetId::new(),
            client_id: client_id.clone(),
            name: "asset".to_string(),
            ip_address: "10.0.0.2".to_string(),
            status,
            vulnerabilities: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn mixed_status_and_severity_counts() {
        let t = TenantId::new();
        let assets = vec![
            asset(&t, AssetStatus::Online),
            asset(&t, AssetStatus::Offline),
            asset(&t, AssetStatus::Online),
        ];
        let logs = vec![
            log(&t, Severity::Critical),
            log(&t, Severity::Low),
            log(&t, Severity::High),
            log(&t, Severity::Medium),
        ];

        assert_eq!(count_assets(&assets, Some(&t)), 3);
        assert_eq!(count_online(&assets), 2);
        assert_eq!(count_offline(&assets), 1);
        assert_eq!(count_active_alerts(&logs, Some(&t)), 2);
    }

    #[test]
    fn scoped_count_equals_prefiltered_count() {
        let t = TenantId::new();
        let other = TenantId::new();
        let logs = vec![
            log(&t, Severity::High),
            log(&other, Severity::Critical),
            log(&t, Severity::Low),
            log(&t, Severity::Critical),
            log(&other, Severity::Medium),
        ];

        let prefiltered: Vec<LogEvent> =
            logs.iter().filter(|l| l.client_id == t).cloned().collect();
        assert_eq!(
            count_active_alerts(&logs, Some(&t)),
            count_active_alerts(&prefiltered, None)
        );
    }

    #[test]
    fn online_plus_offline_is_total() {
        let t = TenantId::new();
        let assets = vec![
            asset(&t, AssetStatus::Online),
            asset(&t, AssetStatus::Offline),
            asset(&t, AssetStatus::Other("maintenance".to_string())),
            asset(&t, AssetStatus::Other("degraded".to_string())),
        ];
        assert_eq!(count_online(&assets) + count_offline(&assets), assets.len());
        // Unrecognized statuses land in the offline bucket.
        assert_eq!(count_offline(&assets), 3);
    }

    #[test]
    fn empty_collections_yield_zeros() {
        let t = TenantId::new();
        assert_eq!(count_active_alerts(&[], None), 0);
        assert_eq!(count_active_alerts(&[], Some(&t)), 0);
        assert_eq!(count_assets(&[], None), 0);
        assert_eq!(count_online(&[]), 0);
        assert_eq!(count_offline(&[]), 0);
    }

    #[test]
    fn vulnerability_presence() {
        let t = TenantId::new();
        let clean = asset(&t, AssetStatus::Online);
        assert!(!has_vulnerabilities(&clean));

        let mut vulnerable = asset(&t, AssetStatus::Online);
        vulnerable.vulnerabilities.push(Vulnerability {
            cve_id: Some("CVE-2026-0042".to_string()),
            severity: Some("high".to_string()),
            description: None,
        });
        assert!(has_vulnerabilities(&vulnerable));
    }

    #[test]
    fn rollup_scans_global_collections() {
        let tenant = Tenant {
            id: TenantId::new(),
            name: "acme".to_string(),
            created_at: Utc::now(),
        };
        let other = TenantId::new();

        // 50 recent events for this tenant, far more than the scoped
        // query's 10-row cap. The card rollup must still see all of them.
        let mut logs = Vec::new();
        for i in 0..50 {
            let severity = if i % 2 == 0 { Severity::High } else { Severity::Low };
            logs.push(log(&tenant.id, severity));
        }
        logs.push(log(&other, Severity::Critical));

        let assets = vec![
            asset(&tenant.id, AssetStatus::Online),
            asset(&other, AssetStatus::Online),
        ];

        let rollup = tenant_rollup(&tenant, &logs, &assets);
        assert_eq!(rollup.active_alerts, 25);
        assert_eq!(rollup.asset_count, 1);
    }
}
