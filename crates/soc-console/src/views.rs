//! Derived view models handed to the rendering layer.
//!
//! Everything here is computed from snapshots already in memory; no view
//! derivation ever issues a query or fails.

use serde::{Deserialize, Serialize};

use soc_core::types::{Asset, AssetStatus, LogEvent, Tenant, TenantId};

use crate::classify::{classify, Classification};
use crate::rollup::{
    count_active_alerts, count_assets, count_offline, count_online, has_vulnerabilities,
    tenant_rollup,
};

/// How many scoped log entries the monitor tab shows as "live".
pub const LIVE_CLASSIFICATION_LIMIT: usize = 5;

/// Fallback display name when the tenant record is missing from the
/// snapshot.
pub const UNKNOWN_CLIENT: &str = "Unknown Client";

// ── Overview ──────────────────────────────────────────────────────

/// One tenant card on the overview page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantCard {
    pub tenant_id: TenantId,
    pub name: String,
    pub active_alerts: usize,
    pub asset_count: usize,
}

/// The tenant-listing overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewView {
    pub tenant_count: usize,
    pub global_active_alerts: usize,
    pub global_asset_count: usize,
    /// One card per tenant, in snapshot order (`created_at` descending).
    pub cards: Vec<TenantCard>,
}

/// Derive the overview from the global snapshots.
///
/// Card counts scan the global collections, not the 10-row scoped log
/// query, so they stay exhaustive for busy tenants.
pub fn overview_view(tenants: &[Tenant], all_logs: &[LogEvent], all_assets: &[Asset]) -> OverviewView {
    let cards = tenants
        .iter()
        .map(|tenant| {
            let rollup = tenant_rollup(tenant, all_logs, all_assets);
            TenantCard {
                tenant_id: rollup.tenant_id,
                name: tenant.name.clone(),
                active_alerts: rollup.active_alerts,
                asset_count: rollup.asset_count,
            }
        })
        .collect();

    OverviewView {
        tenant_count: tenants.len(),
        global_active_alerts: count_active_alerts(all_logs, None),
        global_asset_count: count_assets(all_assets, None),
        cards,
    }
}

// ── Workspace: monitor tab ────────────────────────────────────────

/// A classified log entry on the monitor tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedEntry {
    /// Alert name, falling back to the event type.
    pub title: String,
    /// "ip - hostname", with a fallback for unnamed hosts.
    pub host_line: String,
    pub classification: Classification,
}

/// The live-classifications monitor view.
///
/// Derived from the tenant-scoped log query, which is capped at 10 rows:
/// the entries (and any count a renderer takes from them) are a sample of
/// recent activity, not an exhaustive tally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitorView {
    pub entries: Vec<ClassifiedEntry>,
}

pub fn monitor_view(scoped_logs: &[LogEvent]) -> MonitorView {
    let entries = scoped_logs
        .iter()
        .take(LIVE_CLASSIFICATION_LIMIT)
        .map(|log| ClassifiedEntry {
            title: log
                .alert_name
                .clone()
                .unwrap_or_else(|| log.event_type.clone()),
            host_line: format!(
                "{} - {}",
                log.host_ip,
                log.host_name.as_deref().unwrap_or("Unknown Host")
            ),
            classification: classify(&log.label),
        })
        .collect();
    MonitorView { entries }
}

// ── Workspace: assets tab ─────────────────────────────────────────

/// Vulnerability badge for one inventory row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VulnSummary {
    Clean,
    Vulnerable { count: usize },
}

/// One row in the asset inventory table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetRow {
    pub name: String,
    pub ip_address: String,
    pub status: AssetStatus,
    pub vuln_summary: VulnSummary,
}

/// The asset tab: summary counts plus the inventory table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetsView {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub rows: Vec<AssetRow>,
}

pub fn assets_view(scoped_assets: &[Asset]) -> AssetsView {
    let rows = scoped_assets
        .iter()
        .map(|asset| AssetRow {
            name: asset.name.clone(),
            ip_address: asset.ip_address.clone(),
            status: asset.status.clone(),
            vuln_summary: if has_vulnerabilities(asset) {
                VulnSummary::Vulnerable {
                    count: asset.vulnerabilities.len(),
                }
            } else {
                VulnSummary::Clean
            },
        })
        .collect();

    AssetsView {
        total: scoped_assets.len(),
        online: count_online(scoped_assets),
        offline: count_offline(scoped_assets),
        rows,
    }
}

// ── Collaborator handoff ──────────────────────────────────────────

/// The inputs handed to the AI-assistant and report collaborators.
///
/// Tenant-scoped only: collaborators never see the global collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientContext {
    pub tenant_id: TenantId,
    pub tenant_name: String,
    pub logs: Vec<LogEvent>,
    pub assets: Vec<Asset>,
}

pub fn client_context(
    tenant_id: &TenantId,
    tenants: &[Tenant],
    scoped_logs: &[LogEvent],
    scoped_assets: &[Asset],
) -> ClientContext {
    let tenant_name = tenants
        .iter()
        .find(|t| &t.id == tenant_id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());

    ClientContext {
        tenant_id: tenant_id.clone(),
        tenant_name,
        logs: scoped_logs.to_vec(),
        assets: scoped_assets.to_vec(),
    }
}
