//! Session events emitted for the downstream view layer.
//!
//! The console core does not render anything itself; it notifies the view
//! layer of state changes and snapshot updates through these events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::TenantId;

/// An event emitted by the dashboard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum SessionEvent {
    /// A tenant workspace was entered. The scoped queries for this tenant
    /// are being re-issued.
    TenantSelected { tenant_id: TenantId },

    /// The operator returned to the overview; scoped snapshots were
    /// dropped.
    ReturnedToOverview,

    /// The active workspace tab changed. Pure UI navigation: no query is
    /// re-issued.
    TabChanged { tab: String },

    /// A snapshot collection was replaced with fresh data.
    SnapshotApplied {
        collection: SnapshotKind,
        record_count: usize,
    },

    /// A scoped query result arrived for a tenant that is no longer
    /// selected and was discarded.
    StaleResultDiscarded {
        requested_for: TenantId,
        arrived_at: DateTime<Utc>,
    },
}

/// Which snapshot collection an event refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    Tenants,
    AllLogs,
    AllAssets,
    TenantAssets,
    TenantLogs,
}
