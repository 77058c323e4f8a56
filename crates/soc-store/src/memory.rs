//! In-memory record store backed by a JSON snapshot.
//!
//! Used by the CLI (snapshot file on disk) and by tests. Collections are
//! sorted once at construction so every query returns in contract order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use soc_core::types::{Asset, LogEvent, Tenant, TenantId};

use crate::{RecordStore, Result, TENANT_LOG_LIMIT};

/// A complete store snapshot as serialized to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub logs: Vec<LogEvent>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// In-memory implementation of [`RecordStore`].
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tenants: Vec<Tenant>,
    logs: Vec<LogEvent>,
    assets: Vec<Asset>,
    log_limit: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl MemoryStore {
    /// Build a store from raw collections. Input order does not matter;
    /// the contract orderings are applied here.
    pub fn new(mut tenants: Vec<Tenant>, mut logs: Vec<LogEvent>, mut assets: Vec<Asset>) -> Self {
        tenants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        assets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self {
            tenants,
            logs,
            assets,
            log_limit: TENANT_LOG_LIMIT,
        }
    }

    /// Override the tenant-scoped log cap (default [`TENANT_LOG_LIMIT`]).
    pub fn with_log_limit(mut self, limit: usize) -> Self {
        self.log_limit = limit;
        self
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::new(snapshot.tenants, snapshot.logs, snapshot.assets)
    }

    /// Load a snapshot JSON file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            tenants = snapshot.tenants.len(),
            logs = snapshot.logs.len(),
            assets = snapshot.assets.len(),
            "Loaded store snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }
}

impl RecordStore for MemoryStore {
    async fn tenants(&self) -> Result<Vec<Tenant>> {
        Ok(self.tenants.clone())
    }

    async fn all_logs(&self) -> Result<Vec<LogEvent>> {
        Ok(self.logs.clone())
    }

    async fn all_assets(&self) -> Result<Vec<Asset>> {
        Ok(self.assets.clone())
    }

    async fn tenant_assets(&self, tenant_id: &TenantId) -> Result<Vec<Asset>> {
        Ok(self
            .assets
            .iter()
            .filter(|a| &a.client_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn tenant_logs(&self, tenant_id: &TenantId) -> Result<Vec<LogEvent>> {
        Ok(self
            .logs
            .iter()
            .filter(|l| &l.client_id == tenant_id)
            .take(self.log_limit)
            .cloned()
            .collect())
    }
}
