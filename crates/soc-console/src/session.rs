//! Dashboard session: snapshot ownership and query orchestration.
//!
//! The session holds the current navigation state and the read-only
//! snapshots fetched through the [`RecordStore`], and derives the view
//! models from whatever is available. Global snapshots resolve
//! independently; a collection that has not resolved yet derives as empty
//! rather than blocking the whole view.

use soc_core::events::{SessionEvent, SnapshotKind};
use soc_core::types::{Asset, LogEvent, Tenant, TenantId};
use soc_store::RecordStore;

use crate::error::Result;
use crate::views::{
    assets_view, client_context, monitor_view, overview_view, AssetsView, ClientContext,
    MonitorView, OverviewView,
};
use crate::workspace::{Tab, WorkspaceState};

/// A tenant-scoped query result, tagged with the tenant it was issued for.
///
/// The tag is what lets the session discard results that arrive after the
/// operator has moved on to another tenant.
#[derive(Debug, Clone)]
pub struct ScopedResult<T> {
    pub tenant_id: TenantId,
    pub records: Vec<T>,
}

/// The long-lived per-operator dashboard session.
pub struct DashboardSession<S: RecordStore> {
    store: S,
    state: WorkspaceState,

    // Global snapshots. `None` means the query has not resolved yet.
    tenants: Option<Vec<Tenant>>,
    all_logs: Option<Vec<LogEvent>>,
    all_assets: Option<Vec<Asset>>,

    // Tenant-scoped snapshots, only populated inside a workspace.
    scoped_assets: Option<Vec<Asset>>,
    scoped_logs: Option<Vec<LogEvent>>,

    events: Vec<SessionEvent>,
}

impl<S: RecordStore> DashboardSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: WorkspaceState::Overview,
            tenants: None,
            all_logs: None,
            all_assets: None,
            scoped_assets: None,
            scoped_logs: None,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    /// Drain the events accumulated since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Global snapshots ──────────────────────────────────────────

    /// Re-issue the three global queries and apply each result that
    /// succeeds. A failed query leaves its previous snapshot untouched;
    /// the first error is returned after all three have been attempted.
    pub async fn refresh_global(&mut self) -> Result<()> {
        let mut first_err = None;

        match self.store.tenants().await {
            Ok(tenants) => {
                self.push_applied(SnapshotKind::Tenants, tenants.len());
                self.tenants = Some(tenants);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Tenant query failed, keeping previous snapshot");
                first_err.get_or_insert(e);
            }
        }

        match self.store.all_logs().await {
            Ok(logs) => {
                self.push_applied(SnapshotKind::AllLogs, logs.len());
                self.all_logs = Some(logs);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Global log query failed, keeping previous snapshot");
                first_err.get_or_insert(e);
            }
        }

        match self.store.all_assets().await {
            Ok(assets) => {
                self.push_applied(SnapshotKind::AllAssets, assets.len());
                self.all_assets = Some(assets);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Global asset query failed, keeping previous snapshot");
                first_err.get_or_insert(e);
            }
        }

        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    // ── Navigation ────────────────────────────────────────────────

    /// Enter a tenant's workspace. Resets the tab to monitor and, when
    /// the selection actually changed, drops the old scoped snapshots and
    /// re-issues the scoped queries.
    pub async fn select_tenant(&mut self, tenant_id: TenantId) -> Result<()> {
        let transition = self.state.select_tenant(tenant_id.clone());
        self.state = transition.next;
        self.events.push(SessionEvent::TenantSelected {
            tenant_id: tenant_id.clone(),
        });

        if transition.reissue_scoped_queries {
            tracing::info!(tenant_id = %tenant_id.0, "Tenant selected, refreshing scoped data");
            self.scoped_assets = None;
            self.scoped_logs = None;
            self.refresh_scoped().await?;
        }
        Ok(())
    }

    /// Return to the overview. Scoped snapshots are dropped so a
    /// re-entered workspace always starts from a fresh fetch.
    pub fn go_back(&mut self) {
        self.state = self.state.go_back().next;
        self.scoped_assets = None;
        self.scoped_logs = None;
        self.events.push(SessionEvent::ReturnedToOverview);
    }

    /// Switch workspace tabs. Pure navigation: never re-issues a query.
    /// A no-op on the overview.
    pub fn select_tab(&mut self, tab: Tab) {
        let was_workspace = matches!(self.state, WorkspaceState::Workspace { .. });
        self.state = self.state.select_tab(tab).next;
        if was_workspace {
            self.events.push(SessionEvent::TabChanged {
                tab: tab.as_str().to_string(),
            });
        } else {
            tracing::debug!("Tab change ignored on overview");
        }
    }

    // ── Scoped snapshots ──────────────────────────────────────────

    /// Re-issue the two tenant-scoped queries for the current selection.
    ///
    /// Inert while no tenant is selected: the scoped queries are keyed by
    /// tenant id and must never be issued without one.
    pub async fn refresh_scoped(&mut self) -> Result<()> {
        let Some(tenant_id) = self.state.tenant_id().cloned() else {
            tracing::debug!("No tenant selected, scoped queries not issued");
            return Ok(());
        };

        let assets = self.store.tenant_assets(&tenant_id).await?;
        self.apply_scoped_assets(ScopedResult {
            tenant_id: tenant_id.clone(),
            records: assets,
        });

        let logs = self.store.tenant_logs(&tenant_id).await?;
        self.apply_scoped_logs(ScopedResult {
            tenant_id,
            records: logs,
        });
        Ok(())
    }

    /// Apply a scoped asset result, discarding it if the operator has
    /// since selected a different tenant (or none).
    pub fn apply_scoped_assets(&mut self, result: ScopedResult<Asset>) {
        if self.state.tenant_id() != Some(&result.tenant_id) {
            self.push_stale(result.tenant_id);
            return;
        }
        self.push_applied(SnapshotKind::TenantAssets, result.records.len());
        self.scoped_assets = Some(result.records);
    }

    /// Apply a scoped log result with the same staleness gate.
    pub fn apply_scoped_logs(&mut self, result: ScopedResult<LogEvent>) {
        if self.state.tenant_id() != Some(&result.tenant_id) {
            self.push_stale(result.tenant_id);
            return;
        }
        self.push_applied(SnapshotKind::TenantLogs, result.records.len());
        self.scoped_logs = Some(result.records);
    }

    // ── View derivation ───────────────────────────────────────────

    /// The tenant-listing overview, derived from the global snapshots.
    /// Unresolved collections derive as empty.
    pub fn overview(&self) -> OverviewView {
        overview_view(
            self.tenants.as_deref().unwrap_or_default(),
            self.all_logs.as_deref().unwrap_or_default(),
            self.all_assets.as_deref().unwrap_or_default(),
        )
    }

    /// The monitor tab for the current workspace, if one is selected.
    pub fn monitor(&self) -> Option<MonitorView> {
        self.state.tenant_id()?;
        Some(monitor_view(self.scoped_logs.as_deref().unwrap_or_default()))
    }

    /// The asset tab for the current workspace, if one is selected.
    pub fn assets(&self) -> Option<AssetsView> {
        self.state.tenant_id()?;
        Some(assets_view(self.scoped_assets.as_deref().unwrap_or_default()))
    }

    /// The handoff context for the AI-assistant and report collaborators.
    pub fn client_context(&self) -> Option<ClientContext> {
        let tenant_id = self.state.tenant_id()?;
        Some(client_context(
            tenant_id,
            self.tenants.as_deref().unwrap_or_default(),
            self.scoped_logs.as_deref().unwrap_or_default(),
            self.scoped_assets.as_deref().unwrap_or_default(),
        ))
    }

    // ── Event helpers ─────────────────────────────────────────────

    fn push_applied(&mut self, collection: SnapshotKind, record_count: usize) {
        self.events.push(SessionEvent::SnapshotApplied {
            collection,
            record_count,
        });
    }

    fn push_stale(&mut self, requested_for: TenantId) {
        tracing::debug!(
            tenant_id = %requested_for.0,
            "Discarding scoped result for an abandoned selection"
        );
        self.events.push(SessionEvent::StaleResultDiscarded {
            requested_for,
            arrived_at: chrono::Utc::now(),
        });
    }
}
