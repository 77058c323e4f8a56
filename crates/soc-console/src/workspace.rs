//! Workspace navigation state machine.
//!
//! A single tagged value replaces the ambient "selected client" variable:
//! either the operator is on the overview, or inside one tenant's
//! workspace on one tab. Transitions are pure functions on the value; the
//! session owns the one mutable copy for the lifetime of the session.

use serde::{Deserialize, Serialize};

use soc_core::types::TenantId;

/// A tab inside a tenant workspace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Monitor,
    Assets,
    AiAssistant,
    Reports,
    History,
}

impl Tab {
    /// The tab's wire/display name, matching its serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monitor => "monitor",
            Self::Assets => "assets",
            Self::AiAssistant => "ai-assistant",
            Self::Reports => "reports",
            Self::History => "history",
        }
    }
}

/// Current navigation state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WorkspaceState {
    /// No tenant selected; the tenant-listing overview is shown.
    Overview,
    /// Inside one tenant's workspace.
    Workspace { tenant_id: TenantId, tab: Tab },
}

/// Outcome of a transition: the next state, plus whether the tenant-scoped
/// queries must be re-issued (the tenant selection changed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: WorkspaceState,
    pub reissue_scoped_queries: bool,
}

impl WorkspaceState {
    /// The selected tenant, if any.
    pub fn tenant_id(&self) -> Option<&TenantId> {
        match self {
            Self::Overview => None,
            Self::Workspace { tenant_id, .. } => Some(tenant_id),
        }
    }

    /// Enter a tenant's workspace. Always lands on the monitor tab so a
    /// tab bound to a previously selected tenant is never rendered
    /// against the new tenant's data.
    pub fn select_tenant(&self, tenant_id: TenantId) -> Transition {
        let changed = self.tenant_id() != Some(&tenant_id);
        Transition {
            next: Self::Workspace {
                tenant_id,
                tab: Tab::Monitor,
            },
            reissue_scoped_queries: changed,
        }
    }

    /// Return to the overview, discarding the tab selection.
    pub fn go_back(&self) -> Transition {
        Transition {
            next: Self::Overview,
            reissue_scoped_queries: false,
        }
    }

    /// Switch tabs within the current workspace. A no-op on the overview:
    /// there is no workspace to switch tabs in, and this must never fault.
    pub fn select_tab(&self, tab: Tab) -> Transition {
        let next = match self {
            Self::Overview => Self::Overview,
            Self::Workspace { tenant_id, .. } => Self::Workspace {
                tenant_id: tenant_id.clone(),
                tab,
            },
        };
        Transition {
            next,
            reissue_scoped_queries: false,
        }
    }
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::Overview
    }
}
