//! soc-console: client-scoped aggregation and view-state derivation for
//! the multi-tenant SOC dashboard.
//!
//! Turns independently fetched collections of tenants, log events, and
//! assets into per-tenant rollups, classified alert entries, and the
//! navigation state machine that decides which view the operator sees.
//! All derivation is pure and total; the only async edges are the five
//! read queries behind the [`soc_store::RecordStore`] trait.

pub mod classify;
pub mod error;
pub mod rollup;
pub mod session;
pub mod views;
pub mod workspace;

pub use classify::{classify, is_active_alert, Classification, Tier};
pub use error::ConsoleError;
pub use session::{DashboardSession, ScopedResult};
pub use workspace::{Tab, WorkspaceState};
