//! soc-store: the read-only data-access boundary for the SOC console.
//!
//! All record reads flow through the [`RecordStore`] trait so the console
//! core never talks to a transport directly. The trait describes exactly
//! five queries; their scope keys, orderings, and limits are part of the
//! contract and every backend must honor them.

pub mod memory;

use soc_core::types::{Asset, LogEvent, Tenant, TenantId};

pub use memory::{MemoryStore, Snapshot};

/// Default row cap for tenant-scoped log queries.
pub const TENANT_LOG_LIMIT: usize = 10;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// The five read queries the console consumes.
///
/// Implementations return already-ordered collections; the console core
/// never re-sorts. A failed query yields an error, never a partial
/// collection.
pub trait RecordStore {
    /// All tenants, ordered by `created_at` descending.
    fn tenants(&self) -> impl std::future::Future<Output = Result<Vec<Tenant>>> + Send;

    /// All log events across every tenant, ordered by `timestamp`
    /// descending.
    fn all_logs(&self) -> impl std::future::Future<Output = Result<Vec<LogEvent>>> + Send;

    /// All assets across every tenant, ordered by `created_at` descending.
    fn all_assets(&self) -> impl std::future::Future<Output = Result<Vec<Asset>>> + Send;

    /// One tenant's assets, ordered by `created_at` descending.
    fn tenant_assets(
        &self,
        tenant_id: &TenantId,
    ) -> impl std::future::Future<Output = Result<Vec<Asset>>> + Send;

    /// One tenant's most-recent log events, ordered by `timestamp`
    /// descending and capped ([`TENANT_LOG_LIMIT`] unless the backend is
    /// configured otherwise).
    ///
    /// This view is a bounded sample: rollup statistics derived from it
    /// undercount tenants with more recent events than the cap. Exhaustive
    /// per-tenant counts must come from [`RecordStore::all_logs`].
    fn tenant_logs(
        &self,
        tenant_id: &TenantId,
    ) -> impl std::future::Future<Output = Result<Vec<LogEvent>>> + Send;
}
