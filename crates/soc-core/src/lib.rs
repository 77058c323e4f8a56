//! soc-core: Shared types, configuration, and error handling for the SOC console.
//!
//! This crate provides the foundational pieces used across the console:
//! - Record types (Tenant, Asset, LogEvent) mirrored from the remote store
//! - Session event types for the downstream view layer
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use error::SocError;
pub use types::{
    Asset, AssetId, AssetStatus, ClassificationLabel, EventId, LogEvent, Severity, Tenant,
    TenantId,
};
