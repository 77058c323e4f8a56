//! Core record types for the SOC console.
//!
//! These are immutable snapshots of rows owned by the remote store; the
//! console never mutates them in place, it only replaces whole collections
//! when a fetch cycle completes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Identifiers ───────────────────────────────────────────────────

/// Every asset and log event belongs to exactly one tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TenantId(pub Uuid);

impl TenantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for an asset record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AssetId(pub Uuid);

impl AssetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a log event record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

// ── Records ───────────────────────────────────────────────────────

/// A monitored client organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A protected asset (server, workstation, appliance) in a tenant's estate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub client_id: TenantId,
    pub name: String,
    pub ip_address: String,
    pub status: AssetStatus,
    /// Absent in the wire format means no known vulnerabilities.
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    pub created_at: DateTime<Utc>,
}

/// A vulnerability descriptor attached to an asset. The console only
/// needs presence and count; the fields are carried through for the
/// report collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    pub cve_id: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
}

/// A classified detection event from a tenant's log stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event_id: EventId,
    pub client_id: TenantId,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    #[serde(default)]
    pub label: ClassificationLabel,
    pub alert_name: Option<String>,
    pub event_type: String,
    pub host_ip: String,
    pub host_name: Option<String>,
}

// ── Enums ─────────────────────────────────────────────────────────

/// Event severity as reported by the remote store.
///
/// Unrecognized strings are preserved in `Other` rather than rejected, so
/// a malformed row can never block rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Other(String),
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "critical" => Self::Critical,
            _ => Self::Other(s),
        }
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Low => "low".to_string(),
            Severity::Medium => "medium".to_string(),
            Severity::High => "high".to_string(),
            Severity::Critical => "critical".to_string(),
            Severity::Other(s) => s,
        }
    }
}

/// Reported asset status. Anything the store sends that is not a known
/// status lands in `Other` and is folded into the offline bucket by the
/// rollup layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum AssetStatus {
    Online,
    Offline,
    Other(String),
}

impl From<String> for AssetStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "online" => Self::Online,
            "offline" => Self::Offline,
            _ => Self::Other(s),
        }
    }
}

impl From<AssetStatus> for String {
    fn from(s: AssetStatus) -> Self {
        match s {
            AssetStatus::Online => "online".to_string(),
            AssetStatus::Offline => "offline".to_string(),
            AssetStatus::Other(s) => s,
        }
    }
}

/// Analyst-assigned correctness label for a detection (wire forms
/// "TP", "TN", "FP", "FN"). Unset or unrecognized labels are `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ClassificationLabel {
    TruePositive,
    TrueNegative,
    FalsePositive,
    FalseNegative,
    Other(String),
}

impl Default for ClassificationLabel {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for ClassificationLabel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "TP" => Self::TruePositive,
            "TN" => Self::TrueNegative,
            "FP" => Self::FalsePositive,
            "FN" => Self::FalseNegative,
            _ => Self::Other(s),
        }
    }
}

impl From<ClassificationLabel> for String {
    fn from(l: ClassificationLabel) -> Self {
        match l {
            ClassificationLabel::TruePositive => "TP".to_string(),
            ClassificationLabel::TrueNegative => "TN".to_string(),
            ClassificationLabel::FalsePositive => "FP".to_string(),
            ClassificationLabel::FalseNegative => "FN".to_string(),
            ClassificationLabel::Other(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_event_serialization_roundtrip() {
        let event = LogEvent {
            event_id: EventId::new(),
            client_id: TenantId::new(),
            timestamp: Utc::now(),
            severity: Severity::Critical,
            label: ClassificationLabel::FalsePositive,
            alert_name: Some("Suspicious PowerShell".to_string()),
            event_type: "process_creation".to_string(),
            host_ip: "10.0.1.42".to_string(),
            host_name: Some("ws-finance-07".to_string()),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: LogEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event.event_id, back.event_id);
        assert_eq!(back.severity, Severity::Critical);
        assert_eq!(back.label, ClassificationLabel::FalsePositive);
    }

    #[test]
    fn severity_wire_strings() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        let parsed: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, Severity::Critical);
    }

    #[test]
    fn unrecognized_severity_is_preserved() {
        let parsed: Severity = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(parsed, Severity::Other("urgent".to_string()));
    }

    #[test]
    fn unrecognized_status_is_preserved() {
        let parsed: AssetStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(parsed, AssetStatus::Other("maintenance".to_string()));
    }

    #[test]
    fn asset_without_vulnerabilities_field_parses() {
        let json = format!(
            r#"{{"id":"{}","client_id":"{}","name":"db-01","ip_address":"10.0.2.7",
                "status":"online","created_at":"2026-01-05T12:00:00Z"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let asset: Asset = serde_json::from_str(&json).unwrap();
        assert!(asset.vulnerabilities.is_empty());
        assert_eq!(asset.status, AssetStatus::Online);
    }

    #[test]
    fn label_wire_forms() {
        for (wire, label) in [
            ("TP", ClassificationLabel::TruePositive),
            ("TN", ClassificationLabel::TrueNegative),
            ("FP", ClassificationLabel::FalsePositive),
            ("FN", ClassificationLabel::FalseNegative),
        ] {
            let parsed: ClassificationLabel =
                serde_json::from_str(&format!("\"{wire}\"")).unwrap();
            assert_eq!(parsed, label);
            assert_eq!(String::from(label), wire);
        }
    }
}
