//! Classification labeling for detection events.
//!
//! The single place where analyst labels and severities are interpreted.
//! Every consumer (tenant cards, monitor tab, asset tab) goes through
//! these functions; re-implementing the rules inline elsewhere is how
//! counts drift apart between views.

use serde::{Deserialize, Serialize};

use soc_core::types::{ClassificationLabel, LogEvent, Severity};

/// Display tier for a classification badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Confirmed-correct outcome (true positive or true negative).
    Success,
    /// A false alarm that needs detection tuning.
    Danger,
    /// A missed detection, the most operationally dangerous case.
    Warning,
    /// Unrecognized or unset label.
    Neutral,
}

/// A resolved classification ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    pub display_text: String,
    pub tier: Tier,
}

/// Map an analyst label to its display classification.
///
/// Total over every input: unrecognized labels map to "Unknown" rather
/// than failing, so a malformed row never blocks rendering.
pub fn classify(label: &ClassificationLabel) -> Classification {
    let (display_text, tier) = match label {
        ClassificationLabel::TruePositive => ("True Positive", Tier::Success),
        ClassificationLabel::TrueNegative => ("True Negative", Tier::Success),
        ClassificationLabel::FalsePositive => ("False Positive", Tier::Danger),
        ClassificationLabel::FalseNegative => ("False Negative", Tier::Warning),
        ClassificationLabel::Other(_) => ("Unknown", Tier::Neutral),
    };
    Classification {
        display_text: display_text.to_string(),
        tier,
    }
}

/// Whether an event counts as an active alert.
///
/// The sole severity predicate behind every alert count, global and
/// per-tenant.
pub fn is_active_alert(event: &LogEvent) -> bool {
    matches!(event.severity, Severity::High | Severity::Critical)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use soc_core::types::{EventId, TenantId};

    fn event(severity: Severity, label: ClassificationLabel) -> LogEvent {
        LogEvent {
            event_id: EventId::new(),
            client_id: TenantId::new(),
            timestamp: Utc::now(),
            severity,
            label,
            alert_name: None,
            event_type: "test".to_string(),
            host_ip: "10.0.0.1".to_string(),
            host_name: None,
        }
    }

    #[test]
    fn known_labels_map_to_distinct_text() {
        let labels = [
            ClassificationLabel::TruePositive,
            ClassificationLabel::TrueNegative,
            ClassificationLabel::FalsePositive,
            ClassificationLabel::FalseNegative,
        ];
        let texts: Vec<String> = labels.iter().map(|l| classify(l).display_text).collect();
        assert_eq!(texts, vec![
            "True Positive",
            "True Negative",
            "False Positive",
            "False Negative",
        ]);
        for text in &texts {
            assert_ne!(text, "Unknown");
        }
    }

    #[test]
    fn tiers_match_operational_meaning() {
        assert_eq!(classify(&ClassificationLabel::TruePositive).tier, Tier::Success);
        assert_eq!(classify(&ClassificationLabel::TrueNegative).tier, Tier::Success);
        assert_eq!(classify(&ClassificationLabel::FalsePositive).tier, Tier::Danger);
        assert_eq!(classify(&ClassificationLabel::FalseNegative).tier, Tier::Warning);
    }

    #[test]
    fn unrecognized_label_is_unknown() {
        let c = classify(&ClassificationLabel::Other("escalated".to_string()));
        assert_eq!(c.display_text, "Unknown");
        assert_eq!(c.tier, Tier::Neutral);

        let unset = classify(&ClassificationLabel::default());
        assert_eq!(unset.display_text, "Unknown");
    }

    #[test]
    fn classify_is_idempotent() {
        let label = ClassificationLabel::FalseNegative;
        assert_eq!(classify(&label), classify(&label));
    }

    #[test]
    fn only_high_and_critical_are_active() {
        assert!(is_active_alert(&event(Severity::High, ClassificationLabel::TruePositive)));
        assert!(is_active_alert(&event(Severity::Critical, ClassificationLabel::TruePositive)));
        assert!(!is_active_alert(&event(Severity::Medium, ClassificationLabel::TruePositive)));
        assert!(!is_active_alert(&event(Severity::Low, ClassificationLabel::TruePositive)));
        assert!(!is_active_alert(&event(
            Severity::Other("urgent".to_string()),
            ClassificationLabel::TruePositive
        )));
    }

    #[test]
    fn label_does_not_affect_alert_predicate() {
        // An FP-labeled critical event is still an active alert.
        let fp = event(Severity::Critical, ClassificationLabel::FalsePositive);
        assert!(is_active_alert(&fp));
        assert_eq!(classify(&fp.label).display_text, "False Positive");
    }
}
