//! Shared FHIR data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business identifier: `{ system, value }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            value: Some(value.into()),
        }
    }
}

/// A literal reference to another resource, e.g. `Patient/abc`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Reference {
    /// Build a `<resource_type>/<id>` reference.
    pub fn to(resource_type: &str, id: &str) -> Self {
        Self {
            reference: Some(format!("{resource_type}/{id}")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

/// A concept carried as free text only.
///
/// Codings are not produced by the mapper, so only `text` is modelled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Format a FHIR `date` (`YYYY-MM-DD`).
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Format a FHIR `instant` in UTC with second precision (`YYYY-MM-DDTHH:MM:SSZ`).
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reference_joins_type_and_id() {
        let reference = Reference::to("Patient", "clinic1-42");
        assert_eq!(reference.as_str(), Some("Patient/clinic1-42"));
    }

    #[test]
    fn empty_optionals_are_not_serialised() {
        let json = serde_json::to_string(&Identifier::default()).expect("serialise");
        assert_eq!(json, "{}");
    }

    #[test]
    fn formats_date_and_instant() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_date(at), "2024-01-02");
        assert_eq!(format_instant(at), "2024-01-02T03:04:05Z");
    }
}
