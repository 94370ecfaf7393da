//! Patient resource.
//!
//! Only identification is carried. Demographics stay in the source system; the
//! bundle needs a patient purely as the subject that observations point at.

use crate::Identifier;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Logical id, also the target of `Patient/<id>` references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
}

impl Patient {
    /// A patient whose logical id and identifier value are the same string.
    pub fn identified(system: &str, id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            identifier: vec![Identifier::new(system, id)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identified_sets_id_and_identifier() {
        let patient = Patient::identified("https://example.org", "clinic1-42");
        assert_eq!(patient.id.as_deref(), Some("clinic1-42"));
        assert_eq!(patient.identifier[0].value.as_deref(), Some("clinic1-42"));
        assert_eq!(
            patient.identifier[0].system.as_deref(),
            Some("https://example.org")
        );
    }
}
