//! Observation resource, extended with untyped value slots.
//!
//! Each observation carries at most one of `valueString` and `valueInteger`. The slots
//! are kept as separate wire fields, but the only way the crate sets them is through
//! [`Observation::set_value`], which clears the other slot.

use crate::{CodeableConcept, Identifier, Reference};
use serde::{Deserialize, Serialize};

/// Status of an observation result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    Final,
    Amended,
    Cancelled,
    EnteredInError,
    Unknown,
}

/// The value payload of an observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObservationValue {
    Integer(i64),
    String(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    pub status: ObservationStatus,

    pub code: CodeableConcept,

    #[serde(default)]
    pub subject: Reference,

    #[serde(
        rename = "valueString",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    value_string: Option<String>,

    #[serde(
        rename = "valueInteger",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    value_integer: Option<i64>,
}

impl Observation {
    /// A value-less observation with the given status.
    pub fn new(status: ObservationStatus) -> Self {
        Self {
            id: None,
            identifier: Vec::new(),
            status,
            code: CodeableConcept::default(),
            subject: Reference::default(),
            value_string: None,
            value_integer: None,
        }
    }

    /// Set the value payload, replacing whichever slot was set before.
    pub fn set_value(&mut self, value: ObservationValue) {
        match value {
            ObservationValue::Integer(v) => {
                self.value_integer = Some(v);
                self.value_string = None;
            }
            ObservationValue::String(v) => {
                self.value_string = Some(v);
                self.value_integer = None;
            }
        }
    }

    /// The value payload, if any.
    ///
    /// A parsed observation carrying both slots reports the integer.
    pub fn value(&self) -> Option<ObservationValue> {
        match (&self.value_integer, &self.value_string) {
            (Some(v), _) => Some(ObservationValue::Integer(*v)),
            (None, Some(v)) => Some(ObservationValue::String(v.clone())),
            (None, None) => None,
        }
    }

    pub fn value_integer(&self) -> Option<i64> {
        self.value_integer
    }

    pub fn value_string(&self) -> Option<&str> {
        self.value_string.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_keeps_slots_exclusive() {
        let mut observation = Observation::new(ObservationStatus::Registered);

        observation.set_value(ObservationValue::String("ok".into()));
        assert_eq!(observation.value_string(), Some("ok"));
        assert_eq!(observation.value_integer(), None);

        observation.set_value(ObservationValue::Integer(34));
        assert_eq!(observation.value_integer(), Some(34));
        assert_eq!(observation.value_string(), None);
    }

    #[test]
    fn zero_integer_is_still_serialised() {
        let mut observation = Observation::new(ObservationStatus::Registered);
        observation.set_value(ObservationValue::Integer(0));

        let value = serde_json::to_value(&observation).expect("serialise");
        assert_eq!(value["valueInteger"], 0);
        assert!(value.get("valueString").is_none());
        assert_eq!(value["status"], "registered");
    }

    #[test]
    fn valueless_observation_omits_both_slots() {
        let observation = Observation::new(ObservationStatus::Registered);
        let value = serde_json::to_value(&observation).expect("serialise");
        assert!(value.get("valueInteger").is_none());
        assert!(value.get("valueString").is_none());
        assert_eq!(observation.value(), None);
    }
}
