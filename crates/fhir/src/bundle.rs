//! Bundle container and the resources it can carry.
//!
//! A document bundle is an ordered list of entries. Order is significant: the first
//! entry of a `document` bundle is its [`Composition`].

use crate::{Composition, FhirError, FhirResult, Identifier, Observation, Patient, Practitioner};
use serde::{Deserialize, Serialize};

const BUNDLE_RESOURCE_TYPE: &str = "Bundle";

/// Purpose of a bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    Batch,
    Collection,
}

/// Any resource that may appear as a bundle entry.
///
/// Serialised with its `resourceType` discriminator inline, as FHIR JSON expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Composition(Composition),
    Practitioner(Practitioner),
    Patient(Patient),
    Observation(Observation),
}

impl Resource {
    pub fn resource_type(&self) -> &'static str {
        match self {
            Resource::Composition(_) => "Composition",
            Resource::Practitioner(_) => "Practitioner",
            Resource::Patient(_) => "Patient",
            Resource::Observation(_) => "Observation",
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::Composition(r) => r.id.as_deref(),
            Resource::Practitioner(r) => r.id.as_deref(),
            Resource::Patient(r) => r.id.as_deref(),
            Resource::Observation(r) => r.id.as_deref(),
        }
    }
}

/// One bundle entry: a resource and the URL it is addressed by inside the bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleEntry {
    #[serde(rename = "fullUrl")]
    pub full_url: String,

    pub resource: Resource,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    #[serde(rename = "type")]
    pub kind: BundleType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    /// An empty `document` bundle.
    pub fn document(identifier: Identifier, timestamp: String) -> Self {
        Self {
            resource_type: BUNDLE_RESOURCE_TYPE.to_string(),
            identifier: Some(identifier),
            kind: BundleType::Document,
            timestamp: Some(timestamp),
            entry: Vec::new(),
        }
    }

    /// Append an entry at the end of the bundle.
    pub fn push(&mut self, full_url: impl Into<String>, resource: Resource) {
        self.entry.push(BundleEntry {
            full_url: full_url.into(),
            resource,
        });
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entry
    }

    pub fn composition(&self) -> Option<&Composition> {
        self.entry.iter().find_map(|e| match &e.resource {
            Resource::Composition(c) => Some(c),
            _ => None,
        })
    }

    pub fn patients(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.entry.iter().filter_map(|e| match &e.resource {
            Resource::Patient(p) => Some(p),
            _ => None,
        })
    }

    pub fn observations(&self) -> impl Iterator<Item = &Observation> + '_ {
        self.entry.iter().filter_map(|e| match &e.resource {
            Resource::Observation(o) => Some(o),
            _ => None,
        })
    }

    /// Render the bundle as compact FHIR JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError::Json`] if serialisation fails.
    pub fn to_json(&self) -> FhirResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the bundle as indented FHIR JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError::Json`] if serialisation fails.
    pub fn to_json_pretty(&self) -> FhirResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a bundle from FHIR JSON text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort path (e.g.
    /// `entry[2].resource.status`) to the failing field.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError`] if:
    /// - the JSON does not match the bundle wire schema,
    /// - an entry carries a `resourceType` this crate does not model,
    /// - the top-level `resourceType` is not "Bundle".
    pub fn parse(json_text: &str) -> FhirResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let bundle = match serde_path_to_error::deserialize::<_, Bundle>(&mut deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(FhirError::Translation(format!(
                    "Bundle schema mismatch at {path}: {source}"
                )));
            }
        };

        if bundle.resource_type != BUNDLE_RESOURCE_TYPE {
            return Err(FhirError::InvalidInput(format!(
                "Expected resourceType 'Bundle', got '{}'",
                bundle.resource_type
            )));
        }

        Ok(bundle)
    }
}
