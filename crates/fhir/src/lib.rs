//! FHIR resource model for e-form document bundles.
//!
//! This crate provides the **wire models** used when an e-form export is turned into a
//! FHIR document bundle:
//! - shared data types ([`Identifier`], [`Reference`], [`CodeableConcept`])
//! - the resources a bundle carries ([`Composition`], [`Practitioner`], [`Patient`],
//!   [`Observation`])
//! - the [`Bundle`] container itself, with JSON serialisation and parsing
//!
//! This crate focuses on:
//! - FHIR JSON field naming (`resourceType`, `fullUrl`, `valueInteger`, ...)
//! - serialisation/deserialisation
//!
//! It does NOT enforce full FHIR profile conformance. Only the fields the mapper
//! populates are modelled.

pub mod bundle;
pub mod composition;
pub mod datatypes;
pub mod observation;
pub mod patient;
pub mod practitioner;

pub use bundle::{Bundle, BundleEntry, BundleType, Resource};
pub use composition::{Composition, CompositionStatus};
pub use datatypes::{format_date, format_instant, CodeableConcept, Identifier, Reference};
pub use observation::{Observation, ObservationStatus, ObservationValue};
pub use patient::Patient;
pub use practitioner::Practitioner;

/// Errors returned by the `fhir` crate.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`FhirError`].
pub type FhirResult<T> = Result<T, FhirError>;
