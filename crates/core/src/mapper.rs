//! Assembly of a FHIR document bundle from an e-form record set.
//!
//! One call to [`Mapper::map`] is one batch: a single pass over the rows that either
//! returns the complete bundle or fails before building anything.
//!
//! Entry order is fixed:
//! 1. Composition
//! 2. Practitioner
//! 3. per row, in input order: the row's Patient (first sighting only), then one
//!    Observation per column in header order.

use crate::clock::{Clock, SystemClock};
use crate::column::{coerce_integer, ColumnKind, ColumnTyper, StatsColumnTyper};
use crate::config::{IgnoredColumnPolicy, MapperConfig};
use crate::constants::{
    COMPOSITION_TYPE_TEXT, DATE_CREATED_COLUMN, DEMOGRAPHIC_NO_COLUMN, EFMFID_COLUMN,
    FDID_COLUMN, PATIENT_RESOURCE, PRACTITIONER_RESOURCE,
};
use crate::dedup::SeenPatients;
use crate::error::{MapError, MapResult};
use crate::ids::{self, ObservationKey};
use crate::records::{value, Record, RecordSet};
use eform_uuid::{RandomTokens, TokenSource};
use fhir::{
    format_date, format_instant, Bundle, CodeableConcept, Composition, CompositionStatus,
    Identifier, Observation, ObservationStatus, ObservationValue, Patient, Practitioner,
    Reference, Resource,
};

/// Maps record sets into document bundles.
///
/// Defaults to [`StatsColumnTyper`], the system clock and random tokens. Swap the clock
/// and token source for reproducible output.
pub struct Mapper {
    config: MapperConfig,
    typer: Box<dyn ColumnTyper>,
    clock: Box<dyn Clock>,
    tokens: Box<dyn TokenSource>,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        Self {
            config,
            typer: Box::new(StatsColumnTyper),
            clock: Box::new(SystemClock),
            tokens: Box::new(RandomTokens),
        }
    }

    pub fn with_typer(mut self, typer: impl ColumnTyper + 'static) -> Self {
        self.typer = Box::new(typer);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_tokens(mut self, tokens: impl TokenSource + 'static) -> Self {
        self.tokens = Box::new(tokens);
        self
    }

    /// Map every row of `records` into one document bundle.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NoRows`] if `records` is empty.
    pub fn map(&self, records: &RecordSet) -> MapResult<Bundle> {
        if records.is_empty() {
            return Err(MapError::NoRows);
        }

        let config = &self.config;
        let now = self.clock.now();
        let columns = records.columns();
        let kinds: Vec<ColumnKind> = columns
            .iter()
            .map(|column| self.typer.classify(column, records))
            .collect();

        tracing::debug!(
            rows = records.len(),
            columns = columns.len(),
            numeric_columns = kinds.iter().filter(|k| **k == ColumnKind::Numeric).count(),
            "mapping e-form export"
        );

        let mut bundle = Bundle::document(
            Identifier::new(config.system(), config.location()),
            format_instant(now),
        );

        let practitioner_id = ids::practitioner_id(config);
        let composition_id = self.tokens.next_token();
        bundle.push(
            ids::urn_url(config, &composition_id),
            Resource::Composition(self.composition(composition_id, &practitioner_id, now)),
        );
        bundle.push(
            ids::urn_url(config, &practitioner_id),
            Resource::Practitioner(Practitioner {
                id: Some(practitioner_id.clone()),
                identifier: vec![Identifier::new(config.system(), &practitioner_id)],
            }),
        );

        let mut seen = SeenPatients::new();
        for row in records.rows() {
            let patient_id = ids::patient_id(config, value(row, DEMOGRAPHIC_NO_COLUMN));
            if seen.insert_first(&patient_id) {
                let token = self.tokens.next_token();
                bundle.push(
                    ids::patient_url(config, &token),
                    Resource::Patient(Patient::identified(config.system(), &patient_id)),
                );
            }

            for (column, kind) in columns.iter().zip(&kinds) {
                let ignored = config.is_ignored(column);
                if ignored && config.ignored_policy() == IgnoredColumnPolicy::Skip {
                    continue;
                }

                let observation = self.observation(row, column, *kind, ignored, &patient_id);
                let token = self.tokens.next_token();
                bundle.push(
                    ids::observation_url(config, &token),
                    Resource::Observation(observation),
                );
            }
        }

        let summary = MapSummary::from_bundle(&bundle);
        tracing::info!(
            entries = summary.entries,
            patients = summary.patients,
            observations = summary.observations,
            "mapped e-form export to document bundle"
        );

        Ok(bundle)
    }

    fn composition(
        &self,
        id: String,
        practitioner_id: &str,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Composition {
        let config = &self.config;
        let author = Reference::to(PRACTITIONER_RESOURCE, practitioner_id);

        Composition {
            id: Some(id),
            identifier: Some(Identifier::new(config.system(), practitioner_id)),
            status: CompositionStatus::Final,
            kind: CodeableConcept::text(format!("{}{}", config.urn(), COMPOSITION_TYPE_TEXT)),
            subject: Some(author.clone()),
            date: format_date(now),
            author: vec![author],
            title: practitioner_id.to_string(),
        }
    }

    /// A fresh observation for one (row, column) visit.
    ///
    /// Ignored columns get everything except the value.
    fn observation(
        &self,
        row: &Record,
        column: &str,
        kind: ColumnKind,
        ignored: bool,
        patient_id: &str,
    ) -> Observation {
        let config = &self.config;
        let raw = value(row, column);
        let key = ObservationKey {
            efmfid: value(row, EFMFID_COLUMN),
            fdid: value(row, FDID_COLUMN),
            date_created: value(row, DATE_CREATED_COLUMN),
        };

        let mut observation = Observation::new(ObservationStatus::Registered);
        if !ignored {
            observation.set_value(match kind {
                ColumnKind::Numeric => ObservationValue::Integer(coerce_integer(raw)),
                ColumnKind::Text => ObservationValue::String(raw.to_string()),
            });
        }

        let id = ids::observation_id(config, key, column);
        observation.id = (!id.is_empty()).then_some(id);
        observation.identifier = vec![Identifier::new(config.system(), column)];
        observation.subject = Reference::to(PATIENT_RESOURCE, patient_id);
        observation.code = CodeableConcept::text(format!("{}{}", config.urn(), raw));
        observation
    }
}

/// Entry counts of a mapped bundle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapSummary {
    pub entries: usize,
    pub patients: usize,
    pub observations: usize,
}

impl MapSummary {
    pub fn from_bundle(bundle: &Bundle) -> Self {
        Self {
            entries: bundle.entries().len(),
            patients: bundle.patients().count(),
            observations: bundle.observations().count(),
        }
    }
}
