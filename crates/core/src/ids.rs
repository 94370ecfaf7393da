//! Identifier and full-URL construction.
//!
//! Two families live here:
//! - logical ids, derived from configuration and record content, reproducible across
//!   runs (practitioner, patient, observation);
//! - entry full URLs for patients and observations, built from a fresh token and only
//!   unique inside one bundle.

use crate::config::MapperConfig;
use crate::constants::{OBSERVATION_URL_SUFFIX, PATIENT_URL_SUFFIX};

/// `location + separator + username`. Also the composition title.
pub fn practitioner_id(config: &MapperConfig) -> String {
    format!("{}{}{}", config.location(), config.separator(), config.username())
}

/// `location + separator + demographicNo`.
pub fn patient_id(config: &MapperConfig, demographic_no: &str) -> String {
    format!("{}{}{}", config.location(), config.separator(), demographic_no)
}

/// Source-row keys that, with the column name, determine an observation id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObservationKey<'a> {
    pub efmfid: &'a str,
    pub fdid: &'a str,
    pub date_created: &'a str,
}

/// `location, efmfid, fdid, dateCreated, column` joined by the separator, with every
/// character outside `[A-Za-z0-9]` removed.
///
/// Stripping also removes the separator itself, so segment boundaries are not
/// recoverable from the id.
pub fn observation_id(config: &MapperConfig, key: ObservationKey<'_>, column: &str) -> String {
    let sep = config.separator();
    let joined = [config.location(), key.efmfid, key.fdid, key.date_created, column].join(sep);
    joined.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Full URL of an entry addressed by its logical id.
pub fn urn_url(config: &MapperConfig, id: &str) -> String {
    format!("{}{}", config.urn(), id)
}

pub fn patient_url(config: &MapperConfig, token: &str) -> String {
    format!("{}{}{}", config.urn(), token, PATIENT_URL_SUFFIX)
}

pub fn observation_url(config: &MapperConfig, token: &str) -> String {
    format!("{}{}{}", config.urn(), token, OBSERVATION_URL_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MapperConfig {
        MapperConfig::new("clinic1", "drsmith", "https://example.org", "-", "urn:uuid:")
    }

    const KEY: ObservationKey<'static> = ObservationKey {
        efmfid: "e1",
        fdid: "f1",
        date_created: "2024-01-01 09:30:00",
    };

    #[test]
    fn practitioner_and_patient_ids_join_with_separator() {
        assert_eq!(practitioner_id(&config()), "clinic1-drsmith");
        assert_eq!(patient_id(&config(), "42"), "clinic1-42");
    }

    #[test]
    fn observation_id_strips_non_alphanumerics() {
        let id = observation_id(&config(), KEY, "blood_pressure (sys)");
        assert_eq!(id, "clinic1e1f120240101093000bloodpressuresys");
    }

    #[test]
    fn observation_id_depends_only_on_key_and_column() {
        let a = observation_id(&config(), KEY, "age");
        let b = observation_id(&config(), KEY, "age");
        let c = observation_id(&config(), KEY, "notes");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn missing_configuration_degrades_to_empty_segments() {
        let config = MapperConfig::default();
        assert_eq!(practitioner_id(&config), "");
        assert_eq!(patient_id(&config, "42"), "42");
        assert_eq!(observation_id(&config, KEY, "age"), "e1f120240101093000age");
        assert_eq!(urn_url(&config, "x"), "x");
    }

    #[test]
    fn entry_urls_use_urn_token_and_suffix() {
        assert_eq!(urn_url(&config(), "clinic1-drsmith"), "urn:uuid:clinic1-drsmith");
        assert_eq!(patient_url(&config(), "t1"), "urn:uuid:t1_patient");
        assert_eq!(observation_url(&config(), "t1"), "urn:uuid:t1_observation");
    }
}
