//! Mapping run configuration.
//!
//! Identity values are resolved once at startup (see [`MapperConfig::from_lookup`]) and
//! then passed into the mapper. The core never reads process-wide environment
//! variables itself; the binaries do that after loading `.env`.

use crate::constants::{
    DEFAULT_IGNORED_COLUMNS, ENV_ID_SEPARATOR, ENV_LOCATION, ENV_SYSTEM, ENV_URN, ENV_USERNAME,
};
use std::collections::BTreeSet;

/// How ignored columns are treated during the column phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IgnoredColumnPolicy {
    /// Ignored columns still produce an observation (id, subject, status, code) but no
    /// value is assigned.
    #[default]
    ValueOnly,
    /// Ignored columns produce no observation at all.
    Skip,
}

/// Identity configuration for one mapping run.
///
/// Missing values are empty strings; they degrade to empty identifier segments rather
/// than failing the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapperConfig {
    location: String,
    username: String,
    system: String,
    separator: String,
    urn: String,
    ignored_columns: BTreeSet<String>,
    ignored_policy: IgnoredColumnPolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self::new("", "", "", "", "")
    }
}

impl MapperConfig {
    /// Create a config with the default ignore list and [`IgnoredColumnPolicy::ValueOnly`].
    pub fn new(
        location: impl Into<String>,
        username: impl Into<String>,
        system: impl Into<String>,
        separator: impl Into<String>,
        urn: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            username: username.into(),
            system: system.into(),
            separator: separator.into(),
            urn: urn.into(),
            ignored_columns: DEFAULT_IGNORED_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            ignored_policy: IgnoredColumnPolicy::default(),
        }
    }

    /// Resolve the identity values through `lookup`, keyed by the `GOSCAR_*`/`USER_NAME`
    /// environment names.
    ///
    /// Pass `|key| std::env::var(key).ok()` from a binary; tests pass a map lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).unwrap_or_default();
        Self::new(
            value(ENV_LOCATION),
            value(ENV_USERNAME),
            value(ENV_SYSTEM),
            value(ENV_ID_SEPARATOR),
            value(ENV_URN),
        )
    }

    /// Replace the ignore list.
    pub fn with_ignored_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ignored_policy(mut self, policy: IgnoredColumnPolicy) -> Self {
        self.ignored_policy = policy;
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn urn(&self) -> &str {
        &self.urn
    }

    pub fn ignored_policy(&self) -> IgnoredColumnPolicy {
        self.ignored_policy
    }

    pub fn ignored_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.ignored_columns.iter().map(String::as_str)
    }

    pub fn is_ignored(&self, column: &str) -> bool {
        self.ignored_columns.contains(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn from_lookup_reads_every_key() {
        let env: HashMap<&str, &str> = [
            (ENV_LOCATION, "clinic1"),
            (ENV_USERNAME, "drsmith"),
            (ENV_SYSTEM, "https://example.org/ids"),
            (ENV_ID_SEPARATOR, "-"),
            (ENV_URN, "urn:uuid:"),
        ]
        .into_iter()
        .collect();

        let config = MapperConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.location(), "clinic1");
        assert_eq!(config.username(), "drsmith");
        assert_eq!(config.system(), "https://example.org/ids");
        assert_eq!(config.separator(), "-");
        assert_eq!(config.urn(), "urn:uuid:");
    }

    #[test]
    fn missing_values_become_empty_strings() {
        let config = MapperConfig::from_lookup(|_| None);
        assert_eq!(config, MapperConfig::default());
        assert_eq!(config.location(), "");
        assert_eq!(config.urn(), "");
    }

    #[test]
    fn default_ignore_list_and_policy() {
        let config = MapperConfig::default();
        for column in DEFAULT_IGNORED_COLUMNS {
            assert!(config.is_ignored(column), "{column} should be ignored");
        }
        assert!(!config.is_ignored("demographicNo"));
        assert_eq!(config.ignored_policy(), IgnoredColumnPolicy::ValueOnly);
    }

    #[test]
    fn ignore_list_can_be_replaced() {
        let config = MapperConfig::default()
            .with_ignored_columns(["fdid", "efmfid"])
            .with_ignored_policy(IgnoredColumnPolicy::Skip);
        assert!(config.is_ignored("fdid"));
        assert!(!config.is_ignored("dateCreated"));
        assert_eq!(config.ignored_columns().count(), 2);
        assert_eq!(config.ignored_policy(), IgnoredColumnPolicy::Skip);
    }
}
