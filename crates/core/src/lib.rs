//! # e-form core
//!
//! Maps an e-form export (rows of column name to raw value) into a single FHIR document
//! bundle:
//! - one Composition and one Practitioner for the submitting operator
//! - one Patient per distinct `demographicNo`
//! - one Observation per row and column
//!
//! **No I/O concerns beyond ingest**: the core never reads process environment and never
//! sends the bundle anywhere. Configuration is resolved by the binaries and passed in as
//! a [`MapperConfig`].

pub mod clock;
pub mod column;
pub mod config;
pub mod constants;
pub mod dedup;
pub mod error;
pub mod ids;
pub mod mapper;
pub mod records;

pub use clock::{Clock, FixedClock, SystemClock};
pub use column::{ColumnKind, ColumnStats, ColumnTyper, StatsColumnTyper};
pub use config::{IgnoredColumnPolicy, MapperConfig};
pub use error::{IngestError, IngestResult, MapError, MapResult};
pub use mapper::{MapSummary, Mapper};
pub use records::{Record, RecordSet};
