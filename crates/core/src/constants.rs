//! Constants used throughout the core crate.
//!
//! Column names of the e-form export, environment keys read by the binaries, and the
//! fixed text fragments that end up in bundle entries.

/// Environment key for the site location code.
pub const ENV_LOCATION: &str = "GOSCAR_LOCATION";

/// Environment key for the submitting operator's username.
pub const ENV_USERNAME: &str = "USER_NAME";

/// Environment key for the identifier coding system URI.
pub const ENV_SYSTEM: &str = "GOSCAR_SYSTEM";

/// Environment key for the separator placed between identifier segments.
pub const ENV_ID_SEPARATOR: &str = "GOSCAR_ID_SEPARATOR";

/// Environment key for the resource base URN (e.g. `urn:uuid:`).
pub const ENV_URN: &str = "GOSCAR_URN";

/// Environment key for the CSV export path used by the batch runner.
pub const ENV_CSV_PATH: &str = "GOSCAR_CSV";

/// Column holding the patient's demographic number.
pub const DEMOGRAPHIC_NO_COLUMN: &str = "demographicNo";

/// Column holding the e-form definition id.
pub const EFMFID_COLUMN: &str = "efmfid";

/// Column holding the e-form data id.
pub const FDID_COLUMN: &str = "fdid";

/// Column holding the submission date.
pub const DATE_CREATED_COLUMN: &str = "dateCreated";

/// Columns whose values are never assigned to an observation.
pub const DEFAULT_IGNORED_COLUMNS: [&str; 7] = [
    "id",
    "fdid",
    "dateCreated",
    "eform_link",
    "StaffSig",
    "SubmitButton",
    "efmfid",
];

/// Appended to the URN to form the composition type text.
pub const COMPOSITION_TYPE_TEXT: &str = "E-Form";

/// Suffix of patient entry full URLs.
pub const PATIENT_URL_SUFFIX: &str = "_patient";

/// Suffix of observation entry full URLs.
pub const OBSERVATION_URL_SUFFIX: &str = "_observation";

pub const PRACTITIONER_RESOURCE: &str = "Practitioner";
pub const PATIENT_RESOURCE: &str = "Patient";
