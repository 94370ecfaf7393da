use std::path::PathBuf;

use anyhow::Context;
use eform_core::constants::ENV_CSV_PATH;
use eform_core::{Mapper, MapperConfig, RecordSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Batch entry point: map one e-form CSV export to a FHIR document bundle.
///
/// Reads the export named by the first argument (or `GOSCAR_CSV`), maps it with the
/// identity values from the environment and writes the bundle JSON to stdout. Logs go
/// to stderr.
///
/// # Environment Variables
/// - `GOSCAR_LOCATION`: site location code
/// - `USER_NAME`: submitting operator
/// - `GOSCAR_SYSTEM`: identifier system URI
/// - `GOSCAR_ID_SEPARATOR`: identifier segment separator
/// - `GOSCAR_URN`: resource base URN
/// - `GOSCAR_CSV`: export path when no argument is given
///
/// Unset identity values are treated as empty strings.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eform_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let csv_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(ENV_CSV_PATH).map(PathBuf::from))
        .with_context(|| format!("usage: eform-run <export.csv> (or set {ENV_CSV_PATH})"))?;

    tracing::info!("++ Mapping e-form export {}", csv_path.display());

    let config = MapperConfig::from_lookup(|key| std::env::var(key).ok());
    let records = RecordSet::from_csv_path(&csv_path)?;
    let bundle = Mapper::new(config).map(&records)?;

    println!("{}", bundle.to_json()?);

    Ok(())
}
