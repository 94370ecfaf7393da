use clap::{Parser, Subcommand};
use eform_core::constants::{ENV_ID_SEPARATOR, ENV_LOCATION, ENV_SYSTEM, ENV_URN, ENV_USERNAME};
use eform_core::{ColumnStats, IgnoredColumnPolicy, MapSummary, Mapper, MapperConfig, RecordSet};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eform")]
#[command(about = "Convert e-form CSV exports into FHIR document bundles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a CSV export to a FHIR document bundle
    Map {
        /// Path to the CSV export
        csv: PathBuf,
        /// Write the bundle here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
        /// Emit no observation at all for ignored columns
        #[arg(long)]
        skip_ignored: bool,
        /// Site location code (overrides GOSCAR_LOCATION)
        #[arg(long)]
        location: Option<String>,
        /// Submitting username (overrides USER_NAME)
        #[arg(long)]
        username: Option<String>,
        /// Identifier system URI (overrides GOSCAR_SYSTEM)
        #[arg(long)]
        system: Option<String>,
        /// Identifier separator (overrides GOSCAR_ID_SEPARATOR)
        #[arg(long)]
        separator: Option<String>,
        /// Resource base URN (overrides GOSCAR_URN)
        #[arg(long)]
        urn: Option<String>,
    },
    /// Show how each column of a CSV export would be typed
    Stats {
        /// Path to the CSV export
        csv: PathBuf,
    },
}

/// Identity values given on the command line, taking precedence over the environment.
struct Overrides {
    location: Option<String>,
    username: Option<String>,
    system: Option<String>,
    separator: Option<String>,
    urn: Option<String>,
}

impl Overrides {
    fn resolve(&self, key: &str) -> Option<String> {
        let flag = match key {
            ENV_LOCATION => self.location.as_ref(),
            ENV_USERNAME => self.username.as_ref(),
            ENV_SYSTEM => self.system.as_ref(),
            ENV_ID_SEPARATOR => self.separator.as_ref(),
            ENV_URN => self.urn.as_ref(),
            _ => None,
        };
        flag.cloned().or_else(|| std::env::var(key).ok())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Map {
            csv,
            output,
            pretty,
            skip_ignored,
            location,
            username,
            system,
            separator,
            urn,
        }) => {
            let overrides = Overrides {
                location,
                username,
                system,
                separator,
                urn,
            };
            let policy = if skip_ignored {
                IgnoredColumnPolicy::Skip
            } else {
                IgnoredColumnPolicy::ValueOnly
            };
            let config =
                MapperConfig::from_lookup(|key| overrides.resolve(key)).with_ignored_policy(policy);

            let records = RecordSet::from_csv_path(&csv)?;
            let bundle = Mapper::new(config).map(&records)?;
            let json = if pretty {
                bundle.to_json_pretty()?
            } else {
                bundle.to_json()?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    let summary = MapSummary::from_bundle(&bundle);
                    eprintln!(
                        "Wrote {} entries ({} patients, {} observations) to {}",
                        summary.entries,
                        summary.patients,
                        summary.observations,
                        path.display()
                    );
                }
                None => println!("{json}"),
            }
        }
        Some(Commands::Stats { csv }) => {
            let records = RecordSet::from_csv_path(&csv)?;
            for column in records.columns() {
                let stats = ColumnStats::compute(column, &records);
                println!("{column}: {stats}");
            }
        }
        None => {
            println!("Use 'eform --help' for commands");
        }
    }

    Ok(())
}
