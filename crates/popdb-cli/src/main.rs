mod config;
mod logging;
mod run;

use chrono::NaiveDate;
use clap::Parser;
use popdb_generate::GenerationError;
use popdb_store::{DEFAULT_ROW_COUNT, StoreError};
use thiserror::Error;

use config::{PopulateConfig, TargetConfig};
use logging::{LogFormat, init_logging};
use run::{DatabaseConnector, run};

#[derive(Debug, Error)]
enum CliError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unsupported engine: {0}")]
    UnsupportedEngine(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "popdb",
    version,
    about = "Recreate the persons table and fill it with synthetic records"
)]
struct Cli {
    /// Target database as NAME=TYPE_TAG; repeat for several. Defaults to postgres=postgresql.
    #[arg(long = "target", value_name = "NAME=TYPE_TAG")]
    targets: Vec<TargetConfig>,
    /// Records written per target.
    #[arg(long, default_value_t = DEFAULT_ROW_COUNT)]
    rows: usize,
    /// Seed for reproducible records; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Date birth dates are drawn back from (defaults to today, UTC).
    #[arg(long, value_name = "YYYY-MM-DD")]
    reference_date: Option<NaiveDate>,
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    let reference_date = cli
        .reference_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let config = PopulateConfig::new(cli.targets, cli.rows, cli.seed, reference_date)?;

    run(&config, &DatabaseConnector, &|name| std::env::var(name).ok()).await
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["popdb"]).expect("parse");
        assert!(cli.targets.is_empty());
        assert_eq!(cli.rows, 100);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.reference_date, None);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn parses_repeated_targets_and_options() {
        let cli = Cli::try_parse_from([
            "popdb",
            "--target",
            "primary=postgresql",
            "--target",
            "replica=postgres",
            "--rows",
            "5",
            "--seed",
            "7",
            "--reference-date",
            "2024-03-01",
            "--log-format",
            "json",
        ])
        .expect("parse");
        assert_eq!(
            cli.targets,
            vec![
                TargetConfig::new("primary", "postgresql"),
                TargetConfig::new("replica", "postgres"),
            ]
        );
        assert_eq!(cli.rows, 5);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.reference_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_malformed_target() {
        assert!(Cli::try_parse_from(["popdb", "--target", "=postgresql"]).is_err());
    }
}
