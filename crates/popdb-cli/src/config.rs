use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::NaiveDate;
use popdb_core::construct_db_uri_with;

use crate::CliError;

/// A database to populate: display name plus the type tag that selects the
/// URI scheme and the `<TAG>_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub name: String,
    pub type_tag: String,
}

impl TargetConfig {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Connection URI with the `<TAG>_*` variables resolved through `lookup`.
    pub fn uri_with<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        construct_db_uri_with(&self.type_tag, lookup)
    }
}

/// Parses `NAME=TYPE_TAG`, or a bare `TYPE_TAG` used as its own name.
impl FromStr for TargetConfig {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, tag) = match value.split_once('=') {
            Some((name, tag)) => (name.trim(), tag.trim()),
            None => (value.trim(), value.trim()),
        };
        if name.is_empty() || tag.is_empty() {
            return Err(format!("expected NAME=TYPE_TAG, got '{value}'"));
        }
        Ok(Self::new(name, tag))
    }
}

/// The configured targets when none are given on the command line.
pub fn default_targets() -> Vec<TargetConfig> {
    vec![TargetConfig::new("postgres", "postgresql")]
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    pub targets: Vec<TargetConfig>,
    pub rows: usize,
    pub seed: Option<u64>,
    pub reference_date: NaiveDate,
}

impl PopulateConfig {
    pub fn new(
        targets: Vec<TargetConfig>,
        rows: usize,
        seed: Option<u64>,
        reference_date: NaiveDate,
    ) -> Result<Self, CliError> {
        let targets = if targets.is_empty() {
            default_targets()
        } else {
            targets
        };

        let mut names = BTreeSet::new();
        for target in &targets {
            if !names.insert(target.name.as_str()) {
                return Err(CliError::InvalidConfig(format!(
                    "duplicate target name: {}",
                    target.name
                )));
            }
        }

        if rows == 0 {
            return Err(CliError::InvalidConfig(
                "row count must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            targets,
            rows,
            seed,
            reference_date,
        })
    }
}

/// Engine behind a type tag; only Postgres has an adapter.
pub fn detect_engine(type_tag: &str) -> Result<&'static str, CliError> {
    match type_tag {
        "postgres" | "postgresql" => Ok("postgres"),
        other => Err(CliError::UnsupportedEngine(other.to_string())),
    }
}
