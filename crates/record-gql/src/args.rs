use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use record_gql_query::RecordGqlFields;

mod log;

pub(crate) use log::LogLevel;

use crate::config::{Config, ConfigError};

const DEFAULT_CONFIG_PATH: &str = "./record-gql.toml";

#[derive(Debug, Parser)]
#[command(name = "record-gql", version)]
#[command(arg_required_else_help = true)]
/// Generates record GraphQL queries from an object metadata snapshot
pub(crate) struct Args {
    /// Path to the TOML configuration file. Defaults to ./record-gql.toml when it exists.
    #[arg(long, short, env = "RECORD_GQL_CONFIG")]
    pub config: Option<PathBuf>,
    /// Path to the JSON metadata snapshot, overrides `metadata_path` from the configuration
    #[arg(long, short, env = "RECORD_GQL_METADATA")]
    pub metadata: Option<PathBuf>,
    /// Set the logging level
    #[arg(long = "log", env = "RECORD_GQL_LOG")]
    pub log_level: Option<LogLevel>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Paginated query over all records of an object
    FindMany {
        /// Singular or plural name of the object
        object: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Query for a single record by id
    FindOne {
        /// Singular or plural name of the object
        object: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Selection of a single field
    Field {
        /// Singular or plural name of the object
        object: String,
        /// Name of the field
        field: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

#[derive(Debug, Default, clap::Args)]
pub(crate) struct SelectionArgs {
    /// Fields to request as JSON, e.g. '{"name": true, "company": {"name": true}}'.
    /// For `field`, the selection applies to the relation target.
    #[arg(long)]
    pub fields: Option<String>,
    /// Request relation targets as references (`__ref`)
    #[arg(long)]
    pub compute_references: bool,
}

impl SelectionArgs {
    pub fn record_gql_fields(&self) -> anyhow::Result<Option<RecordGqlFields>> {
        let Some(fields) = self.fields.as_deref() else {
            return Ok(None);
        };

        let fields = serde_json::from_str(fields).map_err(|e| anyhow::anyhow!("invalid --fields selection: {e}"))?;

        Ok(Some(fields))
    }
}

impl Args {
    /// Loads the configuration file. An explicitly given file must exist, the
    /// default one is optional.
    pub fn config(&self) -> Result<Config, ConfigError> {
        match self.config.as_deref() {
            Some(path) => Config::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Config::load(DEFAULT_CONFIG_PATH),
            None => Ok(Config::default()),
        }
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
