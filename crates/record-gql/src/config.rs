use std::path::{Path, PathBuf};

use crate::args::LogLevel;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("reading configuration from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Settings read from `record-gql.toml`. Command line arguments take precedence.
pub(crate) struct Config {
    /// Location of the JSON metadata snapshot
    pub metadata_path: Option<PathBuf>,
    /// Logging level when `--log` is not given
    pub log_level: Option<LogLevel>,
    /// Request relation targets as references in every generated query
    pub compute_references: bool,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }
}
