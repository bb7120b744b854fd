use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the query generator
    Error,
    /// Warnings and errors from the query generator
    Warn,
    /// Info, warning and error messages from the query generator
    #[default]
    Info,
    /// Debug, info, warning and error messages from the query generator
    Debug,
    /// Everything, including dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "record_gql=error,record_gql_query=error,object_metadata=error,off",
            LogLevel::Warn => "record_gql=warn,record_gql_query=warn,object_metadata=warn,off",
            LogLevel::Info => "record_gql=info,record_gql_query=info,object_metadata=info,off",
            LogLevel::Debug => "record_gql=debug,record_gql_query=debug,object_metadata=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
