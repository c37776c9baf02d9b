use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the benchmark driver
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Failed to parse configuration: {0}")]
    ConfigError(String),

    #[error("error unknown file format for file \"{0}\"")]
    UnknownFormat(String),

    #[error("Failed to launch {}: {source}", .program.display())]
    LaunchError {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed metrics output: {0}")]
    MetricsParseError(String),

    #[error("Environment error: {0}")]
    EnvironmentError(String),

    #[error("Failed to write report: {0}")]
    ReportError(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Utility functions for working with BenchError
pub mod util {
    use super::*;
    use std::path::Path;

    /// Check if a file exists, returning a FileNotFound error if it doesn't
    pub fn ensure_file_exists<P: AsRef<Path>>(path: P) -> BenchResult<()> {
        let path_ref = path.as_ref();
        if !path_ref.is_file() {
            return Err(BenchError::FileNotFound(path_ref.to_path_buf()));
        }
        Ok(())
    }

    /// Wrap a displayable error as a configuration error with context
    pub fn to_config_error<E: fmt::Display>(e: E, context: &str) -> BenchError {
        BenchError::ConfigError(format!("{}: {}", context, e))
    }
}

impl From<toml::de::Error> for BenchError {
    fn from(err: toml::de::Error) -> Self {
        BenchError::ConfigError(err.to_string())
    }
}
