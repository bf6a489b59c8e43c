use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabularError {
    #[error("failed to read input file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse delimited input {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("input file {0} has no header row")]
    EmptyInput(PathBuf),
    #[error("auto-name is on, but the header already has a 'name' column")]
    AutoNameConflict,
    #[error("invalid header: missing required columns: {}", .missing.join(", "))]
    InvalidHeader { missing: Vec<String> },
    #[error("phone prefixing is on, but the header has no 'phone' column")]
    MissingPhoneColumn,
}

pub type Result<T> = std::result::Result<T, TabularError>;
