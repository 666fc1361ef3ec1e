//! Error types for the business plan engine
//!
//! Each subsystem has its own error enum; `Error` wraps them so callers
//! that drive the whole plan (CLI, session facade) can use a single `?`.

use thiserror::Error;

/// A raw field edit that could not be read as a finite number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("empty value")]
    Empty,

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("value is not finite: {0:?}")]
    NotFinite(String),
}

/// Errors raised while editing the parameter set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("unknown business plan field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: {source}")]
    InvalidValue {
        field: String,
        #[source]
        source: ParseValueError,
    },
}

/// Errors raised by the key-value store or the persisted record codec
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("refusing to save non-finite value for {0}")]
    NonFinite(&'static str),
}

/// Errors raised while producing or writing an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writer error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

/// Top-level error for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
