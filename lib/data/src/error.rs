use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

/// Data-integrity errors are fatal at startup: without a valid prepared
/// dataset the engine cannot serve any request.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read source table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode source table: {0}")]
    Csv(#[from] csv::Error),

    #[error("No rows survive the key-feature filter")]
    NoSurvivingRows,

    #[error("Column '{0}' has no observed values; mean imputation is undefined")]
    AllMissingColumn(&'static str),

    #[error("Numeric error: {0}")]
    Core(#[from] unirec_core::Error),
}
