use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Cannot fit an index over zero rows")]
    EmptyIndex,

    #[error("Cannot fit a scaler over zero columns")]
    EmptyScaler,

    #[error("Column {0} has no values to fit on")]
    EmptyColumn(usize),
}
