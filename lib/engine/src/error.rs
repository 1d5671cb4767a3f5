use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Dataset error: {0}")]
    Data(#[from] unirec_data::DataError),

    #[error("Numeric error: {0}")]
    Core(#[from] unirec_core::Error),
}
