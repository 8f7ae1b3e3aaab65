use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Capacity must be greater than 0")]
    ZeroCapacity,

    #[error("False positive rate must be between 0 and 1, got {rate}")]
    InvalidFalsePositiveRate { rate: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
