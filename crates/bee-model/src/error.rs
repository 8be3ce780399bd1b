use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid column name: {0:?}")]
    InvalidColumnName(String),
    #[error("invalid period: {0:?}")]
    InvalidPeriod(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
