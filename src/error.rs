// src/error.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("no character class selected")]
    EmptySelection,

    #[error("unknown character class: {0}")]
    UnknownClass(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
