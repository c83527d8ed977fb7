// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Command must contain at least an executable token")]
    EmptyCommand,

    #[error("Step name must not be empty")]
    EmptyStepName,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
