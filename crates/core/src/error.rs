// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Execution error: {0}")]
    Execution(#[from] crate::port::ExecutionError),

    #[error("Ligand extraction error: {0}")]
    Ligand(#[from] crate::application::ligands::LigandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ligands::LigandError;
    use crate::domain::DomainError;
    use crate::port::ExecutionError;

    #[test]
    fn test_error_kinds_convert_into_app_error() {
        let domain: AppError = DomainError::EmptyCommand.into();
        assert!(matches!(domain, AppError::Domain(_)));

        let execution: AppError = ExecutionError::Unexpected {
            step_name: "align".to_string(),
            message: "broken pipe".to_string(),
        }
        .into();
        assert!(matches!(execution, AppError::Execution(_)));

        let ligand: AppError = LigandError::FileAccess {
            path: "member.pdb".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert!(matches!(ligand, AppError::Ligand(_)));
    }

    #[test]
    fn test_messages_name_the_offending_input() {
        let err: AppError = ExecutionError::ExecutableNotFound {
            step_name: "align".to_string(),
            executable: "siena".to_string(),
        }
        .into();
        let message = err.to_string();
        assert!(message.contains("siena"));
        assert!(message.contains("align"));
    }
}
