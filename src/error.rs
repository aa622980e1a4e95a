use thiserror::Error;

/// Message carried by [`UserError::ValidationError`] when a minor is registered.
pub const UNDERAGE_MESSAGE: &str = "O usuário deve ser maior de idade.";

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("{0}")]
    ValidationError(String),
    #[error("User already exists: {0}")]
    AlreadyExists(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    pub fn underage() -> Self {
        UserError::ValidationError(UNDERAGE_MESSAGE.to_string())
    }
}
