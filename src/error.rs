//! Error types for the booking core.

use thiserror::Error;

/// Errors from the session gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials did not match any role. Surfaced inline to the user;
    /// the session is left unchanged.
    #[error("Invalid credentials. Please check your username and password.")]
    InvalidCredentials,
}

/// Errors from the appointment store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Errors from building an appointment draft out of form input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A required field was left empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Service name did not match any offered service
    #[error("Unknown service: '{0}'. Must be one of: Audiology, Sinus & Allergy, Throat & Voice")]
    UnknownService(String),
}
