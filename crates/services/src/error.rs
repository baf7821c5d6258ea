//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted when talking to a question provider.
///
/// The session layer does not distinguish between these: any provider failure
/// collapses to the `Unavailable` phase, and the recovery path is a restart.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("provider request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("provider reported response code {0}")]
    Api(u8),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the quiz session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("session is not complete yet")]
    NotComplete,
    #[error("no active session")]
    NotActive,
}
