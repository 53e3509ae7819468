//! Error types shared by the API layer and the auth forms.
//!
//! ERROR HANDLING
//! ==============
//! Library code returns these through `Result`; only components turn them
//! into alert dialogs or log lines.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a nominal REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-2xx status.
    #[error("{endpoint} failed: {status}")]
    Status { endpoint: &'static str, status: u16 },
    /// The response body was not valid JSON.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called from a build without browser networking.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Client-side validation failure on one of the auth forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Enter the 6-character code.")]
    IncompleteCode,
    #[error("Please wait for the current request to finish.")]
    Busy,
}
