//! Error types for the OTP policy layer.

use thiserror::Error;

/// Failures reported while talking to the external verification provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider rejected the request with a typed API error
    /// (invalid number, unknown service, misconfigured account)
    #[error("provider API error {code:?}: {message}")]
    Api { code: Option<u32>, message: String },

    /// The provider could not be reached
    #[error("provider unreachable: {0}")]
    Transport(String),

    /// Anything else, such as a malformed provider response
    #[error("unexpected provider failure: {0}")]
    Unexpected(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
