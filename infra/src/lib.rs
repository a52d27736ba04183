//! # Infrastructure Layer
//!
//! Implementations of the external capabilities the core policy layer
//! depends on. Today that is a single seam: the verification provider
//! (Twilio Verify in production, a console mock for development).

pub mod provider;

// Re-export commonly used types
pub use provider::{
    create_verification_provider, MockVerificationProvider, TwilioVerifyConfig,
    TwilioVerifyProvider,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction or request error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
