//! Verification provider implementations
//!
//! - **Twilio Verify**: production provider driving the Verify v2 REST API
//! - **Mock**: console output for development and tests

use std::sync::Arc;

use vg_core::services::otp::VerificationProvider;

pub mod mock;
pub mod twilio_verify;

// Re-export commonly used types
pub use mock::MockVerificationProvider;
pub use twilio_verify::{TwilioVerifyConfig, TwilioVerifyProvider};

/// Create a verification provider from the `VERIFICATION_PROVIDER`
/// environment variable ("twilio" or "mock")
///
/// Falls back to the mock provider when Twilio credentials are missing or
/// invalid, so the service still comes up in development environments.
pub fn create_verification_provider() -> Arc<dyn VerificationProvider> {
    let provider =
        std::env::var("VERIFICATION_PROVIDER").unwrap_or_else(|_| "mock".to_string());

    match provider.as_str() {
        "twilio" => match TwilioVerifyProvider::from_env() {
            Ok(service) => Arc::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize Twilio Verify provider: {}", e);
                tracing::warn!("Falling back to mock verification provider");
                Arc::new(MockVerificationProvider::new())
            }
        },
        "mock" => Arc::new(MockVerificationProvider::new()),
        other => {
            tracing::warn!(
                "Unknown verification provider '{}', using mock implementation",
                other
            );
            Arc::new(MockVerificationProvider::new())
        }
    }
}
