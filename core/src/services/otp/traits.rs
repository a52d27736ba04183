//! Trait for the external verification provider integration

use async_trait::async_trait;

use crate::errors::ProviderResult;

use super::types::{StartedVerification, VerificationStatus};

/// Remote capability that generates and delivers OTP codes over SMS and
/// checks user-submitted codes. Implementations live in the infra crate;
/// the policy layer only sees this seam.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Ask the provider to start a verification for the number over the
    /// SMS channel
    async fn start_verification(&self, phone: &str) -> ProviderResult<StartedVerification>;

    /// Check a user-submitted code for the number
    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> ProviderResult<VerificationStatus>;
}
