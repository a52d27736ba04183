//! Mock verification provider implementation
//!
//! Logs verifications to the console instead of calling out to Twilio. The
//! accepted code is fixed so the whole flow can be exercised locally
//! without a provider account.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use vg_core::errors::{ProviderError, ProviderResult};
use vg_core::services::otp::{StartedVerification, VerificationProvider, VerificationStatus};
use vg_shared::utils::phone::{is_valid_phone_number, mask_phone_number};

/// The code the mock provider approves
pub const MOCK_ACCEPTED_CODE: &str = "123456";

/// Mock verification provider for development and testing
#[derive(Clone)]
pub struct MockVerificationProvider {
    /// Counter for started verifications
    started_count: Arc<AtomicU64>,
    /// Whether to simulate provider failures (for testing)
    simulate_failure: bool,
}

impl MockVerificationProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            started_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock that fails every call with a provider API error
    pub fn failing() -> Self {
        Self {
            started_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Total number of verifications started so far
    pub fn started_count(&self) -> u64 {
        self.started_count.load(Ordering::SeqCst)
    }
}

impl Default for MockVerificationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationProvider for MockVerificationProvider {
    async fn start_verification(&self, phone: &str) -> ProviderResult<StartedVerification> {
        if !is_valid_phone_number(phone) {
            return Err(ProviderError::Api {
                code: Some(60200),
                message: format!("Invalid parameter `To`: {}", mask_phone_number(phone)),
            });
        }

        if self.simulate_failure {
            warn!(
                "Mock provider simulating failure for {}",
                mask_phone_number(phone)
            );
            return Err(ProviderError::Api {
                code: Some(60203),
                message: "Simulated provider failure".to_string(),
            });
        }

        let reference_id = format!("VE{}", Uuid::new_v4().simple());
        let count = self.started_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            "Mock verification #{} started for {} as {}; accepted code is {}",
            count,
            mask_phone_number(phone),
            reference_id,
            MOCK_ACCEPTED_CODE
        );

        Ok(StartedVerification { reference_id })
    }

    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> ProviderResult<VerificationStatus> {
        if self.simulate_failure {
            return Err(ProviderError::Api {
                code: Some(60203),
                message: "Simulated provider failure".to_string(),
            });
        }

        let status = if code == MOCK_ACCEPTED_CODE {
            VerificationStatus::Approved
        } else {
            VerificationStatus::Pending
        };

        info!(
            "Mock verification check for {}: {:?}",
            mask_phone_number(phone),
            status
        );

        Ok(status)
    }
}
