//! Twilio Verify provider implementation
//!
//! Drives the Twilio Verify v2 REST API. Code generation, SMS delivery and
//! code matching all happen on Twilio's side; this client only performs the
//! two calls the policy layer needs:
//!
//! - `POST /v2/Services/{ServiceSid}/Verifications` to start a verification
//! - `POST /v2/Services/{ServiceSid}/VerificationCheck` to check a code
//!
//! Phone numbers are masked in all log output.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info};

use vg_core::errors::{ProviderError, ProviderResult};
use vg_core::services::otp::{StartedVerification, VerificationProvider, VerificationStatus};
use vg_shared::utils::phone::mask_phone_number;

use crate::InfrastructureError;

const VERIFY_API_BASE: &str = "https://verify.twilio.com/v2";

/// Twilio Verify configuration
#[derive(Debug, Clone)]
pub struct TwilioVerifyConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Verify service SID hosting the OTP configuration
    pub service_sid: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioVerifyConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let service_sid = std::env::var("TWILIO_VERIFY_SERVICE_SID").map_err(|_| {
            InfrastructureError::Config("TWILIO_VERIFY_SERVICE_SID not set".to_string())
        })?;

        if !service_sid.starts_with("VA") {
            return Err(InfrastructureError::Config(
                "TWILIO_VERIFY_SERVICE_SID must be a Verify service SID (starting with 'VA')"
                    .to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            service_sid,
            request_timeout_secs: std::env::var("TWILIO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Error body returned by the Twilio API
#[derive(Debug, Deserialize)]
struct TwilioApiError {
    code: Option<u32>,
    message: Option<String>,
}

/// Subset of the verification resource we care about
#[derive(Debug, Deserialize)]
struct VerificationResource {
    sid: String,
    status: String,
}

/// Subset of the verification check resource we care about
#[derive(Debug, Deserialize)]
struct VerificationCheckResource {
    status: String,
}

/// Twilio Verify provider
///
/// The account credentials are bound to the HTTP client once at
/// construction; every request authenticates with HTTP basic auth.
pub struct TwilioVerifyProvider {
    client: reqwest::Client,
    config: TwilioVerifyConfig,
}

impl TwilioVerifyProvider {
    /// Create a new provider from the given configuration
    pub fn new(config: TwilioVerifyConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Twilio Verify provider initialized for service {}",
            config.service_sid
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(TwilioVerifyConfig::from_env()?)
    }

    fn verifications_url(&self) -> String {
        format!(
            "{}/Services/{}/Verifications",
            VERIFY_API_BASE, self.config.service_sid
        )
    }

    fn verification_check_url(&self) -> String {
        format!(
            "{}/Services/{}/VerificationCheck",
            VERIFY_API_BASE, self.config.service_sid
        )
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> ProviderResult<T> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(form)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let api_error: TwilioApiError = serde_json::from_str(&body)
                .unwrap_or(TwilioApiError {
                    code: None,
                    message: None,
                });
            error!(
                "Twilio API request failed with HTTP {} (code {:?})",
                status, api_error.code
            );
            return Err(ProviderError::Api {
                code: api_error.code,
                message: api_error
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", status)),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Unexpected(format!("malformed provider response: {}", e)))
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyProvider {
    async fn start_verification(&self, phone: &str) -> ProviderResult<StartedVerification> {
        debug!(
            "Starting SMS verification for {}",
            mask_phone_number(phone)
        );

        let resource: VerificationResource = self
            .post_form(&self.verifications_url(), &[("To", phone), ("Channel", "sms")])
            .await?;

        info!(
            "Verification {} started for {} (status: {})",
            resource.sid,
            mask_phone_number(phone),
            resource.status
        );

        Ok(StartedVerification {
            reference_id: resource.sid,
        })
    }

    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> ProviderResult<VerificationStatus> {
        debug!(
            "Checking verification code for {}",
            mask_phone_number(phone)
        );

        let resource: VerificationCheckResource = self
            .post_form(&self.verification_check_url(), &[("To", phone), ("Code", code)])
            .await?;

        Ok(VerificationStatus::from_provider(&resource.status))
    }
}
