//! OTP policy service: issuance, verification, and anti-abuse state

use std::sync::Arc;

use tracing::{error, info, warn};

use vg_shared::utils::phone::mask_phone_number;

use crate::domain::entities::otp_record::{BlockEntry, OtpRecord};
use crate::errors::ProviderError;

use super::config::OtpPolicyConfig;
use super::store::OtpStore;
use super::traits::VerificationProvider;
use super::types::{SendOutcome, VerifyOutcome};

/// Policy layer between the HTTP surface and the verification provider
///
/// Tracks pending OTPs and blocked numbers in the owned [`OtpStore`] and
/// converts every provider interaction into one of the fixed outcomes.
/// Neither operation ever returns an error across this boundary.
pub struct OtpPolicyService {
    /// Provider performing code generation, delivery and matching
    provider: Arc<dyn VerificationProvider>,
    /// In-memory OTP and block state
    store: Arc<OtpStore>,
    /// Policy knobs: expiry window, attempt limit, block duration
    config: OtpPolicyConfig,
}

impl OtpPolicyService {
    /// Create a new policy service over a provider and an owned store
    pub fn new(
        provider: Arc<dyn VerificationProvider>,
        store: Arc<OtpStore>,
        config: OtpPolicyConfig,
    ) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Request a new OTP for the number
    ///
    /// Blocked numbers are rejected without contacting the provider. On
    /// success a fresh [`OtpRecord`] replaces any prior pending OTP for
    /// the number. No retry is performed on provider failure.
    pub async fn send_otp(&self, phone: &str) -> SendOutcome {
        let guard = self.store.number_guard(phone).await;
        let outcome = {
            let _serialized = guard.lock().await;
            self.send_otp_locked(phone).await
        };
        drop(guard);
        self.store.release_guard_if_idle(phone).await;
        outcome
    }

    async fn send_otp_locked(&self, phone: &str) -> SendOutcome {
        if self.is_blocked(phone).await {
            warn!(
                phone = %mask_phone_number(phone),
                event = "otp_send_rejected_blocked",
                "Rejected OTP request for blocked number"
            );
            return SendOutcome::Blocked;
        }

        match self.provider.start_verification(phone).await {
            Ok(started) => {
                info!(
                    phone = %mask_phone_number(phone),
                    reference_id = %started.reference_id,
                    event = "otp_sent",
                    "Started verification for number"
                );
                self.store
                    .put_pending(phone, OtpRecord::new(started.reference_id))
                    .await;
                SendOutcome::Sent
            }
            Err(e @ (ProviderError::Api { .. } | ProviderError::Transport(_))) => {
                warn!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "otp_send_provider_error",
                    "Provider failed to start verification"
                );
                SendOutcome::ProviderUnavailable
            }
            Err(e) => {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "otp_send_unexpected_error",
                    "Unexpected failure while starting verification"
                );
                SendOutcome::Unexpected
            }
        }
    }

    /// Verify a user-submitted code for the number
    ///
    /// Blocking is checked again here even though `send_otp` already
    /// checks it: time may have passed since the send, and a block created
    /// by a concurrent verify must short-circuit this call too.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> VerifyOutcome {
        let guard = self.store.number_guard(phone).await;
        let outcome = {
            let _serialized = guard.lock().await;
            self.verify_otp_locked(phone, code).await
        };
        drop(guard);
        self.store.release_guard_if_idle(phone).await;
        outcome
    }

    async fn verify_otp_locked(&self, phone: &str, code: &str) -> VerifyOutcome {
        if self.is_blocked(phone).await {
            warn!(
                phone = %mask_phone_number(phone),
                event = "otp_verify_rejected_blocked",
                "Rejected verification for blocked number"
            );
            return VerifyOutcome::Blocked;
        }

        let Some(record) = self.store.get_pending(phone).await else {
            return VerifyOutcome::NotFound;
        };

        if record.is_expired(self.config.expiry_minutes) {
            self.store.remove_pending(phone).await;
            info!(
                phone = %mask_phone_number(phone),
                reference_id = %record.reference_id,
                event = "otp_expired",
                "Discarded expired OTP"
            );
            return VerifyOutcome::Expired;
        }

        match self.provider.check_verification(phone, code).await {
            Ok(status) if status.is_approved() => {
                self.store.remove_pending(phone).await;
                info!(
                    phone = %mask_phone_number(phone),
                    reference_id = %record.reference_id,
                    event = "otp_verified",
                    "Verification approved"
                );
                VerifyOutcome::Verified
            }
            Ok(status) => {
                let Some(attempts) = self.store.increment_attempts(phone).await else {
                    return VerifyOutcome::NotFound;
                };
                if attempts >= self.config.max_attempts {
                    self.store
                        .put_block(phone, BlockEntry::new(self.config.block_duration_hours))
                        .await;
                    self.store.remove_pending(phone).await;
                    warn!(
                        phone = %mask_phone_number(phone),
                        attempts = attempts,
                        block_duration_hours = self.config.block_duration_hours,
                        event = "number_blocked",
                        "Attempt limit reached, number blocked"
                    );
                    VerifyOutcome::NowBlocked
                } else {
                    warn!(
                        phone = %mask_phone_number(phone),
                        status = ?status,
                        attempts = attempts,
                        event = "otp_invalid",
                        "Verification not approved"
                    );
                    VerifyOutcome::Invalid
                }
            }
            Err(e @ (ProviderError::Api { .. } | ProviderError::Transport(_))) => {
                warn!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "otp_verify_provider_error",
                    "Provider failed to check verification"
                );
                VerifyOutcome::ProviderUnavailable
            }
            Err(e) => {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "otp_verify_unexpected_error",
                    "Unexpected failure while checking verification"
                );
                VerifyOutcome::Unexpected
            }
        }
    }

    /// Whether the number is currently blocked; removes a lapsed block as
    /// a side effect
    async fn is_blocked(&self, phone: &str) -> bool {
        match self.store.get_block(phone).await {
            Some(entry) if entry.is_expired() => {
                self.store.remove_block(phone).await;
                info!(
                    phone = %mask_phone_number(phone),
                    event = "block_lapsed",
                    "Block lapsed, number unblocked"
                );
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}
