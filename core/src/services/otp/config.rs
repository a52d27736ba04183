//! Configuration for the OTP policy service

use crate::domain::entities::otp_record::{
    DEFAULT_BLOCK_HOURS, DEFAULT_EXPIRY_MINUTES, MAX_ATTEMPTS,
};

/// Configuration for the OTP policy service
#[derive(Debug, Clone)]
pub struct OtpPolicyConfig {
    /// Number of minutes before a pending OTP expires
    pub expiry_minutes: i64,
    /// Number of failed attempts before a number is blocked
    pub max_attempts: u32,
    /// Number of hours a blocked number stays blocked
    pub block_duration_hours: i64,
}

impl Default for OtpPolicyConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            block_duration_hours: DEFAULT_BLOCK_HOURS,
        }
    }
}

impl OtpPolicyConfig {
    /// Load overrides from `OTP_EXPIRY_MINUTES`, `OTP_MAX_ATTEMPTS` and
    /// `OTP_BLOCK_DURATION_HOURS`, falling back to the defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            expiry_minutes: env_or("OTP_EXPIRY_MINUTES", defaults.expiry_minutes),
            max_attempts: env_or("OTP_MAX_ATTEMPTS", defaults.max_attempts),
            block_duration_hours: env_or("OTP_BLOCK_DURATION_HOURS", defaults.block_duration_hours),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
