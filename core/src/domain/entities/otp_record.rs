//! Per-number OTP state: pending verifications and temporary blocks.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of failed verification attempts before a number is blocked
pub const MAX_ATTEMPTS: u32 = 3;

/// Default expiration time for a pending OTP (5 minutes)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 5;

/// Default duration a number stays blocked (24 hours)
pub const DEFAULT_BLOCK_HOURS: i64 = 24;

/// A pending OTP issued for a mobile number
///
/// Created when the provider accepts a send request; removed on successful
/// verification, expiry, or blocking. The code itself never passes through
/// this system - only the provider's reference for the verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The provider's reference for this verification
    pub reference_id: String,

    /// Timestamp when the OTP was requested
    pub created_at: DateTime<Utc>,

    /// Number of failed verification attempts made so far
    pub attempts: u32,
}

impl OtpRecord {
    /// Create a record for a freshly started verification
    pub fn new(reference_id: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
            created_at: Utc::now(),
            attempts: 0,
        }
    }

    /// Whether the OTP has outlived the given expiry window
    pub fn is_expired(&self, expiry_minutes: i64) -> bool {
        Utc::now() > self.created_at + Duration::minutes(expiry_minutes)
    }
}

/// A temporary block placed on a mobile number after repeated failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Timestamp after which the number may request OTPs again
    pub blocked_until: DateTime<Utc>,
}

impl BlockEntry {
    /// Create a block lasting the given number of hours from now
    pub fn new(duration_hours: i64) -> Self {
        Self {
            blocked_until: Utc::now() + Duration::hours(duration_hours),
        }
    }

    /// Whether the block has lapsed
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.blocked_until
    }
}
