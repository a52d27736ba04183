//! Types for provider responses and OTP policy outcomes

/// A verification successfully started with the provider
#[derive(Debug, Clone)]
pub struct StartedVerification {
    /// The provider's reference for the verification
    pub reference_id: String,
}

/// Status the provider reports for a checked code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// The submitted code matched
    Approved,
    /// The verification is still open (the code did not match)
    Pending,
    /// The provider canceled the verification
    Canceled,
}

impl VerificationStatus {
    /// Decode a provider status string; anything unrecognized counts as
    /// still pending, i.e. a failed attempt
    pub fn from_provider(status: &str) -> Self {
        match status {
            "approved" => Self::Approved,
            "canceled" => Self::Canceled,
            _ => Self::Pending,
        }
    }

    pub fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Outcome of a send-OTP request
///
/// Every variant maps to exactly one fixed user-facing message; the
/// operation never fails across the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The provider accepted the request and an OTP is on its way
    Sent,
    /// The number is blocked; the provider was not contacted
    Blocked,
    /// The provider reported a failure or could not be reached
    ProviderUnavailable,
    /// Something else went wrong
    Unexpected,
}

impl SendOutcome {
    /// The fixed user-facing message for this outcome
    pub fn message(self) -> &'static str {
        match self {
            Self::Sent => "OTP sent successfully",
            Self::Blocked => {
                "Number is blocked due to multiple incorrect attempts. \
                 Please try again after 24 hours."
            }
            Self::ProviderUnavailable => "Error sending OTP. Please try again later.",
            Self::Unexpected => "Unexpected error occurred. Please try again later.",
        }
    }
}

/// Outcome of a verify-OTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The code matched; the pending OTP is consumed
    Verified,
    /// The code did not match; attempts remain
    Invalid,
    /// The code did not match and the attempt limit was reached;
    /// the number is now blocked
    NowBlocked,
    /// The number is blocked
    Blocked,
    /// No pending OTP exists for the number
    NotFound,
    /// The pending OTP outlived its expiry window and was discarded
    Expired,
    /// The provider reported a failure or could not be reached
    ProviderUnavailable,
    /// Something else went wrong
    Unexpected,
}

impl VerifyOutcome {
    /// The fixed user-facing message for this outcome
    pub fn message(self) -> &'static str {
        match self {
            Self::Verified => "OTP verified successfully! You are now logged in.",
            Self::Invalid => "Invalid OTP!",
            Self::NowBlocked => {
                "Invalid OTP! Number is now blocked due to multiple incorrect attempts."
            }
            Self::Blocked => {
                "Number is blocked due to multiple incorrect attempts. \
                 Please try again after 24 hours."
            }
            Self::NotFound => "OTP not found or expired",
            Self::Expired => "OTP expired. Please request a new one.",
            Self::ProviderUnavailable => "Error verifying OTP. Please try again later.",
            Self::Unexpected => "Unexpected error occurred. Please try again later.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_decoding() {
        assert_eq!(
            VerificationStatus::from_provider("approved"),
            VerificationStatus::Approved
        );
        assert_eq!(
            VerificationStatus::from_provider("canceled"),
            VerificationStatus::Canceled
        );
        assert_eq!(
            VerificationStatus::from_provider("pending"),
            VerificationStatus::Pending
        );
        // Unknown statuses count as a failed attempt
        assert_eq!(
            VerificationStatus::from_provider("max_attempts_reached"),
            VerificationStatus::Pending
        );
    }

    #[test]
    fn test_send_messages_are_fixed() {
        assert_eq!(SendOutcome::Sent.message(), "OTP sent successfully");
        assert_eq!(
            SendOutcome::Blocked.message(),
            "Number is blocked due to multiple incorrect attempts. Please try again after 24 hours."
        );
        assert_eq!(
            SendOutcome::ProviderUnavailable.message(),
            "Error sending OTP. Please try again later."
        );
        assert_eq!(
            SendOutcome::Unexpected.message(),
            "Unexpected error occurred. Please try again later."
        );
    }

    #[test]
    fn test_verify_messages_are_fixed() {
        assert_eq!(
            VerifyOutcome::Verified.message(),
            "OTP verified successfully! You are now logged in."
        );
        assert_eq!(VerifyOutcome::Invalid.message(), "Invalid OTP!");
        assert_eq!(
            VerifyOutcome::NowBlocked.message(),
            "Invalid OTP! Number is now blocked due to multiple incorrect attempts."
        );
        assert_eq!(VerifyOutcome::NotFound.message(), "OTP not found or expired");
        assert_eq!(
            VerifyOutcome::Expired.message(),
            "OTP expired. Please request a new one."
        );
        assert_eq!(
            VerifyOutcome::ProviderUnavailable.message(),
            "Error verifying OTP. Please try again later."
        );
    }
}
