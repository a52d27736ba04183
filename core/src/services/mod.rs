//! Business services containing the OTP policy logic.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    OtpPolicyConfig, OtpPolicyService, OtpStore, SendOutcome, StartedVerification,
    VerificationProvider, VerificationStatus, VerifyOutcome,
};
