//! Request and response data transfer objects

pub mod otp;

pub use otp::{OtpResponse, SendOtpRequest, VerifyOtpRequest};
