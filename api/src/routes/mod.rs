//! HTTP route handlers

pub mod otp;

pub use otp::AppState;
