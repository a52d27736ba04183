//! OTP route handlers
//!
//! Endpoints for requesting one-time passcodes and verifying
//! user-submitted codes.

pub mod send;
pub mod verify;

pub use send::AppState;
