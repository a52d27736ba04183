//! # VerifyGate Core
//!
//! Core policy layer for the VerifyGate backend. This crate contains the
//! domain entities, the OTP policy service with its owned in-memory state
//! store, the verification provider seam, and error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
