//! Configuration module
//!
//! Configuration is loaded from environment variables at startup; every
//! struct carries defaults suitable for local development.

pub mod server;

// Re-export commonly used types
pub use server::ServerConfig;
