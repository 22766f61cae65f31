// ============================================================================
// Auth Domain
// ============================================================================
//
// Credential-based users: email + argon2id password hash.
//
// ============================================================================

pub mod commands;
pub mod errors;
pub mod password;
pub mod service;

pub use commands::*;
pub use errors::*;
pub use password::*;
pub use service::*;
