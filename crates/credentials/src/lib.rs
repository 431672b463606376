//! Password credential handling for Gatherly.
//!
//! This crate provides:
//! - Salted PBKDF2-HMAC-SHA256 password hashing
//! - Constant-time password verification

mod password;

pub use password::*;

/// Number of PBKDF2 iterations applied when deriving a password hash.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length in bytes of the per-password random salt.
pub const SALT_LEN: usize = 32;
