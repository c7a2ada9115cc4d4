//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id, zeroized cleartext handling)
//! - Cookie building and extraction
//! - Small cryptographic utilities (random bytes, Base64)

pub mod cookie;
pub mod crypto;
pub mod password;
