//! Cryptographic primitives for the vault codec.
//!
//! This module provides:
//! - AES-256-CTR encryption with the vault padding scheme (`cipher`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - HMAC-SHA256 ciphertext authentication (`mac`)

pub mod cipher;
pub mod kdf;
pub mod mac;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_keys, generate_salt, ...};
pub use kdf::{derive_keys, generate_salt, DerivedKeys};
