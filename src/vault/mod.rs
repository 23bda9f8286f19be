//! Vault container format — text framing and the encode/decode codec.
//!
//! This module provides:
//! - Header parsing and 80-column body wrapping (`format`)
//! - The container codec tying derivation, encryption, and
//!   authentication together (`codec`)

pub mod codec;
pub mod format;

// Re-export the most commonly used items.
pub use codec::{decode, decode_file, encode, encode_file, write_container};
pub use format::ParsedVault;
