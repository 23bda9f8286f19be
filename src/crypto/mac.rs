//! HMAC-SHA256 authentication of the ciphertext.
//!
//! The tag covers the raw ciphertext bytes only — not the salt and not
//! the header.  Verification runs before any decryption is attempted.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{AvToolError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 tag over the ciphertext.
pub fn compute(hmac_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(hmac_key)
        .map_err(|e| AvToolError::HmacError(format!("invalid HMAC key: {e}")))?;

    mac.update(ciphertext);

    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify the stored tag against the ciphertext.
///
/// Uses `hmac::Mac::verify_slice`, which is guaranteed constant-time,
/// preventing timing side-channel attacks.  A mismatch means a wrong
/// password or a tampered container; no plaintext is ever produced.
pub fn verify(hmac_key: &[u8], ciphertext: &[u8], expected: &[u8]) -> Result<()> {
    let mut mac = HmacSha256::new_from_slice(hmac_key)
        .map_err(|e| AvToolError::HmacError(format!("invalid HMAC key: {e}")))?;

    mac.update(ciphertext);

    mac.verify_slice(expected)
        .map_err(|_| AvToolError::AuthenticationFailed)
}
