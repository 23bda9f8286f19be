//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count and the output layout are fixed by the Ansible
//! Vault 1.1 format: 10 000 iterations produce 80 bytes, split
//! positionally into the AES key, the HMAC key, and the CTR
//! initialization vector.  Any deviation yields containers that no
//! conforming implementation can decrypt, so these constants are part
//! of the wire contract, not tuning knobs.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::{AvToolError, Result};

/// Length of the random salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the cipher key and the HMAC key (256 bits each).
const KEY_LEN: usize = 32;

/// Length of the CTR initialization vector (one AES block).
const IV_LEN: usize = 16;

/// PBKDF2 iteration count fixed by the vault 1.1 format.
const PBKDF2_ITERATIONS: u32 = 10_000;

/// Key material derived from a password and salt.
///
/// Produced once per encode/decode call and zeroed on drop so derived
/// keys never linger in memory after the call finishes.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKeys {
    cipher_key: [u8; KEY_LEN],
    hmac_key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl DerivedKeys {
    /// The AES-256 encryption key.
    pub fn cipher_key(&self) -> &[u8; KEY_LEN] {
        &self.cipher_key
    }

    /// The HMAC-SHA256 authentication key.
    pub fn hmac_key(&self) -> &[u8; KEY_LEN] {
        &self.hmac_key
    }

    /// The CTR initialization vector.
    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }
}

/// Derive the cipher key, HMAC key, and IV from a password and salt.
///
/// The 80-byte PBKDF2 output is split positionally: bytes `[0, 32)`
/// are the cipher key, `[32, 64)` the HMAC key, `[64, 80)` the IV.
pub fn derive_keys(password: &[u8], salt: &[u8]) -> DerivedKeys {
    let mut okm = [0u8; KEY_LEN * 2 + IV_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut okm);

    let mut keys = DerivedKeys {
        cipher_key: [0u8; KEY_LEN],
        hmac_key: [0u8; KEY_LEN],
        iv: [0u8; IV_LEN],
    };
    keys.cipher_key.copy_from_slice(&okm[..KEY_LEN]);
    keys.hmac_key.copy_from_slice(&okm[KEY_LEN..KEY_LEN * 2]);
    keys.iv.copy_from_slice(&okm[KEY_LEN * 2..]);

    okm.zeroize();
    keys
}

/// Generate a cryptographically random 32-byte salt.
///
/// A fresh salt per encode call is what prevents CTR IV reuse, since
/// the IV is derived from it.  Entropy failure is surfaced as an error
/// and never retried; the whole encode fails.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| AvToolError::RandomnessError(e.to_string()))?;
    Ok(salt)
}
