//! AES-256-CTR encryption with the vault's always-pad scheme.
//!
//! The padding is a PKCS#7 variant with one quirk the format requires:
//! plaintext is padded even when it is already block aligned, gaining a
//! full extra block.  An empty plaintext therefore still encrypts to
//! one 16-byte block.

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::errors::{AvToolError, Result};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// Pad `plaintext` and encrypt it with AES-256-CTR.
///
/// The ciphertext has the same length as the padded plaintext and is
/// always a positive multiple of the block size.
pub fn encrypt(key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let mut buf = pad(plaintext);
    let mut cipher = Aes256Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(&mut buf);
    buf
}

/// Decrypt `ciphertext` with AES-256-CTR and strip the padding.
pub fn decrypt(key: &[u8; 32], iv: &[u8; 16], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mut buf = ciphertext.to_vec();
    let mut cipher = Aes256Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(&mut buf);
    unpad(buf)
}

/// Append padding bytes whose value equals the padding length.
///
/// `BLOCK_SIZE - len % BLOCK_SIZE` is never zero: a block-aligned
/// input (including the empty input) gains one full block.
fn pad(plaintext: &[u8]) -> Vec<u8> {
    let padding = BLOCK_SIZE - plaintext.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(plaintext.len() + padding);
    padded.extend_from_slice(plaintext);
    padded.resize(plaintext.len() + padding, padding as u8);
    padded
}

/// Read the last byte as the padding length and strip that many bytes.
///
/// Defensive only: the HMAC check runs before decryption, so on an
/// authenticated container the padding byte is always in range.
fn unpad(mut buf: Vec<u8>) -> Result<Vec<u8>> {
    let padding = match buf.last() {
        Some(&b) => b as usize,
        None => {
            return Err(AvToolError::InvalidPadding(
                "decrypted buffer is empty".into(),
            ))
        }
    };

    if padding == 0 || padding > BLOCK_SIZE || padding > buf.len() {
        return Err(AvToolError::InvalidPadding(format!(
            "padding byte {padding} out of range for a {} byte buffer",
            buf.len()
        )));
    }

    buf.truncate(buf.len() - padding);
    Ok(buf)
}
