//! The container codec: ties key derivation, encryption, and
//! authentication together behind `encode` and `decode`.
//!
//! Once the outer hex layer is removed, the body is the ASCII text
//!
//! ```text
//! hex(salt) \n hex(hmac) \n hex(ciphertext)
//! ```
//!
//! and that whole three-part string is itself hex-encoded for
//! transmission.  The double hex layer is part of the wire format and
//! must not be collapsed to a single encoding.

use std::fs;
use std::path::Path;

use crate::crypto::{cipher, kdf, mac};
use crate::errors::{AvToolError, Result};
use crate::vault::format;

/// The three decoded sections of a vault body.
///
/// Built transiently inside `encode` or `decode` and discarded when the
/// call returns; no container outlives a single invocation.
struct VaultContainer {
    salt: Vec<u8>,
    mac: Vec<u8>,
    ciphertext: Vec<u8>,
}

/// Encrypt `plaintext` into a framed vault container.
///
/// Every call draws a fresh random salt, so encoding the same
/// plaintext twice produces different containers.
pub fn encode(plaintext: &[u8], password: &str) -> Result<String> {
    let salt = kdf::generate_salt()?;
    let keys = kdf::derive_keys(password.as_bytes(), &salt);

    let ciphertext = cipher::encrypt(keys.cipher_key(), keys.iv(), plaintext);
    let tag = mac::compute(keys.hmac_key(), &ciphertext)?;

    let body = format!(
        "{}\n{}\n{}",
        hex::encode(salt),
        hex::encode(tag),
        hex::encode(&ciphertext)
    );

    Ok(format::wrap(&hex::encode(body)))
}

/// Decrypt a framed vault container back into plaintext.
///
/// The HMAC is verified before decryption; on a mismatch no plaintext
/// is produced and the call fails with `AuthenticationFailed`.
pub fn decode(container: &str, password: &str) -> Result<Vec<u8>> {
    let parsed = format::parse(container)?;
    let container = parse_body(&parsed.body)?;

    let keys = kdf::derive_keys(password.as_bytes(), &container.salt);
    mac::verify(keys.hmac_key(), &container.ciphertext, &container.mac)?;

    cipher::decrypt(keys.cipher_key(), keys.iv(), &container.ciphertext)
}

/// Strip the outer hex layer and split the body into its three parts.
fn parse_body(body: &str) -> Result<VaultContainer> {
    let decoded = hex::decode(body)
        .map_err(|e| AvToolError::MalformedBody(format!("outer hex layer: {e}")))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| AvToolError::MalformedBody("body is not ASCII hex text".into()))?;

    let mut parts = decoded.splitn(3, '\n');
    let (salt_hex, mac_hex, ciphertext_hex) = match (parts.next(), parts.next(), parts.next()) {
        (Some(s), Some(m), Some(c)) => (s, m, c),
        _ => {
            return Err(AvToolError::MalformedBody(
                "expected salt, HMAC, and ciphertext sections".into(),
            ))
        }
    };

    let salt = hex::decode(salt_hex)
        .map_err(|e| AvToolError::MalformedBody(format!("salt hex: {e}")))?;
    let mac = hex::decode(mac_hex)
        .map_err(|e| AvToolError::MalformedBody(format!("HMAC hex: {e}")))?;
    let ciphertext = hex::decode(ciphertext_hex)
        .map_err(|e| AvToolError::MalformedBody(format!("ciphertext hex: {e}")))?;

    if ciphertext.is_empty() || ciphertext.len() % cipher::BLOCK_SIZE != 0 {
        return Err(AvToolError::MalformedBody(format!(
            "ciphertext length {} is not a positive multiple of {}",
            ciphertext.len(),
            cipher::BLOCK_SIZE
        )));
    }

    Ok(VaultContainer {
        salt,
        mac,
        ciphertext,
    })
}

// ---------------------------------------------------------------------------
// File convenience variants
// ---------------------------------------------------------------------------

/// Read `path` and encrypt its contents into container text.
pub fn encode_file(path: &Path, password: &str) -> Result<String> {
    let data = read_input(path)?;
    encode(&data, password)
}

/// Read `path` and decrypt the container it holds.
pub fn decode_file(path: &Path, password: &str) -> Result<Vec<u8>> {
    let data = read_input(path)?;
    let text = String::from_utf8(data).map_err(|_| AvToolError::ContainerNotUtf8)?;
    decode(&text, password)
}

/// Write container text to `path` with owner-only permissions.
pub fn write_container(path: &Path, container: &str) -> Result<()> {
    fs::write(path, container)?;

    // Restrict permissions to owner-only read/write on Unix.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(AvToolError::FileNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(AvToolError::NotAFile(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}
