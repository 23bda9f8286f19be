use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in avtool.
#[derive(Debug, Error)]
pub enum AvToolError {
    // --- Container format errors ---
    #[error("Malformed vault header: {0}")]
    MalformedHeader(String),

    #[error("Unsupported cipher '{0}' — only AES256 is supported")]
    UnsupportedCipher(String),

    #[error("Malformed vault body: {0}")]
    MalformedBody(String),

    #[error("Vault file is not valid UTF-8 text")]
    ContainerNotUtf8,

    // --- Crypto errors ---
    #[error("HMAC verification failed — wrong password or tampered data")]
    AuthenticationFailed,

    #[error("HMAC error: {0}")]
    HmacError(String),

    #[error("Invalid padding: {0}")]
    InvalidPadding(String),

    #[error("Random generator failure: {0}")]
    RandomnessError(String),

    // --- Content errors ---
    #[error("Decrypted content is not valid UTF-8 text")]
    PlaintextNotUtf8,

    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("Key '{0}' not found in the vault document")]
    KeyNotFound(String),

    // --- File errors ---
    #[error("File not found at {0}")]
    FileNotFound(PathBuf),

    #[error("{0} is a directory, not a file")]
    NotAFile(PathBuf),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for avtool results.
pub type Result<T> = std::result::Result<T, AvToolError>;
