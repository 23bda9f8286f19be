//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use zeroize::Zeroizing;

use crate::errors::{AvToolError, Result};

/// avtool CLI: work with Ansible Vault files.
#[derive(Parser)]
#[command(
    name = "avtool",
    about = "Tool for working with Ansible Vault files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Load the vault password from this file
    #[arg(short = 'f', long = "vault-password-file", global = true)]
    pub vault_password_file: Option<String>,

    /// Vault password (omit for interactive prompt)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Output style: 'vanilla' for plain output, 'aligned' for dot-padded
    #[arg(short, long, default_value = "vanilla", global = true)]
    pub output: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// View the contents of an encrypted vault file
    View {
        /// Path to the vault file
        file: String,

        /// Key to show: 'keys' lists names, 'all' shows every value,
        /// '.' prints the whole document, anything else is a key name
        #[arg(short, long, default_value = "keys")]
        key: String,
    },

    /// Encrypt a file in place as a vault container
    Encrypt {
        /// Path to the plaintext file
        file: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Message decoration styles selected by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Vanilla,
    Aligned,
}

/// Parse the `--output` flag into an `OutputFormat`.
pub fn parse_output_format(name: &str) -> Result<OutputFormat> {
    match name {
        "vanilla" => Ok(OutputFormat::Vanilla),
        "aligned" => Ok(OutputFormat::Aligned),
        other => Err(AvToolError::CommandFailed(format!(
            "unknown output format '{other}' — supported: vanilla, aligned"
        ))),
    }
}

/// Get the vault password, trying in order:
/// 1. The `--password` flag
/// 2. The `--vault-password-file` flag (file contents, trimmed)
/// 3. `AVTOOL_PASSWORD` env var (CI/CD)
/// 4. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn retrieve_password(cli: &Cli) -> Result<Zeroizing<String>> {
    if let Some(pw) = &cli.password {
        return Ok(Zeroizing::new(pw.clone()));
    }

    if let Some(file) = &cli.vault_password_file {
        return read_password_file(file);
    }

    if let Ok(pw) = std::env::var("AVTOOL_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter vault password")
        .interact()
        .map_err(|e| AvToolError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Get the password for a new container, confirming it when prompting
/// interactively (used by `encrypt`).
///
/// Non-interactive sources (flags, password file, env var) are taken
/// as-is without confirmation.
pub fn retrieve_new_password(cli: &Cli) -> Result<Zeroizing<String>> {
    let has_env = std::env::var("AVTOOL_PASSWORD").is_ok_and(|pw| !pw.is_empty());
    if cli.password.is_some() || cli.vault_password_file.is_some() || has_env {
        return retrieve_password(cli);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Choose vault password")
        .with_confirmation("Confirm vault password", "Passwords do not match, try again")
        .interact()
        .map_err(|e| AvToolError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Read a password file, trimming surrounding whitespace (most password
/// files end with a newline).
fn read_password_file(file: &str) -> Result<Zeroizing<String>> {
    let path = std::path::Path::new(file);
    if !path.exists() {
        return Err(AvToolError::FileNotFound(path.to_path_buf()));
    }
    let pw = std::fs::read_to_string(path)?;
    Ok(Zeroizing::new(pw.trim().to_string()))
}
