//! `avtool encrypt` — encrypt a file in place as a vault container.

use crate::cli::{output, parse_output_format, retrieve_new_password, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `encrypt` command.
///
/// Reads the plaintext file, encrypts it, and writes the container back
/// over the same path with owner-only permissions.
pub fn execute(cli: &Cli, file: &str) -> Result<()> {
    let format = parse_output_format(&cli.output)?;
    let path = std::path::Path::new(file);

    let password = retrieve_new_password(cli)?;
    let container = vault::encode_file(path, &password)?;
    vault::write_container(path, &container)?;

    output::success(&output::decorate("Encryption successful", format));
    Ok(())
}
