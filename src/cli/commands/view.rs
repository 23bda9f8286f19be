//! `avtool view` — decrypt a vault file and print its YAML contents.

use serde_yaml::Value;

use crate::cli::{output, parse_output_format, retrieve_password, Cli, OutputFormat};
use crate::errors::{AvToolError, Result};
use crate::vault;

/// Execute the `view` command.
pub fn execute(cli: &Cli, file: &str, key: &str) -> Result<()> {
    let format = parse_output_format(&cli.output)?;
    let path = std::path::Path::new(file);

    let password = retrieve_password(cli)?;
    let plaintext = vault::decode_file(path, &password)?;
    let plaintext = String::from_utf8(plaintext).map_err(|_| AvToolError::PlaintextNotUtf8)?;

    if plaintext.is_empty() {
        println!("{}", output::decorate(&format!("{file} is empty!"), format));
        return Ok(());
    }

    // '.' prints the decrypted document verbatim, no YAML parsing.
    if key == "." {
        print!("{plaintext}");
        if !plaintext.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    let doc: Value =
        serde_yaml::from_str(&plaintext).map_err(|e| AvToolError::YamlError(e.to_string()))?;

    match key {
        "keys" => {
            let keys = document_keys(&doc)?;
            println!(
                "{}",
                output::decorate(&format!("{} key(s) in {}", keys.len(), file), format)
            );
            output::print_keys_table(&keys);
        }
        "all" => {
            for name in document_keys(&doc)? {
                println!("{}", output::decorate(&name, format));
                println!("{}", lookup_key(&doc, &name)?);
            }
        }
        name => {
            if format == OutputFormat::Aligned {
                println!("{}", output::decorate(name, format));
            }
            println!("{}", lookup_key(&doc, name)?);
        }
    }

    Ok(())
}

/// Collect the top-level mapping keys of a YAML document.
fn document_keys(doc: &Value) -> Result<Vec<String>> {
    let map = doc
        .as_mapping()
        .ok_or_else(|| AvToolError::YamlError("vault document is not a YAML mapping".into()))?;
    Ok(map.keys().map(value_to_string).collect())
}

/// Look up a top-level key and render its value.
fn lookup_key(doc: &Value, key: &str) -> Result<String> {
    let value = doc
        .get(key)
        .ok_or_else(|| AvToolError::KeyNotFound(key.to_string()))?;
    Ok(value_to_string(value))
}

/// Render a YAML value as display text.
///
/// Scalars print bare; nested structures fall back to YAML rendering.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}
