//! Text framing for the `$ANSIBLE_VAULT;1.1;AES256` container.
//!
//! A vault file has this layout:
//!
//! ```text
//! $ANSIBLE_VAULT;1.1;AES256
//! <80 hex chars>
//! <80 hex chars>
//! ...
//! <remaining hex chars>
//! ```
//!
//! The header line is three semicolon-separated fields; everything
//! after it is one hex string wrapped at 80 columns, and the file ends
//! with a newline.

use crate::errors::{AvToolError, Result};

/// First header field, identifying the file as an Ansible Vault.
pub const HEADING: &str = "$ANSIBLE_VAULT";

/// Vault format version this tool reads and writes.
pub const VERSION: &str = "1.1";

/// The only cipher suite the 1.1 format defines.
pub const CIPHER_AES256: &str = "AES256";

/// Column at which the hex body is wrapped.
const LINE_WIDTH: usize = 80;

/// Header fields and hex body split out of a vault file.
///
/// The heading and version are carried through as parsed but only the
/// cipher name is enforced, matching the reference implementation's
/// lenient behavior.
#[derive(Debug)]
pub struct ParsedVault {
    pub heading: String,
    pub version: String,
    pub cipher_name: String,
    /// The hex body with all line breaks removed.
    pub body: String,
}

/// Parse a vault file into its header fields and hex body.
///
/// Carriage returns are stripped first so files with Windows line
/// endings parse identically to Unix ones.
pub fn parse(text: &str) -> Result<ParsedVault> {
    let text = text.replace('\r', "");
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| AvToolError::MalformedHeader("input is empty".into()))?;

    let fields: Vec<&str> = header.split(';').collect();
    if fields.len() != 3 {
        return Err(AvToolError::MalformedHeader(format!(
            "expected 3 semicolon-separated fields, found {}",
            fields.len()
        )));
    }
    if fields.iter().any(|f| f.is_empty()) {
        return Err(AvToolError::MalformedHeader(
            "header contains an empty field".into(),
        ));
    }

    let cipher_name = fields[2].trim().to_string();
    if cipher_name != CIPHER_AES256 {
        return Err(AvToolError::UnsupportedCipher(cipher_name));
    }

    // The remaining lines are one hex string split at 80 columns.
    let body: String = lines.collect();

    Ok(ParsedVault {
        heading: fields[0].to_string(),
        version: fields[1].to_string(),
        cipher_name,
        body,
    })
}

/// Build the literal `$ANSIBLE_VAULT;1.1;AES256` header line.
///
/// Encoding always emits this exact triple; there is no configurable
/// version or cipher.
pub fn format_header() -> String {
    [HEADING, VERSION, CIPHER_AES256].join(";")
}

/// Frame a hex body under the header, wrapped at 80 columns.
///
/// The last line may be shorter than 80 characters and the output
/// always ends with a newline.
pub fn wrap(hex_body: &str) -> String {
    let mut out = String::with_capacity(hex_body.len() + hex_body.len() / LINE_WIDTH + 32);
    out.push_str(&format_header());

    // The body is pure ASCII hex, so slicing at byte offsets is safe.
    let mut rest = hex_body;
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
        out.push('\n');
        out.push_str(line);
        rest = tail;
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_header_literal() {
        assert_eq!(format_header(), "$ANSIBLE_VAULT;1.1;AES256");
    }

    #[test]
    fn parse_joins_body_lines() {
        let parsed = parse("$ANSIBLE_VAULT;1.1;AES256\nabcd\nef01\n").unwrap();
        assert_eq!(parsed.heading, "$ANSIBLE_VAULT");
        assert_eq!(parsed.version, "1.1");
        assert_eq!(parsed.cipher_name, "AES256");
        assert_eq!(parsed.body, "abcdef01");
    }

    #[test]
    fn parse_strips_carriage_returns() {
        let unix = parse("$ANSIBLE_VAULT;1.1;AES256\nabcd\n").unwrap();
        let windows = parse("$ANSIBLE_VAULT;1.1;AES256\r\nabcd\r\n").unwrap();
        assert_eq!(unix.body, windows.body);
    }

    #[test]
    fn parse_trims_cipher_name() {
        let parsed = parse("$ANSIBLE_VAULT;1.1; AES256 \nabcd\n").unwrap();
        assert_eq!(parsed.cipher_name, "AES256");
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert!(matches!(
            parse("$ANSIBLE_VAULT;1.1\nabcd\n"),
            Err(AvToolError::MalformedHeader(_))
        ));
        assert!(matches!(
            parse("$ANSIBLE_VAULT;1.1;AES256;extra\nabcd\n"),
            Err(AvToolError::MalformedHeader(_))
        ));
    }

    #[test]
    fn parse_rejects_empty_field() {
        assert!(matches!(
            parse(";1.1;AES256\nabcd\n"),
            Err(AvToolError::MalformedHeader(_))
        ));
    }

    #[test]
    fn parse_rejects_unknown_cipher() {
        assert!(matches!(
            parse("$ANSIBLE_VAULT;1.1;AES128\nabcd\n"),
            Err(AvToolError::UnsupportedCipher(_))
        ));
    }

    #[test]
    fn parse_accepts_unknown_version() {
        // Only the cipher name is a hard gate.
        assert!(parse("$ANSIBLE_VAULT;1.2;AES256\nabcd\n").is_ok());
    }

    #[test]
    fn wrap_splits_at_80_columns() {
        let body = "ab".repeat(100); // 200 chars
        let framed = wrap(&body);
        let lines: Vec<&str> = framed.lines().collect();
        assert_eq!(lines[0], "$ANSIBLE_VAULT;1.1;AES256");
        assert_eq!(lines[1].len(), 80);
        assert_eq!(lines[2].len(), 80);
        assert_eq!(lines[3].len(), 40);
        assert!(framed.ends_with('\n'));
    }

    #[test]
    fn wrap_then_parse_round_trips_body() {
        let body = "0123456789abcdef".repeat(13);
        let parsed = parse(&wrap(&body)).unwrap();
        assert_eq!(parsed.body, body);
    }
}
