//! # Text Armor
//!
//! PEM-style framing for key and signature files:
//!
//! ```text
//! -----BEGIN PUBLIC KEY-----
//! <base64, wrapped at 64 columns>
//! -----END PUBLIC KEY-----
//! ```
//!
//! The body is the raw wire encoding: a 32-byte seed for `PRIVATE KEY`,
//! a 32-byte encoding for `PUBLIC KEY`, 64 bytes for `SIGNATURE`. Header
//! lines (`Key: value`) are not produced and are skipped on read.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;
use zeroize::Zeroizing;

/// Label for a private key seed.
pub const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// Label for a public key encoding.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Label for a signature.
pub const SIGNATURE_LABEL: &str = "SIGNATURE";

const LINE_WIDTH: usize = 64;

/// Errors from reading armored text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArmorError {
    /// No `-----BEGIN <label>-----` line was found.
    #[error("no armored block found")]
    MissingBegin,

    /// The block carries a different label than the one requested.
    #[error("unexpected block label: expected {expected:?}, found {found:?}")]
    UnexpectedLabel {
        /// Requested label.
        expected: String,
        /// Label present in the text.
        found: String,
    },

    /// The block is not terminated by a matching END line.
    #[error("missing END line for {0:?} block")]
    MissingEnd(String),

    /// The body is not valid base64.
    #[error("invalid base64 body: {0}")]
    Base64(String),

    /// The decoded body has the wrong size for its label.
    #[error("invalid {label} body: expected {expected} bytes, got {actual}")]
    BodyLength {
        /// Block label.
        label: String,
        /// Required size.
        expected: usize,
        /// Decoded size.
        actual: usize,
    },
}

/// Armor `body` under `label`.
pub fn encode(label: &str, body: &[u8]) -> String {
    let b64 = STANDARD.encode(body);
    let mut out = format!("-----BEGIN {label}-----\n");
    for line in b64.as_bytes().chunks(LINE_WIDTH) {
        // base64 output is ASCII, so every chunk boundary is a char boundary.
        out.push_str(&String::from_utf8_lossy(line));
        out.push('\n');
    }
    out.push_str(&format!("-----END {label}-----\n"));
    out
}

/// Extract and decode the first armored block, which must carry `label`.
/// Text before the BEGIN line and after the END line is ignored.
pub fn decode(text: &str, label: &str) -> Result<Zeroizing<Vec<u8>>, ArmorError> {
    let mut lines = text.lines().map(str::trim);

    let found = lines
        .by_ref()
        .find_map(|line| {
            line.strip_prefix("-----BEGIN ")
                .and_then(|rest| rest.strip_suffix("-----"))
        })
        .ok_or(ArmorError::MissingBegin)?;
    if found != label {
        return Err(ArmorError::UnexpectedLabel {
            expected: label.to_string(),
            found: found.to_string(),
        });
    }

    let end = format!("-----END {label}-----");
    let mut body = Zeroizing::new(String::new());
    let mut terminated = false;
    for line in lines {
        if line == end {
            terminated = true;
            break;
        }
        if line.is_empty() || line.contains(':') {
            continue;
        }
        body.push_str(line);
    }
    if !terminated {
        return Err(ArmorError::MissingEnd(label.to_string()));
    }

    STANDARD
        .decode(body.as_bytes())
        .map(Zeroizing::new)
        .map_err(|e| ArmorError::Base64(e.to_string()))
}

/// [`decode`], then require a body of exactly `expected` bytes.
pub fn decode_exact(
    text: &str,
    label: &str,
    expected: usize,
) -> Result<Zeroizing<Vec<u8>>, ArmorError> {
    let body = decode(text, label)?;
    if body.len() != expected {
        return Err(ArmorError::BodyLength {
            label: label.to_string(),
            expected,
            actual: body.len(),
        });
    }
    Ok(body)
}
