//! # Verify Subcommand
//!
//! Checks a file against an armored public key and signature. Exit code 0
//! means the signature is valid; 1 means it was rejected. Malformed or
//! unreadable files are errors (exit 2 from `main`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use edsig_core::{SignatureError, PUBLIC_KEY_LENGTH};
use serde::Serialize;

use crate::armor::{self, PUBLIC_KEY_LABEL, SIGNATURE_LABEL};
use crate::{read_armored, read_file, PUBLIC_KEY_FILE, SIGNATURE_FILE};

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// File whose contents were signed.
    #[arg(long)]
    pub input: PathBuf,

    /// Armored public key (defaults to pub.pem in the output directory).
    #[arg(long)]
    pub pubkey: Option<PathBuf>,

    /// Armored signature (defaults to sig.pem in the output directory).
    #[arg(long)]
    pub signature: Option<PathBuf>,

    /// Print a JSON report instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of a verification, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// Whether the signature was accepted.
    pub valid: bool,
    /// Rejection reason, absent when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl VerifyReport {
    fn from_result(result: &Result<(), SignatureError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                reason: None,
            },
            Err(e) => Self {
                valid: false,
                reason: Some(e.to_string()),
            },
        }
    }
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, output_dir: &Path) -> Result<u8> {
    let pubkey = args
        .pubkey
        .clone()
        .unwrap_or_else(|| output_dir.join(PUBLIC_KEY_FILE));
    let signature = args
        .signature
        .clone()
        .unwrap_or_else(|| output_dir.join(SIGNATURE_FILE));

    let result = verify_file(&args.input, &pubkey, &signature)?;
    let report = VerifyReport::from_result(&result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.valid {
        println!("signature valid");
    } else {
        println!(
            "signature INVALID: {}",
            report.reason.as_deref().unwrap_or("rejected")
        );
    }
    Ok(if report.valid { 0 } else { 1 })
}

/// Verify `input` against the armored files.
///
/// The outer `Result` carries I/O and armor failures; the inner one is the
/// verification outcome.
pub fn verify_file(
    input: &Path,
    pubkey: &Path,
    signature: &Path,
) -> Result<Result<(), SignatureError>> {
    let public_text = read_armored(pubkey, "public key")?;
    let public = armor::decode_exact(&public_text, PUBLIC_KEY_LABEL, PUBLIC_KEY_LENGTH)
        .with_context(|| format!("invalid public key file: {}", pubkey.display()))?;

    // Signature length is checked by the verifier so a truncated signature
    // is reported as a rejection rather than a file error.
    let signature_text = read_armored(signature, "signature")?;
    let sig = armor::decode(&signature_text, SIGNATURE_LABEL)
        .with_context(|| format!("invalid signature file: {}", signature.display()))?;

    let message = read_file(input, "input file")?;
    let result = edsig_crypto::verify(&sig, &message, &public);
    match &result {
        Ok(()) => tracing::info!(input = %input.display(), "signature accepted"),
        Err(e) => tracing::warn!(input = %input.display(), reason = %e, "signature rejected"),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_valid_signature_omits_reason() {
        let report = VerifyReport::from_result(&Ok(()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true }));
    }

    #[test]
    fn report_for_rejection_carries_reason() {
        let report = VerifyReport::from_result(&Err(SignatureError::SignatureMismatch));
        assert!(!report.valid);
        assert_eq!(
            report.reason.as_deref(),
            Some(SignatureError::SignatureMismatch.to_string().as_str())
        );
    }
}
