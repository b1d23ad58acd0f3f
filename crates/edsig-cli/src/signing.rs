//! # Sign Subcommand
//!
//! Signs the raw bytes of a file with an armored private key seed and
//! writes the 64-byte signature as an armored `SIGNATURE` block.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use edsig_core::{SignatureBytes, SEED_LENGTH};
use edsig_crypto::Ed25519PrivateKey;

use crate::armor::{self, PRIVATE_KEY_LABEL, SIGNATURE_LABEL};
use crate::{output_path, read_armored, read_file, write_public_file, PRIVATE_KEY_FILE, SIGNATURE_FILE};

/// Arguments for the sign subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// File whose contents are signed.
    #[arg(long)]
    pub input: PathBuf,

    /// Armored private key (defaults to priv.pem in the output directory).
    #[arg(long)]
    pub key: Option<PathBuf>,

    /// Signature output path (defaults to sig.pem in the output directory).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute the sign subcommand.
pub fn run_sign(args: &SignArgs, output_dir: &Path) -> Result<u8> {
    let key_path = match &args.key {
        Some(path) => path.clone(),
        None => output_dir.join(PRIVATE_KEY_FILE),
    };
    let out_path = match &args.out {
        Some(path) => path.clone(),
        None => output_path(output_dir, SIGNATURE_FILE)?,
    };

    sign_file(&args.input, &key_path, &out_path)?;
    println!("signature: {}", out_path.display());
    Ok(0)
}

/// Load the key at `key_path`, sign `input`, and write the armored
/// signature to `out`.
pub fn sign_file(input: &Path, key_path: &Path, out: &Path) -> Result<SignatureBytes> {
    let key = load_private_key(key_path)?;
    let message = read_file(input, "input file")?;

    let signature = key.sign(&message);
    write_public_file(out, &armor::encode(SIGNATURE_LABEL, signature.as_bytes()))?;

    tracing::info!(
        input = %input.display(),
        bytes = message.len(),
        public_key = %key.public_key(),
        "signed file"
    );
    Ok(signature)
}

/// Read an armored private key seed and derive the signing key.
pub fn load_private_key(path: &Path) -> Result<Ed25519PrivateKey> {
    let text = zeroize::Zeroizing::new(read_armored(path, "private key")?);
    let seed = armor::decode_exact(&text, PRIVATE_KEY_LABEL, SEED_LENGTH)
        .with_context(|| format!("invalid private key file: {}", path.display()))?;
    Ok(Ed25519PrivateKey::from_seed_slice(&seed)?)
}
