//! # Keygen Subcommand
//!
//! Generates a fresh Ed25519 key from the OS CSPRNG and writes it as two
//! armored files: the 32-byte seed (`priv.pem`, owner-only) and the
//! 32-byte public key (`pub.pem`).

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use edsig_crypto::Ed25519PrivateKey;

use crate::armor::{self, PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL};
use crate::{output_path, write_public_file, write_secret_file, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};

/// Arguments for the keygen subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Overwrite existing key files.
    #[arg(long)]
    pub force: bool,
}

/// Paths written by a keygen run.
#[derive(Debug, Clone)]
pub struct KeyFiles {
    /// Armored private key seed.
    pub private_key: PathBuf,
    /// Armored public key.
    pub public_key: PathBuf,
}

/// Execute the keygen subcommand.
pub fn run_keygen(args: &KeygenArgs, output_dir: &Path) -> Result<u8> {
    let files = generate_key_files(output_dir, args.force)?;
    println!("private key: {}", files.private_key.display());
    println!("public key:  {}", files.public_key.display());
    Ok(0)
}

/// Generate a key and write both files into `output_dir`.
pub fn generate_key_files(output_dir: &Path, force: bool) -> Result<KeyFiles> {
    let private_key = output_path(output_dir, PRIVATE_KEY_FILE)?;
    let public_key = output_path(output_dir, PUBLIC_KEY_FILE)?;
    if !force && (private_key.exists() || public_key.exists()) {
        bail!(
            "refusing to overwrite existing key files in {} (use --force)",
            output_dir.display()
        );
    }

    let key = Ed25519PrivateKey::generate()?;

    let private_text =
        zeroize::Zeroizing::new(armor::encode(PRIVATE_KEY_LABEL, key.seed_bytes().as_bytes()));
    let public_text = armor::encode(PUBLIC_KEY_LABEL, key.public_key().as_bytes());

    // Both files or neither: a lone priv.pem would block the next run.
    if let Err(e) = write_secret_file(&private_key, &private_text)
        .and_then(|()| write_public_file(&public_key, &public_text))
    {
        if let Err(cleanup) = std::fs::remove_file(&private_key) {
            tracing::warn!(
                path = %private_key.display(),
                error = %cleanup,
                "failed to remove partial private key"
            );
        }
        return Err(e);
    }

    tracing::info!(
        public_key = %key.public_key(),
        path = %public_key.display(),
        "generated key pair"
    );
    Ok(KeyFiles {
        private_key,
        public_key,
    })
}
