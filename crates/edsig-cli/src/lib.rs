//! # edsig-cli — Command-Line Interface for edsig
//!
//! Provides the `edsig` binary for working with Ed25519 keys and
//! signatures stored as armored files.
//!
//! ## Subcommands
//!
//! - `edsig keygen`: write `priv.pem` and `pub.pem`.
//! - `edsig sign`: sign a file, write `sig.pem`.
//! - `edsig verify`: check a file against `pub.pem` and `sig.pem`.
//! - `edsig time`: compare signing time against `ed25519-dalek`.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers; handlers take parsed
//!   args plus the resolved output directory and return an exit code.
//! - All signature logic lives in `edsig-crypto`. This crate only moves
//!   bytes between files and the library.

pub mod armor;
pub mod keygen;
pub mod signing;
pub mod timing;
pub mod verify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default file name for a generated private key.
pub const PRIVATE_KEY_FILE: &str = "priv.pem";

/// Default file name for a generated public key.
pub const PUBLIC_KEY_FILE: &str = "pub.pem";

/// Default file name for a produced signature.
pub const SIGNATURE_FILE: &str = "sig.pem";

/// Resolve `name` inside `output_dir`, creating the directory if needed.
pub fn output_path(output_dir: &Path, name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;
    Ok(output_dir.join(name))
}

/// Read a whole file, naming it in the error.
pub fn read_file(path: &Path, what: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {what}: {}", path.display()))
}

/// Read an armored file as text, naming it in the error.
pub fn read_armored(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what}: {}", path.display()))
}

/// Write a file readable by everyone.
pub fn write_public_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Write a file readable only by its owner (mode 0600 on Unix).
pub fn write_secret_file(path: &Path, contents: &str) -> Result<()> {
    use std::io::Write;

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    // mode() only applies on creation; an existing file keeps its old mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("failed to restrict permissions on {}", path.display()))?;
    }
    file.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))
}
