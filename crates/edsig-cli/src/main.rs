//! # edsig CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Handlers return an exit code; an `Err` from a handler is reported and
//! mapped to exit code 2 so that `verify` can reserve 1 for rejection.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use edsig_cli::keygen::{run_keygen, KeygenArgs};
use edsig_cli::signing::{run_sign, SignArgs};
use edsig_cli::timing::{run_time, TimeArgs};
use edsig_cli::verify::{run_verify, VerifyArgs};

/// edsig: Ed25519 signing toolkit
///
/// Generates keys, signs and verifies files, and compares signing time
/// against ed25519-dalek.
#[derive(Parser, Debug)]
#[command(name = "edsig", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory for key and signature files.
    #[arg(long, global = true, env = "EDSIG_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a key pair (priv.pem, pub.pem).
    Keygen(KeygenArgs),

    /// Sign a file with a private key (writes sig.pem).
    Sign(SignArgs),

    /// Verify a file against a public key and signature.
    Verify(VerifyArgs),

    /// Compare signing time against ed25519-dalek.
    Time(TimeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(output_dir = %cli.output_dir.display(), "edsig starting");

    let result = match cli.command {
        Commands::Keygen(args) => run_keygen(&args, &cli.output_dir),
        Commands::Sign(args) => run_sign(&args, &cli.output_dir),
        Commands::Verify(args) => run_verify(&args, &cli.output_dir),
        Commands::Time(args) => run_time(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
