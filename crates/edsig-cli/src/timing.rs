//! # Time Subcommand
//!
//! Signs random messages with both `edsig-crypto` and `ed25519-dalek`
//! under the same seed, checks the signatures are byte-identical, and
//! reports mean signing time per implementation.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Args;
use ed25519_dalek::Signer as _;
use edsig_crypto::Ed25519PrivateKey;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::Serialize;

/// Size of each random message.
pub const MESSAGE_LENGTH: usize = 1024;

/// Arguments for the time subcommand.
#[derive(Args, Debug)]
pub struct TimeArgs {
    /// Number of signatures per implementation.
    #[arg(long, default_value_t = 10_000)]
    pub samples: usize,

    /// Print a JSON report instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Result of a timing run.
#[derive(Debug, Clone)]
pub struct TimingReport {
    /// Signatures produced per implementation.
    pub samples: usize,
    /// Total time spent in `edsig-crypto` signing.
    pub edsig_total: Duration,
    /// Total time spent in `ed25519-dalek` signing.
    pub dalek_total: Duration,
}

/// Mean signing times in nanoseconds, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingSummary {
    /// Signatures produced per implementation.
    pub samples: usize,
    /// Mean `edsig-crypto` signing time.
    pub edsig_mean_ns: u64,
    /// Mean `ed25519-dalek` signing time.
    pub dalek_mean_ns: u64,
}

impl TimingReport {
    /// Mean `edsig-crypto` signing time.
    pub fn edsig_mean(&self) -> Duration {
        mean(self.edsig_total, self.samples)
    }

    /// Mean `ed25519-dalek` signing time.
    pub fn dalek_mean(&self) -> Duration {
        mean(self.dalek_total, self.samples)
    }

    /// Per-signature means for machine-readable output.
    pub fn summary(&self) -> TimingSummary {
        TimingSummary {
            samples: self.samples,
            edsig_mean_ns: nanos(self.edsig_mean()),
            dalek_mean_ns: nanos(self.dalek_mean()),
        }
    }
}

fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

fn mean(total: Duration, samples: usize) -> Duration {
    match u32::try_from(samples) {
        Ok(n) if n > 0 => total / n,
        _ => Duration::from_secs_f64(total.as_secs_f64() / samples.max(1) as f64),
    }
}

/// Execute the time subcommand.
pub fn run_time(args: &TimeArgs) -> Result<u8> {
    let report = compare_signing(args.samples)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
    } else {
        println!("samples:        {}", report.samples);
        println!("edsig mean:     {:?}", report.edsig_mean());
        println!("ed25519-dalek:  {:?}", report.dalek_mean());
    }
    Ok(0)
}

/// Sign `samples` random messages with both implementations.
///
/// Fails if any pair of signatures differs.
pub fn compare_signing(samples: usize) -> Result<TimingReport> {
    if samples == 0 {
        bail!("--samples must be greater than zero");
    }

    let key = Ed25519PrivateKey::generate()?;
    let reference = ed25519_dalek::SigningKey::from_bytes(key.seed_bytes().as_bytes());

    let mut message = vec![0u8; MESSAGE_LENGTH];
    let mut edsig_total = Duration::ZERO;
    let mut dalek_total = Duration::ZERO;

    for i in 0..samples {
        OsRng.fill_bytes(&mut message);

        let start = Instant::now();
        let ours = key.sign(&message);
        edsig_total += start.elapsed();

        let start = Instant::now();
        let theirs = reference.sign(&message);
        dalek_total += start.elapsed();

        if ours.as_bytes() != &theirs.to_bytes() {
            tracing::error!(sample = i, "signature mismatch against ed25519-dalek");
            bail!("signature mismatch against ed25519-dalek at sample {i}");
        }
    }

    tracing::debug!(samples, ?edsig_total, ?dalek_total, "timing complete");
    Ok(TimingReport {
        samples,
        edsig_total,
        dalek_total,
    })
}
