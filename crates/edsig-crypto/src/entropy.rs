//! # Seed Entropy
//!
//! A fresh seed takes exactly one request of 32 bytes from the entropy
//! source. A failed or short request aborts key generation with
//! [`SignatureError::EntropySourceFailure`]. There is no retry and no
//! fallback source.

use std::io::Read;

use edsig_core::{SignatureError, SEED_LENGTH};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Draw a seed from a cryptographic RNG.
pub fn seed_from_rng<R>(rng: &mut R) -> Result<Zeroizing<[u8; SEED_LENGTH]>, SignatureError>
where
    R: RngCore + CryptoRng,
{
    let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
    rng.try_fill_bytes(&mut seed[..]).map_err(|e| {
        tracing::error!(error = %e, "entropy source failed during key generation");
        SignatureError::EntropySourceFailure(e.to_string())
    })?;
    Ok(seed)
}

/// Draw a seed with a single `read` from a byte source such as an
/// entropy device. Fewer than 32 bytes is fatal.
pub fn seed_from_reader<R: Read>(source: &mut R) -> Result<Zeroizing<[u8; SEED_LENGTH]>, SignatureError> {
    let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
    let n = source.read(&mut seed[..]).map_err(|e| {
        tracing::error!(error = %e, "entropy read failed during key generation");
        SignatureError::EntropySourceFailure(e.to_string())
    })?;
    if n != SEED_LENGTH {
        tracing::error!(requested = SEED_LENGTH, received = n, "short entropy read");
        return Err(SignatureError::EntropySourceFailure(format!(
            "short read: requested {SEED_LENGTH} bytes, received {n}"
        )));
    }
    Ok(seed)
}
