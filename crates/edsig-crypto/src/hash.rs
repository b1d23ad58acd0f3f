//! # SHA-512 Transcripts
//!
//! The three hash inputs of Ed25519, in their exact byte order:
//!
//! | use        | input                    | interpretation           |
//! |------------|--------------------------|--------------------------|
//! | expansion  | `seed`                   | split into scalar/prefix |
//! | nonce      | `prefix ‖ M`             | 512-bit integer mod L    |
//! | challenge  | `R ‖ A ‖ M`              | 512-bit integer mod L    |
//!
//! Signing and verification both derive the challenge through
//! [`challenge_scalar`], so the two sides cannot drift apart.

use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use crate::curve::CurveGroup;

/// SHA-512 over the concatenation of `chunks`.
pub fn sha512_concat(chunks: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Nonce scalar `SHA-512(prefix ‖ M) mod L`. The digest is secret and is
/// wiped once reduced.
pub fn nonce_scalar<C: CurveGroup>(prefix: &[u8; 32], message: &[u8]) -> C::Scalar {
    let digest = Zeroizing::new(sha512_concat(&[&prefix[..], message]));
    C::decode_scalar_mod_order_wide(&digest)
}

/// Challenge scalar `SHA-512(R ‖ A ‖ M) mod L`.
pub fn challenge_scalar<C: CurveGroup>(
    r_bytes: &[u8; 32],
    public_key: &[u8; 32],
    message: &[u8],
) -> C::Scalar {
    let digest = sha512_concat(&[&r_bytes[..], &public_key[..], message]);
    C::decode_scalar_mod_order_wide(&digest)
}
