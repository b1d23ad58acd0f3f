//! # Signing
//!
//! RFC 8032 §5.1.6. Given the derived key `(a, prefix, A)` and message `M`:
//!
//! 1. `r = SHA-512(prefix ‖ M) mod L`
//! 2. `R = [r]B`
//! 3. `k = SHA-512(R ‖ A ‖ M) mod L`
//! 4. `S = k·a + r mod L`
//! 5. signature = `R ‖ S`
//!
//! The nonce is a function of the key and message only, so signing is
//! deterministic and needs no randomness at signing time. Signing never
//! fails: every hash output is a fixed 64-byte array, so the wide
//! reduction always has well-formed input.

use edsig_core::SignatureBytes;
use zeroize::Zeroize;

use crate::curve::CurveGroup;
use crate::hash::{challenge_scalar, nonce_scalar};
use crate::keys::PrivateKey;

/// Sign `message` with `key`.
pub fn sign<C: CurveGroup>(key: &PrivateKey<C>, message: &[u8]) -> SignatureBytes {
    let mut r = nonce_scalar::<C>(key.prefix(), message);
    let r_bytes = C::encode_point(&C::scalar_base_mul(&r));

    let k = challenge_scalar::<C>(&r_bytes, key.public_key().as_bytes(), message);
    let s = C::multiply_and_add(&k, key.scalar(), &r);
    r.zeroize();

    SignatureBytes::from_parts(&r_bytes, &C::encode_scalar(&s))
}
