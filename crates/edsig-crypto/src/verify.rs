//! # Verification
//!
//! RFC 8032 §5.1.7 with the cofactored equation. Checks run in a fixed
//! order and each failure has its own [`SignatureError`] variant:
//!
//! 1. signature length is 64, else `InvalidSignatureLength`
//! 2. `A` decodes canonically, else `InvalidPublicKeyEncoding`
//! 3. `R` decodes canonically, else `InvalidSignaturePointEncoding`
//! 4. `S < L`, else `NonCanonicalScalarEncoding`
//! 5. `k = SHA-512(R ‖ A ‖ M) mod L`
//! 6. `[8][S]B == [8]R + [8][k]A`, else `SignatureMismatch`
//!
//! ## Cofactor
//!
//! Both sides are multiplied by the cofactor before comparison, which maps
//! any small-order component of `R` or `A` to the identity. A signature
//! with torsion in `R` or `A` that satisfies the prime-order equation is
//! therefore accepted.
//!
//! ## Caller Contract
//!
//! Treat every `Err` as "not a valid signature". The variant exists for
//! diagnostics only.

use edsig_core::{SignatureError, SIGNATURE_LENGTH};

use crate::curve::{Curve25519, CurveGroup};
use crate::hash::challenge_scalar;
use crate::keys::PublicKey;

/// Verify an Ed25519 signature over `message` against a 32-byte public
/// key encoding.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<(), SignatureError> {
    verify_with_group::<Curve25519>(signature, message, public_key)
}

/// [`verify`] over an arbitrary [`CurveGroup`].
pub fn verify_with_group<C: CurveGroup>(
    signature: &[u8],
    message: &[u8],
    public_key: &[u8],
) -> Result<(), SignatureError> {
    check_length(signature)?;
    let key = PublicKey::<C>::from_slice(public_key).map_err(rejected)?;
    verify_decoded(&key, message, signature)
}

/// Verification against an already-decoded public key.
pub(crate) fn verify_decoded<C: CurveGroup>(
    key: &PublicKey<C>,
    message: &[u8],
    signature: &[u8],
) -> Result<(), SignatureError> {
    check_length(signature)?;

    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&signature[..32]);
    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&signature[32..]);

    let r = C::decode_point(&r_bytes)
        .ok_or_else(|| rejected(SignatureError::InvalidSignaturePointEncoding))?;
    let s = C::decode_scalar_canonical(&s_bytes)
        .ok_or_else(|| rejected(SignatureError::NonCanonicalScalarEncoding))?;

    let k = challenge_scalar::<C>(&r_bytes, key.as_bytes(), message);

    let lhs = C::mul_by_cofactor(&C::scalar_base_mul(&s));
    let rhs = C::point_add(
        &C::mul_by_cofactor(&r),
        &C::mul_by_cofactor(&C::scalar_mul(&k, key.point())),
    );

    if C::points_equal(&lhs, &rhs) {
        Ok(())
    } else {
        Err(rejected(SignatureError::SignatureMismatch))
    }
}

fn check_length(signature: &[u8]) -> Result<(), SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(rejected(SignatureError::InvalidSignatureLength(
            signature.len(),
        )));
    }
    Ok(())
}

fn rejected(reason: SignatureError) -> SignatureError {
    tracing::debug!(%reason, "signature rejected");
    reason
}
