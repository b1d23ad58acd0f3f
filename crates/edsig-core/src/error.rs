//! # Error Types
//!
//! One variant per distinct failure of key derivation, key generation, or
//! verification. Uses `thiserror` for `Display` and `Error`.
//!
//! ## Caller Contract
//!
//! Verification reports *why* a signature was rejected so the reason can
//! be logged. Program logic must not branch on the reason: every
//! rejection means "not a valid signature".

use thiserror::Error;

/// Errors from Ed25519 key handling, signing, and verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Seed material was not exactly 32 bytes.
    #[error("invalid seed length: expected 32 bytes, got {0}")]
    InvalidSeedLength(usize),

    /// Public key bytes are not the canonical encoding of a curve point.
    #[error("invalid public key encoding: not a canonical curve point")]
    InvalidPublicKeyEncoding,

    /// Signature buffer was not exactly 64 bytes.
    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// The `R` half of the signature does not decode to a curve point.
    #[error("invalid signature point encoding: R is not a canonical curve point")]
    InvalidSignaturePointEncoding,

    /// The `S` half of the signature is not reduced modulo the group order.
    #[error("non-canonical scalar encoding: S is not less than the group order")]
    NonCanonicalScalarEncoding,

    /// Every encoding decoded but the verification equation does not hold.
    #[error("signature mismatch: verification equation does not hold")]
    SignatureMismatch,

    /// The entropy source failed while generating a seed. Fatal.
    #[error("entropy source failure: {0}")]
    EntropySourceFailure(String),

    /// Hex text could not be parsed into a fixed-length encoding.
    #[error("hex decode error: {0}")]
    HexDecode(String),
}

impl SignatureError {
    /// True for the outcomes of a completed verification attempt, i.e.
    /// every variant that means "this is not a valid signature".
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidPublicKeyEncoding
                | Self::InvalidSignatureLength(_)
                | Self::InvalidSignaturePointEncoding
                | Self::NonCanonicalScalarEncoding
                | Self::SignatureMismatch
        )
    }
}
