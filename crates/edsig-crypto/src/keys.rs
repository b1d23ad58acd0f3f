//! # Keys
//!
//! Key derivation from a 32-byte seed (RFC 8032 §5.1.5):
//!
//! 1. `h = SHA-512(seed)`
//! 2. `a = clamp(h[0..32])`, the secret scalar
//! 3. `prefix = h[32..64]`, the nonce-derivation secret
//! 4. `A = [a]B`, encoded canonically
//!
//! Derivation runs once, eagerly, inside [`PrivateKey::from_seed`]. The
//! resulting key is immutable and can be shared across threads by
//! reference for any number of signing calls.
//!
//! ## Secret Material
//!
//! `PrivateKey` is neither `Clone` nor `Copy`. Seed, scalar, and prefix are
//! zeroized when the key is dropped. `Debug` prints only the public half.

use std::fmt;

use edsig_core::{PublicKeyBytes, SeedBytes, SignatureBytes, SignatureError, SEED_LENGTH};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::curve::{Curve25519, CurveGroup};
use crate::hash::sha512_concat;
use crate::{entropy, sign, verify};

/// Ed25519 private key over `curve25519-dalek`.
pub type Ed25519PrivateKey = PrivateKey<Curve25519>;

/// Ed25519 public key over `curve25519-dalek`.
pub type Ed25519PublicKey = PublicKey<Curve25519>;

/// A signing key: the seed plus everything derived from it.
pub struct PrivateKey<C: CurveGroup = Curve25519> {
    seed: SeedBytes,
    scalar: C::Scalar,
    prefix: [u8; 32],
    public: PublicKey<C>,
}

/// A verification key: canonical encoding and decoded point, always
/// consistent with each other.
pub struct PublicKey<C: CurveGroup = Curve25519> {
    bytes: PublicKeyBytes,
    point: C::Point,
}

// ---------------------------------------------------------------------------
// PrivateKey impls
// ---------------------------------------------------------------------------

impl<C: CurveGroup> PrivateKey<C> {
    /// Derive a key from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        let digest = Zeroizing::new(sha512_concat(&[&seed[..]]));

        let mut scalar_bytes = Zeroizing::new([0u8; 32]);
        scalar_bytes.copy_from_slice(&digest[..32]);
        let scalar = C::decode_scalar_with_clamping(&scalar_bytes);

        let mut prefix = [0u8; 32];
        prefix.copy_from_slice(&digest[32..]);

        let point = C::scalar_base_mul(&scalar);
        let public = PublicKey {
            bytes: PublicKeyBytes(C::encode_point(&point)),
            point,
        };

        Self {
            seed: SeedBytes::from_bytes(*seed),
            scalar,
            prefix,
            public,
        }
    }

    /// Derive a key from seed bytes of unchecked length.
    pub fn from_seed_slice(seed: &[u8]) -> Result<Self, SignatureError> {
        let seed = SeedBytes::from_slice(seed)?;
        Ok(Self::from_seed(seed.as_bytes()))
    }

    /// Generate a key from the operating system CSPRNG.
    pub fn generate() -> Result<Self, SignatureError> {
        Self::generate_with(&mut rand::rngs::OsRng)
    }

    /// Generate a key from the given CSPRNG. Entropy failure aborts.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, SignatureError> {
        let seed = entropy::seed_from_rng(rng)?;
        Ok(Self::from_seed(&seed))
    }

    /// The seed, i.e. the stored form of the key. Wiped when the returned
    /// value is dropped.
    pub fn seed_bytes(&self) -> SeedBytes {
        SeedBytes::from_bytes(*self.seed.as_bytes())
    }

    /// The public key derived from this seed.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public
    }

    /// Sign `message`. Deterministic: the same key and message always
    /// produce the same signature.
    pub fn sign(&self, message: &[u8]) -> SignatureBytes {
        sign::sign(self, message)
    }

    pub(crate) fn scalar(&self) -> &C::Scalar {
        &self.scalar
    }

    pub(crate) fn prefix(&self) -> &[u8; 32] {
        &self.prefix
    }
}

impl<C: CurveGroup> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        self.seed.zeroize();
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

impl<C: CurveGroup> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public.bytes)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// PublicKey impls
// ---------------------------------------------------------------------------

impl<C: CurveGroup> PublicKey<C> {
    /// Decode a public key, rejecting non-canonical and off-curve encodings.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SignatureError> {
        let point = C::decode_point(bytes).ok_or(SignatureError::InvalidPublicKeyEncoding)?;
        Ok(Self {
            bytes: PublicKeyBytes(*bytes),
            point,
        })
    }

    /// Decode a public key from a slice of unchecked length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let bytes = PublicKeyBytes::from_slice(bytes)?;
        Self::from_bytes(bytes.as_bytes())
    }

    /// The canonical 32-byte encoding.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.bytes.as_bytes()
    }

    /// The encoding as a wire value.
    pub fn to_wire(&self) -> PublicKeyBytes {
        self.bytes
    }

    /// The decoded curve point.
    pub fn point(&self) -> &C::Point {
        &self.point
    }

    /// Verify `signature` over `message` against this key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), SignatureError> {
        verify::verify_decoded(self, message, signature)
    }
}

impl<C: CurveGroup> Clone for PublicKey<C> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes,
            point: self.point.clone(),
        }
    }
}

impl<C: CurveGroup> PartialEq for PublicKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes && C::points_equal(&self.point, &other.point)
    }
}

impl<C: CurveGroup> Eq for PublicKey<C> {}

impl<C: CurveGroup> fmt::Debug for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.bytes)
    }
}

impl<C: CurveGroup> fmt::Display for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bytes, f)
    }
}

impl<C: CurveGroup> TryFrom<PublicKeyBytes> for PublicKey<C> {
    type Error = SignatureError;

    fn try_from(bytes: PublicKeyBytes) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes.as_bytes())
    }
}
