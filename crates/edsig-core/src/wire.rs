//! # Wire Encodings
//!
//! Fixed-length byte containers for the portable Ed25519 interchange
//! format. These types hold bytes only and perform no curve validation:
//! a `PublicKeyBytes` may still fail to decode to a point.
//!
//! ## Serde
//!
//! - Public keys serialize/deserialize as 64-character hex strings.
//! - Signatures serialize/deserialize as 128-character hex strings.
//! - Seeds are secret and have no serde or hex rendering.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::SignatureError;

/// Length of a private key seed, in bytes.
pub const SEED_LENGTH: usize = 32;

/// Length of an encoded public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of an encoded scalar, in bytes.
pub const SCALAR_LENGTH: usize = 32;

/// Length of a signature (`R || S`), in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

const R_LENGTH: usize = SIGNATURE_LENGTH - SCALAR_LENGTH;

/// A 32-byte private key seed. Not `Clone`; wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SeedBytes([u8; SEED_LENGTH]);

/// A 32-byte public key encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKeyBytes(pub [u8; PUBLIC_KEY_LENGTH]);

/// A 64-byte signature: the encoded commitment point `R` followed by the
/// encoded response scalar `S`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureBytes(pub [u8; SIGNATURE_LENGTH]);

// ---------------------------------------------------------------------------
// SeedBytes impls
// ---------------------------------------------------------------------------

impl SeedBytes {
    /// Wrap a raw 32-byte seed.
    pub fn from_bytes(bytes: [u8; SEED_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Copy a seed out of a slice, rejecting any length but 32.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let arr: [u8; SEED_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidSeedLength(bytes.len()))?;
        Ok(Self(arr))
    }

    /// Borrow the raw seed.
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for SeedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SeedBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SeedBytes(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// PublicKeyBytes impls
// ---------------------------------------------------------------------------

impl PublicKeyBytes {
    /// Wrap a raw 32-byte encoding.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Copy an encoding out of a slice. Any length other than 32 is an
    /// invalid public key encoding.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let arr: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidPublicKeyEncoding)?;
        Ok(Self(arr))
    }

    /// Return the raw 32-byte encoding.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(text: &str) -> Result<Self, SignatureError> {
        Ok(Self(decode_hex_array(text)?))
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for PublicKeyBytes {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for PublicKeyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for PublicKeyBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKeyBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for PublicKeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKeyBytes({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for PublicKeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// SignatureBytes impls
// ---------------------------------------------------------------------------

impl SignatureBytes {
    /// Wrap a raw 64-byte signature.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Assemble a signature from its two halves.
    pub fn from_parts(r: &[u8; R_LENGTH], s: &[u8; SCALAR_LENGTH]) -> Self {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..R_LENGTH].copy_from_slice(r);
        bytes[R_LENGTH..].copy_from_slice(s);
        Self(bytes)
    }

    /// Copy a signature out of a slice, rejecting any length but 64.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let arr: [u8; SIGNATURE_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidSignatureLength(bytes.len()))?;
        Ok(Self(arr))
    }

    /// Return the raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// The encoded commitment point `R` (first half).
    pub fn r_bytes(&self) -> [u8; R_LENGTH] {
        let mut r = [0u8; R_LENGTH];
        r.copy_from_slice(&self.0[..R_LENGTH]);
        r
    }

    /// The encoded response scalar `S` (second half).
    pub fn s_bytes(&self) -> [u8; SCALAR_LENGTH] {
        let mut s = [0u8; SCALAR_LENGTH];
        s.copy_from_slice(&self.0[R_LENGTH..]);
        s
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 128-character hex string.
    pub fn from_hex(text: &str) -> Result<Self, SignatureError> {
        Ok(Self(decode_hex_array(text)?))
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for SignatureBytes {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for SignatureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for SignatureBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SignatureBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for SignatureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SignatureBytes({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for SignatureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Hex helpers
// ---------------------------------------------------------------------------

fn hex_prefix(bytes: &[u8]) -> String {
    hex::encode(&bytes[..bytes.len().min(4)])
}

fn decode_hex_array<const N: usize>(text: &str) -> Result<[u8; N], SignatureError> {
    let text = text.trim();
    if text.len() != N * 2 {
        return Err(SignatureError::HexDecode(format!(
            "expected {} hex chars, got {}",
            N * 2,
            text.len()
        )));
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(text, &mut out).map_err(|e| SignatureError::HexDecode(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn public_key_hex_roundtrip() {
        let pk = PublicKeyBytes::from_bytes([0xab; 32]);
        let text = pk.to_hex();
        assert_eq!(text.len(), 64);
        assert_eq!(PublicKeyBytes::from_hex(&text).unwrap(), pk);
    }

    #[test]
    fn public_key_hex_accepts_uppercase_and_whitespace() {
        let text = format!("  {}\n", "CD".repeat(32));
        let pk = PublicKeyBytes::from_hex(&text).unwrap();
        assert_eq!(pk.as_bytes(), &[0xcd; 32]);
    }

    #[test]
    fn public_key_invalid_hex() {
        assert!(PublicKeyBytes::from_hex("not-hex").is_err());
        assert!(PublicKeyBytes::from_hex("aabb").is_err());
        assert!(matches!(
            PublicKeyBytes::from_hex(&"zz".repeat(32)),
            Err(SignatureError::HexDecode(_))
        ));
    }

    #[test]
    fn public_key_from_slice_length() {
        assert!(PublicKeyBytes::from_slice(&[0u8; 32]).is_ok());
        assert_eq!(
            PublicKeyBytes::from_slice(&[0u8; 31]),
            Err(SignatureError::InvalidPublicKeyEncoding)
        );
    }

    #[test]
    fn signature_from_slice_rejects_63_and_65() {
        assert_eq!(
            SignatureBytes::from_slice(&[0u8; 63]),
            Err(SignatureError::InvalidSignatureLength(63))
        );
        assert_eq!(
            SignatureBytes::from_slice(&[0u8; 65]),
            Err(SignatureError::InvalidSignatureLength(65))
        );
    }

    #[test]
    fn seed_from_slice_length() {
        let seed = SeedBytes::from_slice(&[9u8; 32]).unwrap();
        assert_eq!(seed.as_bytes(), &[9u8; 32]);
        assert_eq!(
            SeedBytes::from_slice(&[0u8; 31]).unwrap_err(),
            SignatureError::InvalidSeedLength(31)
        );
        assert_eq!(
            SeedBytes::from_slice(&[]).unwrap_err(),
            SignatureError::InvalidSeedLength(0)
        );
    }

    #[test]
    fn seed_debug_is_redacted() {
        let seed = SeedBytes::from_bytes([0x5a; 32]);
        let rendered = format!("{seed:?}");
        assert_eq!(rendered, "SeedBytes(<redacted>)");
        assert!(!rendered.contains("5a"));
    }

    #[test]
    fn seed_zeroize_clears_bytes() {
        let mut seed = SeedBytes::from_bytes([0xff; 32]);
        seed.zeroize();
        assert_eq!(seed.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn signature_s_half_is_scalar_length() {
        let sig = SignatureBytes::from_bytes([3u8; SIGNATURE_LENGTH]);
        assert_eq!(sig.s_bytes().len(), SCALAR_LENGTH);
        assert_eq!(sig.r_bytes().len() + sig.s_bytes().len(), SIGNATURE_LENGTH);
    }

    #[test]
    fn signature_parts_split_r_then_s() {
        let sig = SignatureBytes::from_parts(&[1u8; 32], &[2u8; 32]);
        assert_eq!(sig.r_bytes(), [1u8; 32]);
        assert_eq!(sig.s_bytes(), [2u8; 32]);
        assert_eq!(sig.as_bytes()[0], 1);
        assert_eq!(sig.as_bytes()[63], 2);
    }

    #[test]
    fn signature_serde_json_is_quoted_hex() {
        let sig = SignatureBytes::from_bytes([7u8; 64]);
        let json = serde_json::to_string(&sig).unwrap();
        assert!(json.starts_with('"'));
        assert_eq!(json.len(), 128 + 2);
        let back: SignatureBytes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn public_key_serde_rejects_short_hex() {
        let result: Result<PublicKeyBytes, _> = serde_json::from_str("\"abcd\"");
        assert!(result.is_err());
    }

    #[test]
    fn debug_shows_only_prefix() {
        let pk = PublicKeyBytes::from_bytes([0x11; 32]);
        assert_eq!(format!("{pk:?}"), "PublicKeyBytes(11111111...)");
        let sig = SignatureBytes::from_bytes([0x22; 64]);
        assert_eq!(format!("{sig:?}"), "SignatureBytes(22222222...)");
    }

    proptest! {
        #[test]
        fn display_is_parseable(bytes in prop::array::uniform32(any::<u8>())) {
            let pk = PublicKeyBytes::from_bytes(bytes);
            let parsed = PublicKeyBytes::from_hex(&pk.to_string()).unwrap();
            prop_assert_eq!(parsed, pk);
        }
    }
}
