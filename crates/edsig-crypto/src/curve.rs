//! # Curve Capability
//!
//! The exact set of group operations the signature scheme needs, as a
//! trait over associated `Point` and `Scalar` types. The scheme never
//! touches field elements or point coordinates directly.
//!
//! ## Decoding Rules
//!
//! - [`CurveGroup::decode_point`] is canonical: it rejects any encoding
//!   that does not re-encode to the same 32 bytes.
//! - [`CurveGroup::decode_scalar_canonical`] rejects values `>= L`.
//! - [`CurveGroup::decode_scalar_with_clamping`] applies [`clamp`] and
//!   never fails.
//! - [`CurveGroup::decode_scalar_mod_order_wide`] reduces a 512-bit
//!   little-endian integer modulo `L`.
//!
//! Clamping and reduction are different operations and are kept as
//! separate functions.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Group operations required by Ed25519 signing and verification.
pub trait CurveGroup: Send + Sync + 'static {
    /// A group element.
    type Point: Clone + Send + Sync;

    /// An integer modulo the prime subgroup order `L`.
    type Scalar: Clone + Zeroize + Send + Sync;

    /// Order of the torsion subgroup; [`CurveGroup::mul_by_cofactor`]
    /// multiplies by this value.
    const COFACTOR: u8;

    /// Canonically decode a 32-byte point encoding.
    fn decode_point(bytes: &[u8; 32]) -> Option<Self::Point>;

    /// Encode a point; inverse of [`CurveGroup::decode_point`].
    fn encode_point(point: &Self::Point) -> [u8; 32];

    /// Decode a scalar, rejecting any value not strictly less than `L`.
    fn decode_scalar_canonical(bytes: &[u8; 32]) -> Option<Self::Scalar>;

    /// Clamp 32 bytes and interpret them as a secret scalar.
    fn decode_scalar_with_clamping(bytes: &[u8; 32]) -> Self::Scalar;

    /// Reduce a 64-byte little-endian integer modulo `L`.
    fn decode_scalar_mod_order_wide(bytes: &[u8; 64]) -> Self::Scalar;

    /// Encode a scalar as 32 little-endian bytes.
    fn encode_scalar(scalar: &Self::Scalar) -> [u8; 32];

    /// `[s]B` for the fixed base point `B`.
    fn scalar_base_mul(scalar: &Self::Scalar) -> Self::Point;

    /// `[s]P`.
    fn scalar_mul(scalar: &Self::Scalar, point: &Self::Point) -> Self::Point;

    /// `P + Q`.
    fn point_add(a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// Multiply by [`CurveGroup::COFACTOR`].
    fn mul_by_cofactor(point: &Self::Point) -> Self::Point;

    /// Group-element equality.
    fn points_equal(a: &Self::Point, b: &Self::Point) -> bool;

    /// `a·b + c mod L`.
    fn multiply_and_add(a: &Self::Scalar, b: &Self::Scalar, c: &Self::Scalar) -> Self::Scalar;
}

/// Apply the Ed25519 clamping rule to a 32-byte little-endian integer:
/// clear the three low bits, clear bit 255, set bit 254.
///
/// The result is a multiple of the cofactor with a fixed bit length.
/// This is not a reduction modulo `L`.
pub fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

/// edwards25519 (cofactor 8) backed by `curve25519-dalek`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Curve25519;

impl CurveGroup for Curve25519 {
    type Point = EdwardsPoint;
    type Scalar = Scalar;

    const COFACTOR: u8 = 8;

    fn decode_point(bytes: &[u8; 32]) -> Option<EdwardsPoint> {
        let point = CompressedEdwardsY(*bytes).decompress()?;
        // decompress() tolerates y >= p and a set sign bit on x = 0.
        let canonical: bool = point.compress().as_bytes()[..].ct_eq(&bytes[..]).into();
        canonical.then_some(point)
    }

    fn encode_point(point: &EdwardsPoint) -> [u8; 32] {
        point.compress().to_bytes()
    }

    fn decode_scalar_canonical(bytes: &[u8; 32]) -> Option<Scalar> {
        Option::from(Scalar::from_canonical_bytes(*bytes))
    }

    fn decode_scalar_with_clamping(bytes: &[u8; 32]) -> Scalar {
        // Scalar stores values mod L; [c]B == [c mod L]B since B has order L.
        Scalar::from_bytes_mod_order(clamp(*bytes))
    }

    fn decode_scalar_mod_order_wide(bytes: &[u8; 64]) -> Scalar {
        Scalar::from_bytes_mod_order_wide(bytes)
    }

    fn encode_scalar(scalar: &Scalar) -> [u8; 32] {
        scalar.to_bytes()
    }

    fn scalar_base_mul(scalar: &Scalar) -> EdwardsPoint {
        EdwardsPoint::mul_base(scalar)
    }

    fn scalar_mul(scalar: &Scalar, point: &EdwardsPoint) -> EdwardsPoint {
        point * scalar
    }

    fn point_add(a: &EdwardsPoint, b: &EdwardsPoint) -> EdwardsPoint {
        a + b
    }

    fn mul_by_cofactor(point: &EdwardsPoint) -> EdwardsPoint {
        point.mul_by_cofactor()
    }

    fn points_equal(a: &EdwardsPoint, b: &EdwardsPoint) -> bool {
        a == b
    }

    fn multiply_and_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        a * b + c
    }
}
