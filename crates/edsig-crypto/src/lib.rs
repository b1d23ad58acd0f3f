//! # edsig-crypto — Ed25519 Signatures
//!
//! Implements the Ed25519 signature scheme from RFC 8032:
//!
//! - **Key derivation**: 32-byte seed → clamped secret scalar, nonce
//!   prefix, and public key. Performed once, eagerly, at construction.
//! - **Signing**: deterministic nonce from `SHA-512(prefix || M)`, challenge
//!   from `SHA-512(R || A || M)`, response `S = r + k·a mod L`.
//! - **Verification**: length check, canonical decoding of `A`, `R`, and
//!   `S`, then the cofactored equation `[8][S]B = [8]R + [8][k]A`.
//!
//! ## Curve Arithmetic
//!
//! Field and group arithmetic is not implemented here. The scheme is
//! written against the [`CurveGroup`] capability trait; [`Curve25519`]
//! implements it over `curve25519-dalek`. Keys are generic over the group
//! with `Curve25519` as the default, so the scheme logic can run against
//! any implementation of the trait.
//!
//! ## Crate Policy
//!
//! - Secret material (seed, scalar, prefix) is owned, never `Clone`, and
//!   zeroized on drop.
//! - The hash is SHA-512 and is not configurable.
//! - Log events carry rejection reasons only, never key material or
//!   message contents.

pub mod curve;
pub mod entropy;
pub mod hash;
pub mod keys;
pub mod sign;
pub mod verify;

pub use curve::{Curve25519, CurveGroup};
pub use edsig_core::{PublicKeyBytes, SeedBytes, SignatureBytes, SignatureError};
pub use keys::{Ed25519PrivateKey, Ed25519PublicKey, PrivateKey, PublicKey};
pub use sign::sign;
pub use verify::{verify, verify_with_group};
