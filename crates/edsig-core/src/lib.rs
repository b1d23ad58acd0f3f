//! # edsig-core — Foundational Types for edsig
//!
//! Defines the byte-level interchange formats shared by every edsig crate
//! and the error taxonomy for key derivation, signing, and verification.
//! Depends on nothing internal.
//!
//! ## Wire Formats
//!
//! All encodings are raw fixed-length buffers with no framing, matching
//! every other RFC 8032 implementation:
//!
//! - seed: 32 bytes
//! - public key: 32 bytes (compressed Edwards y with sign bit)
//! - signature: 64 bytes, `R || S`
//!
//! ## Crate Policy
//!
//! - No curve arithmetic here. Types in this crate carry bytes only; point
//!   and scalar validation happens in `edsig-crypto`.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod wire;

pub use error::SignatureError;
pub use wire::{
    PublicKeyBytes, SeedBytes, SignatureBytes, PUBLIC_KEY_LENGTH, SCALAR_LENGTH, SEED_LENGTH,
    SIGNATURE_LENGTH,
};
