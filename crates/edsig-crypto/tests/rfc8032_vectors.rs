//! # RFC 8032 §7.1 Test Vectors
//!
//! Known-answer tests for Ed25519: each vector fixes the seed, message,
//! public key, and signature. Signing must reproduce the signature bytes
//! exactly and verification of the expected signature must accept. These
//! vectors are shared by every conforming implementation; a mismatch means
//! edsig is not interoperable.

use edsig_crypto::{verify, Ed25519PrivateKey, SignatureError};

struct Vector {
    name: &'static str,
    seed: &'static str,
    public_key: &'static str,
    message: &'static str,
    signature: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        name: "TEST 1 (empty message)",
        seed: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        public_key: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        message: "",
        signature: "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
    },
    Vector {
        name: "TEST 2 (one byte)",
        seed: "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        public_key: "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
        message: "72",
        signature: "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    },
    Vector {
        name: "TEST 3 (two bytes)",
        seed: "c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7",
        public_key: "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025",
        message: "af82",
        signature: "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a",
    },
    Vector {
        name: "TEST SHA(abc)",
        seed: "833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42",
        public_key: "ec172b93ad5e563bf4932c70e1245034c35467ef2efd4d64ebf819683467e2bf",
        message: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        signature: "dc2a4459e7369633a52b1bf277839a00201009a3efbf3ecb69bea2186c26b58909351fc9ac90b3ecfdfbc7c66431e0303dca179c138ac17ad9bef1177331a704",
    },
];

/// Group order L, little-endian.
const L_BYTES: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

fn key_for(v: &Vector) -> Ed25519PrivateKey {
    let seed = hex::decode(v.seed).unwrap();
    Ed25519PrivateKey::from_seed_slice(&seed).unwrap()
}

#[test]
fn public_keys_match_vectors() {
    for v in VECTORS {
        let key = key_for(v);
        assert_eq!(key.public_key().to_string(), v.public_key, "{}", v.name);
    }
}

#[test]
fn signatures_match_vectors() {
    for v in VECTORS {
        let key = key_for(v);
        let message = hex::decode(v.message).unwrap();
        let sig = key.sign(&message);
        assert_eq!(sig.to_hex(), v.signature, "{}", v.name);
    }
}

#[test]
fn expected_signatures_verify() {
    for v in VECTORS {
        let public_key = hex::decode(v.public_key).unwrap();
        let message = hex::decode(v.message).unwrap();
        let signature = hex::decode(v.signature).unwrap();
        assert_eq!(verify(&signature, &message, &public_key), Ok(()), "{}", v.name);
    }
}

#[test]
fn any_flipped_bit_is_rejected() {
    let v = &VECTORS[2];
    let public_key = hex::decode(v.public_key).unwrap();
    let message = hex::decode(v.message).unwrap();
    let signature = hex::decode(v.signature).unwrap();

    for bit in 0..message.len() * 8 {
        let mut tampered = message.clone();
        tampered[bit / 8] ^= 1 << (bit % 8);
        assert_eq!(
            verify(&signature, &tampered, &public_key),
            Err(SignatureError::SignatureMismatch),
            "message bit {bit}"
        );
    }

    for bit in 0..512 {
        let mut tampered = signature.clone();
        tampered[bit / 8] ^= 1 << (bit % 8);
        let result = verify(&tampered, &message, &public_key);
        assert!(result.is_err(), "signature bit {bit} accepted");
        assert!(result.unwrap_err().is_rejection());
    }
}

#[test]
fn s_equal_to_group_order_rejected() {
    let v = &VECTORS[0];
    let public_key = hex::decode(v.public_key).unwrap();
    let mut signature = hex::decode(v.signature).unwrap();
    signature[32..].copy_from_slice(&L_BYTES);
    assert_eq!(
        verify(&signature, b"", &public_key),
        Err(SignatureError::NonCanonicalScalarEncoding)
    );
}

#[test]
fn s_equal_to_group_order_plus_one_rejected() {
    let v = &VECTORS[0];
    let public_key = hex::decode(v.public_key).unwrap();
    let mut signature = hex::decode(v.signature).unwrap();
    let mut l_plus_one = L_BYTES;
    l_plus_one[0] += 1;
    signature[32..].copy_from_slice(&l_plus_one);
    assert_eq!(
        verify(&signature, b"", &public_key),
        Err(SignatureError::NonCanonicalScalarEncoding)
    );
}

#[test]
fn s_plus_group_order_malleation_rejected() {
    // S' = S + L is congruent to S but must not verify.
    let v = &VECTORS[0];
    let public_key = hex::decode(v.public_key).unwrap();
    let mut signature = hex::decode(v.signature).unwrap();
    let mut carry = 0u16;
    for i in 0..32 {
        let sum = signature[32 + i] as u16 + L_BYTES[i] as u16 + carry;
        signature[32 + i] = sum as u8;
        carry = sum >> 8;
    }
    assert_eq!(carry, 0);
    assert_eq!(
        verify(&signature, b"", &public_key),
        Err(SignatureError::NonCanonicalScalarEncoding)
    );
}

#[test]
fn wrong_length_signatures_rejected() {
    let v = &VECTORS[1];
    let public_key = hex::decode(v.public_key).unwrap();
    let message = hex::decode(v.message).unwrap();
    let signature = hex::decode(v.signature).unwrap();

    assert_eq!(
        verify(&signature[..63], &message, &public_key),
        Err(SignatureError::InvalidSignatureLength(63))
    );
    let mut long = signature.clone();
    long.push(0);
    assert_eq!(
        verify(&long, &message, &public_key),
        Err(SignatureError::InvalidSignatureLength(65))
    );
    assert_eq!(
        verify(&[], &message, &public_key),
        Err(SignatureError::InvalidSignatureLength(0))
    );
}

#[test]
fn non_canonical_r_rejected() {
    let v = &VECTORS[0];
    let public_key = hex::decode(v.public_key).unwrap();
    let mut signature = hex::decode(v.signature).unwrap();
    // y = p + 1: decodes to the identity only if non-canonical input is tolerated.
    let mut r = [0xffu8; 32];
    r[0] = 0xee;
    r[31] = 0x7f;
    signature[..32].copy_from_slice(&r);
    assert_eq!(
        verify(&signature, b"", &public_key),
        Err(SignatureError::InvalidSignaturePointEncoding)
    );
}

#[test]
fn non_canonical_public_key_rejected() {
    let v = &VECTORS[0];
    let signature = hex::decode(v.signature).unwrap();
    let mut negative_zero = [0u8; 32];
    negative_zero[0] = 1;
    negative_zero[31] = 0x80;
    assert_eq!(
        verify(&signature, b"", &negative_zero),
        Err(SignatureError::InvalidPublicKeyEncoding)
    );
}
