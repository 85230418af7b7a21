//! Claim signature verification
//!
//! A claimant proves possession of a link's private key by signing the
//! SHA-256 digest of the *claiming account's address*, so a signature only
//! ever pays out to the account it names.
//!
//! Verification goes through the [`ClaimVerifier`] trait so the curve and
//! encoding are pluggable. [`ApiVerifier`] is the production implementation
//! and delegates to the host crypto API.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Binary};
use sha2::{Digest, Sha256};

/// Compressed SEC1 secp256k1 key length
pub const SECP256K1_COMPRESSED_LEN: usize = 33;
/// Uncompressed SEC1 secp256k1 key length
pub const SECP256K1_UNCOMPRESSED_LEN: usize = 65;
/// Ed25519 key length
pub const ED25519_KEY_LEN: usize = 32;

/// Public half of a claim key
#[cw_serde]
pub enum PublicKey {
    /// SEC1 encoded secp256k1 key (33 or 65 bytes)
    Secp256k1(Binary),
    /// Raw ed25519 key (32 bytes)
    Ed25519(Binary),
}

impl PublicKey {
    /// Check the encoded length and, for SEC1, the tag byte.
    pub fn is_well_formed(&self) -> bool {
        match self {
            PublicKey::Secp256k1(key) => match key.len() {
                SECP256K1_COMPRESSED_LEN => matches!(key[0], 0x02 | 0x03),
                SECP256K1_UNCOMPRESSED_LEN => key[0] == 0x04,
                _ => false,
            },
            PublicKey::Ed25519(key) => key.len() == ED25519_KEY_LEN,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Secp256k1(key) | PublicKey::Ed25519(key) => key.as_slice(),
        }
    }

    pub fn curve(&self) -> &'static str {
        match self {
            PublicKey::Secp256k1(_) => "secp256k1",
            PublicKey::Ed25519(_) => "ed25519",
        }
    }
}

/// Digest a claimant must sign: `sha256(claimer address)`.
pub fn claim_digest(claimer: &Addr) -> [u8; 32] {
    Sha256::digest(claimer.as_bytes()).into()
}

/// Checks a signature over a message digest against a public key.
pub trait ClaimVerifier {
    /// Returns false for invalid as well as malformed signatures or keys.
    fn verify(&self, digest: &[u8; 32], signature: &[u8], key: &PublicKey) -> bool;
}

/// Verifier backed by the host crypto API
pub struct ApiVerifier<'a> {
    api: &'a dyn Api,
}

impl<'a> ApiVerifier<'a> {
    pub fn new(api: &'a dyn Api) -> Self {
        Self { api }
    }
}

impl ClaimVerifier for ApiVerifier<'_> {
    fn verify(&self, digest: &[u8; 32], signature: &[u8], key: &PublicKey) -> bool {
        let result = match key {
            PublicKey::Secp256k1(pubkey) => self.api.secp256k1_verify(digest, signature, pubkey),
            PublicKey::Ed25519(pubkey) => self.api.ed25519_verify(digest, signature, pubkey),
        };
        result.unwrap_or(false)
    }
}

/// Verify that `signature` was produced by `key` over the claim digest for `claimer`.
pub fn verify_claim(
    verifier: &impl ClaimVerifier,
    claimer: &Addr,
    signature: &[u8],
    key: &PublicKey,
) -> bool {
    verifier.verify(&claim_digest(claimer), signature, key)
}
