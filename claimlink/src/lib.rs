//! Claim Link Contract - Signature-Redeemable Token Escrow
//!
//! A creator announces a link bound to a public key and an exact CW20
//! quantity, funds it by sending that quantity to this contract, and shares
//! the private key off-chain. Whoever holds the key can redeem the escrow
//! into an account of their choice.
//!
//! # Lifecycle
//! 1. `Announce` stores an unfunded link and emits its id
//! 2. CW20 `Send` with the `link` hook funds it (excess is refunded)
//! 3. `Claim` with a signature over the claimer's address pays out and deletes it
//! 4. `Cancel` lets the creator delete it instead, refunding a funded link
//!
//! # Security
//! - Claim signatures are bound to the receiving account, so a copied claim
//!   transaction cannot be redirected
//! - Escrow always equals the announced quantity exactly
//! - Links are deleted on claim or cancel and ids are never reused

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod registry;
pub mod state;
pub mod verify;

pub use crate::error::ContractError;
pub use crate::execute::claim_with;
pub use crate::verify::{claim_digest, ApiVerifier, ClaimVerifier, PublicKey};
