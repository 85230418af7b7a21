//! Error types for the claim-link contract
//!
//! Messages are surfaced verbatim to the submitter and are part of the
//! contract's public interface: clients match on them.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("missing required authority {account}")]
    MissingAuthority { account: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("contract account does not exist")]
    ContractNotFound,

    #[error("token symbol does not exist")]
    SymbolNotFound,

    #[error("invalid quantity")]
    InvalidQuantity,

    #[error("quantity amount must be positive")]
    NonPositiveQuantity,

    #[error("memo has more than 256 bytes")]
    MemoTooLong,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("Invalid memo")]
    InvalidMemo,

    #[error("Insufficient quantity")]
    InsufficientQuantity,

    // ========================================================================
    // Not Found Errors
    // ========================================================================

    #[error("No announced link by this sender for this token exists")]
    NoAnnouncedLink,

    #[error("no link with this id exists")]
    LinkNotFound,

    // ========================================================================
    // State Errors
    // ========================================================================

    #[error("smart contract has not been initialized yet")]
    NotInitialized,

    #[error("tokens for this link have not been transferred yet")]
    LinkNotFunded,

    // ========================================================================
    // Signature Errors
    // ========================================================================

    #[error("The signature provided is not valid")]
    InvalidSignature,
}

impl ContractError {
    pub fn missing_authority(account: impl ToString) -> Self {
        ContractError::MissingAuthority {
            account: account.to_string(),
        }
    }
}
