//! Common - Shared Token Types for the Claim Link Contracts
//!
//! This package provides the fungible token value types (symbol, asset and
//! contract-qualified asset) shared by the claim-link contract and its clients.

pub mod asset;

pub use asset::{Asset, ExtendedAsset, Symbol};
