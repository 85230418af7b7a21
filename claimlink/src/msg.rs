//! Message types for the claim-link contract

use common::ExtendedAsset;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

use crate::state::Link;
use crate::verify::PublicKey;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Announce a new claim link.
    ///
    /// Authorization: `creator`
    ///
    /// The link is unfunded until the creator sends the announced quantity
    /// with a `ReceiveMsg::Link` hook. The assigned id is returned in the
    /// response data and in the `link_start`/`new_link` events.
    Announce {
        creator: String,
        /// Public half of the claim key shared with the recipient
        key: PublicKey,
        /// Token contract and exact quantity to escrow
        token: ExtendedAsset,
        memo: String,
    },

    /// Fund an announced link (called by the token contract via CW20 send)
    Receive(cw20::Cw20ReceiveMsg),

    /// Withdraw a link before it is claimed. A funded link is refunded to
    /// the creator.
    ///
    /// Authorization: link creator
    Cancel { link_id: u64 },

    /// Redeem a funded link into `claimer`.
    ///
    /// Authorization: `claimer`
    ///
    /// `claimer_signature` is a 64-byte compact secp256k1 (or ed25519)
    /// signature over `sha256(claimer)` made with the link's private key.
    Claim {
        link_id: u64,
        claimer: String,
        claimer_signature: Binary,
    },
}

/// CW20 hook messages. The hook message plays the role of a transfer memo.
#[cw_serde]
pub enum ReceiveMsg {
    /// Fund the sender's pending link for this token
    Link {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(LinkResponse)]
    Link { link_id: u64 },

    /// All links, ascending by id
    #[returns(LinksResponse)]
    Links {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Links announced by `creator`, ascending by id
    #[returns(LinksResponse)]
    LinksByCreator {
        creator: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Digest `claimer` has to sign to redeem a link
    #[returns(ClaimDigestResponse)]
    ClaimDigest { claimer: String },
}

// ============================================================================
// Responses
// ============================================================================

/// Response data of `ExecuteMsg::Announce`
#[cw_serde]
pub struct AnnounceResponse {
    pub link_id: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub version: String,
    pub link_counter: u64,
}

#[cw_serde]
pub struct LinkResponse {
    pub link_id: u64,
    pub creator: Addr,
    pub key: PublicKey,
    pub token: ExtendedAsset,
    pub tokens_transferred: bool,
    pub memo: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            link_id: link.link_id,
            creator: link.creator,
            key: link.key,
            token: link.token,
            tokens_transferred: link.tokens_transferred,
            memo: link.memo,
        }
    }
}

#[cw_serde]
pub struct LinksResponse {
    pub links: Vec<LinkResponse>,
}

#[cw_serde]
pub struct ClaimDigestResponse {
    pub claimer: Addr,
    /// Raw 32-byte digest
    pub digest: Binary,
    /// Same digest, hex encoded
    pub digest_hex: String,
}
