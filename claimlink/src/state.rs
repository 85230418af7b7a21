//! State definitions for the claim-link contract
//!
//! The contract owns two records: the `Config` singleton holding the link id
//! counter, and the `LINKS` map of escrow records with a secondary index on
//! the creator address.

use common::ExtendedAsset;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};

use crate::error::ContractError;
use crate::verify::PublicKey;

// ============================================================================
// Records
// ============================================================================

/// Contract configuration singleton
#[cw_serde]
pub struct Config {
    /// Version of the contract that last wrote the config
    pub version: String,
    /// Id the next announced link receives
    pub link_counter: u64,
}

/// Escrow record for one claim link
#[cw_serde]
pub struct Link {
    pub link_id: u64,
    /// Account that announced (and funds) the link
    pub creator: Addr,
    /// Public half of the link's claim key
    pub key: PublicKey,
    /// Token contract and exact quantity held in escrow
    pub token: ExtendedAsset,
    /// Set once the creator has transferred the announced quantity
    pub tokens_transferred: bool,
    pub memo: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:claimlink";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// First id handed out after instantiation
pub const FIRST_LINK_ID: u64 = 1;

/// Longest accepted link memo, in bytes
pub const MAX_MEMO_BYTES: usize = 256;

/// Most of a creator's links examined when matching an incoming transfer
pub const MAX_PENDING_SCAN: usize = 50;

/// Default and maximum page sizes for enumeration queries
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Links keyed by `link_id`
pub const LINKS: Map<u64, Link> = Map::new("links");

/// Creator index over `LINKS`: (creator, link_id) -> exists
pub const LINKS_BY_CREATOR: Map<(&Addr, u64), bool> = Map::new("links_by_creator");

/// Store a newly announced link and index it under its creator.
pub fn insert_link(storage: &mut dyn Storage, link: &Link) -> StdResult<()> {
    LINKS.save(storage, link.link_id, link)?;
    LINKS_BY_CREATOR.save(storage, (&link.creator, link.link_id), &true)
}

/// Delete a link together with its index entry.
pub fn remove_link(storage: &mut dyn Storage, link: &Link) {
    LINKS.remove(storage, link.link_id);
    LINKS_BY_CREATOR.remove(storage, (&link.creator, link.link_id));
}

/// Ids of the links announced by `creator`, ascending.
pub fn creator_link_ids<'a>(
    storage: &'a dyn Storage,
    creator: &Addr,
    start_after: Option<u64>,
) -> Box<dyn Iterator<Item = StdResult<u64>> + 'a> {
    let start: Option<Bound<u64>> = start_after.map(Bound::exclusive);
    LINKS_BY_CREATOR
        .prefix(creator)
        .keys(storage, start, None, Order::Ascending)
}

/// Load the config, failing if the contract was never initialized.
pub fn load_config(storage: &dyn Storage) -> Result<Config, ContractError> {
    CONFIG
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)
}

/// Hand out the next link id and advance the counter.
pub fn next_link_id(storage: &mut dyn Storage) -> Result<u64, ContractError> {
    let mut config = load_config(storage)?;
    let link_id = config.link_counter;
    config.link_counter = link_id
        .checked_add(1)
        .ok_or_else(|| cosmwasm_std::StdError::generic_err("link counter overflow"))?;
    CONFIG.save(storage, &config)?;
    Ok(link_id)
}
