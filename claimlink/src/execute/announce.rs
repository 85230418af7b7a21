//! Announce handler.
//!
//! Registers an unfunded link. Checks run in a fixed order so that clients
//! always see the same error for the same bad request.

use common::ExtendedAsset;
use cosmwasm_std::{to_json_binary, DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::msg::AnnounceResponse;
use crate::registry::{ensure_contract_exists, ensure_symbol_registered};
use crate::state::{insert_link, load_config, next_link_id, Link, MAX_MEMO_BYTES};
use crate::verify::PublicKey;

/// Execute handler for announcing a link
pub fn execute_announce(
    deps: DepsMut,
    info: MessageInfo,
    creator: String,
    key: PublicKey,
    token: ExtendedAsset,
    memo: String,
) -> Result<Response, ContractError> {
    if info.sender.as_str() != creator {
        return Err(ContractError::missing_authority(&creator));
    }
    let creator = info.sender;

    load_config(deps.storage)?;

    let contract = ensure_contract_exists(deps.as_ref(), &token.contract)?;
    ensure_symbol_registered(&deps.querier, &contract, &token.quantity.symbol)?;

    if !token.quantity.is_valid() {
        return Err(ContractError::InvalidQuantity);
    }
    if token.quantity.amount <= 0 {
        return Err(ContractError::NonPositiveQuantity);
    }
    if memo.len() > MAX_MEMO_BYTES {
        return Err(ContractError::MemoTooLong);
    }
    if !key.is_well_formed() {
        return Err(ContractError::InvalidPublicKey);
    }

    let link_id = next_link_id(deps.storage)?;
    let link = Link {
        link_id,
        creator,
        key,
        token: ExtendedAsset::new(contract, token.quantity),
        tokens_transferred: false,
        memo,
    };
    insert_link(deps.storage, &link)?;

    // Off-chain observers recover the assigned id from these two events
    let link_start = Event::new("link_start").add_attribute("link_id", link_id.to_string());
    let mut new_link = Event::new("new_link")
        .add_attribute("link_id", link_id.to_string())
        .add_attribute("creator", link.creator.as_str())
        .add_attribute("key_type", link.key.curve())
        .add_attribute("key", hex::encode(link.key.as_bytes()))
        .add_attribute("contract", link.token.contract.as_str())
        .add_attribute("quantity", link.token.quantity.to_string());
    // empty attribute values are rejected by the host
    if !link.memo.is_empty() {
        new_link = new_link.add_attribute("memo", link.memo.as_str());
    }

    Ok(Response::new()
        .set_data(to_json_binary(&AnnounceResponse { link_id })?)
        .add_event(link_start)
        .add_event(new_link)
        .add_attribute("method", "announce")
        .add_attribute("link_id", link_id.to_string())
        .add_attribute("creator", link.creator))
}
