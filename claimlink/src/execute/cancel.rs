//! Cancel handler.
//!
//! The creator may withdraw a link at any point before it is claimed. A
//! funded link is refunded in the same transaction so escrow is never
//! stranded.

use cosmwasm_std::{CosmosMsg, DepsMut, MessageInfo, Response};

use super::claim::escrow_transfer;
use crate::error::ContractError;
use crate::state::{remove_link, LINKS};

/// Execute handler for withdrawing a link
pub fn execute_cancel(
    deps: DepsMut,
    info: MessageInfo,
    link_id: u64,
) -> Result<Response, ContractError> {
    let link = LINKS
        .may_load(deps.storage, link_id)?
        .ok_or(ContractError::LinkNotFound)?;

    if info.sender != link.creator {
        return Err(ContractError::missing_authority(&link.creator));
    }

    let mut messages: Vec<CosmosMsg> = vec![];
    if link.tokens_transferred {
        messages.push(escrow_transfer(&link, &link.creator)?);
    }

    remove_link(deps.storage, &link);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "cancel")
        .add_attribute("link_id", link_id.to_string())
        .add_attribute("token", link.token.to_string())
        .add_attribute("creator", link.creator)
        .add_attribute("refunded", link.tokens_transferred.to_string()))
}
