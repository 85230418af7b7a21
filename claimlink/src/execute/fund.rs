//! Funding handler (CW20 receive hook).
//!
//! The token contract calls `Receive` synchronously while executing the
//! creator's `Send`, so matching the link, flipping `tokens_transferred` and
//! refunding any excess all commit or revert together with the transfer.

use common::Symbol;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, CosmosMsg, DepsMut, Event, MessageInfo, Response,
    StdResult, Storage, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::registry::query_token_symbol;
use crate::state::{creator_link_ids, Link, LINKS, MAX_PENDING_SCAN};

/// Plain-text transfer memo accepted in place of the JSON hook
const LINK_MEMO: &[u8] = b"link";

/// Execute handler for CW20 tokens sent to the contract
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    match parse_hook(&cw20_msg.msg)? {
        ReceiveMsg::Link {} => {
            let token = info.sender;
            let from = deps.api.addr_validate(&cw20_msg.sender)?;
            let received = cw20_msg.amount;

            let symbol = query_token_symbol(&deps.querier, &token)?;
            let mut link = find_pending_link(deps.storage, &from, &token, &symbol)?
                .ok_or(ContractError::NoAnnouncedLink)?;

            // CW20 amounts are u128; only the announced quantity is bounded
            let announced = link.token.quantity.to_uint128()?;
            if received < announced {
                return Err(ContractError::InsufficientQuantity);
            }

            link.tokens_transferred = true;
            LINKS.save(deps.storage, link.link_id, &link)?;

            let excess = received - announced;
            let mut messages: Vec<CosmosMsg> = vec![];
            if !excess.is_zero() {
                messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: token.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: from.to_string(),
                        amount: excess,
                    })?,
                    funds: vec![],
                }));
            }

            Ok(Response::new()
                .add_messages(messages)
                .add_event(
                    Event::new("link_funded").add_attribute("link_id", link.link_id.to_string()),
                )
                .add_attribute("method", "fund")
                .add_attribute("link_id", link.link_id.to_string())
                .add_attribute("sender", from)
                .add_attribute("token", token)
                .add_attribute("received", symbol.format_units(received.u128()))
                .add_attribute("refund", symbol.format_units(excess.u128())))
        }
    }
}

/// Decode the hook: either the bare `link` memo or a JSON `ReceiveMsg`.
fn parse_hook(msg: &Binary) -> Result<ReceiveMsg, ContractError> {
    if msg.as_slice() == LINK_MEMO {
        return Ok(ReceiveMsg::Link {});
    }
    from_json(msg).map_err(|_| ContractError::InvalidMemo)
}

/// Earliest unfunded link of `creator` for this token contract and symbol,
/// looking at no more than `MAX_PENDING_SCAN` of the creator's links.
fn find_pending_link(
    storage: &dyn Storage,
    creator: &Addr,
    contract: &Addr,
    symbol: &Symbol,
) -> StdResult<Option<Link>> {
    for link_id in creator_link_ids(storage, creator, None).take(MAX_PENDING_SCAN) {
        let link = LINKS.load(storage, link_id?)?;
        if !link.tokens_transferred
            && &link.token.contract == contract
            && &link.token.quantity.symbol == symbol
        {
            return Ok(Some(link));
        }
    }
    Ok(None)
}
