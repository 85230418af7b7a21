//! Claim handler.
//!
//! Pays a funded link's escrow to the claimant and deletes the link.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, DepsMut, MessageInfo, Response, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{remove_link, Link, LINKS};
use crate::verify::{verify_claim, ApiVerifier, ClaimVerifier};

/// Execute handler for redeeming a funded link
pub fn execute_claim(
    deps: DepsMut,
    info: MessageInfo,
    link_id: u64,
    claimer: String,
    claimer_signature: &[u8],
) -> Result<Response, ContractError> {
    let verifier = ApiVerifier::new(deps.api);
    claim_with(deps, info, &verifier, link_id, claimer, claimer_signature)
}

/// Claim using a caller-supplied verifier.
pub fn claim_with(
    deps: DepsMut,
    info: MessageInfo,
    verifier: &impl ClaimVerifier,
    link_id: u64,
    claimer: String,
    claimer_signature: &[u8],
) -> Result<Response, ContractError> {
    let link = LINKS
        .may_load(deps.storage, link_id)?
        .ok_or(ContractError::LinkNotFound)?;

    if !link.tokens_transferred {
        return Err(ContractError::LinkNotFunded);
    }

    if info.sender.as_str() != claimer {
        return Err(ContractError::missing_authority(&claimer));
    }
    let claimer = info.sender;

    if !verify_claim(verifier, &claimer, claimer_signature, &link.key) {
        return Err(ContractError::InvalidSignature);
    }

    let payout = escrow_transfer(&link, &claimer)?;
    remove_link(deps.storage, &link);

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("method", "claim")
        .add_attribute("link_id", link_id.to_string())
        .add_attribute("claimer", claimer)
        .add_attribute("quantity", link.token.quantity.to_string())
        .add_attribute("token", link.token.to_string()))
}

/// CW20 transfer of the link's escrowed quantity to `recipient`
pub(super) fn escrow_transfer(link: &Link, recipient: &Addr) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: link.token.contract.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount: link.token.quantity.to_uint128()?,
        })?,
        funds: vec![],
    }))
}
