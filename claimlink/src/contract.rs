//! Claim Link Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_announce, execute_cancel, execute_claim, execute_receive};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_claim_digest, query_config, query_link, query_links, query_links_by_creator,
};
use crate::state::{load_config, Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FIRST_LINK_ID};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        version: CONTRACT_VERSION.to_string(),
        link_counter: FIRST_LINK_ID,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("version", config.version)
        .add_attribute("link_counter", config.link_counter.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Announce {
            creator,
            key,
            token,
            memo,
        } => execute_announce(deps, info, creator, key, token, memo),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::Cancel { link_id } => execute_cancel(deps, info, link_id),
        ExecuteMsg::Claim {
            link_id,
            claimer,
            claimer_signature,
        } => execute_claim(deps, info, link_id, claimer, claimer_signature.as_slice()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Link { link_id } => to_json_binary(&query_link(deps, link_id)?),
        QueryMsg::Links { start_after, limit } => {
            to_json_binary(&query_links(deps, start_after, limit)?)
        }
        QueryMsg::LinksByCreator {
            creator,
            start_after,
            limit,
        } => to_json_binary(&query_links_by_creator(deps, creator, start_after, limit)?),
        QueryMsg::ClaimDigest { claimer } => to_json_binary(&query_claim_digest(deps, claimer)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // The link counter carries over untouched
    let mut config = load_config(deps.storage)?;
    config.version = CONTRACT_VERSION.to_string();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
