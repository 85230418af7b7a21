//! Token registry lookups.
//!
//! The contract never keeps its own token list: a token contract is accepted
//! when it exists on chain and answers the CW20 `TokenInfo` query with the
//! symbol and precision the caller claims.

use common::Symbol;
use cosmwasm_std::{Addr, Deps, QuerierWrapper};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::error::ContractError;

/// Validate `contract` and check a contract is deployed at that address.
pub fn ensure_contract_exists(deps: Deps, contract: &Addr) -> Result<Addr, ContractError> {
    let addr = deps
        .api
        .addr_validate(contract.as_str())
        .map_err(|_| ContractError::ContractNotFound)?;
    deps.querier
        .query_wasm_contract_info(addr.as_str())
        .map_err(|_| ContractError::ContractNotFound)?;
    Ok(addr)
}

/// Symbol (ticker and decimals) a CW20 contract issues.
pub fn query_token_symbol(querier: &QuerierWrapper, contract: &Addr) -> Result<Symbol, ContractError> {
    let info: TokenInfoResponse = querier
        .query_wasm_smart(contract, &Cw20QueryMsg::TokenInfo {})
        .map_err(|_| ContractError::SymbolNotFound)?;
    Ok(Symbol::new(info.symbol, info.decimals))
}

/// Check that `contract` issues exactly `symbol`.
pub fn ensure_symbol_registered(
    querier: &QuerierWrapper,
    contract: &Addr,
    symbol: &Symbol,
) -> Result<(), ContractError> {
    let registered = query_token_symbol(querier, contract)?;
    if &registered != symbol {
        return Err(ContractError::SymbolNotFound);
    }
    Ok(())
}
