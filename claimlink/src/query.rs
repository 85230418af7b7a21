//! Query handlers for the claim-link contract.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{ClaimDigestResponse, ConfigResponse, LinkResponse, LinksResponse};
use crate::state::{creator_link_ids, CONFIG, DEFAULT_LIMIT, LINKS, MAX_LIMIT};
use crate::verify::claim_digest;

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        version: config.version,
        link_counter: config.link_counter,
    })
}

/// Query a single link by id.
pub fn query_link(deps: Deps, link_id: u64) -> StdResult<LinkResponse> {
    LINKS
        .may_load(deps.storage, link_id)?
        .map(LinkResponse::from)
        .ok_or_else(|| StdError::not_found(format!("link {}", link_id)))
}

/// Query paginated list of all links.
pub fn query_links(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<LinksResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<u64>> = start_after.map(Bound::exclusive);

    let page = LINKS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, link)| LinkResponse::from(link)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(LinksResponse { links: page })
}

/// Query paginated list of the links announced by `creator`.
pub fn query_links_by_creator(
    deps: Deps,
    creator: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<LinksResponse> {
    let creator = deps.api.addr_validate(&creator)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    let page = creator_link_ids(deps.storage, &creator, start_after)
        .take(limit)
        .map(|link_id| LINKS.load(deps.storage, link_id?).map(LinkResponse::from))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(LinksResponse { links: page })
}

/// Digest a claimant signs to redeem a link.
pub fn query_claim_digest(deps: Deps, claimer: String) -> StdResult<ClaimDigestResponse> {
    let claimer = deps.api.addr_validate(&claimer)?;
    let digest = claim_digest(&claimer);
    Ok(ClaimDigestResponse {
        claimer,
        digest: Binary::from(digest.to_vec()),
        digest_hex: hex::encode(digest),
    })
}
