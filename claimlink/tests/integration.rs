//! Integration tests for the claim-link contract using cw-multi-test.
//!
//! These tests cover instantiation, announce validation, link queries and
//! cancellation against a real cw20-base token.

use common::{Asset, ExtendedAsset};
use cosmwasm_std::{from_json, to_json_binary, Addr, Binary, Empty, Event, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use claimlink::msg::{
    AnnounceResponse, ClaimDigestResponse, ConfigResponse, ExecuteMsg, InstantiateMsg,
    LinkResponse, LinksResponse, QueryMsg, ReceiveMsg,
};
use claimlink::PublicKey;

// ============================================================================
// Test Setup
// ============================================================================

const ALICE: &str = "alice";
const BOB: &str = "bob";

/// 1000 WAX at 8 decimals
const INITIAL_BALANCE: u128 = 100_000_000_000;

fn contract_claimlink() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        claimlink::contract::execute,
        claimlink::contract::instantiate,
        claimlink::contract::query,
    )
    .with_migrate(claimlink::contract::migrate);
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    contract: Addr,
    wax: Addr,
}

fn setup() -> Suite {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");

    let cw20_code_id = app.store_code(contract_cw20());
    let wax = app
        .instantiate_contract(
            cw20_code_id,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Wax Token".to_string(),
                symbol: "WAX".to_string(),
                decimals: 8,
                initial_balances: vec![
                    Cw20Coin {
                        address: ALICE.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                    Cw20Coin {
                        address: BOB.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                ],
                mint: None,
                marketing: None,
            },
            &[],
            "wax",
            None,
        )
        .unwrap();

    let code_id = app.store_code(contract_claimlink());
    let contract = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {},
            &[],
            "claimlink",
            Some(owner.to_string()),
        )
        .unwrap();

    Suite { app, contract, wax }
}

/// Compressed secp256k1 public key (fixed test key)
fn test_key() -> PublicKey {
    let mut key = vec![0x02];
    key.extend_from_slice(&[0x79; 32]);
    PublicKey::Secp256k1(Binary::from(key))
}

impl Suite {
    fn announce(
        &mut self,
        sender: &str,
        creator: &str,
        contract: &Addr,
        quantity: &str,
        memo: &str,
    ) -> Result<AppResponse, String> {
        self.announce_with_key(sender, creator, contract, quantity, memo, test_key())
    }

    fn announce_with_key(
        &mut self,
        sender: &str,
        creator: &str,
        contract: &Addr,
        quantity: &str,
        memo: &str,
        key: PublicKey,
    ) -> Result<AppResponse, String> {
        self.app
            .execute_contract(
                Addr::unchecked(sender),
                self.contract.clone(),
                &ExecuteMsg::Announce {
                    creator: creator.to_string(),
                    key,
                    token: ExtendedAsset::new(contract.clone(), quantity.parse::<Asset>().unwrap()),
                    memo: memo.to_string(),
                },
                &[],
            )
            .map_err(|e| e.root_cause().to_string())
    }

    fn fund(&mut self, sender: &str, amount: u128) -> Result<AppResponse, String> {
        self.app
            .execute_contract(
                Addr::unchecked(sender),
                self.wax.clone(),
                &Cw20ExecuteMsg::Send {
                    contract: self.contract.to_string(),
                    amount: Uint128::new(amount),
                    msg: to_json_binary(&ReceiveMsg::Link {}).unwrap(),
                },
                &[],
            )
            .map_err(|e| e.root_cause().to_string())
    }

    fn cancel(&mut self, sender: &str, link_id: u64) -> Result<AppResponse, String> {
        self.app
            .execute_contract(
                Addr::unchecked(sender),
                self.contract.clone(),
                &ExecuteMsg::Cancel { link_id },
                &[],
            )
            .map_err(|e| e.root_cause().to_string())
    }

    fn link(&self, link_id: u64) -> Option<LinkResponse> {
        self.app
            .wrap()
            .query_wasm_smart(&self.contract, &QueryMsg::Link { link_id })
            .ok()
    }

    fn links_by_creator(
        &self,
        creator: &str,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> Vec<u64> {
        let res: LinksResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.contract,
                &QueryMsg::LinksByCreator {
                    creator: creator.to_string(),
                    start_after,
                    limit,
                },
            )
            .unwrap();
        res.links.into_iter().map(|l| l.link_id).collect()
    }

    fn config(&self) -> ConfigResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.contract, &QueryMsg::Config {})
            .unwrap()
    }

    fn balance(&self, address: &str) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.wax,
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }
}

// ============================================================================
// Instantiate
// ============================================================================

#[test]
fn test_instantiate_initializes_config() {
    let suite = setup();
    let config = suite.config();
    assert_eq!(config.link_counter, 1);
    assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_migrate_preserves_links_and_counter() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    suite.announce(ALICE, ALICE, &wax, "1.00000000 WAX", "").unwrap();

    let code_id = suite.app.store_code(contract_claimlink());
    suite
        .app
        .migrate_contract(
            Addr::unchecked("owner"),
            suite.contract.clone(),
            &claimlink::msg::MigrateMsg {},
            code_id,
        )
        .unwrap();

    assert_eq!(suite.config().link_counter, 2);
    assert!(suite.link(1).is_some());
}

// ============================================================================
// Announce Validation
// ============================================================================

#[test]
fn test_announce_rejects_irrelevant_user_auth() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    let err = suite
        .announce(BOB, ALICE, &wax, "1.00000000 WAX", "Enjoy :)")
        .unwrap_err();
    assert_eq!(err, "missing required authority alice");
}

#[test]
fn test_announce_rejects_non_existing_contract() {
    let mut suite = setup();
    let err = suite
        .announce(ALICE, ALICE, &Addr::unchecked("foo.token"), "1.00000000 WAX", "Enjoy :)")
        .unwrap_err();
    assert_eq!(err, "contract account does not exist");
}

#[test]
fn test_announce_rejects_contract_that_is_not_a_token() {
    let mut suite = setup();
    let not_a_token = suite.contract.clone();
    let err = suite
        .announce(ALICE, ALICE, &not_a_token, "1.00000000 WAX", "Enjoy :)")
        .unwrap_err();
    assert_eq!(err, "token symbol does not exist");
}

#[test]
fn test_announce_rejects_non_existing_token() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    let err = suite
        .announce(ALICE, ALICE, &wax, "1.0000 FOO", "Enjoy :)")
        .unwrap_err();
    assert_eq!(err, "token symbol does not exist");

    // Right code, wrong precision
    let err = suite
        .announce(ALICE, ALICE, &wax, "1.0000 WAX", "Enjoy :)")
        .unwrap_err();
    assert_eq!(err, "token symbol does not exist");
}

#[test]
fn test_announce_rejects_invalid_token_amount() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    let err = suite
        .announce(ALICE, ALICE, &wax, "46116860200.00000000 WAX", "Enjoy :)")
        .unwrap_err();
    assert_eq!(err, "invalid quantity");
}

#[test]
fn test_announce_rejects_non_positive_amount() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    let err = suite
        .announce(ALICE, ALICE, &wax, "-1.00000000 WAX", "Enjoy :)")
        .unwrap_err();
    assert_eq!(err, "quantity amount must be positive");

    let err = suite
        .announce(ALICE, ALICE, &wax, "0.00000000 WAX", "Enjoy :)")
        .unwrap_err();
    assert_eq!(err, "quantity amount must be positive");
}

#[test]
fn test_announce_rejects_long_memo() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    let memo = "x".repeat(257);
    let err = suite
        .announce(ALICE, ALICE, &wax, "1.00000000 WAX", &memo)
        .unwrap_err();
    assert_eq!(err, "memo has more than 256 bytes");

    suite
        .announce(ALICE, ALICE, &wax, "1.00000000 WAX", &"x".repeat(256))
        .unwrap();
}

#[test]
fn test_announce_rejects_malformed_key() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    let err = suite
        .announce_with_key(
            ALICE,
            ALICE,
            &wax,
            "1.00000000 WAX",
            "",
            PublicKey::Secp256k1(Binary::from(vec![0x02; 20])),
        )
        .unwrap_err();
    assert_eq!(err, "invalid public key");
}

#[test]
fn test_failed_announce_does_not_consume_id() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    suite
        .announce(ALICE, ALICE, &wax, "-1.00000000 WAX", "")
        .unwrap_err();
    assert_eq!(suite.config().link_counter, 1);
}

// ============================================================================
// Announce Success
// ============================================================================

#[test]
fn test_announce_creates_link() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    let res = suite
        .announce(ALICE, ALICE, &wax, "1.00000000 WAX", "Enjoy :)")
        .unwrap();

    let data: AnnounceResponse = from_json(res.data.clone().unwrap()).unwrap();
    assert_eq!(data.link_id, 1);

    assert!(res.has_event(&Event::new("wasm-link_start").add_attribute("link_id", "1")));
    assert!(res.has_event(
        &Event::new("wasm-new_link")
            .add_attribute("link_id", "1")
            .add_attribute("creator", ALICE)
            .add_attribute("contract", wax.as_str())
            .add_attribute("quantity", "1.00000000 WAX")
            .add_attribute("memo", "Enjoy :)")
    ));

    let link = suite.link(1).unwrap();
    assert_eq!(link.link_id, 1);
    assert_eq!(link.creator, Addr::unchecked(ALICE));
    assert_eq!(link.key, test_key());
    assert_eq!(link.token.contract, wax);
    assert_eq!(link.token.quantity.to_string(), "1.00000000 WAX");
    assert!(!link.tokens_transferred);
    assert_eq!(link.memo, "Enjoy :)");

    // Announcing moves no tokens
    assert_eq!(suite.balance(ALICE), INITIAL_BALANCE);
}

#[test]
fn test_announce_ids_strictly_increase() {
    let mut suite = setup();
    let wax = suite.wax.clone();

    let mut ids = vec![];
    for (creator, quantity) in [
        (ALICE, "1.00000000 WAX"),
        (BOB, "2.00000000 WAX"),
        (ALICE, "3.00000000 WAX"),
    ] {
        let res = suite.announce(creator, creator, &wax, quantity, "").unwrap();
        let data: AnnounceResponse = from_json(res.data.unwrap()).unwrap();
        ids.push(data.link_id);
    }

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(suite.config().link_counter, 4);

    // Deleting a link does not free its id
    suite.cancel(ALICE, 3).unwrap();
    let res = suite.announce(BOB, BOB, &wax, "1.00000000 WAX", "").unwrap();
    let data: AnnounceResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.link_id, 4);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_links_by_creator_pagination() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    for creator in [ALICE, BOB, ALICE, ALICE, BOB] {
        suite.announce(creator, creator, &wax, "1.00000000 WAX", "").unwrap();
    }

    assert_eq!(suite.links_by_creator(ALICE, None, None), vec![1, 3, 4]);
    assert_eq!(suite.links_by_creator(BOB, None, None), vec![2, 5]);
    assert_eq!(suite.links_by_creator(ALICE, Some(1), Some(1)), vec![3]);
    assert_eq!(suite.links_by_creator(ALICE, Some(4), None), Vec::<u64>::new());

    let all: LinksResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.contract,
            &QueryMsg::Links {
                start_after: Some(2),
                limit: Some(2),
            },
        )
        .unwrap();
    let ids: Vec<u64> = all.links.iter().map(|l| l.link_id).collect();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn test_query_claim_digest() {
    let suite = setup();
    let res: ClaimDigestResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.contract,
            &QueryMsg::ClaimDigest {
                claimer: BOB.to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.claimer, Addr::unchecked(BOB));
    assert_eq!(
        res.digest_hex,
        "81b637d8fcd2c6da6359e6963113a1170de795e4b725b84d1e0b4cfd9ec58ce9"
    );
    assert_eq!(res.digest.as_slice(), claimlink::claim_digest(&Addr::unchecked(BOB)));
}

#[test]
fn test_query_missing_link_errors() {
    let suite = setup();
    assert!(suite.link(500).is_none());
}

// ============================================================================
// Cancel
// ============================================================================

#[test]
fn test_cancel_rejects_non_existing_link() {
    let mut suite = setup();
    let err = suite.cancel(ALICE, 500).unwrap_err();
    assert_eq!(err, "no link with this id exists");
}

#[test]
fn test_cancel_rejects_non_authorized_user() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    suite.announce(ALICE, ALICE, &wax, "1.00000000 WAX", "link").unwrap();

    let err = suite.cancel(BOB, 1).unwrap_err();
    assert_eq!(err, "missing required authority alice");
    assert!(suite.link(1).is_some());
}

#[test]
fn test_cancel_deletes_unfunded_link() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    suite.announce(ALICE, ALICE, &wax, "1.00000000 WAX", "link").unwrap();

    suite.cancel(ALICE, 1).unwrap();

    assert!(suite.link(1).is_none());
    assert!(suite.links_by_creator(ALICE, None, None).is_empty());
    assert_eq!(suite.balance(ALICE), INITIAL_BALANCE);

    let err = suite.cancel(ALICE, 1).unwrap_err();
    assert_eq!(err, "no link with this id exists");
}

#[test]
fn test_cancel_refunds_funded_link() {
    let mut suite = setup();
    let wax = suite.wax.clone();
    suite.announce(ALICE, ALICE, &wax, "1.00000000 WAX", "").unwrap();
    suite.fund(ALICE, 100_000_000).unwrap();
    assert_eq!(suite.balance(ALICE), INITIAL_BALANCE - 100_000_000);
    assert_eq!(suite.balance(suite.contract.as_str()), 100_000_000);

    let res = suite.cancel(ALICE, 1).unwrap();
    assert!(res.has_event(
        &Event::new("wasm")
            .add_attribute("method", "cancel")
            .add_attribute("token", format!("1.00000000 WAX@{}", wax))
            .add_attribute("refunded", "true")
    ));

    assert!(suite.link(1).is_none());
    assert_eq!(suite.balance(ALICE), INITIAL_BALANCE);
    assert_eq!(suite.balance(suite.contract.as_str()), 0);
}
