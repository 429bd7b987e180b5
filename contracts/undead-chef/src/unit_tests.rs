use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
use cosmwasm_std::{
    coin, coins, Addr, CosmosMsg, DepsMut, Empty, HexBinary, StdError, Uint128, WasmMsg,
};
use cw_utils::PaymentError;
use sg_std::NATIVE_DENOM;
use undead_merkle::MerkleTree;

use crate::contract::{execute, instantiate, is_owner, migrate};
use crate::helpers::UndeadChefContract;
use crate::mint::{ensure_payment, is_whitelisted};
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::query::{query_config, query_mint_count, query_token_uri, query_total_supply};
use crate::state::{Config, SaleState, CONFIG};
use crate::ContractError;

const CREATOR: &str = "creator";
const IMPOSTER: &str = "imposter";

fn setup(deps: DepsMut) {
    let msg = InstantiateMsg {
        name: "Savage Nation".to_string(),
        symbol: "Savage".to_string(),
        base_uri: "https://savage.com/".to_string(),
    };
    instantiate(deps, mock_env(), mock_info(CREATOR, &[]), msg).unwrap();
}

#[test]
fn init() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    let res = query_config(deps.as_ref()).unwrap();
    assert_eq!(
        res.config,
        Config::with_defaults("https://savage.com/".to_string())
    );
    assert_eq!(res.total_supply, 0);

    let version = cw2::get_contract_version(&deps.storage).unwrap();
    assert_eq!(version.contract, "crates.io:undead-chef");
}

#[test]
fn owner_check() {
    let owner = Addr::unchecked(CREATOR);
    let other = Addr::unchecked(IMPOSTER);

    assert!(is_owner(&owner, Some(&owner)));
    assert!(!is_owner(&other, Some(&owner)));
    assert!(!is_owner(&owner, None));
}

#[test]
fn imposter_leaves_config_untouched() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());
    let before = CONFIG.load(&deps.storage).unwrap();

    let msgs = vec![
        ExecuteMsg::SetWhitelistPrice {
            price: Uint128::new(1),
        },
        ExecuteMsg::SetPublicPrice {
            price: Uint128::new(1),
        },
        ExecuteMsg::SetMintsPerWhitelist { limit: 9 },
        ExecuteMsg::SetMintsPerPublic { limit: 9 },
        ExecuteMsg::SetMaxSupply { max_supply: 9 },
        ExecuteMsg::SetWhitelistRoot {
            root: "00".repeat(32),
        },
        ExecuteMsg::SetBaseUri {
            base_uri: "ipfs://".to_string(),
        },
        ExecuteMsg::SetSaleState {
            state: SaleState::Public,
        },
        ExecuteMsg::TransferOwnership {
            new_owner: IMPOSTER.to_string(),
        },
        ExecuteMsg::Withdraw {},
    ];
    for msg in msgs {
        let err = execute(deps.as_mut(), mock_env(), mock_info(IMPOSTER, &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::NotOwner(Addr::unchecked(IMPOSTER)));
        assert_eq!(
            err.to_string(),
            format!("IERC173_NOT_OWNER(\"{}\")", IMPOSTER)
        );
    }

    assert_eq!(CONFIG.load(&deps.storage).unwrap(), before);
}

#[test]
fn exact_payment() {
    let price = Uint128::new(5_000);

    assert!(ensure_payment(&mock_info(CREATOR, &coins(5_000, NATIVE_DENOM)), price).is_ok());
    assert_eq!(
        ensure_payment(&mock_info(CREATOR, &coins(5_001, NATIVE_DENOM)), price).unwrap_err(),
        ContractError::IncorrectPayment {}
    );
    assert_eq!(
        ensure_payment(&mock_info(CREATOR, &coins(4_999, NATIVE_DENOM)), price).unwrap_err(),
        ContractError::IncorrectPayment {}
    );
    assert_eq!(
        ensure_payment(&mock_info(CREATOR, &[]), price).unwrap_err(),
        ContractError::IncorrectPayment {}
    );

    // free mints take no funds at all
    assert!(ensure_payment(&mock_info(CREATOR, &[]), Uint128::zero()).is_ok());

    assert_eq!(
        ensure_payment(&mock_info(CREATOR, &coins(5_000, "uatom")), price).unwrap_err(),
        ContractError::Payment(PaymentError::ExtraDenom("uatom".to_string()))
    );
    assert!(matches!(
        ensure_payment(
            &mock_info(
                CREATOR,
                &[coin(5_000, NATIVE_DENOM), coin(1, "uatom")]
            ),
            price
        )
        .unwrap_err(),
        ContractError::Payment(_)
    ));
}

#[test]
fn public_mint_helper_attaches_total_price() {
    let chef = UndeadChefContract(Addr::unchecked("chef"));

    let msg = chef.mint_public(3, Uint128::new(3_300)).unwrap();
    match msg {
        CosmosMsg::Wasm(WasmMsg::Execute { funds, .. }) => {
            assert_eq!(funds, coins(9_900, NATIVE_DENOM));
        }
        _ => panic!("expected a wasm execute message"),
    }

    let err = chef.mint_public(2, Uint128::MAX).unwrap_err();
    assert!(matches!(err, StdError::Overflow { .. }));
}

#[test]
fn whitelist_check_needs_published_root() {
    let tree: MerkleTree = MerkleTree::from_addresses(&["addr0001", "addr0002", "addr0003"]);
    let proof = tree.hex_proof(1).unwrap();
    let member = Addr::unchecked("addr0002");

    let mut config = Config::with_defaults(String::new());
    assert!(!is_whitelisted(&config, &member, &proof));

    config.whitelist_root = Some(HexBinary::from(tree.root().unwrap().to_vec()));
    assert!(is_whitelisted(&config, &member, &proof));
    assert!(!is_whitelisted(&config, &Addr::unchecked("addr0004"), &proof));
    assert!(!is_whitelisted(&config, &member, &["zz".to_string()]));
}

#[test]
fn whitelist_mint_counts_allotment() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    let tree: MerkleTree = MerkleTree::from_addresses(&["addr0001", "addr0002"]);
    let info = mock_info(CREATOR, &[]);
    execute(
        deps.as_mut(),
        mock_env(),
        info.clone(),
        ExecuteMsg::SetWhitelistRoot {
            root: tree.hex_root().unwrap(),
        },
    )
    .unwrap();
    execute(
        deps.as_mut(),
        mock_env(),
        info,
        ExecuteMsg::SetSaleState {
            state: SaleState::Private,
        },
    )
    .unwrap();

    let msg = ExecuteMsg::MintWhitelist {
        proof: tree.hex_proof(1).unwrap(),
    };
    let minter = mock_info("addr0002", &coins(5_000, NATIVE_DENOM));
    execute(deps.as_mut(), mock_env(), minter.clone(), msg.clone()).unwrap();

    assert_eq!(query_total_supply(deps.as_ref()).unwrap(), 3);
    let res = query_mint_count(deps.as_ref(), "addr0002".to_string()).unwrap();
    assert_eq!(res.count.whitelist, 3);
    assert_eq!(res.count.public, 0);

    let err = execute(deps.as_mut(), mock_env(), minter, msg).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Whitelist_CONSUMED(\"addr0002\")".to_string()
    );
}

#[test]
fn token_uri_only_for_minted_tokens() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    assert!(matches!(
        query_token_uri(deps.as_ref(), 1).unwrap_err(),
        StdError::NotFound { .. }
    ));

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(CREATOR, &[]),
        ExecuteMsg::SetSaleState {
            state: SaleState::Public,
        },
    )
    .unwrap();
    execute(
        deps.as_mut(),
        mock_env(),
        mock_info("buyer", &coins(3_300, NATIVE_DENOM)),
        ExecuteMsg::MintPublic { quantity: 1 },
    )
    .unwrap();

    assert_eq!(
        query_token_uri(deps.as_ref(), 1).unwrap(),
        "https://savage.com/1"
    );
    assert!(query_token_uri(deps.as_ref(), 0).is_err());
    assert!(query_token_uri(deps.as_ref(), 2).is_err());
}

#[test]
fn withdraw_without_balance() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info(CREATOR, &[]),
        ExecuteMsg::Withdraw {},
    )
    .unwrap_err();
    assert_eq!(err, ContractError::NoFunds {});
}

#[test]
fn migrate_version_checks() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    // same version is a no-op
    let res = migrate(deps.as_mut(), mock_env(), Empty {}).unwrap();
    assert_eq!(res.attributes.len(), 1);

    cw2::set_contract_version(deps.as_mut().storage, "crates.io:undead-chef", "99.0.0").unwrap();
    let err = migrate(deps.as_mut(), mock_env(), Empty {}).unwrap_err();
    assert_eq!(
        err,
        ContractError::Downgrade {
            from: "99.0.0".to_string(),
            to: env!("CARGO_PKG_VERSION").to_string(),
        }
    );

    cw2::set_contract_version(deps.as_mut().storage, "crates.io:undead-chef", "one").unwrap();
    let err = migrate(deps.as_mut(), mock_env(), Empty {}).unwrap_err();
    assert_eq!(err, ContractError::InvalidVersion("one".to_string()));

    cw2::set_contract_version(deps.as_mut().storage, "crates.io:cw721-base", "0.1.0").unwrap();
    let err = migrate(deps.as_mut(), mock_env(), Empty {}).unwrap_err();
    assert_eq!(
        err,
        ContractError::ForeignContract("crates.io:cw721-base".to_string())
    );

    cw2::set_contract_version(deps.as_mut().storage, "crates.io:undead-chef", "0.0.1").unwrap();
    let res = migrate(deps.as_mut(), mock_env(), Empty {}).unwrap();
    assert_eq!(res.attributes[1].value, "0.0.1");
    let version = cw2::get_contract_version(&deps.storage).unwrap();
    assert_eq!(version.version, env!("CARGO_PKG_VERSION"));
}
