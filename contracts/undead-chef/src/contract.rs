use std::cmp::Ordering;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    Addr, BankMsg, Deps, DepsMut, Empty, Env, Event, HexBinary, MessageInfo, Uint128,
};
use cw2::set_contract_version;
use cw721_base::InstantiateMsg as Cw721InstantiateMsg;
use cw_utils::nonpayable;
use semver::Version;
use sg_std::{Response, NATIVE_DENOM};
use undead_merkle::parse_hash;

use crate::error::ContractError;
use crate::mint::{execute_mint_public, execute_mint_whitelist};
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{Config, SaleState, UndeadCollection, CONFIG, OWNER};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:undead-chef";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // the contract mints into its own collection storage
    UndeadCollection::default().instantiate(
        deps.branch(),
        env.clone(),
        info.clone(),
        Cw721InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            minter: env.contract.address.to_string(),
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.set(deps.branch(), Some(info.sender.clone()))?;
    CONFIG.save(deps.storage, &Config::with_defaults(msg.base_uri))?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract_name", CONTRACT_NAME)
        .add_attribute("contract_version", CONTRACT_VERSION)
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetWhitelistPrice { price } => execute_set_whitelist_price(deps, info, price),
        ExecuteMsg::SetPublicPrice { price } => execute_set_public_price(deps, info, price),
        ExecuteMsg::SetMintsPerWhitelist { limit } => {
            execute_set_mints_per_whitelist(deps, info, limit)
        }
        ExecuteMsg::SetMintsPerPublic { limit } => execute_set_mints_per_public(deps, info, limit),
        ExecuteMsg::SetMaxSupply { max_supply } => execute_set_max_supply(deps, info, max_supply),
        ExecuteMsg::SetWhitelistRoot { root } => execute_set_whitelist_root(deps, info, root),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetSaleState { state } => execute_set_sale_state(deps, info, state),
        ExecuteMsg::MintWhitelist { proof } => execute_mint_whitelist(deps, info, proof),
        ExecuteMsg::MintPublic { quantity } => execute_mint_public(deps, info, quantity),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

pub fn is_owner(caller: &Addr, owner: Option<&Addr>) -> bool {
    owner == Some(caller)
}

/// Fails with the caller's address unless it is the stored owner.
pub fn only_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let owner = OWNER.get(deps)?;
    if !is_owner(&info.sender, owner.as_ref()) {
        return Err(ContractError::NotOwner(info.sender.clone()));
    }
    nonpayable(info)?;
    Ok(())
}

/// Shared path for every owner setter: authorize, apply, persist.
fn update_config<F>(
    deps: DepsMut,
    info: &MessageInfo,
    update: F,
) -> Result<Config, ContractError>
where
    F: FnOnce(&mut Config),
{
    only_owner(deps.as_ref(), info)?;
    let mut config = CONFIG.load(deps.storage)?;
    update(&mut config);
    CONFIG.save(deps.storage, &config)?;
    Ok(config)
}

pub fn execute_set_whitelist_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    update_config(deps, &info, |c| c.whitelist_price = price)?;

    let event = Event::new("update_whitelist_price")
        .add_attribute("price", price)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_public_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    update_config(deps, &info, |c| c.public_price = price)?;

    let event = Event::new("update_public_price")
        .add_attribute("price", price)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_mints_per_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    limit: u32,
) -> Result<Response, ContractError> {
    update_config(deps, &info, |c| c.max_per_whitelist = limit)?;

    let event = Event::new("update_mints_per_whitelist")
        .add_attribute("limit", limit.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_mints_per_public(
    deps: DepsMut,
    info: MessageInfo,
    limit: u32,
) -> Result<Response, ContractError> {
    update_config(deps, &info, |c| c.max_per_public = limit)?;

    let event = Event::new("update_mints_per_public")
        .add_attribute("limit", limit.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

/// Not bounded by the current supply; a lower cap only stops further mints.
pub fn execute_set_max_supply(
    deps: DepsMut,
    info: MessageInfo,
    max_supply: u64,
) -> Result<Response, ContractError> {
    update_config(deps, &info, |c| c.max_supply = max_supply)?;

    let event = Event::new("update_max_supply")
        .add_attribute("max_supply", max_supply.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_whitelist_root(
    deps: DepsMut,
    info: MessageInfo,
    root: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let root = HexBinary::from(
        parse_hash(&root)
            .map_err(|_| ContractError::InvalidMerkleRoot {})?
            .to_vec(),
    );

    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.whitelist_root = Some(root.clone());
        Ok(config)
    })?;

    let event = Event::new("update_whitelist_root")
        .add_attribute("root", root.to_hex())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    update_config(deps, &info, |c| c.base_uri = base_uri.clone())?;

    let event = Event::new("update_base_uri")
        .add_attribute("base_uri", base_uri)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_sale_state(
    deps: DepsMut,
    info: MessageInfo,
    state: SaleState,
) -> Result<Response, ContractError> {
    update_config(deps, &info, |c| c.sale_state = state)?;

    let event = Event::new("update_sale_state")
        .add_attribute("state", state.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let new_owner = deps.api.addr_validate(&new_owner)?;
    OWNER.set(deps, Some(new_owner.clone()))?;

    let event = Event::new("transfer_ownership")
        .add_attribute("new_owner", new_owner)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;

    let balance = deps
        .querier
        .query_balance(env.contract.address, NATIVE_DENOM)?;
    if balance.amount.is_zero() {
        return Err(ContractError::NoFunds {});
    }

    let event = Event::new("withdraw")
        .add_attribute("amount", balance.amount)
        .add_attribute("recipient", info.sender.clone());
    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![balance],
        })
        .add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    let stored = cw2::get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::ForeignContract(stored.contract));
    }

    let from = parse_version(&stored.version)?;
    let to = parse_version(CONTRACT_VERSION)?;
    let res = Response::new().add_attribute("action", "migrate");
    match from.cmp(&to) {
        Ordering::Greater => Err(ContractError::Downgrade {
            from: stored.version,
            to: CONTRACT_VERSION.to_string(),
        }),
        Ordering::Equal => Ok(res),
        Ordering::Less => {
            set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
            Ok(res
                .add_attribute("from_version", stored.version)
                .add_attribute("to_version", CONTRACT_VERSION))
        }
    }
}

fn parse_version(version: &str) -> Result<Version, ContractError> {
    version
        .parse()
        .map_err(|_| ContractError::InvalidVersion(version.to_string()))
}
