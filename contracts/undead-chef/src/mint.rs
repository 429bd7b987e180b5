use cosmwasm_std::{Addr, DepsMut, Event, MessageInfo, Storage, Uint128};
use cw721_base::state::TokenInfo;
use cw_utils::may_pay;
use sg_std::{Response, NATIVE_DENOM};
use undead_merkle::{leaf_for, parse_proof, verify, Keccak256};

use crate::error::ContractError;
use crate::state::{Config, SaleState, UndeadCollection, CONFIG, MINT_COUNTS};

pub fn execute_mint_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    proof: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_sale_state(&config, SaleState::Private)?;

    if !is_whitelisted(&config, &info.sender, &proof) {
        return Err(ContractError::WhitelistForbidden(info.sender));
    }

    let mut minted = MINT_COUNTS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    // one call takes whatever is left of the allotment
    let quantity = config.max_per_whitelist.saturating_sub(minted.whitelist);
    if quantity == 0 {
        return Err(ContractError::WhitelistConsumed(info.sender));
    }

    ensure_payment(&info, config.whitelist_price)?;
    ensure_supply(deps.storage, &config, quantity)?;

    let token_ids = mint_tokens(deps.storage, &info.sender, quantity)?;
    minted.whitelist += quantity;
    MINT_COUNTS.save(deps.storage, &info.sender, &minted)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_event(mint_event(&info.sender, "whitelist", &token_ids)))
}

pub fn execute_mint_public(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_sale_state(&config, SaleState::Public)?;

    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    ensure_payment(&info, config.public_price.checked_mul(quantity.into())?)?;

    let mut minted = MINT_COUNTS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if u64::from(minted.public) + u64::from(quantity) > u64::from(config.max_per_public) {
        return Err(ContractError::ExceedsMintPerWallet {});
    }

    ensure_supply(deps.storage, &config, quantity)?;

    let token_ids = mint_tokens(deps.storage, &info.sender, quantity)?;
    minted.public += quantity;
    MINT_COUNTS.save(deps.storage, &info.sender, &minted)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_event(mint_event(&info.sender, "public", &token_ids)))
}

fn ensure_sale_state(config: &Config, expected: SaleState) -> Result<(), ContractError> {
    if config.sale_state != expected {
        return Err(ContractError::SaleNotActive {});
    }
    Ok(())
}

/// Exact amount only, sending nothing counts as zero.
pub fn ensure_payment(info: &MessageInfo, expected: Uint128) -> Result<(), ContractError> {
    let paid = may_pay(info, NATIVE_DENOM)?;
    if paid != expected {
        return Err(ContractError::IncorrectPayment {});
    }
    Ok(())
}

fn ensure_supply(storage: &dyn Storage, config: &Config, quantity: u32) -> Result<(), ContractError> {
    let total_supply = UndeadCollection::default().token_count(storage)?;
    if total_supply + u64::from(quantity) > config.max_supply {
        return Err(ContractError::ExceedsSupply {});
    }
    Ok(())
}

/// Unset roots and undecodable proofs admit nobody.
pub fn is_whitelisted(config: &Config, address: &Addr, proof: &[String]) -> bool {
    let root = match config
        .whitelist_root
        .as_ref()
        .and_then(|r| <[u8; 32]>::try_from(r.as_slice()).ok())
    {
        Some(root) => root,
        None => return false,
    };
    let proof = match parse_proof(proof) {
        Ok(proof) => proof,
        Err(_) => return false,
    };

    verify::<Keccak256>(&leaf_for::<Keccak256>(address.as_str()), &proof, &root)
}

/// Allocates the next `quantity` sequential ids to `owner`, first id is 1.
fn mint_tokens(
    storage: &mut dyn Storage,
    owner: &Addr,
    quantity: u32,
) -> Result<Vec<String>, ContractError> {
    let collection = UndeadCollection::default();

    let mut token_ids = Vec::with_capacity(quantity as usize);
    for _ in 0..quantity {
        let token_id = collection.increment_tokens(storage)?.to_string();
        let token = TokenInfo {
            owner: owner.clone(),
            approvals: vec![],
            token_uri: None,
            extension: None,
        };
        collection
            .tokens
            .update(storage, &token_id, |old| match old {
                Some(_) => Err(ContractError::Claimed {}),
                None => Ok(token),
            })?;
        token_ids.push(token_id);
    }
    Ok(token_ids)
}

fn mint_event(minter: &Addr, pathway: &str, token_ids: &[String]) -> Event {
    Event::new("mint")
        .add_attribute("minter", minter)
        .add_attribute("pathway", pathway)
        .add_attribute("quantity", token_ids.len().to_string())
        .add_attribute("first_token_id", token_ids.first().cloned().unwrap_or_default())
        .add_attribute("last_token_id", token_ids.last().cloned().unwrap_or_default())
}
