#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Empty, Env, StdError, StdResult};
use cw721_base::QueryMsg as Cw721QueryMsg;

use crate::{
    mint::is_whitelisted,
    msg::{ConfigResponse, MintCountResponse, QueryMsg},
    state::{UndeadCollection, CONFIG, MINT_COUNTS, OWNER},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::SaleState {} => to_binary(&CONFIG.load(deps.storage)?.sale_state),
        QueryMsg::WhitelistPrice {} => to_binary(&CONFIG.load(deps.storage)?.whitelist_price),
        QueryMsg::PublicPrice {} => to_binary(&CONFIG.load(deps.storage)?.public_price),
        QueryMsg::MaxPerWhitelist {} => to_binary(&CONFIG.load(deps.storage)?.max_per_whitelist),
        QueryMsg::MaxPerPublic {} => to_binary(&CONFIG.load(deps.storage)?.max_per_public),
        QueryMsg::MaxSupply {} => to_binary(&CONFIG.load(deps.storage)?.max_supply),
        QueryMsg::TotalSupply {} => to_binary(&query_total_supply(deps)?),
        QueryMsg::TokenUri { token_id } => to_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::WhitelistRoot {} => to_binary(&CONFIG.load(deps.storage)?.whitelist_root),
        QueryMsg::BaseUri {} => to_binary(&CONFIG.load(deps.storage)?.base_uri),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::MintCount { address } => to_binary(&query_mint_count(deps, address)?),
        QueryMsg::Owner {} => to_binary(&OWNER.query_admin(deps)?),
        QueryMsg::IsWhitelisted { address, proof } => {
            to_binary(&query_is_whitelisted(deps, address, proof)?)
        }
        QueryMsg::OwnerOf {
            token_id,
            include_expired,
        } => collection_query(
            deps,
            env,
            Cw721QueryMsg::OwnerOf {
                token_id,
                include_expired,
            },
        ),
        QueryMsg::NumTokens {} => collection_query(deps, env, Cw721QueryMsg::NumTokens {}),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => collection_query(
            deps,
            env,
            Cw721QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            },
        ),
        QueryMsg::AllTokens { start_after, limit } => {
            collection_query(deps, env, Cw721QueryMsg::AllTokens { start_after, limit })
        }
        QueryMsg::ContractInfo {} => collection_query(deps, env, Cw721QueryMsg::ContractInfo {}),
    }
}

fn collection_query(deps: Deps, env: Env, msg: Cw721QueryMsg<Empty>) -> StdResult<Binary> {
    UndeadCollection::default().query(deps, env, msg)
}

pub fn query_total_supply(deps: Deps) -> StdResult<u64> {
    UndeadCollection::default().token_count(deps.storage)
}

/// `base_uri` followed by the decimal id, for minted tokens only.
pub fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<String> {
    let collection = UndeadCollection::default();
    let key = token_id.to_string();
    if collection.tokens.may_load(deps.storage, &key)?.is_none() {
        return Err(StdError::not_found(format!("token {}", token_id)));
    }

    let config = CONFIG.load(deps.storage)?;
    Ok(format!("{}{}", config.base_uri, token_id))
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        config: CONFIG.load(deps.storage)?,
        total_supply: query_total_supply(deps)?,
    })
}

pub fn query_mint_count(deps: Deps, address: String) -> StdResult<MintCountResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let count = MINT_COUNTS.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(MintCountResponse { address, count })
}

pub fn query_is_whitelisted(deps: Deps, address: String, proof: Vec<String>) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(is_whitelisted(&config, &addr, &proof))
}
