use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, Uint128, WasmMsg, WasmQuery,
};
use serde::de::DeserializeOwned;
use sg_std::{CosmosMsg, NATIVE_DENOM};

use crate::msg::{ConfigResponse, ExecuteMsg, MintCountResponse, QueryMsg};
use crate::state::SaleState;

/// UndeadChefContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct UndeadChefContract(pub Addr);

impl UndeadChefContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        self.call_with_funds(msg, Uint128::zero())
    }

    /// Attaches `amount` of the native denom, nothing when zero.
    pub fn call_with_funds<T: Into<ExecuteMsg>>(
        &self,
        msg: T,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        let funds = if amount.is_zero() {
            vec![]
        } else {
            coins(amount.u128(), NATIVE_DENOM)
        };
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    pub fn mint_whitelist(&self, proof: Vec<String>, price: Uint128) -> StdResult<CosmosMsg> {
        self.call_with_funds(ExecuteMsg::MintWhitelist { proof }, price)
    }

    pub fn mint_public(&self, quantity: u32, unit_price: Uint128) -> StdResult<CosmosMsg> {
        let total = unit_price.checked_mul(quantity.into())?;
        self.call_with_funds(ExecuteMsg::MintPublic { quantity }, total)
    }

    fn query<T: DeserializeOwned>(&self, querier: &QuerierWrapper, msg: &QueryMsg) -> StdResult<T> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(msg)?,
        }))
    }

    pub fn sale_state(&self, querier: &QuerierWrapper) -> StdResult<SaleState> {
        self.query(querier, &QueryMsg::SaleState {})
    }

    pub fn total_supply(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        self.query(querier, &QueryMsg::TotalSupply {})
    }

    pub fn token_uri(&self, querier: &QuerierWrapper, token_id: u64) -> StdResult<String> {
        self.query(querier, &QueryMsg::TokenUri { token_id })
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<ConfigResponse> {
        self.query(querier, &QueryMsg::Config {})
    }

    pub fn mint_count(
        &self,
        querier: &QuerierWrapper,
        address: &str,
    ) -> StdResult<MintCountResponse> {
        self.query(
            querier,
            &QueryMsg::MintCount {
                address: address.to_string(),
            },
        )
    }
}
