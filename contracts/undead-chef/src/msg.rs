use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{HexBinary, Uint128};
use cw721::{ContractInfoResponse, NumTokensResponse, OwnerOfResponse, TokensResponse};
use cw_controllers::AdminResponse;

use crate::state::{Config, MintCount, SaleState};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Price of one whitelist mint call
    SetWhitelistPrice { price: Uint128 },
    /// Price per token of a public mint
    SetPublicPrice { price: Uint128 },
    /// Whitelist allotment per address
    SetMintsPerWhitelist { limit: u32 },
    SetMintsPerPublic { limit: u32 },
    SetMaxSupply { max_supply: u64 },
    /// Hex encoded 32 byte root, `0x` prefix optional
    SetWhitelistRoot { root: String },
    SetBaseUri { base_uri: String },
    SetSaleState { state: SaleState },
    /// Mint the remaining whitelist allotment of the sender
    MintWhitelist { proof: Vec<String> },
    MintPublic { quantity: u32 },
    /// Hand the contract over to a new owner
    TransferOwnership { new_owner: String },
    /// Send the collected mint proceeds to the owner
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(SaleState)]
    SaleState {},
    #[returns(Uint128)]
    WhitelistPrice {},
    #[returns(Uint128)]
    PublicPrice {},
    #[returns(u32)]
    MaxPerWhitelist {},
    #[returns(u32)]
    MaxPerPublic {},
    #[returns(u64)]
    MaxSupply {},
    #[returns(u64)]
    TotalSupply {},
    #[returns(String)]
    TokenUri { token_id: u64 },
    #[returns(Option<HexBinary>)]
    WhitelistRoot {},
    #[returns(String)]
    BaseUri {},
    #[returns(ConfigResponse)]
    Config {},
    #[returns(MintCountResponse)]
    MintCount { address: String },
    #[returns(AdminResponse)]
    Owner {},
    /// Whether `proof` admits `address` against the current root
    #[returns(bool)]
    IsWhitelisted { address: String, proof: Vec<String> },
    #[returns(OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(NumTokensResponse)]
    NumTokens {},
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(ContractInfoResponse)]
    ContractInfo {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
    pub total_supply: u64,
}

#[cw_serde]
pub struct MintCountResponse {
    pub address: String,
    pub count: MintCount,
}
