use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, HexBinary, Uint128};
use cw721_base::{Cw721Contract, Extension};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use sg_std::StargazeMsgWrapper;

/// Tokens live in cw721 storage so holders are visible through the standard queries
pub type UndeadCollection<'a> = Cw721Contract<'a, Extension, StargazeMsgWrapper, Empty, Empty>;

pub const DEFAULT_WHITELIST_PRICE: u128 = 5_000;
pub const DEFAULT_PUBLIC_PRICE: u128 = 3_300;
pub const DEFAULT_MAX_PER_WHITELIST: u32 = 3;
pub const DEFAULT_MAX_PER_PUBLIC: u32 = 3;
pub const DEFAULT_MAX_SUPPLY: u64 = 4000;

#[cw_serde]
#[derive(Copy, Default)]
pub enum SaleState {
    #[default]
    Paused,
    Private,
    PrivateNext,
    Public,
}

impl std::fmt::Display for SaleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SaleState::Paused => "paused",
            SaleState::Private => "private",
            SaleState::PrivateNext => "private_next",
            SaleState::Public => "public",
        };
        write!(f, "{}", s)
    }
}

#[cw_serde]
pub struct Config {
    pub sale_state: SaleState,
    /// Price of one whitelist mint call, in the native denom
    pub whitelist_price: Uint128,
    /// Price per token of a public mint, in the native denom
    pub public_price: Uint128,
    pub max_per_whitelist: u32,
    pub max_per_public: u32,
    pub max_supply: u64,
    /// Unset until the owner publishes a whitelist
    pub whitelist_root: Option<HexBinary>,
    pub base_uri: String,
}

impl Config {
    pub fn with_defaults(base_uri: String) -> Self {
        Config {
            sale_state: SaleState::default(),
            whitelist_price: Uint128::new(DEFAULT_WHITELIST_PRICE),
            public_price: Uint128::new(DEFAULT_PUBLIC_PRICE),
            max_per_whitelist: DEFAULT_MAX_PER_WHITELIST,
            max_per_public: DEFAULT_MAX_PER_PUBLIC,
            max_supply: DEFAULT_MAX_SUPPLY,
            whitelist_root: None,
            base_uri,
        }
    }
}

#[cw_serde]
#[derive(Default)]
pub struct MintCount {
    pub whitelist: u32,
    pub public: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const OWNER: Admin = Admin::new("owner");

/// Address -> tokens minted through each pathway
pub const MINT_COUNTS: Map<&Addr, MintCount> = Map::new("mc");
