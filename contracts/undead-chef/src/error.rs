use cosmwasm_std::{Addr, OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("IERC173_NOT_OWNER(\"{0}\")")]
    NotOwner(Addr),

    #[error("Whitelist_FORBIDDEN(\"{0}\")")]
    WhitelistForbidden(Addr),

    #[error("Whitelist_CONSUMED(\"{0}\")")]
    WhitelistConsumed(Addr),

    #[error("Sale not active")]
    SaleNotActive {},

    #[error("Ether sent is not correct")]
    IncorrectPayment {},

    #[error("Exceeds mint per wallet")]
    ExceedsMintPerWallet {},

    #[error("Exceeds supply")]
    ExceedsSupply {},

    #[error("Invalid quantity")]
    InvalidQuantity {},

    #[error("Invalid merkle root")]
    InvalidMerkleRoot {},

    #[error("No funds to withdraw")]
    NoFunds {},

    #[error("Token id already claimed")]
    Claimed {},

    #[error("Cannot migrate from contract: {0}")]
    ForeignContract(String),

    #[error("Cannot downgrade from {from} to {to}")]
    Downgrade { from: String, to: String },

    #[error("Invalid contract version: {0}")]
    InvalidVersion(String),
}
