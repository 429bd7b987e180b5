pub mod contract;
mod error;
pub mod helpers;
pub mod mint;
pub mod msg;
pub mod query;
pub mod state;
#[cfg(test)]
mod unit_tests;

pub use crate::error::ContractError;
