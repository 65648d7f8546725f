pub mod contract;
mod error;
#[cfg(test)]
pub mod integration_tests;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
