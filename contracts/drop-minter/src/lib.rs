pub mod contract;
mod error;
pub mod merkle;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
