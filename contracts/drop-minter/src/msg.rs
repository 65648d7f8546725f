use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};

use crate::state::{Config, PaymentPolicy, Phase, PhasePolicy};

#[cw_serde]
pub enum AllowlistSourceMsg {
    /// 32-byte merkle root committing the presale membership set
    MerkleRoot { root: HexBinary },
    /// Address of an allowlist-registry contract
    Registry { address: String },
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiator
    pub admin: Option<String>,
    pub collection_code_id: u64,
    pub name: String,
    pub symbol: String,
    pub base_uri: Option<String>,
    pub max_supply: u32,
    pub unit_price: Uint128,
    pub mint_denom: String,
    pub public_limit: u32,
    pub allowlist: AllowlistSourceMsg,
    pub phase: PhasePolicy,
    pub payment: PaymentPolicy,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Public-phase mint of `quantity` units at `unit_price` each
    MintPublic { quantity: u32 },
    /// Presale mint of exactly one unit against the allowlist.
    /// `proof` is required in merkle mode and ignored in registry mode.
    MintAllowlist { proof: Option<Vec<HexBinary>> },
    /// Admin mint to any recipient; bypasses payment and quotas
    MintTo { recipient: String, quantity: u32 },
    /// One-way phase transition, only under the `AdminToggle` policy
    SetPhasePublic {},
    SetBaseUri { base_uri: Option<String> },
    /// Send the entire accumulated balance to the admin
    Withdraw {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Phase)]
    Phase {},
    #[returns(u32)]
    TotalIssued {},
    #[returns(Addr)]
    Collection {},
    #[returns(WalletResponse)]
    Wallet { address: String },
    /// Committed allowlist merkle root; None under registry mode
    #[returns(Option<HexBinary>)]
    MerkleRoot {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
}

#[cw_serde]
pub struct WalletResponse {
    pub public_minted: u32,
    pub allowlist_claimed: bool,
    /// Public-phase quota still available, including any bonus slot
    pub public_remaining: u32,
}
