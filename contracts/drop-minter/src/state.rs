use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Where membership for the presale comes from.
#[cw_serde]
pub enum AllowlistSource {
    /// Committed merkle root; each claim carries its own membership proof
    MerkleRoot(HexBinary),
    /// External registry contract answering `IncludesAddress`
    Registry(Addr),
}

/// How the sale moves from Presale to Public. Both policies are one-way.
#[cw_serde]
pub enum PhasePolicy {
    /// Public once the chain clock reaches this time
    StartTime(Timestamp),
    /// Public once the admin flips the flag
    AdminToggle,
}

#[cw_serde]
pub enum PaymentPolicy {
    /// Attached funds must equal the required amount exactly
    Exact,
    /// Attached funds must cover the required amount; excess is returned
    RefundExcess,
}

#[cw_serde]
pub enum Phase {
    Presale,
    Public,
}

/// Immutable after instantiation.
#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub max_supply: u32,
    pub unit_price: Uint128,
    pub mint_denom: String,
    /// Per-wallet limit during the public phase
    pub public_limit: u32,
    pub allowlist: AllowlistSource,
    pub phase: PhasePolicy,
    pub payment: PaymentPolicy,
}

/// Created lazily on first mint, never deleted.
#[cw_serde]
#[derive(Default)]
pub struct WalletRecord {
    pub public_minted: u32,
    /// Monotonic: set once by a successful allowlist claim, never cleared.
    /// Grants one bonus public-phase slot.
    pub allowlist_claimed: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Never exceeds `config.max_supply`, never decremented
pub const TOTAL_ISSUED: Item<u32> = Item::new("total_issued");

pub const WALLETS: Map<&Addr, WalletRecord> = Map::new("wallets");

/// One-way flag, only read under the `AdminToggle` policy
pub const PUBLIC_PHASE: Item<bool> = Item::new("public_phase");

/// cw721 collection this minter issues into; set once in the reply
pub const COLLECTION: Item<Addr> = Item::new("collection");

pub const BASE_URI: Item<Option<String>> = Item::new("base_uri");

pub fn current_phase(storage: &dyn Storage, config: &Config, now: Timestamp) -> StdResult<Phase> {
    let public = match &config.phase {
        PhasePolicy::StartTime(start) => now >= *start,
        PhasePolicy::AdminToggle => PUBLIC_PHASE.load(storage)?,
    };
    Ok(if public { Phase::Public } else { Phase::Presale })
}
