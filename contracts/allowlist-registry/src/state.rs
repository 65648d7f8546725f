use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub admin: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const MEMBER_COUNT: Item<u64> = Item::new("member_count");
// Membership flags only, no per-member data
pub const MEMBERS: Map<&Addr, Empty> = Map::new("members");
