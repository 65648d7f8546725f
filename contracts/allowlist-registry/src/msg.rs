use cosmwasm_schema::cw_serde;

pub use drop_allowlist::AllowlistQueryMsg as QueryMsg;

#[cw_serde]
pub struct InstantiateMsg {
    pub members: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateAdmin { new_admin: String },
    /// Add members to the list. Already-present members are skipped,
    /// so repopulating with the same list is a no-op.
    AddMembers { members: Vec<String> },
    RemoveMembers { members: Vec<String> },
}
