use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, WasmQuery};

/// Query interface every allowlist source must answer. The minter only
/// depends on membership lookups, so any contract exposing these queries
/// can back the registry allowlist mode.
#[cw_serde]
#[derive(QueryResponses)]
pub enum AllowlistQueryMsg {
    /// Query if an address is a member of the list
    #[returns(bool)]
    IncludesAddress { address: String },
    /// Query the current list admin
    #[returns(Addr)]
    Admin {},
    /// Query the number of members
    #[returns(u64)]
    MemberCount {},
}

/// AllowlistContract is a wrapper around Addr that provides typed queries
#[cw_serde]
pub struct AllowlistContract(pub Addr);

impl AllowlistContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn includes(&self, querier: &QuerierWrapper, address: String) -> StdResult<bool> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&AllowlistQueryMsg::IncludesAddress { address })?,
        }))
    }

    pub fn member_count(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&AllowlistQueryMsg::MemberCount {})?,
        }))
    }
}
