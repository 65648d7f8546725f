use crate::state::{Config, CONFIG, MEMBERS, MEMBER_COUNT};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:allowlist-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    mut msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config { admin: info.sender };

    // remove duplicate addresses
    msg.members.sort_unstable();
    msg.members.dedup();

    let mut count = 0u64;
    for member in msg.members.into_iter() {
        let addr = deps.api.addr_validate(&member)?;
        MEMBERS.save(deps.storage, &addr, &Empty {})?;
        count += 1;
    }

    MEMBER_COUNT.save(deps.storage, &count)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    match msg {
        ExecuteMsg::UpdateAdmin { new_admin } => execute_update_admin(deps, info, new_admin),
        ExecuteMsg::AddMembers { members } => execute_add_members(deps, info, members),
        ExecuteMsg::RemoveMembers { members } => execute_remove_members(deps, info, members),
    }
}

pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::AccessDenied {});
    }

    config.admin = deps.api.addr_validate(&new_admin)?;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("update_admin")
        .add_attribute("new_admin", config.admin)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_add_members(
    deps: DepsMut,
    info: MessageInfo,
    mut members: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut count = MEMBER_COUNT.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::AccessDenied {});
    }

    // dedupe
    members.sort_unstable();
    members.dedup();

    for member in members.into_iter() {
        let addr = deps.api.addr_validate(&member)?;
        // idempotent: re-adding an existing member is a no-op
        if !MEMBERS.has(deps.storage, &addr) {
            MEMBERS.save(deps.storage, &addr, &Empty {})?;
            count += 1;
        }
    }

    MEMBER_COUNT.save(deps.storage, &count)?;

    let event = Event::new("add_members")
        .add_attribute("new-count", count.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_remove_members(
    deps: DepsMut,
    info: MessageInfo,
    mut members: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut count = MEMBER_COUNT.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::AccessDenied {});
    }

    // dedupe
    members.sort_unstable();
    members.dedup();

    for member in members.into_iter() {
        let addr = deps.api.addr_validate(&member)?;
        if MEMBERS.has(deps.storage, &addr) {
            MEMBERS.remove(deps.storage, &addr);
            count -= 1;
        } else {
            return Err(ContractError::MemberNotFound {
                addr: addr.to_string(),
            });
        }
    }

    MEMBER_COUNT.save(deps.storage, &count)?;

    let event = Event::new("remove_members")
        .add_attribute("new-count", count.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IncludesAddress { address } => to_binary(&query_includes_address(deps, address)?),
        QueryMsg::Admin {} => to_binary(&query_admin(deps)?),
        QueryMsg::MemberCount {} => to_binary(&query_member_count(deps)?),
    }
}

pub fn query_includes_address(deps: Deps, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(MEMBERS.has(deps.storage, &addr))
}

pub fn query_admin(deps: Deps) -> StdResult<Addr> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.admin)
}

pub fn query_member_count(deps: Deps) -> StdResult<u64> {
    MEMBER_COUNT.load(deps.storage)
}
