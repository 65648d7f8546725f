#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Env, HexBinary, StdResult};

use crate::msg::{ConfigResponse, QueryMsg, WalletResponse};
use crate::state::{
    current_phase, AllowlistSource, Phase, COLLECTION, CONFIG, TOTAL_ISSUED, WALLETS,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Phase {} => to_binary(&query_phase(deps, env)?),
        QueryMsg::TotalIssued {} => to_binary(&TOTAL_ISSUED.load(deps.storage)?),
        QueryMsg::Collection {} => to_binary(&COLLECTION.load(deps.storage)?),
        QueryMsg::Wallet { address } => to_binary(&query_wallet(deps, address)?),
        QueryMsg::MerkleRoot {} => to_binary(&query_merkle_root(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse { config })
}

fn query_phase(deps: Deps, env: Env) -> StdResult<Phase> {
    let config = CONFIG.load(deps.storage)?;
    current_phase(deps.storage, &config, env.block.time)
}

fn query_merkle_root(deps: Deps) -> StdResult<Option<HexBinary>> {
    let config = CONFIG.load(deps.storage)?;
    Ok(match config.allowlist {
        AllowlistSource::MerkleRoot(root) => Some(root),
        AllowlistSource::Registry(_) => None,
    })
}

fn query_wallet(deps: Deps, address: String) -> StdResult<WalletResponse> {
    let config = CONFIG.load(deps.storage)?;
    let addr = deps.api.addr_validate(&address)?;
    let wallet = WALLETS.may_load(deps.storage, &addr)?.unwrap_or_default();

    let effective_limit = config
        .public_limit
        .saturating_add(u32::from(wallet.allowlist_claimed));
    Ok(WalletResponse {
        public_minted: wallet.public_minted,
        allowlist_claimed: wallet.allowlist_claimed,
        public_remaining: effective_limit.saturating_sub(wallet.public_minted),
    })
}
