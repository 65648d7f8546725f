#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coin, ensure, to_binary, Addr, BankMsg, Deps, DepsMut, Empty, Env, Event, HexBinary,
    MessageInfo, Reply, Response, StdError, SubMsg, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw721_base::{
    ExecuteMsg as Cw721ExecuteMsg, Extension, InstantiateMsg as Cw721InstantiateMsg, MintMsg,
};
use cw_utils::{may_pay, nonpayable, parse_reply_instantiate_data};
use drop_allowlist::AllowlistContract;
use semver::Version;

use crate::error::ContractError;
use crate::merkle;
use crate::msg::{AllowlistSourceMsg, ExecuteMsg, InstantiateMsg, MigrateMsg};
use crate::state::{
    current_phase, AllowlistSource, Config, PaymentPolicy, Phase, PhasePolicy, WalletRecord,
    BASE_URI, COLLECTION, CONFIG, PUBLIC_PHASE, TOTAL_ISSUED, WALLETS,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:drop-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const INIT_COLLECTION_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    ensure!(msg.max_supply > 0, ContractError::ZeroMaxSupply {});
    ensure!(!msg.unit_price.is_zero(), ContractError::ZeroUnitPrice {});
    ensure!(msg.public_limit > 0, ContractError::ZeroPublicLimit {});

    let allowlist = match msg.allowlist {
        AllowlistSourceMsg::MerkleRoot { root } => {
            ensure!(
                root.len() == merkle::HASH_SIZE,
                ContractError::InvalidMerkleRoot {}
            );
            AllowlistSource::MerkleRoot(root)
        }
        AllowlistSourceMsg::Registry { address } => {
            AllowlistSource::Registry(deps.api.addr_validate(&address)?)
        }
    };

    let admin = msg
        .admin
        .map(|admin| deps.api.addr_validate(&admin))
        .transpose()?
        .unwrap_or_else(|| info.sender.clone());

    let config = Config {
        admin,
        max_supply: msg.max_supply,
        unit_price: msg.unit_price,
        mint_denom: msg.mint_denom,
        public_limit: msg.public_limit,
        allowlist,
        phase: msg.phase,
        payment: msg.payment,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_ISSUED.save(deps.storage, &0)?;
    PUBLIC_PHASE.save(deps.storage, &false)?;
    BASE_URI.save(deps.storage, &msg.base_uri)?;

    // the collection is instantiated with this contract as its minter
    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&Cw721InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            minter: env.contract.address.to_string(),
        })?,
        funds: vec![],
        admin: None,
        label: "Drop Collection".to_string(),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_submessage(submsg)
        .add_attribute("admin", config.admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INIT_COLLECTION_REPLY_ID {
        return Err(ContractError::InvalidReplyID {});
    }

    match parse_reply_instantiate_data(msg) {
        Ok(res) => {
            COLLECTION.save(deps.storage, &Addr::unchecked(res.contract_address))?;
            Ok(Response::default().add_attribute("action", "init_collection_reply"))
        }
        Err(_) => Err(ContractError::ReplyOnSuccess {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MintPublic { quantity } => execute_mint_public(deps, env, info, quantity),
        ExecuteMsg::MintAllowlist { proof } => execute_mint_allowlist(deps, env, info, proof),
        ExecuteMsg::MintTo {
            recipient,
            quantity,
        } => execute_mint_to(deps, info, recipient, quantity),
        ExecuteMsg::SetPhasePublic {} => execute_set_phase_public(deps, info),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

pub fn execute_mint_public(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_direct_caller(deps.as_ref(), &info.sender)?;

    if current_phase(deps.storage, &config, env.block.time)? != Phase::Public {
        return Err(ContractError::PresaleActive {});
    }
    ensure!(quantity > 0, ContractError::InvalidQuantity {});

    let total_issued = TOTAL_ISSUED.load(deps.storage)?;
    reserve_supply(total_issued, quantity, config.max_supply)?;

    let mut wallet = WALLETS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    charge_public(&mut wallet, quantity, config.public_limit)?;

    let refund = reconcile_payment(&config, &info, quantity)?;

    // every check passed; commit counters together with the issuance msgs
    WALLETS.save(deps.storage, &info.sender, &wallet)?;
    TOTAL_ISSUED.save(deps.storage, &(total_issued + quantity))?;
    let mint_msgs = issue_msgs(deps.as_ref(), &info.sender, total_issued, quantity)?;

    let mut res = Response::new()
        .add_attribute("action", "mint_public")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("quantity", quantity.to_string())
        .add_messages(mint_msgs);
    if let Some(refund_msg) = refund {
        res = res.add_message(refund_msg);
    }
    Ok(res)
}

pub fn execute_mint_allowlist(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proof: Option<Vec<HexBinary>>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_direct_caller(deps.as_ref(), &info.sender)?;

    if current_phase(deps.storage, &config, env.block.time)? != Phase::Presale {
        return Err(ContractError::PublicSaleActive {});
    }

    let refund = reconcile_payment(&config, &info, 1)?;

    let mut wallet = WALLETS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    ensure!(
        !wallet.allowlist_claimed,
        ContractError::AlreadyClaimedAllowlist {}
    );

    let is_member = match &config.allowlist {
        AllowlistSource::MerkleRoot(root) => {
            let proof = proof.unwrap_or_default();
            merkle::verify_membership(info.sender.as_str(), &proof, root)
        }
        AllowlistSource::Registry(registry) => AllowlistContract(registry.clone())
            .includes(&deps.querier, info.sender.to_string())?,
    };
    ensure!(is_member, ContractError::NotInAllowlist {});

    let total_issued = TOTAL_ISSUED.load(deps.storage)?;
    reserve_supply(total_issued, 1, config.max_supply)?;

    // the claim flag commits only alongside a verified membership
    wallet.allowlist_claimed = true;
    WALLETS.save(deps.storage, &info.sender, &wallet)?;
    TOTAL_ISSUED.save(deps.storage, &(total_issued + 1))?;
    let mint_msgs = issue_msgs(deps.as_ref(), &info.sender, total_issued, 1)?;

    let mut res = Response::new()
        .add_attribute("action", "mint_allowlist")
        .add_attribute("sender", info.sender.to_string())
        .add_messages(mint_msgs);
    if let Some(refund_msg) = refund {
        res = res.add_message(refund_msg);
    }
    Ok(res)
}

pub fn execute_mint_to(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    quantity: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    assert_admin(&config, &info.sender)?;
    ensure!(quantity > 0, ContractError::InvalidQuantity {});

    let recipient = deps.api.addr_validate(&recipient)?;
    let total_issued = TOTAL_ISSUED.load(deps.storage)?;
    reserve_supply(total_issued, quantity, config.max_supply)?;

    TOTAL_ISSUED.save(deps.storage, &(total_issued + quantity))?;
    let mint_msgs = issue_msgs(deps.as_ref(), &recipient, total_issued, quantity)?;

    Ok(Response::new()
        .add_attribute("action", "mint_to")
        .add_attribute("recipient", recipient)
        .add_attribute("quantity", quantity.to_string())
        .add_messages(mint_msgs))
}

pub fn execute_set_phase_public(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    assert_admin(&config, &info.sender)?;

    match config.phase {
        PhasePolicy::AdminToggle => {}
        _ => return Err(ContractError::PhaseNotToggleable {}),
    }

    // one-way; a repeated call is a no-op
    PUBLIC_PHASE.save(deps.storage, &true)?;

    let event = Event::new("set_phase_public").add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    assert_admin(&config, &info.sender)?;

    BASE_URI.save(deps.storage, &base_uri)?;

    let event = Event::new("set_base_uri")
        .add_attribute("base_uri", base_uri.unwrap_or_default())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    assert_admin(&config, &info.sender)?;

    let balance = deps
        .querier
        .query_balance(env.contract.address, &config.mint_denom)?;
    ensure!(!balance.amount.is_zero(), ContractError::TransferFailed {});

    let send_msg = BankMsg::Send {
        to_address: config.admin.to_string(),
        amount: vec![balance.clone()],
    };

    let event = Event::new("withdraw")
        .add_attribute("amount", balance.amount.to_string())
        .add_attribute("recipient", config.admin);
    Ok(Response::new().add_message(send_msg).add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let prev_contract_version = cw2::get_contract_version(deps.storage)?;

    ensure!(
        prev_contract_version.contract == CONTRACT_NAME,
        StdError::generic_err("Invalid contract name for migration")
    );

    let prev_version: Version = prev_contract_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    ensure!(
        prev_version < new_version,
        StdError::generic_err("Must upgrade contract version")
    );

    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_event(
        Event::new("migrate")
            .add_attribute("from_version", prev_contract_version.version)
            .add_attribute("to_version", CONTRACT_VERSION),
    ))
}

/// Heuristic anti-relay gate: the sender must not itself be a contract.
/// Distinguishes direct calls from relayed ones, nothing stronger.
fn assert_direct_caller(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if deps.querier.query_wasm_contract_info(sender).is_ok() {
        return Err(ContractError::CallerIsContract {});
    }
    Ok(())
}

fn assert_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    ensure!(config.admin == *sender, ContractError::AccessDenied {});
    Ok(())
}

/// Checked strictly before any counter is written.
fn reserve_supply(total_issued: u32, quantity: u32, max_supply: u32) -> Result<(), ContractError> {
    match total_issued.checked_add(quantity) {
        Some(next) if next <= max_supply => Ok(()),
        _ => Err(ContractError::ExceedsMaxSupply {}),
    }
}

/// A completed allowlist claim grants one extra public-phase slot.
fn charge_public(
    wallet: &mut WalletRecord,
    quantity: u32,
    public_limit: u32,
) -> Result<(), ContractError> {
    let effective_limit = public_limit.saturating_add(u32::from(wallet.allowlist_claimed));
    match wallet.public_minted.checked_add(quantity) {
        Some(next) if next <= effective_limit => {
            wallet.public_minted = next;
            Ok(())
        }
        _ => Err(ContractError::ExceedsMintLimit {}),
    }
}

/// Validate attached funds against `unit_price * quantity` and, under the
/// refund policy, produce the bank send returning any excess.
fn reconcile_payment(
    config: &Config,
    info: &MessageInfo,
    quantity: u32,
) -> Result<Option<BankMsg>, ContractError> {
    let required = config
        .unit_price
        .checked_mul(Uint128::from(quantity))
        .map_err(StdError::overflow)?;
    let attached = may_pay(info, &config.mint_denom)?;

    match config.payment {
        PaymentPolicy::Exact => {
            ensure!(
                attached == required,
                ContractError::IncorrectPaymentValue {
                    got: attached,
                    expected: required,
                }
            );
            Ok(None)
        }
        PaymentPolicy::RefundExcess => {
            ensure!(
                attached >= required,
                ContractError::InsufficientPayment {
                    got: attached,
                    required,
                }
            );
            let refund = attached - required;
            if refund.is_zero() {
                Ok(None)
            } else {
                Ok(Some(BankMsg::Send {
                    to_address: info.sender.to_string(),
                    amount: vec![coin(refund.u128(), &config.mint_denom)],
                }))
            }
        }
    }
}

/// Mint messages for `quantity` sequential token ids starting after
/// `total_issued`. Ids are 1-based.
fn issue_msgs(
    deps: Deps,
    recipient: &Addr,
    total_issued: u32,
    quantity: u32,
) -> Result<Vec<WasmMsg>, ContractError> {
    let collection = COLLECTION.load(deps.storage)?;
    let base_uri = BASE_URI.load(deps.storage)?;

    let mut msgs = Vec::with_capacity(quantity as usize);
    for offset in 0..quantity {
        let token_id = (total_issued + offset + 1).to_string();
        let mint_msg = Cw721ExecuteMsg::<Extension, Empty>::Mint(MintMsg {
            token_id: token_id.clone(),
            owner: recipient.to_string(),
            token_uri: base_uri.as_ref().map(|base| format!("{base}/{token_id}")),
            extension: None,
        });
        msgs.push(WasmMsg::Execute {
            contract_addr: collection.to_string(),
            msg: to_binary(&mint_msg)?,
            funds: vec![],
        });
    }
    Ok(msgs)
}
