use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("PresaleActive")]
    PresaleActive {},

    #[error("PublicSaleActive")]
    PublicSaleActive {},

    #[error("InvalidQuantity")]
    InvalidQuantity {},

    #[error("ExceedsMaxSupply")]
    ExceedsMaxSupply {},

    #[error("ExceedsMintLimit")]
    ExceedsMintLimit {},

    #[error("NotInAllowlist")]
    NotInAllowlist {},

    #[error("AlreadyClaimedAllowlist")]
    AlreadyClaimedAllowlist {},

    #[error("IncorrectPaymentValue: got {got}, expected {expected}")]
    IncorrectPaymentValue { got: Uint128, expected: Uint128 },

    #[error("InsufficientPayment: got {got}, required {required}")]
    InsufficientPayment { got: Uint128, required: Uint128 },

    #[error("CallerIsContract")]
    CallerIsContract {},

    #[error("AccessDenied")]
    AccessDenied {},

    #[error("TransferFailed")]
    TransferFailed {},

    #[error("PhaseNotToggleable")]
    PhaseNotToggleable {},

    #[error("InvalidMerkleRoot")]
    InvalidMerkleRoot {},

    #[error("ZeroMaxSupply")]
    ZeroMaxSupply {},

    #[error("ZeroUnitPrice")]
    ZeroUnitPrice {},

    #[error("ZeroPublicLimit")]
    ZeroPublicLimit {},

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Reply error")]
    ReplyOnSuccess {},
}
