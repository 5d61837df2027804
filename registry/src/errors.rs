use crate::key::CombinationKey;
use crate::ledger::LedgerError;
use alloy_primitives::{Address, U256};
use thiserror::Error;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors returned by the combination registry. A failed operation never leaves a partial
/// mutation behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No combination is registered for the consumables {0}.")]
    CombinationNotFound(CombinationKey),
    #[error("A combination is already registered for the consumables {0}.")]
    DuplicateCombinationKey(CombinationKey),
    #[error("The combination is invalid: {0}")]
    InvalidCombination(InvalidCombinationReason),
    #[error("The number of combinations to provide must be greater than zero.")]
    ZeroProvideAmount,
    #[error("The amount to burn or mint does not fit in 256 bits.")]
    AmountOverflow,
    #[error(
        "The balance of consumable {consumable} is insufficient: {required} required, {available} available."
    )]
    InsufficientBalance {
        consumable: Address,
        required: U256,
        available: U256,
    },
    #[error("The ledger rejected the operation: {0}")]
    Ledger(LedgerError),
    #[error("The call data could not be decoded: {0}")]
    Decoding(String),
}

/// The invariant a rejected combination violates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCombinationReason {
    #[error("it requires no consumables.")]
    NoRequiredConsumables,
    #[error("it provides a zero amount.")]
    ZeroAmountProvided,
    #[error("it requires a zero amount of consumable {0}.")]
    ZeroRequiredAmount(Address),
    #[error("consumable {0} is listed more than once.")]
    RepeatedConsumable(Address),
}
