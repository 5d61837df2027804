//! Conversions between the registry types and their Solidity ABI counterparts.
use crate::types::{ConsumableAmount, ConsumableCombination};
use consumable_provider_bindings::contract as abi;

impl From<abi::ConsumableAmount> for ConsumableAmount {
    fn from(amount: abi::ConsumableAmount) -> Self {
        ConsumableAmount {
            consumable: amount.consumable,
            amount: amount.amount,
        }
    }
}

impl From<ConsumableAmount> for abi::ConsumableAmount {
    fn from(amount: ConsumableAmount) -> Self {
        abi::ConsumableAmount {
            consumable: amount.consumable,
            amount: amount.amount,
        }
    }
}

impl From<abi::ConsumableCombination> for ConsumableCombination {
    fn from(combination: abi::ConsumableCombination) -> Self {
        ConsumableCombination {
            required_consumables: combination
                .requiredConsumables
                .into_iter()
                .map(ConsumableAmount::from)
                .collect(),
            amount_provided: combination.amountProvided,
        }
    }
}

impl From<ConsumableCombination> for abi::ConsumableCombination {
    fn from(combination: ConsumableCombination) -> Self {
        abi::ConsumableCombination {
            requiredConsumables: combination
                .required_consumables
                .into_iter()
                .map(abi::ConsumableAmount::from)
                .collect(),
            amountProvided: combination.amount_provided,
        }
    }
}
