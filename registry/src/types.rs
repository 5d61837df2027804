use crate::errors::InvalidCombinationReason;
use crate::key::CombinationKey;
use alloy_primitives::{Address, U256};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// An amount of a single consumable.
///
/// Amounts are 256-bit and serialize as decimal strings, so values beyond the 64-bit range
/// survive a JSON round trip.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumableAmount {
    /// Address of the consumable.
    pub consumable: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: U256,
}

impl ConsumableAmount {
    pub fn new(consumable: Address, amount: U256) -> Self {
        ConsumableAmount { consumable, amount }
    }
}

/// A rule that mints `amount_provided` of the provided consumable when every required consumable
/// is burned in its listed amount.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumableCombination {
    /// The required consumables, in the order they were submitted.
    pub required_consumables: Vec<ConsumableAmount>,
    #[serde_as(as = "DisplayFromStr")]
    pub amount_provided: U256,
}

impl ConsumableCombination {
    pub fn new(required_consumables: Vec<ConsumableAmount>, amount_provided: U256) -> Self {
        ConsumableCombination {
            required_consumables,
            amount_provided,
        }
    }

    /// The addresses of the required consumables, in submission order.
    pub fn required_ids(&self) -> impl Iterator<Item = Address> + '_ {
        self.required_consumables.iter().map(|required| required.consumable)
    }

    /// The registry key of this combination: the set of its required consumables.
    pub fn key(&self) -> CombinationKey {
        CombinationKey::from_ids(self.required_ids())
    }

    /// Checks the invariants every registered combination must hold.
    pub fn validate(&self) -> Result<(), InvalidCombinationReason> {
        if self.required_consumables.is_empty() {
            return Err(InvalidCombinationReason::NoRequiredConsumables);
        }

        if self.amount_provided.is_zero() {
            return Err(InvalidCombinationReason::ZeroAmountProvided);
        }

        if let Some(required) = self
            .required_consumables
            .iter()
            .find(|required| required.amount.is_zero())
        {
            return Err(InvalidCombinationReason::ZeroRequiredAmount(
                required.consumable,
            ));
        }

        if let Some(repeated) = self.required_ids().duplicates().next() {
            return Err(InvalidCombinationReason::RepeatedConsumable(repeated));
        }

        Ok(())
    }
}
