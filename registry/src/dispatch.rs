//! Executes ABI encoded facet calls against a registry, the way the diamond proxy forwards
//! them to the facet.
use crate::errors::{RegistryError, RegistryResult};
use crate::facade::CombinationFacade;
use crate::ledger::LedgerError;
use crate::types::ConsumableCombination;
use alloy_sol_types::SolError;
use consumable_provider_bindings::calldata::{decode_facet_call, encode_valid_combinations_return};
use consumable_provider_bindings::contract::IConsumableProviderFacet as facet;
use consumable_provider_bindings::contract::IConsumableProviderFacet::IConsumableProviderFacetCalls;

impl CombinationFacade {
    /// Executes `calldata` addressed to the consumable provider facet.
    ///
    /// Returns the ABI encoded return data on success, or the ABI encoded revert data of the
    /// failure.
    pub fn execute(&self, calldata: &[u8]) -> Result<Vec<u8>, Vec<u8>> {
        self.execute_call(calldata).map_err(|err| err.revert_data())
    }

    fn execute_call(&self, calldata: &[u8]) -> RegistryResult<Vec<u8>> {
        let call = decode_facet_call(calldata)
            .map_err(|err| RegistryError::Decoding(err.to_string()))?;

        match call {
            IConsumableProviderFacetCalls::setConsumableCombinations(call) => {
                let combinations = call
                    .combinations
                    .into_iter()
                    .map(ConsumableCombination::from)
                    .collect();
                self.set_combinations(combinations)?;
                Ok(Vec::new())
            }
            IConsumableProviderFacetCalls::addConsumableCombination(call) => {
                self.add_combination(call.combination.into())?;
                Ok(Vec::new())
            }
            IConsumableProviderFacetCalls::removeConsumableCombination(call) => {
                self.remove_combination(&call.requiredConsumables)?;
                Ok(Vec::new())
            }
            IConsumableProviderFacetCalls::validConsumableCombinations(_) => {
                let combinations = self
                    .valid_combinations()
                    .into_iter()
                    .map(Into::into)
                    .collect();
                Ok(encode_valid_combinations_return(combinations))
            }
        }
    }
}

impl RegistryError {
    /// The revert data the facet returns for this error.
    ///
    /// Call data that matches no facet function reverts without data.
    pub fn revert_data(&self) -> Vec<u8> {
        match self {
            RegistryError::CombinationNotFound(_) => facet::CombinationNotFound::SELECTOR.to_vec(),
            RegistryError::DuplicateCombinationKey(_) => {
                facet::DuplicateCombinationKey::SELECTOR.to_vec()
            }
            RegistryError::InvalidCombination(_) => facet::InvalidCombination::SELECTOR.to_vec(),
            RegistryError::ZeroProvideAmount => facet::ZeroProvideAmount::SELECTOR.to_vec(),
            RegistryError::AmountOverflow
            | RegistryError::Ledger(LedgerError::MintOverflow { .. }) => {
                facet::AmountOverflow::SELECTOR.to_vec()
            }
            RegistryError::InsufficientBalance {
                consumable,
                required,
                available,
            } => facet::InsufficientBalance {
                consumable: *consumable,
                required: *required,
                available: *available,
            }
            .abi_encode(),
            RegistryError::Ledger(LedgerError::BurnExceedsBalance {
                consumable,
                amount,
                balance,
                ..
            }) => facet::InsufficientBalance {
                consumable: *consumable,
                required: *amount,
                available: *balance,
            }
            .abi_encode(),
            RegistryError::Decoding(_) => Vec::new(),
        }
    }
}
