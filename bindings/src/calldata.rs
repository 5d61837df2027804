use crate::contract::ConsumableCombination;
use crate::contract::IConsumableProviderFacet::{
    IConsumableProviderFacetCalls, IConsumableProviderFacetErrors,
    addConsumableCombinationCall, removeConsumableCombinationCall,
    setConsumableCombinationsCall, validConsumableCombinationsCall,
};
use crate::contract::IDiamondCut::{FacetCut, FacetCutAction, diamondCutCall};
use alloy_primitives::{Address, Bytes, FixedBytes};
use alloy_sol_types::{SolCall, SolInterface, SolValue};
use thiserror::Error;

pub type BindingsResult<T> = Result<T, BindingsError>;

#[derive(Error, Debug)]
pub enum BindingsError {
    #[error("The call data could not be ABI decoded: {0}")]
    CallDataDecoding(alloy_sol_types::Error),
    #[error("The return data could not be ABI decoded: {0}")]
    ReturnDataDecoding(alloy_sol_types::Error),
    #[error("The revert data could not be ABI decoded: {0}")]
    RevertDataDecoding(alloy_sol_types::Error),
}

/// Encodes a `setConsumableCombinations` call.
pub fn encode_set_combinations(combinations: Vec<ConsumableCombination>) -> Vec<u8> {
    setConsumableCombinationsCall { combinations }.abi_encode()
}

/// Encodes an `addConsumableCombination` call.
pub fn encode_add_combination(combination: ConsumableCombination) -> Vec<u8> {
    addConsumableCombinationCall { combination }.abi_encode()
}

/// Encodes a `removeConsumableCombination` call for the given required consumables.
pub fn encode_remove_combination(required_consumables: Vec<Address>) -> Vec<u8> {
    removeConsumableCombinationCall {
        requiredConsumables: required_consumables,
    }
    .abi_encode()
}

/// Encodes a `validConsumableCombinations` call. The function takes no arguments, so the call
/// data is the selector alone.
pub fn encode_valid_combinations() -> Vec<u8> {
    validConsumableCombinationsCall::SELECTOR.to_vec()
}

/// Encodes the return data of `validConsumableCombinations`.
pub fn encode_valid_combinations_return(combinations: Vec<ConsumableCombination>) -> Vec<u8> {
    combinations.abi_encode()
}

/// Decodes the return data of `validConsumableCombinations`.
pub fn decode_valid_combinations(return_data: &[u8]) -> BindingsResult<Vec<ConsumableCombination>> {
    Vec::<ConsumableCombination>::abi_decode(return_data).map_err(BindingsError::ReturnDataDecoding)
}

/// Decodes call data addressed to the consumable provider facet.
pub fn decode_facet_call(calldata: &[u8]) -> BindingsResult<IConsumableProviderFacetCalls> {
    IConsumableProviderFacetCalls::abi_decode(calldata).map_err(BindingsError::CallDataDecoding)
}

/// Decodes revert data produced by the consumable provider facet.
pub fn decode_facet_error(revert_data: &[u8]) -> BindingsResult<IConsumableProviderFacetErrors> {
    IConsumableProviderFacetErrors::abi_decode(revert_data)
        .map_err(BindingsError::RevertDataDecoding)
}

/// Returns the selectors of every function the facet exposes.
pub fn facet_selectors() -> Vec<FixedBytes<4>> {
    vec![
        FixedBytes::from(setConsumableCombinationsCall::SELECTOR),
        FixedBytes::from(addConsumableCombinationCall::SELECTOR),
        FixedBytes::from(removeConsumableCombinationCall::SELECTOR),
        FixedBytes::from(validConsumableCombinationsCall::SELECTOR),
    ]
}

/// Encodes the `diamondCut` call that adds the facet to a diamond and initializes it with the
/// given combinations.
///
/// The facet itself is the init target: the diamond delegatecalls it with the
/// `setConsumableCombinations` call data after the cut.
pub fn encode_diamond_init(facet: Address, combinations: Vec<ConsumableCombination>) -> Vec<u8> {
    diamondCutCall {
        cuts: vec![FacetCut {
            facetAddress: facet,
            action: FacetCutAction::Add,
            functionSelectors: facet_selectors(),
        }],
        init: facet,
        initCalldata: Bytes::from(encode_set_combinations(combinations)),
    }
    .abi_encode()
}

#[test]
fn valid_combinations_call_is_selector_only() {
    let calldata = encode_valid_combinations();
    assert_eq!(calldata.len(), 4);
    assert_eq!(calldata, validConsumableCombinationsCall::SELECTOR);
}

#[test]
fn facet_selectors_are_distinct() {
    let selectors = facet_selectors();
    for (i, a) in selectors.iter().enumerate() {
        for b in selectors.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
