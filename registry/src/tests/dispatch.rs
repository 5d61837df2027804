#![cfg(test)]
//! Tests executing ABI call data against the facade.

use crate::errors::RegistryError;
use crate::facade::CombinationFacade;
use crate::key::CombinationKey;
use crate::ledger::LedgerError;
use crate::tests::fixtures::{ALICE, PROVIDED, R1, R2, combination, three_combinations};
use crate::types::ConsumableCombination;
use alloy_primitives::U256;
use consumable_provider_bindings::calldata::{
    decode_facet_error, decode_valid_combinations, encode_add_combination,
    encode_remove_combination, encode_set_combinations, encode_valid_combinations,
};
use consumable_provider_bindings::contract::IConsumableProviderFacet::IConsumableProviderFacetErrors;

/// Helper function to query the combinations through call data.
fn query(facade: &CombinationFacade) -> Vec<ConsumableCombination> {
    let return_data = facade
        .execute(&encode_valid_combinations())
        .expect("query reverted");
    decode_valid_combinations(&return_data)
        .expect("failed to decode return data")
        .into_iter()
        .map(ConsumableCombination::from)
        .collect()
}

#[test]
fn set_add_remove_through_call_data() {
    let facade = CombinationFacade::new(PROVIDED);

    let set = encode_set_combinations(three_combinations().into_iter().map(Into::into).collect());
    assert_eq!(facade.execute(&set), Ok(Vec::new()));
    assert_eq!(query(&facade), three_combinations());

    let remove = encode_remove_combination(vec![R2, R1]);
    facade.execute(&remove).expect("remove reverted");

    let add = encode_add_combination(combination(&[(R2, 1), (R1, 1)], 4).into());
    facade.execute(&add).expect("add reverted");

    let expected = three_combinations();
    assert_eq!(
        query(&facade),
        vec![
            expected[0].clone(),
            expected[2].clone(),
            combination(&[(R2, 1), (R1, 1)], 4)
        ]
    );
}

#[test]
/// A failing removal reverts with the facet error and leaves the registry unchanged.
fn missing_combination_reverts_with_combination_not_found() {
    let facade = CombinationFacade::new(PROVIDED);
    facade.add_combination(combination(&[(R1, 1)], 1)).unwrap();

    let revert = facade
        .execute(&encode_remove_combination(vec![R1, R2]))
        .unwrap_err();

    assert!(matches!(
        decode_facet_error(&revert).unwrap(),
        IConsumableProviderFacetErrors::CombinationNotFound(_)
    ));
    assert_eq!(query(&facade), vec![combination(&[(R1, 1)], 1)]);
}

#[test]
fn duplicate_add_reverts_with_duplicate_combination_key() {
    let facade = CombinationFacade::new(PROVIDED);
    let add = encode_add_combination(combination(&[(R1, 1)], 1).into());
    facade.execute(&add).unwrap();

    let revert = facade.execute(&add).unwrap_err();

    assert!(matches!(
        decode_facet_error(&revert).unwrap(),
        IConsumableProviderFacetErrors::DuplicateCombinationKey(_)
    ));
}

#[test]
fn invalid_combination_reverts_with_invalid_combination() {
    let facade = CombinationFacade::new(PROVIDED);
    let add = encode_add_combination(combination(&[(R1, 1)], 0).into());

    let revert = facade.execute(&add).unwrap_err();

    assert!(matches!(
        decode_facet_error(&revert).unwrap(),
        IConsumableProviderFacetErrors::InvalidCombination(_)
    ));
}

#[test]
fn unknown_call_data_reverts_without_data() {
    let facade = CombinationFacade::new(PROVIDED);

    assert_eq!(facade.execute(&[0xde, 0xad, 0xbe, 0xef]), Err(Vec::new()));
    assert_eq!(facade.execute(&[]), Err(Vec::new()));
}

#[test]
/// Ledger failures surface as the facet errors a contract caller would see.
fn ledger_errors_map_to_facet_errors() {
    let overdrawn = RegistryError::Ledger(LedgerError::BurnExceedsBalance {
        consumable: R1,
        account: ALICE,
        amount: U256::from(5u64),
        balance: U256::from(2u64),
    });
    match decode_facet_error(&overdrawn.revert_data()).unwrap() {
        IConsumableProviderFacetErrors::InsufficientBalance(err) => {
            assert_eq!(err.consumable, R1);
            assert_eq!(err.required, U256::from(5u64));
            assert_eq!(err.available, U256::from(2u64));
        }
        _ => panic!("expected an insufficient balance error"),
    }

    let overflow = RegistryError::Ledger(LedgerError::MintOverflow {
        consumable: PROVIDED,
        account: ALICE,
        amount: U256::from(1u64),
    });
    assert!(matches!(
        decode_facet_error(&overflow.revert_data()).unwrap(),
        IConsumableProviderFacetErrors::AmountOverflow(_)
    ));

    let not_found = RegistryError::CombinationNotFound(CombinationKey::from_ids([R1]));
    assert!(matches!(
        decode_facet_error(&not_found.revert_data()).unwrap(),
        IConsumableProviderFacetErrors::CombinationNotFound(_)
    ));
}
