#![cfg(test)]
//! Tests the facade operations, including their behaviour under concurrent access.

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::errors::RegistryError;
use crate::facade::CombinationFacade;
use crate::key::CombinationKey;
use crate::tests::fixtures::{PROVIDED, R1, R2, R3, combination, three_combinations};
use alloy_primitives::Address;
use std::thread;

#[test]
/// Walks through adding two combinations, removing one, and failing to remove it again.
fn add_remove_scenario() {
    let facade = CombinationFacade::new(PROVIDED);
    assert!(facade.valid_combinations().is_empty());

    let single = combination(&[(R1, 1)], 1);
    facade.add_combination(single.clone()).unwrap();
    assert_eq!(facade.valid_combinations(), vec![single.clone()]);

    let pair = combination(&[(R1, 1), (R2, 2)], 1);
    facade.add_combination(pair.clone()).unwrap();
    assert_eq!(facade.valid_combinations(), vec![single.clone(), pair]);

    facade.remove_combination(&[R1, R2]).unwrap();
    assert_eq!(facade.valid_combinations(), vec![single.clone()]);

    let err = facade.remove_combination(&[R1, R2]).unwrap_err();
    assert_eq!(
        err,
        RegistryError::CombinationNotFound(CombinationKey::from_ids([R1, R2]))
    );
    assert_eq!(facade.valid_combinations(), vec![single]);
}

#[test]
fn set_combinations_replaces_everything() {
    let facade = CombinationFacade::new(PROVIDED);
    facade.add_combination(combination(&[(R3, 3)], 3)).unwrap();

    facade.set_combinations(three_combinations()).unwrap();

    assert_eq!(facade.valid_combinations(), three_combinations());
}

#[test]
fn set_combinations_follows_the_duplicate_policy() {
    let duplicates = vec![
        combination(&[(R1, 1)], 1),
        combination(&[(R1, 2)], 2),
    ];

    let rejecting = CombinationFacade::new(PROVIDED);
    assert!(matches!(
        rejecting.set_combinations(duplicates.clone()),
        Err(RegistryError::DuplicateCombinationKey(_))
    ));
    assert!(rejecting.valid_combinations().is_empty());

    let overwriting =
        CombinationFacade::new(PROVIDED).with_duplicate_policy(DuplicatePolicy::Overwrite);
    overwriting.set_combinations(duplicates).unwrap();
    assert_eq!(
        overwriting.valid_combinations(),
        vec![combination(&[(R1, 2)], 2)]
    );
}

#[test]
fn from_config_seeds_initial_combinations() {
    let config = RegistryConfig {
        provided_consumable: PROVIDED,
        duplicate_policy: DuplicatePolicy::Overwrite,
        initial_combinations: three_combinations(),
    };

    let facade = CombinationFacade::from_config(&config).unwrap();

    assert_eq!(facade.provided_consumable(), PROVIDED);
    assert_eq!(facade.duplicate_policy(), DuplicatePolicy::Overwrite);
    assert_eq!(facade.valid_combinations(), three_combinations());
}

#[test]
fn from_config_rejects_invalid_initial_combinations() {
    let config = RegistryConfig {
        provided_consumable: PROVIDED,
        duplicate_policy: DuplicatePolicy::Reject,
        initial_combinations: vec![combination(&[(R1, 1)], 0)],
    };

    assert!(matches!(
        CombinationFacade::from_config(&config),
        Err(RegistryError::InvalidCombination(_))
    ));
}

#[test]
/// Readers racing a writer that swaps between two lists only ever see one of the two lists.
fn readers_never_observe_a_partial_replacement() {
    let facade = CombinationFacade::new(PROVIDED);
    let short = vec![combination(&[(R1, 1)], 1)];
    let long = three_combinations();
    facade.set_combinations(short.clone()).unwrap();

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..200 {
                let next = if i % 2 == 0 { long.clone() } else { short.clone() };
                facade.set_combinations(next).unwrap();
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let snapshot = facade.valid_combinations();
                    assert!(snapshot == short || snapshot == long);
                }
            });
        }
    });
}

#[test]
/// Concurrent writers each keep their own additions in call order.
fn concurrent_adds_are_all_applied() {
    let facade = CombinationFacade::new(PROVIDED);
    let writers = 4u8;
    let per_writer = 25u8;

    // A distinct consumable per writer and index keeps every key unique.
    let consumable = |writer: u8, index: u8| {
        let mut bytes = [0u8; 20];
        bytes[0] = writer + 1;
        bytes[19] = index + 1;
        Address::from(bytes)
    };

    thread::scope(|scope| {
        for writer in 0..writers {
            let facade = &facade;
            scope.spawn(move || {
                for index in 0..per_writer {
                    facade
                        .add_combination(combination(&[(consumable(writer, index), 1)], 1))
                        .unwrap();
                }
            });
        }
    });

    let listed = facade.valid_combinations();
    assert_eq!(listed.len(), usize::from(writers) * usize::from(per_writer));

    for writer in 0..writers {
        let order: Vec<Address> = listed
            .iter()
            .map(|c| c.required_consumables[0].consumable)
            .filter(|address| address.0[0] == writer + 1)
            .collect();
        let expected: Vec<Address> = (0..per_writer).map(|i| consumable(writer, i)).collect();
        assert_eq!(order, expected);
    }
}
