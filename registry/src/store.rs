//! The ordered, set-keyed collection of combinations.
use crate::config::DuplicatePolicy;
use crate::errors::RegistryError::{CombinationNotFound, DuplicateCombinationKey, InvalidCombination};
use crate::errors::RegistryResult;
use crate::key::CombinationKey;
use crate::types::ConsumableCombination;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Holds the registered combinations keyed by their set of required consumables.
///
/// Enumeration follows insertion order. Removal shifts the remaining entries, so their relative
/// order is kept and a combination added after a removal lands at the end.
#[derive(Debug, Default, Clone)]
pub struct CombinationStore {
    combinations: IndexMap<CombinationKey, ConsumableCombination>,
}

impl CombinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every stored combination with `combinations`, in order.
    ///
    /// All inputs are validated before the store is touched. A key that appears twice in
    /// `combinations` is handled according to `policy`: `Reject` fails the whole call, while
    /// `Overwrite` keeps the position of the first occurrence and the value of the last.
    pub fn replace_all(
        &mut self,
        combinations: Vec<ConsumableCombination>,
        policy: DuplicatePolicy,
    ) -> RegistryResult<()> {
        let mut replacement = IndexMap::with_capacity(combinations.len());

        for combination in combinations {
            combination.validate().map_err(InvalidCombination)?;
            match replacement.entry(combination.key()) {
                Entry::Vacant(entry) => {
                    entry.insert(combination);
                }
                Entry::Occupied(mut entry) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(DuplicateCombinationKey(entry.key().clone()));
                    }
                    DuplicatePolicy::Overwrite => {
                        entry.insert(combination);
                    }
                },
            }
        }

        self.combinations = replacement;
        Ok(())
    }

    /// Appends a combination. Fails if its key is already registered.
    pub fn add(&mut self, combination: ConsumableCombination) -> RegistryResult<()> {
        combination.validate().map_err(InvalidCombination)?;

        let key = combination.key();
        if self.combinations.contains_key(&key) {
            return Err(DuplicateCombinationKey(key));
        }

        self.combinations.insert(key, combination);
        Ok(())
    }

    /// Removes the combination registered under `key` and returns it.
    pub fn remove(&mut self, key: &CombinationKey) -> RegistryResult<ConsumableCombination> {
        self.combinations
            .shift_remove(key)
            .ok_or_else(|| CombinationNotFound(key.clone()))
    }

    pub fn get(&self, key: &CombinationKey) -> Option<&ConsumableCombination> {
        self.combinations.get(key)
    }

    /// A snapshot of every combination in registration order.
    pub fn list_all(&self) -> Vec<ConsumableCombination> {
        self.combinations.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}
