use alloy_primitives::Address;
use itertools::Itertools;
use std::fmt;

/// The identity of a combination in the registry: the set of its required consumables.
///
/// The addresses are kept sorted and deduplicated, so two keys built from the same consumables
/// in a different order are equal and hash alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationKey(Vec<Address>);

impl CombinationKey {
    pub fn from_ids<I: IntoIterator<Item = Address>>(ids: I) -> Self {
        CombinationKey(ids.into_iter().sorted().dedup().collect())
    }

    /// The consumables of this key in ascending address order.
    pub fn consumables(&self) -> &[Address] {
        &self.0
    }

    pub fn contains(&self, consumable: &Address) -> bool {
        self.0.binary_search(consumable).is_ok()
    }
}

impl FromIterator<Address> for CombinationKey {
    fn from_iter<T: IntoIterator<Item = Address>>(iter: T) -> Self {
        CombinationKey::from_ids(iter)
    }
}

impl From<&[Address]> for CombinationKey {
    fn from(ids: &[Address]) -> Self {
        CombinationKey::from_ids(ids.iter().copied())
    }
}

impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}
