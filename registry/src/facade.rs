//! The command and query surface of the registry.
use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::errors::RegistryError::{
    AmountOverflow, CombinationNotFound, InsufficientBalance, Ledger, ZeroProvideAmount,
};
use crate::errors::RegistryResult;
use crate::key::CombinationKey;
use crate::ledger::ConsumableLedger;
use crate::store::CombinationStore;
use crate::types::ConsumableCombination;
use alloy_primitives::{Address, U256};
use log::{debug, info, warn};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One provider facet instance: the combinations it accepts and the consumable it mints.
///
/// Mutations take the write lock for their whole duration, so a query never sees a
/// half-applied change.
#[derive(Debug)]
pub struct CombinationFacade {
    store: RwLock<CombinationStore>,
    provided_consumable: Address,
    duplicate_policy: DuplicatePolicy,
}

impl CombinationFacade {
    /// Creates an empty registry that mints `provided_consumable`.
    pub fn new(provided_consumable: Address) -> Self {
        CombinationFacade {
            store: RwLock::new(CombinationStore::new()),
            provided_consumable,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }

    /// Creates a registry from the config and seeds it with the configured combinations.
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        let facade = CombinationFacade::new(config.provided_consumable)
            .with_duplicate_policy(config.duplicate_policy);
        if !config.initial_combinations.is_empty() {
            facade.set_combinations(config.initial_combinations.clone())?;
        }
        Ok(facade)
    }

    pub fn provided_consumable(&self) -> Address {
        self.provided_consumable
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    // Every mutation validates before it writes, so a poisoned lock still guards a consistent
    // store.
    fn read(&self) -> RwLockReadGuard<'_, CombinationStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CombinationStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces all registered combinations.
    pub fn set_combinations(&self, combinations: Vec<ConsumableCombination>) -> RegistryResult<()> {
        let count = combinations.len();
        self.write()
            .replace_all(combinations, self.duplicate_policy)
            .inspect_err(|err| warn!("rejected setting {count} combinations: {err}"))?;
        info!("set {count} consumable combinations");
        Ok(())
    }

    /// Registers a new combination after the existing ones.
    pub fn add_combination(&self, combination: ConsumableCombination) -> RegistryResult<()> {
        let key = combination.key();
        self.write()
            .add(combination)
            .inspect_err(|err| warn!("rejected adding combination {key}: {err}"))?;
        info!("added combination {key}");
        Ok(())
    }

    /// Removes the combination whose required consumables are exactly `required_consumables`,
    /// in any order.
    pub fn remove_combination(&self, required_consumables: &[Address]) -> RegistryResult<()> {
        let key = CombinationKey::from(required_consumables);
        self.write()
            .remove(&key)
            .inspect_err(|err| warn!("rejected removing combination: {err}"))?;
        info!("removed combination {key}");
        Ok(())
    }

    /// A snapshot of the registered combinations in registration order.
    pub fn valid_combinations(&self) -> Vec<ConsumableCombination> {
        self.read().list_all()
    }

    /// Burns `times` the required amounts of the combination keyed by `required_consumables`
    /// from `account` and mints `times` its provided amount to `account`. Returns the minted
    /// amount.
    ///
    /// Every balance is checked before the first burn, so an error leaves the ledger untouched.
    pub fn provide<L: ConsumableLedger>(
        &self,
        ledger: &mut L,
        account: Address,
        required_consumables: &[Address],
        times: U256,
    ) -> RegistryResult<U256> {
        if times.is_zero() {
            return Err(ZeroProvideAmount);
        }

        let key = CombinationKey::from(required_consumables);
        let store = self.read();
        let combination = store.get(&key).ok_or_else(|| CombinationNotFound(key.clone()))?;
        debug!("providing {times} times combination {key} for {account}");

        let minted = combination
            .amount_provided
            .checked_mul(times)
            .ok_or(AmountOverflow)?;
        let burns = combination
            .required_consumables
            .iter()
            .map(|required| {
                required
                    .amount
                    .checked_mul(times)
                    .map(|amount| (required.consumable, amount))
                    .ok_or(AmountOverflow)
            })
            .collect::<RegistryResult<Vec<_>>>()?;

        for (consumable, required) in &burns {
            let available = ledger.balance_of(*consumable, account);
            if available < *required {
                warn!("insufficient balance of {consumable} for {account}");
                return Err(InsufficientBalance {
                    consumable: *consumable,
                    required: *required,
                    available,
                });
            }
        }
        ledger
            .balance_of(self.provided_consumable, account)
            .checked_add(minted)
            .ok_or(AmountOverflow)?;

        for (consumable, amount) in burns {
            ledger.burn(consumable, account, amount).map_err(Ledger)?;
        }
        ledger
            .mint(self.provided_consumable, account, minted)
            .map_err(Ledger)?;

        info!("minted {minted} of {} to {account}", self.provided_consumable);
        Ok(minted)
    }
}
