//! The token ledger the provide operation burns from and mints into.
//!
//! The registry does not own balances. Callers plug in their ledger through the
//! `ConsumableLedger` trait; `InMemoryLedger` is a plain map based implementation.
use alloy_primitives::{Address, U256};
use std::collections::HashMap;
use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Cannot burn {amount} of consumable {consumable} from {account}: the balance is {balance}.")]
    BurnExceedsBalance {
        consumable: Address,
        account: Address,
        amount: U256,
        balance: U256,
    },
    #[error("Minting {amount} of consumable {consumable} to {account} overflows the balance.")]
    MintOverflow {
        consumable: Address,
        account: Address,
        amount: U256,
    },
}

/// Balances of fungible consumables per account.
pub trait ConsumableLedger {
    fn balance_of(&self, consumable: Address, account: Address) -> U256;

    fn burn(&mut self, consumable: Address, account: Address, amount: U256) -> LedgerResult<()>;

    fn mint(&mut self, consumable: Address, account: Address, amount: U256) -> LedgerResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    balances: HashMap<(Address, Address), U256>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ledger with the balance of `account` in `consumable` set to `amount`.
    pub fn with_balance(mut self, consumable: Address, account: Address, amount: U256) -> Self {
        self.balances.insert((consumable, account), amount);
        self
    }
}

impl ConsumableLedger for InMemoryLedger {
    fn balance_of(&self, consumable: Address, account: Address) -> U256 {
        self.balances
            .get(&(consumable, account))
            .copied()
            .unwrap_or_default()
    }

    fn burn(&mut self, consumable: Address, account: Address, amount: U256) -> LedgerResult<()> {
        let balance = self.balance_of(consumable, account);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(LedgerError::BurnExceedsBalance {
                consumable,
                account,
                amount,
                balance,
            })?;
        self.balances.insert((consumable, account), remaining);
        Ok(())
    }

    fn mint(&mut self, consumable: Address, account: Address, amount: U256) -> LedgerResult<()> {
        let balance = self
            .balance_of(consumable, account)
            .checked_add(amount)
            .ok_or(LedgerError::MintOverflow {
                consumable,
                account,
                amount,
            })?;
        self.balances.insert((consumable, account), balance);
        Ok(())
    }
}
