//! The combination registry of a consumable provider facet.
//!
//! A combination converts a set of required consumables into an amount of the provided
//! consumable. The registry keeps combinations in registration order, keyed by the set of their
//! required consumables, and exposes the facet operations both as methods on
//! [`CombinationFacade`] and as ABI call data through [`CombinationFacade::execute`].
pub mod config;
pub mod conversion;
pub mod dispatch;
pub mod errors;
pub mod facade;
pub mod key;
pub mod ledger;
pub mod store;
pub mod types;

mod tests;

pub use config::{DuplicatePolicy, RegistryConfig, load_config};
pub use errors::{InvalidCombinationReason, RegistryError, RegistryResult};
pub use facade::CombinationFacade;
pub use key::CombinationKey;
pub use ledger::{ConsumableLedger, InMemoryLedger, LedgerError};
pub use store::CombinationStore;
pub use types::{ConsumableAmount, ConsumableCombination};
